//! In-memory document model
//!
//! The host page is represented as an arena tree of elements and text
//! nodes. Everything above this module (binder, widgets, charts) reads and
//! mutates the page only through [`Document`].
//!
//! ```text
//! &str markup ─parse─▶ Document ─mutate─▶ Document ─inner_html─▶ String
//! ```

mod document;
mod node;
mod parser;
mod selector;
mod serialize;
mod style;

pub use document::{Ancestors, Document};
pub use node::{is_block_tag, is_text_block_tag, is_void_tag, Element, NodeId, NodeKind};
pub use parser::decode_character_references;
pub use selector::Selector;
pub use serialize::{escape_attr, escape_text};
pub use style::{parse_declarations, serialize_declarations};
