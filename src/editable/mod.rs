//! Editing model for rich-text surfaces.
//!
//! A surface is an element whose children are the rendered markup being
//! edited. This module owns everything that operates on one surface:
//!
//! - [`Selection`]: anchor/head offsets into the surface's text content
//! - [`FormatCommand`]: the named formatting operations
//! - [`FormattingPrimitive`] / [`DomFormatter`]: applying and querying them
//! - [`insert_text`], [`delete_backward`], [`delete_forward`]: typing
//!
//! # Example
//!
//! ```ignore
//! use dashboard_ui::dom::Document;
//! use dashboard_ui::editable::{DomFormatter, FormatCommand, FormattingPrimitive, Selection};
//!
//! let mut doc = Document::parse("<div>hello world</div>");
//! let surface = doc.first_child(doc.root()).unwrap();
//! DomFormatter.execute(&mut doc, surface, Selection::new(0, 5), FormatCommand::Bold, None);
//! assert_eq!(doc.inner_html(surface), "<b>hello</b> world");
//! ```

mod command;
mod formatter;
mod input;
mod selection;
mod text;

pub use command::{Alignment, BlockTag, FormatCommand, ListKind};
pub use formatter::{normalize, DomFormatter, FormattingPrimitive};
pub use input::{delete_backward, delete_forward, delete_range, insert_text};
pub use selection::Selection;
pub use text::{run_at_caret, split_text, text_length, text_runs, TextRun};
