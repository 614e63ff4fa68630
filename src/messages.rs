//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Node-targeted
//! messages carry the event target as reported by the host; `update`
//! resolves it to the binding or widget it belongs to.

use crate::dom::NodeId;
use crate::editable::Selection;
use crate::keymap::Keystroke;

/// Page lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMsg {
    /// Document finished loading: run the startup scan and set up widgets
    Loaded,
    /// A deferred-render region became visible
    RegionShown(NodeId),
    /// Click somewhere on the page; routed by target
    Click(NodeId),
}

/// Events inside an editable surface. `node` is the surface or any node in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    Focus(NodeId),
    Blur(NodeId),
    /// Selection changed to the given surface offsets
    Select { node: NodeId, selection: Selection },
    PointerUp(NodeId),
    KeyUp(NodeId),
    KeyDown { node: NodeId, keystroke: Keystroke },
    InsertText { node: NodeId, text: String },
    DeleteBackward(NodeId),
    DeleteForward(NodeId),
}

/// Toolbar interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarMsg {
    /// A toolbar button (or its icon) was clicked
    Click(NodeId),
}

/// Page widget interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetMsg {
    /// Set up expand buttons, badges and meeting notes
    Init,
    ExpandClicked(NodeId),
    TabClicked(NodeId),
    NotesToggleClicked(NodeId),
}

/// Pointer-hover event flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverKind {
    Over,
    Move,
    Enter,
}

impl HoverKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HoverKind::Over => "mouseover",
            HoverKind::Move => "mousemove",
            HoverKind::Enter => "mouseenter",
        }
    }
}

/// Raw host events subject to interception
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostMsg {
    Hover {
        kind: HoverKind,
        target: NodeId,
        time_ms: u64,
    },
    /// Uncaught script error report
    Error {
        message: String,
        filename: Option<String>,
    },
    /// Unhandled promise rejection
    UnhandledRejection { message: String },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Page(PageMsg),
    Editor(EditorMsg),
    Toolbar(ToolbarMsg),
    Widget(WidgetMsg),
    Host(HostMsg),
}
