//! Formatting commands exposed by the toolbar and the accelerator map.
//!
//! Each command corresponds to a named formatting primitive with an
//! optional parameter, using the same names the toolbar writes into its
//! `data-command` / `data-value` attributes.

use std::fmt;

/// Block type for `formatBlock`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTag {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
}

impl BlockTag {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockTag::Heading1 => "h1",
            BlockTag::Heading2 => "h2",
            BlockTag::Heading3 => "h3",
            BlockTag::Paragraph => "p",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim_matches(|c| c == '<' || c == '>').to_ascii_lowercase().as_str() {
            "h1" | "heading-1" => Some(BlockTag::Heading1),
            "h2" | "heading-2" => Some(BlockTag::Heading2),
            "h3" | "heading-3" => Some(BlockTag::Heading3),
            "p" | "paragraph" => Some(BlockTag::Paragraph),
            _ => None,
        }
    }
}

/// Horizontal alignment for the justify commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Full,
}

impl Alignment {
    /// Value written to the `text-align` property
    pub fn css_value(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Full => "justify",
        }
    }
}

/// List flavour for the list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// A formatting operation on the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    /// Strip inline formatting (links are kept)
    RemoveFormat,
    /// Retag the blocks touched by the selection
    FormatBlock(BlockTag),
    InsertList(ListKind),
    Justify(Alignment),
    Indent,
    Outdent,
    /// Wrap the selection in a link; the URL is supplied at dispatch time
    CreateLink,
    Unlink,
}

impl FormatCommand {
    /// Commands with on/off state at a selection
    pub const TOGGLES: [FormatCommand; 3] = [
        FormatCommand::Bold,
        FormatCommand::Italic,
        FormatCommand::Underline,
    ];

    pub fn is_toggle(self) -> bool {
        Self::TOGGLES.contains(&self)
    }

    /// Primitive name, as written to `data-command`
    pub fn name(self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
            FormatCommand::RemoveFormat => "removeFormat",
            FormatCommand::FormatBlock(_) => "formatBlock",
            FormatCommand::InsertList(ListKind::Unordered) => "insertUnorderedList",
            FormatCommand::InsertList(ListKind::Ordered) => "insertOrderedList",
            FormatCommand::Justify(Alignment::Left) => "justifyLeft",
            FormatCommand::Justify(Alignment::Center) => "justifyCenter",
            FormatCommand::Justify(Alignment::Right) => "justifyRight",
            FormatCommand::Justify(Alignment::Full) => "justifyFull",
            FormatCommand::Indent => "indent",
            FormatCommand::Outdent => "outdent",
            FormatCommand::CreateLink => "createLink",
            FormatCommand::Unlink => "unlink",
        }
    }

    /// Static parameter, as written to `data-value`
    pub fn value(self) -> Option<&'static str> {
        match self {
            FormatCommand::FormatBlock(tag) => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Look up a command by primitive name and optional parameter
    pub fn from_name(name: &str, value: Option<&str>) -> Option<Self> {
        let cmd = match name {
            "bold" => FormatCommand::Bold,
            "italic" => FormatCommand::Italic,
            "underline" => FormatCommand::Underline,
            "removeFormat" => FormatCommand::RemoveFormat,
            "formatBlock" => FormatCommand::FormatBlock(BlockTag::from_tag(value?)?),
            "insertUnorderedList" => FormatCommand::InsertList(ListKind::Unordered),
            "insertOrderedList" => FormatCommand::InsertList(ListKind::Ordered),
            "justifyLeft" => FormatCommand::Justify(Alignment::Left),
            "justifyCenter" => FormatCommand::Justify(Alignment::Center),
            "justifyRight" => FormatCommand::Justify(Alignment::Right),
            "justifyFull" => FormatCommand::Justify(Alignment::Full),
            "indent" => FormatCommand::Indent,
            "outdent" => FormatCommand::Outdent,
            "createLink" => FormatCommand::CreateLink,
            "unlink" => FormatCommand::Unlink,
            _ => return None,
        };
        Some(cmd)
    }
}

impl fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}({})", self.name(), value),
            None => write!(f, "{}", self.name()),
        }
    }
}
