use serde::{Deserialize, Serialize};

use super::inline::InlineNode;

/// A structural document unit.
///
/// Containers (`Blockquote` and the three list kinds) own their children; every
/// other variant is a leaf carrying inline content or raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockNode {
    Paragraph {
        content: Vec<InlineNode>,
    },
    Heading {
        /// 1 to 6.
        level: u8,
        content: Vec<InlineNode>,
    },
    CodeBlock {
        /// Info string after the opening fence; `None` for indented code or an empty fence.
        fence_info: Option<String>,
        content: String,
    },
    ThematicBreak,
    Table {
        column_alignments: Vec<ColumnAlignment>,
        /// Header row first.
        rows: Vec<TableRow>,
    },
    Blockquote {
        children: Vec<BlockNode>,
    },
    BulletedList {
        is_tight: bool,
        items: Vec<ListItem>,
    },
    NumberedList {
        is_tight: bool,
        start: u64,
        items: Vec<ListItem>,
    },
    TaskList {
        is_tight: bool,
        items: Vec<TaskListItem>,
    },
}

impl BlockNode {
    pub fn paragraph(content: Vec<InlineNode>) -> Self {
        Self::Paragraph { content }
    }

    /// Short variant name, used by tree dumps and log lines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "Paragraph",
            Self::Heading { .. } => "Heading",
            Self::CodeBlock { .. } => "CodeBlock",
            Self::ThematicBreak => "ThematicBreak",
            Self::Table { .. } => "Table",
            Self::Blockquote { .. } => "Blockquote",
            Self::BulletedList { .. } => "BulletedList",
            Self::NumberedList { .. } => "NumberedList",
            Self::TaskList { .. } => "TaskList",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Self::BulletedList { .. } | Self::NumberedList { .. } | Self::TaskList { .. }
        )
    }
}

/// The content of one bullet or number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub children: Vec<BlockNode>,
}

impl ListItem {
    pub fn new(children: Vec<BlockNode>) -> Self {
        Self { children }
    }
}

/// A list item with a checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListItem {
    pub is_completed: bool,
    pub children: Vec<BlockNode>,
}

impl TaskListItem {
    pub fn new(is_completed: bool, children: Vec<BlockNode>) -> Self {
        Self {
            is_completed,
            children,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnAlignment {
    None,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub content: Vec<InlineNode>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

impl TableCell {
    pub fn new(content: Vec<InlineNode>) -> Self {
        Self { content }
    }
}
