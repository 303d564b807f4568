//! # Document Model
//!
//! The block and inline node types shared by the parser front end, the
//! normalizer and the renderer.
//!
//! Block nodes form an owned tree: lists own their items, items own their child
//! blocks, block quotes own their children. Inline nodes are opaque to the
//! normalizer and only interpreted by the renderer.

pub mod block;
pub mod inline;

pub use block::{BlockNode, ColumnAlignment, ListItem, TableCell, TableRow, TaskListItem};
pub use inline::{InlineNode, plain_text};
