//! # Block-Tree Normalization
//!
//! Runs between parsing and rendering. The renderer can lay out paragraphs and
//! nested lists inside a list item, and only paragraphs inside a block quote, so
//! this pass rewrites the parsed tree into a flat sequence that respects those
//! limits while keeping reading order.
//!
//! ## Modules
//!
//! - **`cherry_pick`**: splits a list item's children into kept and extracted blocks
//! - **`segment`**: rebuilds a list around extracted blocks, splitting it into fragments
//! - **`blockquote`**: lossy flattening of a quote body to paragraphs
//!
//! ## Rules
//!
//! | Inside a list item           | Result                                       |
//! |------------------------------|----------------------------------------------|
//! | paragraph                    | stays                                        |
//! | nested list                  | stays, sanitized recursively                 |
//! | code, table, heading, break, quote | hoisted after the fragment ending with the item |
//!
//! A numbered list that had anything hoisted out of it comes back as bulleted
//! fragments. Everything else at top level passes through untouched.

pub mod blockquote;
pub mod cherry_pick;
pub mod segment;


use crate::models::BlockNode;

pub use blockquote::flatten_blockquote;
pub use cherry_pick::{ListEntry, ProcessedItem, cherry_pick_children, process_items};
pub use segment::{build_blocks, rebuild_bulleted_list, rebuild_numbered_list, rebuild_task_list};

/// Normalizes a document's top-level blocks into a sequence the renderer can
/// lay out directly.
///
/// Top-level siblings keep their relative order; lists may expand into several
/// fragments with hoisted blocks between them, and block quotes keep a single
/// node whose children are all paragraphs.
pub fn normalize(blocks: Vec<BlockNode>) -> Vec<BlockNode> {
    let input_len = blocks.len();
    let mut output = Vec::with_capacity(input_len);

    for block in blocks {
        match block {
            BlockNode::Blockquote { children } => output.push(BlockNode::Blockquote {
                children: flatten_blockquote(children),
            }),
            BlockNode::BulletedList { is_tight, items } => {
                output.extend(rebuild_bulleted_list(is_tight, items))
            }
            BlockNode::NumberedList {
                is_tight,
                start,
                items,
            } => output.extend(rebuild_numbered_list(is_tight, start, items)),
            BlockNode::TaskList { is_tight, items } => {
                output.extend(rebuild_task_list(is_tight, items))
            }
            leaf @ (BlockNode::Paragraph { .. }
            | BlockNode::Heading { .. }
            | BlockNode::CodeBlock { .. }
            | BlockNode::Table { .. }
            | BlockNode::ThematicBreak) => output.push(leaf),
        }
    }

    log::trace!(
        "normalized {input_len} top-level blocks into {}",
        output.len()
    );
    output
}
