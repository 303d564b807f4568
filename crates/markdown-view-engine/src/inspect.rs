//! Human-readable outline of a block tree.
//!
//! Backs the CLI's `--dump` mode. Inline content is shown as quoted plain text.

use std::fmt::{self, Write};

use crate::models::{BlockNode, plain_text};

/// Renders `blocks` as an indented outline, one node per line.
///
/// ```
/// use markdown_view_engine::{inspect::dump_blocks, parse_markdown};
///
/// let dump = dump_blocks(&parse_markdown("- a\n- b\n"));
/// assert_eq!(dump, "BulletedList(tight)\n  Item\n    Paragraph \"a\"\n  Item\n    Paragraph \"b\"\n");
/// ```
pub fn dump_blocks(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = blocks
        .iter()
        .try_for_each(|block| dump_block(block, 0, &mut out));
    out
}

fn dump_block(block: &BlockNode, depth: usize, out: &mut String) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match block {
        BlockNode::Paragraph { content } => {
            writeln!(out, "{indent}Paragraph {:?}", plain_text(content))
        }
        BlockNode::Heading { level, content } => {
            writeln!(out, "{indent}Heading({level}) {:?}", plain_text(content))
        }
        BlockNode::CodeBlock {
            fence_info,
            content,
        } => match fence_info {
            Some(info) => writeln!(out, "{indent}CodeBlock({info}) {content:?}"),
            None => writeln!(out, "{indent}CodeBlock {content:?}"),
        },
        BlockNode::ThematicBreak => writeln!(out, "{indent}ThematicBreak"),
        BlockNode::Table {
            column_alignments,
            rows,
        } => {
            writeln!(out, "{indent}Table {column_alignments:?}")?;
            for row in rows {
                let cells: Vec<String> = row.cells.iter().map(|c| plain_text(&c.content)).collect();
                writeln!(out, "{indent}  Row {cells:?}")?;
            }
            Ok(())
        }
        BlockNode::Blockquote { children } => {
            writeln!(out, "{indent}Blockquote")?;
            children
                .iter()
                .try_for_each(|child| dump_block(child, depth + 1, out))
        }
        BlockNode::BulletedList { is_tight, items } => {
            writeln!(out, "{indent}BulletedList({})", tightness(*is_tight))?;
            items
                .iter()
                .try_for_each(|item| dump_item(None, &item.children, depth + 1, out))
        }
        BlockNode::NumberedList {
            is_tight,
            start,
            items,
        } => {
            writeln!(
                out,
                "{indent}NumberedList({}, start={start})",
                tightness(*is_tight)
            )?;
            items
                .iter()
                .try_for_each(|item| dump_item(None, &item.children, depth + 1, out))
        }
        BlockNode::TaskList { is_tight, items } => {
            writeln!(out, "{indent}TaskList({})", tightness(*is_tight))?;
            items.iter().try_for_each(|item| {
                dump_item(Some(item.is_completed), &item.children, depth + 1, out)
            })
        }
    }
}

fn dump_item(
    task: Option<bool>,
    children: &[BlockNode],
    depth: usize,
    out: &mut String,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match task {
        Some(true) => writeln!(out, "{indent}Item [x]")?,
        Some(false) => writeln!(out, "{indent}Item [ ]")?,
        None => writeln!(out, "{indent}Item")?,
    }
    children
        .iter()
        .try_for_each(|child| dump_block(child, depth + 1, out))
}

fn tightness(is_tight: bool) -> &'static str {
    if is_tight { "tight" } else { "loose" }
}
