use crate::models::{BlockNode, InlineNode};

use super::cherry_pick::ListEntry;

/// Reduces a block-quote body to paragraphs, depth-first and in reading order.
///
/// Headings and code blocks become paragraphs, nested quotes and lists are
/// spliced in place, table cells become one paragraph each (row-major) and
/// thematic breaks disappear. Heading levels, fence info, list markers and
/// table framing are lost.
pub fn flatten_blockquote(children: Vec<BlockNode>) -> Vec<BlockNode> {
    let mut out = Vec::with_capacity(children.len());
    flatten_into(children, &mut out);
    out
}

fn flatten_into(children: Vec<BlockNode>, out: &mut Vec<BlockNode>) {
    for child in children {
        match child {
            BlockNode::Paragraph { .. } => out.push(child),
            BlockNode::Heading { content, .. } => out.push(BlockNode::Paragraph { content }),
            BlockNode::CodeBlock { content, .. } => out.push(code_paragraph(content)),
            BlockNode::Blockquote { children } => flatten_into(children, out),
            BlockNode::BulletedList { items, .. } | BlockNode::NumberedList { items, .. } => {
                list_paragraphs_into(items, out)
            }
            BlockNode::TaskList { items, .. } => list_paragraphs_into(items, out),
            BlockNode::Table { rows, .. } => {
                for row in rows {
                    out.extend(
                        row.cells
                            .into_iter()
                            .map(|cell| BlockNode::Paragraph {
                                content: cell.content,
                            }),
                    );
                }
            }
            BlockNode::ThematicBreak => {}
        }
    }
}

fn list_paragraphs_into<I: ListEntry>(items: Vec<I>, out: &mut Vec<BlockNode>) {
    for item in items {
        item_paragraphs_into(item.into_children(), out);
    }
}

// List items inside a quote keep only text-bearing blocks; tables and breaks
// nested in an item are dropped.
fn item_paragraphs_into(children: Vec<BlockNode>, out: &mut Vec<BlockNode>) {
    for child in children {
        match child {
            BlockNode::Paragraph { .. } => out.push(child),
            BlockNode::Heading { content, .. } => out.push(BlockNode::Paragraph { content }),
            BlockNode::CodeBlock { content, .. } => out.push(code_paragraph(content)),
            BlockNode::Blockquote { children } => flatten_into(children, out),
            BlockNode::BulletedList { items, .. } | BlockNode::NumberedList { items, .. } => {
                list_paragraphs_into(items, out)
            }
            BlockNode::TaskList { items, .. } => list_paragraphs_into(items, out),
            BlockNode::Table { .. } | BlockNode::ThematicBreak => {}
        }
    }
}

fn code_paragraph(code: String) -> BlockNode {
    BlockNode::Paragraph {
        content: vec![InlineNode::Text(code)],
    }
}
