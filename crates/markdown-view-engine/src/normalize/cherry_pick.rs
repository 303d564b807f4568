use crate::models::{BlockNode, ListItem, TaskListItem};

/// Access to the child blocks of a list entry, shared by plain and task items.
pub trait ListEntry {
    fn children_mut(&mut self) -> &mut Vec<BlockNode>;
    fn into_children(self) -> Vec<BlockNode>;
}

impl ListEntry for ListItem {
    fn children_mut(&mut self) -> &mut Vec<BlockNode> {
        &mut self.children
    }

    fn into_children(self) -> Vec<BlockNode> {
        self.children
    }
}

impl ListEntry for TaskListItem {
    fn children_mut(&mut self) -> &mut Vec<BlockNode> {
        &mut self.children
    }

    fn into_children(self) -> Vec<BlockNode> {
        self.children
    }
}

/// A sanitized item paired with the blocks that were hoisted out of it.
#[derive(Debug)]
pub struct ProcessedItem<I> {
    pub item: I,
    pub picks: Vec<BlockNode>,
}

/// Cherry-picks every item of a list, keeping item order.
pub fn process_items<I: ListEntry>(items: Vec<I>) -> Vec<ProcessedItem<I>> {
    items.into_iter().map(cherry_pick_item).collect()
}

fn cherry_pick_item<I: ListEntry>(mut item: I) -> ProcessedItem<I> {
    let children = std::mem::take(item.children_mut());
    let (sanitized, picks) = cherry_pick_children(children);
    *item.children_mut() = sanitized;
    ProcessedItem { item, picks }
}

/// Splits the children of one list item into the blocks that stay nested and
/// the blocks that must be hoisted next to the enclosing list.
///
/// Code blocks, tables, headings, thematic breaks and block quotes are always
/// extracted. Paragraphs stay. Nested lists stay in place with their own
/// variant, after their items have been sanitized the same way; whatever they
/// gave up is appended to the extracted set in depth-first order.
pub fn cherry_pick_children(children: Vec<BlockNode>) -> (Vec<BlockNode>, Vec<BlockNode>) {
    let mut sanitized = Vec::with_capacity(children.len());
    let mut picks = Vec::new();

    for child in children {
        match child {
            BlockNode::CodeBlock { .. }
            | BlockNode::Table { .. }
            | BlockNode::Heading { .. }
            | BlockNode::ThematicBreak
            | BlockNode::Blockquote { .. } => picks.push(child),
            BlockNode::Paragraph { .. } => sanitized.push(child),
            BlockNode::BulletedList { is_tight, items } => {
                let items = sanitize_nested(items, &mut picks);
                sanitized.push(BlockNode::BulletedList { is_tight, items });
            }
            BlockNode::NumberedList {
                is_tight,
                start,
                items,
            } => {
                let items = sanitize_nested(items, &mut picks);
                sanitized.push(BlockNode::NumberedList {
                    is_tight,
                    start,
                    items,
                });
            }
            BlockNode::TaskList { is_tight, items } => {
                let items = sanitize_nested(items, &mut picks);
                sanitized.push(BlockNode::TaskList { is_tight, items });
            }
        }
    }

    (sanitized, picks)
}

fn sanitize_nested<I: ListEntry>(items: Vec<I>, picks: &mut Vec<BlockNode>) -> Vec<I> {
    process_items(items)
        .into_iter()
        .map(|processed| {
            picks.extend(processed.picks);
            processed.item
        })
        .collect()
}
