use crate::models::{BlockNode, ListItem, TaskListItem};

use super::cherry_pick::{ProcessedItem, process_items};

/// Rebuilds a bulleted list, splitting it wherever an item gave up blocks.
pub fn rebuild_bulleted_list(is_tight: bool, items: Vec<ListItem>) -> Vec<BlockNode> {
    build_blocks(process_items(items), |items| BlockNode::BulletedList {
        is_tight,
        items,
    })
}

/// Rebuilds a numbered list.
///
/// When any item gave up blocks the fragments would each need to restart or
/// continue the numbering, so every fragment becomes a bulleted list instead.
/// Without extractions the list comes back unchanged, `start` included.
pub fn rebuild_numbered_list(is_tight: bool, start: u64, items: Vec<ListItem>) -> Vec<BlockNode> {
    let processed = process_items(items);

    if processed.iter().any(|p| !p.picks.is_empty()) {
        log::debug!(
            "numbered list of {} items split by extracted blocks, rebuilding as bulleted",
            processed.len()
        );
        build_blocks(processed, |items| BlockNode::BulletedList { is_tight, items })
    } else {
        build_blocks(processed, |items| BlockNode::NumberedList {
            is_tight,
            start,
            items,
        })
    }
}

pub fn rebuild_task_list(is_tight: bool, items: Vec<TaskListItem>) -> Vec<BlockNode> {
    build_blocks(process_items(items), |items| BlockNode::TaskList {
        is_tight,
        items,
    })
}

/// Emits runs of items as list fragments, with each item's extracted blocks
/// placed right after the fragment that ends with that item.
pub fn build_blocks<I>(
    processed: Vec<ProcessedItem<I>>,
    make_list: impl Fn(Vec<I>) -> BlockNode,
) -> Vec<BlockNode> {
    let mut result = Vec::new();
    let mut run: Vec<I> = Vec::new();

    for ProcessedItem { item, picks } in processed {
        run.push(item);

        if !picks.is_empty() {
            result.push(make_list(std::mem::take(&mut run)));
            result.extend(picks);
        }
    }

    if !run.is_empty() {
        result.push(make_list(run));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InlineNode;
    use pretty_assertions::assert_eq;

    fn p(text: &str) -> BlockNode {
        BlockNode::paragraph(vec![InlineNode::text(text)])
    }

    fn code(text: &str) -> BlockNode {
        BlockNode::CodeBlock {
            fence_info: None,
            content: text.into(),
        }
    }

    fn item(text: &str) -> ListItem {
        ListItem::new(vec![p(text)])
    }

    fn item_with_code(text: &str, snippet: &str) -> ListItem {
        ListItem::new(vec![p(text), code(snippet)])
    }

    #[test]
    fn numbered_list_with_extraction_degrades_to_bulleted_fragments() {
        let items = vec![
            item("one"),
            item_with_code("two", "x"),
            item("three"),
            item("four"),
        ];

        let blocks = rebuild_numbered_list(true, 5, items);

        assert_eq!(
            blocks,
            vec![
                BlockNode::BulletedList {
                    is_tight: true,
                    items: vec![item("one"), item("two")],
                },
                code("x"),
                BlockNode::BulletedList {
                    is_tight: true,
                    items: vec![item("three"), item("four")],
                },
            ]
        );
    }

    #[test]
    fn numbered_list_without_extraction_is_unchanged() {
        let items = vec![item("one"), item("two")];

        let blocks = rebuild_numbered_list(false, 7, items.clone());

        assert_eq!(
            blocks,
            vec![BlockNode::NumberedList {
                is_tight: false,
                start: 7,
                items,
            }]
        );
    }

    #[test]
    fn trailing_extraction_leaves_no_empty_fragment() {
        let blocks = rebuild_bulleted_list(true, vec![item("a"), item_with_code("b", "y")]);

        assert_eq!(
            blocks,
            vec![
                BlockNode::BulletedList {
                    is_tight: true,
                    items: vec![item("a"), item("b")],
                },
                code("y"),
            ]
        );
    }

    #[test]
    fn consecutive_extracting_items_each_get_a_fragment() {
        let blocks = rebuild_bulleted_list(
            false,
            vec![item_with_code("a", "1"), item_with_code("b", "2")],
        );

        assert_eq!(
            blocks,
            vec![
                BlockNode::BulletedList {
                    is_tight: false,
                    items: vec![item("a")],
                },
                code("1"),
                BlockNode::BulletedList {
                    is_tight: false,
                    items: vec![item("b")],
                },
                code("2"),
            ]
        );
    }

    #[test]
    fn task_list_keeps_variant_and_completion() {
        let items = vec![
            TaskListItem::new(true, vec![p("done"), code("z")]),
            TaskListItem::new(false, vec![p("todo")]),
        ];

        let blocks = rebuild_task_list(true, items);

        assert_eq!(
            blocks,
            vec![
                BlockNode::TaskList {
                    is_tight: true,
                    items: vec![TaskListItem::new(true, vec![p("done")])],
                },
                code("z"),
                BlockNode::TaskList {
                    is_tight: true,
                    items: vec![TaskListItem::new(false, vec![p("todo")])],
                },
            ]
        );
    }

    #[test]
    fn empty_lists_emit_nothing() {
        assert!(rebuild_bulleted_list(true, vec![]).is_empty());
        assert!(rebuild_numbered_list(true, 1, vec![]).is_empty());
        assert!(rebuild_task_list(true, vec![]).is_empty());
    }
}
