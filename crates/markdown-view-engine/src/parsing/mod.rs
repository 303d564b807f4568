//! Markdown parsing front end.
//!
//! Folds the `pulldown-cmark` event stream into the owned [`BlockNode`] tree
//! consumed by the normalizer.
//!
//! # Event Flow
//!
//! Every `Start` event pushes a frame and every `End` event pops one, so the
//! builder never needs to inspect which tag is ending. Nested lists appear
//! inside their parent item:
//!
//! ```markdown
//! - Parent
//!   - Child
//! ```
//!
//! 1. `Start(List)` - outer list frame
//! 2. `Start(Item)` - parent item frame
//! 3. `Text("Parent")` - collected as loose item text (tight list, no paragraph)
//! 4. `Start(List)` / `Start(Item)` / `Text("Child")` / `End(Item)` / `End(List)`
//! 5. `End(Item)` - loose text becomes a paragraph, item is added to the outer list
//! 6. `End(List)` - the finished list is pushed to whatever contains it
//!
//! A list is loose as soon as one of its items opens an explicit paragraph.

#[cfg(test)]
mod tests;

use pulldown_cmark::{Alignment, CodeBlockKind, Event, Options, Parser, Tag};

use crate::models::{
    BlockNode, ColumnAlignment, InlineNode, ListItem, TableCell, TableRow, TaskListItem,
};

/// Extensions enabled for every parse.
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_MATH
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
}

/// Parse markdown text into a block tree.
///
/// The result mirrors the source structure exactly: lists may still hold
/// code blocks, quotes may still hold headings. Run it through
/// [`crate::normalize::normalize`] before rendering.
pub fn parse_markdown(content: &str) -> Vec<BlockNode> {
    let mut builder = TreeBuilder::new();

    for event in Parser::new_ext(content, parser_options()) {
        builder.process_event(event);
    }

    builder.finish()
}

#[derive(Debug, Default)]
struct RawItem {
    task: Option<bool>,
    children: Vec<BlockNode>,
    /// Inline content of a tight item, waiting to become a paragraph.
    text: Vec<InlineNode>,
}

impl RawItem {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let content = std::mem::take(&mut self.text);
            self.children.push(BlockNode::Paragraph { content });
        }
    }
}

#[derive(Debug)]
enum Wrapper {
    Emphasis,
    Strong,
    Strikethrough,
    Link(String),
    Image(String),
}

impl Wrapper {
    fn wrap(self, children: Vec<InlineNode>) -> InlineNode {
        match self {
            Wrapper::Emphasis => InlineNode::Emphasis(children),
            Wrapper::Strong => InlineNode::Strong(children),
            Wrapper::Strikethrough => InlineNode::Strikethrough(children),
            Wrapper::Link(destination) => InlineNode::Link {
                destination,
                children,
            },
            Wrapper::Image(source) => InlineNode::Image { source, children },
        }
    }
}

/// One open tag.
#[derive(Debug)]
enum Frame {
    Blockquote {
        children: Vec<BlockNode>,
    },
    List {
        start: Option<u64>,
        loose: bool,
        items: Vec<RawItem>,
    },
    Item(RawItem),
    FootnoteDefinition {
        label: String,
        children: Vec<BlockNode>,
    },
    Paragraph(Vec<InlineNode>),
    Heading {
        level: u8,
        content: Vec<InlineNode>,
    },
    CodeBlock {
        fence_info: Option<String>,
        content: String,
    },
    Table {
        alignments: Vec<ColumnAlignment>,
        rows: Vec<TableRow>,
    },
    TableRow(Vec<TableCell>),
    TableCell(Vec<InlineNode>),
    Inline {
        wrapper: Wrapper,
        children: Vec<InlineNode>,
    },
    /// A tag we do not model; its content flows to the enclosing frame.
    Transparent,
    /// A tag whose content is dropped (front matter).
    Discard,
}

struct TreeBuilder {
    stack: Vec<Frame>,
    blocks: Vec<BlockNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            blocks: Vec::new(),
        }
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(text) => self.push_inline(InlineNode::Text(text.into_string())),
            Event::Code(code) => self.push_inline(InlineNode::Code(code.into_string())),
            Event::InlineMath(latex) | Event::DisplayMath(latex) => {
                self.push_inline(InlineNode::Math(latex.into_string()))
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                self.push_inline(InlineNode::Html(html.into_string()))
            }
            Event::FootnoteReference(label) => self.push_inline(footnote_marker(&label)),
            Event::SoftBreak => self.push_inline(InlineNode::SoftBreak),
            Event::HardBreak => self.push_inline(InlineNode::LineBreak),
            Event::Rule => self.push_block(BlockNode::ThematicBreak),
            Event::TaskListMarker(checked) => self.mark_task(checked),
        }
    }

    fn start(&mut self, tag: Tag) {
        let frame = match tag {
            Tag::Paragraph => {
                self.mark_enclosing_list_loose();
                Frame::Paragraph(Vec::new())
            }
            Tag::Heading { level, .. } => Frame::Heading {
                level: level as u8,
                content: Vec::new(),
            },
            Tag::BlockQuote(_) => Frame::Blockquote {
                children: Vec::new(),
            },
            Tag::CodeBlock(kind) => Frame::CodeBlock {
                fence_info: match kind {
                    CodeBlockKind::Fenced(info) if !info.trim().is_empty() => {
                        Some(info.trim().to_string())
                    }
                    _ => None,
                },
                content: String::new(),
            },
            Tag::HtmlBlock => Frame::CodeBlock {
                fence_info: Some("html".to_string()),
                content: String::new(),
            },
            Tag::List(start) => Frame::List {
                start,
                loose: false,
                items: Vec::new(),
            },
            Tag::Item => Frame::Item(RawItem::default()),
            Tag::FootnoteDefinition(label) => Frame::FootnoteDefinition {
                label: label.into_string(),
                children: Vec::new(),
            },
            Tag::Table(alignments) => Frame::Table {
                alignments: alignments.into_iter().map(column_alignment).collect(),
                rows: Vec::new(),
            },
            Tag::TableHead | Tag::TableRow => Frame::TableRow(Vec::new()),
            Tag::TableCell => Frame::TableCell(Vec::new()),
            Tag::Emphasis => Frame::Inline {
                wrapper: Wrapper::Emphasis,
                children: Vec::new(),
            },
            Tag::Strong => Frame::Inline {
                wrapper: Wrapper::Strong,
                children: Vec::new(),
            },
            Tag::Strikethrough => Frame::Inline {
                wrapper: Wrapper::Strikethrough,
                children: Vec::new(),
            },
            Tag::Link { dest_url, .. } => Frame::Inline {
                wrapper: Wrapper::Link(dest_url.into_string()),
                children: Vec::new(),
            },
            Tag::Image { dest_url, .. } => Frame::Inline {
                wrapper: Wrapper::Image(dest_url.into_string()),
                children: Vec::new(),
            },
            Tag::MetadataBlock(_) => Frame::Discard,
            _ => Frame::Transparent,
        };

        self.stack.push(frame);
    }

    fn end(&mut self) {
        let Some(frame) = self.stack.pop() else {
            log::warn!("end event without an open tag");
            return;
        };

        match frame {
            Frame::Paragraph(content) => self.push_block(BlockNode::Paragraph { content }),
            Frame::Heading { level, content } => {
                self.push_block(BlockNode::Heading { level, content })
            }
            Frame::CodeBlock {
                fence_info,
                content,
            } => self.push_block(BlockNode::CodeBlock {
                fence_info,
                content,
            }),
            Frame::Blockquote { children } => self.push_block(BlockNode::Blockquote { children }),
            Frame::List {
                start,
                loose,
                items,
            } => self.push_block(build_list(start, !loose, items)),
            Frame::Item(mut item) => {
                item.flush_text();
                match self.stack.last_mut() {
                    Some(Frame::List { items, .. }) => items.push(item),
                    _ => log::warn!("list item closed outside a list"),
                }
            }
            Frame::FootnoteDefinition {
                label,
                mut children,
            } => {
                attach_footnote_marker(&label, &mut children);
                for child in children {
                    self.push_block(child);
                }
            }
            Frame::Table { alignments, rows } => self.push_block(BlockNode::Table {
                column_alignments: alignments,
                rows,
            }),
            Frame::TableRow(cells) => match self.stack.last_mut() {
                Some(Frame::Table { rows, .. }) => rows.push(TableRow { cells }),
                _ => log::warn!("table row closed outside a table"),
            },
            Frame::TableCell(content) => match self.stack.last_mut() {
                Some(Frame::TableRow(cells)) => cells.push(TableCell { content }),
                _ => log::warn!("table cell closed outside a row"),
            },
            Frame::Inline { wrapper, children } => self.push_inline(wrapper.wrap(children)),
            Frame::Transparent | Frame::Discard => {}
        }
    }

    /// Appends a finished block to the innermost container.
    fn push_block(&mut self, block: BlockNode) {
        for frame in self.stack.iter_mut().rev() {
            match frame {
                Frame::Blockquote { children } | Frame::FootnoteDefinition { children, .. } => {
                    children.push(block);
                    return;
                }
                Frame::Item(item) => {
                    item.flush_text();
                    item.children.push(block);
                    return;
                }
                Frame::Transparent => continue,
                Frame::Discard => return,
                other => {
                    log::warn!("dropping {} nested in {other:?}", block.kind_name());
                    return;
                }
            }
        }

        self.blocks.push(block);
    }

    /// Appends inline content to the innermost frame that holds inlines.
    fn push_inline(&mut self, node: InlineNode) {
        for frame in self.stack.iter_mut().rev() {
            let target = match frame {
                Frame::Paragraph(content)
                | Frame::Heading { content, .. }
                | Frame::TableCell(content)
                | Frame::Inline {
                    children: content, ..
                } => content,
                Frame::Item(item) => &mut item.text,
                Frame::CodeBlock { content, .. } => {
                    content.push_str(&node.plain_text());
                    return;
                }
                Frame::Transparent => continue,
                Frame::Discard => return,
                Frame::Blockquote { .. }
                | Frame::FootnoteDefinition { .. }
                | Frame::List { .. }
                | Frame::Table { .. }
                | Frame::TableRow(_) => break,
            };
            append_inline(target, node);
            return;
        }

        log::debug!("inline content outside a paragraph, wrapping it in one");
        self.push_block(BlockNode::paragraph(vec![node]));
    }

    fn mark_enclosing_list_loose(&mut self) {
        if let [.., Frame::List { loose, .. }, Frame::Item(_)] = self.stack.as_mut_slice() {
            *loose = true;
        }
    }

    fn mark_task(&mut self, checked: bool) {
        let item = self.stack.iter_mut().rev().find_map(|frame| match frame {
            Frame::Item(item) => Some(item),
            _ => None,
        });
        match item {
            Some(item) => item.task = Some(checked),
            None => log::warn!("task marker outside a list item"),
        }
    }

    fn finish(mut self) -> Vec<BlockNode> {
        while !self.stack.is_empty() {
            self.end();
        }
        self.blocks
    }
}

fn append_inline(target: &mut Vec<InlineNode>, node: InlineNode) {
    if let InlineNode::Text(next) = &node
        && let Some(InlineNode::Text(prev)) = target.last_mut()
    {
        prev.push_str(next);
        return;
    }
    target.push(node);
}

fn build_list(start: Option<u64>, is_tight: bool, items: Vec<RawItem>) -> BlockNode {
    if items.iter().any(|item| item.task.is_some()) {
        return BlockNode::TaskList {
            is_tight,
            items: items
                .into_iter()
                .map(|item| TaskListItem::new(item.task.unwrap_or(false), item.children))
                .collect(),
        };
    }

    let items = items
        .into_iter()
        .map(|item| ListItem::new(item.children))
        .collect();

    match start {
        Some(start) => BlockNode::NumberedList {
            is_tight,
            start,
            items,
        },
        None => BlockNode::BulletedList { is_tight, items },
    }
}

fn footnote_marker(label: &str) -> InlineNode {
    InlineNode::Footnote {
        destination: label.to_string(),
        children: vec![InlineNode::text(label)],
    }
}

/// Prefixes the first paragraph of a footnote definition with its marker.
fn attach_footnote_marker(label: &str, children: &mut Vec<BlockNode>) {
    let first_paragraph = children.iter_mut().find_map(|child| match child {
        BlockNode::Paragraph { content } => Some(content),
        _ => None,
    });

    match first_paragraph {
        Some(content) => {
            content.insert(0, InlineNode::text(" "));
            content.insert(0, footnote_marker(label));
        }
        None => children.insert(0, BlockNode::paragraph(vec![footnote_marker(label)])),
    }
}

fn column_alignment(alignment: Alignment) -> ColumnAlignment {
    match alignment {
        Alignment::None => ColumnAlignment::None,
        Alignment::Left => ColumnAlignment::Left,
        Alignment::Center => ColumnAlignment::Center,
        Alignment::Right => ColumnAlignment::Right,
    }
}
