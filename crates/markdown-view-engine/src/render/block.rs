use crate::models::{BlockNode, TableRow};

use super::{
    inline::render_inlines,
    styled::{Attributes, FontRole, StyledText},
    theme::Theme,
};

const RULE_WIDTH: usize = 40;
const QUOTE_BAR: &str = "▎ ";
const CELL_SEPARATOR: &str = " │ ";
const INDENT: &str = "  ";

/// Renders a document, one blank line between blocks.
pub fn render_blocks(blocks: &[BlockNode], theme: &Theme) -> StyledText {
    join(blocks.iter().map(|block| render_block(block, theme)), "\n\n", theme)
}

pub fn render_block(block: &BlockNode, theme: &Theme) -> StyledText {
    match block {
        BlockNode::Paragraph { content } => render_inlines(content, theme),
        BlockNode::Heading { level, content } => {
            let mut out = render_inlines(content, theme);
            out.apply(|attrs| {
                if attrs.font == FontRole::Body {
                    attrs.font = FontRole::Heading(*level);
                }
                if attrs.foreground == theme.colors.body {
                    attrs.foreground = theme.colors.heading;
                }
            });
            out
        }
        BlockNode::CodeBlock { content, .. } => {
            StyledText::plain(content.trim_end_matches('\n'), theme.code_block())
        }
        BlockNode::ThematicBreak => StyledText::plain(&"─".repeat(RULE_WIDTH), theme.rule()),
        BlockNode::Table { rows, .. } => render_table(rows, theme),
        BlockNode::Blockquote { children } => render_quote(children, theme),
        BlockNode::BulletedList { .. }
        | BlockNode::NumberedList { .. }
        | BlockNode::TaskList { .. } => render_list(block, 0, theme),
    }
}

fn render_table(rows: &[TableRow], theme: &Theme) -> StyledText {
    let lines = rows.iter().enumerate().map(|(index, row)| {
        let mut line = StyledText::new();
        for (column, cell) in row.cells.iter().enumerate() {
            if column > 0 {
                line.push_str(CELL_SEPARATOR, theme.rule());
            }
            let mut text = render_inlines(&cell.content, theme);
            // head row
            if index == 0 {
                text.apply(|attrs| {
                    if attrs.font == FontRole::Body {
                        attrs.font = FontRole::Bold;
                    }
                });
            }
            line.append(text);
        }
        line
    });
    join(lines, "\n", theme)
}

fn render_quote(children: &[BlockNode], theme: &Theme) -> StyledText {
    let mut body = join(children.iter().map(|child| render_block(child, theme)), "\n", theme);
    body.apply(|attrs| {
        if attrs.foreground == theme.colors.body {
            attrs.foreground = theme.colors.quote;
        }
    });
    let bar = Attributes::new(FontRole::Body, theme.colors.quote);
    prefix_lines(&body, QUOTE_BAR, &bar)
}

fn render_list(list: &BlockNode, depth: usize, theme: &Theme) -> StyledText {
    let (is_tight, items): (bool, Vec<StyledText>) = match list {
        BlockNode::BulletedList { is_tight, items } => (
            *is_tight,
            items
                .iter()
                .map(|item| render_item("• ", &item.children, depth, theme))
                .collect(),
        ),
        BlockNode::NumberedList {
            is_tight,
            start,
            items,
        } => (
            *is_tight,
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    // Numbers past u64::MAX repeat the last one.
                    let number = u64::try_from(index)
                        .ok()
                        .and_then(|offset| start.checked_add(offset))
                        .unwrap_or(u64::MAX);
                    render_item(&format!("{number}. "), &item.children, depth, theme)
                })
                .collect(),
        ),
        BlockNode::TaskList { is_tight, items } => (
            *is_tight,
            items
                .iter()
                .map(|item| {
                    let marker = if item.is_completed { "☑ " } else { "☐ " };
                    render_item(marker, &item.children, depth, theme)
                })
                .collect(),
        ),
        other => return render_block(other, theme),
    };
    join(items, if is_tight { "\n" } else { "\n\n" }, theme)
}

/// The marker line carries the item's first paragraph; everything after it
/// goes on indented lines below.
fn render_item(marker: &str, children: &[BlockNode], depth: usize, theme: &Theme) -> StyledText {
    let mut out = StyledText::new();
    out.push_str(&INDENT.repeat(depth), theme.body());
    out.push_str(marker, theme.rule());

    let rest = match children {
        [BlockNode::Paragraph { content }, rest @ ..] => {
            out.append(render_inlines(content, theme));
            rest
        }
        _ => children,
    };

    let continuation = INDENT.repeat(depth + 1);
    for child in rest {
        out.push_str("\n", theme.body());
        if child.is_list() {
            out.append(render_list(child, depth + 1, theme));
        } else {
            out.append(prefix_lines(&render_block(child, theme), &continuation, &theme.body()));
        }
    }
    out
}

fn join(
    parts: impl IntoIterator<Item = StyledText>,
    separator: &str,
    theme: &Theme,
) -> StyledText {
    let mut out = StyledText::new();
    for part in parts.into_iter().filter(|part| !part.is_empty()) {
        if !out.is_empty() {
            out.push_str(separator, theme.body());
        }
        out.append(part);
    }
    out
}

fn prefix_lines(text: &StyledText, prefix: &str, attributes: &Attributes) -> StyledText {
    let mut out = StyledText::new();
    let mut offset = 0;
    for line in text.text().split_inclusive('\n') {
        out.push_str(prefix, attributes.clone());
        out.append(text.slice(offset..offset + line.len()));
        offset += line.len();
    }
    out
}
