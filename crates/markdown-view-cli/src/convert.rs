//! Maps rendered text onto terminal styling.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::{
    queue,
    style::{Attribute, ContentStyle, PrintStyledContent, StyledContent},
};
use markdown_view_engine::{Attributes, FontRole, Rgb, StyledText};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Byte ranges of each line, newlines excluded. Always at least one line.
pub fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for (newline, _) in text.match_indices('\n') {
        ranges.push(start..newline);
        start = newline + 1;
    }
    ranges.push(start..text.len());
    ranges
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn style_for(attrs: &Attributes) -> Style {
    let mut style = Style::default().fg(color(attrs.foreground));
    if let Some(background) = attrs.background {
        style = style.bg(color(background));
    }
    match attrs.font {
        FontRole::Bold | FontRole::Heading(_) => style = style.add_modifier(Modifier::BOLD),
        FontRole::Body | FontRole::CodeInline | FontRole::CodeBlock => {}
    }
    if attrs.underline.is_some() || attrs.link.is_some() {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if attrs.strikethrough {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    style
}

pub fn to_lines(text: &StyledText) -> Vec<Line<'static>> {
    line_ranges(text.text())
        .into_iter()
        .map(|range| {
            let spans: Vec<Span<'static>> = segments(text, range)
                .map(|(segment, attrs)| Span::styled(segment.to_string(), style_for(attrs)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn segments<'a>(
    text: &'a StyledText,
    range: Range<usize>,
) -> impl Iterator<Item = (&'a str, &'a Attributes)> {
    text.runs_in(range.clone()).map(move |run| {
        let start = run.range.start.max(range.start);
        let end = run.range.end.min(range.end);
        (&text.text()[start..end], &run.attributes)
    })
}

fn content_style(attrs: &Attributes) -> ContentStyle {
    let term_color = |rgb: Rgb| crossterm::style::Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    };

    let mut style = ContentStyle::new();
    style.foreground_color = Some(term_color(attrs.foreground));
    style.background_color = attrs.background.map(term_color);
    if matches!(attrs.font, FontRole::Bold | FontRole::Heading(_)) {
        style.attributes.set(Attribute::Bold);
    }
    if let Some(underline) = attrs.underline {
        style.attributes.set(Attribute::Underlined);
        style.underline_color = Some(term_color(underline));
    } else if attrs.link.is_some() {
        style.attributes.set(Attribute::Underlined);
    }
    if attrs.strikethrough {
        style.attributes.set(Attribute::CrossedOut);
    }
    style
}

/// Writes `text` with ANSI styling, one output line per rendered line.
pub fn print_styled(text: &StyledText, out: &mut impl Write) -> io::Result<()> {
    for range in line_ranges(text.text()) {
        for (segment, attrs) in segments(text, range) {
            queue!(
                out,
                PrintStyledContent(StyledContent::new(content_style(attrs), segment))
            )?;
        }
        writeln!(out)?;
    }
    out.flush()
}
