//! Headless text selection over rendered output.
//!
//! Offsets are byte offsets into [`StyledText::text`] and are always snapped
//! back to a char boundary, so a selection can be sliced without checks.

pub mod menu;
pub mod preview;

use std::ops::Range;

use crate::render::StyledText;

pub use menu::MenuItem;
pub use preview::{MATH_PREVIEW_TITLE, MathPreview, math_preview};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    range: Range<usize>,
}

impl Selection {
    /// Builds a selection from two offsets in either order.
    pub fn new(text: &StyledText, anchor: usize, head: usize) -> Self {
        let anchor = floor_boundary(text.text(), anchor);
        let head = floor_boundary(text.text(), head);
        Self {
            range: anchor.min(head)..anchor.max(head),
        }
    }

    pub fn all(text: &StyledText) -> Self {
        Self {
            range: 0..text.len(),
        }
    }

    pub fn caret(text: &StyledText, offset: usize) -> Self {
        Self::new(text, offset, offset)
    }

    /// Selects the word under `offset`, or places a caret there when it is
    /// not on a word.
    pub fn word_at(text: &StyledText, offset: usize) -> Self {
        let s = text.text();
        let offset = floor_boundary(s, offset);
        let is_word = |c: char| c.is_alphanumeric() || c == '_';

        match s[offset..].chars().next() {
            Some(c) if is_word(c) => {}
            _ => return Self::caret(text, offset),
        }

        let start = s[..offset]
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_word(*c))
            .last()
            .map_or(offset, |(i, _)| i);
        let end = s[offset..]
            .char_indices()
            .find(|(_, c)| !is_word(*c))
            .map_or(s.len(), |(i, _)| offset + i);

        Self { range: start..end }
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn covers_all(&self, text: &StyledText) -> bool {
        self.range == (0..text.len())
    }

    /// Grows the selection so that it reaches `offset`.
    pub fn extend_to(&mut self, text: &StyledText, offset: usize) {
        let offset = floor_boundary(text.text(), offset);
        if offset < self.range.start {
            self.range.start = offset;
        } else {
            self.range.end = self.range.end.max(offset);
        }
    }

    /// Plain text of the selected range.
    pub fn copy_text(&self, text: &StyledText) -> String {
        text.text()
            .get(self.range.clone())
            .unwrap_or_default()
            .to_string()
    }

    /// Link destinations touched by the selection, first occurrence first.
    pub fn links(&self, text: &StyledText) -> Vec<String> {
        let mut links: Vec<String> = Vec::new();
        for run in text.runs_in(self.range.clone()) {
            if let Some(link) = &run.attributes.link
                && !links.contains(link)
            {
                links.push(link.clone());
            }
        }
        links
    }
}

fn floor_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
