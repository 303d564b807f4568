use std::ops::Range;

use markdown_view_engine::{MathPreview, MenuItem, Selection, StyledText, math_preview};

use crate::convert::line_ranges;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    Menu,
    Math(MathPreview),
}

/// Viewer state: a cursor line, an optional line selection and popups.
pub struct App {
    pub text: StyledText,
    lines: Vec<Range<usize>>,
    pub cursor: usize,
    pub scroll: usize,
    /// Line where `v` started a selection.
    anchor: Option<usize>,
    selection: Selection,
    pub popup: Option<Popup>,
    pub status: Option<String>,
    scroll_step: usize,
    viewport_height: usize,
}

impl App {
    pub fn new(text: StyledText, scroll_step: u16) -> Self {
        let lines = line_ranges(text.text());
        let selection = Selection::caret(&text, 0);
        Self {
            text,
            lines,
            cursor: 0,
            scroll: 0,
            anchor: None,
            selection,
            popup: None,
            status: None,
            scroll_step: usize::from(scroll_step.max(1)),
            viewport_height: 1,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Lines touched by the selection, for highlighting.
    pub fn selected_lines(&self) -> Range<usize> {
        if self.selection.is_empty() {
            return 0..0;
        }
        let range = self.selection.range();
        let first = self
            .lines
            .iter()
            .position(|line| line.end >= range.start)
            .unwrap_or(0);
        let last = self
            .lines
            .iter()
            .rposition(|line| line.start <= range.end)
            .unwrap_or(first);
        first..last + 1
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        self.keep_cursor_visible();
    }

    pub fn move_down(&mut self) {
        self.move_to(self.cursor.saturating_add(1));
    }

    pub fn move_up(&mut self) {
        self.move_to(self.cursor.saturating_sub(1));
    }

    pub fn page_down(&mut self) {
        self.move_to(self.cursor.saturating_add(self.scroll_step));
    }

    pub fn page_up(&mut self) {
        self.move_to(self.cursor.saturating_sub(self.scroll_step));
    }

    fn move_to(&mut self, line: usize) {
        self.cursor = line.min(self.lines.len().saturating_sub(1));
        self.keep_cursor_visible();
        if self.anchor.is_some() {
            self.update_line_selection();
        }
    }

    fn keep_cursor_visible(&mut self) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.viewport_height {
            self.scroll = self.cursor + 1 - self.viewport_height;
        }
    }

    pub fn toggle_line_selection(&mut self) {
        if self.anchor.take().is_some() {
            self.selection = Selection::caret(&self.text, self.lines[self.cursor].start);
        } else {
            self.anchor = Some(self.cursor);
            self.update_line_selection();
        }
    }

    fn update_line_selection(&mut self) {
        let Some(anchor) = self.anchor else {
            return;
        };
        let first = anchor.min(self.cursor);
        let last = anchor.max(self.cursor);
        self.selection = Selection::new(&self.text, self.lines[first].start, self.lines[last].end);
    }

    pub fn select_all(&mut self) {
        self.anchor = None;
        self.selection = Selection::all(&self.text);
    }

    /// What `y` puts on the clipboard: the selection, or the cursor line.
    pub fn copy_payload(&self) -> String {
        if self.selection.is_empty() {
            let line = self.lines[self.cursor].clone();
            Selection::new(&self.text, line.start, line.end).copy_text(&self.text)
        } else {
            self.selection.copy_text(&self.text)
        }
    }

    pub fn open_menu(&mut self) {
        self.popup = Some(Popup::Menu);
    }

    pub fn menu_entries(&self) -> Vec<(MenuItem, bool)> {
        MenuItem::text_selection_menu()
            .into_iter()
            .map(|item| (item, item.is_enabled(&self.selection, &self.text)))
            .collect()
    }

    pub fn preview_math(&mut self) {
        let line = self.lines[self.cursor].clone();
        let offset = self
            .text
            .runs_in(line)
            .find(|run| run.attributes.math_latex.is_some())
            .map(|run| run.range.start);

        match offset.and_then(|offset| math_preview(&self.text, offset)) {
            Some(preview) => self.popup = Some(Popup::Math(preview)),
            None => self.status = Some("No equation on this line".to_string()),
        }
    }

    /// Returns false when there was nothing to close.
    pub fn close_popup(&mut self) -> bool {
        self.popup.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_view_engine::{Theme, render_markdown};
    use pretty_assertions::assert_eq;

    fn app(markdown: &str) -> App {
        App::new(render_markdown(markdown, &Theme::default()), 2)
    }

    #[test]
    fn cursor_stays_inside_document() {
        let mut app = app("a\n\nb");
        app.move_up();
        assert_eq!(app.cursor, 0);

        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.cursor, app.line_count() - 1);
    }

    #[test]
    fn paging_uses_scroll_step_and_scrolls_view() {
        let mut app = app("1\n\n2\n\n3\n\n4\n\n5");
        app.set_viewport_height(3);

        app.page_down();
        app.page_down();
        assert_eq!(app.cursor, 4);
        assert_eq!(app.scroll, 2);

        app.page_up();
        app.page_up();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn copy_without_selection_takes_cursor_line() {
        let mut app = app("- one\n- two\n");
        app.move_down();
        assert_eq!(app.copy_payload(), "• two");
    }

    #[test]
    fn line_selection_follows_cursor() {
        let mut app = app("- one\n- two\n- three\n");
        app.toggle_line_selection();
        app.move_down();

        assert_eq!(app.copy_payload(), "• one\n• two");
        assert_eq!(app.selected_lines(), 0..2);

        app.toggle_line_selection();
        assert!(app.selection().is_empty());
    }

    #[test]
    fn select_all_copies_document() {
        let mut app = app("# T\n\nbody");
        app.select_all();
        assert_eq!(app.copy_payload(), "T\n\nbody");
    }

    #[test]
    fn menu_reflects_selection() {
        let mut app = app("words");
        assert_eq!(
            app.menu_entries(),
            vec![
                (MenuItem::Copy, false),
                (MenuItem::SelectAll, true),
                (MenuItem::Share, false),
            ]
        );

        app.select_all();
        app.open_menu();
        assert_eq!(app.popup, Some(Popup::Menu));
        assert_eq!(
            app.menu_entries(),
            vec![
                (MenuItem::Copy, true),
                (MenuItem::SelectAll, false),
                (MenuItem::Share, true),
            ]
        );
        assert!(app.close_popup());
        assert!(!app.close_popup());
    }

    #[test]
    fn math_preview_on_cursor_line() {
        let mut app = app("plain\n\nsee $x^2$");
        app.preview_math();
        assert_eq!(app.popup, None);
        assert!(app.status.is_some());

        app.move_down();
        app.move_down();
        app.preview_math();
        match &app.popup {
            Some(Popup::Math(preview)) => {
                assert_eq!(preview.title, "Math Equation");
                assert_eq!(preview.latex, "x^2");
            }
            other => panic!("expected math preview, got {other:?}"),
        }
    }
}
