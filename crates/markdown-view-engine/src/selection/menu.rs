use crate::render::StyledText;

use super::Selection;

/// Actions offered for a text selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Copy,
    SelectAll,
    Share,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Copy, MenuItem::SelectAll, MenuItem::Share];

    pub fn title(self) -> &'static str {
        match self {
            MenuItem::Copy => "Copy",
            MenuItem::SelectAll => "Select All",
            MenuItem::Share => "Share",
        }
    }

    pub fn text_selection_menu() -> Vec<MenuItem> {
        Self::ALL.to_vec()
    }

    pub fn is_enabled(self, selection: &Selection, text: &StyledText) -> bool {
        match self {
            MenuItem::Copy | MenuItem::Share => !selection.is_empty(),
            MenuItem::SelectAll => !text.is_empty() && !selection.covers_all(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InlineNode;
    use crate::render::{Theme, render_inlines};

    fn text() -> StyledText {
        render_inlines(&[InlineNode::text("some words")], &Theme::default())
    }

    #[test]
    fn menu_lists_every_action_in_order() {
        let titles: Vec<_> = MenuItem::text_selection_menu()
            .into_iter()
            .map(MenuItem::title)
            .collect();
        assert_eq!(titles, vec!["Copy", "Select All", "Share"]);
    }

    #[test]
    fn caret_only_allows_select_all() {
        let text = text();
        let caret = Selection::caret(&text, 2);

        assert!(!MenuItem::Copy.is_enabled(&caret, &text));
        assert!(!MenuItem::Share.is_enabled(&caret, &text));
        assert!(MenuItem::SelectAll.is_enabled(&caret, &text));
    }

    #[test]
    fn full_selection_disables_select_all() {
        let text = text();
        let all = Selection::all(&text);

        assert!(MenuItem::Copy.is_enabled(&all, &text));
        assert!(!MenuItem::SelectAll.is_enabled(&all, &text));
    }

    #[test]
    fn nothing_is_enabled_on_empty_text() {
        let empty = StyledText::new();
        let selection = Selection::all(&empty);

        assert!(
            MenuItem::text_selection_menu()
                .into_iter()
                .all(|item| !item.is_enabled(&selection, &empty))
        );
    }
}
