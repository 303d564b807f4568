//! Parser front end tests.
//!
//! Container structure is pinned with inline yaml snapshots; leaf and inline
//! structure is asserted on the nodes directly.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    models::{BlockNode, InlineNode, ListItem},
    parsing::parse_markdown,
};

fn para(text: &str) -> BlockNode {
    BlockNode::paragraph(vec![InlineNode::text(text)])
}

fn code(fence_info: Option<&str>, content: &str) -> BlockNode {
    BlockNode::CodeBlock {
        fence_info: fence_info.map(str::to_string),
        content: content.to_string(),
    }
}

fn first_paragraph(markdown: &str) -> Vec<InlineNode> {
    match parse_markdown(markdown).into_iter().next() {
        Some(BlockNode::Paragraph { content }) => content,
        other => panic!("expected a paragraph, got {other:?}"),
    }
}

#[rstest]
#[case::heading_and_paragraph(
    "# Title\n\nBody text.\n",
    vec![
        BlockNode::Heading { level: 1, content: vec![InlineNode::text("Title")] },
        para("Body text."),
    ]
)]
#[case::thematic_break("a\n\n---\n\nb\n", vec![para("a"), BlockNode::ThematicBreak, para("b")])]
#[case::fenced_code("```rust\nlet x = 1;\n```\n", vec![code(Some("rust"), "let x = 1;\n")])]
#[case::indented_code("    code\n", vec![code(None, "code\n")])]
#[case::html_block("<div>hi</div>\n", vec![code(Some("html"), "<div>hi</div>\n")])]
#[case::front_matter_dropped("---\ntitle: x\n---\n\nBody\n", vec![para("Body")])]
#[case::empty("", vec![])]
fn parses_leaf_blocks(#[case] markdown: &str, #[case] expected: Vec<BlockNode>) {
    assert_eq!(parse_markdown(markdown), expected);
}

#[test]
fn tight_bulleted_list() {
    insta::assert_yaml_snapshot!(parse_markdown("- a\n- b\n"), @r#"
    - BulletedList:
        is_tight: true
        items:
          - children:
              - Paragraph:
                  content:
                    - Text: a
          - children:
              - Paragraph:
                  content:
                    - Text: b
    "#);
}

#[test]
fn loose_list_when_items_are_separated() {
    insta::assert_yaml_snapshot!(parse_markdown("- a\n\n- b\n"), @r#"
    - BulletedList:
        is_tight: false
        items:
          - children:
              - Paragraph:
                  content:
                    - Text: a
          - children:
              - Paragraph:
                  content:
                    - Text: b
    "#);
}

#[rstest]
#[case("1. one\n2. two\n", 1)]
#[case("3. three\n4. four\n", 3)]
fn numbered_list_keeps_start(#[case] markdown: &str, #[case] expected_start: u64) {
    match parse_markdown(markdown).as_slice() {
        [BlockNode::NumberedList { start, items, .. }] => {
            assert_eq!(*start, expected_start);
            assert_eq!(items.len(), 2);
        }
        other => panic!("expected one numbered list, got {other:?}"),
    }
}

#[test]
fn task_list_records_completion() {
    insta::assert_yaml_snapshot!(parse_markdown("- [x] done\n- [ ] todo\n"), @r#"
    - TaskList:
        is_tight: true
        items:
          - is_completed: true
            children:
              - Paragraph:
                  content:
                    - Text: done
          - is_completed: false
            children:
              - Paragraph:
                  content:
                    - Text: todo
    "#);
}

#[test]
fn nested_list_sits_inside_parent_item() {
    insta::assert_yaml_snapshot!(parse_markdown("- a\n  - b\n"), @r#"
    - BulletedList:
        is_tight: true
        items:
          - children:
              - Paragraph:
                  content:
                    - Text: a
              - BulletedList:
                  is_tight: true
                  items:
                    - children:
                        - Paragraph:
                            content:
                              - Text: b
    "#);
}

#[test]
fn code_block_inside_tight_item_follows_item_text() {
    assert_eq!(
        parse_markdown("- item\n  ```rust\n  let x = 1;\n  ```\n"),
        vec![BlockNode::BulletedList {
            is_tight: true,
            items: vec![ListItem::new(vec![
                para("item"),
                code(Some("rust"), "let x = 1;\n"),
            ])],
        }]
    );
}

#[test]
fn blockquote_keeps_its_children() {
    insta::assert_yaml_snapshot!(parse_markdown("> # Title\n> body\n"), @r#"
    - Blockquote:
        children:
          - Heading:
              level: 1
              content:
                - Text: Title
          - Paragraph:
              content:
                - Text: body
    "#);
}

#[test]
fn table_rows_and_alignments() {
    insta::assert_yaml_snapshot!(parse_markdown("| a | b |\n|:--|--:|\n| 1 | 2 |\n"), @r#"
    - Table:
        column_alignments:
          - Left
          - Right
        rows:
          - cells:
              - content:
                  - Text: a
              - content:
                  - Text: b
          - cells:
              - content:
                  - Text: "1"
              - content:
                  - Text: "2"
    "#);
}

#[test]
fn inline_wrappers_nest() {
    let content = first_paragraph("Some *em* and **strong** and ~~gone~~ and `code`");

    assert_eq!(
        content,
        vec![
            InlineNode::text("Some "),
            InlineNode::Emphasis(vec![InlineNode::text("em")]),
            InlineNode::text(" and "),
            InlineNode::Strong(vec![InlineNode::text("strong")]),
            InlineNode::text(" and "),
            InlineNode::Strikethrough(vec![InlineNode::text("gone")]),
            InlineNode::text(" and "),
            InlineNode::Code("code".into()),
        ]
    );
}

#[test]
fn links_and_images_keep_destinations() {
    let content = first_paragraph("[site](https://example.com) ![alt](pic.png)");

    assert_eq!(
        content,
        vec![
            InlineNode::Link {
                destination: "https://example.com".into(),
                children: vec![InlineNode::text("site")],
            },
            InlineNode::text(" "),
            InlineNode::Image {
                source: "pic.png".into(),
                children: vec![InlineNode::text("alt")],
            },
        ]
    );
}

#[test]
fn inline_math_is_captured() {
    let content = first_paragraph("Euler: $e^{i\\pi}+1=0$");

    assert_eq!(
        content,
        vec![
            InlineNode::text("Euler: "),
            InlineNode::Math("e^{i\\pi}+1=0".into()),
        ]
    );
}

#[test]
fn soft_breaks_are_kept() {
    let content = first_paragraph("line one\nline two");

    assert_eq!(
        content,
        vec![
            InlineNode::text("line one"),
            InlineNode::SoftBreak,
            InlineNode::text("line two"),
        ]
    );
}

#[test]
fn footnote_reference_and_definition() {
    let blocks = parse_markdown("Note[^1].\n\n[^1]: The note.\n");

    assert_eq!(
        blocks[0],
        BlockNode::paragraph(vec![
            InlineNode::text("Note"),
            InlineNode::Footnote {
                destination: "1".into(),
                children: vec![InlineNode::text("1")],
            },
            InlineNode::text("."),
        ])
    );
    assert_eq!(
        blocks[1..].to_vec(),
        vec![BlockNode::paragraph(vec![
            InlineNode::Footnote {
                destination: "1".into(),
                children: vec![InlineNode::text("1")],
            },
            InlineNode::text(" "),
            InlineNode::text("The note."),
        ])]
    );
}
