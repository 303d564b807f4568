// Shared by several bench targets; each one only uses part of it.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with *some* content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted `code` and **bold**\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n";
    base.repeat(size)
}

/// Lists whose items carry blocks that have to be hoisted out, which is the
/// expensive path through normalization.
#[allow(dead_code)]
pub fn generate_list_heavy_markdown(lists: usize, items: usize) -> String {
    let mut content = String::new();

    for list in 0..lists {
        content.push_str(&format!("## List {list}\n\n"));
        for item in 0..items {
            content.push_str(&format!("{}. Item {item}\n", item + 1));
            match item % 4 {
                0 => content.push_str("   ```rust\n   let value = 42;\n   ```\n"),
                1 => content.push_str("   > quoted inside an item\n"),
                2 => content.push_str("   - nested\n     ---\n"),
                _ => {}
            }
        }
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
pub fn generate_quote_heavy_markdown(quotes: usize) -> String {
    let quote = "> # Heading\n>\n> Text with a [link](https://example.com).\n>\n> - one\n> - two\n>\n> | x | y |\n> |---|---|\n> | 1 | 2 |\n\n";
    quote.repeat(quotes)
}
