//! MDX to portable Markdown.
//!
//! A best-effort regex pass: frontmatter, `mdx-code-block` fences, imports,
//! `[comment]:` directives and a fixed set of component wrappers are removed.
//! Wrapper tags go but their inner text stays. Nested or unusual markup may
//! survive untouched.

use crate::docs_gen::frontmatter::strip_frontmatter;
use regex::Regex;
use std::sync::LazyLock;

/// Removal rules, applied in order.
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // fenced blocks that only wrap imports for the MDX renderer
        (r"```mdx-code-block\n[\s\S]*?```\n?", ""),
        (r"(?m)^import\s+.+$", ""),
        (r"(?m)^\[comment\]:\s*#\s*\(.*\)\s*$", ""),
        // opening tags may span lines
        (r"<Tabs[\s\S]*?>", ""),
        (r"</Tabs>", ""),
        (r"<TabItem[\s\S]*?>", ""),
        (r"</TabItem>", ""),
        (r"(?i)<details[\s\S]*?>", ""),
        (r"(?i)</details>", ""),
        (r"(?i)<summary[\s\S]*?>", ""),
        (r"(?i)</summary>", ""),
        (r"\n{3,}", "\n\n"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
    .collect()
});

/// Produces portable Markdown from an MDX document.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::cleaner::clean_mdx_content;
/// let cleaned = clean_mdx_content("---\ntitle: T\n---\nimport X from 'x';\n\nHello");
/// assert_eq!(cleaned, "Hello");
/// ```
pub fn clean_mdx_content(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n");
    let mut cleaned = strip_frontmatter(&normalized).to_string();
    for (rule, replacement) in RULES.iter() {
        cleaned = rule.replace_all(&cleaned, *replacement).into_owned();
    }
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_tabs_keep_inner_text() {
        let input = "<Tabs defaultValue=\"a\">\n<TabItem value=\"a\">\nHello\n</TabItem>\n</Tabs>";
        assert_eq!(clean_mdx_content(input), "Hello");
    }

    #[test]
    fn test_multiline_opening_tag() {
        let input = indoc! {r#"
            <Tabs
              defaultValue="rust"
              values={[
                {label: 'Rust', value: 'rust'},
              ]}>
            <TabItem value="rust">

            cargo add acme

            </TabItem>
            </Tabs>
        "#};
        assert_eq!(clean_mdx_content(input), "cargo add acme");
    }

    #[test]
    fn test_removes_mdx_code_block_fence() {
        let input = indoc! {r#"
            ```mdx-code-block
            import Tabs from '@theme/Tabs';
            import TabItem from '@theme/TabItem';
            ```
            Body
        "#};
        assert_eq!(clean_mdx_content(input), "Body");
    }

    #[test]
    fn test_keeps_regular_code_fences() {
        let input = "```rust\nfn main() {}\n```";
        assert_eq!(clean_mdx_content(input), input);
    }

    #[test]
    fn test_removes_imports_and_comment_directives() {
        let input = indoc! {r#"
            import Foo from './foo';
            [comment]: # (mx-abstract)

            Text that stays.
            Not an import statement.
        "#};
        assert_eq!(clean_mdx_content(input), "Text that stays.\nNot an import statement.");
    }

    #[test]
    fn test_details_and_summary_case_insensitive() {
        let input = "<Details open>\n<Summary>Click</Summary>\n\nHidden text\n</DETAILS>";
        assert_eq!(clean_mdx_content(input), "Click\n\nHidden text");
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(clean_mdx_content("a\n\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_strips_frontmatter_and_trims() {
        let input = "---\ntitle: Hello\nslug: /x\n---\n\n\n  # Hello\n\nWorld\n\n";
        assert_eq!(clean_mdx_content(input), "# Hello\n\nWorld");
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(clean_mdx_content("a\r\n\r\n\r\n\r\nb"), "a\n\nb");
    }
}
