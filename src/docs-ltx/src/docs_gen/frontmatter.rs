//! Lightweight frontmatter parsing.
//!
//! Only the first `---` delimited block at the very top of a document is
//! considered, and only the `id`, `title`, `slug` and `description` keys are
//! read. Each value is a single line, optionally wrapped in matching quotes.
//! Anything else in the block is ignored.

use regex::Regex;
use std::sync::LazyLock;

const DELIMITER: &str = "---";
const CLOSING_DELIMITER: &str = "\n---";

static ID_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("id"));
static TITLE_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("title"));
static SLUG_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("slug"));
static DESCRIPTION_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("description"));

fn field_regex(key: &str) -> Regex {
    Regex::new(&format!(r"(?m)^[ \t]*{key}:[ \t]*(.+?)\s*$")).expect("valid regex")
}

/// The recognized fields of a document's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl Frontmatter {
    /// Parses the frontmatter at the top of `content`.
    ///
    /// Missing or unterminated frontmatter yields an empty instance.
    pub fn parse(content: &str) -> Self {
        match split_frontmatter(content).0 {
            None => Self::default(),
            Some(block) => Self {
                id: read_field(&ID_FIELD, block),
                title: read_field(&TITLE_FIELD, block),
                slug: read_field(&SLUG_FIELD, block),
                description: read_field(&DESCRIPTION_FIELD, block),
            },
        }
    }

    /// Slug override, when the declared slug is an absolute path.
    pub fn absolute_slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| s.starts_with('/'))
    }
}

/// Splits a document into its frontmatter block (without delimiters) and the remaining body.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::frontmatter::split_frontmatter;
/// let (block, body) = split_frontmatter("---\ntitle: Hi\n---\nBody");
/// assert_eq!(block, Some("\ntitle: Hi"));
/// assert_eq!(body, "\nBody");
///
/// let (block, body) = split_frontmatter("No frontmatter");
/// assert_eq!(block, None);
/// assert_eq!(body, "No frontmatter");
/// ```
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    if !content.starts_with(DELIMITER) {
        return (None, content);
    }
    match content[DELIMITER.len()..].find(CLOSING_DELIMITER) {
        None => (None, content),
        Some(offset) => {
            let end = DELIMITER.len() + offset;
            (Some(&content[DELIMITER.len()..end]), &content[end + CLOSING_DELIMITER.len()..])
        }
    }
}

/// Removes the frontmatter block, returning only the document body.
pub fn strip_frontmatter(content: &str) -> &str {
    split_frontmatter(content).1
}

fn read_field(field: &Regex, block: &str) -> Option<String> {
    field
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| unquote(m.as_str()).trim().to_string())
        .filter(|v| !v.is_empty())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_all_fields() {
        let doc = indoc! {r#"
            ---
            id: setup
            title: "Setting Up"
            slug: '/guides/setup'
            description: How to set up the SDK.
            sidebar_position: 3
            ---
            # Body
        "#};
        let fm = Frontmatter::parse(doc);
        assert_eq!(fm.id.as_deref(), Some("setup"));
        assert_eq!(fm.title.as_deref(), Some("Setting Up"));
        assert_eq!(fm.slug.as_deref(), Some("/guides/setup"));
        assert_eq!(fm.description.as_deref(), Some("How to set up the SDK."));
    }

    #[test]
    fn test_parse_missing_fields() {
        let fm = Frontmatter::parse("---\ntitle: Only Title\n---\nText");
        assert_eq!(fm.title.as_deref(), Some("Only Title"));
        assert!(fm.id.is_none());
        assert!(fm.slug.is_none());
        assert!(fm.description.is_none());
    }

    #[test]
    fn test_parse_without_frontmatter() {
        assert_eq!(Frontmatter::parse("# Heading\n\ntitle: not frontmatter"), Frontmatter::default());
    }

    #[test]
    fn test_parse_unterminated_frontmatter() {
        assert_eq!(Frontmatter::parse("---\ntitle: Dangling\n"), Frontmatter::default());
    }

    #[test]
    fn test_parse_does_not_match_suffixed_keys() {
        let fm = Frontmatter::parse("---\nsubtitle: Nope\nsidebar_label: Nope\n---\n");
        assert!(fm.title.is_none());
    }

    #[test]
    fn test_empty_value_does_not_borrow_next_line() {
        let fm = Frontmatter::parse("---\ntitle:\nid: next\n---\n");
        assert!(fm.title.is_none());
        assert_eq!(fm.id.as_deref(), Some("next"));
    }

    #[test]
    fn test_parse_empty_quoted_value_is_none() {
        let fm = Frontmatter::parse("---\ntitle: \"\"\n---\n");
        assert!(fm.title.is_none());
    }

    #[test]
    fn test_unbalanced_quote_is_kept() {
        let fm = Frontmatter::parse("---\ntitle: \"Half quoted\n---\n");
        assert_eq!(fm.title.as_deref(), Some("\"Half quoted"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let fm = Frontmatter::parse("---\r\ntitle: Windows\r\nid: win\r\n---\r\nBody");
        assert_eq!(fm.title.as_deref(), Some("Windows"));
        assert_eq!(fm.id.as_deref(), Some("win"));
    }

    #[test]
    fn test_absolute_slug() {
        let fm = Frontmatter::parse("---\nslug: /foo/bar\n---\n");
        assert_eq!(fm.absolute_slug(), Some("/foo/bar"));

        let fm = Frontmatter::parse("---\nslug: relative\n---\n");
        assert_eq!(fm.absolute_slug(), None);
    }

    #[test]
    fn test_strip_frontmatter() {
        assert_eq!(strip_frontmatter("---\nid: x\n---\nHello"), "\nHello");
        assert_eq!(strip_frontmatter("Hello"), "Hello");
    }
}
