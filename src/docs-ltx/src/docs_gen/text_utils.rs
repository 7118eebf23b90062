//! Text manipulation utilities.

use regex::Regex;
use std::sync::LazyLock;

static SEGMENT_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]+").expect("valid regex"));
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Path segments whose humanized form is not a plain capitalization of their words.
const SPECIAL_TITLE_SEGMENTS: &[(&str, &str)] = &[("rest-api", "Rest API"), ("sdk-and-tools", "SDK and Tools")];

/// Upper-cases the first character of a string, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::text_utils::capitalize_first;
/// assert_eq!(capitalize_first("hello"), "Hello");
/// assert_eq!(capitalize_first("iOS"), "IOS");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Humanizes a single path segment for use in a title.
///
/// Words are split on `-` and `_`, each word is capitalized, and the words are
/// joined with spaces. A few known segments have fixed renderings.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::text_utils::humanize_segment;
/// assert_eq!(humanize_segment("smart_contract-api"), "Smart Contract Api");
/// assert_eq!(humanize_segment("rest-api"), "Rest API");
/// ```
pub fn humanize_segment(segment: &str) -> String {
    let segment = segment.trim();
    if let Some((_, special)) = SPECIAL_TITLE_SEGMENTS.iter().find(|(key, _)| *key == segment) {
        return special.to_string();
    }

    SEGMENT_SEPARATORS
        .split(segment)
        .filter(|w| !w.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Humanized, lower-cased form of a segment, for use inside generated sentences.
pub fn humanize_segment_lower(segment: &str) -> String {
    humanize_segment(segment).to_lowercase()
}

/// Builds a title from the last `/`-separated segment of a document identifier.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::text_utils::title_from_id;
/// assert_eq!(title_from_id("developers/getting-started"), "Getting Started");
/// assert_eq!(title_from_id("intro"), "Intro");
/// ```
pub fn title_from_id(id: &str) -> String {
    let last = id.rsplit('/').next().unwrap_or(id);
    collapse_whitespace(&humanize_segment(last))
}

/// Replaces every whitespace run with a single space and trims the ends.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUNS.replace_all(s, " ").trim().to_string()
}

/// Replaces every whitespace run with a hyphen.
pub fn kebab_whitespace(s: &str) -> String {
    WHITESPACE_RUNS.replace_all(s, "-").into_owned()
}

/// Clips a string to at most `max_chars` characters, ending clipped text with `...`.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::text_utils::clip;
/// assert_eq!(clip("abcdef", 5), "ab...");
/// assert_eq!(clip("abc", 5), "abc");
/// ```
pub fn clip(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut clipped: String = s.chars().take(keep).collect();
    clipped.push_str("...");
    clipped
}
