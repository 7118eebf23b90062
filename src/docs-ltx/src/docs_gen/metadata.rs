//! Title, description and URL extraction for resolved documents.

use crate::docs_gen::frontmatter::{Frontmatter, strip_frontmatter};
use crate::docs_gen::resolver::ResolvedDoc;
use crate::docs_gen::text_utils::{collapse_whitespace, humanize_segment, humanize_segment_lower, title_from_id};
use crate::docs_gen::url_utils::{absolute_url, docs_relative_ref, url_path};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Descriptions shorter than this (in characters) are considered poor.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid regex"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));
static MDX_CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)mdx-code-block").expect("valid regex"));
static ADMONITION_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^:::").expect("valid regex"));
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)please\s+take\s+note").expect("valid regex"));

/// Where a document's description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionSource {
    Frontmatter,
    Content,
    None,
}

/// Everything the index needs to know about one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMeta {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: DescriptionSource,
    /// Absolute URL when the site URL is known, otherwise the site-relative path.
    pub url: String,
    pub path: Option<PathBuf>,
    /// Docs-root-relative path of the backing file, without extension.
    pub relative_ref: Option<String>,
}

impl DocMeta {
    /// Extracts metadata from a resolved (or unresolved) document.
    ///
    /// Unresolved or unreadable documents get an identifier-derived title and no description.
    pub fn extract(doc: &ResolvedDoc, docs_dir: &Path, site_url: &str, context_parents: &[String]) -> Self {
        let frontmatter = doc
            .content
            .as_deref()
            .map(Frontmatter::parse)
            .unwrap_or_default();
        let relative_ref = doc.path.as_deref().and_then(|p| docs_relative_ref(docs_dir, p));
        let url = absolute_url(site_url, &url_path(&doc.id, docs_dir, doc.path.as_deref(), &frontmatter));

        let mut meta = Self {
            id: doc.id.clone(),
            title: title_from_id(&doc.id),
            description: String::new(),
            source: DescriptionSource::None,
            url,
            path: doc.path.clone(),
            relative_ref,
        };

        let Some(content) = doc.content.as_deref() else {
            return meta;
        };

        let title = frontmatter.title.clone().unwrap_or_else(|| meta.title.clone());
        meta.title = match meta.relative_ref.as_deref() {
            Some(relative) => contextualize_title(title, relative, context_parents),
            None => title,
        };

        match frontmatter.description {
            Some(description) => {
                meta.description = description;
                meta.source = DescriptionSource::Frontmatter;
            }
            None => {
                meta.description = extract_first_paragraph(content);
                if !meta.description.is_empty() {
                    meta.source = DescriptionSource::Content;
                }
            }
        }
        meta
    }

    /// The description to show in the index.
    ///
    /// Frontmatter descriptions are used as written. Any other description that
    /// fails the quality gate is replaced by a generated one.
    pub fn index_description(&self, brand: &str) -> String {
        let description = collapse_whitespace(&self.description);
        if self.source != DescriptionSource::Frontmatter && is_poor_description(&description) {
            generated_description(&self.id, self.relative_ref.as_deref(), brand)
        } else {
            description
        }
    }
}

/// Prefixes a generic title with its parent section when the parent is listed in `context_parents`.
///
/// Only titles equal to the humanized file name are changed, so an explicit
/// frontmatter title like "Authentication" under `rest-api/auth` is left alone.
pub fn contextualize_title(title: String, relative_ref: &str, context_parents: &[String]) -> String {
    let parts: Vec<&str> = relative_ref.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return title;
    }
    let parent = parts[parts.len() - 2];
    let last = parts[parts.len() - 1];
    if context_parents.iter().any(|p| p == parent) && title.trim() == humanize_segment(last) {
        format!("{} {}", humanize_segment(parent), title)
    } else {
        title
    }
}

/// Finds the first line of prose in a document body.
///
/// Frontmatter, headings, `[comment]:` lines, raw markup lines and everything
/// inside `:::` admonitions are skipped. Links are reduced to their text and
/// inline code markers are dropped.
pub fn extract_first_paragraph(content: &str) -> String {
    let mut in_admonition = false;
    for line in strip_frontmatter(content).lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("[comment]:") {
            continue;
        }
        if line.starts_with(":::") {
            in_admonition = !in_admonition;
            continue;
        }
        if in_admonition || line.starts_with('#') || line.starts_with('<') {
            continue;
        }
        let line = MARKDOWN_LINK.replace_all(line, "$1");
        let line = INLINE_CODE.replace_all(&line, "$1");
        let line = collapse_whitespace(&line);
        if !line.is_empty() {
            return line;
        }
    }
    String::new()
}

/// True if a description is too short, is markup, or is boilerplate.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::metadata::is_poor_description;
/// assert!(is_poor_description("Too short"));
/// assert!(!is_poor_description("Deploy a validator node on mainnet."));
/// ```
pub fn is_poor_description(description: &str) -> bool {
    let d = description.trim();
    d.is_empty()
        || d.starts_with("```")
        || MDX_CODE_BLOCK.is_match(d)
        || ADMONITION_LINE.is_match(d)
        || PLACEHOLDER.is_match(d)
        || d.chars().count() < MIN_DESCRIPTION_CHARS
}

/// Builds a "Learn more about ..." description from a document's location.
///
/// `relative_ref` (the docs-relative file path without extension) is preferred
/// over the identifier when the document resolved.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::metadata::generated_description;
/// assert_eq!(generated_description("developers/overview", None, "Acme"), "Learn more about Acme developers");
/// assert_eq!(generated_description("index", None, "Acme"), "Learn more about Acme documentation");
/// ```
pub fn generated_description(id: &str, relative_ref: Option<&str>, brand: &str) -> String {
    let reference = relative_ref.unwrap_or(id);
    let mut parts: Vec<&str> = reference
        .split('/')
        .filter(|p| !p.is_empty() && *p != "index")
        .collect();
    if parts.len() >= 2 && parts.last().is_some_and(|p| p.eq_ignore_ascii_case("overview")) {
        parts.pop();
    }
    if parts.is_empty() {
        return format!("Learn more about {brand} documentation");
    }
    let phrase = parts
        .iter()
        .map(|p| humanize_segment_lower(p))
        .collect::<Vec<_>>()
        .join(" ");
    format!("Learn more about {brand} {phrase}").trim().to_string()
}
