//! URL and path computation for resolved documents.

use crate::docs_gen::errors::Result;
use crate::docs_gen::frontmatter::Frontmatter;
use std::path::{Path, PathBuf};
use url::Url;

/// Recognized content file extensions, in resolution preference order.
pub const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Suffix appended to a URL path to get its Markdown mirror.
pub const MIRROR_SUFFIX: &str = ".md";

/// True if the file name ends in a content extension (case-insensitive).
pub fn has_content_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.iter().any(|c| ext.eq_ignore_ascii_case(c)))
}

/// Removes a trailing `.md` or `.mdx` (case-insensitive) from a path string.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::url_utils::strip_content_extension;
/// assert_eq!(strip_content_extension("guides/setup.mdx"), "guides/setup");
/// assert_eq!(strip_content_extension("guides/README.MD"), "guides/README");
/// assert_eq!(strip_content_extension("guides/data.json"), "guides/data.json");
/// ```
pub fn strip_content_extension(path: &str) -> &str {
    for ext in CONTENT_EXTENSIONS {
        let suffix_len = ext.len() + 1;
        if path.len() > suffix_len && path.is_char_boundary(path.len() - suffix_len) {
            let (stem, suffix) = path.split_at(path.len() - suffix_len);
            if suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(ext) {
                return stem;
            }
        }
    }
    path
}

/// The file's path relative to the docs root, with `/` separators and without a content extension.
///
/// Returns `None` when the file is not under the docs root.
pub fn docs_relative_ref(docs_dir: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(docs_dir).ok()?;
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
        .replace('\\', "/");
    Some(strip_content_extension(&joined).to_string())
}

/// Computes the site-relative URL path of a document.
///
/// An absolute frontmatter slug wins. Otherwise the path mirrors the resolved
/// file's location under the docs root, or the identifier itself when the
/// document did not resolve.
pub fn url_path(id: &str, docs_dir: &Path, resolved: Option<&Path>, frontmatter: &Frontmatter) -> String {
    if let Some(slug) = frontmatter.absolute_slug() {
        return slug.to_string();
    }
    match resolved.and_then(|file| docs_relative_ref(docs_dir, file)) {
        Some(relative) => format!("/{relative}"),
        None => format!("/{id}"),
    }
}

/// Prefixes a URL path with the site root, when one is known.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::url_utils::absolute_url;
/// assert_eq!(absolute_url("https://docs.acme.dev/", "/guides/setup"), "https://docs.acme.dev/guides/setup");
/// assert_eq!(absolute_url("", "/guides/setup"), "/guides/setup");
/// ```
pub fn absolute_url(site_url: &str, path: &str) -> String {
    if site_url.is_empty() {
        path.to_string()
    } else {
        format!("{}{}", site_url.trim_end_matches('/'), path)
    }
}

/// Validates a user-supplied site URL and removes any trailing slash.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed.
pub fn normalize_site_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    Url::parse(trimmed)?;
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Segments of a URL path that survive mirroring: empty, `.` and `..` segments are dropped.
fn mirror_segments(url_path: &str) -> Vec<&str> {
    url_path
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .collect()
}

/// Site-relative path of the Markdown mirror of a URL path, e.g. `/guides/setup.md`.
///
/// Uses the same normalization as [`mirror_path`], so two URL paths share a
/// mirror exactly when they produce the same value here.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::url_utils::mirror_url_path;
/// assert_eq!(mirror_url_path("/foo/"), "/foo.md");
/// assert_eq!(mirror_url_path("/"), "/index.md");
/// ```
pub fn mirror_url_path(url_path: &str) -> String {
    match mirror_segments(url_path).as_slice() {
        [] => format!("/index{MIRROR_SUFFIX}"),
        segments => format!("/{}{MIRROR_SUFFIX}", segments.join("/")),
    }
}

/// Where the Markdown mirror of a URL path is written under the output directory.
///
/// Empty, `.` and `..` segments are dropped so a slug can never escape the output directory.
pub fn mirror_path(static_dir: &Path, url_path: &str) -> PathBuf {
    let segments = mirror_segments(url_path);
    let Some((last, parents)) = segments.split_last() else {
        return static_dir.join(format!("index{MIRROR_SUFFIX}"));
    };
    let mut path = static_dir.to_path_buf();
    for segment in parents {
        path.push(segment);
    }
    path.push(format!("{last}{MIRROR_SUFFIX}"));
    path
}
