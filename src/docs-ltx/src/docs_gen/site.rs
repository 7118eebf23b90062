//! Site metadata read from the documentation site's configuration file.
//!
//! The configuration is usually JavaScript, so it is scanned with regexes for
//! a handful of keys instead of being evaluated.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Title used when the site configuration has none.
pub const DEFAULT_SITE_TITLE: &str = "Documentation";

static TITLE: LazyLock<Regex> = LazyLock::new(|| config_string_regex("title", r#"[^"']+"#));
static TAGLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b["']?tagline["']?\s*:\s*["']([\s\S]*?)["']\s*,"#).expect("valid regex")
});
static URL: LazyLock<Regex> = LazyLock::new(|| config_string_regex("url", r#"[^"']+"#));
static BASE_URL: LazyLock<Regex> = LazyLock::new(|| config_string_regex("baseUrl", r#"[^"']+"#));
static BRAND_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(docs|documentation)$").expect("valid regex"));

fn config_string_regex(key: &str, value: &str) -> Regex {
    Regex::new(&format!(r#"\b["']?{key}["']?\s*:\s*["']({value})["']"#)).expect("valid regex")
}

/// Read-only facts about the documentation site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    /// Absolute site root including the base path, without a trailing slash. Empty when unknown.
    pub site_url: String,
    pub title: String,
    pub tagline: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            title: DEFAULT_SITE_TITLE.to_string(),
            tagline: String::new(),
        }
    }
}

impl SiteMeta {
    /// Reads site metadata from a configuration file, falling back to defaults when it can't be read.
    pub async fn load(path: &Path) -> Self {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Self::from_config_str(&content),
            Err(e) => {
                tracing::warn!("Cannot read site configuration {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Extracts site metadata from configuration source text.
    pub fn from_config_str(content: &str) -> Self {
        let capture = |re: &Regex| re.captures(content).and_then(|c| c.get(1)).map(|m| m.as_str().trim().to_string());

        let title = capture(&TITLE)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string());
        let tagline = capture(&TAGLINE).unwrap_or_default();
        let site_url = match capture(&URL) {
            Some(url) if !url.is_empty() => join_site_url(&url, capture(&BASE_URL).as_deref().unwrap_or("/")),
            _ => String::new(),
        };

        Self {
            site_url,
            title,
            tagline,
        }
    }

    /// The product name used in generated descriptions: the site title minus a trailing "Docs"/"Documentation".
    ///
    /// # Examples
    ///
    /// ```
    /// # use docs_ltx::docs_gen::site::SiteMeta;
    /// let site = SiteMeta { title: "Acme Docs".into(), ..SiteMeta::default() };
    /// assert_eq!(site.brand(), "Acme");
    /// ```
    pub fn brand(&self) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            return DEFAULT_SITE_TITLE.to_string();
        }
        BRAND_SUFFIX.replace(title, "").trim().to_string()
    }
}

/// Joins a site origin and base path into a site root without a trailing slash.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::site::join_site_url;
/// assert_eq!(join_site_url("https://docs.acme.dev/", "/"), "https://docs.acme.dev");
/// assert_eq!(join_site_url("https://acme.dev", "docs/"), "https://acme.dev/docs");
/// ```
pub fn join_site_url(url: &str, base_url: &str) -> String {
    let base = if base_url.starts_with('/') {
        base_url.to_string()
    } else {
        format!("/{base_url}")
    };
    format!("{}{}", url.trim_end_matches('/'), base)
        .trim_end_matches('/')
        .to_string()
}
