//! Maps document identifiers to files under the docs root.
//!
//! Resolution tries a fixed sequence of strategies and stops at the first one
//! that finds a file:
//!
//! 1. [`Strategy::Exact`]: `<docs>/<id>.md`, then `<docs>/<id>.mdx`
//! 2. [`Strategy::Kebab`]: same directory, whitespace in the last segment replaced with `-`
//! 3. [`Strategy::DeclaredId`]: a sibling file whose frontmatter `id` equals the last segment
//!
//! Nothing here fails loudly. An identifier that matches no file is simply unresolved.

use crate::docs_gen::frontmatter::Frontmatter;
use crate::docs_gen::text_utils::kebab_whitespace;
use crate::docs_gen::url_utils::{CONTENT_EXTENSIONS, has_content_extension};
use std::path::{Path, PathBuf};

/// A way of finding the file behind an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Exact,
    Kebab,
    DeclaredId,
}

impl Strategy {
    /// Strategies in the order they are tried.
    pub const ORDER: [Strategy; 3] = [Strategy::Exact, Strategy::Kebab, Strategy::DeclaredId];
}

/// A document identifier together with what could be found for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDoc {
    pub id: String,
    /// The backing file, if the identifier resolved.
    pub path: Option<PathBuf>,
    /// Raw file content, if the file could be read.
    pub content: Option<String>,
}

/// Resolves identifiers against a docs root directory.
#[derive(Debug, Clone)]
pub struct DocResolver {
    docs_dir: PathBuf,
}

impl DocResolver {
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
        }
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    /// Finds the file backing `id`, or `None` if no strategy matches.
    pub async fn resolve(&self, id: &str) -> Option<PathBuf> {
        for strategy in Strategy::ORDER {
            if let Some(path) = self.attempt(strategy, id).await {
                tracing::debug!("Resolved '{}' via {:?}: {}", id, strategy, path.display());
                return Some(path);
            }
        }
        tracing::debug!("Could not resolve '{}'", id);
        None
    }

    /// Resolves `id` and reads the backing file.
    ///
    /// A file that resolves but cannot be read keeps its path with no content.
    pub async fn load(&self, id: &str) -> ResolvedDoc {
        let path = self.resolve(id).await;
        let content = match &path {
            None => None,
            Some(p) => match tokio::fs::read_to_string(p).await {
                Ok(content) => Some(content),
                Err(e) => {
                    tracing::warn!("Cannot read '{}' ({}): {}", id, p.display(), e);
                    None
                }
            },
        };
        ResolvedDoc {
            id: id.to_string(),
            path,
            content,
        }
    }

    /// Runs a single strategy.
    pub async fn attempt(&self, strategy: Strategy, id: &str) -> Option<PathBuf> {
        let id = id.trim_start_matches('/');
        let (dir, base) = split_id(id);
        match strategy {
            Strategy::Exact => first_existing_file(CONTENT_EXTENSIONS.map(|ext| self.docs_dir.join(format!("{id}.{ext}")))).await,
            Strategy::Kebab => {
                let kebab = kebab_whitespace(base);
                let dir = self.docs_dir.join(dir);
                first_existing_file(CONTENT_EXTENSIONS.map(|ext| dir.join(format!("{kebab}.{ext}")))).await
            }
            Strategy::DeclaredId => find_declared_id(&self.docs_dir.join(dir), base).await,
        }
    }
}

/// Splits an identifier into its directory part and final segment.
fn split_id(id: &str) -> (&str, &str) {
    id.rsplit_once('/').unwrap_or(("", id))
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok_and(|m| m.is_file())
}

async fn first_existing_file<const N: usize>(candidates: [PathBuf; N]) -> Option<PathBuf> {
    for candidate in candidates {
        if is_file(&candidate).await {
            return Some(candidate);
        }
    }
    None
}

/// Scans `dir` (sorted by file name) for a content file whose frontmatter declares `id: <base>`.
async fn find_declared_id(dir: &Path, base: &str) -> Option<PathBuf> {
    let mut entries = tokio::fs::read_dir(dir).await.ok()?;
    let mut candidates = Vec::new();
    while let Ok(Some(entry)) = entries.next_entry().await {
        let is_regular_file = entry.file_type().await.is_ok_and(|t| t.is_file());
        let path = entry.path();
        if is_regular_file && has_content_extension(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();

    for candidate in candidates {
        let Ok(content) = tokio::fs::read_to_string(&candidate).await else {
            continue;
        };
        if Frontmatter::parse(&content).id.as_deref() == Some(base) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_split_id() {
        assert_eq!(split_id("a/b/c"), ("a/b", "c"));
        assert_eq!(split_id("intro"), ("", "intro"));
    }

    #[tokio::test]
    async fn test_exact_prefers_md_over_mdx() {
        let dir = tempfile::tempdir().unwrap();
        let md = write(dir.path(), "guides/setup.md", "# md");
        write(dir.path(), "guides/setup.mdx", "# mdx");

        let resolver = DocResolver::new(dir.path());
        assert_eq!(resolver.resolve("guides/setup").await, Some(md));
    }

    #[tokio::test]
    async fn test_exact_mdx() {
        let dir = tempfile::tempdir().unwrap();
        let mdx = write(dir.path(), "guides/setup.mdx", "# mdx");

        let resolver = DocResolver::new(dir.path());
        assert_eq!(resolver.attempt(Strategy::Exact, "guides/setup").await, Some(mdx));
    }

    #[tokio::test]
    async fn test_kebab_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "guides/getting-started-now.md", "# hi");

        let resolver = DocResolver::new(dir.path());
        assert_eq!(resolver.attempt(Strategy::Exact, "guides/getting started  now").await, None);
        assert_eq!(resolver.resolve("guides/getting started  now").await, Some(file));
    }

    #[tokio::test]
    async fn test_declared_id_scan() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "api/a-other.md", "---\nid: other\n---\n");
        write(dir.path(), "api/notes.txt", "---\nid: auth\n---\n");
        let file = write(dir.path(), "api/02-authentication.mdx", "---\nid: auth\ntitle: Auth\n---\n");
        write(dir.path(), "api/zz-authentication.md", "---\nid: auth\n---\n");

        let resolver = DocResolver::new(dir.path());
        assert_eq!(resolver.resolve("api/auth").await, Some(file.clone()));
        // deterministic across calls
        assert_eq!(resolver.resolve("api/auth").await, Some(file));
    }

    #[tokio::test]
    async fn test_declared_id_requires_exact_match() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "api/x.md", "---\nid: auth-v2\n---\n");

        let resolver = DocResolver::new(dir.path());
        assert_eq!(resolver.resolve("api/auth").await, None);
    }

    #[tokio::test]
    async fn test_unresolved_when_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = DocResolver::new(dir.path());
        assert_eq!(resolver.resolve("nowhere/at-all").await, None);
    }

    #[tokio::test]
    async fn test_directory_is_not_a_match() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("guides/setup.md")).unwrap();

        let resolver = DocResolver::new(dir.path());
        assert_eq!(resolver.resolve("guides/setup").await, None);
    }

    #[tokio::test]
    async fn test_load_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "intro.md", "Hello");

        let resolver = DocResolver::new(dir.path());
        let doc = resolver.load("intro").await;
        assert_eq!(doc.path, Some(file));
        assert_eq!(doc.content.as_deref(), Some("Hello"));

        let missing = resolver.load("missing").await;
        assert_eq!(missing.path, None);
        assert_eq!(missing.content, None);
    }
}
