//! The two emitters: the categorized `llms.txt` index and the per-page Markdown mirrors.

use crate::docs_gen::batch::process_bounded;
use crate::docs_gen::cleaner::clean_mdx_content;
use crate::docs_gen::config::GeneratorOptions;
use crate::docs_gen::errors::Result;
use crate::docs_gen::frontmatter::Frontmatter;
use crate::docs_gen::metadata::DocMeta;
use crate::docs_gen::resolver::{DocResolver, ResolvedDoc};
use crate::docs_gen::sidebar::Sidebar;
use crate::docs_gen::text_utils::clip;
use crate::docs_gen::url_utils::{mirror_path, mirror_url_path, url_path};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Index descriptions longer than this many characters are clipped.
pub const MAX_DESCRIPTION_CHARS: usize = 400;

/// Outcome of writing the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub path: PathBuf,
    pub sections: usize,
    pub entries: usize,
    pub unresolved: usize,
}

/// Outcome of writing the Markdown mirrors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorSummary {
    pub written: usize,
    pub skipped: usize,
    /// Site-relative paths of the mirrors that were written, e.g. `/guides/setup.md`.
    pub generated_paths: Vec<String>,
}

/// A rendered index, before it is written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmsTxtIndex {
    pub content: String,
    pub sections: usize,
    pub entries: usize,
    pub unresolved: usize,
}

/// Builds the `llms.txt` index for a sidebar.
///
/// Every identifier is resolved once, even when several sections reference it.
/// Unresolved identifiers still get an entry, with a title and URL derived
/// from the identifier and a generated description.
/// Sections where no identifier resolved are left out.
pub async fn gen_llms_txt(sidebar: &Sidebar, options: &GeneratorOptions) -> LlmsTxtIndex {
    let resolver = &DocResolver::new(&options.docs_dir);
    let site_url = options.site.site_url.as_str();
    let context_parents = options.context_parents.as_slice();

    let metas: Vec<DocMeta> = process_bounded(
        sidebar.all_doc_ids(),
        |id| async move {
            let doc = resolver.load(&id).await;
            DocMeta::extract(&doc, resolver.docs_dir(), site_url, context_parents)
        },
        options.concurrency,
    )
    .await;
    let unresolved = metas.iter().filter(|m| m.path.is_none()).count();
    let metas: HashMap<&str, &DocMeta> = metas.iter().map(|m| (m.id.as_str(), m)).collect();

    let brand = options.brand();
    let mut lines: Vec<String> = vec![format!("# {}", options.site.title)];
    if !options.site.tagline.is_empty() {
        lines.push(String::new());
        lines.push(format!("> {}", options.site.tagline));
        lines.push(String::new());
    }
    lines.extend(options.intro_lines());
    lines.push(String::new());

    let mut sections = 0;
    let mut entries = 0;
    for section in &sidebar.sections {
        let ids = section.doc_ids();
        let mut docs: Vec<&DocMeta> = ids.iter().filter_map(|id| metas.get(id.as_str()).copied()).collect();
        if !docs.iter().any(|doc| doc.path.is_some()) {
            tracing::debug!("[SKIP] Section '{}' has no resolved documents", section.label);
            continue;
        }
        docs.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.id.cmp(&b.id))
        });

        sections += 1;
        lines.push(format!("## {}", section.label));
        for doc in docs {
            lines.push(index_entry(doc, &brand));
            entries += 1;
        }
        lines.push(String::new());
    }

    LlmsTxtIndex {
        content: lines.join("\n"),
        sections,
        entries,
        unresolved,
    }
}

/// Formats one index bullet: `- [Title](URL): Description`.
pub fn index_entry(doc: &DocMeta, brand: &str) -> String {
    let description = clip(&doc.index_description(brand), MAX_DESCRIPTION_CHARS);
    if description.is_empty() {
        format!("- [{}]({})", doc.title, doc.url)
    } else {
        format!("- [{}]({}): {}", doc.title, doc.url, description)
    }
}

/// Builds the index and writes it to the configured index path.
///
/// # Errors
///
/// Returns an error if the output directory or the index file cannot be written.
pub async fn write_llms_txt(sidebar: &Sidebar, options: &GeneratorOptions) -> Result<IndexSummary> {
    let index = gen_llms_txt(sidebar, options).await;
    let path = options.index_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, &index.content).await?;

    tracing::info!(
        "Wrote {} ({} sections, {} entries, {} unresolved)",
        path.display(),
        index.sections,
        index.entries,
        index.unresolved
    );
    Ok(IndexSummary {
        path,
        sections: index.sections,
        entries: index.entries,
        unresolved: index.unresolved,
    })
}

/// Renders the mirror of one document: a header rebuilt from frontmatter, then the cleaned body.
pub fn render_mirror(content: &str) -> String {
    let frontmatter = Frontmatter::parse(content);
    let mut lines: Vec<String> = Vec::new();
    if let Some(title) = &frontmatter.title {
        lines.push(format!("# {title}"));
    }
    if let Some(description) = &frontmatter.description {
        lines.push(String::new());
        lines.push(format!("> {description}"));
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(clean_mdx_content(content));
    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

/// A mirror ready to be written.
struct MirrorPage {
    id: String,
    /// Site-relative path of the mirror, e.g. `/guides/setup.md`.
    mirror_url: String,
    out_path: PathBuf,
    rendered: String,
}

/// Writes one cleaned Markdown file per resolved document, at a path mirroring its URL.
///
/// Unresolved or unreadable documents are skipped. When two documents map to
/// the same URL path, the first identifier (in sorted order) is written and
/// the others are skipped with a warning.
pub async fn write_md_mirrors(sidebar: &Sidebar, options: &GeneratorOptions) -> MirrorSummary {
    let resolver = &DocResolver::new(&options.docs_dir);
    let docs: Vec<ResolvedDoc> = process_bounded(
        sidebar.all_doc_ids(),
        |id| async move { resolver.load(&id).await },
        options.concurrency,
    )
    .await;

    let mut summary = MirrorSummary::default();
    let mut claimed: HashMap<PathBuf, String> = HashMap::new();
    let mut pages = Vec::new();
    for doc in docs {
        let (Some(path), Some(content)) = (doc.path.as_deref(), doc.content.as_deref()) else {
            tracing::debug!("[SKIP] '{}' is unresolved or unreadable", doc.id);
            summary.skipped += 1;
            continue;
        };

        let frontmatter = Frontmatter::parse(content);
        let url_path = url_path(&doc.id, resolver.docs_dir(), Some(path), &frontmatter);
        let out_path = mirror_path(&options.static_dir, &url_path);
        if let Some(owner) = claimed.get(&out_path) {
            tracing::warn!(
                "[SKIP] '{}' maps to {} which is already written for '{}'",
                doc.id,
                out_path.display(),
                owner
            );
            summary.skipped += 1;
            continue;
        }
        claimed.insert(out_path.clone(), doc.id.clone());

        pages.push(MirrorPage {
            out_path,
            rendered: render_mirror(content),
            mirror_url: mirror_url_path(&url_path),
            id: doc.id,
        });
    }

    let mut created_dirs = HashSet::new();
    for page in &pages {
        if let Some(parent) = page.out_path.parent() {
            created_dirs.insert(parent.to_path_buf());
        }
    }
    for dir in created_dirs {
        if let Err(e) = tokio::fs::create_dir_all(&dir).await {
            tracing::warn!("Cannot create directory {}: {}", dir.display(), e);
        }
    }

    let written = process_bounded(
        pages,
        |page| async move {
            match tokio::fs::write(&page.out_path, &page.rendered).await {
                Ok(()) => Some(page.mirror_url),
                Err(e) => {
                    tracing::warn!("[SKIP] Cannot write mirror for '{}' ({}): {}", page.id, page.out_path.display(), e);
                    None
                }
            }
        },
        options.concurrency,
    )
    .await;

    for generated in written {
        match generated {
            Some(path) => {
                summary.written += 1;
                summary.generated_paths.push(path);
            }
            None => summary.skipped += 1,
        }
    }

    tracing::info!(
        "Wrote {} Markdown mirrors under {}, skipped {} (unresolved, unreadable or colliding)",
        summary.written,
        options.static_dir.display(),
        summary.skipped
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs_gen::metadata::DescriptionSource;
    use crate::docs_gen::site::SiteMeta;
    use indoc::indoc;
    use std::fs;
    use std::path::Path;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn options(root: &Path, site_url: &str) -> GeneratorOptions {
        GeneratorOptions::builder()
            .docs_dir(root.join("docs"))
            .static_dir(root.join("static"))
            .site(SiteMeta {
                site_url: site_url.to_string(),
                title: "Acme Docs".into(),
                tagline: String::new(),
            })
            .intro(vec!["Intro one.".into(), "Intro two.".into()])
            .build()
            .unwrap()
    }

    fn meta(title: &str, description: &str, source: DescriptionSource) -> DocMeta {
        DocMeta {
            id: "a/b".into(),
            title: title.into(),
            description: description.into(),
            source,
            url: "/a/b".into(),
            path: None,
            relative_ref: None,
        }
    }

    #[test]
    fn test_index_entry_clips_long_descriptions() {
        let long = "word ".repeat(100);
        let entry = index_entry(&meta("T", &long, DescriptionSource::Frontmatter), "Acme");
        let description = entry.strip_prefix("- [T](/a/b): ").unwrap();
        assert_eq!(description.chars().count(), MAX_DESCRIPTION_CHARS);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_index_entry_generated_fallback() {
        let entry = index_entry(&meta("T", "tiny", DescriptionSource::Content), "Acme");
        assert_eq!(entry, "- [T](/a/b): Learn more about Acme a b");
    }

    #[test]
    fn test_render_mirror() {
        let content = indoc! {r#"
            ---
            title: Setup
            description: How to set up the SDK.
            ---
            import Tabs from '@theme/Tabs';

            Install it.
        "#};
        assert_eq!(
            render_mirror(content),
            "# Setup\n\n> How to set up the SDK.\n\nInstall it.\n"
        );
    }

    #[test]
    fn test_render_mirror_without_frontmatter() {
        assert_eq!(render_mirror("Just text\n"), "Just text\n");
    }

    #[tokio::test]
    async fn test_gen_llms_txt_sections_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "docs/guides/setup.md", "---\ntitle: Setup\ndescription: How to set up the SDK.\n---\n");
        write(root, "docs/guides/advanced.md", "---\ntitle: advanced usage\n---\nTune every knob of the SDK for production.");
        write(root, "docs/guides/overview.md", "Short.");

        let sidebar = Sidebar::from_json_str(
            r#"{"docs": {
                "Guides": [{"type": "category", "link": {"type": "doc", "id": "guides/overview"},
                            "items": ["guides/setup", "guides/advanced", "guides/missing"]}],
                "Empty": [{"type": "link", "href": "https://example.com"}]
            }}"#,
            "docs",
        )
        .unwrap();

        let index = gen_llms_txt(&sidebar, &options(root, "https://acme.dev")).await;
        let expected = indoc! {"
            # Acme Docs
            Intro one.
            Intro two.

            ## Guides
            - [advanced usage](https://acme.dev/guides/advanced): Tune every knob of the SDK for production.
            - [Missing](https://acme.dev/guides/missing): Learn more about Acme guides missing
            - [Overview](https://acme.dev/guides/overview): Learn more about Acme guides
            - [Setup](https://acme.dev/guides/setup): How to set up the SDK.
        "};
        assert_eq!(index.content, expected);
        assert_eq!(index.sections, 1);
        assert_eq!(index.entries, 4);
        assert_eq!(index.unresolved, 1);
    }

    #[tokio::test]
    async fn test_write_md_mirrors() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "docs/guides/setup.md", "---\ntitle: Setup\n---\n<Tabs>\nHello\n</Tabs>\n");
        write(root, "docs/guides/moved.md", "---\nslug: /elsewhere/moved\n---\nMoved body");
        write(root, "docs/guides/dup.md", "---\nslug: /elsewhere/moved\n---\nDuplicate");

        let sidebar = Sidebar::from_json_str(
            r#"{"docs": {"Guides": ["guides/setup", "guides/moved", "guides/dup", "guides/missing"]}}"#,
            "docs",
        )
        .unwrap();

        let summary = write_md_mirrors(&sidebar, &options(root, "")).await;
        assert_eq!(summary.written, 2);
        // one unresolved, one slug collision
        assert_eq!(summary.skipped, 2);

        let setup = fs::read_to_string(root.join("static/guides/setup.md")).unwrap();
        assert_eq!(setup, "# Setup\n\nHello\n");
        // "guides/dup" sorts before "guides/moved" and claims the slug first
        let moved = fs::read_to_string(root.join("static/elsewhere/moved.md")).unwrap();
        assert_eq!(moved, "Duplicate\n");

        let mut generated = summary.generated_paths.clone();
        generated.sort();
        assert_eq!(generated, vec!["/elsewhere/moved.md".to_string(), "/guides/setup.md".to_string()]);
    }

    #[tokio::test]
    async fn test_gen_llms_txt_skips_sections_without_resolved_docs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "docs/guides/setup.md", "---\ntitle: Setup\ndescription: How to set up the SDK.\n---\n");

        let sidebar = Sidebar::from_json_str(
            r#"{"docs": {"Guides": ["guides/setup"], "Ghost": ["nope/missing", "nope/gone"]}}"#,
            "docs",
        )
        .unwrap();

        let index = gen_llms_txt(&sidebar, &options(root, "")).await;
        assert!(!index.content.contains("## Ghost"));
        assert!(!index.content.contains("/nope/"));
        assert!(index.content.contains("## Guides\n- [Setup](/guides/setup): How to set up the SDK.\n"));
        assert_eq!(index.sections, 1);
        assert_eq!(index.entries, 1);
        assert_eq!(index.unresolved, 2);
    }

    #[tokio::test]
    async fn test_write_md_mirrors_trailing_slash_slug_collides() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "docs/a.md", "---\nslug: /foo\n---\nAAA");
        write(root, "docs/b.md", "---\nslug: /foo/\n---\nBBB");

        let sidebar = Sidebar::from_json_str(r#"{"docs": {"Root": ["a", "b"]}}"#, "docs").unwrap();

        let summary = write_md_mirrors(&sidebar, &options(root, "")).await;
        assert_eq!(summary.written, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.generated_paths, vec!["/foo.md".to_string()]);
        assert_eq!(fs::read_to_string(root.join("static/foo.md")).unwrap(), "AAA\n");
        assert!(!root.join("static/foo").exists());
    }
}
