//! # Docs llms.txt Generation Library
//!
//! Generates LLM-friendly artifacts from a documentation site's sidebar and
//! Markdown/MDX sources.
//!
//! The sidebar is flattened into document identifiers, each identifier is
//! resolved to a file under the docs root, and titles, descriptions and URLs
//! are extracted from frontmatter and content.
//!
//! ## Features
//!
//! - Collect unique document identifiers from nested sidebar categories
//! - Resolve identifiers by exact path, kebab-cased name, or declared frontmatter `id`
//! - Derive titles and descriptions, with generated fallbacks for poor descriptions
//! - Compute canonical URLs, honoring absolute frontmatter slugs
//! - Write a categorized `llms.txt` index
//! - Write a cleaned Markdown mirror next to every page URL
//!
//! ## Examples
//!
//! ```no_run
//! use docs_ltx::docs_gen::{GeneratorOptions, Sidebar, SiteMeta, write_llms_txt, write_md_mirrors};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sidebar = Sidebar::load(Path::new("sidebars.json"), "docs").await?;
//!     let options = GeneratorOptions::builder()
//!         .docs_dir("docs")
//!         .static_dir("static")
//!         .site(SiteMeta::load(Path::new("docusaurus.config.js")).await)
//!         .build()?;
//!
//!     let index = write_llms_txt(&sidebar, &options).await?;
//!     let mirrors = write_md_mirrors(&sidebar, &options).await;
//!     println!("{} entries, {} mirrors", index.entries, mirrors.written);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod batch;
pub mod cleaner;
mod config;
mod errors;
pub mod frontmatter;
mod generator;
pub mod metadata;
pub mod resolver;
pub mod sidebar;
pub mod site;
pub mod text_utils;
pub mod url_utils;

// Public API re-exports
pub use config::{
    DEFAULT_CONCURRENCY, DEFAULT_CONTEXT_PARENTS, DEFAULT_INDEX_FILE, DEFAULT_SIDEBAR_KEY, GeneratorOptions,
    GeneratorOptionsBuilder,
};
pub use errors::{DocsGenError, Result};
pub use generator::{
    IndexSummary, LlmsTxtIndex, MAX_DESCRIPTION_CHARS, MirrorSummary, gen_llms_txt, index_entry, render_mirror,
    write_llms_txt, write_md_mirrors,
};

// Additional exports for advanced usage
pub use cleaner::clean_mdx_content;
pub use frontmatter::Frontmatter;
pub use metadata::{DescriptionSource, DocMeta, generated_description, is_poor_description};
pub use resolver::{DocResolver, ResolvedDoc, Strategy};
pub use sidebar::{Sidebar, SidebarItem, SidebarSection, collect_doc_ids};
pub use site::SiteMeta;
