//! Generates an `llms.txt` index and clean Markdown mirrors for a documentation site.
//!
//! See [`docs_gen`] for the generation pipeline and [`common`] for the ambient
//! logging and configuration helpers used by the `docs-ltx` binary.

pub mod common;
pub mod docs_gen;

pub use common::setup_logging;
pub use docs_gen::{DocsGenError, GeneratorOptions, Sidebar, SiteMeta, write_llms_txt, write_md_mirrors};
