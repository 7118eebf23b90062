//! Configuration options for llms.txt and Markdown mirror generation.

use crate::docs_gen::errors::{DocsGenError, Result};
use crate::docs_gen::site::SiteMeta;
use std::path::PathBuf;

/// Default number of documents processed at once.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Default name of the sidebar to read from the sidebar configuration.
pub const DEFAULT_SIDEBAR_KEY: &str = "docs";

/// Default file name of the generated index, under the output directory.
pub const DEFAULT_INDEX_FILE: &str = "llms.txt";

/// Parent segments whose children get their parent prepended to generic titles.
pub const DEFAULT_CONTEXT_PARENTS: &[&str] = &["rest-api"];

/// Configuration options for the generators.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Root directory of the source documents
    pub docs_dir: PathBuf,
    /// Output directory for the index and the Markdown mirrors
    pub static_dir: PathBuf,
    /// File name of the index, relative to `static_dir`
    pub index_file: String,
    /// Site title, tagline and root URL
    pub site: SiteMeta,
    /// Product name for generated descriptions (default: derived from the site title)
    pub brand: Option<String>,
    /// Introductory lines written after the index header (default: generic lines naming the brand)
    pub intro: Option<Vec<String>>,
    /// Parent directory segments that trigger title contextualization
    pub context_parents: Vec<String>,
    /// Maximum number of documents processed concurrently (default: 16)
    pub concurrency: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            static_dir: PathBuf::from("static"),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            site: SiteMeta::default(),
            brand: None,
            intro: None,
            context_parents: DEFAULT_CONTEXT_PARENTS.iter().map(|s| s.to_string()).collect(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl GeneratorOptions {
    /// Creates a new builder for GeneratorOptions.
    pub fn builder() -> GeneratorOptionsBuilder {
        GeneratorOptionsBuilder::default()
    }

    /// Product name used in generated descriptions.
    pub fn brand(&self) -> String {
        self.brand.clone().unwrap_or_else(|| self.site.brand())
    }

    /// Lines written between the index header and the first section.
    pub fn intro_lines(&self) -> Vec<String> {
        match &self.intro {
            Some(lines) => lines.clone(),
            None => {
                let brand = self.brand();
                vec![
                    format!("This file indexes the {brand} documentation for large language models."),
                    "The documentation is organized into major sections. Each section links to the pages it contains, with a short description of each page.".to_string(),
                ]
            }
        }
    }

    /// Full path of the generated index.
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(&self.index_file)
    }
}

/// Builder for GeneratorOptions.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptionsBuilder {
    docs_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    index_file: Option<String>,
    site: Option<SiteMeta>,
    brand: Option<String>,
    intro: Option<Vec<String>>,
    context_parents: Option<Vec<String>>,
    concurrency: Option<usize>,
}

impl GeneratorOptionsBuilder {
    /// Sets the docs root directory.
    pub fn docs_dir(mut self, docs_dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = Some(docs_dir.into());
        self
    }

    /// Sets the output directory.
    pub fn static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(static_dir.into());
        self
    }

    /// Sets the index file name.
    pub fn index_file(mut self, index_file: String) -> Self {
        self.index_file = Some(index_file);
        self
    }

    /// Sets the site metadata.
    pub fn site(mut self, site: SiteMeta) -> Self {
        self.site = Some(site);
        self
    }

    /// Overrides the brand derived from the site title.
    pub fn brand(mut self, brand: String) -> Self {
        self.brand = Some(brand);
        self
    }

    /// Overrides the introductory lines of the index.
    pub fn intro(mut self, lines: Vec<String>) -> Self {
        self.intro = Some(lines);
        self
    }

    /// Replaces the set of parent segments that trigger title contextualization.
    pub fn context_parents(mut self, parents: Vec<String>) -> Self {
        self.context_parents = Some(parents);
        self
    }

    /// Sets the concurrency level (number of documents processed at once).
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Builds the GeneratorOptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the concurrency is zero.
    pub fn build(self) -> Result<GeneratorOptions> {
        let defaults = GeneratorOptions::default();
        let concurrency = self.concurrency.unwrap_or(defaults.concurrency);
        if concurrency == 0 {
            return Err(DocsGenError::InvalidConcurrency(concurrency));
        }
        Ok(GeneratorOptions {
            docs_dir: self.docs_dir.unwrap_or(defaults.docs_dir),
            static_dir: self.static_dir.unwrap_or(defaults.static_dir),
            index_file: self.index_file.unwrap_or(defaults.index_file),
            site: self.site.unwrap_or(defaults.site),
            brand: self.brand,
            intro: self.intro,
            context_parents: self.context_parents.unwrap_or(defaults.context_parents),
            concurrency,
        })
    }
}
