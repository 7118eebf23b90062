//! Error types for the docs llms.txt generation library.

use thiserror::Error;

/// Main error type for docs llms.txt generation operations.
///
/// Only configuration problems surface through this type. Failures scoped to a
/// single document are logged and counted by the generators instead.
#[derive(Debug, Error)]
pub enum DocsGenError {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sidebar configuration is not valid JSON
    #[error("Sidebar parsing failed: {0}")]
    SidebarParse(#[from] serde_json::Error),

    /// Sidebar configuration lacks the requested sidebar
    #[error("Sidebar '{0}' not found in sidebar configuration")]
    MissingSidebar(String),

    /// Sidebar exists but is not a mapping of labels to item lists
    #[error("Invalid sidebar: {0}")]
    InvalidSidebar(String),

    /// Site URL could not be parsed
    #[error("Invalid site URL: {0}")]
    InvalidSiteUrl(#[from] url::ParseError),

    /// Concurrency must be at least one
    #[error("Invalid concurrency: {0}")]
    InvalidConcurrency(usize),
}

/// Type alias for Result with DocsGenError
pub type Result<T> = std::result::Result<T, DocsGenError>;
