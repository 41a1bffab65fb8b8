//! Error types for the site core.

use std::path::PathBuf;

use pods_catalog::CatalogError;
use pods_quote::QuoteError;
use pods_viewer::ViewerError;
use thiserror::Error;

/// Errors that can occur while configuring or assembling the site.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Config file could not be read or written.
    #[error("Config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("Failed to parse config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// Configuration value out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pricing section rejected.
    #[error(transparent)]
    Pricing(#[from] QuoteError),

    /// Viewer section rejected.
    #[error(transparent)]
    Viewer(#[from] ViewerError),

    /// Catalogue failed to load.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
