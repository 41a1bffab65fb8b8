//! Viewer error types.

use thiserror::Error;

/// Errors raised by the lightbox.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// Opened with no images; nothing to show.
    #[error("No images to show")]
    EmptySequence,

    /// Viewer settings are out of range.
    #[error("Invalid viewer config: {0}")]
    InvalidConfig(String),
}
