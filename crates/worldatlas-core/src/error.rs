// crates/worldatlas-core/src/error.rs
use thiserror::Error;

/// Errors raised by the strict loading and fetching APIs.
///
/// The degrading entry points ([`crate::Atlas::parse_or_empty`],
/// [`crate::Atlas::load`], [`crate::Browser`]) never hand these to the
/// caller; they log them and fall back to empty data instead.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its top level is not an object.
    #[error("Unexpected document shape: {0}")]
    InvalidShape(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "fetch")]
    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
