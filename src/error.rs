//! Error types for the storefront renderer

use thiserror::Error;

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading input or writing output.
///
/// Rendering itself never fails; these cover everything around it.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog could not be read or parsed
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// A catalog item could not be decoded
    #[error("Invalid item at index {index}: {message}")]
    MalformedItem { index: usize, message: String },

    /// A catalog item has an empty field
    #[error("Invalid item at index {index}: field `{field}` is empty")]
    InvalidItem { index: usize, field: &'static str },

    /// Rendered output could not be inspected. Selectors are constants, so
    /// this only surfaces if one of them is edited into an invalid form.
    #[error("Snapshot failed: {0}")]
    SnapshotError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// I/O failure reading input or writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::CatalogError(err.to_string())
    }
}
