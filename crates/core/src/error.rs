//! Error types for U-Masonry.

use thiserror::Error;

/// Result type alias for U-Masonry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing a layout.
#[derive(Debug, Error)]
pub enum Error {
    /// Parameters the packing loop cannot terminate on.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Unrecognized pattern or direction name.
    #[error("Unknown {kind}: {value:?}")]
    UnknownVariant {
        /// What was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Engine configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
