//! Error types for icon generation

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or checking icons
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem or output stream failure; the OS message is passed through as is
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
