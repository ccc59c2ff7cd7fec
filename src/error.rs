//! Error taxonomy for packing runs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while packing a spritesheet.
///
/// `Decode` is per-file and non-fatal: the loader reports it and skips the
/// file. Every other variant aborts the run before any artifact is written.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PackError {
    /// A source file could not be decoded as a raster image
    #[error("failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// No images survived loading
    #[error("no images to pack")]
    EmptyInput,
    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Scaling would floor a sprite dimension to zero
    #[error("scaling '{name}' by {factor} produces a zero-area sprite")]
    InvalidScale { name: String, factor: f64 },
    /// File I/O error while writing artifacts
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// Manifest serialization error
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
