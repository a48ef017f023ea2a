//! Error type shared by configuration, scene construction and output

use std::path::PathBuf;

/// Errors reported by the library.
///
/// Everything except [Error::Cancelled], [Error::Io] and [Error::Image] is a
/// configuration problem caught before any ray is traced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("samples per pixel must be greater than 0")]
    InvalidSampleCount,

    #[error("bounce depth must be greater than 0")]
    InvalidBounceDepth,

    #[error("invalid camera: {0}")]
    InvalidCamera(&'static str),

    #[error("invalid sphere radius {0}")]
    InvalidRadius(f32),

    #[error("invalid refractive index {0}")]
    InvalidRefractiveIndex(f32),

    #[error("sphere center must be finite")]
    InvalidCenter,

    #[error("render cancelled")]
    Cancelled,

    #[error("unsupported output format for {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Result alias using the crate [Error]
pub type Result<T, E = Error> = std::result::Result<T, E>;
