//! Error taxonomy shared by the library and all three binaries.
//!
//! Every failure is terminal for the invocation: there is no partial output
//! and no internal retry. Binaries print the error on stderr and exit with
//! status 1; a supervising service decides whether to re-invoke with
//! different parameters.

use crate::tuning::TuningError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    /// Input file missing, unreadable, or not a decodable raster image.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Output file could not be encoded or written.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter outside its documented domain (height, threshold,
    /// crop region, scale, padding, color).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Thresholding classified the whole image as background.
    #[error("foreground not found: every row classified as background (try a lower explicit threshold)")]
    ForegroundNotFound,

    #[error(transparent)]
    Tuning(#[from] TuningError),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
