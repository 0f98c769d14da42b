//! Foreground location by brightness thresholding.
//!
//! A pixel is background when every channel sits at or above the threshold
//! (near-white studio backdrop); anything else is foreground. A row is
//! foreground when it contains at least one foreground pixel. The vertical
//! extent of the subject is the span from the first to the last foreground
//! row.

use crate::error::{CanvasError, Result};
use image::RgbImage;

/// Vertical extent of the subject: first and last foreground rows,
/// 0-indexed and inclusive. Invariant: `top <= bottom < image height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForegroundBounds {
    pub top: u32,
    pub bottom: u32,
}

impl ForegroundBounds {
    /// Number of rows in the span, inclusive of both ends.
    pub fn height(self) -> u32 {
        self.bottom - self.top + 1
    }
}

/// Scan rows top to bottom for the subject's vertical extent.
///
/// Fails with [`CanvasError::ForegroundNotFound`] when no row contains a
/// foreground pixel: either the threshold is too permissive or the image
/// has no distinguishable subject.
pub fn locate(img: &RgbImage, threshold: u8) -> Result<ForegroundBounds> {
    let mut top = None;
    let mut bottom = None;

    for (y, mut row) in img.rows().enumerate() {
        if row.any(|px| px.0.iter().any(|&channel| channel < threshold)) {
            if top.is_none() {
                top = Some(y as u32);
            }
            bottom = Some(y as u32);
        }
    }

    match (top, bottom) {
        (Some(top), Some(bottom)) => Ok(ForegroundBounds { top, bottom }),
        _ => Err(CanvasError::ForegroundNotFound),
    }
}
