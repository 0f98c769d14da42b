//! Fixed-frame cropping for vertical deliverables.
//!
//! Extracts a rectangle from the source, optionally scales it, and centers
//! the result on a black canvas of fixed dimensions (default 1080x1920, the
//! 9:16 vertical format). A scaled crop larger than the canvas is shrunk to
//! fit before centering.

use crate::error::{CanvasError, Result};
use crate::geometry;
use image::imageops::{self, FilterType, crop_imm};
use image::{Rgb, RgbImage};

const CANVAS_BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Crop-and-frame parameters.
///
/// `width`/`height` of `None` mean "to the right/bottom edge of the frame".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropSpec {
    pub x: u32,
    pub y: u32,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Scale factor applied to the cropped region.
    pub scale: f64,
    /// Output canvas dimensions.
    pub canvas: (u32, u32),
}

impl Default for CropSpec {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: None,
            height: None,
            scale: 1.0,
            canvas: (1080, 1920),
        }
    }
}

impl CropSpec {
    /// Resolve the crop rectangle against an actual frame, validating that
    /// it stays inside.
    fn resolve_region(&self, frame: (u32, u32)) -> Result<(u32, u32, u32, u32)> {
        let (frame_w, frame_h) = frame;
        let width = self.width.unwrap_or(frame_w.saturating_sub(self.x));
        let height = self.height.unwrap_or(frame_h.saturating_sub(self.y));

        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidArgument(
                "crop area must have positive dimensions".into(),
            ));
        }
        let x_end = self.x as u64 + width as u64;
        let y_end = self.y as u64 + height as u64;
        if x_end > frame_w as u64 || y_end > frame_h as u64 {
            return Err(CanvasError::InvalidArgument(format!(
                "crop area exceeds image boundaries (image {}x{}, crop {},{} {}x{})",
                frame_w, frame_h, self.x, self.y, width, height
            )));
        }
        Ok((self.x, self.y, width, height))
    }

    fn validate(&self) -> Result<()> {
        if self.canvas.0 == 0 || self.canvas.1 == 0 {
            return Err(CanvasError::InvalidArgument(
                "output dimensions must be positive".into(),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(CanvasError::InvalidArgument(format!(
                "scale factor must be positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

/// Crop, scale, and center on the black canvas.
pub fn render(img: &RgbImage, spec: &CropSpec) -> Result<RgbImage> {
    spec.validate()?;
    let (x, y, width, height) = spec.resolve_region((img.width(), img.height()))?;
    let cropped = crop_imm(img, x, y, width, height).to_image();

    let mut scaled = if spec.scale == 1.0 {
        cropped
    } else {
        let scaled_w = ((width as f64 * spec.scale) as u32).max(1);
        let scaled_h = ((height as f64 * spec.scale) as u32).max(1);
        imageops::resize(&cropped, scaled_w, scaled_h, FilterType::Lanczos3)
    };

    // Shrink to fit when the scaled crop exceeds the canvas.
    let (canvas_w, canvas_h) = spec.canvas;
    if scaled.width() > canvas_w || scaled.height() > canvas_h {
        let (fit_w, fit_h) =
            geometry::fit_within((scaled.width(), scaled.height()), (canvas_w, canvas_h));
        scaled = imageops::resize(&scaled, fit_w, fit_h, FilterType::Lanczos3);
    }

    let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, CANVAS_BLACK);
    let (off_x, off_y) = geometry::centered_offset(spec.canvas, (scaled.width(), scaled.height()));
    imageops::replace(&mut canvas, &scaled, i64::from(off_x), i64::from(off_y));
    Ok(canvas)
}
