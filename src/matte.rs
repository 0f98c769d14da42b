//! Matte generation: fit an image inside a colored canvas with a margin.
//!
//! The content box is the canvas minus a symmetric padding margin given as a
//! percentage of each canvas dimension. The source is scaled to the largest
//! size that fits the content box (area-style resampling) and centered on a
//! solid canvas of the requested color.

use crate::error::{CanvasError, Result};
use crate::geometry;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// Matte parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatteSpec {
    /// Output canvas dimensions.
    pub canvas: (u32, u32),
    /// Margin on each side, as a percentage of the canvas dimension.
    /// Must satisfy `0 <= p < 50`.
    pub padding_percent: f64,
    /// Canvas fill color.
    pub color: Rgb<u8>,
}

impl Default for MatteSpec {
    fn default() -> Self {
        Self {
            canvas: (1920, 1080),
            padding_percent: 0.0,
            color: Rgb([0, 0, 0]),
        }
    }
}

/// Parse a `#rrggbb` or `rrggbb` hex color.
pub fn parse_hex_color(input: &str) -> Result<Rgb<u8>> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    let value = (hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
        .then(|| u32::from_str_radix(hex, 16).ok())
        .flatten()
        .ok_or_else(|| {
            CanvasError::InvalidArgument(format!(
                "color must be a 6-digit hex value like #1a2b3c, got {input:?}"
            ))
        })?;
    Ok(Rgb([(value >> 16) as u8, (value >> 8) as u8, value as u8]))
}

/// Fit the image inside the padded content box and center it on the matte.
pub fn render(img: &RgbImage, spec: &MatteSpec) -> Result<RgbImage> {
    let (canvas_w, canvas_h) = spec.canvas;
    if canvas_w == 0 || canvas_h == 0 {
        return Err(CanvasError::InvalidArgument(
            "canvas dimensions must be positive".into(),
        ));
    }
    if !spec.padding_percent.is_finite()
        || spec.padding_percent < 0.0
        || spec.padding_percent >= 50.0
    {
        return Err(CanvasError::InvalidArgument(format!(
            "padding percent must be in [0, 50), got {}",
            spec.padding_percent
        )));
    }

    let pad_x = (canvas_w as f64 * spec.padding_percent / 100.0) as u32;
    let pad_y = (canvas_h as f64 * spec.padding_percent / 100.0) as u32;
    let content_w = canvas_w - 2 * pad_x;
    let content_h = canvas_h - 2 * pad_y;
    if content_w == 0 || content_h == 0 {
        return Err(CanvasError::InvalidArgument(
            "padding leaves no room for content".into(),
        ));
    }

    let (target_w, target_h) =
        geometry::fit_within((img.width(), img.height()), (content_w, content_h));
    let resized = imageops::resize(img, target_w, target_h, FilterType::Triangle);

    let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, spec.color);
    let (off_x, off_y) = geometry::centered_offset(spec.canvas, (target_w, target_h));
    imageops::replace(&mut canvas, &resized, i64::from(off_x), i64::from(off_y));
    Ok(canvas)
}
