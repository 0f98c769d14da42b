//! Final fit onto a fixed-size canvas.
//!
//! When a caller requests exact output dimensions, the composed canvas is
//! scaled to the largest size that fits while preserving aspect ratio, then
//! centered on a solid background. Used by the extend pipeline (white
//! backdrop) and by the cropper (black canvas).

use crate::geometry;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// Scale `img` to fit inside `width x height` and center it on a canvas of
/// that exact size filled with `background`.
pub fn fit_to_canvas(img: &RgbImage, width: u32, height: u32, background: Rgb<u8>) -> RgbImage {
    let (fit_w, fit_h) = geometry::fit_within((img.width(), img.height()), (width, height));
    let resized = imageops::resize(img, fit_w, fit_h, FilterType::Lanczos3);

    let mut canvas = RgbImage::from_pixel(width, height, background);
    let (x, y) = geometry::centered_offset((width, height), (fit_w, fit_h));
    imageops::replace(&mut canvas, &resized, i64::from(x), i64::from(y));
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn output_has_exactly_requested_dimensions() {
        let img = RgbImage::from_pixel(400, 300, Rgb([90, 90, 90]));
        let out = fit_to_canvas(&img, 200, 250, WHITE);
        assert_eq!((out.width(), out.height()), (200, 250));
    }

    #[test]
    fn slack_is_filled_with_background() {
        // 2:1 source into a square: fits 200x100, bands of 75 above/below.
        let img = RgbImage::from_pixel(400, 200, Rgb([90, 90, 90]));
        let out = fit_to_canvas(&img, 200, 250, WHITE);

        assert_eq!(out.get_pixel(100, 0), &WHITE);
        assert_eq!(out.get_pixel(100, 74), &WHITE);
        assert_eq!(out.get_pixel(100, 125), &Rgb([90, 90, 90]));
        assert_eq!(out.get_pixel(100, 249), &WHITE);
    }

    #[test]
    fn same_aspect_fills_canvas_completely() {
        let img = RgbImage::from_pixel(400, 300, Rgb([90, 90, 90]));
        let out = fit_to_canvas(&img, 200, 150, WHITE);
        assert_eq!(out.get_pixel(0, 0), &Rgb([90, 90, 90]));
        assert_eq!(out.get_pixel(199, 149), &Rgb([90, 90, 90]));
    }
}
