//! Background-brightness threshold estimation.
//!
//! Studio product photography keeps backdrop visible at the very top and
//! bottom center of the frame even when the subject fills most of it. Two
//! thin stripes there are converted to grayscale and averaged; the threshold
//! is the darker of the two means minus a small cushion, clamped to a safe
//! range. The clamp keeps a stripe that accidentally catches part of the
//! subject from producing an unusable threshold.

use crate::error::{CanvasError, Result};
use crate::tuning::ThresholdTuning;
use image::imageops::{self, crop_imm};
use image::RgbImage;

/// How the background threshold is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Estimate from the image's own backdrop stripes.
    Auto,
    /// Caller-supplied per-channel cutoff; estimation is skipped entirely.
    Fixed(u8),
}

impl ThresholdMode {
    /// Parse the CLI sentinel convention: `-1` means auto, `0..=255` is a
    /// fixed threshold, anything else is rejected.
    pub fn from_sentinel(value: i32) -> Result<Self> {
        match value {
            -1 => Ok(Self::Auto),
            0..=255 => Ok(Self::Fixed(value as u8)),
            other => Err(CanvasError::InvalidArgument(format!(
                "white threshold must be -1 (auto) or 0-255, got {other}"
            ))),
        }
    }
}

/// Placement of the two sample stripes, derived from image dimensions.
///
/// Both stripes share `x` and `width`; one sits at row 0, the other ends at
/// the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripePlacement {
    pub x: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute stripe placement for an image.
///
/// The stripe is centered on the horizontal midpoint, half-width capped so
/// it never leaves the frame, height capped at 1/10 of the image with a
/// floor of one row so even tiny images sample something.
pub fn stripe_placement(
    image_width: u32,
    image_height: u32,
    tuning: &ThresholdTuning,
) -> StripePlacement {
    let cx = image_width / 2;
    let left_room = cx.saturating_sub(1);
    let right_room = (image_width.saturating_sub(cx + 1)).min(left_room);
    let half = tuning.stripe_half_width.min(right_room);

    let height = tuning
        .stripe_height
        .min(image_height / 10)
        .clamp(1, image_height);

    StripePlacement {
        x: cx - half,
        width: 2 * half + 1,
        height,
    }
}

/// Estimate the background threshold from the top and bottom center stripes.
///
/// Returns `min(mean_top, mean_bottom) - cushion`, clamped to
/// `[clamp_min, clamp_max]`. The result therefore always lies inside the
/// clamp range.
pub fn estimate(img: &RgbImage, tuning: &ThresholdTuning) -> u8 {
    let stripe = stripe_placement(img.width(), img.height(), tuning);

    let top = crop_imm(img, stripe.x, 0, stripe.width, stripe.height);
    let bottom = crop_imm(
        img,
        stripe.x,
        img.height() - stripe.height,
        stripe.width,
        stripe.height,
    );

    let mean = mean_brightness(&top).min(mean_brightness(&bottom));
    let raw = (mean - tuning.cushion as f64) as i32;
    raw.clamp(tuning.clamp_min as i32, tuning.clamp_max as i32) as u8
}

/// Mean grayscale brightness of a region.
fn mean_brightness(region: &image::SubImage<&RgbImage>) -> f64 {
    let gray = imageops::grayscale(&**region);
    let sum: u64 = gray.pixels().map(|px| px.0[0] as u64).sum();
    sum as f64 / (gray.width() as u64 * gray.height() as u64) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn defaults() -> ThresholdTuning {
        ThresholdTuning::default()
    }

    // =========================================================================
    // ThresholdMode::from_sentinel tests
    // =========================================================================

    #[test]
    fn sentinel_minus_one_is_auto() {
        assert_eq!(ThresholdMode::from_sentinel(-1).unwrap(), ThresholdMode::Auto);
    }

    #[test]
    fn sentinel_in_range_is_fixed() {
        assert_eq!(
            ThresholdMode::from_sentinel(128).unwrap(),
            ThresholdMode::Fixed(128)
        );
        assert_eq!(
            ThresholdMode::from_sentinel(0).unwrap(),
            ThresholdMode::Fixed(0)
        );
        assert_eq!(
            ThresholdMode::from_sentinel(255).unwrap(),
            ThresholdMode::Fixed(255)
        );
    }

    #[test]
    fn sentinel_out_of_range_rejected() {
        assert!(ThresholdMode::from_sentinel(256).is_err());
        assert!(ThresholdMode::from_sentinel(-2).is_err());
    }

    // =========================================================================
    // stripe_placement tests
    // =========================================================================

    #[test]
    fn placement_centered_with_default_half_width() {
        let s = stripe_placement(1000, 800, &defaults());
        assert_eq!(s, StripePlacement { x: 460, width: 81, height: 20 });
    }

    #[test]
    fn placement_narrow_image_shrinks_half_width() {
        // width 30: cx = 15, room on the right is 14
        let s = stripe_placement(30, 800, &defaults());
        assert_eq!(s.x, 1);
        assert_eq!(s.width, 29);
    }

    #[test]
    fn placement_short_image_caps_height() {
        let s = stripe_placement(1000, 100, &defaults());
        assert_eq!(s.height, 10);
    }

    #[test]
    fn placement_tiny_image_keeps_one_row() {
        let s = stripe_placement(5, 4, &defaults());
        assert_eq!(s.height, 1);
        assert!(s.x + s.width <= 5);
    }

    #[test]
    fn placement_single_column_image() {
        let s = stripe_placement(1, 50, &defaults());
        assert_eq!(s, StripePlacement { x: 0, width: 1, height: 5 });
    }

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn uniform_backdrop_yields_mean_minus_cushion() {
        let img = RgbImage::from_pixel(400, 400, Rgb([230, 230, 230]));
        assert_eq!(estimate(&img, &defaults()), 225);
    }

    #[test]
    fn darker_stripe_wins() {
        // Top half bright, bottom half dimmer: threshold follows the bottom.
        let img = RgbImage::from_fn(400, 400, |_, y| {
            if y < 200 {
                Rgb([250, 250, 250])
            } else {
                Rgb([220, 220, 220])
            }
        });
        assert_eq!(estimate(&img, &defaults()), 215);
    }

    #[test]
    fn bright_backdrop_clamps_high() {
        let img = RgbImage::from_pixel(400, 400, Rgb([255, 255, 255]));
        assert_eq!(estimate(&img, &defaults()), 250);
    }

    #[test]
    fn dark_image_clamps_low() {
        let img = RgbImage::from_pixel(400, 400, Rgb([30, 30, 30]));
        assert_eq!(estimate(&img, &defaults()), 180);
    }

    #[test]
    fn clamp_law_holds_across_brightness_sweep() {
        let tuning = defaults();
        for level in (0..=255).step_by(15) {
            let img = RgbImage::from_pixel(120, 120, Rgb([level, level, level]));
            let thr = estimate(&img, &tuning);
            assert!(
                (tuning.clamp_min..=tuning.clamp_max).contains(&thr),
                "level {level} escaped the clamp: {thr}"
            );
        }
    }

    #[test]
    fn subject_in_center_does_not_touch_stripes() {
        // Dark block in the middle of the frame; the stripes only see
        // backdrop, so the estimate matches the uniform case.
        let img = RgbImage::from_fn(400, 400, |x, y| {
            if (100..300).contains(&x) && (100..300).contains(&y) {
                Rgb([20, 20, 20])
            } else {
                Rgb([230, 230, 230])
            }
        });
        assert_eq!(estimate(&img, &defaults()), 225);
    }

    #[test]
    fn custom_clamp_range_respected() {
        let tuning = ThresholdTuning {
            clamp_min: 100,
            clamp_max: 140,
            ..defaults()
        };
        let img = RgbImage::from_pixel(200, 200, Rgb([250, 250, 250]));
        assert_eq!(estimate(&img, &tuning), 140);
    }
}
