//! Canvas composition: center-crop or extend to the desired height.
//!
//! The composer works in two steps, mirroring the rest of the pipeline:
//! [`plan`] is pure row arithmetic producing a [`CompositionPlan`], and
//! [`execute`] does the pixel work for a plan. [`compose`] chains the two.
//!
//! The kept region is the foreground plus a proportional margin. When the
//! desired height fits inside it, the output is a centered crop of the kept
//! region and no extension logic runs. Otherwise the missing rows are split
//! between a top and a bottom strip (odd leftover to the bottom), and each
//! strip is resampled from the genuine background rows beyond the kept
//! region, or solid white where the region already touches the image edge.

use crate::error::{CanvasError, Result};
use crate::foreground::ForegroundBounds;
use crate::geometry;
use image::imageops::{self, FilterType, crop_imm};
use image::{Rgb, RgbImage, SubImage};

/// Fill color for strips with no real background material behind them.
pub const BACKDROP_WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// How the desired height is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Kept region is tall enough: take `desired` rows starting `offset`
    /// rows below the top of the kept region.
    Crop { offset: u32 },
    /// Kept region is too short: synthesize `top` + `bottom` strip rows.
    Extend { top: u32, bottom: u32 },
}

/// A fully-resolved composition: the kept region and the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionPlan {
    /// First kept row, inclusive.
    pub crop_top: u32,
    /// Last kept row, inclusive.
    pub crop_bottom: u32,
    /// Target output height.
    pub desired_height: u32,
    pub decision: Decision,
}

impl CompositionPlan {
    /// Height of the kept region in rows.
    pub fn region_height(&self) -> u32 {
        self.crop_bottom - self.crop_top + 1
    }
}

/// Decide how to reach `desired_height` from the located foreground.
///
/// Fails with an invalid-argument error when `desired_height` is zero or
/// `padding_fraction` is negative or not finite. Never touches pixels.
pub fn plan(
    bounds: ForegroundBounds,
    image_height: u32,
    desired_height: u32,
    padding_fraction: f64,
) -> Result<CompositionPlan> {
    if desired_height == 0 {
        return Err(CanvasError::InvalidArgument(
            "desired height must be positive".into(),
        ));
    }
    if !padding_fraction.is_finite() || padding_fraction < 0.0 {
        return Err(CanvasError::InvalidArgument(format!(
            "padding fraction must be a non-negative number, got {padding_fraction}"
        )));
    }

    let (crop_top, crop_bottom) = geometry::padded_region(bounds, image_height, padding_fraction);
    let region_height = crop_bottom - crop_top + 1;

    let decision = if desired_height <= region_height {
        Decision::Crop {
            offset: geometry::center_crop_offset(region_height, desired_height),
        }
    } else {
        let (top, bottom) = geometry::split_extension(desired_height - region_height);
        Decision::Extend { top, bottom }
    };

    Ok(CompositionPlan {
        crop_top,
        crop_bottom,
        desired_height,
        decision,
    })
}

/// Produce the output canvas for a plan.
///
/// The result is always `image width x desired_height`; the canvas is fully
/// assembled in memory before the caller writes anything to disk.
pub fn execute(img: &RgbImage, plan: &CompositionPlan) -> RgbImage {
    let width = img.width();

    match plan.decision {
        Decision::Crop { offset } => crop_imm(
            img,
            0,
            plan.crop_top + offset,
            width,
            plan.desired_height,
        )
        .to_image(),
        Decision::Extend { top, bottom } => {
            let region_height = plan.region_height();
            let mut canvas = RgbImage::new(width, plan.desired_height);
            let mut y: i64 = 0;

            let top_source =
                (plan.crop_top > 0).then(|| crop_imm(img, 0, 0, width, plan.crop_top));
            if let Some(strip) = make_strip(top_source, width, top) {
                imageops::replace(&mut canvas, &strip, 0, y);
                y += i64::from(top);
            }

            let kept = crop_imm(img, 0, plan.crop_top, width, region_height);
            imageops::replace(&mut canvas, &*kept, 0, y);
            y += i64::from(region_height);

            let rows_below = img.height() - plan.crop_bottom - 1;
            let bottom_source = (rows_below > 0)
                .then(|| crop_imm(img, 0, plan.crop_bottom + 1, width, rows_below));
            if let Some(strip) = make_strip(bottom_source, width, bottom) {
                imageops::replace(&mut canvas, &strip, 0, y);
            }

            canvas
        }
    }
}

/// Plan and execute in one call.
pub fn compose(
    img: &RgbImage,
    bounds: ForegroundBounds,
    desired_height: u32,
    padding_fraction: f64,
) -> Result<RgbImage> {
    let plan = plan(bounds, img.height(), desired_height, padding_fraction)?;
    Ok(execute(img, &plan))
}

/// Build one strip: an area-style resample of the available background
/// rows, or solid white when there are none.
fn make_strip(source: Option<SubImage<&RgbImage>>, width: u32, height: u32) -> Option<RgbImage> {
    if height == 0 {
        return None;
    }
    Some(match source {
        Some(rows) => imageops::resize(&*rows, width, height, FilterType::Triangle),
        None => RgbImage::from_pixel(width, height, BACKDROP_WHITE),
    })
}
