//! The extend-canvas pipeline: threshold, locate, compose, save.
//!
//! One invocation processes exactly one image end to end. The stages are
//! pure functions composed sequentially; I/O happens only at the two edges
//! (decode the input, encode the output). On any failure the output file is
//! never created.

use crate::compose::{self, BACKDROP_WHITE, Decision};
use crate::error::Result;
use crate::fit;
use crate::foreground::{self, ForegroundBounds};
use crate::imaging;
use crate::threshold::{self, ThresholdMode};
use crate::tuning::Tuning;
use std::path::PathBuf;

/// Everything one extend-canvas invocation needs.
#[derive(Debug, Clone)]
pub struct ExtendRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Target output height in pixels.
    pub desired_height: u32,
    /// Fraction of foreground height kept as margin around the subject.
    pub padding_fraction: f64,
    pub threshold: ThresholdMode,
    /// Optional exact output dimensions; the composed canvas is fitted and
    /// centered on a white background when set.
    pub fit: Option<(u32, u32)>,
    pub tuning: Tuning,
}

/// What an invocation actually did, for CLI reporting.
#[derive(Debug, Clone)]
pub struct ExtendReport {
    /// Per-channel cutoff that was applied.
    pub threshold: u8,
    /// True when the cutoff came from stripe estimation rather than the caller.
    pub threshold_estimated: bool,
    pub bounds: ForegroundBounds,
    pub decision: Decision,
    /// Final output dimensions after the optional fit step.
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
}

/// Run the full pipeline for one image.
pub fn run(request: &ExtendRequest) -> Result<ExtendReport> {
    let img = imaging::load_rgb(&request.input)?;

    let (threshold, threshold_estimated) = match request.threshold {
        ThresholdMode::Fixed(value) => (value, false),
        ThresholdMode::Auto => (threshold::estimate(&img, &request.tuning.threshold), true),
    };

    let bounds = foreground::locate(&img, threshold)?;
    let plan = compose::plan(
        bounds,
        img.height(),
        request.desired_height,
        request.padding_fraction,
    )?;
    let mut canvas = compose::execute(&img, &plan);

    if let Some((width, height)) = request.fit {
        canvas = fit::fit_to_canvas(&canvas, width, height, BACKDROP_WHITE);
    }

    let (width, height) = (canvas.width(), canvas.height());
    imaging::save(&canvas, &request.output, &request.tuning.encoding)?;

    Ok(ExtendReport {
        threshold,
        threshold_estimated,
        bounds,
        decision: plan.decision,
        width,
        height,
        output: request.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CanvasError;
    use image::{Rgb, RgbImage};
    use std::path::Path;

    fn write_studio_image(path: &Path, width: u32, height: u32, fg_top: u32, fg_bottom: u32) {
        let img = RgbImage::from_fn(width, height, |_, y| {
            if y >= fg_top && y <= fg_bottom {
                Rgb([60, 60, 60])
            } else {
                Rgb([240, 240, 240])
            }
        });
        img.save(path).unwrap();
    }

    fn request(input: &Path, output: &Path, desired_height: u32) -> ExtendRequest {
        ExtendRequest {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            desired_height,
            padding_fraction: 0.05,
            threshold: ThresholdMode::Auto,
            fit: None,
            tuning: Tuning::default(),
        }
    }

    #[test]
    fn crop_path_end_to_end() {
        let tmp = tempfile::TempDir::new().unwrap();
        let input = tmp.path().join("in.png");
        let output = tmp.path().join("out.jpg");
        write_studio_image(&input, 200, 800, 100, 700);

        let report = run(&request(&input, &output, 600)).unwrap();

        assert!(report.threshold_estimated);
        assert_eq!(report.bounds, ForegroundBounds { top: 100, bottom: 700 });
        assert!(matches!(report.decision, Decision::Crop { offset: 30 }));
        assert_eq!((report.width, report.height), (200, 600));
        assert!(output.exists());
    }

    #[test]
    fn extend_path_end_to_end() {
        let tmp = tempfile::TempDir::new().unwrap();
        let input = tmp.path().join("in.png");
        let output = tmp.path().join("out.jpg");
        write_studio_image(&input, 200, 800, 100, 700);

        let report = run(&request(&input, &output, 1000)).unwrap();

        assert!(matches!(
            report.decision,
            Decision::Extend { top: 169, bottom: 170 }
        ));
        assert_eq!((report.width, report.height), (200, 1000));
    }

    #[test]
    fn fixed_threshold_skips_estimation() {
        let tmp = tempfile::TempDir::new().unwrap();
        let input = tmp.path().join("in.png");
        let output = tmp.path().join("out.jpg");
        write_studio_image(&input, 200, 400, 50, 350);

        let mut req = request(&input, &output, 300);
        req.threshold = ThresholdMode::Fixed(128);
        let report = run(&req).unwrap();

        assert_eq!(report.threshold, 128);
        assert!(!report.threshold_estimated);
    }

    #[test]
    fn all_white_input_fails_without_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let input = tmp.path().join("in.png");
        let output = tmp.path().join("out.jpg");
        RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]))
            .save(&input)
            .unwrap();

        let result = run(&request(&input, &output, 200));

        assert!(matches!(result, Err(CanvasError::ForegroundNotFound)));
        assert!(!output.exists());
    }

    #[test]
    fn fit_step_forces_exact_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let input = tmp.path().join("in.png");
        let output = tmp.path().join("out.png");
        write_studio_image(&input, 200, 800, 100, 700);

        let mut req = request(&input, &output, 1000);
        req.fit = Some((150, 600));
        let report = run(&req).unwrap();

        assert_eq!((report.width, report.height), (150, 600));
        let saved = imaging::load_rgb(&output).unwrap();
        assert_eq!((saved.width(), saved.height()), (150, 600));
    }

    #[test]
    fn missing_input_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let output = tmp.path().join("out.jpg");
        let result = run(&request(
            Path::new("/nonexistent/in.jpg"),
            &output,
            500,
        ));
        assert!(matches!(result, Err(CanvasError::Io(_))));
        assert!(!output.exists());
    }
}
