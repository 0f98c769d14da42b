use canvas_tools::error::{CanvasError, Result};
use canvas_tools::output;
use canvas_tools::pipeline::{self, ExtendRequest};
use canvas_tools::threshold::ThresholdMode;
use canvas_tools::tuning::{Tuning, stock_tuning_toml};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "extend-canvas")]
#[command(about = "Crop or extend a studio shot to a target height")]
#[command(long_about = "\
Crop or extend a studio shot to a target height

Locates the subject of a product photograph against a light backdrop,
keeps it with a proportional margin, and either center-crops or extends
the canvas to the requested height. Extension strips are resampled from
the image's own background above and below the subject, so the result
has no visible seams; where the subject touches an image edge the strip
falls back to solid white.

The background cutoff is estimated from thin backdrop stripes at the top
and bottom center of the frame unless an explicit value is given. On
success the threshold actually used is reported on stdout.

Exit status is 0 on success and 1 on any failure (bad arguments,
unreadable input, no detectable subject); diagnostics go to stderr and
no output file is written on failure.")]
#[command(version)]
struct Cli {
    /// Source image (JPEG, PNG, TIFF, or WebP)
    #[arg(required_unless_present = "print_tuning")]
    input: Option<PathBuf>,

    /// Destination image; .jpg/.jpeg encodes at the tuned quality
    #[arg(required_unless_present = "print_tuning")]
    output: Option<PathBuf>,

    /// Target output height in pixels
    #[arg(required_unless_present = "print_tuning")]
    desired_height: Option<i64>,

    /// Fraction of foreground height kept as margin around the subject
    #[arg(default_value_t = 0.05)]
    padding_fraction: f64,

    /// Background cutoff 0-255, or -1 to estimate from the image
    #[arg(default_value_t = -1, allow_negative_numbers = true)]
    white_threshold: i32,

    /// Exact output width; takes effect together with REQUESTED_HEIGHT
    #[arg(default_value_t = -1, allow_negative_numbers = true)]
    requested_width: i64,

    /// Exact output height; takes effect together with REQUESTED_WIDTH
    #[arg(default_value_t = -1, allow_negative_numbers = true)]
    requested_height: i64,

    /// TOML file overriding the tuning constants
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the stock tuning file and exit
    #[arg(long)]
    print_tuning: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version surface as parse "errors"; they keep
            // their conventional success status. Real usage errors exit 1
            // so the invoking service sees a single failure code.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.print_tuning {
        print!("{}", stock_tuning_toml());
        return Ok(());
    }

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let request = ExtendRequest {
        input: required(cli.input, "input path")?,
        output: required(cli.output, "output path")?,
        desired_height: positive_height(required(cli.desired_height, "desired height")?)?,
        padding_fraction: cli.padding_fraction,
        threshold: ThresholdMode::from_sentinel(cli.white_threshold)?,
        fit: requested_dimensions(cli.requested_width, cli.requested_height)?,
        tuning,
    };

    let report = pipeline::run(&request)?;
    output::print_extend_report(&report);
    Ok(())
}

fn required<T>(value: Option<T>, what: &str) -> Result<T> {
    value.ok_or_else(|| CanvasError::InvalidArgument(format!("{what} is required")))
}

fn positive_height(value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(CanvasError::InvalidArgument(format!(
            "desired height must be positive, got {value}"
        )));
    }
    u32::try_from(value).map_err(|_| {
        CanvasError::InvalidArgument(format!("desired height {value} is out of range"))
    })
}

/// The final fit step takes effect only when both dimensions are positive,
/// matching the historical CLI where -1 meant "not requested".
fn requested_dimensions(width: i64, height: i64) -> Result<Option<(u32, u32)>> {
    if width > 0 && height > 0 {
        let width = u32::try_from(width).map_err(|_| {
            CanvasError::InvalidArgument(format!("requested width {width} is out of range"))
        })?;
        let height = u32::try_from(height).map_err(|_| {
            CanvasError::InvalidArgument(format!("requested height {height} is out of range"))
        })?;
        Ok(Some((width, height)))
    } else {
        Ok(None)
    }
}
