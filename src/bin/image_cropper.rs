use canvas_tools::cropper::{self, CropSpec};
use canvas_tools::error::Result;
use canvas_tools::imaging;
use canvas_tools::output;
use canvas_tools::tuning::Tuning;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "image-cropper")]
#[command(about = "Crop a region and center it on a fixed-size canvas")]
#[command(long_about = "\
Crop a region and center it on a fixed-size canvas

Extracts a rectangle from the source image, optionally scales it, and
centers the result on a black canvas (default 1080x1920, the 9:16
vertical format). A scaled crop larger than the canvas is shrunk back
to fit before centering.

Exit status is 0 on success and 1 on any failure; diagnostics go to
stderr.")]
#[command(version)]
struct Cli {
    /// Source image
    #[arg(long)]
    input: PathBuf,

    /// Destination image; .jpg/.jpeg encodes at the tuned quality
    #[arg(long)]
    output: PathBuf,

    /// X coordinate of the crop area
    #[arg(long, default_value_t = 0)]
    crop_x: u32,

    /// Y coordinate of the crop area
    #[arg(long, default_value_t = 0)]
    crop_y: u32,

    /// Width of the crop area (default: to the right edge)
    #[arg(long)]
    crop_width: Option<u32>,

    /// Height of the crop area (default: to the bottom edge)
    #[arg(long)]
    crop_height: Option<u32>,

    /// Output canvas width
    #[arg(long, default_value_t = 1080)]
    output_width: u32,

    /// Output canvas height
    #[arg(long, default_value_t = 1920)]
    output_height: u32,

    /// Scale factor for the cropped region
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// TOML file overriding the tuning constants
    #[arg(long)]
    tuning: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
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
    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let spec = CropSpec {
        x: cli.crop_x,
        y: cli.crop_y,
        width: cli.crop_width,
        height: cli.crop_height,
        scale: cli.scale,
        canvas: (cli.output_width, cli.output_height),
    };

    let img = imaging::load_rgb(&cli.input)?;
    let framed = cropper::render(&img, &spec)?;
    imaging::save(&framed, &cli.output, &tuning.encoding)?;

    output::print_saved(&cli.output, framed.width(), framed.height());
    Ok(())
}
