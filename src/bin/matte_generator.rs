use canvas_tools::error::Result;
use canvas_tools::imaging;
use canvas_tools::matte::{self, MatteSpec};
use canvas_tools::output;
use canvas_tools::tuning::Tuning;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "matte-generator")]
#[command(about = "Fit an image inside a colored matte canvas")]
#[command(long_about = "\
Fit an image inside a colored matte canvas

Scales the source to the largest size that fits the canvas minus a
symmetric padding margin, preserving aspect ratio, and centers it on a
solid background of the requested color (default 1920x1080, black).

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

    /// Canvas width
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Canvas height
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Margin on each side as a percentage of the canvas (0 to 50)
    #[arg(long, default_value_t = 0.0)]
    padding: f64,

    /// Canvas color as a hex value like #1a2b3c
    #[arg(long, default_value = "#000000")]
    color: String,

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

    let spec = MatteSpec {
        canvas: (cli.width, cli.height),
        padding_percent: cli.padding,
        color: matte::parse_hex_color(&cli.color)?,
    };

    let img = imaging::load_rgb(&cli.input)?;
    let matted = matte::render(&img, &spec)?;
    imaging::save(&matted, &cli.output, &tuning.encoding)?;

    output::print_saved(&cli.output, matted.width(), matted.height());
    Ok(())
}
