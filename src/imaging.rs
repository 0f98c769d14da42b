//! Image file I/O.
//!
//! Decoding goes through `image::ImageReader` with the compiled-in pure-Rust
//! decoders (JPEG, PNG, TIFF, WebP). Output is lossy-by-default: `jpg`/`jpeg`
//! extensions encode through an explicit quality-controlled encoder; any
//! other extension delegates to the `image` crate's extension-driven save.

use crate::error::{CanvasError, Result};
use crate::tuning::EncodingTuning;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageReader, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Load and decode an image from disk as 8-bit RGB.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = ImageReader::open(path)
        .map_err(CanvasError::Io)?
        .decode()
        .map_err(|source| CanvasError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(img.into_rgb8())
}

/// Encode and write an image, honoring the output path's extension.
pub fn save(img: &RgbImage, path: &Path, encoding: &EncodingTuning) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => save_jpeg(img, path, encoding.jpeg_quality),
        _ => img.save(path).map_err(|source| CanvasError::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Encode as JPEG at the configured quality.
fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality);
    img.write_with_encoder(encoder)
        .map_err(|source| CanvasError::Write {
            path: path.to_path_buf(),
            source,
        })
}
