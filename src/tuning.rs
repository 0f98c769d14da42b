//! Tuning constants for threshold estimation and output encoding.
//!
//! The numeric constants here (stripe dimensions, brightness cushion, clamp
//! range) were tuned empirically against studio product photography and carry
//! no documented derivation. They are exposed as named configuration rather
//! than inlined literals so a deployment can adjust them without a rebuild,
//! but the stock values should not be changed without re-validating against
//! representative shots.
//!
//! ## Tuning File
//!
//! All binaries accept `--tuning <path>` pointing to a sparse TOML file:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [threshold]
//! stripe_height = 20      # Sample stripe height in px (capped at height/10)
//! stripe_half_width = 40  # Half-width of the stripe around the midpoint
//! cushion = 5             # Subtracted from the measured stripe brightness
//! clamp_min = 180         # Lower bound for the auto threshold
//! clamp_max = 250         # Upper bound for the auto threshold
//!
//! [encoding]
//! jpeg_quality = 95       # JPEG encode quality (1-100)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("tuning validation error: {0}")]
    Validation(String),
}

/// Tuning values loaded from an optional TOML file.
///
/// All fields have stock defaults; user files need only override the values
/// they want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Auto-threshold estimation constants.
    pub threshold: ThresholdTuning,
    /// Output encoding settings.
    pub encoding: EncodingTuning,
}

/// Constants for the center-stripe brightness sampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdTuning {
    /// Height of each sample stripe in pixels, capped at 1/10 of the image.
    pub stripe_height: u32,
    /// Half-width of the stripe around the horizontal midpoint.
    pub stripe_half_width: u32,
    /// Points subtracted below the measured stripe brightness.
    pub cushion: u8,
    /// Lower clamp for the derived threshold.
    pub clamp_min: u8,
    /// Upper clamp for the derived threshold.
    pub clamp_max: u8,
}

impl Default for ThresholdTuning {
    fn default() -> Self {
        Self {
            stripe_height: 20,
            stripe_half_width: 40,
            cushion: 5,
            clamp_min: 180,
            clamp_max: 250,
        }
    }
}

/// Output encoding settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodingTuning {
    /// JPEG quality (1-100) for lossy output paths.
    pub jpeg_quality: u8,
}

impl Default for EncodingTuning {
    fn default() -> Self {
        Self { jpeg_quality: 95 }
    }
}

impl Tuning {
    /// Load tuning from a TOML file, validating the result.
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse tuning from TOML text, validating the result.
    pub fn from_toml_str(content: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = toml::from_str(content)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Validate values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), TuningError> {
        let t = &self.threshold;
        if t.clamp_min > t.clamp_max {
            return Err(TuningError::Validation(format!(
                "threshold.clamp_min ({}) must not exceed threshold.clamp_max ({})",
                t.clamp_min, t.clamp_max
            )));
        }
        if t.stripe_height == 0 {
            return Err(TuningError::Validation(
                "threshold.stripe_height must be at least 1".into(),
            ));
        }
        if self.encoding.jpeg_quality == 0 || self.encoding.jpeg_quality > 100 {
            return Err(TuningError::Validation(
                "encoding.jpeg_quality must be 1-100".into(),
            ));
        }
        Ok(())
    }
}

/// The stock tuning file with every option documented, suitable for
/// `--print-tuning` output.
pub fn stock_tuning_toml() -> String {
    let defaults = Tuning::default();
    let t = defaults.threshold;
    format!(
        "\
# canvas-tools tuning file
# All options are optional - defaults shown below.
# These constants were tuned against studio product photography;
# change them only after re-validating on representative shots.

[threshold]
stripe_height = {}      # Sample stripe height in px (capped at height/10)
stripe_half_width = {}  # Half-width of the stripe around the midpoint
cushion = {}             # Subtracted from the measured stripe brightness
clamp_min = {}         # Lower bound for the auto threshold
clamp_max = {}         # Upper bound for the auto threshold

[encoding]
jpeg_quality = {}       # JPEG encode quality (1-100)
",
        t.stripe_height,
        t.stripe_half_width,
        t.cushion,
        t.clamp_min,
        t.clamp_max,
        defaults.encoding.jpeg_quality,
    )
}
