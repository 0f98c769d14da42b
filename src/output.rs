//! CLI output formatting.
//!
//! Each binary has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure; diagnostics for failures never go through here (they
//! are printed to stderr by the binaries).

use crate::compose::Decision;
use crate::pipeline::ExtendReport;
use std::path::Path;

/// Summary lines for a completed extend-canvas run.
///
/// ```text
/// Threshold: 235 (auto)
/// Foreground: rows 100..=700 (601px)
/// Canvas: extended +169px top, +170px bottom
/// Saved: out.jpg (1000x1000)
/// ```
pub fn format_extend_report(report: &ExtendReport) -> Vec<String> {
    let provenance = if report.threshold_estimated {
        "auto"
    } else {
        "fixed"
    };
    let decision = match report.decision {
        Decision::Crop { offset } => {
            format!("cropped {}px below the kept region top", offset)
        }
        Decision::Extend { top, bottom } => {
            format!("extended +{top}px top, +{bottom}px bottom")
        }
    };

    vec![
        format!("Threshold: {} ({provenance})", report.threshold),
        format!(
            "Foreground: rows {}..={} ({}px)",
            report.bounds.top,
            report.bounds.bottom,
            report.bounds.height()
        ),
        format!("Canvas: {decision}"),
        format_saved(&report.output, report.width, report.height),
    ]
}

pub fn print_extend_report(report: &ExtendReport) {
    for line in format_extend_report(report) {
        println!("{line}");
    }
}

/// The shared final line of every tool: output path and dimensions.
pub fn format_saved(path: &Path, width: u32, height: u32) -> String {
    format!("Saved: {} ({}x{})", path.display(), width, height)
}

pub fn print_saved(path: &Path, width: u32, height: u32) {
    println!("{}", format_saved(path, width, height));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foreground::ForegroundBounds;
    use std::path::PathBuf;

    fn report(decision: Decision, estimated: bool) -> ExtendReport {
        ExtendReport {
            threshold: 212,
            threshold_estimated: estimated,
            bounds: ForegroundBounds { top: 100, bottom: 700 },
            decision,
            width: 1000,
            height: 1000,
            output: PathBuf::from("out.jpg"),
        }
    }

    #[test]
    fn auto_threshold_is_labelled() {
        let lines = format_extend_report(&report(Decision::Crop { offset: 30 }, true));
        assert_eq!(lines[0], "Threshold: 212 (auto)");
    }

    #[test]
    fn fixed_threshold_is_labelled() {
        let lines = format_extend_report(&report(Decision::Crop { offset: 30 }, false));
        assert_eq!(lines[0], "Threshold: 212 (fixed)");
    }

    #[test]
    fn extend_decision_shows_both_strips() {
        let lines =
            format_extend_report(&report(Decision::Extend { top: 169, bottom: 170 }, true));
        assert_eq!(lines[2], "Canvas: extended +169px top, +170px bottom");
    }

    #[test]
    fn report_ends_with_saved_line() {
        let lines = format_extend_report(&report(Decision::Crop { offset: 0 }, true));
        assert_eq!(lines.last().unwrap(), "Saved: out.jpg (1000x1000)");
    }

    #[test]
    fn foreground_line_shows_inclusive_span() {
        let lines = format_extend_report(&report(Decision::Crop { offset: 0 }, true));
        assert_eq!(lines[1], "Foreground: rows 100..=700 (601px)");
    }
}
