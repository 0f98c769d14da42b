//! # Canvas Tools
//!
//! Image framing tools for studio product photography: given a vehicle shot
//! against a light backdrop, produce deliverables at exact pixel dimensions
//! without visible seams. Three small binaries share this library, mirroring
//! how the hosting service invokes them as independent processes:
//!
//! - **`extend-canvas`**: locate the subject, then center-crop or extend the
//!   canvas to a target height, synthesizing new backdrop strips from the
//!   image's own background.
//! - **`image-cropper`**: cut a rectangle, scale it, center it on a fixed
//!   vertical-format canvas.
//! - **`matte-generator`**: fit a shot inside a colored matte with a margin.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! The extend-canvas core is three pure, single-pass stages composed
//! linearly, with I/O only at the edges:
//!
//! ```text
//! 1. Threshold   image            →  background cutoff   (center-stripe sampling)
//! 2. Foreground  image + cutoff   →  subject row span    (per-row max reduction)
//! 3. Compose     span + height    →  output canvas       (center-crop or extend)
//! ```
//!
//! Each stage is a free function over immutable data; every invocation
//! processes exactly one image with no shared state, so concurrency is the
//! caller's problem (the hosting service runs one OS process per image).
//! Decisions are planned as plain row arithmetic before any pixel is
//! touched, which keeps the interesting logic unit-testable without images.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`threshold`] | Stage 1 — adaptive background-brightness cutoff from backdrop stripes |
//! | [`foreground`] | Stage 2 — vertical subject extent by row-wise thresholding |
//! | [`compose`] | Stage 3 — crop-or-extend planning and canvas assembly |
//! | [`geometry`] | Pure row/fit arithmetic shared by every stage |
//! | [`fit`] | Optional final fit onto exact output dimensions |
//! | [`cropper`] | The `image-cropper` operation |
//! | [`matte`] | The `matte-generator` operation |
//! | [`pipeline`] | End-to-end orchestration for `extend-canvas` |
//! | [`imaging`] | Decode/encode through the `image` crate |
//! | [`tuning`] | Named, overridable constants (stripe sizes, clamp range, quality) |
//! | [`output`] | CLI result formatting |
//! | [`error`] | Error taxonomy shared by library and binaries |
//!
//! # Design Decisions
//!
//! ## Adaptive Threshold Over a Fixed Cutoff
//!
//! Soft-box brightness varies between shoots, so a single global "white"
//! cutoff misclassifies either the backdrop or the subject. The estimator
//! samples the backdrop where studio shots reliably show it (thin stripes at
//! the top and bottom center), takes the darker mean minus a cushion, and
//! clamps the result to a safe range so a stripe that accidentally catches
//! the subject cannot produce an unusable threshold.
//!
//! ## Plan, Then Execute
//!
//! [`compose::plan`] resolves the kept region and the crop-versus-extend
//! decision as integer row arithmetic; [`compose::execute`] only then does
//! pixel work. The split keeps invariants (exact output height, bottom-heavy
//! strip split, centered crop window) testable as plain math.
//!
//! ## Backdrop Strips From the Image Itself
//!
//! Extension strips are area-style resamples of the genuine background rows
//! above and below the kept region, so lighting falloff and backdrop tint
//! carry into the new material and the seams stay invisible. Only when the
//! kept region already touches an image edge is there nothing to resample,
//! and the strip falls back to solid white.
//!
//! ## Single-Threaded on Purpose
//!
//! The dominant cost is decode/resample/encode inside the `image` crate,
//! bounded by pixel count. The hosting service parallelizes by running many
//! processes, which isolates memory and file handles per image; the core
//! stays free of threads, locks, and cancellation points.

pub mod compose;
pub mod cropper;
pub mod error;
pub mod fit;
pub mod foreground;
pub mod geometry;
pub mod imaging;
pub mod matte;
pub mod output;
pub mod pipeline;
pub mod threshold;
pub mod tuning;
