//! theme-normalize — rescale 8-bit RGBA theme colors to normalized floats.
//!
//! A theme is an open JSON object mapping field names to heterogeneous
//! values. Any top-level value that is an array of exactly four numbers is
//! treated as an RGBA color and rescaled from 0–255 magnitudes to 0.0–1.0
//! by dividing each channel by 255.0. Every other value passes through
//! untouched.
//!
//! # Pipeline
//!
//! ```text
//! read INPUT ──► parse JSON object ──► rescale color fields ──► write OUTPUT
//! ```
//!
//! One pass, one process, no state between runs. The write is atomic
//! (temp file + rename), so a failed run never leaves a truncated output.

pub mod error;
pub mod normalize;

pub use error::NormalizeError;
pub use normalize::{is_rgba, normalize_theme, run};
