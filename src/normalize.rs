//! The Normalizer — load a theme, rescale its color fields, store it.
//!
//! Color fields are detected by shape alone: any top-level value that is an
//! array of exactly four numbers counts as RGBA, regardless of its key.
//! Arrays of any other length, and 4-element arrays with a non-numeric
//! element, pass through unchanged — [`is_rgba`] is a guarded predicate,
//! never a cast.
//!
//! The tool has no notion of "already normalized": running it twice divides
//! twice. That matches the original behavior and is expected.

use std::path::Path;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::error::NormalizeError;

// ---------------------------------------------------------------------------
// Shape predicate
// ---------------------------------------------------------------------------

/// Is this value structurally an RGBA color — an array of exactly four
/// numbers?
pub fn is_rgba(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.len() == 4 && items.iter().all(Value::is_number),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// In-memory pass
// ---------------------------------------------------------------------------

/// Rescale every color field in `theme` from 0–255 to 0.0–1.0 in place.
///
/// Keys and non-color values are left untouched; only values matching
/// [`is_rgba`] are replaced, element-wise, by `channel / 255.0`.
pub fn normalize_theme(theme: &mut Map<String, Value>) {
    for (key, value) in theme.iter_mut() {
        if !is_rgba(value) {
            continue;
        }
        if let Value::Array(items) = value {
            tracing::debug!(%key, "rescaling RGBA field");
            for item in items.iter_mut() {
                // is_rgba guarantees a number; every JSON number converts
                // to f64.
                let channel = item.as_f64().unwrap_or(0.0);
                *item = Value::from(channel / 255.0);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// File pipeline
// ---------------------------------------------------------------------------

/// Read the theme at `input`, normalize it, and write it to `output`.
///
/// The output write is atomic: the theme is serialized to a temp file in
/// the output's directory and renamed into place, so a failed run never
/// leaves a truncated file. Any pre-existing content at `output` is
/// replaced.
pub fn run(input: &Path, output: &Path) -> Result<(), NormalizeError> {
    let raw = std::fs::read_to_string(input).map_err(|source| NormalizeError::InputRead {
        path: input.to_path_buf(),
        source,
    })?;

    let parsed: Value =
        serde_json::from_str(&raw).map_err(|source| NormalizeError::InputParse {
            path: input.to_path_buf(),
            source,
        })?;

    let Value::Object(mut theme) = parsed else {
        return Err(NormalizeError::NotAnObject {
            path: input.to_path_buf(),
        });
    };

    normalize_theme(&mut theme);
    write_atomic(output, &Value::Object(theme))
}

/// Serialize `theme` to a temp file next to `output`, then rename it into
/// place.
fn write_atomic(output: &Path, theme: &Value) -> Result<(), NormalizeError> {
    let write_err = |source: std::io::Error| NormalizeError::OutputWrite {
        path: output.to_path_buf(),
        source,
    };

    // An output path with no parent component ("out.json") lives in the
    // current directory; the temp file must be on the same filesystem for
    // the rename to work.
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    serde_json::to_writer(&mut tmp, theme).map_err(|e| write_err(e.into()))?;
    tmp.persist(output).map_err(|e| write_err(e.error))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
