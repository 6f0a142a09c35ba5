//! Error taxonomy for the normalizer pipeline.
//!
//! Every failure aborts the run; nothing is recovered or retried. The
//! variants distinguish the three ways a run can fail after argument
//! parsing: the input cannot be read, the input is not a JSON theme, or
//! the output cannot be written. Wrong CLI arity never reaches this type;
//! clap reports it with a usage message before any I/O happens.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Input path missing or unreadable. No output is created.
    #[error("failed to read input theme {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid JSON. No output is created.
    #[error("input theme {path} is not valid JSON: {source}")]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input parsed, but the top-level value is not an object.
    #[error("input theme {path} must be a JSON object at the top level")]
    NotAnObject { path: PathBuf },

    /// Output temp file could not be created, written, or renamed into place.
    #[error("failed to write output theme {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
