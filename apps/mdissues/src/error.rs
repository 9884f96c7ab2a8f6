//! Error types shared by discovery, linting, and report writing.
//!
//! Per-file failures (`Read`, `Spawn`, `Lint`) are recorded on the file's
//! outcome and never abort a run. `Pattern`, `Write`, and `Config` end the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid glob pattern '{pattern}': {details}")]
    Pattern { pattern: String, details: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run linter '{program}' on {path}: {source}")]
    Spawn {
        program: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("linter '{program}' failed on {path} ({status}): {stderr}")]
    Lint {
        program: String,
        path: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {details}")]
    Config { path: PathBuf, details: String },
}

pub type Result<T> = std::result::Result<T, Error>;
