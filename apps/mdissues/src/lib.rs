//! mdissues core library.
//!
//! Lints Markdown files and writes whatever the linter reports to a single
//! report file (`markdownissues.txt` by default).
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `lint`: File discovery and the parallel lint pass.
//! - `linter`: Lint backends (built-in rules or an external command).
//! - `rules`: Built-in markdownlint-style rules.
//! - `report`: Single-writer report file output.
//! - `models`: Lint output structs and search topology fixtures.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod linter;
pub mod models;
pub mod output;
pub mod report;
pub mod rules;
pub mod utils;

pub use error::{Error, Result};
