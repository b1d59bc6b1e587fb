//!
//! Ledger file codec errors.
//!

use std::path::PathBuf;

use crate::model::suite_run::violation::Violation;

///
/// Ledger text decoding error.
///
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The text does not start with the global variable assignment.
    #[error("Expected the `window.BENCHMARK_DATA = ` assignment")]
    MissingPrefix,
    /// The object is malformed or truncated.
    #[error("{0}")]
    Parsing(#[from] serde_json::Error),
    /// The object parsed but breaks ledger invariants.
    #[error("{} invariant violation(s): {}", .0.len(), format_violations(.0))]
    Invalid(Vec<Violation>),
}

///
/// Ledger file error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the ledger file.
    #[error("Reading ledger file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the ledger file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Ledger file {path:?} is empty")]
    EmptyFile {
        /// The path to the ledger file.
        path: PathBuf,
    },
    /// Error decoding the ledger file.
    #[error("Decoding ledger file {path:?}: {error}")]
    Decoding {
        /// The underlying decoding error.
        error: DecodeError,
        /// The path to the ledger file.
        path: PathBuf,
    },
    /// Error serializing the ledger.
    #[error("Serializing ledger: {0}")]
    Serializing(#[from] serde_json::Error),
    /// Error writing the ledger file.
    #[error("Writing ledger file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the ledger file.
        path: PathBuf,
    },
}

///
/// Joins violation messages into one line.
///
fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| violation.to_string())
        .collect::<Vec<String>>()
        .join("; ")
}
