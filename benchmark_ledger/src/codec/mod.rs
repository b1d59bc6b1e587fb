//!
//! The ledger file codec.
//!
//! The script form is what the chart page loads:
//!
//! ```text
//! window.BENCHMARK_DATA = {
//!   "lastUpdate": 1612141895473,
//!   ...
//! }
//! ```
//!
//! The object is pretty-printed with two-space indentation and no trailing
//! newline, matching the byte layout of the CI action, so appending a record
//! to a file only adds lines.
//!

pub mod error;
pub mod form;


use std::path::Path;

use crate::model::suite_run::violation::Strictness;
use crate::model::suite_run::BenchmarkSuiteRun;

use self::error::DecodeError;
use self::error::Error;
use self::form::Form;

/// The global variable the ledger is assigned to.
pub const SCRIPT_VARIABLE: &str = "window.BENCHMARK_DATA";

/// The assignment every script-form ledger starts with.
pub const SCRIPT_PREFIX: &str = "window.BENCHMARK_DATA = ";

///
/// Decodes a ledger from text and checks its invariants.
///
/// The whole text is rejected on any syntax error, truncation or invariant
/// violation. There is no partial recovery.
///
pub fn decode(text: &str, form: Form) -> Result<BenchmarkSuiteRun, DecodeError> {
    let suite_run = decode_unchecked(text, form)?;

    let violations = suite_run.validate(Strictness::Lenient);
    if !violations.is_empty() {
        return Err(DecodeError::Invalid(violations));
    }
    Ok(suite_run)
}

///
/// Decodes a ledger from text without checking its invariants.
///
pub fn decode_unchecked(text: &str, form: Form) -> Result<BenchmarkSuiteRun, DecodeError> {
    let object = match form {
        Form::Script => strip_assignment(text)?,
        Form::Json => text,
    };
    let suite_run: BenchmarkSuiteRun = serde_json::from_str(object)?;
    Ok(suite_run)
}

///
/// Encodes a ledger to text.
///
pub fn encode(suite_run: &BenchmarkSuiteRun, form: Form) -> Result<String, serde_json::Error> {
    let object = serde_json::to_string_pretty(suite_run)?;
    Ok(match form {
        Form::Script => format!("{SCRIPT_PREFIX}{object}"),
        Form::Json => object,
    })
}

///
/// Reads a ledger file, choosing the form by its extension.
///
pub fn read(path: &Path) -> Result<BenchmarkSuiteRun, Error> {
    read_with(path, decode)
}

///
/// Reads a ledger file without checking its invariants.
///
pub fn read_unchecked(path: &Path) -> Result<BenchmarkSuiteRun, Error> {
    read_with(path, decode_unchecked)
}

///
/// Reads a ledger file, or creates an empty ledger if the file does not exist.
///
pub fn read_or_new(path: &Path, repo_url: &str) -> Result<BenchmarkSuiteRun, Error> {
    if !path.exists() {
        log::info!("Ledger file {path:?} does not exist and will be created");
        return Ok(BenchmarkSuiteRun::new(repo_url.to_owned()));
    }
    read(path)
}

///
/// Writes a ledger file, choosing the form by its extension.
///
/// The text is written to a sibling file first and then renamed over the
/// target, so an interrupted write never leaves a truncated ledger.
///
pub fn write(suite_run: &BenchmarkSuiteRun, path: &Path) -> Result<(), Error> {
    let text = encode(suite_run, Form::from_path(path))?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|error| Error::Writing {
            error,
            path: path.to_path_buf(),
        })?;
    }
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temporary_path = path.with_file_name(format!(".{file_name}.tmp"));
    std::fs::write(temporary_path.as_path(), text).map_err(|error| Error::Writing {
        error,
        path: temporary_path.clone(),
    })?;
    std::fs::rename(temporary_path.as_path(), path).map_err(|error| Error::Writing {
        error,
        path: path.to_path_buf(),
    })?;

    log::debug!("Wrote ledger {path:?}");
    Ok(())
}

///
/// Reads a ledger file with the given decoder.
///
fn read_with<D>(path: &Path, decoder: D) -> Result<BenchmarkSuiteRun, Error>
where
    D: Fn(&str, Form) -> Result<BenchmarkSuiteRun, DecodeError>,
{
    let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
        error,
        path: path.to_path_buf(),
    })?;
    if text.trim().is_empty() {
        return Err(Error::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    let suite_run =
        decoder(text.as_str(), Form::from_path(path)).map_err(|error| Error::Decoding {
            error,
            path: path.to_path_buf(),
        })?;
    log::debug!(
        "Read ledger {path:?} with {} suite(s)",
        suite_run.entries().len()
    );
    Ok(suite_run)
}

///
/// Strips the `window.BENCHMARK_DATA =` assignment and an optional trailing semicolon.
///
fn strip_assignment(text: &str) -> Result<&str, DecodeError> {
    let object = text
        .trim_start()
        .strip_prefix(SCRIPT_VARIABLE)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or(DecodeError::MissingPrefix)?
        .trim();
    Ok(object.strip_suffix(';').unwrap_or(object))
}

impl TryFrom<&Path> for BenchmarkSuiteRun {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        read(path)
    }
}
