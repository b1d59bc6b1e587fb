//!
//! Benchmark input reports.
//!

pub mod cargo;
pub mod custom;
pub mod error;
pub mod pytest;
pub mod tool;


use std::path::Path;
use std::path::PathBuf;

use crate::model::suite_run::record::bench_case::BenchCase;

use self::custom::CustomReport;
use self::error::Error as InputError;
use self::pytest::PytestReport;
use self::tool::Tool;

///
/// Measurements read from one benchmark harness output file.
///
#[derive(Debug)]
pub struct InputReport {
    /// The harness that produced the file.
    pub tool: Tool,
    /// The measurements, in file order.
    pub benches: Vec<BenchCase>,
}

impl InputReport {
    ///
    /// Parses harness output. `path` is only used in error messages.
    ///
    pub fn parse(text: &str, tool: Tool, path: &Path) -> Result<Self, InputError> {
        let parsing_error = |error: serde_json::Error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        };
        let benches: Vec<BenchCase> = match tool {
            Tool::Pytest => serde_json::from_str::<PytestReport>(text)
                .map_err(parsing_error)?
                .into(),
            Tool::Cargo => self::cargo::parse(text),
            Tool::CustomBiggerIsBetter | Tool::CustomSmallerIsBetter => {
                serde_json::from_str::<CustomReport>(text)
                    .map_err(parsing_error)?
                    .into()
            }
        };
        if benches.is_empty() {
            return Err(InputError::NoBenches {
                path: path.to_path_buf(),
                tool: tool.to_string(),
            });
        }
        Ok(Self { tool, benches })
    }

    ///
    /// Reads every input path and concatenates the measurements in path order.
    ///
    /// Directories are expanded to the tool's report files beneath them.
    /// Empty files are skipped with a warning.
    ///
    pub fn collect(paths: Vec<PathBuf>, tool: Tool) -> anyhow::Result<Vec<BenchCase>> {
        let mut benches = Vec::new();
        for path in resolve_paths(paths, tool)?.into_iter() {
            match Self::try_from((path.as_path(), tool)) {
                Ok(report) => {
                    log::debug!("Read {} benches from {path:?}", report.benches.len());
                    benches.extend(report.benches);
                }
                Err(InputError::EmptyFile { path }) => {
                    log::warn!("Input file {path:?} is empty and will be skipped");
                }
                Err(error) => Err(error)?,
            }
        }
        if benches.is_empty() {
            anyhow::bail!("No {tool} benchmark results found in the input files");
        }
        Ok(benches)
    }
}

impl TryFrom<(&Path, Tool)> for InputReport {
    type Error = InputError;

    fn try_from((path, tool): (&Path, Tool)) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        Self::parse(text.as_str(), tool, path)
    }
}

///
/// Expands directories to the report files beneath them, sorted by path.
///
pub fn resolve_paths(paths: Vec<PathBuf>, tool: Tool) -> anyhow::Result<Vec<PathBuf>> {
    if paths.is_empty() {
        anyhow::bail!("No input files provided");
    }

    let mut resolved = Vec::with_capacity(paths.len());
    for path in paths.into_iter() {
        if !path.is_dir() {
            resolved.push(path);
            continue;
        }
        let resolution_pattern = format!(
            "{}/**/*.{}",
            path.to_string_lossy(),
            tool.report_extension()
        );
        let mut matches: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
            .filter_map(Result::ok)
            .collect();
        if matches.is_empty() {
            anyhow::bail!(
                "Input directory {path:?} contains no `*.{}` files",
                tool.report_extension()
            );
        }
        matches.sort();
        resolved.extend(matches);
    }
    Ok(resolved)
}
