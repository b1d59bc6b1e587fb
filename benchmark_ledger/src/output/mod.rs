//!
//! Ledger query output.
//!

pub mod csv;
pub mod format;
pub mod json;
pub mod selection;
pub mod xlsx;


use std::io::Write;
use std::path::Path;

use crate::output::csv::Csv;
use crate::output::format::Format;
use crate::output::json::Json;
use crate::output::selection::Selection;
use crate::output::xlsx::Xlsx;

///
/// Serialized query result.
///
pub enum Output {
    /// Output is a single text file.
    SingleFile(String),
    /// Output is a single spreadsheet.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the output to a file.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path, content)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
        }
        log::info!("Wrote query output to {path:?}");
        Ok(())
    }

    ///
    /// Writes text output to `stdout`.
    ///
    pub fn write_to_stdout(self) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                if !content.ends_with('\n') {
                    writeln!(stdout)?;
                }
            }
            Output::SingleFileXlsx(_) => {
                anyhow::bail!("Spreadsheet output requires `--output-path`")
            }
        }
        Ok(())
    }
}

impl TryFrom<(&Selection<'_>, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((selection, output_format): (&Selection<'_>, Format)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Json => Json::try_from(selection)?.into(),
            Format::Csv => Csv::from(selection).into(),
            Format::Xlsx => Xlsx::try_from(selection)?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
