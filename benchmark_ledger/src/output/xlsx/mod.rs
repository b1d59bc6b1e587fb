//!
//! XLSX output format for benchmark history.
//!

pub mod worksheet;

use crate::model::suite_run::record::commit::Commit;
use crate::output::selection::Row;
use crate::output::selection::Selection;
use crate::util::time;

use self::worksheet::Worksheet;

///
/// XLSX output format for benchmark history.
///
pub struct Xlsx {
    /// Worksheet with one row per record and one column per bench.
    pub history_worksheet: Worksheet,
}

impl Xlsx {
    /// The history worksheet name.
    pub const HISTORY_WORKSHEET_NAME: &'static str = "History";

    ///
    /// Creates a new XLSX workbook.
    ///
    pub fn new() -> anyhow::Result<Self> {
        let commit_header = ("Commit", 12);
        let date_header = ("Date", 28);

        let history_worksheet = Worksheet::new(
            Self::HISTORY_WORKSHEET_NAME,
            vec![commit_header, date_header],
        )?;
        Ok(Self { history_worksheet })
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.history_worksheet.into_inner());
        workbook
    }
}

impl TryFrom<&Selection<'_>> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(selection: &Selection<'_>) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new()?;

        let mut last_record_index = None;
        for Row {
            record_index,
            commit,
            date,
            bench,
            ..
        } in selection.rows().into_iter()
        {
            if last_record_index != Some(record_index) {
                let short_commit: String = commit.chars().take(Commit::SHORT_ID_LENGTH).collect();
                xlsx.history_worksheet.write_record_header(
                    record_index,
                    short_commit.as_str(),
                    time::format_millis(date).as_str(),
                )?;
                last_record_index = Some(record_index);
            }
            let column = xlsx
                .history_worksheet
                .bench_column(bench.name.as_str(), bench.unit.as_str())?;
            xlsx.history_worksheet
                .write_value(record_index, column, bench.value)?;
        }

        Ok(xlsx)
    }
}
