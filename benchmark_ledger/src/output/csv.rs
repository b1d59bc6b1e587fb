//!
//! Serializing ledger selections to CSV.
//!

use std::fmt::Write;

use crate::output::selection::Row;
use crate::output::selection::Selection;
use crate::util::number;

///
/// Serialize the selection to CSV in the following format:
/// "suite", "commit", "date", "tool", "name", "value", "unit", "range", "extra"
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The header line.
    pub const HEADER: &'static str =
        r#""suite","commit","date","tool","name","value","unit","range","extra""#;

    ///
    /// Estimate the length of a CSV line based on the expected maximum lengths of each field.
    ///
    fn estimate_csv_line_length() -> usize {
        let suite_name_estimated_max = 60;
        let commit_estimated_max = 40;
        let number_fields = 2;
        let number_field_estimated_max_length = 20;
        let test_name_estimated_max = 150;
        let annotations_estimated_max = 80;
        suite_name_estimated_max
            + commit_estimated_max
            + number_fields * number_field_estimated_max_length
            + test_name_estimated_max
            + annotations_estimated_max
    }

    ///
    /// Quotes a field, doubling embedded quotes.
    ///
    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }
}

impl From<&Selection<'_>> for Csv {
    fn from(selection: &Selection<'_>) -> Csv {
        let rows = selection.rows();
        let suite = Self::quote(selection.suite());

        let mut content = String::with_capacity((rows.len() + 1) * Self::estimate_csv_line_length());
        content.push_str(Self::HEADER);
        content.push('\n');

        for Row {
            commit,
            date,
            tool,
            bench,
            ..
        } in rows.into_iter()
        {
            writeln!(
                &mut content,
                "{suite},{},{date},{},{},{},{},{},{}",
                Self::quote(commit),
                Self::quote(tool),
                Self::quote(bench.name.as_str()),
                number::format(bench.value),
                Self::quote(bench.unit.as_str()),
                Self::quote(bench.range.as_deref().unwrap_or_default()),
                Self::quote(bench.extra.as_deref().unwrap_or_default()),
            )
            .expect("Always valid");
        }

        Self { content }
    }
}
