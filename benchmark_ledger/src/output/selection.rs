//!
//! The part of a ledger selected for output.
//!

use crate::model::suite_run::record::bench_case::BenchCase;
use crate::model::suite_run::record::BenchmarkRecord;
use crate::model::suite_run::series::Point;

///
/// The part of a ledger selected for output.
///
#[derive(Debug, Clone)]
pub enum Selection<'a> {
    /// Every record of a suite.
    Suite {
        /// The suite name.
        suite: &'a str,
        /// The records in stored order.
        records: &'a [BenchmarkRecord],
    },
    /// One bench across the records of a suite.
    Series {
        /// The suite name.
        suite: &'a str,
        /// The history points in stored order.
        points: Vec<Point<'a>>,
    },
}

///
/// One measurement with the record it belongs to, flattened for tabular output.
///
#[derive(Debug, Clone)]
pub struct Row<'a> {
    /// The position of the record in the selection.
    pub record_index: usize,
    /// The measured commit hash.
    pub commit: &'a str,
    /// The capture date in milliseconds since the Unix epoch.
    pub date: u64,
    /// The benchmarking harness.
    pub tool: &'a str,
    /// The measurement.
    pub bench: &'a BenchCase,
}

impl<'a> Selection<'a> {
    ///
    /// Returns the selected suite name.
    ///
    pub fn suite(&self) -> &'a str {
        match self {
            Self::Suite { suite, .. } | Self::Series { suite, .. } => *suite,
        }
    }

    ///
    /// Flattens the selection into rows, one per measurement.
    ///
    pub fn rows(&self) -> Vec<Row<'a>> {
        match self {
            Self::Suite { records, .. } => (*records)
                .iter()
                .enumerate()
                .flat_map(|(record_index, record)| {
                    record.benches.iter().map(move |bench| Row {
                        record_index,
                        commit: record.commit.id.as_str(),
                        date: record.date,
                        tool: record.tool.as_str(),
                        bench,
                    })
                })
                .collect(),
            Self::Series { points, .. } => points
                .iter()
                .enumerate()
                .map(|(record_index, point)| Row {
                    record_index,
                    commit: point.commit,
                    date: point.date,
                    tool: point.tool,
                    bench: point.bench,
                })
                .collect(),
        }
    }

    ///
    /// Serializes the selection to pretty JSON in the ledger's own shape.
    ///
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Suite { records, .. } => serde_json::to_string_pretty(records),
            Self::Series { points, .. } => serde_json::to_string_pretty(points),
        }
    }
}
