//!
//! A single bench tracked across the records of a suite.
//!

use super::record::bench_case::BenchCase;
use super::record::BenchmarkRecord;

///
/// One point of a bench history.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Point<'a> {
    /// The record capture date.
    pub date: u64,
    /// The measured commit hash.
    pub commit: &'a str,
    /// The benchmarking harness.
    pub tool: &'a str,
    /// The measurement.
    #[serde(flatten)]
    pub bench: &'a BenchCase,
}

///
/// Collects the history of a bench, skipping records that did not measure it.
///
pub fn collect<'a>(records: &'a [BenchmarkRecord], name: &str) -> Vec<Point<'a>> {
    records
        .iter()
        .filter_map(|record| {
            record.bench(name).map(|bench| Point {
                date: record.date,
                commit: record.commit.id.as_str(),
                tool: record.tool.as_str(),
                bench,
            })
        })
        .collect()
}
