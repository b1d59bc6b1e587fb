//!
//! Custom JSON bench case array.
//!

use crate::model::suite_run::record::bench_case::BenchCase;

///
/// Custom JSON bench case array, for harnesses without a dedicated converter.
///
/// ```text
/// [ { "name": "My Bench", "unit": "ms", "value": 12.5, "range": "3", "extra": "..." } ]
/// ```
///
#[derive(Debug, serde::Deserialize)]
#[serde(transparent)]
pub struct CustomReport(pub Vec<BenchCase>);

impl From<CustomReport> for Vec<BenchCase> {
    fn from(report: CustomReport) -> Self {
        report.0
    }
}
