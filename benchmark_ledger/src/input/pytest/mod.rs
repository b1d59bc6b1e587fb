//!
//! `pytest-benchmark` JSON report.
//!

pub mod benchmark;

use crate::model::suite_run::record::bench_case::BenchCase;
use crate::util::number;

use self::benchmark::Benchmark;

///
/// `pytest-benchmark` JSON report, as written by `--benchmark-json`.
///
/// Machine and commit information in the report is ignored.
///
#[derive(Debug, serde::Deserialize)]
pub struct PytestReport {
    /// The benchmark results.
    pub benchmarks: Vec<Benchmark>,
}

impl PytestReport {
    /// The unit of `stats.ops`.
    pub const UNIT: &'static str = "iter/sec";

    ///
    /// Scales seconds to the largest unit that keeps the value at or above one.
    ///
    pub fn human_readable_time(seconds: f64) -> (f64, &'static str) {
        if seconds < 1.0e-6 {
            (seconds * 1.0e9, "nsec")
        } else if seconds < 1.0e-3 {
            (seconds * 1.0e6, "usec")
        } else if seconds < 1.0 {
            (seconds * 1.0e3, "msec")
        } else {
            (seconds, "sec")
        }
    }
}

impl From<PytestReport> for Vec<BenchCase> {
    fn from(report: PytestReport) -> Self {
        report
            .benchmarks
            .into_iter()
            .map(|benchmark| {
                let stats = benchmark.stats;
                let (mean, mean_unit) = PytestReport::human_readable_time(stats.mean);
                BenchCase::new(benchmark.fullname, stats.ops, PytestReport::UNIT.to_owned())
                    .with_range(format!("stddev: {}", number::format(stats.stddev)))
                    .with_extra(format!(
                        "mean: {} {mean_unit}\nrounds: {}",
                        number::format(mean),
                        stats.rounds
                    ))
            })
            .collect()
    }
}
