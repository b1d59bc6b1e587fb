//!
//! One CI run's measurements at one commit.
//!

pub mod bench_case;
pub mod commit;

use std::collections::HashSet;

use self::bench_case::BenchCase;
use self::commit::Commit;

///
/// One CI run's measurements at one commit.
///
/// Created once when the run completes and never changed afterwards.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkRecord {
    /// The measured commit.
    pub commit: Commit,
    /// The capture time in milliseconds since the Unix epoch.
    pub date: u64,
    /// The benchmarking harness that produced the measurements.
    pub tool: String,
    /// The measurements, in harness output order.
    pub benches: Vec<BenchCase>,
}

impl BenchmarkRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: u64, tool: String, benches: Vec<BenchCase>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
        }
    }

    ///
    /// Returns the measurement with the given name.
    ///
    pub fn bench(&self, name: &str) -> Option<&BenchCase> {
        self.benches.iter().find(|bench| bench.name == name)
    }

    ///
    /// Returns the names that occur more than once, each reported once.
    ///
    pub fn duplicate_bench_names(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.benches.len());
        let mut duplicates = Vec::new();
        for bench in self.benches.iter() {
            if !seen.insert(bench.name.as_str()) && !duplicates.contains(&bench.name.as_str()) {
                duplicates.push(bench.name.as_str());
            }
        }
        duplicates
    }

    ///
    /// Returns the measurements whose value is negative or not finite.
    ///
    pub fn invalid_benches(&self) -> impl Iterator<Item = &BenchCase> {
        self.benches.iter().filter(|bench| !bench.has_valid_value())
    }
}
