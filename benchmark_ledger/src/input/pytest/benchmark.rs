//!
//! One `pytest-benchmark` result.
//!

///
/// One `pytest-benchmark` result.
///
#[derive(Debug, serde::Deserialize)]
pub struct Benchmark {
    /// The test node identifier, e.g. `tests/test_x.py::test_y`.
    pub fullname: String,
    /// Timing statistics.
    pub stats: Stats,
}

///
/// `pytest-benchmark` timing statistics, in seconds.
///
#[derive(Debug, serde::Deserialize)]
pub struct Stats {
    /// Mean round time.
    pub mean: f64,
    /// Round time standard deviation.
    pub stddev: f64,
    /// Number of rounds.
    pub rounds: u64,
    /// Operations per second.
    pub ops: f64,
}
