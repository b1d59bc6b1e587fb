//!
//! Benchmark record append error.
//!

///
/// Benchmark record append error.
///
/// A rejected append leaves the ledger unchanged.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppendError {
    /// The record has no measurements.
    #[error("Record for suite `{suite}` has no benches")]
    EmptyRecord {
        /// The target suite.
        suite: String,
    },
    /// The record is older than the latest record of the suite.
    #[error("Record date {date} for suite `{suite}` precedes the latest record date {latest}")]
    OutOfOrder {
        /// The target suite.
        suite: String,
        /// The rejected record date.
        date: u64,
        /// The latest stored record date.
        latest: u64,
    },
    /// The same bench name appears twice in the record.
    #[error("Bench `{name}` appears more than once in the record")]
    DuplicateBench {
        /// The duplicated name.
        name: String,
    },
    /// A measurement is negative or not finite.
    #[error("Bench `{name}` has an invalid value {value}")]
    InvalidValue {
        /// The bench name.
        name: String,
        /// The rejected value.
        value: f64,
    },
}
