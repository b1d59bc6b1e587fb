//!
//! Ledger invariant violations.
//!

///
/// How strictly `lastUpdate` is checked.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// `lastUpdate` may be later than the newest record date.
    /// Files written by the CI action stamp it at write time.
    #[default]
    Lenient,
    /// `lastUpdate` must equal the newest record date.
    Strict,
}

///
/// A ledger invariant violation.
///
/// `index` is the position of the offending record within its suite.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    /// A record is older than its predecessor in the same suite.
    #[error("Suite `{suite}` record #{index}: date {date} precedes the previous date {previous}")]
    DateOrder {
        /// The suite name.
        suite: String,
        /// The record position.
        index: usize,
        /// The record date.
        date: u64,
        /// The previous record date.
        previous: u64,
    },
    /// `lastUpdate` does not match the newest record date.
    #[error("`lastUpdate` {last_update} does not match the newest record date {newest}")]
    LastUpdate {
        /// The stored `lastUpdate`.
        last_update: u64,
        /// The newest record date across all suites.
        newest: u64,
    },
    /// A bench name occurs twice within one record.
    #[error("Suite `{suite}` record #{index}: bench `{name}` appears more than once")]
    DuplicateBench {
        /// The suite name.
        suite: String,
        /// The record position.
        index: usize,
        /// The duplicated name.
        name: String,
    },
    /// A measurement is negative or not finite.
    #[error("Suite `{suite}` record #{index}: bench `{name}` has an invalid value {value}")]
    InvalidValue {
        /// The suite name.
        suite: String,
        /// The record position.
        index: usize,
        /// The bench name.
        name: String,
        /// The offending value.
        value: f64,
    },
}
