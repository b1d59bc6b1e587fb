//!
//! The benchmark history ledger.
//!

pub mod append_error;
pub mod entries;
pub mod record;
pub mod series;
pub mod violation;

#[cfg(test)]
mod tests;

use self::append_error::AppendError;
use self::entries::Entries;
use self::record::BenchmarkRecord;
use self::series::Point;
use self::violation::Strictness;
use self::violation::Violation;

///
/// The benchmark history ledger.
///
/// Suites are append-only: records are added to the tail of one suite and
/// never changed or removed. The whole ledger is re-serialized on each append.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkSuiteRun {
    /// The newest record date in milliseconds since the Unix epoch.
    #[serde(rename = "lastUpdate")]
    pub last_update: u64,
    /// The source repository identifier.
    #[serde(rename = "repoUrl")]
    pub repo_url: String,
    /// The record sequences by suite name, oldest record first.
    entries: Entries,
}

impl BenchmarkSuiteRun {
    ///
    /// Creates an empty ledger.
    ///
    pub fn new(repo_url: String) -> Self {
        Self {
            last_update: 0,
            repo_url,
            entries: Entries::default(),
        }
    }

    ///
    /// Returns the records of a suite in stored order.
    ///
    pub fn suite(&self, name: &str) -> Option<&[BenchmarkRecord]> {
        self.entries.get(name)
    }

    ///
    /// Returns the suite names in stored order.
    ///
    pub fn suite_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name)
    }

    ///
    /// Returns all suites in stored order.
    ///
    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    ///
    /// Returns the newest record date across all suites.
    ///
    pub fn newest_date(&self) -> Option<u64> {
        self.entries
            .iter()
            .flat_map(|(_, records)| records.iter().map(|record| record.date))
            .max()
    }

    ///
    /// Appends a record to the tail of a suite, creating the suite if needed.
    ///
    /// # Errors
    ///
    /// 1. The record has no benches.
    /// 2. The record is older than the latest record of the suite.
    /// 3. A bench name is used twice.
    /// 4. A value is negative or not finite.
    ///
    pub fn append(&mut self, suite: &str, record: BenchmarkRecord) -> Result<(), AppendError> {
        if record.benches.is_empty() {
            return Err(AppendError::EmptyRecord {
                suite: suite.to_owned(),
            });
        }
        if let Some(latest) = self
            .suite(suite)
            .and_then(|records| records.last())
            .map(|record| record.date)
        {
            if record.date < latest {
                return Err(AppendError::OutOfOrder {
                    suite: suite.to_owned(),
                    date: record.date,
                    latest,
                });
            }
        }
        if let Some(name) = record.duplicate_bench_names().first() {
            return Err(AppendError::DuplicateBench {
                name: name.to_string(),
            });
        }
        if let Some(bench) = record.invalid_benches().next() {
            return Err(AppendError::InvalidValue {
                name: bench.name.clone(),
                value: bench.value,
            });
        }

        log::debug!(
            "Appending {} benches at commit {} to suite `{suite}`",
            record.benches.len(),
            record.commit.short_id(),
        );
        self.entries.get_or_insert(suite).push(record);
        self.last_update = self.newest_date().unwrap_or_default();
        Ok(())
    }

    ///
    /// Returns every record measured at the given commit, with its suite name.
    ///
    pub fn find_by_commit(&self, commit_id: &str) -> Vec<(&str, &BenchmarkRecord)> {
        self.entries
            .iter()
            .flat_map(|(suite, records)| {
                records
                    .iter()
                    .filter(move |record| record.commit.id == commit_id)
                    .map(move |record| (suite, record))
            })
            .collect()
    }

    ///
    /// Returns the history of one bench within a suite.
    ///
    pub fn series(&self, suite: &str, bench: &str) -> Option<Vec<Point<'_>>> {
        self.suite(suite)
            .map(|records| self::series::collect(records, bench))
    }

    ///
    /// Checks the ledger invariants and returns every violation found.
    ///
    pub fn validate(&self, strictness: Strictness) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (suite, records) in self.entries.iter() {
            for (index, record) in records.iter().enumerate() {
                if let Some(previous) = index.checked_sub(1).map(|index| &records[index]) {
                    if record.date < previous.date {
                        violations.push(Violation::DateOrder {
                            suite: suite.to_owned(),
                            index,
                            date: record.date,
                            previous: previous.date,
                        });
                    }
                }
                for name in record.duplicate_bench_names() {
                    violations.push(Violation::DuplicateBench {
                        suite: suite.to_owned(),
                        index,
                        name: name.to_owned(),
                    });
                }
                for bench in record.invalid_benches() {
                    violations.push(Violation::InvalidValue {
                        suite: suite.to_owned(),
                        index,
                        name: bench.name.clone(),
                        value: bench.value,
                    });
                }
            }
        }

        if let Some(newest) = self.newest_date() {
            let is_valid = match strictness {
                Strictness::Lenient => self.last_update >= newest,
                Strictness::Strict => self.last_update == newest,
            };
            if !is_valid {
                violations.push(Violation::LastUpdate {
                    last_update: self.last_update,
                    newest,
                });
            }
        }

        violations
    }
}
