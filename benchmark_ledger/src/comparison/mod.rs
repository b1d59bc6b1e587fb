//!
//! The latest record of a suite compared to its predecessor.
//!

pub mod change;

use std::io::Write;

use colored::Colorize;

use crate::input::tool::Tool;
use crate::model::suite_run::record::BenchmarkRecord;

use self::change::Change;

///
/// The latest record of a suite compared to its predecessor.
///
/// Informational only: nothing here fails a run.
///
#[derive(Debug)]
pub struct Comparison<'a> {
    /// The suite name.
    pub suite: &'a str,
    /// The predecessor record.
    pub previous: &'a BenchmarkRecord,
    /// The latest record.
    pub current: &'a BenchmarkRecord,
    /// Whether a larger value is an improvement.
    pub is_bigger_better: bool,
    /// Changes of benches present in both records, in current record order.
    pub changes: Vec<Change<'a>>,
    /// Benches only present in the current record.
    pub added: Vec<&'a str>,
}

impl<'a> Comparison<'a> {
    /// The width of the bench name column.
    const NAME_WIDTH: usize = 60;

    ///
    /// Compares the last two records of a suite. Returns `None` if there are fewer than two.
    ///
    pub fn latest(suite: &'a str, records: &'a [BenchmarkRecord]) -> Option<Self> {
        let [.., previous, current] = records else {
            return None;
        };

        let mut changes = Vec::with_capacity(current.benches.len());
        let mut added = Vec::new();
        for bench in current.benches.iter() {
            match previous.bench(bench.name.as_str()) {
                Some(previous_bench) => changes.push(Change {
                    name: bench.name.as_str(),
                    unit: bench.unit.as_str(),
                    previous: previous_bench.value,
                    current: bench.value,
                }),
                None => added.push(bench.name.as_str()),
            }
        }

        Some(Self {
            suite,
            previous,
            current,
            is_bigger_better: Tool::is_bigger_better_by_name(current.tool.as_str()),
            changes,
            added,
        })
    }

    ///
    /// Returns the number of regressed benches.
    ///
    pub fn regressions(&self) -> usize {
        self.changes
            .iter()
            .filter(|change| change.is_regression(self.is_bigger_better))
            .count()
    }

    ///
    /// Prints the comparison table.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: Write,
    {
        writeln!(
            w,
            "╔═╡ {} ╞{}╗",
            self.suite.bright_white(),
            "═".repeat((Self::NAME_WIDTH + 14).saturating_sub(self.suite.chars().count())),
        )?;
        writeln!(
            w,
            "║ {} {} → {} {}",
            "Commit".bright_white(),
            self.previous.commit.short_id(),
            self.current.commit.short_id(),
            self.current.commit.summary(),
        )?;
        for change in self.changes.iter() {
            let name = Self::shorten(change.name);
            let relative = match change.relative() {
                Some(relative) => format!("{:+8.3}%", relative * 100.0),
                None => format!("{:>9}", "n/a"),
            };
            let relative = if change.is_improvement(self.is_bigger_better) {
                relative.green()
            } else if change.is_regression(self.is_bigger_better) {
                relative.bright_red()
            } else {
                relative.white()
            };
            writeln!(
                w,
                "║ {name:width$} {relative} {} {}",
                crate::util::number::format(change.current),
                change.unit,
                width = Self::NAME_WIDTH,
            )?;
        }
        for name in self.added.iter() {
            writeln!(
                w,
                "║ {:width$} {}",
                Self::shorten(name),
                "new".bright_blue(),
                width = Self::NAME_WIDTH,
            )?;
        }
        writeln!(
            w,
            "╚═╡ {} {} ╞{}",
            self.regressions().to_string().bright_white(),
            "regression(s)".bright_white(),
            "═".repeat(Self::NAME_WIDTH),
        )?;

        Ok(())
    }

    ///
    /// Keeps the tail of long bench names, which holds the test case.
    ///
    fn shorten(name: &str) -> String {
        let length = name.chars().count();
        if length <= Self::NAME_WIDTH {
            return name.to_owned();
        }
        let tail: String = name.chars().skip(length - Self::NAME_WIDTH + 1).collect();
        format!("…{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::Comparison;
    use crate::test_data;

    #[test]
    fn latest() {
        let records = vec![
            test_data::record("aaa", 1, &[("x", 100.0), ("y", 10.0), ("gone", 1.0)]),
            test_data::record("bbb", 2, &[("x", 110.0), ("y", 5.0), ("z", 1.0)]),
        ];
        let comparison = Comparison::latest("suite", records.as_slice()).expect("Always exists");

        assert!(comparison.is_bigger_better);
        assert_eq!(comparison.changes.len(), 2);
        assert_eq!(comparison.changes[0].relative(), Some(0.1));
        assert!(comparison.changes[0].is_improvement(true));
        assert!(comparison.changes[1].is_regression(true));
        assert_eq!(comparison.added, vec!["z"]);
        assert_eq!(comparison.regressions(), 1);

        let mut buffer = Vec::new();
        comparison.write_all(&mut buffer).expect("Always valid");
        let text = String::from_utf8(buffer).expect("Always valid");
        assert!(text.contains("aaa → bbb"));
        assert!(text.contains("regression(s)"));
    }

    #[test]
    fn latest_needs_two_records() {
        let records = vec![test_data::record("aaa", 1, &[("x", 1.0)])];
        assert!(Comparison::latest("suite", records.as_slice()).is_none());
        assert!(Comparison::latest("suite", &[]).is_none());
    }

    #[test]
    fn smaller_is_better() {
        let mut records = vec![
            test_data::record("aaa", 1, &[("x", 100.0)]),
            test_data::record("bbb", 2, &[("x", 90.0)]),
        ];
        records[1].tool = "cargo".to_owned();
        let comparison = Comparison::latest("suite", records.as_slice()).expect("Always exists");
        assert!(!comparison.is_bigger_better);
        assert_eq!(comparison.regressions(), 0);
    }

    #[test]
    fn shorten() {
        let name = "a".repeat(100);
        let short = Comparison::shorten(name.as_str());
        assert_eq!(short.chars().count(), Comparison::NAME_WIDTH);
        assert!(short.starts_with('…'));
    }
}
