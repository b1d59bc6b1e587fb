//!
//! `cargo bench` libtest output.
//!

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::suite_run::record::bench_case::BenchCase;

/// A libtest bench line, e.g. `test fib_10 ... bench:         135 ns/iter (+/- 24)`.
static BENCH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^test (.+)\s+\.\.\. bench:\s+([0-9,.]+) (\w+/\w+) \(\+/- ([0-9,.]+)\)$")
        .expect("Always valid")
});

///
/// Parses the bench lines of `cargo bench` output and ignores everything else.
///
pub fn parse(text: &str) -> Vec<BenchCase> {
    text.lines()
        .filter_map(|line| {
            let captures = BENCH_LINE.captures(line.trim_end())?;
            let value = captures[2].replace(',', "").parse::<f64>().ok()?;
            let range = captures[4].replace(',', "");
            Some(
                BenchCase::new(
                    captures[1].trim().to_owned(),
                    value,
                    captures[3].to_owned(),
                )
                .with_range(format!("± {range}")),
            )
        })
        .collect()
}
