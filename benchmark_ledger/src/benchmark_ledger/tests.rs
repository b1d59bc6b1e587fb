//!
//! Tests for the benchmark ledger binary.
//!

#![cfg(test)]

use std::path::Path;
use std::path::PathBuf;

const COMMIT: &str = r#"{
    "author": { "email": "dev@example.com", "name": "Dev", "username": "dev" },
    "committer": { "email": "dev@example.com", "name": "Dev", "username": "dev" },
    "distinct": true,
    "id": "ID",
    "message": "Speed up the parser",
    "timestamp": "2024-05-01T10:00:00Z",
    "tree_id": "0000000000000000000000000000000000000000",
    "url": "https://github.com/example/project/commit/ID"
}"#;

fn context(commit_id: &str, date: u64, repo_url: Option<&str>) -> benchmark_ledger::RunContext {
    let commit: benchmark_ledger::Commit =
        serde_json::from_str(COMMIT.replace("ID", commit_id).as_str()).expect("Always valid");
    benchmark_ledger::RunContext {
        repo_url: repo_url.map(str::to_owned),
        suite: "Parser".to_owned(),
        tool: benchmark_ledger::Tool::Cargo,
        commit,
        date,
    }
}

fn report(directory: &Path, name: &str, nanoseconds: &str) -> PathBuf {
    let path = directory.join(name);
    let text = format!(
        "running 2 tests\n\
         test parse_small ... bench:       {nanoseconds} ns/iter (+/- 12)\n\
         test parse_large ... bench:      10,000 ns/iter (+/- 1,200)\n\
         \n\
         test result: ok. 0 passed; 0 failed; 0 ignored; 2 measured\n"
    );
    std::fs::write(path.as_path(), text).expect("Always valid");
    path
}

#[test]
fn append_creates_and_extends_ledger() {
    let directory = tempfile::tempdir().expect("Always valid");
    let ledger_path = directory.path().join("data.js");
    let repo_url = Some("https://github.com/example/project");

    let first = report(directory.path(), "first.txt", "135");
    super::append(
        ledger_path.as_path(),
        vec![first],
        context("aaaaaaaa", 1714557600000, repo_url),
        true,
    )
    .expect("Always valid");
    let created = std::fs::read_to_string(ledger_path.as_path()).expect("Always valid");
    assert!(created.starts_with("window.BENCHMARK_DATA = {\n  \"lastUpdate\": 1714557600000,"));

    let second = report(directory.path(), "second.txt", "120");
    super::append(
        ledger_path.as_path(),
        vec![second],
        context("bbbbbbbb", 1714644000000, None),
        true,
    )
    .expect("Always valid");

    let suite_run = benchmark_ledger::codec::read(ledger_path.as_path()).expect("Always valid");
    assert_eq!(suite_run.last_update, 1714644000000);
    assert_eq!(suite_run.repo_url, "https://github.com/example/project");
    let records = suite_run.suite("Parser").expect("Always exists");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].commit.id, "aaaaaaaa");
    assert_eq!(records[1].tool, "cargo");
    let bench = records[1].bench("parse_small").expect("Always exists");
    assert_eq!(bench.value, 120.0);
    assert_eq!(bench.unit, "ns/iter");
    assert_eq!(bench.range.as_deref(), Some("± 12"));

    super::check(
        ledger_path.as_path(),
        benchmark_ledger::Strictness::Strict,
        true,
    )
    .expect("Always valid");
}

#[test]
fn append_keeps_ledger_on_rejection() {
    let directory = tempfile::tempdir().expect("Always valid");
    let ledger_path = directory.path().join("data.js");
    let repo_url = Some("https://github.com/example/project");

    let first = report(directory.path(), "first.txt", "135");
    super::append(
        ledger_path.as_path(),
        vec![first],
        context("aaaaaaaa", 1714644000000, repo_url),
        true,
    )
    .expect("Always valid");
    let before = std::fs::read_to_string(ledger_path.as_path()).expect("Always valid");

    let older = report(directory.path(), "older.txt", "120");
    let result = super::append(
        ledger_path.as_path(),
        vec![older],
        context("bbbbbbbb", 1714557600000, repo_url),
        true,
    );
    assert!(result.is_err());

    let after = std::fs::read_to_string(ledger_path.as_path()).expect("Always valid");
    assert_eq!(before, after);
}

#[test]
fn append_requires_repo_url_for_new_ledger() {
    let directory = tempfile::tempdir().expect("Always valid");
    let ledger_path = directory.path().join("data.js");

    let first = report(directory.path(), "first.txt", "135");
    let result = super::append(
        ledger_path.as_path(),
        vec![first],
        context("aaaaaaaa", 1714557600000, None),
        true,
    );
    assert!(result.is_err());
    assert!(!ledger_path.exists());
}

#[test]
fn check_reports_stale_last_update() {
    let directory = tempfile::tempdir().expect("Always valid");
    let ledger_path = directory.path().join("data.js");
    std::fs::write(
        ledger_path.as_path(),
        format!(
            r#"window.BENCHMARK_DATA = {{
  "lastUpdate": 5,
  "repoUrl": "https://github.com/example/project",
  "entries": {{
    "Parser": [
      {{
        "commit": {},
        "date": 4,
        "tool": "cargo",
        "benches": [
          {{ "name": "parse_small", "value": 135, "unit": "ns/iter" }}
        ]
      }}
    ]
  }}
}}"#,
            COMMIT.replace("ID", "aaaaaaaa")
        ),
    )
    .expect("Always valid");

    assert!(super::check(
        ledger_path.as_path(),
        benchmark_ledger::Strictness::Lenient,
        true
    )
    .is_ok());
    assert!(super::check(
        ledger_path.as_path(),
        benchmark_ledger::Strictness::Strict,
        true
    )
    .is_err());
}

#[test]
fn query_writes_bench_series() {
    let directory = tempfile::tempdir().expect("Always valid");
    let ledger_path = directory.path().join("data.js");
    let repo_url = Some("https://github.com/example/project");

    for (index, (commit_id, date)) in [("aaaaaaaa", 1714557600000), ("bbbbbbbb", 1714644000000)]
        .into_iter()
        .enumerate()
    {
        let input = report(directory.path(), format!("{index}.txt").as_str(), "135");
        super::append(
            ledger_path.as_path(),
            vec![input],
            context(commit_id, date, repo_url),
            true,
        )
        .expect("Always valid");
    }

    let output_path = directory.path().join("series.json");
    super::query(
        ledger_path.as_path(),
        "Parser",
        Some("parse_large"),
        benchmark_ledger::OutputFormat::Json,
        Some(output_path.clone()),
    )
    .expect("Always valid");
    let text = std::fs::read_to_string(output_path.as_path()).expect("Always valid");
    let points: serde_json::Value = serde_json::from_str(text.as_str()).expect("Always valid");
    let points = points.as_array().expect("Always an array");
    assert_eq!(points.len(), 2);
    assert_eq!(points[1]["commit"], "bbbbbbbb");
    assert_eq!(points[1]["value"], 10000);
    assert_eq!(points[1]["range"], "± 1200");

    assert!(super::query(
        ledger_path.as_path(),
        "Parser",
        Some("parse_missing"),
        benchmark_ledger::OutputFormat::Json,
        None,
    )
    .is_err());
}
