//!
//! Shared test fixtures.
//!

#![cfg(test)]

use crate::model::suite_run::record::bench_case::BenchCase;
use crate::model::suite_run::record::commit::identity::Identity;
use crate::model::suite_run::record::commit::Commit;
use crate::model::suite_run::record::BenchmarkRecord;
use crate::model::suite_run::BenchmarkSuiteRun;

/// The suite stored in [`DATA_JS`].
pub const PROPAGATOR_SUITE: &str = "OpenTelemetry Python Benchmarks - Python 3.7 - propagator";

/// The single-header extraction bench stored in [`DATA_JS`].
pub const EXTRACT_BENCH: &str = "propagator/opentelemetry-propagator-b3/tests/performance/benchmarks/trace/propagation/test_benchmark_b3_format.py::test_extract_single_header";

/// A ledger file as written by the CI action, unchanged.
pub const DATA_JS: &str = r#"window.BENCHMARK_DATA = {
  "lastUpdate": 1612141895473,
  "repoUrl": "https://github.com/owais/opentelemetry-python",
  "entries": {
    "OpenTelemetry Python Benchmarks - Python 3.7 - propagator": [
      {
        "commit": {
          "author": {
            "email": "enowell@amazon.com",
            "name": "(Eliseo) Nathaniel Ruiz Nowell",
            "username": "NathanielRN"
          },
          "committer": {
            "email": "noreply@github.com",
            "name": "GitHub",
            "username": "web-flow"
          },
          "distinct": true,
          "id": "5bc23b0b027208e45c80f04ab6d983a9803607b5",
          "message": "Add resource usage performance tests for creating a span (#1499)",
          "timestamp": "2021-01-31T10:01:13-08:00",
          "tree_id": "c5f78b0abff1aeb01ed325b19c1c8d54e441b18d",
          "url": "https://github.com/owais/opentelemetry-python/commit/5bc23b0b027208e45c80f04ab6d983a9803607b5"
        },
        "date": 1612141894037,
        "tool": "pytest",
        "benches": [
          {
            "name": "propagator/opentelemetry-propagator-b3/tests/performance/benchmarks/trace/propagation/test_benchmark_b3_format.py::test_extract_single_header",
            "value": 70589.7299227533,
            "unit": "iter/sec",
            "range": "stddev: 0.000009801025607542125",
            "extra": "mean: 14.166366709354254 usec\nrounds: 10627"
          },
          {
            "name": "propagator/opentelemetry-propagator-b3/tests/performance/benchmarks/trace/propagation/test_benchmark_b3_format.py::test_inject_empty_context",
            "value": 148393.98178117684,
            "unit": "iter/sec",
            "range": "stddev: 0.000011218894452949438",
            "extra": "mean: 6.738817760646178 usec\nrounds: 67115"
          }
        ]
      }
    ]
  }
}"#;

/// The commit of the record appended by [`with_rerun`].
pub const RERUN_COMMIT: &str = "9f1e0b92a5bd8b0d3d4c0e1a7c5d2e3f4a5b6c7d";

///
/// Returns a commit with the given hash.
///
pub fn commit(id: &str) -> Commit {
    let identity = Identity::new(
        "dev@example.com".to_owned(),
        "Developer".to_owned(),
        Some("developer".to_owned()),
    );
    Commit {
        author: identity.clone(),
        committer: identity,
        distinct: Some(true),
        id: id.to_owned(),
        message: format!("Commit {id}"),
        timestamp: Some("2021-02-01T10:00:00Z".to_owned()),
        tree_id: None,
        url: format!("https://example.com/commit/{id}"),
        other: serde_json::Map::new(),
    }
}

///
/// Returns a record with one `iter/sec` bench per `(name, value)` pair.
///
pub fn record(commit_id: &str, date: u64, benches: &[(&str, f64)]) -> BenchmarkRecord {
    BenchmarkRecord::new(
        commit(commit_id),
        date,
        "pytest".to_owned(),
        benches
            .iter()
            .map(|(name, value)| BenchCase::new(name.to_string(), *value, "iter/sec".to_owned()))
            .collect(),
    )
}

///
/// Returns [`DATA_JS`] with a re-run of the extraction bench appended.
///
pub fn with_rerun() -> BenchmarkSuiteRun {
    let mut suite_run =
        crate::codec::decode(DATA_JS, crate::codec::form::Form::Script).expect("Always valid");
    suite_run
        .append(
            PROPAGATOR_SUITE,
            record(
                RERUN_COMMIT,
                1612141895100,
                &[(EXTRACT_BENCH, 70589.7299227533)],
            ),
        )
        .expect("Always valid");
    suite_run
}
