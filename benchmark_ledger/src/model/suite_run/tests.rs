//!
//! Tests for the benchmark history ledger.
//!

use pretty_assertions::assert_eq;

use crate::model::suite_run::append_error::AppendError;
use crate::model::suite_run::violation::Strictness;
use crate::model::suite_run::violation::Violation;
use crate::model::suite_run::BenchmarkSuiteRun;
use crate::test_data;

fn ledger() -> BenchmarkSuiteRun {
    let mut ledger = BenchmarkSuiteRun::new("https://example.com/repo".to_owned());
    ledger
        .append("suite-a", test_data::record("aaa", 1_000, &[("x", 1.0), ("y", 2.0)]))
        .expect("Always valid");
    ledger
        .append("suite-b", test_data::record("bbb", 2_000, &[("x", 3.0)]))
        .expect("Always valid");
    ledger
}

#[test]
fn append_updates_last_update() {
    let mut ledger = ledger();
    assert_eq!(ledger.last_update, 2_000);

    ledger
        .append("suite-a", test_data::record("ccc", 1_500, &[("x", 1.1)]))
        .expect("Always valid");
    assert_eq!(ledger.last_update, 2_000);

    ledger
        .append("suite-a", test_data::record("ddd", 3_000, &[("x", 1.2)]))
        .expect("Always valid");
    assert_eq!(ledger.last_update, 3_000);
    assert!(ledger.validate(Strictness::Strict).is_empty());
}

#[test]
fn append_keeps_existing_records() {
    let mut ledger = ledger();
    let before = ledger.suite("suite-a").expect("Always exists").to_vec();

    ledger
        .append("suite-a", test_data::record("ccc", 1_000, &[("x", 1.1)]))
        .expect("Equal dates are allowed");

    let after = ledger.suite("suite-a").expect("Always exists");
    assert_eq!(after.len(), 3);
    assert_eq!(&after[..2], before.as_slice());
    assert_eq!(after[2].commit.id, "ccc");
}

#[test]
fn append_creates_suite_at_end() {
    let mut ledger = ledger();
    ledger
        .append("suite-0", test_data::record("ccc", 2_500, &[("x", 1.0)]))
        .expect("Always valid");

    let names: Vec<&str> = ledger.suite_names().collect();
    assert_eq!(names, vec!["suite-a", "suite-b", "suite-0"]);
}

#[test]
fn append_rejects_out_of_order() {
    let mut ledger = ledger();
    let before = ledger.clone();

    let error = ledger
        .append("suite-b", test_data::record("ccc", 1_999, &[("x", 1.0)]))
        .expect_err("Older record must be rejected");
    assert_eq!(
        error,
        AppendError::OutOfOrder {
            suite: "suite-b".to_owned(),
            date: 1_999,
            latest: 2_000,
        }
    );
    assert_eq!(ledger, before);
}

#[test]
fn append_rejects_duplicate_bench() {
    let mut ledger = ledger();
    let error = ledger
        .append(
            "suite-a",
            test_data::record("ccc", 5_000, &[("x", 1.0), ("x", 2.0)]),
        )
        .expect_err("Duplicate bench must be rejected");
    assert_eq!(
        error,
        AppendError::DuplicateBench {
            name: "x".to_owned()
        }
    );
    assert_eq!(ledger.suite("suite-a").map(|records| records.len()), Some(1));
}

#[test]
fn append_rejects_invalid_values() {
    let mut ledger = ledger();
    for value in [-1.0, f64::INFINITY, f64::NAN] {
        let error = ledger
            .append("suite-a", test_data::record("ccc", 5_000, &[("x", value)]))
            .expect_err("Invalid value must be rejected");
        assert!(matches!(error, AppendError::InvalidValue { .. }));
    }
    assert_eq!(ledger.last_update, 2_000);
}

#[test]
fn append_rejects_empty_record() {
    let mut ledger = ledger();
    let error = ledger
        .append("suite-a", test_data::record("ccc", 5_000, &[]))
        .expect_err("Empty record must be rejected");
    assert!(matches!(error, AppendError::EmptyRecord { .. }));
}

#[test]
fn query_returns_stored_order() {
    let ledger = ledger();
    let records = ledger.suite("suite-a").expect("Always exists");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].commit.id, "aaa");
    assert!(ledger.suite("missing").is_none());
}

#[test]
fn find_by_commit() {
    let mut ledger = ledger();
    ledger
        .append("suite-b", test_data::record("aaa", 2_000, &[("z", 1.0)]))
        .expect("Always valid");

    let found: Vec<&str> = ledger
        .find_by_commit("aaa")
        .into_iter()
        .map(|(suite, _)| suite)
        .collect();
    assert_eq!(found, vec!["suite-a", "suite-b"]);
    assert!(ledger.find_by_commit("zzz").is_empty());
}

#[test]
fn series_skips_records_without_bench() {
    let mut ledger = ledger();
    ledger
        .append("suite-a", test_data::record("ccc", 3_000, &[("x", 1.5)]))
        .expect("Always valid");
    ledger
        .append("suite-a", test_data::record("ddd", 4_000, &[("x", 1.7), ("y", 2.2)]))
        .expect("Always valid");

    let series = ledger.series("suite-a", "y").expect("Always exists");
    let points: Vec<(u64, &str, f64)> = series
        .iter()
        .map(|point| (point.date, point.commit, point.bench.value))
        .collect();
    assert_eq!(points, vec![(1_000, "aaa", 2.0), (4_000, "ddd", 2.2)]);
}

#[test]
fn validate_reports_every_violation() {
    let mut text = serde_json::to_value(ledger()).expect("Always valid");
    text["lastUpdate"] = 10.into();
    text["entries"]["suite-a"][0]["benches"][1]["name"] = "x".into();
    text["entries"]["suite-b"][0]["benches"][0]["value"] = (-2.0).into();
    let ledger: BenchmarkSuiteRun = serde_json::from_value(text).expect("Always valid");

    let violations = ledger.validate(Strictness::Lenient);
    assert_eq!(
        violations,
        vec![
            Violation::DuplicateBench {
                suite: "suite-a".to_owned(),
                index: 0,
                name: "x".to_owned(),
            },
            Violation::InvalidValue {
                suite: "suite-b".to_owned(),
                index: 0,
                name: "x".to_owned(),
                value: -2.0,
            },
            Violation::LastUpdate {
                last_update: 10,
                newest: 2_000,
            },
        ]
    );
}

#[test]
fn validate_date_order() {
    let mut text = serde_json::to_value(ledger()).expect("Always valid");
    let second = test_data::record("ccc", 500, &[("x", 1.0)]);
    text["entries"]["suite-a"]
        .as_array_mut()
        .expect("Always an array")
        .push(serde_json::to_value(second).expect("Always valid"));
    let ledger: BenchmarkSuiteRun = serde_json::from_value(text).expect("Always valid");

    assert_eq!(
        ledger.validate(Strictness::Lenient),
        vec![Violation::DateOrder {
            suite: "suite-a".to_owned(),
            index: 1,
            date: 500,
            previous: 1_000,
        }]
    );
}

#[test]
fn validate_strictness() {
    let mut ledger = ledger();
    ledger.last_update = 2_500;
    assert!(ledger.validate(Strictness::Lenient).is_empty());
    assert_eq!(
        ledger.validate(Strictness::Strict),
        vec![Violation::LastUpdate {
            last_update: 2_500,
            newest: 2_000,
        }]
    );
}

#[test]
fn deserialize_rejects_duplicate_suite() {
    let text = r#"{ "lastUpdate": 0, "repoUrl": "r", "entries": { "a": [], "a": [] } }"#;
    let error = serde_json::from_str::<BenchmarkSuiteRun>(text)
        .expect_err("Duplicate suite must be rejected");
    assert!(error.to_string().contains("duplicate suite `a`"));
}

#[test]
fn commit_passthrough_keys() {
    let text = r#"{
        "author": { "email": "a@b", "name": "A" },
        "committer": { "email": "a@b", "name": "A" },
        "id": "0123456789",
        "message": "First line\n\nBody",
        "url": "u",
        "signature": "sig"
    }"#;
    let commit: crate::Commit = serde_json::from_str(text).expect("Always valid");
    assert_eq!(commit.short_id(), "0123456");
    assert_eq!(commit.summary(), "First line");
    assert_eq!(commit.other.get("signature"), Some(&"sig".into()));

    let value = serde_json::to_value(&commit).expect("Always valid");
    assert_eq!(value["signature"], "sig");
    assert!(value.get("distinct").is_none());
    assert!(value["author"].get("username").is_none());
}
