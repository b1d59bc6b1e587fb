//!
//! The benchmark ledger binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if arguments.quiet { "error" } else { "info" }),
    )
    .init();

    let ledger_path = arguments.data_file.as_path();
    match arguments.command {
        Command::Append {
            input_paths,
            context,
            suite,
            tool,
            commit_file,
            date,
            repo_url,
        } => {
            let mut run_context = match context {
                Some(path) => benchmark_ledger::Context::try_from_path(path.as_path())?,
                None => benchmark_ledger::Context::default(),
            };
            let commit = commit_file
                .as_deref()
                .map(benchmark_ledger::Commit::try_from)
                .transpose()?;
            run_context.override_with(benchmark_ledger::Context {
                repo_url,
                suite,
                tool,
                commit,
                date,
            });
            let run_context = run_context.validate(benchmark_ledger::util::time::now_millis())?;

            append(ledger_path, input_paths, run_context, arguments.quiet)
        }
        Command::Query {
            suite,
            bench,
            output_format,
            output_path,
        } => query(
            ledger_path,
            suite.as_str(),
            bench.as_deref(),
            output_format,
            output_path,
        ),
        Command::Suites => suites(ledger_path),
        Command::Check { strict } => check(
            ledger_path,
            if strict {
                benchmark_ledger::Strictness::Strict
            } else {
                benchmark_ledger::Strictness::Lenient
            },
            arguments.quiet,
        ),
        Command::Find { commit } => find(ledger_path, commit.as_str()),
    }
}

///
/// Appends one record built from the input reports and rewrites the ledger.
///
fn append(
    ledger_path: &Path,
    input_paths: Vec<PathBuf>,
    context: benchmark_ledger::RunContext,
    quiet: bool,
) -> anyhow::Result<()> {
    let mut suite_run = match context.repo_url.as_deref() {
        Some(repo_url) => benchmark_ledger::codec::read_or_new(ledger_path, repo_url)?,
        None if !ledger_path.exists() => anyhow::bail!(
            "Ledger file {ledger_path:?} does not exist. Use `--repo-url` to create it."
        ),
        None => benchmark_ledger::codec::read(ledger_path)?,
    };
    if let Some(repo_url) = context.repo_url.as_deref() {
        if suite_run.repo_url != repo_url {
            log::warn!(
                "Ledger repository {} differs from the context repository {repo_url}",
                suite_run.repo_url
            );
        }
    }

    let benches = benchmark_ledger::InputReport::collect(input_paths, context.tool)?;
    let record = benchmark_ledger::BenchmarkRecord::new(
        context.commit,
        context.date,
        context.tool.to_string(),
        benches,
    );
    log::info!(
        "Appending {} bench(es) of commit {} to suite `{}`",
        record.benches.len(),
        record.commit.short_id(),
        context.suite
    );
    suite_run.append(context.suite.as_str(), record)?;
    benchmark_ledger::codec::write(&suite_run, ledger_path)?;

    if !quiet {
        let records = suite_run.suite(context.suite.as_str()).unwrap_or_default();
        if let Some(comparison) =
            benchmark_ledger::Comparison::latest(context.suite.as_str(), records)
        {
            comparison.write_all(&mut std::io::stdout())?;
        }
    }

    Ok(())
}

///
/// Serializes the records of a suite, or the series of one bench.
///
fn query(
    ledger_path: &Path,
    suite: &str,
    bench: Option<&str>,
    output_format: benchmark_ledger::OutputFormat,
    output_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let suite_run = benchmark_ledger::codec::read(ledger_path)?;
    let Some(records) = suite_run.suite(suite) else {
        anyhow::bail!(
            "Suite `{suite}` not found. Available suites: {}",
            suite_run.suite_names().collect::<Vec<_>>().join(", ")
        );
    };

    let selection = match bench {
        Some(bench) => {
            let points = suite_run.series(suite, bench).unwrap_or_default();
            if points.is_empty() {
                anyhow::bail!("Bench `{bench}` not found in suite `{suite}`");
            }
            benchmark_ledger::Selection::Series { suite, points }
        }
        None => benchmark_ledger::Selection::Suite { suite, records },
    };

    let output = benchmark_ledger::Output::try_from((&selection, output_format))?;
    match output_path {
        Some(path) => output.write_to_file(path.as_path()),
        None => output.write_to_stdout(),
    }
}

///
/// Lists the suites with their record counts and latest dates.
///
fn suites(ledger_path: &Path) -> anyhow::Result<()> {
    let suite_run = benchmark_ledger::codec::read(ledger_path)?;

    for (suite, records) in suite_run.entries().iter() {
        let latest = records
            .last()
            .map(|record| benchmark_ledger::util::time::format_millis(record.date))
            .unwrap_or_default();
        println!(
            "{} {} record(s), latest {latest}",
            suite.bright_white(),
            records.len()
        );
    }
    Ok(())
}

///
/// Checks the ledger invariants, printing every violation.
///
fn check(
    ledger_path: &Path,
    strictness: benchmark_ledger::Strictness,
    quiet: bool,
) -> anyhow::Result<()> {
    let suite_run = benchmark_ledger::codec::read_unchecked(ledger_path)?;

    let violations = suite_run.validate(strictness);
    if !quiet {
        for violation in violations.iter() {
            println!("{} {violation}", "FAILED".bright_red());
        }
    }
    if !violations.is_empty() {
        anyhow::bail!(
            "Ledger file {ledger_path:?} has {} invariant violation(s)",
            violations.len()
        );
    }

    if !quiet {
        println!(
            "{} {} suite(s), last update {}",
            "PASSED".green(),
            suite_run.entries().len(),
            benchmark_ledger::util::time::format_millis(suite_run.last_update),
        );
    }
    Ok(())
}

///
/// Prints the records of a commit across all suites.
///
fn find(ledger_path: &Path, commit: &str) -> anyhow::Result<()> {
    let suite_run = benchmark_ledger::codec::read(ledger_path)?;

    let found = suite_run.find_by_commit(commit);
    if found.is_empty() {
        anyhow::bail!("Commit `{commit}` not found in the ledger");
    }
    for (suite, record) in found.into_iter() {
        println!(
            "{} {} {} bench(es), {}",
            suite.bright_white(),
            benchmark_ledger::util::time::format_millis(record.date),
            record.benches.len(),
            record.tool,
        );
    }
    Ok(())
}
