//!
//! The benchmark ledger arguments.
//!

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

///
/// The benchmark ledger arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The ledger file, usually `data.js`.
    /// Files with the `.json` extension are read and written as a bare JSON object.
    #[arg(long, global = true, default_value = "data.js")]
    pub data_file: PathBuf,

    /// The action to perform.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark ledger actions.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Appends a record built from harness reports to a suite.
    Append {
        /// Input files.
        /// Directories are searched for the tool's report files.
        #[arg(long, num_args = 1.., required = true)]
        input_paths: Vec<PathBuf>,

        /// The context file with the suite, tool, and commit.
        #[arg(long)]
        context: Option<PathBuf>,

        /// The suite to append to. Overrides the context file.
        #[arg(long)]
        suite: Option<String>,

        /// The harness that produced the reports: `pytest`, `cargo`,
        /// `customBiggerIsBetter`, or `customSmallerIsBetter`. Overrides the context file.
        #[arg(long)]
        tool: Option<benchmark_ledger::Tool>,

        /// A JSON file with the measured commit. Overrides the context file.
        #[arg(long)]
        commit_file: Option<PathBuf>,

        /// The capture time in milliseconds since the Unix epoch. Defaults to now.
        #[arg(long)]
        date: Option<u64>,

        /// The source repository URL, required when the ledger file is created.
        #[arg(long)]
        repo_url: Option<String>,
    },

    /// Prints the records of a suite, or the series of one bench.
    Query {
        /// The suite to query.
        #[arg(long)]
        suite: String,

        /// The bench to select a series of.
        #[arg(long)]
        bench: Option<String>,

        /// Output format: `json`, `csv`, or `xlsx`.
        #[arg(long, default_value_t = benchmark_ledger::OutputFormat::Json)]
        output_format: benchmark_ledger::OutputFormat,

        /// Output file. Text formats are printed to `stdout` if omitted.
        #[arg(long)]
        output_path: Option<PathBuf>,
    },

    /// Lists the suites in their order of creation.
    Suites,

    /// Checks the ledger invariants and lists every violation.
    Check {
        /// Requires `lastUpdate` to equal the newest record date.
        #[arg(long)]
        strict: bool,
    },

    /// Finds the records of a commit across all suites.
    Find {
        /// The full commit hash.
        #[arg(long)]
        commit: String,
    },
}
