//!
//! The benchmark ledger library.
//!

pub mod codec;
pub mod comparison;
pub mod context;
pub mod input;
pub mod model;
pub mod output;
pub mod util;

mod test_data;

pub use crate::codec::error::DecodeError;
pub use crate::codec::error::Error as CodecError;
pub use crate::comparison::change::Change;
pub use crate::comparison::Comparison;
pub use crate::context::Context;
pub use crate::context::RunContext;
pub use crate::input::error::Error as InputReportError;
pub use crate::input::tool::Tool;
pub use crate::input::InputReport;
pub use crate::model::suite_run::append_error::AppendError;
pub use crate::model::suite_run::record::bench_case::BenchCase;
pub use crate::model::suite_run::record::commit::identity::Identity;
pub use crate::model::suite_run::record::commit::Commit;
pub use crate::model::suite_run::record::BenchmarkRecord;
pub use crate::model::suite_run::series::Point as SeriesPoint;
pub use crate::model::suite_run::violation::Strictness;
pub use crate::model::suite_run::violation::Violation;
pub use crate::model::suite_run::BenchmarkSuiteRun;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::selection::Selection;
pub use crate::output::Output;
