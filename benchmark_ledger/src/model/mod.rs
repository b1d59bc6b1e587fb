//!
//! The benchmark ledger data model.
//!

pub mod suite_run;
