//!
//! Utility functions.
//!

pub mod number;
pub mod time;
