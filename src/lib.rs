//! dlog - Work-log extraction from djot journals
//!
//! Parses a djot document organized as dated sections of paired time
//! boundaries and produces, per day, an ordered list of
//! (start, end, hierarchical tags) work intervals.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DlogError;
