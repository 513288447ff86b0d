//! Instrumentation - where synthesized conditions land
//!
//! `CheckCollector` is the crate's `InsertionCursor`: it records each
//! runtime check against the current program point and drops duplicates.

pub mod domain;
pub mod infrastructure;

pub use domain::{InsertedCheck, ProgramPoint};
pub use infrastructure::CheckCollector;
