//! Pipeline orchestration

pub mod libc_ub_pass;
pub mod violation;

pub use libc_ub_pass::{LibcUbPass, PassSummary};
pub use violation::report_violation;
