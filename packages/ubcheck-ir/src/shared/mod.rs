//! Shared module - Common types and utilities
//!
//! This module contains the IR model and the collaborator ports shared by
//! all features.

pub mod models;
pub mod ports;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::condition_builder::ConditionBuilder;
