//! Utility modules shared across features
//!
//! - `condition_builder`: typed construction of trigger conditions

pub mod condition_builder;

pub use condition_builder::ConditionBuilder;
