//! Insertion cursor port

use crate::shared::models::Condition;

/// Splices a runtime check at the current program point
pub trait InsertionCursor {
    /// Insert a check guarded by `condition`, reported under `label`.
    ///
    /// Returns `true` iff new instrumentation was added; `false` when an
    /// equivalent check already exists at this point.
    fn insert(&mut self, condition: Condition, label: &str) -> bool;
}
