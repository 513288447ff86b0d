//! Check collector

use super::domain::{InsertedCheck, ProgramPoint};
use crate::shared::models::{Condition, FunctionId};
use crate::shared::ports::InsertionCursor;
use rustc_hash::FxHashSet;

type PointKey = Option<(FunctionId, usize)>;

/// Records inserted checks; an identical `(condition, label)` at the same
/// point is inserted once.
#[derive(Debug, Default)]
pub struct CheckCollector {
    point: Option<ProgramPoint>,
    checks: Vec<InsertedCheck>,
    seen: FxHashSet<(PointKey, Condition, String)>,
}

impl CheckCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor; subsequent insertions go before this point
    pub fn set_point(&mut self, point: ProgramPoint) {
        self.point = Some(point);
    }

    pub fn checks(&self) -> &[InsertedCheck] {
        &self.checks
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Checks carrying `label`
    pub fn labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a InsertedCheck> + 'a {
        self.checks.iter().filter(move |c| c.label == label)
    }
}

impl InsertionCursor for CheckCollector {
    fn insert(&mut self, condition: Condition, label: &str) -> bool {
        let key = self.point.map(|p| (p.function, p.index));
        if !self
            .seen
            .insert((key, condition.clone(), label.to_string()))
        {
            tracing::trace!("duplicate check '{}' for {}", condition, label);
            return false;
        }
        self.checks.push(InsertedCheck {
            point: self.point,
            condition,
            label: label.to_string(),
        });
        true
    }
}
