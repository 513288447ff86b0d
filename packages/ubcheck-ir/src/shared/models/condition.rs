//! Trigger conditions
//!
//! A `Condition` is a boolean expression over call-site operands. When it
//! holds at runtime the instrumented call would invoke undefined behavior.

use super::types::ConstantInt;
use super::value::Value;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Integer equality; both operands have the same type
    Eq(Value, Value),
    And(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// Evaluate under concrete values for named operands.
    ///
    /// Returns `None` if a named operand is unbound.
    pub fn evaluate(&self, bindings: &Bindings) -> Option<bool> {
        match self {
            Condition::Eq(lhs, rhs) => Some(bindings.bits_of(lhs)? == bindings.bits_of(rhs)?),
            Condition::And(lhs, rhs) => Some(lhs.evaluate(bindings)? && rhs.evaluate(bindings)?),
        }
    }

    /// Named operands referenced by this condition
    pub fn operands(&self) -> Vec<&Value> {
        match self {
            Condition::Eq(lhs, rhs) => [lhs, rhs]
                .into_iter()
                .filter(|v| matches!(v, Value::Named { .. }))
                .collect(),
            Condition::And(lhs, rhs) => {
                let mut ops = lhs.operands();
                ops.extend(rhs.operands());
                ops
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Eq(lhs, rhs) => write!(f, "{} == {}", lhs, rhs),
            Condition::And(lhs, rhs) => write!(f, "({}) && ({})", lhs, rhs),
        }
    }
}

/// Concrete values for named operands
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: FxHashMap<String, i128>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, name: impl Into<String>, value: i128) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    fn bits_of(&self, value: &Value) -> Option<u128> {
        match value {
            Value::Constant(c) => Some(c.raw_bits()),
            Value::Named { name, ty } => {
                let ty = ty.as_integer()?;
                let v = *self.values.get(name)?;
                Some(ConstantInt::from_i128(ty, v).raw_bits())
            }
        }
    }
}
