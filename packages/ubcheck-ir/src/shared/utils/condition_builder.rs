//! Condition Builder
//!
//! Constructs comparison and logical sub-expressions over call operands.
//! Comparisons never coerce: operands of different types are rejected.

use crate::errors::{Result, UbCheckError};
use crate::shared::models::{Condition, ConstantInt, Type, Value};

#[derive(Debug, Default, Clone, Copy)]
pub struct ConditionBuilder;

impl ConditionBuilder {
    pub fn new() -> Self {
        Self
    }

    /// `lhs == rhs`
    pub fn icmp_eq(&self, lhs: Value, rhs: Value) -> Result<Condition> {
        let (lt, rt) = (lhs.ty(), rhs.ty());
        if lt != rt || lt.as_integer().is_none() {
            return Err(UbCheckError::type_mismatch(lt, rt));
        }
        Ok(Condition::Eq(lhs, rhs))
    }

    /// `value == 0`
    pub fn is_null(&self, value: Value) -> Result<Condition> {
        match value.ty() {
            Type::Integer(ty) => self.icmp_eq(value, Value::constant(ConstantInt::zero(ty))),
            other => Err(UbCheckError::type_mismatch(other, other)),
        }
    }

    /// `lhs && rhs`
    pub fn and(&self, lhs: Condition, rhs: Condition) -> Condition {
        Condition::And(Box::new(lhs), Box::new(rhs))
    }
}
