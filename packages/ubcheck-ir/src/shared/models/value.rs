//! Operand values

use super::types::{ConstantInt, IntegerType, Type};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An operand: either an integer constant or a named SSA value/parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Constant(ConstantInt),
    Named { name: String, ty: Type },
}

impl Value {
    pub fn named(name: impl Into<String>, ty: Type) -> Self {
        Value::Named {
            name: name.into(),
            ty,
        }
    }

    pub fn constant(c: ConstantInt) -> Self {
        Value::Constant(c)
    }

    /// Integer constant from a signed value
    pub fn int(ty: IntegerType, value: i128) -> Self {
        Value::Constant(ConstantInt::from_i128(ty, value))
    }

    pub fn ty(&self) -> Type {
        match self {
            Value::Constant(c) => Type::Integer(c.ty()),
            Value::Named { ty, .. } => *ty,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Constant(c) => write!(f, "{}", c),
            Value::Named { name, .. } => write!(f, "%{}", name),
        }
    }
}
