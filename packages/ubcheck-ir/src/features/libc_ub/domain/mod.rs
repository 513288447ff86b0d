//! Libc UB Domain - recognized procedures and their handler families

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handler family. Closed set: a new family is a new variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LibcHandler {
    /// `abs`, `labs`, `llabs`
    AbsoluteValue,
    /// `div`, `ldiv`, `lldiv`
    Division,
}

impl LibcHandler {
    pub fn as_str(&self) -> &'static str {
        match self {
            LibcHandler::AbsoluteValue => "absolute_value",
            LibcHandler::Division => "division",
        }
    }

    /// Number of arguments the family accepts
    pub fn arity(&self) -> usize {
        match self {
            LibcHandler::AbsoluteValue => 1,
            LibcHandler::Division => 2,
        }
    }
}

impl fmt::Display for LibcHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Procedures probed for at unit initialization
pub const RECOGNIZED_PROCEDURES: &[(&str, LibcHandler)] = &[
    ("abs", LibcHandler::AbsoluteValue),
    ("labs", LibcHandler::AbsoluteValue),
    ("llabs", LibcHandler::AbsoluteValue),
    ("div", LibcHandler::Division),
    ("ldiv", LibcHandler::Division),
    ("lldiv", LibcHandler::Division),
];
