//! Instrumentation Domain

use crate::shared::models::{Condition, DebugLoc, FunctionId};
use serde::{Deserialize, Serialize};

/// Position of an instruction within a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramPoint {
    pub function: FunctionId,
    /// Instruction index within the function body
    pub index: usize,
    pub debug_loc: Option<DebugLoc>,
}

impl ProgramPoint {
    pub fn new(function: FunctionId, index: usize) -> Self {
        Self {
            function,
            index,
            debug_loc: None,
        }
    }

    pub fn with_debug_loc(mut self, loc: Option<DebugLoc>) -> Self {
        self.debug_loc = loc;
        self
    }
}

/// A runtime check guarded by `condition`, placed before the instruction at `point`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertedCheck {
    pub point: Option<ProgramPoint>,
    pub condition: Condition,
    pub label: String,
}
