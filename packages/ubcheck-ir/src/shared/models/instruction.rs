//! Instructions and call sites

use super::location::DebugLoc;
use super::unit::FunctionId;
use super::value::Value;
use serde::{Deserialize, Serialize};

/// Call target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Callee {
    /// Statically known function
    Direct(FunctionId),
    /// Call through a pointer; target unknown at compile time
    Indirect(Value),
}

/// A call operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub callee: Callee,
    pub args: Vec<Value>,
}

impl CallSite {
    pub fn direct(callee: FunctionId, args: Vec<Value>) -> Self {
        Self {
            callee: Callee::Direct(callee),
            args,
        }
    }

    pub fn indirect(target: Value, args: Vec<Value>) -> Self {
        Self {
            callee: Callee::Indirect(target),
            args,
        }
    }

    /// Statically determined callee, if any
    pub fn called_function(&self) -> Option<FunctionId> {
        match self.callee {
            Callee::Direct(id) => Some(id),
            Callee::Indirect(_) => None,
        }
    }

    pub fn num_args(&self) -> usize {
        self.args.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstructionKind {
    Call(CallSite),
    /// Any non-call operation; opaque to this crate
    Other { opcode: String },
}

/// A program operation with optional debug location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub debug_loc: Option<DebugLoc>,
}

impl Instruction {
    pub fn call(site: CallSite) -> Self {
        Self {
            kind: InstructionKind::Call(site),
            debug_loc: None,
        }
    }

    pub fn other(opcode: impl Into<String>) -> Self {
        Self {
            kind: InstructionKind::Other {
                opcode: opcode.into(),
            },
            debug_loc: None,
        }
    }

    pub fn with_debug_loc(mut self, loc: DebugLoc) -> Self {
        self.debug_loc = Some(loc);
        self
    }

    pub fn as_call(&self) -> Option<&CallSite> {
        match &self.kind {
            InstructionKind::Call(site) => Some(site),
            InstructionKind::Other { .. } => None,
        }
    }
}
