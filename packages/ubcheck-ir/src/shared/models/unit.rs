//! Translation unit: the set of functions visible to the pass

use super::debug_info::DebugInfoTable;
use super::instruction::Instruction;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Function handle, stable for the lifetime of its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionId(u32);

impl FunctionId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    /// `None` for a declaration
    pub body: Option<Vec<Instruction>>,
}

impl Function {
    pub fn is_declaration(&self) -> bool {
        self.body.is_none()
    }

    pub fn instructions(&self) -> &[Instruction] {
        self.body.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationUnit {
    pub name: String,
    functions: Vec<Function>,
    by_name: FxHashMap<String, FunctionId>,
    debug_info: DebugInfoTable,
}

impl TranslationUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declare an external function. Returns the existing id if the name is
    /// already present.
    pub fn declare(&mut self, name: impl Into<String>) -> FunctionId {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }
        self.push(Function { name, body: None })
    }

    /// Define a function with a body, replacing an earlier declaration of the
    /// same name.
    pub fn define(&mut self, name: impl Into<String>, body: Vec<Instruction>) -> FunctionId {
        let id = self.declare(name);
        self.functions[id.index()].body = Some(body);
        id
    }

    fn push(&mut self, function: Function) -> FunctionId {
        let id = FunctionId(self.functions.len() as u32);
        self.by_name.insert(function.name.clone(), id);
        self.functions.push(function);
        id
    }

    pub fn function_named(&self, name: &str) -> Option<FunctionId> {
        self.by_name.get(name).copied()
    }

    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        self.functions.get(id.index())
    }

    pub fn functions(&self) -> impl Iterator<Item = (FunctionId, &Function)> {
        self.functions
            .iter()
            .enumerate()
            .map(|(i, f)| (FunctionId(i as u32), f))
    }

    pub fn debug_info(&self) -> &DebugInfoTable {
        &self.debug_info
    }

    pub fn debug_info_mut(&mut self) -> &mut DebugInfoTable {
        &mut self.debug_info
    }
}
