//! Handler Registry
//!
//! Maps a called function to its handler family. Built once per unit, then
//! read-only; dispatch never mutates it.

use crate::config::HandlerConfig;
use crate::features::libc_ub::domain::{LibcHandler, RECOGNIZED_PROCEDURES};
use crate::shared::models::{FunctionId, Instruction, TranslationUnit};
use crate::shared::ports::InsertionCursor;
use crate::shared::ConditionBuilder;
use rustc_hash::FxHashMap;

/// Handler bound to a function, with the name used as check label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredHandler {
    pub name: String,
    pub handler: LibcHandler,
}

#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: FxHashMap<FunctionId, RegisteredHandler>,
    builder: ConditionBuilder,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe `unit` for every recognized procedure. Names absent from the
    /// unit, or disabled in `config`, are not registered.
    pub fn for_unit(unit: &TranslationUnit, config: &HandlerConfig) -> Self {
        let mut registry = Self::new();
        for (name, handler) in RECOGNIZED_PROCEDURES {
            if !config.is_enabled(name) {
                tracing::debug!("handler for '{}' disabled by configuration", name);
                continue;
            }
            if let Some(id) = unit.function_named(name) {
                registry.register(id, *name, *handler);
            }
        }
        tracing::debug!(
            "registered {} libc handler(s) for unit '{}'",
            registry.len(),
            unit.name
        );
        registry
    }

    /// Bind `handler` to `function`; `name` labels the checks it produces.
    /// Replaces an earlier binding for the same function.
    pub fn register(&mut self, function: FunctionId, name: impl Into<String>, handler: LibcHandler) {
        let name = name.into();
        tracing::debug!("register {} handler for '{}' ({})", handler, name, function);
        self.handlers
            .insert(function, RegisteredHandler { name, handler });
    }

    pub fn get(&self, function: FunctionId) -> Option<&RegisteredHandler> {
        self.handlers.get(&function)
    }

    pub fn contains(&self, function: FunctionId) -> bool {
        self.handlers.contains_key(&function)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered procedure names, sorted
    pub fn registered_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.values().map(|h| h.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Run the matching handler for `instruction`.
    ///
    /// `false` without side effects for non-calls, indirect calls,
    /// unregistered callees and calls whose argument count does not match
    /// the handler family; otherwise the handler's result.
    pub fn dispatch(&self, instruction: &Instruction, cursor: &mut dyn InsertionCursor) -> bool {
        let Some(call) = instruction.as_call() else {
            return false;
        };
        let Some(callee) = call.called_function() else {
            return false;
        };
        let Some(entry) = self.handlers.get(&callee) else {
            return false;
        };
        if call.num_args() != entry.handler.arity() {
            tracing::trace!(
                "'{}' called with {} argument(s), {} handler takes {}",
                entry.name,
                call.num_args(),
                entry.handler,
                entry.handler.arity()
            );
            return false;
        }
        tracing::trace!("dispatch '{}' to {} handler", entry.name, entry.handler);
        entry.handler.handle(call, &entry.name, &self.builder, cursor)
    }
}
