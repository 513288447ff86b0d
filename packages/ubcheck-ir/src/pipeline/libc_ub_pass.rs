//! Libc UB instrumentation pass
//!
//! Drives the handler registry over a translation unit: initialize once
//! per unit, then visit every instruction of every defined function in
//! order.

use crate::config::PassConfig;
use crate::errors::Result;
use crate::features::instrumentation::{CheckCollector, ProgramPoint};
use crate::features::libc_ub::HandlerRegistry;
use crate::shared::models::{Instruction, TranslationUnit};
use crate::shared::ports::InsertionCursor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters for one pass run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    pub unit: String,
    pub functions_visited: usize,
    pub instructions_visited: usize,
    pub calls_visited: usize,
    /// Calls for which at least one new check was inserted
    pub calls_instrumented: usize,
    pub checks_inserted: usize,
    /// Inserted checks per label
    pub checks_by_label: BTreeMap<String, usize>,
}

impl PassSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Default)]
pub struct LibcUbPass {
    config: PassConfig,
    registry: Option<HandlerRegistry>,
}

impl LibcUbPass {
    pub fn new(config: PassConfig) -> Self {
        Self {
            config,
            registry: None,
        }
    }

    /// Build the handler registry for `unit`. Leaves the IR unchanged.
    pub fn initialize(&mut self, unit: &TranslationUnit) {
        self.registry = Some(HandlerRegistry::for_unit(unit, &self.config.handlers));
    }

    /// `None` before `initialize`
    pub fn registry(&self) -> Option<&HandlerRegistry> {
        self.registry.as_ref()
    }

    /// Instrument one instruction; `true` iff a new check was inserted
    pub fn visit(&self, instruction: &Instruction, cursor: &mut dyn InsertionCursor) -> bool {
        match &self.registry {
            Some(registry) => registry.dispatch(instruction, cursor),
            None => false,
        }
    }

    /// Initialize for `unit` and instrument all defined functions
    pub fn run(&mut self, unit: &TranslationUnit, cursor: &mut CheckCollector) -> PassSummary {
        self.initialize(unit);

        let mut summary = PassSummary {
            unit: unit.name.clone(),
            ..Default::default()
        };
        let before = cursor.len();

        for (id, function) in unit.functions().filter(|(_, f)| !f.is_declaration()) {
            summary.functions_visited += 1;
            for (index, instruction) in function.instructions().iter().enumerate() {
                summary.instructions_visited += 1;
                if instruction.as_call().is_some() {
                    summary.calls_visited += 1;
                }
                cursor.set_point(ProgramPoint::new(id, index).with_debug_loc(instruction.debug_loc));
                if self.visit(instruction, cursor) {
                    summary.calls_instrumented += 1;
                }
            }
        }

        for check in &cursor.checks()[before..] {
            *summary.checks_by_label.entry(check.label.clone()).or_insert(0) += 1;
        }
        summary.checks_inserted = cursor.len() - before;

        tracing::debug!(
            "unit '{}': {} call(s) visited, {} instrumented, {} check(s) inserted",
            summary.unit,
            summary.calls_visited,
            summary.calls_instrumented,
            summary.checks_inserted
        );
        summary
    }
}
