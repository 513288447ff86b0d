//! Handler implementations

pub mod absolute_value;
pub mod division;

use super::domain::LibcHandler;
use crate::shared::models::CallSite;
use crate::shared::ports::InsertionCursor;
use crate::shared::ConditionBuilder;

impl LibcHandler {
    /// Synthesize and insert this family's trigger conditions for `call`.
    ///
    /// Returns `true` iff at least one new check was inserted; `false` when
    /// the call shape is not applicable.
    pub fn handle(
        &self,
        call: &CallSite,
        label: &str,
        builder: &ConditionBuilder,
        cursor: &mut dyn InsertionCursor,
    ) -> bool {
        match self {
            LibcHandler::AbsoluteValue => absolute_value::visit_abs(call, label, builder, cursor),
            LibcHandler::Division => division::visit_div(call, label, builder, cursor),
        }
    }
}
