//! `div`, `ldiv`, `lldiv`
//!
//! Two independent triggers, always both inserted in this order:
//! 1. `d == 0`
//! 2. `n == INT_MIN && d == -1` (quotient not representable)
//!
//! Both carry the procedure name as label.

use crate::errors::Result;
use crate::shared::models::{CallSite, Condition, ConstantInt, IntegerType, Value};
use crate::shared::ports::InsertionCursor;
use crate::shared::ConditionBuilder;

/// div(numer, denom): denom == 0 || (numer == INT_MIN && denom == -1)
pub fn visit_div(
    call: &CallSite,
    label: &str,
    builder: &ConditionBuilder,
    cursor: &mut dyn InsertionCursor,
) -> bool {
    let [numer, denom] = call.args.as_slice() else {
        tracing::trace!("{}: expected 2 arguments, found {}", label, call.num_args());
        return false;
    };
    let Some(ty) = numer.ty().as_integer() else {
        tracing::trace!("{}: non-integer numerator of type {}", label, numer.ty());
        return false;
    };
    if denom.ty() != numer.ty() {
        tracing::trace!(
            "{}: operand types differ ({} vs {})",
            label,
            numer.ty(),
            denom.ty()
        );
        return false;
    }

    let mut changed = false;
    match builder.is_null(denom.clone()) {
        Ok(cond) => changed |= cursor.insert(cond, label),
        Err(e) => tracing::trace!("{}: {}", label, e),
    }
    match overflow_condition(builder, ty, numer, denom) {
        Ok(cond) => changed |= cursor.insert(cond, label),
        Err(e) => tracing::trace!("{}: {}", label, e),
    }
    changed
}

fn overflow_condition(
    builder: &ConditionBuilder,
    ty: IntegerType,
    numer: &Value,
    denom: &Value,
) -> Result<Condition> {
    let smin = Value::constant(ConstantInt::signed_min(ty));
    let minus_one = Value::constant(ConstantInt::all_ones(ty));
    Ok(builder.and(
        builder.icmp_eq(numer.clone(), smin)?,
        builder.icmp_eq(denom.clone(), minus_one)?,
    ))
}
