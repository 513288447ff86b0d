//! `abs`, `labs`, `llabs`
//!
//! Negating the signed minimum overflows, so the sole trigger is
//! `x == -2^(w-1)`.

use crate::shared::models::{CallSite, ConstantInt, Value};
use crate::shared::ports::InsertionCursor;
use crate::shared::ConditionBuilder;

/// abs(x): x == INT_MIN
pub fn visit_abs(
    call: &CallSite,
    label: &str,
    builder: &ConditionBuilder,
    cursor: &mut dyn InsertionCursor,
) -> bool {
    let [arg] = call.args.as_slice() else {
        tracing::trace!("{}: expected 1 argument, found {}", label, call.num_args());
        return false;
    };
    let Some(ty) = arg.ty().as_integer() else {
        tracing::trace!("{}: non-integer argument of type {}", label, arg.ty());
        return false;
    };

    let smin = Value::constant(ConstantInt::signed_min(ty));
    match builder.icmp_eq(arg.clone(), smin) {
        Ok(cond) => cursor.insert(cond, label),
        Err(e) => {
            tracing::trace!("{}: {}", label, e);
            false
        }
    }
}
