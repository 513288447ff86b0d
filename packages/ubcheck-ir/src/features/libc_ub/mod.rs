//! Libc UB Conditions
//!
//! Recognizes calls to libc procedures with signed-overflow preconditions
//! and synthesizes the conditions under which they invoke undefined
//! behavior.
//!
//! ```text
//! Instruction ──▶ HandlerRegistry::dispatch
//!                   │  callee ∈ registry?
//!                   ▼
//!                 LibcHandler::{AbsoluteValue, Division}
//!                   │  ConditionBuilder
//!                   ▼
//!                 InsertionCursor::insert(condition, "abs" | "div" | ...)
//! ```
//!
//! | Procedure            | Trigger                                   |
//! |----------------------|-------------------------------------------|
//! | `abs` `labs` `llabs` | `x == INT_MIN`                            |
//! | `div` `ldiv` `lldiv` | `d == 0`, `n == INT_MIN && d == -1`       |

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{HandlerRegistry, RegisteredHandler};
pub use domain::{LibcHandler, RECOGNIZED_PROCEDURES};
