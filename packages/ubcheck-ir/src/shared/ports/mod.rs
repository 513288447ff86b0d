//! Collaborator interfaces
//!
//! The core consumes these; implementations live in the models
//! (`DebugInfoTable`) and in `features::instrumentation`.

pub mod cursor;
pub mod location;

pub use cursor::InsertionCursor;
pub use location::LocationResolver;
