//! IR models shared by all features

pub mod condition;
pub mod debug_info;
pub mod instruction;
pub mod location;
pub mod types;
pub mod unit;
pub mod value;

pub use condition::{Bindings, Condition};
pub use debug_info::DebugInfoTable;
pub use instruction::{CallSite, Callee, Instruction, InstructionKind};
pub use location::{DebugLoc, MetadataId, SourceFrame, SourceLocationChain};
pub use types::{ConstantInt, IntegerType, Type, MAX_INT_BITS};
pub use unit::{Function, FunctionId, TranslationUnit};
pub use value::Value;
