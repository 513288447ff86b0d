//! Test data builders

use ubcheck_ir::shared::models::{
    CallSite, DebugLoc, FunctionId, Instruction, IntegerType, TranslationUnit, Type, Value,
};

/// Named integer operand
pub fn int_arg(name: &str, bits: u32) -> Value {
    Value::named(name, Type::Integer(IntegerType::new(bits)))
}

/// Builder for a unit with a single defined function `main`
#[derive(Debug)]
pub struct UnitBuilder {
    unit: TranslationUnit,
    body: Vec<Instruction>,
}

impl UnitBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            unit: TranslationUnit::new(name),
            body: Vec::new(),
        }
    }

    /// Declare an external function
    pub fn declare(mut self, name: &str) -> Self {
        self.unit.declare(name);
        self
    }

    /// Append a direct call to `callee`, declaring it if needed
    pub fn call(mut self, callee: &str, args: Vec<Value>) -> Self {
        let id = self.unit.declare(callee);
        self.body.push(Instruction::call(CallSite::direct(id, args)));
        self
    }

    /// Append a direct call carrying a debug location at `line:column` in `file`
    pub fn call_at(mut self, callee: &str, args: Vec<Value>, file: &str, line: u32, column: u32) -> Self {
        let id = self.unit.declare(callee);
        let scope = self.unit.debug_info_mut().add_scope("/src", file);
        self.body.push(
            Instruction::call(CallSite::direct(id, args))
                .with_debug_loc(DebugLoc::new(scope, line, column)),
        );
        self
    }

    pub fn instruction(mut self, instruction: Instruction) -> Self {
        self.body.push(instruction);
        self
    }

    pub fn build(mut self) -> TranslationUnit {
        self.unit.define("main", self.body);
        self.unit
    }
}

/// Id of `name` in `unit`, declaring nothing
pub fn function_id(unit: &TranslationUnit, name: &str) -> FunctionId {
    unit.function_named(name)
        .unwrap_or_else(|| panic!("function '{}' not in unit", name))
}
