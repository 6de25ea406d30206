//! Textual LLVM IR for the Novlangue compiler.
//!
//! A small, self-contained model of an LLVM 10 module: typed values,
//! basic blocks with one terminator each, function declarations and
//! definitions, globals and private string constants. [`IrBuilder`] is the
//! only way to append to a [`Module`]; the module's `Display` writes the
//! assembly text that `llc` and `clang` accept.
//!
//! ```text
//! ; ModuleID = 'example'
//! source_filename = "example.novl"
//!
//! define i32 @main() {
//! entry:
//!   %add = add i32 1, 1
//!   ret i32 0
//! }
//! ```

mod ids;
mod instr;
mod ir_builder;
mod module;
mod types;
mod value;

pub use ids::{BlockId, FunctionId, ValueId};
pub use instr::{BinaryOpcode, FloatCmp, Instruction, IntCmp, Terminator};
pub use ir_builder::IrBuilder;
pub use module::{BasicBlock, Function, FunctionMark, Global, GlobalInit, Module};
pub use types::IrType;
pub use value::{escape_bytes, format_double, ValueData, ValueKind};
