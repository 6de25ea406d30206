//! Lowering of Novlangue ASTs to textual LLVM IR.
//!
//! - [`SymbolEnvironment`]: variable bindings and the function table.
//! - [`Lowerer`]: the depth-first AST walk emitting IR.
//! - [`CompilationSession`]: the module plus environment that a file
//!   compile or a REPL keeps for its whole life.
//!
//! ```text
//! Node::Program ──► Lowerer ──► IrBuilder ──► Module ──► .ll text
//!                      │
//!                      └──► SymbolEnvironment
//! ```

mod env;
mod error;
mod helpers;
mod lowerer;
mod session;

pub use env::{Binding, FunctionSignature, SymbolEnvironment};
pub use error::{LowerError, LowerFailed};
pub use lowerer::{ir_type, LowerOutput, Lowerer, Typed};
pub use session::{entry_name, CompilationSession, LowerMode, SessionOptions};

#[cfg(test)]
mod tests;
