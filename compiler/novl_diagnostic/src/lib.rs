//! Diagnostics for the Novlangue compiler.
//!
//! Every stage error (parse, AST construction, lowering) converts into a
//! [`Diagnostic`] carrying an [`ErrorCode`] and a [`Severity`]. Diagnostics
//! print the way the REPL and the compile driver show them to users:
//!
//! ```text
//! 	WARNING: Variable x already exists. You should not use `val` here.
//! 	ERROR: The variable y does not exist.
//! ```
//!
//! [`DiagnosticQueue`] collects them for one compilation unit and hands out
//! an [`ErrorGuaranteed`] token whenever an error is recorded.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticQueue, ErrorGuaranteed};
