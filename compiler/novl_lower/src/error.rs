//! Lowering errors.
//!
//! Messages are the user-facing text printed after `ERROR:`.

use novl_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, ErrorGuaranteed};
use novl_ir::ValType;

/// A recoverable lowering error. The statement that raised it is skipped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    #[error("The variable {name} does not exist.")]
    UndefinedVariable { name: String },

    #[error("The variable {name} does not exist. Try using `val`.")]
    AssignToUndeclared { name: String },

    #[error("The function {name} does not exist.")]
    UndefinedFunction { name: String },

    #[error("The function {name} already exists.")]
    FunctionExists { name: String },

    #[error("The function {name} takes {expected} arguments, but you supplied {supplied}.")]
    ArgumentCount {
        name: String,
        expected: usize,
        supplied: usize,
    },

    #[error("Argument {position} of {name} should be {expected}, but you supplied {found}.")]
    ArgumentType {
        name: String,
        /// 1-based.
        position: usize,
        expected: ValType,
        found: ValType,
    },

    #[error("Type mismatch in {context}: expected {expected}, found {found}.")]
    TypeMismatch {
        context: String,
        expected: ValType,
        found: ValType,
    },

    #[error("{what} is not implemented.")]
    NotImplemented { what: String },

    #[error("internal lowering error: {0}")]
    Internal(String),
}

impl LowerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LowerError::UndefinedVariable { .. } | LowerError::AssignToUndeclared { .. } => {
                ErrorCode::E3001
            }
            LowerError::UndefinedFunction { .. } => ErrorCode::E3002,
            LowerError::FunctionExists { .. } => ErrorCode::E3003,
            LowerError::ArgumentCount { .. } => ErrorCode::E3004,
            LowerError::ArgumentType { .. } => ErrorCode::E3005,
            LowerError::TypeMismatch { .. } => ErrorCode::E3006,
            LowerError::NotImplemented { .. } => ErrorCode::E3007,
            LowerError::Internal(_) => ErrorCode::E9001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code()).with_message(self.to_string())
    }

    pub(crate) fn not_implemented(what: impl Into<String>) -> Self {
        LowerError::NotImplemented { what: what.into() }
    }
}

impl From<LowerError> for Diagnostic {
    fn from(err: LowerError) -> Self {
        err.to_diagnostic()
    }
}

/// A strict-mode unit that reported at least one error.
#[derive(Debug, thiserror::Error)]
#[error("lowering failed with {} error(s)", .diagnostics.error_count())]
pub struct LowerFailed {
    pub diagnostics: DiagnosticQueue,
    pub guarantee: ErrorGuaranteed,
}
