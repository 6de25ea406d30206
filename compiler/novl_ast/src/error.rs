//! AST construction errors.

use novl_diagnostic::{Diagnostic, ErrorCode};
use novl_ir::Span;

/// Failure to build a node. Fails the whole enclosing unit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("unsupported operator `{op}`")]
    UnsupportedOperator { op: String, span: Span },

    #[error("unknown type `{name}`")]
    UnknownType { name: String, span: Span },

    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String, span: Span },
}

impl BuildError {
    pub fn span(&self) -> Span {
        match self {
            BuildError::UnsupportedOperator { span, .. }
            | BuildError::UnknownType { span, .. }
            | BuildError::InvalidNumber { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BuildError::UnsupportedOperator { .. } => ErrorCode::E2001,
            BuildError::UnknownType { .. } => ErrorCode::E2002,
            BuildError::InvalidNumber { .. } => ErrorCode::E2003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_span(self.span());
        match self {
            BuildError::UnknownType { .. } => diag.with_note("types are Int, Double and String"),
            BuildError::InvalidNumber { .. } => {
                diag.with_note("integer literals must fit in 32 bits")
            }
            BuildError::UnsupportedOperator { .. } => diag,
        }
    }
}

impl From<BuildError> for Diagnostic {
    fn from(err: BuildError) -> Self {
        err.to_diagnostic()
    }
}
