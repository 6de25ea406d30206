//! Parse errors.

use novl_diagnostic::{Diagnostic, ErrorCode};
use novl_ir::{Span, TokenKind};

/// A syntax error. Parsing stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
        }
    }

    /// `expected X, found Y`, or the lexer's complaint if Y is garbage.
    pub fn unexpected(expected: &str, found: &TokenKind, span: Span) -> Self {
        if let TokenKind::Error(text) = found {
            return Self::invalid_character(text, span);
        }
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", found.display_name()),
            span,
        )
    }

    pub fn invalid_character(text: &str, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E0001,
            format!("invalid character `{text}` in source"),
            span,
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(self.message.clone())
            .with_span(self.span)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(err: ParseError) -> Self {
        err.to_diagnostic()
    }
}
