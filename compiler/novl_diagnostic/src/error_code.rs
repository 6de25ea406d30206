//! Error codes for all compiler diagnostics.
//!
//! The first digit names the phase the diagnostic comes from.

use std::fmt;

/// Error codes.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: AST construction errors
/// - E3xxx: Lowering errors (E31xx are warnings)
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type name
    E1005,
    /// Expected comparison operator
    E1006,

    // AST Construction Errors (E2xxx)
    /// Unsupported binary operator
    E2001,
    /// Unknown type name
    E2002,
    /// Invalid number literal
    E2003,

    // Lowering Errors (E3xxx)
    /// Variable does not exist
    E3001,
    /// Function does not exist
    E3002,
    /// Function already exists
    E3003,
    /// Wrong number of arguments
    E3004,
    /// Argument type mismatch
    E3005,
    /// Operand or value type mismatch
    E3006,
    /// Construct not implemented
    E3007,

    // Lowering Warnings (E31xx)
    /// Variable redeclared with `val`
    E3100,

    // Internal Errors (E9xxx)
    /// IR builder in an invalid state
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3100 => "E3100",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Short description, used by `--explain`-style listings and logs.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type name",
            ErrorCode::E1006 => "expected comparison operator",
            ErrorCode::E2001 => "unsupported operator",
            ErrorCode::E2002 => "unknown type",
            ErrorCode::E2003 => "invalid number literal",
            ErrorCode::E3001 => "variable does not exist",
            ErrorCode::E3002 => "function does not exist",
            ErrorCode::E3003 => "function already exists",
            ErrorCode::E3004 => "wrong number of arguments",
            ErrorCode::E3005 => "argument type mismatch",
            ErrorCode::E3006 => "type mismatch",
            ErrorCode::E3007 => "not implemented",
            ErrorCode::E3100 => "variable redeclared",
            ErrorCode::E9001 => "internal compiler error",
        }
    }

    /// Whether this code is reported as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::E3100)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
