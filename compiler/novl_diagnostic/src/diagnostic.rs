//! Core diagnostic type.

use std::fmt;

use novl_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A reported problem with an optional source location.
///
/// `Display` renders the user-facing line: a tab, the severity and the
/// message. Use [`Diagnostic::render`] to add the code and location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub span: Option<Span>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            span: None,
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a diagnostic with the severity `code` carries.
    #[cold]
    pub fn new(code: ErrorCode) -> Self {
        let severity = if code.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        };
        Self::new_with_severity(code, severity)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render with the error code and, given the source, a line/column.
    /// An empty message falls back to the code's description.
    ///
    /// ```text
    /// 	ERROR[E1002]: expected expression, found `)` (line 3, column 9)
    /// ```
    pub fn render(&self, source: Option<&str>) -> String {
        let message = if self.message.is_empty() {
            self.code.description()
        } else {
            &self.message
        };
        let mut out = format!("\t{}[{}]: {message}", self.severity, self.code);
        if let (Some(span), Some(source)) = (self.span, source) {
            let (line, col) = span.line_col(source);
            out.push_str(&format!(" (line {line}, column {col})"));
        }
        for note in &self.notes {
            out.push_str("\n\t  note: ");
            out.push_str(note);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t{}: {}", self.severity, self.message)
    }
}
