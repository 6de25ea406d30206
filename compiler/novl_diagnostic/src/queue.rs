//! Diagnostic queue for one compilation unit.

use std::fmt;

use crate::Diagnostic;

/// Proof that at least one error was emitted.
///
/// Only [`DiagnosticQueue::emit`] and [`ErrorGuaranteed::from_error_count`]
/// produce one, so a function returning `Err(ErrorGuaranteed)` cannot have
/// failed silently.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    /// `Some` when `count` is non-zero.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then_some(ErrorGuaranteed(()))
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error(s) emitted")
    }
}

/// Ordered collection of diagnostics.
///
/// Diagnostics keep emission order; the lowering engine reports them one
/// statement at a time and users read them in that order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Returns a guarantee if it is an error.
    pub fn emit(&mut self, diagnostic: Diagnostic) -> Option<ErrorGuaranteed> {
        let is_error = diagnostic.is_error();
        self.diagnostics.push(diagnostic);
        if is_error {
            self.error_count += 1;
            return Some(ErrorGuaranteed(()));
        }
        None
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count
    }

    /// Proof of errors, if any were emitted.
    pub fn error_guaranteed(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Take all diagnostics, leaving the queue empty.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}

impl Extend<Diagnostic> for DiagnosticQueue {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            let _ = self.emit(diagnostic);
        }
    }
}

impl<'a> IntoIterator for &'a DiagnosticQueue {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
