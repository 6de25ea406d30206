//! Token cursor for navigating the token stream.

use novl_ir::{Span, Token, TokenKind, TokenList};

use crate::ParseError;

/// Position in a [`TokenList`].
///
/// The list always ends in `Eof`, and the cursor never moves past it, so
/// [`Cursor::current`] is always valid.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move back to a position taken from [`Cursor::position`].
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len());
        self.pos = pos;
    }

    /// The current token, or `Eof` if the list was empty.
    #[inline]
    pub fn current(&self) -> &'a Token {
        static EOF: Token = Token {
            kind: TokenKind::Eof,
            span: Span::DUMMY,
        };
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one.
    pub fn peek_kind(&self) -> &'a TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(&TokenKind::Eof, |t| &t.kind)
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume and return the current token. Stays put at `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail with "expected `what`".
    pub fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(
                what,
                self.current_kind(),
                self.current_span(),
            ))
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skip newlines and semicolons. Returns whether any were skipped.
    pub fn skip_separators(&mut self) -> bool {
        let start = self.pos;
        while self.current_kind().is_separator() {
            self.advance();
        }
        self.pos != start
    }
}
