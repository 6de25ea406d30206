//! Expressions and comparisons.
//!
//! Precedence, lowest first: `+ -`, then `* / %`, then unary `-`. All
//! binary operators are left-associative. A newline right after a binary
//! operator continues the expression.

use novl_diagnostic::ErrorCode;
use novl_ir::{Span, TokenKind};
use novl_stack::with_stack;

use crate::tree::{Comparison, Expr, Ident};
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `expr := term (('+' | '-') term)*`
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;
        while matches!(self.cursor.current_kind(), TokenKind::Plus | TokenKind::Minus) {
            let op = self.cursor.advance().clone();
            self.cursor.skip_newlines();
            let right = self.parse_term()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// `term := unary (('*' | '/' | '%') unary)*`
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while matches!(
            self.cursor.current_kind(),
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent
        ) {
            let op = self.cursor.advance().clone();
            self.cursor.skip_newlines();
            let right = self.parse_unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// `unary := '-' unary | primary`
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        with_stack(|| {
            if self.cursor.check(&TokenKind::Minus) {
                let start = self.cursor.advance().span;
                let operand = self.parse_unary()?;
                return Ok(Expr::Neg {
                    span: start.merge(operand.span()),
                    operand: Box::new(operand),
                });
            }
            self.parse_primary()
        })
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let span = token.span;
        match &token.kind {
            TokenKind::Int(text) => {
                self.cursor.advance();
                Ok(Expr::Int {
                    text: text.clone(),
                    span,
                })
            }
            TokenKind::Float(text) => {
                self.cursor.advance();
                Ok(Expr::Float {
                    text: text.clone(),
                    span,
                })
            }
            TokenKind::Str(text) => {
                self.cursor.advance();
                Ok(Expr::Str {
                    text: text.clone(),
                    span,
                })
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                let ident = Ident {
                    name: name.clone(),
                    span,
                };
                if self.cursor.check(&TokenKind::LParen) {
                    self.parse_call(ident)
                } else {
                    Ok(Expr::Ident(ident))
                }
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                let close = self.expect_close_paren(span)?;
                Ok(Expr::Paren {
                    inner: Box::new(inner),
                    span: span.merge(close),
                })
            }
            TokenKind::Error(text) => Err(ParseError::invalid_character(text, span)),
            other => Err(ParseError::new(
                ErrorCode::E1002,
                format!("expected expression, found {}", other.display_name()),
                span,
            )),
        }
    }

    /// `IDENT '(' (expr (',' expr)*)? ')'`, name already consumed.
    fn parse_call(&mut self, name: Ident) -> Result<Expr, ParseError> {
        let open = self.cursor.advance().span;
        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        let close = self.expect_close_paren(open)?;
        Ok(Expr::Call {
            span: name.span.merge(close),
            name,
            args,
        })
    }

    fn expect_close_paren(&mut self, open: Span) -> Result<Span, ParseError> {
        if self.cursor.check(&TokenKind::RParen) {
            return Ok(self.cursor.advance().span);
        }
        if let TokenKind::Error(text) = self.cursor.current_kind() {
            return Err(ParseError::invalid_character(text, self.cursor.current_span()));
        }
        Err(ParseError::new(
            ErrorCode::E1003,
            format!(
                "unclosed `(`, found {}",
                self.cursor.current_kind().display_name()
            ),
            open.merge(self.cursor.current_span()),
        ))
    }

    /// `comparison := expr op expr`
    pub(crate) fn parse_comparison(&mut self) -> Result<Comparison, ParseError> {
        let left = self.parse_expr()?;
        if !self.cursor.current_kind().is_comparison() {
            let token = self.cursor.current();
            if let TokenKind::Error(text) = &token.kind {
                return Err(ParseError::invalid_character(text, token.span));
            }
            return Err(ParseError::new(
                ErrorCode::E1006,
                format!(
                    "expected comparison operator, found {}",
                    token.kind.display_name()
                ),
                token.span,
            ));
        }
        let op = self.cursor.advance().clone();
        self.cursor.skip_newlines();
        let right = self.parse_expr()?;
        Ok(Comparison {
            span: left.span().merge(right.span()),
            left,
            op,
            right,
        })
    }
}
