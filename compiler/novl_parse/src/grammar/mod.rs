//! Grammar productions, split by area.

mod control;
mod expr;

use novl_diagnostic::ErrorCode;
use novl_ir::TokenKind;
use tracing::trace;

use crate::tree::{Assignment, Ident, Stmt, Top, TypeName, ValDec, ValDef};
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `top` at the outermost level: statements until `Eof`.
    pub fn parse_program(&mut self) -> Result<Top, ParseError> {
        let top = self.parse_statements(&TokenKind::Eof)?;
        if !self.cursor.is_at_end() {
            return Err(ParseError::unexpected(
                "end of input",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        Ok(top)
    }

    /// Separator-delimited statements up to (not including) `end`.
    fn parse_statements(&mut self, end: &TokenKind) -> Result<Top, ParseError> {
        let start = self.cursor.current_span();
        let mut stmts = Vec::new();
        self.cursor.skip_separators();
        while !self.cursor.check(end) && !self.cursor.is_at_end() {
            stmts.push(self.parse_stmt()?);
            let separated = self.cursor.skip_separators();
            if !separated && !self.cursor.check(end) && !self.cursor.is_at_end() {
                return Err(ParseError::unexpected(
                    "newline or `;`",
                    self.cursor.current_kind(),
                    self.cursor.current_span(),
                ));
            }
        }
        let span = start.merge(self.cursor.previous_span());
        Ok(Top { stmts, span })
    }

    /// `block := '{' top '}'`, allowing newlines before the brace.
    fn parse_block(&mut self) -> Result<Top, ParseError> {
        self.cursor.skip_newlines();
        let open = self.cursor.expect(&TokenKind::LBrace, "`{`")?.span;
        let mut body = self.parse_statements(&TokenKind::RBrace)?;
        if !self.cursor.check(&TokenKind::RBrace) {
            return Err(ParseError::new(
                ErrorCode::E1003,
                "unclosed `{`",
                open.merge(self.cursor.current_span()),
            ));
        }
        let close = self.cursor.advance().span;
        body.span = open.merge(close);
        Ok(body)
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        trace!(token = ?self.cursor.current_kind(), "statement");
        match self.cursor.current_kind() {
            TokenKind::Val => self.parse_val(),
            TokenKind::Fun => self.parse_fun_def().map(Stmt::FunDef),
            TokenKind::If => self.parse_if_block().map(Stmt::IfBlock),
            TokenKind::While => self.parse_while().map(Stmt::While),
            TokenKind::Ident(_) if self.cursor.peek_kind() == &TokenKind::Eq => {
                self.parse_assignment().map(Stmt::Assignment)
            }
            _ => self.parse_expr().map(Stmt::Expr),
        }
    }

    /// `val_dec` or `val_def`.
    fn parse_val(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.advance().span;
        let name = self.parse_ident()?;
        let ty = if self.cursor.eat(&TokenKind::Colon) {
            Some(self.parse_type_name()?)
        } else {
            None
        };
        let dec = ValDec {
            span: start.merge(self.cursor.previous_span()),
            name,
            ty,
        };
        if !self.cursor.eat(&TokenKind::Eq) {
            return Ok(Stmt::ValDec(dec));
        }
        self.cursor.skip_newlines();
        let value = self.parse_expr()?;
        Ok(Stmt::ValDef(ValDef {
            span: start.merge(value.span()),
            dec,
            value,
        }))
    }

    fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let name = self.parse_ident()?;
        self.cursor.expect(&TokenKind::Eq, "`=`")?;
        self.cursor.skip_newlines();
        let value = self.parse_expr()?;
        Ok(Assignment {
            span: name.span.merge(value.span()),
            name,
            value,
        })
    }

    fn parse_ident(&mut self) -> Result<Ident, ParseError> {
        let token = self.cursor.current();
        match &token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(Ident {
                    name: name.clone(),
                    span: token.span,
                })
            }
            TokenKind::Error(text) => Err(ParseError::invalid_character(text, token.span)),
            other => Err(ParseError::new(
                ErrorCode::E1004,
                format!("expected identifier, found {}", other.display_name()),
                token.span,
            )),
        }
    }

    /// A type name. Whether it names a real type is checked later.
    fn parse_type_name(&mut self) -> Result<TypeName, ParseError> {
        let token = self.cursor.current();
        if let TokenKind::Ident(name) = &token.kind {
            self.cursor.advance();
            return Ok(TypeName {
                name: name.clone(),
                span: token.span,
            });
        }
        Err(ParseError::new(
            ErrorCode::E1005,
            format!("expected type name, found {}", token.kind.display_name()),
            token.span,
        ))
    }
}
