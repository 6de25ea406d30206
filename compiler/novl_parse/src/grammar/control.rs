//! Functions, if-chains and loops.

use novl_ir::TokenKind;
use novl_stack::with_stack;

use crate::tree::{CondClause, FunDef, IfBlock, ParamDecl, WhileLoop};
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `fun name(a: T, ...)[: T] { ... }`
    pub(crate) fn parse_fun_def(&mut self) -> Result<FunDef, ParseError> {
        let start = self.cursor.advance().span;
        let name = self.parse_ident()?;
        self.cursor.expect(&TokenKind::LParen, "`(`")?;
        let mut params = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                let param = self.parse_ident()?;
                self.cursor.expect(&TokenKind::Colon, "`:`")?;
                let ty = self.parse_type_name()?;
                params.push(ParamDecl { name: param, ty });
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(&TokenKind::RParen, "`)`")?;
        let return_type = if self.cursor.eat(&TokenKind::Colon) {
            Some(self.parse_type_name()?)
        } else {
            None
        };
        let body = with_stack(|| self.parse_block())?;
        Ok(FunDef {
            span: start.merge(body.span),
            name,
            params,
            return_type,
            body,
        })
    }

    /// `if c { } (elseif c { } | else if c { })* (else { })?`
    ///
    /// The continuation keywords may sit on the line after the closing
    /// brace; if what follows the newlines is not one, the newlines are
    /// left for the statement list.
    pub(crate) fn parse_if_block(&mut self) -> Result<IfBlock, ParseError> {
        let start = self.cursor.advance().span;
        let if_clause = self.parse_cond_clause()?;
        let mut else_ifs = Vec::new();
        let mut else_block = None;

        loop {
            let snapshot = self.snapshot();
            self.cursor.skip_newlines();
            if self.cursor.eat(&TokenKind::Elseif) {
                else_ifs.push(self.parse_cond_clause()?);
            } else if self.cursor.eat(&TokenKind::Else) {
                if self.cursor.eat(&TokenKind::If) {
                    else_ifs.push(self.parse_cond_clause()?);
                } else {
                    else_block = Some(with_stack(|| self.parse_block())?);
                    break;
                }
            } else {
                self.restore(snapshot);
                break;
            }
        }

        Ok(IfBlock {
            span: start.merge(self.cursor.previous_span()),
            if_clause,
            else_ifs,
            else_block,
        })
    }

    /// `while c { }`
    pub(crate) fn parse_while(&mut self) -> Result<WhileLoop, ParseError> {
        let start = self.cursor.advance().span;
        let comparison = self.parse_comparison()?;
        let body = with_stack(|| self.parse_block())?;
        Ok(WhileLoop {
            span: start.merge(body.span),
            comparison,
            body,
        })
    }

    fn parse_cond_clause(&mut self) -> Result<CondClause, ParseError> {
        let comparison = self.parse_comparison()?;
        let block = with_stack(|| self.parse_block())?;
        Ok(CondClause { comparison, block })
    }
}
