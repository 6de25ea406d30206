//! Lexer for Novlangue using logos.
//!
//! Produces a [`TokenList`] ending in `Eof`. Horizontal whitespace and
//! `//` comments are skipped; newlines are tokens because they separate
//! statements, except inside parentheses where they are dropped.

mod raw_token;

use logos::Logos;
use novl_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use raw_token::RawToken;

/// Lex source text into tokens.
///
/// Unrecognized characters become [`TokenKind::Error`] tokens; the parser
/// reports them.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);
    let mut paren_depth: usize = 0;

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let kind = match token_result {
            Ok(RawToken::Newline) if paren_depth > 0 => continue,
            Ok(raw) => {
                match raw {
                    RawToken::LParen => paren_depth += 1,
                    RawToken::RParen => paren_depth = paren_depth.saturating_sub(1),
                    _ => {}
                }
                match convert(raw, slice) {
                    Some(kind) => kind,
                    None => continue,
                }
            }
            Err(()) => TokenKind::Error(slice.to_string()),
        };
        result.push(Token::new(kind, span));
    }

    let end = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, end));
    trace!(tokens = result.len(), "lexed source");
    result
}

/// `None` for trivia.
fn convert(raw: RawToken, slice: &str) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Int => TokenKind::Int(slice.to_string()),
        RawToken::Float => TokenKind::Float(slice.to_string()),
        RawToken::Str => TokenKind::Str(slice.to_string()),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),
        RawToken::Val => TokenKind::Val,
        RawToken::Fun => TokenKind::Fun,
        RawToken::If => TokenKind::If,
        RawToken::Elseif => TokenKind::Elseif,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Newline => TokenKind::Newline,
        RawToken::LineComment => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests;
