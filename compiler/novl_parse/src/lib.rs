//! Recursive descent parser for Novlangue.
//!
//! Turns a [`TokenList`] into the concrete parse tree of [`tree`]. The
//! parser is hand-written, stops at the first error, and uses cursor
//! snapshots for the one place the grammar needs to look past newlines
//! (`else` / `elseif` after an `if` block's closing brace).

mod cursor;
mod error;
mod grammar;
pub mod tree;

pub use cursor::Cursor;
pub use error::ParseError;

use novl_ir::TokenList;
use tracing::debug;

/// Parse a whole token stream.
pub fn parse(tokens: &TokenList) -> Result<tree::Top, ParseError> {
    let mut parser = Parser::new(tokens);
    let top = parser.parse_program()?;
    debug!(statements = top.stmts.len(), "parsed program");
    Ok(top)
}

/// Lex and parse source text.
pub fn parse_source(source: &str) -> Result<tree::Top, ParseError> {
    parse(&novl_lexer::lex(source))
}

/// Saved cursor position for speculative parsing.
#[derive(Copy, Clone, Debug)]
pub struct ParserSnapshot {
    position: usize,
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    pub fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            position: self.cursor.position(),
        }
    }

    pub fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.position);
    }
}

#[cfg(test)]
mod tests;
