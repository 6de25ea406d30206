//! AST construction.
//!
//! Walks the concrete parse tree from `novl_parse` and produces one
//! [`Node`] per construct, recursively:
//!
//! - declarations without a type annotation are `Int`
//! - string literals lose their quotes
//! - the last bare expression of a block becomes the body's tail
//!   expression (implicit return)
//! - if/elseif/else chains and `while` loops become [`Conditional`]s
//! - comparisons fix their integer or float family from the left
//!   operand's type, resolved here and never re-derived
//!
//! Types are resolved against the declarations seen so far in the unit,
//! then the [`TypeEnv`] the builder was created with (bindings from
//! earlier REPL lines).
//!
//! [`Conditional`]: novl_ir::Conditional

mod error;
mod expr;
mod scope;
mod stmt;

pub use error::BuildError;

use novl_ir::{Node, Program, TypeEnv};
use novl_parse::tree::Top;
use tracing::debug;

use scope::TypeScope;

/// Builds AST nodes from parse-tree nodes.
pub struct AstBuilder<'env> {
    scope: TypeScope<'env>,
}

impl<'env> AstBuilder<'env> {
    pub fn new(env: &'env dyn TypeEnv) -> Self {
        AstBuilder {
            scope: TypeScope::new(env),
        }
    }

    /// Build a whole unit into a `Node::Program`.
    pub fn build_program(&mut self, top: &Top) -> Result<Node, BuildError> {
        let statements = top
            .stmts
            .iter()
            .map(|stmt| self.build_stmt(stmt))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(statements = statements.len(), "built program");
        Ok(Node::Program(Program { statements }))
    }
}

/// Build `top` against `env`.
pub fn build(top: &Top, env: &dyn TypeEnv) -> Result<Node, BuildError> {
    AstBuilder::new(env).build_program(top)
}

#[cfg(test)]
mod tests;
