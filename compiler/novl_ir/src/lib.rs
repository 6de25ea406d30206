//! Novlangue IR - shared front-end types
//!
//! This crate contains the data structures every other compiler stage
//! agrees on:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - `ValType`, the three value types of the language
//! - AST nodes (`Node`, `ValRef`, `Conditional`, ...)
//! - Function-name mangling by parameter types
//!
//! Nothing in here knows about IR handles or parse-tree types; the node
//! model is pure data.

pub mod ast;
mod mangle;
mod span;
mod token;
mod ty;
mod type_env;

pub use ast::{
    BinaryKind, BinaryOp, Body, CompareKind, Comparison, ComparisonOp, Conditional,
    FloatPredicate, FunctionCall, FunctionDef, IntPredicate, Node, NumberLiteral, Param,
    Program, StringLiteral, UnaryNegate, ValRef,
};
pub use mangle::mangle;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use ty::ValType;
pub use type_env::{EmptyTypeEnv, TypeEnv};
