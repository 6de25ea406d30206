//! Functions and the top-level program.

use std::fmt;

use super::{Body, Node};
use crate::ValType;

/// Function parameter: `name: Type`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Param {
    pub name: String,
    pub ty: ValType,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: ValType) -> Self {
        Param {
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: ValType,
    pub body: Body,
}

impl FunctionDef {
    pub fn param_types(&self) -> Vec<ValType> {
        self.params.iter().map(|p| p.ty).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Node>,
}

/// Top-level container for one compilation unit or one REPL line.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Node>,
}
