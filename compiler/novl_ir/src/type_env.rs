//! Type lookups available while building the AST.

use crate::ValType;

/// Source of already-known variable and function types.
///
/// The AST builder asks this for names it has not seen declared in the
/// unit it is building, such as bindings made on an earlier REPL line.
pub trait TypeEnv {
    /// Type of a variable or parameter, if bound.
    fn variable_type(&self, name: &str) -> Option<ValType>;

    /// Return type of the function with this mangled name, if defined.
    fn function_return_type(&self, mangled: &str) -> Option<ValType>;
}

/// An environment with no bindings.
#[derive(Copy, Clone, Debug, Default)]
pub struct EmptyTypeEnv;

impl TypeEnv for EmptyTypeEnv {
    fn variable_type(&self, _name: &str) -> Option<ValType> {
        None
    }

    fn function_return_type(&self, _mangled: &str) -> Option<ValType> {
        None
    }
}
