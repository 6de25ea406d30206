//! Value types of the language.

use std::fmt;

/// The three value types a Novlangue expression can have.
///
/// `Int` is a 32-bit signed integer, `Double` a 64-bit float and `String`
/// a pointer to NUL-terminated bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ValType {
    #[default]
    Int,
    Double,
    String,
}

impl ValType {
    /// Parse a type name as written in source.
    ///
    /// Matching is case-insensitive: `Int`, `int` and `INT` all name
    /// [`ValType::Int`].
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("int") {
            Some(ValType::Int)
        } else if name.eq_ignore_ascii_case("double") {
            Some(ValType::Double)
        } else if name.eq_ignore_ascii_case("string") {
            Some(ValType::String)
        } else {
            None
        }
    }

    /// Tag used when mangling function names.
    pub const fn mangle_tag(self) -> &'static str {
        match self {
            ValType::Int => "INT",
            ValType::Double => "DOUBLE",
            ValType::String => "STRING",
        }
    }

    /// Source-level spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            ValType::Int => "Int",
            ValType::Double => "Double",
            ValType::String => "String",
        }
    }
}

impl fmt::Display for ValType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
