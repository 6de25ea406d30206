//! Function-name mangling.
//!
//! Functions are keyed by their name plus the types of their parameters, so
//! `fun f(x: Int)` and `fun f(x: Double)` can coexist. Definitions mangle
//! with the declared parameter types, calls with the argument types.

use crate::ValType;

/// Mangle `name` with `types`: `NAME_TYPE1_TYPE2...`, upper-cased.
///
/// A function with no parameters mangles to its upper-cased name.
pub fn mangle(name: &str, types: &[ValType]) -> String {
    let mut mangled = name.to_uppercase();
    for ty in types {
        mangled.push('_');
        mangled.push_str(ty.mangle_tag());
    }
    mangled
}
