//! Stack growth for the recursive passes.
//!
//! The parser, the AST builder and the lowering engine all recurse once per
//! nesting level of the source (parenthesized expressions, nested `if`
//! bodies, negations). [`with_stack`] wraps those recursion points so a
//! pathological input grows the stack instead of overflowing it.

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
