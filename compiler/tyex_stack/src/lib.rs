//! Stack growth for recursive tree walks.
//!
//! Type checking, evaluation and rendering all recurse once per tree level.
//! A left-leaning chain built with `+` in a loop is as deep as it is long,
//! so each level goes through [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: passthrough.

/// Grow when less than this much stack is left (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
///
/// ```text
/// fn depth(expr: &Expr) -> usize {
///     ensure_sufficient_stack(|| match expr {
///         Expr::Variable(_) => 1,
///         Expr::Addition(add) => 1 + depth(add.left()).max(depth(add.right())),
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
