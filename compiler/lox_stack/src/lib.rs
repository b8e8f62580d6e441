//! Stack growth for deeply nested Lox programs.
//!
//! Both the recursive-descent parser and the tree-walking evaluator recurse
//! once per nesting level of the source (`((((1))))`, `{ { { } } }`, long
//! `else if` chains). Wrapping their recursive entry points in
//! [`ensure_sufficient_stack`] keeps a pathological script from aborting the
//! host process with a native stack overflow.
//!
//! On native targets the stack is grown on demand through `stacker`; on
//! `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn execute(&mut self, stmt: &Stmt) -> ExecResult {
///     ensure_sufficient_stack(|| self.execute_inner(stmt))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
