//! Centralized limits for tree and symbol walks.
//!
//! None of the helpers in this workspace cache anything between calls, so every
//! query re-walks the structures it was handed. These limits bound those walks
//! when the input is malformed (a parent cycle in a hand-built arena, or a
//! cyclic `extends` graph that the checker would normally have rejected).

/// Maximum nesting depth of the heritage walk.
///
/// Each `extends`/`implements` reference whose declaration has its own heritage
/// clauses adds one level. Real class hierarchies rarely exceed a dozen levels;
/// only a cyclic graph reaches this bound.
///
/// # TypeScript example
///
/// ```typescript
/// // Accepted by the walk (depth 3):
/// class A { a = 1; }
/// class B extends A { b = 2; }
/// class C extends B { c = 3; }
///
/// // Rejected by the checker, but a corrupted oracle could still report it;
/// // the walk stops with `HeritageTooDeep` instead of overflowing the stack:
/// interface I extends J {}
/// interface J extends I {}
/// ```
pub const MAX_HERITAGE_DEPTH: u32 = 256;

/// Maximum number of steps when following parent links upward.
///
/// Used by the export/ambient context walks and by `parent_chain`. A
/// well-formed tree terminates at its `SourceFile` long before this.
pub const MAX_TREE_WALK_ITERATIONS: u32 = 10_000;

/// Maximum pre-allocation for node arenas built from external input.
pub const MAX_NODE_PREALLOC: usize = 5_000_000;
