//! Structural queries over an already-parsed, already-checked TypeScript program.
//!
//! Two groups of operations live here:
//!
//! - the node classifier ([`modifiers`], [`container`], [`predicates`]) answers
//!   questions about a single node: its syntactic modifiers, whether it opens a
//!   scope or a control-flow region, whether it is function-like or an alias;
//! - the heritage resolver ([`heritage`]) walks `extends`/`implements` clauses
//!   through a [`TypeResolver`] and collects inherited member symbols.
//!
//! [`symbols`] holds the symbol-level predicates both groups share (export and
//! ambient context walks, identity tags).
//!
//! Nothing is cached: every call re-derives its answer from the arena, binder
//! and resolver it is given, and nothing here mutates them.

pub mod container;
pub use container::{ContainerFlags, container_flags};

pub mod modifiers;
pub use modifiers::{ModifierFlags, modifier_flags, modifier_to_flag, modifiers_to_flags};

pub mod predicates;

pub mod symbols;
pub use symbols::{identifier_uid, is_ambient_context, is_export_context};

pub mod oracle;
pub use oracle::{TypeId, TypeResolver};

pub mod heritage;
pub use heritage::HeritageResolver;

pub mod error;
pub use error::AnalysisError;

pub mod snapshot;
pub use snapshot::{ProgramSnapshot, TypeEntry, TypeTable};

pub mod builder;
pub use builder::{DeclSpec, ProgramBuilder};

#[cfg(test)]
#[path = "tests/modifiers_tests.rs"]
mod modifiers_tests;

#[cfg(test)]
#[path = "tests/container_tests.rs"]
mod container_tests;

#[cfg(test)]
#[path = "tests/predicates_tests.rs"]
mod predicates_tests;
