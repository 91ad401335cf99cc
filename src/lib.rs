//! tstools: structural queries over a TypeScript AST and symbol table.
//!
//! The work happens in the member crates; this package re-exports them and
//! adds the pieces a command-line tool needs (tracing setup, project config
//! loading, the `tstools` binary).

// Shared diagnostics, limits and path helpers
pub use tstools_common as common;
pub use tstools_common::diagnostics;
pub use tstools_common::limits;

// AST model
pub use tstools_syntax as syntax;
pub use tstools_syntax::{Node, NodeArena, NodeIndex, NodeList, SyntaxKind};

// Symbol model
pub use tstools_binder as binder;
pub use tstools_binder::{BinderState, Symbol, SymbolId};

// Node classifier and heritage resolver
pub use tstools_analysis as analysis;
pub use tstools_analysis::{
    AnalysisError, ContainerFlags, DeclSpec, HeritageResolver, ModifierFlags, ProgramBuilder,
    ProgramSnapshot, TypeResolver, container_flags, identifier_uid, is_ambient_context,
    is_export_context, modifier_flags,
};

// Tracing configuration (text / tree / JSON output for debugging)
pub mod tracing_config;

// Native CLI
pub mod cli;
