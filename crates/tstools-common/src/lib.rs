//! Common types and utilities for the tstools crates.
//!
//! This crate provides foundational types used across all tstools crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, `DiagnosticMessage`)
//!   and the message catalogue
//! - Centralized limits for tree walks and heritage recursion
//! - Source file path helpers
//! - The `debug` assertion primitive

// Diagnostic records and message formatting
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, DiagnosticRelatedInformation,
    create_diagnostic, diagnostic_messages, format_message,
};

// Centralized limits and thresholds
pub mod limits;

// File name and extension helpers
pub mod paths;

// Internal precondition checks
pub mod debug;

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
#[cfg(test)]
#[path = "tests/paths_tests.rs"]
mod paths_tests;
#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod debug_tests;
