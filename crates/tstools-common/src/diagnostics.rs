//! Diagnostic types and message formatting.
//!
//! The helpers in this crate never attach a diagnostic to a source location on
//! their own: project-level failures (unreadable config, no inputs) are reported
//! with an empty `file` and zero span, the same shape `tsc` uses for global
//! diagnostics.

use serde::Serialize;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

impl DiagnosticCategory {
    /// Lower-case name as printed by `tsc` (`error TS6064: ...`).
    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        }
    }
}

/// Related information for a diagnostic (e.g., "see also" locations).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRelatedInformation {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

/// A diagnostic record with optional related information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(file: String, start: u32, length: u32, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
            related_information: Vec::new(),
        }
    }

    /// Add related information to this diagnostic.
    #[must_use]
    pub fn with_related(mut self, file: String, start: u32, length: u32, message: String) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Message,
            code: 0,
        });
        self
    }

    /// True when this diagnostic is not tied to a file.
    pub fn is_global(&self) -> bool {
        self.file.is_empty()
    }
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
///
/// Placeholders without a matching argument are left untouched.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Build a file-less diagnostic from a catalogue message.
///
/// When `args` is empty the template text is used verbatim.
#[must_use]
pub fn create_diagnostic(message: &DiagnosticMessage, args: &[&str]) -> Diagnostic {
    let text = if args.is_empty() {
        message.message.to_string()
    } else {
        format_message(message.message, args)
    };

    Diagnostic {
        file: String::new(),
        start: 0,
        length: 0,
        message_text: text,
        category: message.category,
        code: message.code,
        related_information: Vec::new(),
    }
}

/// Look up a catalogue entry by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    diagnostic_messages::ALL.iter().copied().find(|m| m.code == code)
}

// =============================================================================
// Message Catalogue
// =============================================================================

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage};

    pub const FAILED_TO_PARSE_FILE_0_COLON_1: DiagnosticMessage = DiagnosticMessage {
        code: 5014,
        category: DiagnosticCategory::Error,
        message: "Failed to parse file '{0}': {1}.",
    };

    pub const CANNOT_READ_FILE_0: DiagnosticMessage = DiagnosticMessage {
        code: 5083,
        category: DiagnosticCategory::Error,
        message: "Cannot read file '{0}'.",
    };

    pub const CANNOT_READ_PROJECT_PATH_0: DiagnosticMessage = DiagnosticMessage {
        code: 6064,
        category: DiagnosticCategory::Error,
        message: "Cannot read project path '{0}'.",
    };

    pub const CIRCULARITY_DETECTED_WHILE_RESOLVING_CONFIGURATION_0: DiagnosticMessage =
        DiagnosticMessage {
            code: 18000,
            category: DiagnosticCategory::Error,
            message: "Circularity detected while resolving configuration: {0}",
        };

    pub const NO_INPUTS_WERE_FOUND_IN_CONFIG_FILE_0: DiagnosticMessage = DiagnosticMessage {
        code: 18003,
        category: DiagnosticCategory::Error,
        message: "No inputs were found in config file '{0}'. Specified 'include' paths were '{1}' and 'exclude' paths were '{2}'.",
    };

    pub(crate) const ALL: &[&DiagnosticMessage] = &[
        &FAILED_TO_PARSE_FILE_0_COLON_1,
        &CANNOT_READ_FILE_0,
        &CANNOT_READ_PROJECT_PATH_0,
        &CIRCULARITY_DETECTED_WHILE_RESOLVING_CONFIGURATION_0,
        &NO_INPUTS_WERE_FOUND_IN_CONFIG_FILE_0,
    ];
}
