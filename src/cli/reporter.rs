use colored::Colorize;

use tstools_common::diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation};

/// Renders diagnostics the way `tsc` prints them, optionally colored.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    /// `file:start - error TS6064: message`, or without the location for
    /// global diagnostics.
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let category = self.format_category(diagnostic.category);
        let code = self.format_code(diagnostic.code);

        let mut output = String::new();
        if let Some(location) = self.format_location(&diagnostic.file, diagnostic.start) {
            output.push_str(&location);
            output.push_str(" - ");
        }

        output.push_str(&category);
        if !code.is_empty() {
            output.push(' ');
            output.push_str(&code);
        }
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        for related in &diagnostic.related_information {
            output.push('\n');
            output.push_str(&self.format_related(related));
        }

        output
    }

    /// `Found 1 error.` / `Found 3 errors.`
    pub fn summary(&self, diagnostics: &[Diagnostic]) -> String {
        let count = diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count();
        let noun = if count == 1 { "error" } else { "errors" };
        format!("Found {count} {noun}.")
    }

    fn format_related(&self, related: &DiagnosticRelatedInformation) -> String {
        let location = self
            .format_location(&related.file, related.start)
            .unwrap_or_else(|| "<global>".to_string());
        let prefix = if self.color {
            "  Related".dimmed().to_string()
        } else {
            "  Related".to_string()
        };

        format!("{}: {} - {}", prefix, location, related.message_text)
    }

    fn format_location(&self, file: &str, offset: u32) -> Option<String> {
        if file.is_empty() {
            return None;
        }
        let location = format!("{file}:{offset}");
        if self.color {
            Some(location.cyan().to_string())
        } else {
            Some(location)
        }
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.as_str();

        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        if code == 0 {
            return String::new();
        }

        let label = format!("TS{}", code);
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }
}
