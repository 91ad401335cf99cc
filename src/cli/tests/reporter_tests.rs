use super::reporter::Reporter;
use tstools_common::diagnostics::{Diagnostic, create_diagnostic, diagnostic_messages};

#[test]
fn global_diagnostic_has_no_location() {
    let reporter = Reporter::new(false);
    let diagnostic = create_diagnostic(&diagnostic_messages::CANNOT_READ_PROJECT_PATH_0, &["app"]);

    assert_eq!(
        reporter.format_diagnostic(&diagnostic),
        "error TS6064: Cannot read project path 'app'."
    );
}

#[test]
fn file_diagnostic_is_prefixed_with_its_location() {
    let reporter = Reporter::new(false);
    let diagnostic = Diagnostic::error(
        "src/a.ts".to_string(),
        12,
        3,
        "Something went wrong.".to_string(),
        5014,
    )
    .with_related(String::new(), 0, 0, "See the config.".to_string());

    assert_eq!(
        reporter.format_diagnostic(&diagnostic),
        "src/a.ts:12 - error TS5014: Something went wrong.\n  Related: <global> - See the config."
    );
}

#[test]
fn render_joins_and_summary_counts_errors() {
    let reporter = Reporter::new(false);
    let one = create_diagnostic(&diagnostic_messages::CANNOT_READ_FILE_0, &["a.json"]);
    let two = create_diagnostic(&diagnostic_messages::CANNOT_READ_FILE_0, &["b.json"]);

    assert_eq!(
        reporter.render(&[one.clone(), two.clone()]),
        "error TS5083: Cannot read file 'a.json'.\nerror TS5083: Cannot read file 'b.json'."
    );
    assert_eq!(reporter.summary(std::slice::from_ref(&one)), "Found 1 error.");
    assert_eq!(reporter.summary(&[one, two]), "Found 2 errors.");
}

#[test]
fn colored_output_keeps_the_text() {
    colored::control::set_override(true);
    let reporter = Reporter::new(true);
    let diagnostic = create_diagnostic(&diagnostic_messages::CANNOT_READ_FILE_0, &["a.json"]);

    let rendered = reporter.format_diagnostic(&diagnostic);
    assert!(rendered.contains("\u{1b}["), "{rendered:?}");
    assert!(rendered.contains("TS5083"));
    assert!(rendered.contains("Cannot read file 'a.json'."));
}
