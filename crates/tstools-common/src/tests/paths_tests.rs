use crate::paths::*;

#[test]
fn extension_must_be_strict_suffix() {
    assert!(file_extension_is("a.ts", ".ts"));
    assert!(!file_extension_is(".ts", ".ts"));
    assert!(!file_extension_is("a.js", ".ts"));
}

#[test]
fn supported_source_file_names() {
    assert!(is_supported_source_file_name("src/index.ts"));
    assert!(is_supported_source_file_name("view.tsx"));
    assert!(is_supported_source_file_name("lib.d.ts"));
    assert!(!is_supported_source_file_name("main.js"));
    assert!(!is_supported_source_file_name(""));
}

#[test]
fn normalizes_backslashes() {
    assert_eq!(normalize_slashes(r"C:\src\app.ts"), "C:/src/app.ts");
    assert_eq!(normalize_slashes("already/fine.ts"), "already/fine.ts");
}

#[test]
fn output_extension_rewrites_first_ts() {
    assert_eq!(output_extension("app.ts"), "app.js");
    assert_eq!(output_extension("view.tsx"), "view.jsx");
    assert_eq!(output_extension("types.d.ts"), "types.d.js");
}
