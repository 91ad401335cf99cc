//! Source file name helpers.

/// Extensions accepted as compilation inputs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".d.ts"];

/// Extensions that identify module files.
pub const MODULE_FILE_EXTENSIONS: &[&str] = SUPPORTED_EXTENSIONS;

/// True when `path` ends with `extension` and is longer than it.
///
/// A bare `".ts"` is not a TypeScript file name.
pub fn file_extension_is(path: &str, extension: &str) -> bool {
    path.len() > extension.len() && path.ends_with(extension)
}

/// True for `.ts`, `.tsx` and `.d.ts` file names.
pub fn is_supported_source_file_name(file_name: &str) -> bool {
    if file_name.is_empty() {
        return false;
    }

    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| file_extension_is(file_name, ext))
}

/// Convert backslashes to forward slashes.
pub fn normalize_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Map a TypeScript input name to its JavaScript output name.
///
/// Only the first `.ts` occurrence is rewritten, so `foo.tsx` becomes `foo.jsx`
/// and `foo.d.ts` becomes `foo.d.js`.
pub fn output_extension(path: &str) -> String {
    path.replacen(".ts", ".js", 1)
}
