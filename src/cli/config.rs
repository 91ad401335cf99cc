//! Project configuration: `tsconfig.json` loading and input file discovery.
//!
//! [`load_tsconfig`] reads a config file, strips JSONC comments and trailing
//! commas, and follows `extends` chains (child settings win). On top of that
//! [`get_project_config`] resolves the project's input files and reports every
//! failure as a [`Diagnostic`] instead of an error.

use anyhow::{Context, Result, anyhow};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};
use tstools_common::diagnostics::{Diagnostic, create_diagnostic, diagnostic_messages};
use tstools_common::paths::{is_supported_source_file_name, normalize_slashes};
use walkdir::WalkDir;

/// Include pattern used when a config names neither `files` nor `include`.
pub const DEFAULT_INCLUDE: &str = "**/*";

/// Exclude patterns used when a config has no `exclude` (plus its `outDir`).
pub const DEFAULT_EXCLUDE: &[&str] = &["node_modules", "bower_components", "jspm_packages"];

/// Package directories never entered by wildcard includes, at any depth.
const IMPLICITLY_EXCLUDED_DIRECTORIES: &[&str] =
    &["node_modules", "bower_components", "jspm_packages"];

/// Accepts both `true` and `"true"` for boolean options.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<CompilerOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

/// The compiler options this tool reads or reports. Unknown options are
/// ignored.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_bool_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub declaration: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_bool_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub strict: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_bool_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub no_emit: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_bool_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub experimental_decorators: Option<bool>,
}

/// Result of [`get_project_config`].
///
/// `options` is `None` when the config itself could not be read; `errors`
/// then holds the reason and `file_names` is empty.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommandLine {
    pub options: Option<CompilerOptions>,
    pub file_names: Vec<String>,
    pub errors: Vec<Diagnostic>,
}

impl ParsedCommandLine {
    fn failed(error: Diagnostic) -> Self {
        ParsedCommandLine {
            options: None,
            file_names: Vec::new(),
            errors: vec![error],
        }
    }
}

/// Root causes of a config load failure, recovered from the `anyhow` chain
/// when the failure is turned into a diagnostic.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("circularity detected while resolving configuration: {path}")]
    Circular { path: String },
}

impl ConfigError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ConfigError::Read { path, .. } => {
                create_diagnostic(&diagnostic_messages::CANNOT_READ_FILE_0, &[path.as_str()])
            }
            ConfigError::Parse { path, message } => create_diagnostic(
                &diagnostic_messages::FAILED_TO_PARSE_FILE_0_COLON_1,
                &[path.as_str(), message.as_str()],
            ),
            ConfigError::Circular { path } => create_diagnostic(
                &diagnostic_messages::CIRCULARITY_DETECTED_WHILE_RESOLVING_CONFIGURATION_0,
                &[path.as_str()],
            ),
        }
    }
}

pub fn parse_tsconfig(source: &str) -> Result<TsConfig> {
    let stripped = strip_jsonc(source);
    let normalized = remove_trailing_commas(&stripped);
    let config = serde_json::from_str(&normalized).context("failed to parse tsconfig JSON")?;
    Ok(config)
}

pub fn load_tsconfig(path: &Path) -> Result<TsConfig> {
    let mut visited = HashSet::new();
    load_tsconfig_inner(path, &mut visited)
}

fn load_tsconfig_inner(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<TsConfig> {
    let display_path = normalize_slashes(&path.to_string_lossy());
    let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical.clone()) {
        return Err(ConfigError::Circular { path: display_path }.into());
    }

    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display_path.clone(),
        source,
    })?;
    let mut config = parse_tsconfig(&source).map_err(|err| ConfigError::Parse {
        path: display_path.clone(),
        message: format!("{:#}", err),
    })?;

    if let Some(extends_path) = config.extends.take() {
        let base_path = resolve_extends_path(path, &extends_path)?;
        debug!(config = %display_path, base = %base_path.display(), "following extends");
        let base_config = load_tsconfig_inner(&base_path, visited)
            .with_context(|| format!("while resolving extends of {display_path}"))?;
        config = merge_configs(base_config, config);
    }

    visited.remove(&canonical);
    Ok(config)
}

fn resolve_extends_path(current_path: &Path, extends: &str) -> Result<PathBuf> {
    let base_dir = current_path
        .parent()
        .ok_or_else(|| anyhow!("tsconfig has no parent directory"))?;
    // `./tsconfig.base` names `./tsconfig.base.json`.
    let candidate = if extends.ends_with(".json") {
        PathBuf::from(extends)
    } else {
        PathBuf::from(format!("{extends}.json"))
    };

    if candidate.is_absolute() {
        Ok(candidate)
    } else {
        Ok(base_dir.join(candidate))
    }
}

fn merge_configs(base: TsConfig, mut child: TsConfig) -> TsConfig {
    let merged_compiler_options = match (base.compiler_options, child.compiler_options.take()) {
        (Some(base_opts), Some(child_opts)) => Some(merge_compiler_options(base_opts, child_opts)),
        (Some(base_opts), None) => Some(base_opts),
        (None, Some(child_opts)) => Some(child_opts),
        (None, None) => None,
    };

    TsConfig {
        extends: None,
        compiler_options: merged_compiler_options,
        include: child.include.or(base.include),
        exclude: child.exclude.or(base.exclude),
        files: child.files.or(base.files),
    }
}

fn merge_compiler_options(base: CompilerOptions, child: CompilerOptions) -> CompilerOptions {
    CompilerOptions {
        target: child.target.or(base.target),
        module: child.module.or(base.module),
        module_resolution: child.module_resolution.or(base.module_resolution),
        lib: child.lib.or(base.lib),
        root_dir: child.root_dir.or(base.root_dir),
        out_dir: child.out_dir.or(base.out_dir),
        declaration: child.declaration.or(base.declaration),
        strict: child.strict.or(base.strict),
        no_emit: child.no_emit.or(base.no_emit),
        experimental_decorators: child.experimental_decorators.or(base.experimental_decorators),
    }
}

// =============================================================================
// Project loading
// =============================================================================

/// Load the project rooted at `config_path`.
///
/// A directory means `<dir>/tsconfig.json`. Failures never escape: an
/// unreadable path is reported as 6064, an unreadable or malformed config as
/// 5083/5014, a cyclic `extends` chain as 18000 and an empty input set as
/// 18003.
pub fn get_project_config(config_path: &Path) -> ParsedCommandLine {
    let display_path = normalize_slashes(&config_path.to_string_lossy());
    let metadata = match std::fs::metadata(config_path) {
        Ok(metadata) => metadata,
        Err(err) => {
            debug!(path = %display_path, error = %err, "cannot stat project path");
            return ParsedCommandLine::failed(create_diagnostic(
                &diagnostic_messages::CANNOT_READ_PROJECT_PATH_0,
                &[display_path.as_str()],
            ));
        }
    };

    let (config_dir, config_file) = if metadata.is_dir() {
        (config_path.to_path_buf(), config_path.join("tsconfig.json"))
    } else {
        let dir = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        (dir, config_path.to_path_buf())
    };

    let config = match load_tsconfig(&config_file) {
        Ok(config) => config,
        Err(err) => {
            debug!(config = %config_file.display(), error = %format!("{err:#}"), "config load failed");
            return ParsedCommandLine::failed(config_error_diagnostic(&err, &config_file));
        }
    };

    let options = config.compiler_options.clone().unwrap_or_default();
    let mut errors = Vec::new();
    let file_names = discover_files(&config, &options, &config_dir);

    if file_names.is_empty() {
        let include = config
            .include
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_INCLUDE.to_string()]);
        let exclude = effective_exclude(&config, &options);
        errors.push(create_diagnostic(
            &diagnostic_messages::NO_INPUTS_WERE_FOUND_IN_CONFIG_FILE_0,
            &[
                normalize_slashes(&config_file.to_string_lossy()).as_str(),
                serde_json::to_string(&include).unwrap_or_default().as_str(),
                serde_json::to_string(&exclude).unwrap_or_default().as_str(),
            ],
        ));
    }

    debug!(
        config = %config_file.display(),
        files = file_names.len(),
        errors = errors.len(),
        "loaded project"
    );
    ParsedCommandLine {
        options: Some(options),
        file_names,
        errors,
    }
}

fn config_error_diagnostic(err: &anyhow::Error, config_file: &Path) -> Diagnostic {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ConfigError>())
        .map(ConfigError::to_diagnostic)
        .unwrap_or_else(|| {
            let path = normalize_slashes(&config_file.to_string_lossy());
            create_diagnostic(&diagnostic_messages::CANNOT_READ_FILE_0, &[path.as_str()])
        })
}

fn effective_exclude(config: &TsConfig, options: &CompilerOptions) -> Vec<String> {
    if let Some(exclude) = &config.exclude {
        return exclude.clone();
    }
    let mut exclude: Vec<String> = DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect();
    if let Some(out_dir) = &options.out_dir {
        exclude.push(out_dir.clone());
    }
    exclude
}

/// Input files of a project: explicit `files` plus whatever the `include`
/// patterns match under `config_dir`, minus `exclude`. Only supported source
/// extensions are kept. Names are sorted and deduplicated.
fn discover_files(config: &TsConfig, options: &CompilerOptions, config_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for file in config.files.iter().flatten() {
        let name = join_normalized(config_dir, file);
        if is_supported_source_file_name(&name) {
            names.push(name);
        } else {
            trace!(file = %name, "skipping unsupported file");
        }
    }

    let include = match (&config.include, &config.files) {
        (Some(include), _) => include.clone(),
        (None, Some(_)) => Vec::new(),
        (None, None) => vec![DEFAULT_INCLUDE.to_string()],
    };
    if !include.is_empty() {
        let include_set = build_glob_set(&include);
        let exclude_set = build_glob_set(&effective_exclude(config, options));
        names.extend(walk_matching(config_dir, &include_set, &exclude_set));
    }

    names.sort();
    names.dedup();
    names
}

fn walk_matching(config_dir: &Path, include: &GlobSet, exclude: &GlobSet) -> Vec<String> {
    let relative_of = |path: &Path| -> Option<String> {
        let relative = path.strip_prefix(config_dir).ok()?;
        Some(normalize_slashes(&relative.to_string_lossy()))
    };

    let walker = WalkDir::new(config_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if IMPLICITLY_EXCLUDED_DIRECTORIES.contains(&name.as_ref()) {
                return false;
            }
            relative_of(entry.path()).is_none_or(|relative| !exclude.is_match(&relative))
        });

    let mut matched = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(relative) = relative_of(entry.path()) else {
            continue;
        };
        if !is_supported_source_file_name(&relative)
            || !include.is_match(&relative)
            || exclude.is_match(&relative)
        {
            continue;
        }
        trace!(file = %relative, "matched input file");
        matched.push(normalize_slashes(&entry.path().to_string_lossy()));
    }
    matched
}

/// Compile config patterns into one matcher.
///
/// A pattern without wildcards and without an extension names a directory and
/// also matches everything below it. Invalid patterns are skipped.
fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = normalize_pattern(pattern);
        if pattern.is_empty() {
            continue;
        }
        let mut expanded = vec![pattern.clone()];
        if !has_wildcard(&pattern) && Path::new(&pattern).extension().is_none() {
            expanded.push(format!("{pattern}/**/*"));
        }
        for glob in expanded {
            match GlobBuilder::new(&glob).literal_separator(true).build() {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(err) => warn!(pattern = %glob, error = %err, "ignoring invalid pattern"),
            }
        }
    }
    builder.build().unwrap_or_else(|err| {
        warn!(error = %err, "failed to compile patterns");
        GlobSet::empty()
    })
}

fn normalize_pattern(pattern: &str) -> String {
    let pattern = normalize_slashes(pattern.trim());
    let pattern = pattern.strip_prefix("./").unwrap_or(&pattern);
    pattern.trim_end_matches('/').to_string()
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?'])
}

fn join_normalized(dir: &Path, file: &str) -> String {
    let path = Path::new(file);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(file.strip_prefix("./").unwrap_or(file))
    };
    normalize_slashes(&joined.to_string_lossy())
}

// =============================================================================
// JSONC
// =============================================================================

fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    while let Some(ch) = chars.next() {
        if in_line_comment {
            if ch == '\n' {
                in_line_comment = false;
                out.push(ch);
            }
            continue;
        }

        if in_block_comment {
            if ch == '*' {
                if let Some('/') = chars.peek().copied() {
                    chars.next();
                    in_block_comment = false;
                }
            } else if ch == '\n' {
                out.push(ch);
            }
            continue;
        }

        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
            out.push(ch);
            continue;
        }

        if ch == '/'
            && let Some(&next) = chars.peek()
        {
            if next == '/' {
                chars.next();
                in_line_comment = true;
                continue;
            }
            if next == '*' {
                chars.next();
                in_block_comment = true;
                continue;
            }
        }

        out.push(ch);
    }

    out
}

fn remove_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
            out.push(ch);
            continue;
        }

        if ch == ',' {
            let mut lookahead = chars.clone();
            while lookahead.peek().is_some_and(|next| next.is_whitespace()) {
                lookahead.next();
            }
            if matches!(lookahead.peek(), Some('}' | ']')) {
                continue;
            }
        }

        out.push(ch);
    }

    out
}
