//! Tracing configuration.
//!
//! Supports three output formats controlled by `TSTOOLS_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`
//! - `json`: one JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Follow a heritage walk reference by reference
//! TSTOOLS_LOG=tstools_analysis=debug TSTOOLS_LOG_FORMAT=tree tstools heritage program.json
//!
//! # Every collected member and declared symbol
//! TSTOOLS_LOG=trace TSTOOLS_LOG_FORMAT=json tstools heritage program.json
//!
//! # Config discovery
//! TSTOOLS_LOG=tstools::cli=debug tstools config .
//! ```
//!
//! The subscriber is only initialised when `TSTOOLS_LOG` (or `RUST_LOG`) is
//! set, so there is no overhead in normal runs.
//!
//! `TSTOOLS_LOG` also accepts two shorthands. An empty value selects
//! [`DEFAULT_DIRECTIVES`]. A bare level (`TSTOOLS_LOG=debug`) applies to the
//! tstools crates only and keeps every dependency at `warn`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `TSTOOLS_LOG_FORMAT` value; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TSTOOLS_LOG_FORMAT").unwrap_or_default())
    }
}

/// Directives used when `TSTOOLS_LOG` is set but empty.
pub const DEFAULT_DIRECTIVES: &str = "warn,tstools=info,tstools_analysis=debug";

/// Targets a bare `TSTOOLS_LOG` level applies to.
const TSTOOLS_TARGETS: &[&str] = &[
    "tstools",
    "tstools_common",
    "tstools_syntax",
    "tstools_binder",
    "tstools_analysis",
];

const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Expand a `TSTOOLS_LOG` value into `EnvFilter` directives.
///
/// Anything other than an empty value or a bare level is passed through
/// unchanged.
pub fn filter_directives(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return DEFAULT_DIRECTIVES.to_string();
    }
    let level = value.to_lowercase();
    if !LEVELS.contains(&level.as_str()) {
        return value.to_string();
    }
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        TSTOOLS_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

/// Build an `EnvFilter` from `TSTOOLS_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("TSTOOLS_LOG") {
        EnvFilter::builder().parse_lossy(filter_directives(&val))
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TSTOOLS_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with the report on stdout.
pub fn init_tracing() {
    let has_tstools_log = std::env::var("TSTOOLS_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_tstools_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
