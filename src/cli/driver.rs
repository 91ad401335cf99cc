//! Subcommand implementations.
//!
//! Each command writes its report to the given writer and returns the process
//! exit status, so the binary stays a thin wrapper and tests can capture the
//! output.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info_span};

use crate::cli::args::{CliArgs, Command};
use crate::cli::config::get_project_config;
use crate::cli::reporter::Reporter;
use tstools_analysis::predicates::{get_extends_clause, get_implements_clause};
use tstools_analysis::{
    AnalysisError, ContainerFlags, ModifierFlags, ProgramSnapshot, container_flags, modifier_flags,
};
use tstools_binder::SymbolId;
use tstools_syntax::syntax_kind_ext::{CLASS_DECLARATION, CLASS_EXPRESSION, INTERFACE_DECLARATION};
use tstools_syntax::{NodeIndex, kind_name};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DIAGNOSTICS: i32 = 1;

pub fn run(args: &CliArgs, color: bool, out: &mut dyn Write) -> Result<i32> {
    let reporter = Reporter::new(color);
    match &args.command {
        Command::Config { project, json } => run_config(project, *json, &reporter, out),
        Command::Classify {
            snapshot,
            json,
            all,
        } => {
            let snapshot = load_snapshot(snapshot)?;
            run_classify(&snapshot, *json, *all, out)
        }
        Command::Heritage { snapshot, json } => {
            let snapshot = load_snapshot(snapshot)?;
            run_heritage(&snapshot, *json, out)
        }
    }
}

/// Read a program snapshot written by an external checker.
pub fn load_snapshot(path: &Path) -> Result<ProgramSnapshot> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot: {}", path.display()))?;
    let snapshot: ProgramSnapshot = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse snapshot: {}", path.display()))?;
    debug!(
        path = %path.display(),
        nodes = snapshot.arena.len(),
        symbols = snapshot.binder.symbols.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

// =============================================================================
// config
// =============================================================================

pub fn run_config(
    project: &Path,
    json: bool,
    reporter: &Reporter,
    out: &mut dyn Write,
) -> Result<i32> {
    let parsed = get_project_config(project);

    if json {
        serde_json::to_writer_pretty(&mut *out, &parsed).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        for file_name in &parsed.file_names {
            writeln!(out, "{file_name}")?;
        }
        if !parsed.errors.is_empty() {
            writeln!(out, "{}", reporter.render(&parsed.errors))?;
            writeln!(out)?;
            writeln!(out, "{}", reporter.summary(&parsed.errors))?;
        }
    }

    Ok(if parsed.errors.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_DIAGNOSTICS
    })
}

// =============================================================================
// classify
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NodeClassification {
    pub node: u32,
    pub kind: String,
    pub modifiers: ModifierFlags,
    pub container: ContainerFlags,
}

/// Classify every node of `snapshot`, in creation order. Without `all`, nodes
/// with neither modifiers nor container flags are left out.
pub fn classify(snapshot: &ProgramSnapshot, all: bool) -> Vec<NodeClassification> {
    let _span = info_span!("classify", nodes = snapshot.arena.len()).entered();
    snapshot
        .node_indices()
        .filter_map(|idx| {
            let kind = snapshot.arena.kind_of(idx)?;
            let modifiers = modifier_flags(&snapshot.arena, idx);
            let container = container_flags(&snapshot.arena, idx);
            if !all && modifiers.is_empty() && container.is_empty() {
                return None;
            }
            Some(NodeClassification {
                node: idx.0,
                kind: kind_name(kind),
                modifiers,
                container,
            })
        })
        .collect()
}

pub fn run_classify(
    snapshot: &ProgramSnapshot,
    json: bool,
    all: bool,
    out: &mut dyn Write,
) -> Result<i32> {
    let rows = classify(snapshot, all);
    if json {
        serde_json::to_writer_pretty(&mut *out, &rows).context("failed to write JSON")?;
        writeln!(out)?;
        return Ok(EXIT_SUCCESS);
    }

    for row in &rows {
        write!(out, "#{} {}", row.node, row.kind)?;
        if !row.modifiers.is_empty() {
            write!(out, " modifiers={}", flag_names(row.modifiers.iter_names()))?;
        }
        if !row.container.is_empty() {
            write!(out, " container={}", flag_names(row.container.iter_names()))?;
        }
        writeln!(out)?;
    }
    Ok(EXIT_SUCCESS)
}

fn flag_names<F>(names: impl Iterator<Item = (&'static str, F)>) -> String {
    names.map(|(name, _)| name).collect::<Vec<_>>().join("|")
}

// =============================================================================
// heritage
// =============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct HeritageReport {
    pub node: u32,
    pub name: String,
    pub inherited: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_members: Vec<String>,
    pub implemented: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Heritage queries for every class and interface declaration of `snapshot`.
///
/// A failed query is recorded on its report; the other declarations are still
/// answered.
pub fn heritage_reports(snapshot: &ProgramSnapshot) -> Vec<HeritageReport> {
    let arena = &snapshot.arena;
    snapshot
        .node_indices()
        .filter(|&idx| {
            matches!(
                arena.kind_of(idx),
                Some(CLASS_DECLARATION | CLASS_EXPRESSION | INTERFACE_DECLARATION)
            )
        })
        .map(|idx| {
            let name = arena
                .get_identifier_text(arena.get_declaration_name(idx))
                .unwrap_or("<anonymous>")
                .to_string();
            let _span = info_span!("heritage", node = %idx, declaration = %name).entered();

            let mut report = HeritageReport {
                node: idx.0,
                name,
                ..HeritageReport::default()
            };
            if let Err(err) = fill_heritage_report(snapshot, idx, &mut report) {
                debug!(error = %err, "heritage query failed");
                report.error = Some(err.to_string());
            }
            report
        })
        .collect()
}

fn fill_heritage_report(
    snapshot: &ProgramSnapshot,
    class_like: NodeIndex,
    report: &mut HeritageReport,
) -> Result<(), AnalysisError> {
    let resolver = snapshot.heritage();
    let names = |symbols: Vec<SymbolId>| -> Vec<String> {
        snapshot
            .symbol_names(&symbols)
            .into_iter()
            .map(str::to_string)
            .collect()
    };

    report.inherited = names(resolver.collect_heritage_properties(class_like)?);
    if let Some(extends) = get_extends_clause(&snapshot.arena, class_like) {
        report.abstract_members = names(resolver.collect_abstract_properties(extends)?);
    }
    if let Some(implements) = get_implements_clause(&snapshot.arena, class_like) {
        report.implemented = names(resolver.collect_implements_properties(implements)?);
    }
    Ok(())
}

pub fn run_heritage(snapshot: &ProgramSnapshot, json: bool, out: &mut dyn Write) -> Result<i32> {
    let reports = heritage_reports(snapshot);
    let failed = reports.iter().any(|report| report.error.is_some());

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        for report in &reports {
            writeln!(out, "{} (#{})", report.name, report.node)?;
            if let Some(error) = &report.error {
                writeln!(out, "  error: {error}")?;
                continue;
            }
            writeln!(out, "  inherited: {}", report.inherited.join(", "))?;
            writeln!(out, "  abstract: {}", report.abstract_members.join(", "))?;
            writeln!(out, "  implemented: {}", report.implemented.join(", "))?;
        }
    }

    Ok(if failed { EXIT_DIAGNOSTICS } else { EXIT_SUCCESS })
}
