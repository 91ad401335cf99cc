//! Classification and heritage benchmarks.
//!
//! Measures node classification over a whole program and heritage collection
//! through inheritance chains of increasing depth.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tstools::{
    DeclSpec, ProgramBuilder, ProgramSnapshot, SyntaxKind, container_flags, modifier_flags,
};
use tstools::analysis::predicates::get_extends_clause;

const MEMBERS: [&str; 4] = ["id", "name", "update", "dispose"];

/// Build `chains` independent class chains, each `depth` classes long. The
/// first class of every chain is abstract and implements a shared interface.
fn synthetic_program(chains: usize, depth: usize) -> ProgramSnapshot {
    let mut builder = ProgramBuilder::new("bench.ts");
    builder.add_interface(DeclSpec {
        name: "Entity",
        modifiers: &[SyntaxKind::ExportKeyword],
        members: &MEMBERS[..2],
        export_context: true,
        ..DeclSpec::default()
    });

    let names: Vec<Vec<String>> = (0..chains)
        .map(|chain| (0..depth).map(|level| format!("C{chain}_{level}")).collect())
        .collect();
    for chain in &names {
        for (level, name) in chain.iter().enumerate() {
            let member = [MEMBERS[level % MEMBERS.len()]];
            if level == 0 {
                builder.add_class(DeclSpec {
                    name,
                    modifiers: &[SyntaxKind::ExportKeyword, SyntaxKind::AbstractKeyword],
                    implements: &["Entity"],
                    members: &member,
                    export_context: true,
                    ..DeclSpec::default()
                });
            } else {
                let parent = [chain[level - 1].as_str()];
                builder.add_class(DeclSpec {
                    name,
                    extends: &parent,
                    members: &member,
                    ..DeclSpec::default()
                });
            }
        }
    }
    builder.finish()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for chains in [10, 100, 1000] {
        let snapshot = synthetic_program(chains, 4);
        group.bench_with_input(BenchmarkId::from_parameter(chains), &snapshot, |b, s| {
            b.iter(|| {
                let mut flagged = 0usize;
                for idx in s.node_indices() {
                    let modifiers = modifier_flags(&s.arena, idx);
                    let container = container_flags(&s.arena, idx);
                    if !modifiers.is_empty() || !container.is_empty() {
                        flagged += 1;
                    }
                }
                black_box(flagged)
            });
        });
    }
    group.finish();
}

fn bench_heritage(c: &mut Criterion) {
    let mut group = c.benchmark_group("heritage");
    for depth in [2, 8, 32] {
        let snapshot = synthetic_program(1, depth);
        let leaf = snapshot
            .node_indices()
            .filter(|&idx| get_extends_clause(&snapshot.arena, idx).is_some())
            .last()
            .expect("synthetic program has a derived class");
        group.bench_with_input(BenchmarkId::new("collect", depth), &leaf, |b, &leaf| {
            let resolver = snapshot.heritage();
            b.iter(|| black_box(resolver.collect_heritage_properties(leaf)));
        });
        let extends = get_extends_clause(&snapshot.arena, leaf).expect("extends clause");
        group.bench_with_input(BenchmarkId::new("abstract", depth), &extends, |b, &clause| {
            let resolver = snapshot.heritage();
            b.iter(|| black_box(resolver.collect_abstract_properties(clause)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_heritage);
criterion_main!(benches);
