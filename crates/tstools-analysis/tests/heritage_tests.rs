//! Tests for heritage collection over programs built with `ProgramBuilder`.
use tstools_analysis::predicates::{get_extends_clause, get_implements_clause};
use tstools_analysis::{AnalysisError, DeclSpec, ProgramBuilder, ProgramSnapshot};
use tstools_common::limits::MAX_HERITAGE_DEPTH;
use tstools_syntax::{NodeIndex, SyntaxKind};

fn exported<'a>(name: &'a str, members: &'a [&'a str]) -> DeclSpec<'a> {
    DeclSpec {
        name,
        members,
        export_context: true,
        ..DeclSpec::default()
    }
}

/// First type reference of a heritage clause.
fn first_reference(snapshot: &ProgramSnapshot, clause: NodeIndex) -> NodeIndex {
    let node = snapshot.arena.get(clause).expect("clause node");
    let data = snapshot.arena.get_heritage_clause(node).expect("heritage clause");
    data.types.nodes[0]
}

fn heritage_names(snapshot: &ProgramSnapshot, class_like: NodeIndex) -> Vec<&str> {
    let symbols = snapshot
        .heritage()
        .collect_heritage_properties(class_like)
        .expect("heritage walk");
    snapshot.symbol_names(&symbols)
}

#[test]
fn ancestors_come_before_descendants() {
    let mut builder = ProgramBuilder::new("chain.ts");
    builder.add_class(exported("A", &["a1", "a2"]));
    builder.add_class(DeclSpec {
        extends: &["A"],
        ..exported("B", &["b"])
    });
    let c = builder.add_class(DeclSpec {
        extends: &["B"],
        ..exported("C", &["c"])
    });
    let snapshot = builder.finish();

    assert_eq!(heritage_names(&snapshot, c), vec!["a1", "a2", "b"]);
}

#[test]
fn class_without_heritage_collects_nothing() {
    let mut builder = ProgramBuilder::new("plain.ts");
    let a = builder.add_class(exported("A", &["a"]));
    let snapshot = builder.finish();

    assert!(heritage_names(&snapshot, a).is_empty());
    assert!(heritage_names(&snapshot, NodeIndex::NONE).is_empty());
}

#[test]
fn shared_ancestor_is_collected_once_per_path() {
    let mut builder = ProgramBuilder::new("diamond.ts");
    builder.add_interface(exported("A", &["shared"]));
    builder.add_interface(DeclSpec {
        extends: &["A"],
        ..exported("B1", &["left"])
    });
    builder.add_interface(DeclSpec {
        extends: &["A"],
        ..exported("B2", &["right"])
    });
    let c = builder.add_class(DeclSpec {
        implements: &["B1", "B2"],
        ..exported("C", &[])
    });
    let snapshot = builder.finish();

    assert_eq!(
        heritage_names(&snapshot, c),
        vec!["shared", "left", "shared", "right"]
    );
}

#[test]
fn extends_clause_is_walked_before_implements() {
    let mut builder = ProgramBuilder::new("order.ts");
    builder.add_class(exported("Base", &["base"]));
    builder.add_interface(exported("Shape", &["area"]));
    let derived = builder.add_class(DeclSpec {
        extends: &["Base"],
        implements: &["Shape"],
        ..exported("Derived", &["own"])
    });
    let snapshot = builder.finish();

    assert_eq!(heritage_names(&snapshot, derived), vec!["base", "area"]);
}

#[test]
fn members_outside_an_export_context_are_skipped() {
    let mut builder = ProgramBuilder::new("hidden.ts");
    builder.add_class(DeclSpec {
        name: "Hidden",
        members: &["secret"],
        ..DeclSpec::default()
    });
    builder.add_class(DeclSpec {
        extends: &["Hidden"],
        ..exported("Middle", &["visible"])
    });
    let leaf = builder.add_class(DeclSpec {
        extends: &["Middle"],
        ..exported("Leaf", &[])
    });
    let snapshot = builder.finish();

    // Hidden is still walked through; only its members are filtered.
    assert_eq!(heritage_names(&snapshot, leaf), vec!["visible"]);
}

#[test]
fn reopened_interface_contributes_all_of_its_members() {
    let mut builder = ProgramBuilder::new("merge.ts");
    builder.add_interface(exported("I", &["first"]));
    builder.add_interface(exported("I", &["second"]));
    let c = builder.add_class(DeclSpec {
        implements: &["I"],
        ..exported("C", &[])
    });
    let snapshot = builder.finish();

    assert_eq!(heritage_names(&snapshot, c), vec!["first", "second"]);
}

#[test]
fn reopened_interface_follows_extends_on_every_declaration() {
    let mut builder = ProgramBuilder::new("merge.ts");
    builder.add_interface(exported("A", &["a"]));
    builder.add_interface(exported("I", &["first"]));
    builder.add_interface(DeclSpec {
        extends: &["A"],
        ..exported("I", &["second"])
    });
    let c = builder.add_class(DeclSpec {
        implements: &["I"],
        ..exported("C", &[])
    });
    let snapshot = builder.finish();

    assert_eq!(heritage_names(&snapshot, c), vec!["a", "first", "second"]);
}

#[test]
fn unknown_reference_is_an_error() {
    let mut builder = ProgramBuilder::new("unknown.ts");
    let c = builder.add_class(DeclSpec {
        extends: &["Missing"],
        ..exported("C", &[])
    });
    let snapshot = builder.finish();
    let type_ref = first_reference(&snapshot, get_extends_clause(&snapshot.arena, c).unwrap());

    let err = snapshot
        .heritage()
        .collect_heritage_properties(c)
        .unwrap_err();
    assert_eq!(err, AnalysisError::UnresolvedType { node: type_ref });
}

#[test]
fn type_without_symbol_is_an_error() {
    let mut builder = ProgramBuilder::new("anonymous.ts");
    builder.add_class(exported("Base", &["x"]));
    let c = builder.add_class(DeclSpec {
        extends: &["Base"],
        ..exported("C", &[])
    });
    let mut snapshot = builder.finish();
    let type_ref = first_reference(&snapshot, get_extends_clause(&snapshot.arena, c).unwrap());

    let anonymous = snapshot.types.add_type(None, Vec::new());
    snapshot.types.set_type_at(type_ref, anonymous);

    let err = snapshot
        .heritage()
        .collect_heritage_properties(c)
        .unwrap_err();
    assert_eq!(err, AnalysisError::MissingTypeSymbol { node: type_ref });
}

#[test]
fn cyclic_interfaces_hit_the_depth_bound() {
    let mut builder = ProgramBuilder::new("cycle.ts");
    let i = builder.add_interface(DeclSpec {
        extends: &["J"],
        ..exported("I", &["i"])
    });
    builder.add_interface(DeclSpec {
        extends: &["I"],
        ..exported("J", &["j"])
    });
    let snapshot = builder.finish();

    let err = snapshot
        .heritage()
        .collect_heritage_properties(i)
        .unwrap_err();
    assert!(
        matches!(err, AnalysisError::HeritageTooDeep { depth, .. } if depth == MAX_HERITAGE_DEPTH),
        "unexpected error: {err}"
    );
}

#[test]
fn abstract_bases_contribute_their_members() {
    let mut builder = ProgramBuilder::new("abstract.ts");
    builder.add_class(DeclSpec {
        name: "Shape",
        modifiers: &[SyntaxKind::AbstractKeyword],
        members: &["area", "perimeter"],
        ..DeclSpec::default()
    });
    builder.add_class(DeclSpec {
        name: "Concrete",
        members: &["draw"],
        ..DeclSpec::default()
    });
    let c = builder.add_class(DeclSpec {
        extends: &["Shape", "Concrete"],
        ..exported("Square", &[])
    });
    let snapshot = builder.finish();
    let clause = get_extends_clause(&snapshot.arena, c).unwrap();

    let symbols = snapshot
        .heritage()
        .collect_abstract_properties(clause)
        .unwrap();
    // No export-context filtering for abstract bases.
    assert_eq!(snapshot.symbol_names(&symbols), vec!["area", "perimeter"]);
}

#[test]
fn abstract_collection_does_not_recurse() {
    let mut builder = ProgramBuilder::new("abstract_chain.ts");
    builder.add_class(DeclSpec {
        name: "Root",
        modifiers: &[SyntaxKind::AbstractKeyword],
        members: &["root"],
        ..DeclSpec::default()
    });
    builder.add_class(DeclSpec {
        name: "Middle",
        modifiers: &[SyntaxKind::ExportKeyword, SyntaxKind::AbstractKeyword],
        extends: &["Root"],
        members: &["middle"],
        ..DeclSpec::default()
    });
    let leaf = builder.add_class(DeclSpec {
        extends: &["Middle"],
        ..exported("Leaf", &[])
    });
    let snapshot = builder.finish();
    let clause = get_extends_clause(&snapshot.arena, leaf).unwrap();

    let symbols = snapshot
        .heritage()
        .collect_abstract_properties(clause)
        .unwrap();
    assert_eq!(snapshot.symbol_names(&symbols), vec!["middle"]);
}

#[test]
fn implemented_members_are_collected_unconditionally() {
    let mut builder = ProgramBuilder::new("implements.ts");
    builder.add_interface(DeclSpec {
        name: "Readable",
        members: &["read"],
        ..DeclSpec::default()
    });
    builder.add_interface(DeclSpec {
        name: "Closable",
        members: &["close", "closed"],
        ..DeclSpec::default()
    });
    let c = builder.add_class(DeclSpec {
        name: "Stream",
        implements: &["Readable", "Closable"],
        ..DeclSpec::default()
    });
    let snapshot = builder.finish();
    let clause = get_implements_clause(&snapshot.arena, c).unwrap();

    let symbols = snapshot
        .heritage()
        .collect_implements_properties(clause)
        .unwrap();
    assert_eq!(
        snapshot.symbol_names(&symbols),
        vec!["read", "close", "closed"]
    );
}

#[test]
fn clause_queries_on_non_clauses_are_empty() {
    let mut builder = ProgramBuilder::new("empty.ts");
    let c = builder.add_class(exported("C", &["x"]));
    let snapshot = builder.finish();
    let resolver = snapshot.heritage();

    assert!(resolver.collect_abstract_properties(c).unwrap().is_empty());
    assert!(resolver.collect_implements_properties(c).unwrap().is_empty());
    assert!(
        resolver
            .collect_implements_properties(NodeIndex::NONE)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn implements_reference_to_unknown_type_is_an_error() {
    let mut builder = ProgramBuilder::new("unknown_impl.ts");
    let c = builder.add_class(DeclSpec {
        implements: &["Nowhere"],
        ..exported("C", &[])
    });
    let snapshot = builder.finish();
    let clause = get_implements_clause(&snapshot.arena, c).unwrap();
    let type_ref = first_reference(&snapshot, clause);

    assert_eq!(
        snapshot.heritage().collect_implements_properties(clause),
        Err(AnalysisError::UnresolvedType { node: type_ref })
    );
}
