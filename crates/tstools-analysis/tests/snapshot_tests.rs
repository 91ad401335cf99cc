//! Tests for the table-backed resolver and snapshot serialization.
use tstools_analysis::predicates::get_extends_clause;
use tstools_analysis::{
    DeclSpec, ProgramBuilder, ProgramSnapshot, TypeId, TypeResolver, TypeTable, container_flags,
};
use tstools_binder::SymbolId;
use tstools_syntax::NodeIndex;

fn chain() -> (ProgramSnapshot, NodeIndex) {
    let mut builder = ProgramBuilder::new("chain.ts");
    builder.add_class(DeclSpec {
        name: "Base",
        members: &["id", "name"],
        export_context: true,
        ..DeclSpec::default()
    });
    let derived = builder.add_class(DeclSpec {
        name: "Derived",
        extends: &["Base"],
        members: &["extra"],
        export_context: true,
        ..DeclSpec::default()
    });
    (builder.finish(), derived)
}

fn type_at<R: TypeResolver>(resolver: R, node: NodeIndex) -> Option<TypeId> {
    resolver.type_at_location(node)
}

#[test]
fn empty_table_answers_nothing() {
    let table = TypeTable::new();

    assert_eq!(table.type_at_location(NodeIndex(0)), None);
    assert_eq!(table.type_at_location(NodeIndex::NONE), None);
    assert_eq!(table.type_symbol(TypeId(0)), None);
    assert!(table.type_properties(TypeId(3)).is_empty());
    assert_eq!(table.symbol_at_location(NodeIndex::NONE), None);
}

#[test]
fn table_answers_what_was_recorded() {
    let mut table = TypeTable::new();
    let ty = table.add_type(Some(SymbolId(1)), vec![SymbolId(2), SymbolId(3)]);
    let anonymous = table.add_type(None, Vec::new());
    table.set_type_at(NodeIndex(10), ty);
    table.set_symbol_at(NodeIndex(11), SymbolId(1));

    assert_eq!(ty, TypeId(0));
    assert_eq!(anonymous, TypeId(1));
    assert_eq!(table.type_at_location(NodeIndex(10)), Some(ty));
    assert_eq!(table.type_symbol(ty), Some(SymbolId(1)));
    assert_eq!(table.type_symbol(anonymous), None);
    assert_eq!(table.type_properties(ty), vec![SymbolId(2), SymbolId(3)]);
    assert_eq!(table.symbol_at_location(NodeIndex(11)), Some(SymbolId(1)));

    assert_eq!(type_at(&table, NodeIndex(10)), Some(ty));
}

#[test]
fn builder_resolves_heritage_references_by_name() {
    let (snapshot, derived) = chain();
    let clause = get_extends_clause(&snapshot.arena, derived).expect("extends clause");
    let clause_node = snapshot.arena.get(clause).unwrap();
    let type_ref = snapshot.arena.get_heritage_clause(clause_node).unwrap().types.nodes[0];

    let ty = snapshot.types.type_at_location(type_ref).expect("resolved");
    let base = snapshot.types.type_symbol(ty).expect("declared");
    assert_eq!(snapshot.binder.file_locals.get("Base"), Some(base));
    assert_eq!(
        snapshot.symbol_names(&snapshot.types.type_properties(ty)),
        vec!["id", "name"]
    );
}

#[test]
fn json_round_trip_preserves_answers() {
    let (snapshot, derived) = chain();
    let json = serde_json::to_string(&snapshot).expect("serialize");
    let restored: ProgramSnapshot = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.arena.len(), snapshot.arena.len());
    assert_eq!(restored.binder.symbols.len(), snapshot.binder.symbols.len());

    let before = snapshot
        .heritage()
        .collect_heritage_properties(derived)
        .unwrap();
    let after = restored
        .heritage()
        .collect_heritage_properties(derived)
        .unwrap();
    assert_eq!(before, after);
    assert_eq!(restored.symbol_names(&after), vec!["id", "name"]);

    for idx in snapshot.node_indices() {
        assert_eq!(
            container_flags(&snapshot.arena, idx),
            container_flags(&restored.arena, idx),
            "node {idx}"
        );
    }
}

#[test]
fn hand_written_table_deserializes_with_defaults() {
    let table: TypeTable = serde_json::from_str(
        r#"{ "types": [ { "symbol": 4 }, { "properties": [1, 2] } ] }"#,
    )
    .expect("deserialize");

    assert_eq!(table.type_symbol(TypeId(0)), Some(SymbolId(4)));
    assert!(table.type_properties(TypeId(0)).is_empty());
    assert_eq!(table.type_symbol(TypeId(1)), None);
    assert_eq!(table.type_properties(TypeId(1)), vec![SymbolId(1), SymbolId(2)]);
    assert!(table.node_types.is_empty());
}

#[test]
fn symbol_names_skip_unknown_ids() {
    let (snapshot, _) = chain();
    let base = snapshot.binder.file_locals.get("Base").unwrap();

    assert_eq!(
        snapshot.symbol_names(&[base, SymbolId(500), SymbolId::NONE]),
        vec!["Base"]
    );
}
