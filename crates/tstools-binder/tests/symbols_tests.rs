//! Tests for symbol declaration, merging and identity assignment.
use tstools_binder::{BinderState, SymbolArena, SymbolId, symbol_flags};
use tstools_syntax::NodeIndex;

#[test]
fn declare_symbol_links_node_and_value_declaration() {
    let mut binder = BinderState::new();
    let decl = NodeIndex(3);
    let sym_id = binder.declare_symbol(decl, symbol_flags::CLASS, "Foo");

    assert_eq!(binder.get_node_symbol(decl), Some(sym_id));
    assert_eq!(binder.file_locals.get("Foo"), Some(sym_id));

    let sym = binder.symbols.get(sym_id).expect("symbol");
    assert_eq!(sym.escaped_name, "Foo");
    assert_eq!(sym.declarations, vec![decl]);
    assert_eq!(sym.value_declaration, decl);
    assert_eq!(sym.id, None);
}

#[test]
fn type_only_symbols_have_no_value_declaration() {
    let mut binder = BinderState::new();
    let sym_id = binder.declare_symbol(NodeIndex(1), symbol_flags::INTERFACE, "I");

    let sym = binder.symbols.get(sym_id).expect("symbol");
    assert!(sym.value_declaration.is_none());
    assert_eq!(sym.first_declaration(), NodeIndex(1));
}

#[test]
fn interface_declarations_merge() {
    let mut binder = BinderState::new();
    let first = binder.declare_symbol(NodeIndex(1), symbol_flags::INTERFACE, "I");
    let second = binder.declare_symbol(NodeIndex(7), symbol_flags::INTERFACE, "I");

    assert_eq!(first, second);
    let sym = binder.symbols.get(first).expect("symbol");
    assert_eq!(sym.declarations, vec![NodeIndex(1), NodeIndex(7)]);
    assert_eq!(binder.get_node_symbol(NodeIndex(7)), Some(first));
}

#[test]
fn members_do_not_merge_by_name() {
    let mut binder = BinderState::new();
    let a = binder.declare_symbol(NodeIndex(0), symbol_flags::CLASS, "A");
    let b = binder.declare_symbol(NodeIndex(1), symbol_flags::CLASS, "B");
    let ax = binder.declare_member(a, NodeIndex(2), symbol_flags::PROPERTY, "x");
    let bx = binder.declare_member(b, NodeIndex(3), symbol_flags::PROPERTY, "x");

    assert_ne!(ax, bx);
    assert_eq!(binder.symbols.get(ax).map(|s| s.parent), Some(a));
    assert!(binder.file_locals.get("x").is_none());
}

#[test]
fn assign_symbol_ids_preserves_existing_ids() {
    let mut binder = BinderState::new();
    let a = binder.declare_symbol(NodeIndex(0), symbol_flags::CLASS, "A");
    let b = binder.declare_symbol(NodeIndex(1), symbol_flags::CLASS, "B");
    binder.symbols.get_mut(b).expect("symbol").id = Some(40);

    binder.assign_symbol_ids();

    assert_eq!(binder.symbols.get(a).and_then(|s| s.id), Some(41));
    assert_eq!(binder.symbols.get(b).and_then(|s| s.id), Some(40));
}

#[test]
fn none_ids_resolve_to_nothing() {
    let arena = SymbolArena::new();
    assert!(arena.get(SymbolId::NONE).is_none());
    assert!(arena.is_empty());

    let binder = BinderState::new();
    assert_eq!(binder.get_node_symbol(NodeIndex::NONE), None);
}

#[test]
fn composite_flags_cover_their_parts() {
    assert_ne!(symbol_flags::VALUE & symbol_flags::CLASS, 0);
    assert_ne!(symbol_flags::TYPE & symbol_flags::CLASS, 0);
    assert_eq!(symbol_flags::VALUE & symbol_flags::INTERFACE, 0);
    assert_eq!(
        symbol_flags::MODULE,
        symbol_flags::VALUE_MODULE | symbol_flags::NAMESPACE_MODULE
    );
}

#[test]
fn binder_state_round_trips_through_json() {
    let mut binder = BinderState::new();
    let a = binder.declare_symbol(NodeIndex(5), symbol_flags::CLASS, "A");
    binder.assign_symbol_ids();

    let json = serde_json::to_string(&binder).expect("serialize");
    let restored: BinderState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored.get_node_symbol(NodeIndex(5)), Some(a));
    assert_eq!(restored.symbols.get(a).and_then(|s| s.id), Some(1));
}
