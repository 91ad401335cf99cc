use crate::modifiers::{ModifierFlags, modifier_flags, modifier_to_flag, modifiers_to_flags};
use crate::symbols::{is_ambient_context, is_ambient_module};
use tstools_binder::{Symbol, symbol_flags};
use tstools_syntax::syntax_kind_ext::*;
use tstools_syntax::*;

fn class_with_modifiers(arena: &mut NodeArena, modifiers: &[SyntaxKind]) -> NodeIndex {
    let tokens: Vec<NodeIndex> = modifiers
        .iter()
        .map(|&kind| arena.add_token(kind, 0, 0))
        .collect();
    arena.add_class(
        CLASS_DECLARATION,
        0,
        0,
        ClassData {
            modifiers: (!tokens.is_empty()).then(|| NodeList::from_nodes(tokens)),
            name: NodeIndex::NONE,
            heritage_clauses: None,
            members: NodeList::new(),
        },
    )
}

#[test]
fn token_table_maps_each_modifier_keyword() {
    let table = [
        (SyntaxKind::StaticKeyword, ModifierFlags::STATIC),
        (SyntaxKind::PublicKeyword, ModifierFlags::PUBLIC),
        (SyntaxKind::ProtectedKeyword, ModifierFlags::PROTECTED),
        (SyntaxKind::PrivateKeyword, ModifierFlags::PRIVATE),
        (SyntaxKind::AbstractKeyword, ModifierFlags::ABSTRACT),
        (SyntaxKind::ExportKeyword, ModifierFlags::EXPORT),
        (SyntaxKind::DeclareKeyword, ModifierFlags::AMBIENT),
        (SyntaxKind::ConstKeyword, ModifierFlags::CONST),
        (SyntaxKind::DefaultKeyword, ModifierFlags::DEFAULT),
        (SyntaxKind::AsyncKeyword, ModifierFlags::ASYNC),
        (SyntaxKind::ReadonlyKeyword, ModifierFlags::READONLY),
    ];
    for (token, flag) in table {
        assert_eq!(modifier_to_flag(token as u16), flag, "{token:?}");
    }
}

#[test]
fn non_modifier_tokens_contribute_nothing() {
    for token in [
        SyntaxKind::OverrideKeyword as u16,
        SyntaxKind::Identifier as u16,
        SyntaxKind::EqualsToken as u16,
        CLASS_DECLARATION,
        u16::MAX,
    ] {
        assert_eq!(modifier_to_flag(token), ModifierFlags::empty());
    }
}

#[test]
fn no_modifiers_means_empty_set() {
    let mut arena = NodeArena::new();
    let class = class_with_modifiers(&mut arena, &[]);

    assert_eq!(modifier_flags(&arena, class), ModifierFlags::empty());
    assert_eq!(modifiers_to_flags(&arena, None), ModifierFlags::empty());
}

#[test]
fn export_token_yields_export() {
    let mut arena = NodeArena::new();
    let exported = class_with_modifiers(&mut arena, &[SyntaxKind::ExportKeyword]);
    let abstract_export = class_with_modifiers(
        &mut arena,
        &[SyntaxKind::ExportKeyword, SyntaxKind::AbstractKeyword],
    );

    assert_eq!(modifier_flags(&arena, exported), ModifierFlags::EXPORT);
    assert_eq!(
        modifier_flags(&arena, abstract_export),
        ModifierFlags::EXPORT | ModifierFlags::ABSTRACT
    );
}

#[test]
fn nested_namespace_is_implicitly_exported() {
    let mut arena = NodeArena::new();
    let inner = arena.add_module(
        0,
        0,
        ModuleData {
            modifiers: None,
            name: NodeIndex::NONE,
            body: NodeIndex::NONE,
        },
    );
    arena.add_node_flags(inner, node_flags::NESTED_NAMESPACE);

    assert_eq!(modifier_flags(&arena, inner), ModifierFlags::EXPORT);
}

#[test]
fn jsdoc_namespace_identifier_is_implicitly_exported() {
    let mut arena = NodeArena::new();
    let in_namespace = arena.add_identifier(
        0,
        2,
        IdentifierData {
            escaped_text: "ns".to_string(),
            is_in_jsdoc_namespace: true,
        },
    );
    let plain = arena.add_identifier(
        0,
        2,
        IdentifierData {
            escaped_text: "ns".to_string(),
            is_in_jsdoc_namespace: false,
        },
    );

    assert_eq!(modifier_flags(&arena, in_namespace), ModifierFlags::EXPORT);
    assert_eq!(modifier_flags(&arena, plain), ModifierFlags::empty());
}

fn modifier_list(arena: &mut NodeArena, modifiers: &[SyntaxKind]) -> Option<NodeList> {
    let tokens: Vec<NodeIndex> = modifiers
        .iter()
        .map(|&kind| arena.add_token(kind, 0, 0))
        .collect();
    Some(NodeList::from_nodes(tokens))
}

#[test]
fn modifiers_are_read_from_every_declaration_shape() {
    use SyntaxKind::*;

    let mut arena = NodeArena::new();
    let mut cases: Vec<(&str, NodeIndex, ModifierFlags)> = Vec::new();

    let modifiers = modifier_list(&mut arena, &[ExportKeyword, AbstractKeyword]);
    let class = arena.add_class(
        CLASS_DECLARATION,
        0,
        0,
        ClassData {
            modifiers,
            name: NodeIndex::NONE,
            heritage_clauses: None,
            members: NodeList::new(),
        },
    );
    cases.push(("class", class, ModifierFlags::EXPORT | ModifierFlags::ABSTRACT));

    let modifiers = modifier_list(&mut arena, &[DeclareKeyword]);
    let interface = arena.add_interface(
        0,
        0,
        InterfaceData {
            modifiers,
            name: NodeIndex::NONE,
            heritage_clauses: None,
            members: NodeList::new(),
        },
    );
    cases.push(("interface", interface, ModifierFlags::AMBIENT));

    let modifiers = modifier_list(&mut arena, &[ExportKeyword, DefaultKeyword, AsyncKeyword]);
    let function = arena.add_function(
        FUNCTION_DECLARATION,
        0,
        0,
        FunctionData {
            modifiers,
            name: NodeIndex::NONE,
            parameters: NodeList::new(),
            body: NodeIndex::NONE,
        },
    );
    cases.push((
        "function",
        function,
        ModifierFlags::EXPORT | ModifierFlags::DEFAULT | ModifierFlags::ASYNC,
    ));

    let modifiers = modifier_list(&mut arena, &[ReadonlyKeyword]);
    let signature = arena.add_signature(
        INDEX_SIGNATURE,
        0,
        0,
        SignatureData {
            modifiers,
            name: NodeIndex::NONE,
            parameters: NodeList::new(),
            type_annotation: NodeIndex::NONE,
        },
    );
    cases.push(("index signature", signature, ModifierFlags::READONLY));

    let modifiers = modifier_list(&mut arena, &[StaticKeyword, ReadonlyKeyword]);
    let property = arena.add_property_decl(
        PROPERTY_DECLARATION,
        0,
        0,
        PropertyDeclData {
            modifiers,
            name: NodeIndex::NONE,
            type_annotation: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        },
    );
    cases.push((
        "property",
        property,
        ModifierFlags::STATIC | ModifierFlags::READONLY,
    ));

    let modifiers = modifier_list(&mut arena, &[PrivateKeyword, ReadonlyKeyword]);
    let parameter = arena.add_parameter(
        0,
        0,
        ParameterData {
            modifiers,
            name: NodeIndex::NONE,
            type_annotation: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        },
    );
    cases.push((
        "parameter property",
        parameter,
        ModifierFlags::PRIVATE | ModifierFlags::READONLY,
    ));

    let modifiers = modifier_list(&mut arena, &[ExportKeyword]);
    let module = arena.add_module(
        0,
        0,
        ModuleData {
            modifiers,
            name: NodeIndex::NONE,
            body: NodeIndex::NONE,
        },
    );
    cases.push(("namespace", module, ModifierFlags::EXPORT));

    let modifiers = modifier_list(&mut arena, &[DeclareKeyword, ConstKeyword]);
    let enum_decl = arena.add_enum(
        0,
        0,
        EnumData {
            modifiers,
            name: NodeIndex::NONE,
            members: NodeList::new(),
        },
    );
    cases.push((
        "const enum",
        enum_decl,
        ModifierFlags::AMBIENT | ModifierFlags::CONST,
    ));

    let modifiers = modifier_list(&mut arena, &[ExportKeyword]);
    let alias = arena.add_type_alias(
        0,
        0,
        TypeAliasData {
            modifiers,
            name: NodeIndex::NONE,
            type_node: NodeIndex::NONE,
        },
    );
    cases.push(("type alias", alias, ModifierFlags::EXPORT));

    let modifiers = modifier_list(&mut arena, &[DeclareKeyword]);
    let variable = arena.add_variable(
        0,
        0,
        VariableData {
            modifiers,
            declarations: NodeList::new(),
        },
    );
    cases.push(("variable statement", variable, ModifierFlags::AMBIENT));

    let modifiers = modifier_list(&mut arena, &[DeclareKeyword]);
    let import = arena.add_import_decl(
        0,
        0,
        ImportDeclData {
            modifiers,
            import_clause: NodeIndex::NONE,
            module_specifier: NodeIndex::NONE,
        },
    );
    cases.push(("import", import, ModifierFlags::AMBIENT));

    let modifiers = modifier_list(&mut arena, &[ExportKeyword]);
    let import_equals = arena.add_import_equals(
        0,
        0,
        ImportEqualsData {
            modifiers,
            is_type_only: false,
            name: NodeIndex::NONE,
            module_reference: NodeIndex::NONE,
        },
    );
    cases.push(("import equals", import_equals, ModifierFlags::EXPORT));

    let modifiers = modifier_list(&mut arena, &[DeclareKeyword]);
    let export = arena.add_export_decl(
        0,
        0,
        ExportDeclData {
            modifiers,
            is_type_only: false,
            export_clause: NodeIndex::NONE,
            module_specifier: NodeIndex::NONE,
        },
    );
    cases.push(("export declaration", export, ModifierFlags::AMBIENT));

    let modifiers = modifier_list(&mut arena, &[DeclareKeyword]);
    let assignment = arena.add_export_assignment(
        0,
        0,
        ExportAssignmentData {
            modifiers,
            is_export_equals: true,
            expression: NodeIndex::NONE,
        },
    );
    cases.push(("export assignment", assignment, ModifierFlags::AMBIENT));

    for (shape, node, expected) in cases {
        assert_eq!(modifier_flags(&arena, node), expected, "{shape}");
    }
}

#[test]
fn declare_module_makes_its_contents_ambient() {
    let mut arena = NodeArena::new();
    let parameter = arena.add_parameter(
        0,
        0,
        ParameterData {
            modifiers: None,
            name: NodeIndex::NONE,
            type_annotation: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        },
    );
    let function = arena.add_function(
        FUNCTION_DECLARATION,
        0,
        0,
        FunctionData {
            modifiers: None,
            name: NodeIndex::NONE,
            parameters: NodeList::from_nodes(vec![parameter]),
            body: NodeIndex::NONE,
        },
    );
    let body = arena.add_block(
        MODULE_BLOCK,
        0,
        0,
        BlockData {
            statements: NodeList::from_nodes(vec![function]),
        },
    );
    let modifiers = modifier_list(&mut arena, &[SyntaxKind::DeclareKeyword]);
    let module = arena.add_module(
        0,
        0,
        ModuleData {
            modifiers,
            name: NodeIndex::NONE,
            body,
        },
    );

    let mut module_symbol = Symbol::new(symbol_flags::VALUE_MODULE, "\"lib\"".to_string());
    module_symbol.declarations.push(module);
    module_symbol.value_declaration = module;
    let mut function_symbol = Symbol::new(symbol_flags::FUNCTION, "f".to_string());
    function_symbol.declarations.push(function);
    function_symbol.value_declaration = function;
    let mut parameter_symbol = Symbol::new(symbol_flags::FUNCTION_SCOPED_VARIABLE, "p".to_string());
    parameter_symbol.declarations.push(parameter);
    parameter_symbol.value_declaration = parameter;

    assert!(is_ambient_module(&arena, &module_symbol));
    assert!(!is_ambient_module(&arena, &function_symbol));
    assert!(is_ambient_context(&arena, &function_symbol));
    assert!(is_ambient_context(&arena, &parameter_symbol));
    assert_eq!(modifier_flags(&arena, function), ModifierFlags::empty());
}

#[test]
fn modifiers_of_parents_are_not_inherited() {
    let mut arena = NodeArena::new();
    let member = arena.add_property_decl(
        PROPERTY_DECLARATION,
        0,
        0,
        PropertyDeclData {
            modifiers: None,
            name: NodeIndex::NONE,
            type_annotation: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        },
    );
    let export = arena.add_token(SyntaxKind::ExportKeyword, 0, 0);
    arena.add_class(
        CLASS_DECLARATION,
        0,
        0,
        ClassData {
            modifiers: Some(NodeList::from_nodes(vec![export])),
            name: NodeIndex::NONE,
            heritage_clauses: None,
            members: NodeList::from_nodes(vec![member]),
        },
    );

    assert_eq!(modifier_flags(&arena, member), ModifierFlags::empty());
}
