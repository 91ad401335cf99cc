use crate::container::{ContainerFlags, container_flags};
use tstools_syntax::syntax_kind_ext::*;
use tstools_syntax::*;

fn function_like() -> ContainerFlags {
    ContainerFlags::IS_CONTAINER
        | ContainerFlags::IS_CONTROL_FLOW_CONTAINER
        | ContainerFlags::HAS_LOCALS
        | ContainerFlags::IS_FUNCTION_LIKE
}

fn empty_block(arena: &mut NodeArena) -> NodeIndex {
    arena.add_block(
        BLOCK,
        0,
        0,
        BlockData {
            statements: NodeList::new(),
        },
    )
}

fn function(arena: &mut NodeArena, kind: u16, body: NodeIndex) -> NodeIndex {
    arena.add_function(
        kind,
        0,
        0,
        FunctionData {
            modifiers: None,
            name: NodeIndex::NONE,
            parameters: NodeList::new(),
            body,
        },
    )
}

#[test]
fn every_kind_in_the_table_has_its_documented_flags() {
    let table: &[(u16, ContainerFlags)] = &[
        (CLASS_EXPRESSION, ContainerFlags::IS_CONTAINER),
        (CLASS_DECLARATION, ContainerFlags::IS_CONTAINER),
        (ENUM_DECLARATION, ContainerFlags::IS_CONTAINER),
        (OBJECT_LITERAL_EXPRESSION, ContainerFlags::IS_CONTAINER),
        (TYPE_LITERAL, ContainerFlags::IS_CONTAINER),
        (JSDOC_TYPE_LITERAL, ContainerFlags::IS_CONTAINER),
        (JSX_ATTRIBUTES, ContainerFlags::IS_CONTAINER),
        (
            INTERFACE_DECLARATION,
            ContainerFlags::IS_CONTAINER | ContainerFlags::IS_INTERFACE,
        ),
        (MODULE_DECLARATION, ContainerFlags::IS_CONTAINER_WITH_LOCALS),
        (TYPE_ALIAS_DECLARATION, ContainerFlags::IS_CONTAINER_WITH_LOCALS),
        (MAPPED_TYPE, ContainerFlags::IS_CONTAINER_WITH_LOCALS),
        (
            SOURCE_FILE,
            ContainerFlags::IS_CONTAINER
                | ContainerFlags::IS_CONTROL_FLOW_CONTAINER
                | ContainerFlags::HAS_LOCALS,
        ),
        (METHOD_DECLARATION, function_like()),
        (CONSTRUCTOR, function_like()),
        (FUNCTION_DECLARATION, function_like()),
        (METHOD_SIGNATURE, function_like()),
        (GET_ACCESSOR, function_like()),
        (SET_ACCESSOR, function_like()),
        (CALL_SIGNATURE, function_like()),
        (JSDOC_FUNCTION_TYPE, function_like()),
        (FUNCTION_TYPE, function_like()),
        (CONSTRUCT_SIGNATURE, function_like()),
        (INDEX_SIGNATURE, function_like()),
        (CONSTRUCTOR_TYPE, function_like()),
        (
            FUNCTION_EXPRESSION,
            function_like() | ContainerFlags::IS_FUNCTION_EXPRESSION,
        ),
        (
            ARROW_FUNCTION,
            function_like() | ContainerFlags::IS_FUNCTION_EXPRESSION,
        ),
        (MODULE_BLOCK, ContainerFlags::IS_CONTROL_FLOW_CONTAINER),
        (CATCH_CLAUSE, ContainerFlags::IS_BLOCK_SCOPED_CONTAINER),
        (FOR_STATEMENT, ContainerFlags::IS_BLOCK_SCOPED_CONTAINER),
        (FOR_IN_STATEMENT, ContainerFlags::IS_BLOCK_SCOPED_CONTAINER),
        (FOR_OF_STATEMENT, ContainerFlags::IS_BLOCK_SCOPED_CONTAINER),
        (CASE_BLOCK, ContainerFlags::IS_BLOCK_SCOPED_CONTAINER),
        // A parentless block is not inside a function.
        (BLOCK, ContainerFlags::IS_BLOCK_SCOPED_CONTAINER),
        (VARIABLE_DECLARATION, ContainerFlags::empty()),
        (VARIABLE_STATEMENT, ContainerFlags::empty()),
        (IF_STATEMENT, ContainerFlags::empty()),
        (HERITAGE_CLAUSE, ContainerFlags::empty()),
        (PROPERTY_SIGNATURE, ContainerFlags::empty()),
    ];

    let mut arena = NodeArena::new();
    for &(kind, expected) in table {
        let node = arena.add_bare(kind, 0, 0);
        assert_eq!(
            container_flags(&arena, node),
            expected,
            "container flags of {}",
            kind_name(kind)
        );
    }
}

#[test]
fn tokens_and_missing_nodes_have_no_flags() {
    let mut arena = NodeArena::new();
    let token = arena.add_token(SyntaxKind::ExportKeyword, 0, 6);

    assert_eq!(container_flags(&arena, token), ContainerFlags::empty());
    assert_eq!(
        container_flags(&arena, NodeIndex::NONE),
        ContainerFlags::empty()
    );
}

#[test]
fn container_with_locals_is_container_and_has_locals() {
    assert_eq!(
        ContainerFlags::IS_CONTAINER_WITH_LOCALS,
        ContainerFlags::IS_CONTAINER | ContainerFlags::HAS_LOCALS
    );
}

#[test]
fn function_body_block_is_not_a_block_scope() {
    for kind in [
        FUNCTION_DECLARATION,
        FUNCTION_EXPRESSION,
        ARROW_FUNCTION,
        METHOD_DECLARATION,
        CONSTRUCTOR,
        GET_ACCESSOR,
        SET_ACCESSOR,
    ] {
        let mut arena = NodeArena::new();
        let body = empty_block(&mut arena);
        function(&mut arena, kind, body);

        assert_eq!(
            container_flags(&arena, body),
            ContainerFlags::empty(),
            "body of {}",
            kind_name(kind)
        );
    }
}

#[test]
fn nested_block_is_a_block_scope() {
    let mut arena = NodeArena::new();
    let inner = empty_block(&mut arena);
    let body = arena.add_block(
        BLOCK,
        0,
        0,
        BlockData {
            statements: NodeList::from_nodes(vec![inner]),
        },
    );
    function(&mut arena, FUNCTION_DECLARATION, body);

    assert_eq!(container_flags(&arena, body), ContainerFlags::empty());
    assert_eq!(
        container_flags(&arena, inner),
        ContainerFlags::IS_BLOCK_SCOPED_CONTAINER
    );
}

#[test]
fn object_literal_and_class_expression_methods_are_marked() {
    let mut arena = NodeArena::new();
    let in_object = function(&mut arena, METHOD_DECLARATION, NodeIndex::NONE);
    arena.add_member_list(
        OBJECT_LITERAL_EXPRESSION,
        0,
        0,
        MemberListData {
            members: NodeList::from_nodes(vec![in_object]),
        },
    );

    let in_expression = function(&mut arena, METHOD_DECLARATION, NodeIndex::NONE);
    let in_declaration = function(&mut arena, METHOD_DECLARATION, NodeIndex::NONE);
    for (kind, method) in [
        (CLASS_EXPRESSION, in_expression),
        (CLASS_DECLARATION, in_declaration),
    ] {
        arena.add_class(
            kind,
            0,
            0,
            ClassData {
                modifiers: None,
                name: NodeIndex::NONE,
                heritage_clauses: None,
                members: NodeList::from_nodes(vec![method]),
            },
        );
    }

    let marked =
        function_like() | ContainerFlags::IS_OBJECT_LITERAL_OR_CLASS_EXPRESSION_METHOD;
    assert_eq!(container_flags(&arena, in_object), marked);
    assert_eq!(container_flags(&arena, in_expression), marked);
    assert_eq!(container_flags(&arena, in_declaration), function_like());
}

#[test]
fn property_declaration_is_flow_container_only_with_initializer() {
    let mut arena = NodeArena::new();
    let value = arena.add_literal(
        SyntaxKind::NumericLiteral,
        0,
        1,
        LiteralData {
            text: "1".to_string(),
        },
    );
    let mut property = |initializer| {
        arena.add_property_decl(
            PROPERTY_DECLARATION,
            0,
            0,
            PropertyDeclData {
                modifiers: None,
                name: NodeIndex::NONE,
                type_annotation: NodeIndex::NONE,
                initializer,
            },
        )
    };
    let with_init = property(value);
    let without_init = property(NodeIndex::NONE);

    assert_eq!(
        container_flags(&arena, with_init),
        ContainerFlags::IS_CONTROL_FLOW_CONTAINER
    );
    assert_eq!(container_flags(&arena, without_init), ContainerFlags::empty());
}

#[test]
fn classification_is_repeatable() {
    let mut arena = NodeArena::new();
    let body = empty_block(&mut arena);
    let func = function(&mut arena, ARROW_FUNCTION, body);

    assert_eq!(container_flags(&arena, func), container_flags(&arena, func));
    assert_eq!(container_flags(&arena, body), container_flags(&arena, body));
}
