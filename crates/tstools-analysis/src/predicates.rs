//! Node-level predicates and structural lookups.
//!
//! All of these are total: a missing node, or a node whose kind does not have
//! the requested shape, answers `false` / `None`.

use tstools_syntax::syntax_kind_ext::*;
use tstools_syntax::{NodeArena, NodeIndex, SyntaxKind};

// =============================================================================
// Function-like kinds
// =============================================================================

/// Declaration kinds that carry a function body.
pub fn is_function_like_declaration_kind(kind: u16) -> bool {
    matches!(
        kind,
        FUNCTION_DECLARATION
            | METHOD_DECLARATION
            | CONSTRUCTOR
            | GET_ACCESSOR
            | SET_ACCESSOR
            | FUNCTION_EXPRESSION
            | ARROW_FUNCTION
    )
}

/// Function-like kinds, including signatures and function types.
pub fn is_function_like_kind(kind: u16) -> bool {
    match kind {
        METHOD_SIGNATURE
        | CALL_SIGNATURE
        | CONSTRUCT_SIGNATURE
        | INDEX_SIGNATURE
        | FUNCTION_TYPE
        | JSDOC_FUNCTION_TYPE
        | CONSTRUCTOR_TYPE => true,
        _ => is_function_like_declaration_kind(kind),
    }
}

pub fn is_function_like(arena: &NodeArena, idx: NodeIndex) -> bool {
    arena.kind_of(idx).is_some_and(is_function_like_kind)
}

/// A method declared directly in an object literal or a class expression.
pub fn is_object_literal_or_class_expression_method(arena: &NodeArena, idx: NodeIndex) -> bool {
    if arena.kind_of(idx) != Some(METHOD_DECLARATION) {
        return false;
    }
    matches!(
        arena.kind_of(arena.parent_of(idx)),
        Some(OBJECT_LITERAL_EXPRESSION | CLASS_EXPRESSION)
    )
}

// =============================================================================
// Imports, exports and aliases
// =============================================================================

/// Declarations that create an alias symbol:
///
/// ```typescript
/// import a = require("m");      // import-equals
/// import a from "m";            // import clause with a name
/// import * as a from "m";       // namespace import
/// import { x as a } from "m";   // import specifier
/// export { x as a } from "m";   // export specifier
/// export = a;                   // export assignment of an identifier
/// ```
pub fn is_alias_symbol_declaration(arena: &NodeArena, idx: NodeIndex) -> bool {
    let Some(node) = arena.get(idx) else {
        return false;
    };
    match node.kind {
        IMPORT_EQUALS_DECLARATION | NAMESPACE_IMPORT | IMPORT_SPECIFIER | EXPORT_SPECIFIER => true,
        IMPORT_CLAUSE => arena
            .get_import_clause(node)
            .is_some_and(|clause| clause.name.is_some()),
        EXPORT_ASSIGNMENT => arena
            .get_export_assignment(node)
            .is_some_and(|assignment| is_identifier(arena, assignment.expression)),
        _ => false,
    }
}

pub fn is_identifier(arena: &NodeArena, idx: NodeIndex) -> bool {
    arena.kind_of(idx) == Some(SyntaxKind::Identifier as u16)
}

pub fn is_namespace_import(arena: &NodeArena, idx: NodeIndex) -> bool {
    arena.kind_of(idx) == Some(NAMESPACE_IMPORT)
}

/// Import declaration, import-equals declaration or export declaration.
pub fn is_any_import_or_export(arena: &NodeArena, idx: NodeIndex) -> bool {
    matches!(
        arena.kind_of(idx),
        Some(IMPORT_DECLARATION | IMPORT_EQUALS_DECLARATION | EXPORT_DECLARATION)
    )
}

/// Module specifier of an import/export declaration, or the `require(...)`
/// argument of an import-equals declaration.
pub fn get_external_module_name(arena: &NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
    let node = arena.get(idx)?;
    match node.kind {
        IMPORT_DECLARATION => arena.get_import_decl(node)?.module_specifier.into_option(),
        EXPORT_DECLARATION => arena.get_export_decl(node)?.module_specifier.into_option(),
        IMPORT_EQUALS_DECLARATION => {
            let reference = arena.get_import_equals(node)?.module_reference;
            let reference_node = arena.get(reference)?;
            // `import a = N.M` names an entity, not a module.
            arena
                .get_external_module_ref(reference_node)?
                .expression
                .into_option()
        }
        _ => None,
    }
}

/// `x.prototype.y = ...`
pub fn is_prototype_access_assignment(arena: &NodeArena, idx: NodeIndex) -> bool {
    let Some(node) = arena.get(idx) else {
        return false;
    };
    let Some(binary) = arena.get_binary_expr(node) else {
        return false;
    };
    if binary.operator_token != SyntaxKind::EqualsToken as u16 {
        return false;
    }

    let Some(lhs) = arena.get(binary.left).and_then(|n| arena.get_access_expr(n)) else {
        return false;
    };
    // Chained dot: for `x.prototype.y` this is the `x.prototype` part.
    let Some(inner) = arena.get(lhs.expression).and_then(|n| arena.get_access_expr(n)) else {
        return false;
    };

    is_identifier(arena, inner.expression)
        && arena.get_identifier_text(inner.name_or_argument) == Some("prototype")
}

// =============================================================================
// Token ranges
// =============================================================================

pub fn is_keyword(token: u16) -> bool {
    (SyntaxKind::FIRST_KEYWORD..=SyntaxKind::LAST_KEYWORD).contains(&token)
}

pub fn is_punctuation(token: u16) -> bool {
    (SyntaxKind::FIRST_PUNCTUATION..=SyntaxKind::LAST_PUNCTUATION).contains(&token)
}

pub fn is_trivia(token: u16) -> bool {
    (SyntaxKind::FIRST_TRIVIA_TOKEN..=SyntaxKind::LAST_TRIVIA_TOKEN).contains(&token)
}

// =============================================================================
// Heritage clauses
// =============================================================================

/// First heritage clause of a class-like node introduced by `token`
/// (`ExtendsKeyword` or `ImplementsKeyword`).
pub fn get_heritage_clause(
    arena: &NodeArena,
    idx: NodeIndex,
    token: SyntaxKind,
) -> Option<NodeIndex> {
    let node = arena.get(idx)?;
    let clauses = arena.get_heritage_clauses(node)?;

    clauses.iter().find(|&clause_idx| {
        arena
            .get(clause_idx)
            .and_then(|clause_node| arena.get_heritage_clause(clause_node))
            .is_some_and(|clause| clause.token == token as u16)
    })
}

pub fn get_extends_clause(arena: &NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
    get_heritage_clause(arena, idx, SyntaxKind::ExtendsKeyword)
}

pub fn get_implements_clause(arena: &NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
    get_heritage_clause(arena, idx, SyntaxKind::ImplementsKeyword)
}

// =============================================================================
// Source files
// =============================================================================

/// Nearest `SourceFile` at or above `idx`.
pub fn get_source_file_of_node(arena: &NodeArena, idx: NodeIndex) -> Option<NodeIndex> {
    arena
        .parent_chain(idx)
        .find(|&ancestor| arena.kind_of(ancestor) == Some(SOURCE_FILE))
}

/// A `SourceFile` that is not a declaration (`.d.ts`) file.
pub fn is_source_code_file(arena: &NodeArena, idx: NodeIndex) -> bool {
    arena
        .get(idx)
        .and_then(|node| arena.get_source_file(node))
        .is_some_and(|file| !file.is_declaration_file)
}
