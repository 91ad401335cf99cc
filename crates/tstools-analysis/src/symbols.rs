//! Symbol-level predicates.
//!
//! The context predicates start at a symbol's value declaration and walk
//! parent links up to the source file. A symbol without a value declaration
//! (an interface, a type alias) is never in an export or ambient context.

use crate::modifiers::{ModifierFlags, has_modifier, modifier_flags};
use crate::oracle::TypeResolver;
use crate::predicates::{get_external_module_name, is_source_code_file};
use tstools_binder::{BinderState, Symbol, SymbolId, symbol_flags};
use tstools_common::debug;
use tstools_syntax::syntax_kind_ext::{MODULE_DECLARATION, SOURCE_FILE};
use tstools_syntax::{NodeArena, NodeIndex, SyntaxKind, node_flags};

/// Declared inside a container the binder marked as exporting its members.
pub fn is_export_context(arena: &NodeArena, symbol: &Symbol) -> bool {
    arena
        .parent_chain(symbol.value_declaration)
        .filter_map(|idx| arena.get(idx))
        .any(|node| node.has_flags(node_flags::EXPORT_CONTEXT))
}

/// The value declaration or one of its ancestors carries `declare`.
pub fn is_ambient_context(arena: &NodeArena, symbol: &Symbol) -> bool {
    ancestor_has_modifier(arena, symbol, ModifierFlags::AMBIENT)
}

/// The value declaration or one of its ancestors carries `export`.
pub fn is_export_property(arena: &NodeArena, symbol: &Symbol) -> bool {
    ancestor_has_modifier(arena, symbol, ModifierFlags::EXPORT)
}

/// Same walk as [`is_export_property`], for variable symbols.
pub fn is_export_variable(arena: &NodeArena, symbol: &Symbol) -> bool {
    ancestor_has_modifier(arena, symbol, ModifierFlags::EXPORT)
}

fn ancestor_has_modifier(arena: &NodeArena, symbol: &Symbol, flag: ModifierFlags) -> bool {
    arena
        .parent_chain(symbol.value_declaration)
        .any(|idx| has_modifier(arena, idx, flag))
}

/// A class that is only visible inside its own module.
///
/// Classes in an export or ambient context belong to an external API and are
/// never internal. Otherwise a class is internal when its declaration is not
/// exported.
///
/// # Panics
///
/// When a class symbol has no value declaration; the checker always sets one.
pub fn is_class_internal(arena: &NodeArena, symbol: &Symbol) -> bool {
    if !symbol.has_any_flags(symbol_flags::CLASS) {
        return false;
    }
    if is_export_context(arena, symbol) || is_ambient_context(arena, symbol) {
        return false;
    }

    debug::assert(symbol.value_declaration.is_some(), || {
        format!("class symbol '{}' has a value declaration", symbol.escaped_name)
    });
    !modifier_flags(arena, symbol.value_declaration).contains(ModifierFlags::EXPORT)
}

pub fn is_class_abstract(arena: &NodeArena, symbol: &Symbol) -> bool {
    symbol.value_declaration.is_some()
        && has_modifier(arena, symbol.value_declaration, ModifierFlags::ABSTRACT)
}

/// Interfaces are never treated as internal.
pub fn is_interface_internal(_symbol: &Symbol) -> bool {
    // TODO: decide on a naming convention that marks interfaces internal.
    false
}

/// First declaration is a `declare module` / `declare namespace`.
pub fn is_ambient_module(arena: &NodeArena, symbol: &Symbol) -> bool {
    let Some(node) = arena.get(symbol.first_declaration()) else {
        return false;
    };
    if node.kind != MODULE_DECLARATION {
        return false;
    }
    arena.get_modifiers(node).is_some_and(|modifiers| {
        modifiers
            .iter()
            .any(|m| arena.kind_of(m) == Some(SyntaxKind::DeclareKeyword as u16))
    })
}

/// A module symbol whose first declaration is a non-declaration source file.
pub fn is_source_code_module(arena: &NodeArena, symbol: &Symbol) -> bool {
    is_source_code_file(arena, symbol.first_declaration())
}

/// Name of the first declaration that has one.
pub fn get_identifier_from_symbol(arena: &NodeArena, symbol: &Symbol) -> Option<NodeIndex> {
    symbol
        .declarations
        .iter()
        .map(|&decl| arena.get_declaration_name(decl))
        .find(|name| name.is_some())
}

/// The first declaration, when it is a source file (module symbols).
pub fn get_source_file_from_symbol(arena: &NodeArena, symbol: &Symbol) -> Option<NodeIndex> {
    let first = symbol.first_declaration();
    (arena.kind_of(first) == Some(SOURCE_FILE)).then_some(first)
}

/// Source file of the module named by an import or export's string specifier.
pub fn get_source_file_from_any_import_export_node<R: TypeResolver + ?Sized>(
    arena: &NodeArena,
    binder: &BinderState,
    resolver: &R,
    idx: NodeIndex,
) -> Option<NodeIndex> {
    let module_name = get_external_module_name(arena, idx)?;
    if arena.kind_of(module_name) != Some(SyntaxKind::StringLiteral as u16) {
        return None;
    }

    let module_symbol = resolver.symbol_at_location(module_name)?;
    let declaration = binder.symbols.get(module_symbol)?.first_declaration();
    crate::predicates::get_source_file_of_node(arena, declaration)
}

/// Stable textual identity of a symbol.
///
/// Prefers the symbol's own identity tag, then the tag of the symbol attached
/// to its value declaration. Tags are numbered from 1; a zero tag counts as
/// unassigned.
pub fn identifier_uid(binder: &BinderState, symbol_id: SymbolId) -> Option<String> {
    let symbol = binder.symbols.get(symbol_id)?;

    let id = symbol.id.or_else(|| {
        binder
            .get_node_symbol(symbol.value_declaration)
            .and_then(|declared| binder.symbols.get(declared))
            .and_then(|declared| declared.id)
    });

    id.filter(|&id| id != 0).map(|id| id.to_string())
}
