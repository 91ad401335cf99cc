//! Syntactic modifier decoding.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tstools_syntax::{NodeArena, NodeIndex, NodeList, SyntaxKind, node_flags};

bitflags! {
    /// Modifier flags, with TypeScript's `ModifierFlags` values.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ModifierFlags: u32 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const READONLY = 1 << 3;
        const EXPORT = 1 << 5;
        const ABSTRACT = 1 << 6;
        /// `declare`
        const AMBIENT = 1 << 7;
        const STATIC = 1 << 8;
        const ASYNC = 1 << 10;
        const DEFAULT = 1 << 11;
        const CONST = 1 << 12;

        const ACCESSIBILITY = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
    }
}

/// Flag contributed by a single modifier token. Tokens that are not
/// modifiers contribute nothing.
pub fn modifier_to_flag(token: u16) -> ModifierFlags {
    let Some(kind) = SyntaxKind::try_from_u16(token) else {
        return ModifierFlags::empty();
    };
    match kind {
        SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
        SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
        SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
        SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
        SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
        SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
        SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
        SyntaxKind::ConstKeyword => ModifierFlags::CONST,
        SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
        SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
        SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
        _ => ModifierFlags::empty(),
    }
}

/// Union of the flags of every token in a modifier list.
pub fn modifiers_to_flags(arena: &NodeArena, modifiers: Option<&NodeList>) -> ModifierFlags {
    let Some(modifiers) = modifiers else {
        return ModifierFlags::empty();
    };
    modifiers
        .iter()
        .filter_map(|modifier| arena.get(modifier))
        .fold(ModifierFlags::empty(), |flags, token| {
            flags | modifier_to_flag(token.kind)
        })
}

/// Syntactic modifier flags of `idx`.
///
/// Reads only the node's own modifier tokens; parents are not consulted. The
/// inner declaration of a dotted namespace (`namespace A.B {}`) and an
/// identifier inside a JSDoc `@namespace` are implicitly exported.
pub fn modifier_flags(arena: &NodeArena, idx: NodeIndex) -> ModifierFlags {
    let Some(node) = arena.get(idx) else {
        return ModifierFlags::empty();
    };

    let mut flags = modifiers_to_flags(arena, arena.get_modifiers(node));

    let in_jsdoc_namespace = arena
        .get_identifier(node)
        .is_some_and(|ident| ident.is_in_jsdoc_namespace);
    if node.has_flags(node_flags::NESTED_NAMESPACE) || in_jsdoc_namespace {
        flags |= ModifierFlags::EXPORT;
    }

    flags
}

/// True when `idx` carries every flag in `flags`.
#[inline]
pub fn has_modifier(arena: &NodeArena, idx: NodeIndex, flags: ModifierFlags) -> bool {
    modifier_flags(arena, idx).contains(flags)
}
