//! TypeScript AST model consumed by tstools.
//!
//! The tree is produced elsewhere (an external parser and checker) and handed
//! over as a [`NodeArena`]. Nodes are 16-byte-ish headers referencing typed
//! data pools; parents are plain [`NodeIndex`] back-references kept in
//! [`ExtendedNodeInfo`], used only for upward navigation.
//!
//! Nothing in this crate parses source text.

pub mod base;
pub use base::{NodeIndex, NodeList};

// Token kinds (keywords, punctuation, trivia)
pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

// Node kinds beyond the token range
pub mod syntax_kind_ext;

// NodeFlags
pub mod flags;
pub use flags::node_flags;

// Node headers, typed data pools and the arena
pub mod node;
pub use node::*;

// NodeArena creation methods (add_*)
mod node_arena;

// NodeArena access methods (get_*) and parent-chain iteration
mod node_access;
pub use node_access::ParentChain;

/// Display name of a raw kind: `"ExportKeyword"`, `"ClassDeclaration"`.
pub fn kind_name(kind: u16) -> String {
    if let Some(token) = SyntaxKind::try_from_u16(kind) {
        return format!("{token:?}");
    }
    syntax_kind_ext::node_kind_name(kind)
        .map_or_else(|| format!("Unknown({kind})"), str::to_string)
}
