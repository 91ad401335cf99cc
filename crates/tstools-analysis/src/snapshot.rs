//! A program captured as plain tables.
//!
//! [`ProgramSnapshot`] bundles a node arena, a binder state and a
//! [`TypeTable`] holding the answers a checker gave for heritage references.
//! It round-trips through serde, so an external toolchain can export a
//! checked program once and the CLI can query it offline.

use crate::heritage::HeritageResolver;
use crate::oracle::{TypeId, TypeResolver};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tstools_binder::{BinderState, SymbolId};
use tstools_syntax::{NodeArena, NodeIndex};

/// A resolved type: its declaring symbol and its member symbols.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TypeEntry {
    #[serde(default)]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub properties: Vec<SymbolId>,
}

/// Table-backed [`TypeResolver`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TypeTable {
    pub types: Vec<TypeEntry>,
    /// Type of each type-reference node, keyed by node index
    #[serde(default)]
    pub node_types: FxHashMap<u32, TypeId>,
    /// Symbol each expression node refers to, keyed by node index
    #[serde(default)]
    pub node_symbols: FxHashMap<u32, SymbolId>,
}

impl TypeTable {
    pub fn new() -> TypeTable {
        TypeTable::default()
    }

    pub fn add_type(&mut self, symbol: Option<SymbolId>, properties: Vec<SymbolId>) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeEntry { symbol, properties });
        id
    }

    pub fn get(&self, ty: TypeId) -> Option<&TypeEntry> {
        self.types.get(ty.0 as usize)
    }

    pub fn set_type_at(&mut self, node: NodeIndex, ty: TypeId) {
        self.node_types.insert(node.0, ty);
    }

    pub fn set_symbol_at(&mut self, node: NodeIndex, symbol: SymbolId) {
        self.node_symbols.insert(node.0, symbol);
    }
}

impl TypeResolver for TypeTable {
    fn type_at_location(&self, node: NodeIndex) -> Option<TypeId> {
        if node.is_none() {
            return None;
        }
        self.node_types.get(&node.0).copied()
    }

    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId> {
        self.get(ty).and_then(|entry| entry.symbol)
    }

    fn type_properties(&self, ty: TypeId) -> Vec<SymbolId> {
        self.get(ty)
            .map(|entry| entry.properties.clone())
            .unwrap_or_default()
    }

    fn symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId> {
        if node.is_none() {
            return None;
        }
        self.node_symbols.get(&node.0).copied()
    }
}

/// A checked program: tree, symbols and type answers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProgramSnapshot {
    pub arena: NodeArena,
    pub binder: BinderState,
    pub types: TypeTable,
}

impl ProgramSnapshot {
    pub fn new(arena: NodeArena, binder: BinderState, types: TypeTable) -> ProgramSnapshot {
        ProgramSnapshot {
            arena,
            binder,
            types,
        }
    }

    /// Heritage resolver answering from this snapshot's tables.
    pub fn heritage(&self) -> HeritageResolver<'_, TypeTable> {
        HeritageResolver::new(&self.arena, &self.binder, &self.types)
    }

    /// Escaped names of `symbols`, skipping ids the binder does not know.
    pub fn symbol_names(&self, symbols: &[SymbolId]) -> Vec<&str> {
        symbols
            .iter()
            .filter_map(|&id| self.binder.symbols.get(id))
            .map(|symbol| symbol.escaped_name.as_str())
            .collect()
    }

    /// Every node index in the arena, in creation order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.arena.len() as u32).map(NodeIndex)
    }
}
