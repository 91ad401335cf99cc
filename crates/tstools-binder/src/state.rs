//! Binder state: the symbol arena plus node links.
//!
//! Symbols are declared from the outside (a checker hands over what it bound).
//! The state only records them and keeps the node -> symbol mapping.

use crate::{SymbolArena, SymbolId, SymbolTable, symbol_flags};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;
use tstools_syntax::NodeIndex;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BinderState {
    /// Arena for symbol storage
    pub symbols: SymbolArena,
    /// Node-to-symbol mapping, keyed by node index
    pub node_symbols: FxHashMap<u32, SymbolId>,
    /// File-level locals
    pub file_locals: SymbolTable,
}

impl BinderState {
    pub fn new() -> Self {
        BinderState::default()
    }

    /// Record a declaration of `name`.
    ///
    /// A second declaration of an existing file-level name with overlapping
    /// flags merges into the existing symbol (interface merging, namespace
    /// reopening). Value symbols keep their first value declaration.
    pub fn declare_symbol(&mut self, declaration: NodeIndex, flags: u32, name: &str) -> SymbolId {
        let merge_target = self
            .file_locals
            .get(name)
            .filter(|&existing| {
                self.symbols
                    .get(existing)
                    .is_some_and(|sym| sym.has_any_flags(flags))
            });

        let sym_id = match merge_target {
            Some(existing) => existing,
            None => {
                let id = self.symbols.alloc(flags, name.to_string());
                self.file_locals.set(name.to_string(), id);
                id
            }
        };

        if let Some(sym) = self.symbols.get_mut(sym_id) {
            sym.flags |= flags;
            if declaration.is_some() {
                sym.declarations.push(declaration);
                if flags & symbol_flags::VALUE != 0 && sym.value_declaration.is_none() {
                    sym.value_declaration = declaration;
                }
            }
        }
        if declaration.is_some() {
            self.node_symbols.insert(declaration.0, sym_id);
        }

        trace!(symbol_name = name, flags, ?declaration, symbol = sym_id.0, "declared symbol");
        sym_id
    }

    /// Record a member symbol (property, method, ...) owned by `parent`.
    ///
    /// Members are not file locals, so they never merge by name.
    pub fn declare_member(
        &mut self,
        parent: SymbolId,
        declaration: NodeIndex,
        flags: u32,
        name: &str,
    ) -> SymbolId {
        let sym_id = self.symbols.alloc(flags, name.to_string());
        if let Some(sym) = self.symbols.get_mut(sym_id) {
            sym.parent = parent;
            if declaration.is_some() {
                sym.declarations.push(declaration);
                if flags & symbol_flags::VALUE != 0 {
                    sym.value_declaration = declaration;
                }
            }
        }
        if declaration.is_some() {
            self.node_symbols.insert(declaration.0, sym_id);
        }
        sym_id
    }

    /// Symbol attached to a declaration node.
    #[inline]
    pub fn get_node_symbol(&self, node: NodeIndex) -> Option<SymbolId> {
        if node.is_none() {
            return None;
        }
        self.node_symbols.get(&node.0).copied()
    }

    /// Give every symbol without an identity tag the next free id.
    ///
    /// Ids start above the largest id already present, so ids handed over by
    /// an external stage are preserved.
    pub fn assign_symbol_ids(&mut self) {
        let mut next = self
            .symbols
            .iter()
            .filter_map(|(_, sym)| sym.id)
            .max()
            .map_or(1, |max| max + 1);

        for index in 0..self.symbols.len() {
            let Some(sym) = self.symbols.get_mut(SymbolId(index as u32)) else {
                continue;
            };
            if sym.id.is_none() {
                sym.id = Some(next);
                next += 1;
            }
        }
    }
}
