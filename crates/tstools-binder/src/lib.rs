//! Symbol table model for tstools.
//!
//! Symbols are produced by an external checker and recorded here so the
//! analysis crate can answer questions about them. Nothing in this crate
//! performs name resolution.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tstools_syntax::NodeIndex;

mod state;
pub use state::BinderState;

/// Symbol flags, with TypeScript's `SymbolFlags` values.
pub mod symbol_flags {
    pub const NONE: u32 = 0;
    pub const FUNCTION_SCOPED_VARIABLE: u32 = 1 << 0;
    pub const BLOCK_SCOPED_VARIABLE: u32 = 1 << 1;
    pub const PROPERTY: u32 = 1 << 2;
    pub const ENUM_MEMBER: u32 = 1 << 3;
    pub const FUNCTION: u32 = 1 << 4;
    pub const CLASS: u32 = 1 << 5;
    pub const INTERFACE: u32 = 1 << 6;
    pub const CONST_ENUM: u32 = 1 << 7;
    pub const REGULAR_ENUM: u32 = 1 << 8;
    pub const VALUE_MODULE: u32 = 1 << 9;
    pub const NAMESPACE_MODULE: u32 = 1 << 10;
    pub const TYPE_LITERAL: u32 = 1 << 11;
    pub const OBJECT_LITERAL: u32 = 1 << 12;
    pub const METHOD: u32 = 1 << 13;
    pub const CONSTRUCTOR: u32 = 1 << 14;
    pub const GET_ACCESSOR: u32 = 1 << 15;
    pub const SET_ACCESSOR: u32 = 1 << 16;
    pub const SIGNATURE: u32 = 1 << 17;
    pub const TYPE_PARAMETER: u32 = 1 << 18;
    pub const TYPE_ALIAS: u32 = 1 << 19;
    pub const EXPORT_VALUE: u32 = 1 << 20;
    pub const ALIAS: u32 = 1 << 21;
    pub const PROTOTYPE: u32 = 1 << 22;
    pub const EXPORT_STAR: u32 = 1 << 23;
    pub const OPTIONAL: u32 = 1 << 24;
    pub const TRANSIENT: u32 = 1 << 25;
    pub const ASSIGNMENT: u32 = 1 << 26;
    pub const MODULE_EXPORTS: u32 = 1 << 27;

    pub const ENUM: u32 = REGULAR_ENUM | CONST_ENUM;
    pub const VARIABLE: u32 = FUNCTION_SCOPED_VARIABLE | BLOCK_SCOPED_VARIABLE;
    pub const VALUE: u32 = VARIABLE
        | PROPERTY
        | ENUM_MEMBER
        | OBJECT_LITERAL
        | FUNCTION
        | CLASS
        | ENUM
        | VALUE_MODULE
        | METHOD
        | GET_ACCESSOR
        | SET_ACCESSOR;
    pub const TYPE: u32 =
        CLASS | INTERFACE | ENUM | ENUM_MEMBER | TYPE_LITERAL | TYPE_PARAMETER | TYPE_ALIAS;
    pub const NAMESPACE: u32 = VALUE_MODULE | NAMESPACE_MODULE | ENUM;
    pub const MODULE: u32 = VALUE_MODULE | NAMESPACE_MODULE;
    pub const ACCESSOR: u32 = GET_ACCESSOR | SET_ACCESSOR;
    pub const CLASS_MEMBER: u32 = METHOD | ACCESSOR | PROPERTY;
}

/// Index of a symbol in a [`SymbolArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub const NONE: SymbolId = SymbolId(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for SymbolId {
    fn default() -> Self {
        SymbolId::NONE
    }
}

/// A named, resolved program entity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Symbol {
    pub flags: u32,
    pub escaped_name: String,
    pub declarations: Vec<NodeIndex>,
    #[serde(default)]
    pub value_declaration: NodeIndex,
    /// Identity tag assigned by whichever stage numbers symbols. Absent until
    /// that stage has seen the symbol.
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub parent: SymbolId,
}

impl Symbol {
    pub fn new(flags: u32, escaped_name: String) -> Symbol {
        Symbol {
            flags,
            escaped_name,
            declarations: Vec::new(),
            value_declaration: NodeIndex::NONE,
            id: None,
            parent: SymbolId::NONE,
        }
    }

    #[inline]
    pub fn has_any_flags(&self, flags: u32) -> bool {
        self.flags & flags != 0
    }

    /// First declaration, or `NodeIndex::NONE`.
    #[inline]
    pub fn first_declaration(&self) -> NodeIndex {
        self.declarations.first().copied().unwrap_or(NodeIndex::NONE)
    }
}

/// Storage for symbols, addressed by [`SymbolId`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    pub fn new() -> SymbolArena {
        SymbolArena::default()
    }

    /// Allocate a new symbol and return its id.
    pub fn alloc(&mut self, flags: u32, name: String) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol::new(flags, name));
        id
    }

    #[inline]
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        if id.is_none() {
            return None;
        }
        self.symbols.get(id.0 as usize)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        if id.is_none() {
            return None;
        }
        self.symbols.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| (SymbolId(i as u32), symbol))
    }
}

/// Name to symbol map for one scope.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SymbolTable {
    symbols: FxHashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get(name).copied()
    }

    pub fn set(&mut self, name: String, id: SymbolId) {
        self.symbols.insert(name, id);
    }

    pub fn has(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
