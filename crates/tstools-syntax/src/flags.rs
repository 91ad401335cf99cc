//! Flags carried on AST nodes.

/// NodeFlags, as set by the parser and binder that produced the tree.
///
/// Values match TypeScript's `NodeFlags`.
pub mod node_flags {
    pub const NONE: u32 = 0;
    pub const LET: u32 = 1 << 0;
    pub const CONST: u32 = 1 << 1;
    pub const USING: u32 = 1 << 2;
    pub const AWAIT_USING: u32 = CONST | USING;
    /// Inner declaration of a dotted namespace (`namespace A.B {}` marks `B`).
    pub const NESTED_NAMESPACE: u32 = 1 << 3;
    pub const SYNTHESIZED: u32 = 1 << 4;
    pub const NAMESPACE: u32 = 1 << 5;
    pub const OPTIONAL_CHAIN: u32 = 1 << 6;
    /// Set by the binder on declarations whose container exports them.
    pub const EXPORT_CONTEXT: u32 = 1 << 7;
    pub const CONTAINS_THIS: u32 = 1 << 8;
    pub const HAS_IMPLICIT_RETURN: u32 = 1 << 9;
    pub const HAS_EXPLICIT_RETURN: u32 = 1 << 10;
    pub const GLOBAL_AUGMENTATION: u32 = 1 << 11;
    pub const HAS_ASYNC_FUNCTIONS: u32 = 1 << 12;
    pub const DISALLOW_IN_CONTEXT: u32 = 1 << 13;
    pub const YIELD_CONTEXT: u32 = 1 << 14;
    pub const DECORATOR_CONTEXT: u32 = 1 << 15;
    pub const AWAIT_CONTEXT: u32 = 1 << 16;
    pub const DISALLOW_CONDITIONAL_TYPES_CONTEXT: u32 = 1 << 17;
    pub const THIS_NODE_HAS_ERROR: u32 = 1 << 18;
    pub const JAVASCRIPT_FILE: u32 = 1 << 19;
    pub const THIS_NODE_OR_ANY_SUB_NODES_HAS_ERROR: u32 = 1 << 20;
    pub const HAS_AGGREGATED_CHILD_DATA: u32 = 1 << 21;
    pub const JSDOC: u32 = 1 << 24;
    pub const AMBIENT: u32 = 1 << 25;
    pub const IN_WITH_STATEMENT: u32 = 1 << 26;
    pub const JSON_FILE: u32 = 1 << 27;
    pub const DEPRECATED: u32 = 1 << 29;

    pub const BLOCK_SCOPED: u32 = LET | CONST | USING;
}
