//! Container classification.
//!
//! Decides, per node kind, whether a node opens a lexical scope, a block scope
//! or a control-flow region, and whether it owns a locals table.

use crate::predicates::{is_function_like, is_object_literal_or_class_expression_method};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tstools_syntax::syntax_kind_ext::*;
use tstools_syntax::{NodeArena, NodeIndex};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ContainerFlags: u32 {
        /// Set as the current container (and block container) before
        /// recursing into the node. Classes, object literals, type literals,
        /// interfaces.
        const IS_CONTAINER = 1 << 0;
        /// Set as the current block container only. Blocks not parented by
        /// functions, catch clauses, for statements.
        const IS_BLOCK_SCOPED_CONTAINER = 1 << 1;
        /// Starts a fresh control-flow graph.
        const IS_CONTROL_FLOW_CONTAINER = 1 << 2;
        const IS_FUNCTION_LIKE = 1 << 3;
        const IS_FUNCTION_EXPRESSION = 1 << 4;
        const HAS_LOCALS = 1 << 5;
        const IS_INTERFACE = 1 << 6;
        const IS_OBJECT_LITERAL_OR_CLASS_EXPRESSION_METHOD = 1 << 7;

        const IS_CONTAINER_WITH_LOCALS = Self::IS_CONTAINER.bits() | Self::HAS_LOCALS.bits();
    }
}

const FUNCTION_LIKE_CONTAINER: ContainerFlags = ContainerFlags::IS_CONTAINER
    .union(ContainerFlags::IS_CONTROL_FLOW_CONTAINER)
    .union(ContainerFlags::HAS_LOCALS)
    .union(ContainerFlags::IS_FUNCTION_LIKE);

/// Container role of `idx`. Total over all node kinds; unknown nodes and
/// kinds outside the table yield no flags.
pub fn container_flags(arena: &NodeArena, idx: NodeIndex) -> ContainerFlags {
    let Some(node) = arena.get(idx) else {
        return ContainerFlags::empty();
    };

    match node.kind {
        CLASS_EXPRESSION
        | CLASS_DECLARATION
        | ENUM_DECLARATION
        | OBJECT_LITERAL_EXPRESSION
        | TYPE_LITERAL
        | JSDOC_TYPE_LITERAL
        | JSX_ATTRIBUTES => ContainerFlags::IS_CONTAINER,

        INTERFACE_DECLARATION => ContainerFlags::IS_CONTAINER | ContainerFlags::IS_INTERFACE,

        MODULE_DECLARATION | TYPE_ALIAS_DECLARATION | MAPPED_TYPE => {
            ContainerFlags::IS_CONTAINER_WITH_LOCALS
        }

        SOURCE_FILE => {
            ContainerFlags::IS_CONTAINER_WITH_LOCALS | ContainerFlags::IS_CONTROL_FLOW_CONTAINER
        }

        METHOD_DECLARATION if is_object_literal_or_class_expression_method(arena, idx) => {
            FUNCTION_LIKE_CONTAINER
                | ContainerFlags::IS_OBJECT_LITERAL_OR_CLASS_EXPRESSION_METHOD
        }

        METHOD_DECLARATION
        | CONSTRUCTOR
        | FUNCTION_DECLARATION
        | METHOD_SIGNATURE
        | GET_ACCESSOR
        | SET_ACCESSOR
        | CALL_SIGNATURE
        | JSDOC_FUNCTION_TYPE
        | FUNCTION_TYPE
        | CONSTRUCT_SIGNATURE
        | INDEX_SIGNATURE
        | CONSTRUCTOR_TYPE => FUNCTION_LIKE_CONTAINER,

        FUNCTION_EXPRESSION | ARROW_FUNCTION => {
            FUNCTION_LIKE_CONTAINER | ContainerFlags::IS_FUNCTION_EXPRESSION
        }

        MODULE_BLOCK => ContainerFlags::IS_CONTROL_FLOW_CONTAINER,

        PROPERTY_DECLARATION => {
            let has_initializer = arena
                .get_property_decl(node)
                .is_some_and(|prop| prop.initializer.is_some());
            if has_initializer {
                ContainerFlags::IS_CONTROL_FLOW_CONTAINER
            } else {
                ContainerFlags::empty()
            }
        }

        CATCH_CLAUSE | FOR_STATEMENT | FOR_IN_STATEMENT | FOR_OF_STATEMENT | CASE_BLOCK => {
            ContainerFlags::IS_BLOCK_SCOPED_CONTAINER
        }

        // A function body is not a block scope of its own: `var x; let x;`
        // directly inside a function must land in the same locals table so
        // the redeclaration is reported.
        BLOCK => {
            if is_function_like(arena, arena.parent_of(idx)) {
                ContainerFlags::empty()
            } else {
                ContainerFlags::IS_BLOCK_SCOPED_CONTAINER
            }
        }

        _ => ContainerFlags::empty(),
    }
}
