//! NodeArena access methods (get_* methods) and parent-chain iteration.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::syntax_kind::SyntaxKind;
use super::syntax_kind_ext::*;
use tstools_common::limits::MAX_TREE_WALK_ITERATIONS;

impl NodeArena {
    /// Get a thin node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable thin node by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Get extended info for a node
    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of `index`, or `NodeIndex::NONE` for roots and unknown nodes.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    /// Kind of `index`, if the node exists.
    #[inline]
    pub fn kind_of(&self, index: NodeIndex) -> Option<u16> {
        self.get(index).map(|node| node.kind)
    }

    /// Iterate `index` itself followed by its ancestors, nearest first.
    pub fn parent_chain(&self, index: NodeIndex) -> ParentChain<'_> {
        ParentChain {
            arena: self,
            current: index,
            steps: 0,
        }
    }

    // ============================================================================
    // Typed data access
    // ============================================================================

    #[inline]
    fn pooled<'a, T>(pool: &'a [T], node: &Node, accepts: bool) -> Option<&'a T> {
        if accepts && node.has_data() {
            pool.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Get identifier data for a node.
    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        let accepts = node.kind == SyntaxKind::Identifier as u16
            || node.kind == SyntaxKind::PrivateIdentifier as u16;
        Self::pooled(&self.identifiers, node, accepts)
    }

    /// Text of an identifier node.
    pub fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node)
            .map(|ident| ident.escaped_text.as_str())
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        let accepts = node.kind == SyntaxKind::StringLiteral as u16
            || node.kind == SyntaxKind::NumericLiteral as u16
            || node.kind == SyntaxKind::NoSubstitutionTemplateLiteral as u16;
        Self::pooled(&self.literals, node, accepts)
    }

    #[inline]
    pub fn get_class(&self, node: &Node) -> Option<&ClassData> {
        let accepts = node.kind == CLASS_DECLARATION || node.kind == CLASS_EXPRESSION;
        Self::pooled(&self.classes, node, accepts)
    }

    #[inline]
    pub fn get_interface(&self, node: &Node) -> Option<&InterfaceData> {
        Self::pooled(
            &self.interfaces,
            node,
            node.kind == INTERFACE_DECLARATION,
        )
    }

    #[inline]
    pub fn get_heritage_clause(&self, node: &Node) -> Option<&HeritageData> {
        Self::pooled(&self.heritage_clauses, node, node.kind == HERITAGE_CLAUSE)
    }

    #[inline]
    pub fn get_expr_type_args(&self, node: &Node) -> Option<&ExprWithTypeArgsData> {
        Self::pooled(
            &self.expr_with_type_args,
            node,
            node.kind == EXPRESSION_WITH_TYPE_ARGUMENTS,
        )
    }

    #[inline]
    pub fn get_function(&self, node: &Node) -> Option<&FunctionData> {
        let accepts = matches!(
            node.kind,
            FUNCTION_DECLARATION
                | FUNCTION_EXPRESSION
                | ARROW_FUNCTION
                | METHOD_DECLARATION
                | CONSTRUCTOR
                | GET_ACCESSOR
                | SET_ACCESSOR
                | CLASS_STATIC_BLOCK_DECLARATION
        );
        Self::pooled(&self.functions, node, accepts)
    }

    #[inline]
    pub fn get_signature(&self, node: &Node) -> Option<&SignatureData> {
        let accepts = matches!(
            node.kind,
            METHOD_SIGNATURE
                | CALL_SIGNATURE
                | CONSTRUCT_SIGNATURE
                | INDEX_SIGNATURE
                | FUNCTION_TYPE
                | CONSTRUCTOR_TYPE
                | JSDOC_FUNCTION_TYPE
        );
        Self::pooled(&self.signatures, node, accepts)
    }

    #[inline]
    pub fn get_property_decl(&self, node: &Node) -> Option<&PropertyDeclData> {
        let accepts = node.kind == PROPERTY_DECLARATION || node.kind == PROPERTY_SIGNATURE;
        Self::pooled(&self.property_decls, node, accepts)
    }

    #[inline]
    pub fn get_parameter(&self, node: &Node) -> Option<&ParameterData> {
        Self::pooled(&self.parameters, node, node.kind == PARAMETER)
    }

    #[inline]
    pub fn get_module(&self, node: &Node) -> Option<&ModuleData> {
        Self::pooled(&self.modules, node, node.kind == MODULE_DECLARATION)
    }

    #[inline]
    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        let accepts = matches!(node.kind, BLOCK | MODULE_BLOCK | CASE_BLOCK);
        Self::pooled(&self.blocks, node, accepts)
    }

    #[inline]
    pub fn get_enum(&self, node: &Node) -> Option<&EnumData> {
        Self::pooled(&self.enums, node, node.kind == ENUM_DECLARATION)
    }

    #[inline]
    pub fn get_type_alias(&self, node: &Node) -> Option<&TypeAliasData> {
        Self::pooled(
            &self.type_aliases,
            node,
            node.kind == TYPE_ALIAS_DECLARATION,
        )
    }

    #[inline]
    pub fn get_member_list(&self, node: &Node) -> Option<&MemberListData> {
        let accepts = matches!(
            node.kind,
            TYPE_LITERAL | JSDOC_TYPE_LITERAL | OBJECT_LITERAL_EXPRESSION | JSX_ATTRIBUTES
        );
        Self::pooled(&self.member_lists, node, accepts)
    }

    #[inline]
    pub fn get_variable(&self, node: &Node) -> Option<&VariableData> {
        Self::pooled(&self.variables, node, node.kind == VARIABLE_STATEMENT)
    }

    #[inline]
    pub fn get_variable_declaration(&self, node: &Node) -> Option<&VariableDeclarationData> {
        Self::pooled(
            &self.variable_declarations,
            node,
            node.kind == VARIABLE_DECLARATION,
        )
    }

    #[inline]
    pub fn get_access_expr(&self, node: &Node) -> Option<&AccessExprData> {
        Self::pooled(
            &self.access_exprs,
            node,
            node.kind == PROPERTY_ACCESS_EXPRESSION,
        )
    }

    #[inline]
    pub fn get_binary_expr(&self, node: &Node) -> Option<&BinaryExprData> {
        Self::pooled(&self.binary_exprs, node, node.kind == BINARY_EXPRESSION)
    }

    #[inline]
    pub fn get_import_decl(&self, node: &Node) -> Option<&ImportDeclData> {
        Self::pooled(&self.import_decls, node, node.kind == IMPORT_DECLARATION)
    }

    #[inline]
    pub fn get_import_clause(&self, node: &Node) -> Option<&ImportClauseData> {
        Self::pooled(&self.import_clauses, node, node.kind == IMPORT_CLAUSE)
    }

    #[inline]
    pub fn get_named_imports(&self, node: &Node) -> Option<&NamedImportsData> {
        let accepts = matches!(
            node.kind,
            NAMESPACE_IMPORT | NAMED_IMPORTS | NAMED_EXPORTS | NAMESPACE_EXPORT
        );
        Self::pooled(&self.named_imports, node, accepts)
    }

    #[inline]
    pub fn get_specifier(&self, node: &Node) -> Option<&SpecifierData> {
        let accepts = node.kind == IMPORT_SPECIFIER || node.kind == EXPORT_SPECIFIER;
        Self::pooled(&self.specifiers, node, accepts)
    }

    #[inline]
    pub fn get_import_equals(&self, node: &Node) -> Option<&ImportEqualsData> {
        Self::pooled(
            &self.import_equals,
            node,
            node.kind == IMPORT_EQUALS_DECLARATION,
        )
    }

    #[inline]
    pub fn get_external_module_ref(&self, node: &Node) -> Option<&ExternalModuleRefData> {
        Self::pooled(
            &self.external_module_refs,
            node,
            node.kind == EXTERNAL_MODULE_REFERENCE,
        )
    }

    #[inline]
    pub fn get_export_decl(&self, node: &Node) -> Option<&ExportDeclData> {
        Self::pooled(&self.export_decls, node, node.kind == EXPORT_DECLARATION)
    }

    #[inline]
    pub fn get_export_assignment(&self, node: &Node) -> Option<&ExportAssignmentData> {
        Self::pooled(
            &self.export_assignments,
            node,
            node.kind == EXPORT_ASSIGNMENT,
        )
    }

    #[inline]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        Self::pooled(&self.source_files, node, node.kind == SOURCE_FILE)
    }

    // ============================================================================
    // Cross-pool helpers
    // ============================================================================

    /// Modifier list of any declaration that can carry one.
    pub fn get_modifiers(&self, node: &Node) -> Option<&NodeList> {
        if let Some(class) = self.get_class(node) {
            return class.modifiers.as_ref();
        }
        if let Some(iface) = self.get_interface(node) {
            return iface.modifiers.as_ref();
        }
        if let Some(func) = self.get_function(node) {
            return func.modifiers.as_ref();
        }
        if let Some(sig) = self.get_signature(node) {
            return sig.modifiers.as_ref();
        }
        if let Some(prop) = self.get_property_decl(node) {
            return prop.modifiers.as_ref();
        }
        if let Some(param) = self.get_parameter(node) {
            return param.modifiers.as_ref();
        }
        if let Some(module) = self.get_module(node) {
            return module.modifiers.as_ref();
        }
        if let Some(enum_data) = self.get_enum(node) {
            return enum_data.modifiers.as_ref();
        }
        if let Some(alias) = self.get_type_alias(node) {
            return alias.modifiers.as_ref();
        }
        if let Some(var) = self.get_variable(node) {
            return var.modifiers.as_ref();
        }
        if let Some(import) = self.get_import_decl(node) {
            return import.modifiers.as_ref();
        }
        if let Some(import_eq) = self.get_import_equals(node) {
            return import_eq.modifiers.as_ref();
        }
        if let Some(export) = self.get_export_decl(node) {
            return export.modifiers.as_ref();
        }
        if let Some(assignment) = self.get_export_assignment(node) {
            return assignment.modifiers.as_ref();
        }
        None
    }

    /// Heritage clauses of a class or interface.
    pub fn get_heritage_clauses(&self, node: &Node) -> Option<&NodeList> {
        if let Some(class) = self.get_class(node) {
            return class.heritage_clauses.as_ref();
        }
        self.get_interface(node)
            .and_then(|iface| iface.heritage_clauses.as_ref())
    }

    /// Name node of a named declaration, or `NodeIndex::NONE`.
    pub fn get_declaration_name(&self, index: NodeIndex) -> NodeIndex {
        let Some(node) = self.get(index) else {
            return NodeIndex::NONE;
        };
        let name = self
            .get_class(node)
            .map(|d| d.name)
            .or_else(|| self.get_interface(node).map(|d| d.name))
            .or_else(|| self.get_function(node).map(|d| d.name))
            .or_else(|| self.get_signature(node).map(|d| d.name))
            .or_else(|| self.get_property_decl(node).map(|d| d.name))
            .or_else(|| self.get_parameter(node).map(|d| d.name))
            .or_else(|| self.get_module(node).map(|d| d.name))
            .or_else(|| self.get_enum(node).map(|d| d.name))
            .or_else(|| self.get_type_alias(node).map(|d| d.name))
            .or_else(|| self.get_variable_declaration(node).map(|d| d.name))
            .or_else(|| self.get_import_clause(node).map(|d| d.name))
            .or_else(|| self.get_named_imports(node).map(|d| d.name))
            .or_else(|| self.get_specifier(node).map(|d| d.name))
            .or_else(|| self.get_import_equals(node).map(|d| d.name));
        name.unwrap_or(NodeIndex::NONE)
    }
}

/// Iterator over a node and its ancestors, nearest first.
///
/// Stops at the root, and after `MAX_TREE_WALK_ITERATIONS` steps if the parent
/// links form a cycle.
pub struct ParentChain<'a> {
    arena: &'a NodeArena,
    current: NodeIndex,
    steps: u32,
}

impl Iterator for ParentChain<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        if self.current.is_none() || self.steps >= MAX_TREE_WALK_ITERATIONS {
            return None;
        }
        // Dangling index: treat as the end of the chain.
        self.arena.get(self.current)?;

        let node = self.current;
        self.current = self.arena.parent_of(node);
        self.steps += 1;
        Some(node)
    }
}
