//! NodeArena creation methods (add_* methods).
//!
//! Trees are built bottom-up: children are added before their parent, and each
//! `add_*` call links the children it references back to the new node.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use super::syntax_kind::SyntaxKind;
use super::syntax_kind_ext;
use tstools_common::limits::MAX_NODE_PREALLOC;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated capacity.
    /// Uses heuristic ratios based on typical declaration-heavy trees.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(MAX_NODE_PREALLOC);
        let mut arena = NodeArena::default();

        arena.nodes = Vec::with_capacity(safe_capacity);
        arena.extended_info = Vec::with_capacity(safe_capacity);
        arena.identifiers = Vec::with_capacity(safe_capacity / 4); // ~25% identifiers
        arena.property_decls = Vec::with_capacity(safe_capacity / 8);
        arena.functions = Vec::with_capacity(safe_capacity / 16);
        arena.blocks = Vec::with_capacity(safe_capacity / 16);
        arena.source_files = Vec::with_capacity(1); // Usually 1

        arena
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_none() {
            return;
        }
        if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
            info.parent = parent;
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn set_parent_opt_list(&mut self, list: &Option<NodeList>, parent: NodeIndex) {
        if let Some(list) = list {
            self.set_parent_list(list, parent);
        }
    }

    /// Push a header pointing at `data_index` and return its index.
    fn push_node(&mut self, kind: u16, pos: u32, end: u32, data_index: u32) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node::with_data(kind, pos, end, data_index));
        self.extended_info.push(ExtendedNodeInfo {
            parent: NodeIndex::NONE,
            id: 0,
        });
        index
    }

    /// Override the parent link of `node`.
    ///
    /// Builders link parents automatically; this is for trees handed over with
    /// parents that are not structural children (for example a JSDoc type
    /// whose parent is the host declaration).
    pub fn set_parent_of(&mut self, node: NodeIndex, parent: NodeIndex) {
        self.set_parent(node, parent);
    }

    /// OR `flags` into the NodeFlags of `node`.
    pub fn add_node_flags(&mut self, node: NodeIndex, flags: u32) {
        if let Some(header) = self.get_mut(node) {
            header.flags |= flags;
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a token node (keywords, modifiers, punctuation). Tokens carry no data.
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_node(kind as u16, pos, end, Node::NO_DATA)
    }

    /// Add a node of any kind without pooled data.
    pub fn add_bare(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.push_node(kind, pos, end, Node::NO_DATA)
    }

    /// Add an identifier node
    pub fn add_identifier(&mut self, pos: u32, end: u32, data: IdentifierData) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(SyntaxKind::Identifier as u16, pos, end, data_index)
    }

    /// Add a string, numeric or template literal
    pub fn add_literal(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(kind as u16, pos, end, data_index)
    }

    /// Add a class declaration or class expression
    pub fn add_class(&mut self, kind: u16, pos: u32, end: u32, data: ClassData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let heritage_clauses = data.heritage_clauses.clone();
        let members = data.members.clone();

        let data_index = self.classes.len() as u32;
        self.classes.push(data);
        let parent = self.push_node(kind, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent_opt_list(&heritage_clauses, parent);
        self.set_parent_list(&members, parent);
        parent
    }

    /// Add an interface declaration
    pub fn add_interface(&mut self, pos: u32, end: u32, data: InterfaceData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let heritage_clauses = data.heritage_clauses.clone();
        let members = data.members.clone();

        let data_index = self.interfaces.len() as u32;
        self.interfaces.push(data);
        let parent = self.push_node(syntax_kind_ext::INTERFACE_DECLARATION, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent_opt_list(&heritage_clauses, parent);
        self.set_parent_list(&members, parent);
        parent
    }

    /// Add a heritage clause (`extends ...` or `implements ...`)
    pub fn add_heritage_clause(&mut self, pos: u32, end: u32, data: HeritageData) -> NodeIndex {
        let types = data.types.clone();

        let data_index = self.heritage_clauses.len() as u32;
        self.heritage_clauses.push(data);
        let parent = self.push_node(syntax_kind_ext::HERITAGE_CLAUSE, pos, end, data_index);

        self.set_parent_list(&types, parent);
        parent
    }

    /// Add an expression with type arguments
    pub fn add_expr_with_type_args(
        &mut self,
        pos: u32,
        end: u32,
        data: ExprWithTypeArgsData,
    ) -> NodeIndex {
        let expression = data.expression;
        let type_arguments = data.type_arguments.clone();

        let data_index = self.expr_with_type_args.len() as u32;
        self.expr_with_type_args.push(data);
        let parent = self.push_node(
            syntax_kind_ext::EXPRESSION_WITH_TYPE_ARGUMENTS,
            pos,
            end,
            data_index,
        );

        self.set_parent(expression, parent);
        self.set_parent_opt_list(&type_arguments, parent);
        parent
    }

    /// Add a function-like node with a body (function, arrow, method,
    /// constructor, accessor, class static block)
    pub fn add_function(&mut self, kind: u16, pos: u32, end: u32, data: FunctionData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let parameters = data.parameters.clone();
        let body = data.body;

        let data_index = self.functions.len() as u32;
        self.functions.push(data);
        let parent = self.push_node(kind, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent_list(&parameters, parent);
        self.set_parent(body, parent);
        parent
    }

    /// Add a body-less signature or function type
    pub fn add_signature(&mut self, kind: u16, pos: u32, end: u32, data: SignatureData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let parameters = data.parameters.clone();
        let type_annotation = data.type_annotation;

        let data_index = self.signatures.len() as u32;
        self.signatures.push(data);
        let parent = self.push_node(kind, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent_list(&parameters, parent);
        self.set_parent(type_annotation, parent);
        parent
    }

    /// Add a property declaration or property signature
    pub fn add_property_decl(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: PropertyDeclData,
    ) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let type_annotation = data.type_annotation;
        let initializer = data.initializer;

        let data_index = self.property_decls.len() as u32;
        self.property_decls.push(data);
        let parent = self.push_node(kind, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent(type_annotation, parent);
        self.set_parent(initializer, parent);
        parent
    }

    /// Add a parameter
    pub fn add_parameter(&mut self, pos: u32, end: u32, data: ParameterData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let type_annotation = data.type_annotation;
        let initializer = data.initializer;

        let data_index = self.parameters.len() as u32;
        self.parameters.push(data);
        let parent = self.push_node(syntax_kind_ext::PARAMETER, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent(type_annotation, parent);
        self.set_parent(initializer, parent);
        parent
    }

    /// Add a module (namespace) declaration
    pub fn add_module(&mut self, pos: u32, end: u32, data: ModuleData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let body = data.body;

        let data_index = self.modules.len() as u32;
        self.modules.push(data);
        let parent = self.push_node(syntax_kind_ext::MODULE_DECLARATION, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent(body, parent);
        parent
    }

    /// Add a Block, ModuleBlock or CaseBlock
    pub fn add_block(&mut self, kind: u16, pos: u32, end: u32, data: BlockData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        let parent = self.push_node(kind, pos, end, data_index);

        self.set_parent_list(&statements, parent);
        parent
    }

    /// Add an enum declaration
    pub fn add_enum(&mut self, pos: u32, end: u32, data: EnumData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let members = data.members.clone();

        let data_index = self.enums.len() as u32;
        self.enums.push(data);
        let parent = self.push_node(syntax_kind_ext::ENUM_DECLARATION, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent_list(&members, parent);
        parent
    }

    /// Add a type alias declaration
    pub fn add_type_alias(&mut self, pos: u32, end: u32, data: TypeAliasData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let type_node = data.type_node;

        let data_index = self.type_aliases.len() as u32;
        self.type_aliases.push(data);
        let parent = self.push_node(syntax_kind_ext::TYPE_ALIAS_DECLARATION, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent(type_node, parent);
        parent
    }

    /// Add a member list node: TypeLiteral, JSDocTypeLiteral,
    /// ObjectLiteralExpression or JsxAttributes
    pub fn add_member_list(&mut self, kind: u16, pos: u32, end: u32, data: MemberListData) -> NodeIndex {
        let members = data.members.clone();

        let data_index = self.member_lists.len() as u32;
        self.member_lists.push(data);
        let parent = self.push_node(kind, pos, end, data_index);

        self.set_parent_list(&members, parent);
        parent
    }

    /// Add a variable statement
    pub fn add_variable(&mut self, pos: u32, end: u32, data: VariableData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let declarations = data.declarations.clone();

        let data_index = self.variables.len() as u32;
        self.variables.push(data);
        let parent = self.push_node(syntax_kind_ext::VARIABLE_STATEMENT, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent_list(&declarations, parent);
        parent
    }

    /// Add a variable declaration
    pub fn add_variable_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: VariableDeclarationData,
    ) -> NodeIndex {
        let name = data.name;
        let type_annotation = data.type_annotation;
        let initializer = data.initializer;

        let data_index = self.variable_declarations.len() as u32;
        self.variable_declarations.push(data);
        let parent = self.push_node(syntax_kind_ext::VARIABLE_DECLARATION, pos, end, data_index);

        self.set_parent(name, parent);
        self.set_parent(type_annotation, parent);
        self.set_parent(initializer, parent);
        parent
    }

    /// Add a property access expression
    pub fn add_access_expr(&mut self, pos: u32, end: u32, data: AccessExprData) -> NodeIndex {
        let expression = data.expression;
        let name = data.name_or_argument;

        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(data);
        let parent = self.push_node(
            syntax_kind_ext::PROPERTY_ACCESS_EXPRESSION,
            pos,
            end,
            data_index,
        );

        self.set_parent(expression, parent);
        self.set_parent(name, parent);
        parent
    }

    /// Add a binary expression
    pub fn add_binary_expr(&mut self, pos: u32, end: u32, data: BinaryExprData) -> NodeIndex {
        let left = data.left;
        let right = data.right;

        let data_index = self.binary_exprs.len() as u32;
        self.binary_exprs.push(data);
        let parent = self.push_node(syntax_kind_ext::BINARY_EXPRESSION, pos, end, data_index);

        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    /// Add an import declaration
    pub fn add_import_decl(&mut self, pos: u32, end: u32, data: ImportDeclData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let import_clause = data.import_clause;
        let module_specifier = data.module_specifier;

        let data_index = self.import_decls.len() as u32;
        self.import_decls.push(data);
        let parent = self.push_node(syntax_kind_ext::IMPORT_DECLARATION, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(import_clause, parent);
        self.set_parent(module_specifier, parent);
        parent
    }

    /// Add an import clause
    pub fn add_import_clause(&mut self, pos: u32, end: u32, data: ImportClauseData) -> NodeIndex {
        let name = data.name;
        let named_bindings = data.named_bindings;

        let data_index = self.import_clauses.len() as u32;
        self.import_clauses.push(data);
        let parent = self.push_node(syntax_kind_ext::IMPORT_CLAUSE, pos, end, data_index);

        self.set_parent(name, parent);
        self.set_parent(named_bindings, parent);
        parent
    }

    /// Add a NamespaceImport, NamedImports, NamedExports or NamespaceExport
    pub fn add_named_imports(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: NamedImportsData,
    ) -> NodeIndex {
        let name = data.name;
        let elements = data.elements.clone();

        let data_index = self.named_imports.len() as u32;
        self.named_imports.push(data);
        let parent = self.push_node(kind, pos, end, data_index);

        self.set_parent(name, parent);
        self.set_parent_list(&elements, parent);
        parent
    }

    /// Add an import or export specifier
    pub fn add_specifier(&mut self, kind: u16, pos: u32, end: u32, data: SpecifierData) -> NodeIndex {
        let property_name = data.property_name;
        let name = data.name;

        let data_index = self.specifiers.len() as u32;
        self.specifiers.push(data);
        let parent = self.push_node(kind, pos, end, data_index);

        self.set_parent(property_name, parent);
        self.set_parent(name, parent);
        parent
    }

    /// Add an import-equals declaration
    pub fn add_import_equals(&mut self, pos: u32, end: u32, data: ImportEqualsData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let name = data.name;
        let module_reference = data.module_reference;

        let data_index = self.import_equals.len() as u32;
        self.import_equals.push(data);
        let parent = self.push_node(
            syntax_kind_ext::IMPORT_EQUALS_DECLARATION,
            pos,
            end,
            data_index,
        );

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(name, parent);
        self.set_parent(module_reference, parent);
        parent
    }

    /// Add an external module reference (`require("...")`)
    pub fn add_external_module_ref(
        &mut self,
        pos: u32,
        end: u32,
        data: ExternalModuleRefData,
    ) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.external_module_refs.len() as u32;
        self.external_module_refs.push(data);
        let parent = self.push_node(
            syntax_kind_ext::EXTERNAL_MODULE_REFERENCE,
            pos,
            end,
            data_index,
        );

        self.set_parent(expression, parent);
        parent
    }

    /// Add an export declaration
    pub fn add_export_decl(&mut self, pos: u32, end: u32, data: ExportDeclData) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let export_clause = data.export_clause;
        let module_specifier = data.module_specifier;

        let data_index = self.export_decls.len() as u32;
        self.export_decls.push(data);
        let parent = self.push_node(syntax_kind_ext::EXPORT_DECLARATION, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(export_clause, parent);
        self.set_parent(module_specifier, parent);
        parent
    }

    /// Add an export assignment
    pub fn add_export_assignment(
        &mut self,
        pos: u32,
        end: u32,
        data: ExportAssignmentData,
    ) -> NodeIndex {
        let modifiers = data.modifiers.clone();
        let expression = data.expression;

        let data_index = self.export_assignments.len() as u32;
        self.export_assignments.push(data);
        let parent = self.push_node(syntax_kind_ext::EXPORT_ASSIGNMENT, pos, end, data_index);

        self.set_parent_opt_list(&modifiers, parent);
        self.set_parent(expression, parent);
        parent
    }

    /// Add a source file node
    pub fn add_source_file(&mut self, pos: u32, end: u32, data: SourceFileData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.source_files.len() as u32;
        self.source_files.push(data);
        let parent = self.push_node(syntax_kind_ext::SOURCE_FILE, pos, end, data_index);

        self.set_parent_list(&statements, parent);
        parent
    }
}
