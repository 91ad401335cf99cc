//! Thin node headers and typed data pools.
//!
//! Each [`Node`] is a small header holding its kind, flags, position and a
//! `data_index` into the pool that matches its kind. Structural questions only
//! ever look at a handful of fields per kind (modifiers, heritage clauses, an
//! initializer, an import clause name), so each pool stores just the shape the
//! queries read plus the child lists needed for parent links.

use super::base::{NodeIndex, NodeList};
use serde::{Deserialize, Serialize};

/// A thin node header.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    /// SyntaxKind value (token kinds and `syntax_kind_ext` node kinds)
    pub kind: u16,
    /// NodeFlags
    pub flags: u32,
    /// Start position in source (character index)
    pub pos: u32,
    /// End position in source (character index)
    pub end: u32,
    /// Index into the kind-specific pool (u32::MAX = no data)
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    /// Create a new thin node with no associated data
    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    /// Create a new thin node with data index
    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    /// Check if this node has associated data
    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn has_flags(&self, flags: u32) -> bool {
        self.flags & flags != 0
    }
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Data for identifier nodes (Identifier, PrivateIdentifier)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
    /// Identifier is a segment of a `@namespace` JSDoc tag.
    #[serde(default)]
    pub is_in_jsdoc_namespace: bool,
}

/// Data for string/numeric literals
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// Data for class declarations and class expressions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

/// Data for interface declarations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InterfaceData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

/// Data for heritage clauses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeritageData {
    pub token: u16, // ExtendsKeyword or ImplementsKeyword
    pub types: NodeList,
}

/// Data for expression with type arguments (`Base<T>` in a heritage clause)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprWithTypeArgsData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// Data for function-like declarations with a body: function declarations and
/// expressions, arrow functions, methods, constructors and accessors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

/// Data for body-less function shapes: method/call/construct/index
/// signatures and function/constructor types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignatureData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
}

/// Data for property declarations and property signatures
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyDeclData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for module (namespace) declarations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    /// ModuleBlock, or a nested ModuleDeclaration for `namespace A.B {}`
    pub body: NodeIndex,
}

/// Data for statement lists: Block, ModuleBlock and CaseBlock
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

/// Data for enum declarations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub members: NodeList,
}

/// Data for type alias declarations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeAliasData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_node: NodeIndex,
}

/// Data for member lists: TypeLiteral, JSDocTypeLiteral, ObjectLiteralExpression
/// and JsxAttributes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemberListData {
    pub members: NodeList,
}

/// Data for variable statements
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableData {
    pub modifiers: Option<NodeList>,
    pub declarations: NodeList,
}

/// Data for a single variable declaration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for property access expressions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
}

/// Data for binary expressions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: u16,
    pub right: NodeIndex,
}

/// Data for import declarations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportDeclData {
    pub modifiers: Option<NodeList>,
    pub import_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

/// Data for import clauses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportClauseData {
    pub is_type_only: bool,
    /// Default import binding (`import a from ...`)
    pub name: NodeIndex,
    pub named_bindings: NodeIndex,
}

/// Data for namespace imports and named imports/exports
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedImportsData {
    pub name: NodeIndex,    // For namespace import
    pub elements: NodeList, // For named imports / exports
}

/// Data for import/export specifiers
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpecifierData {
    pub is_type_only: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

/// Data for `import x = require("...")` and `import x = A.B`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportEqualsData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    pub name: NodeIndex,
    pub module_reference: NodeIndex,
}

/// Data for `require("...")` module references
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExternalModuleRefData {
    pub expression: NodeIndex,
}

/// Data for export declarations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportDeclData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    pub export_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

/// Data for export assignments (`export = x`, `export default x`)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportAssignmentData {
    pub modifiers: Option<NodeList>,
    pub is_export_equals: bool,
    pub expression: NodeIndex,
}

/// Data for source files
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub statements: NodeList,
    pub file_name: String,
    pub is_declaration_file: bool,
}

// =============================================================================
// Node Arena
// =============================================================================

/// Arena for thin nodes with typed data pools.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    /// The thin node headers
    pub nodes: Vec<Node>,

    // Names and literals
    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,

    // Classes and interfaces
    pub classes: Vec<ClassData>,
    pub interfaces: Vec<InterfaceData>,
    pub heritage_clauses: Vec<HeritageData>,
    pub expr_with_type_args: Vec<ExprWithTypeArgsData>,

    // Functions, signatures and members
    pub functions: Vec<FunctionData>,
    pub signatures: Vec<SignatureData>,
    pub property_decls: Vec<PropertyDeclData>,
    pub parameters: Vec<ParameterData>,

    // Declarations
    pub modules: Vec<ModuleData>,
    pub enums: Vec<EnumData>,
    pub type_aliases: Vec<TypeAliasData>,
    pub variables: Vec<VariableData>,
    pub variable_declarations: Vec<VariableDeclarationData>,

    // Member lists
    pub member_lists: Vec<MemberListData>,

    // Statements
    pub blocks: Vec<BlockData>,

    // Expressions
    pub access_exprs: Vec<AccessExprData>,
    pub binary_exprs: Vec<BinaryExprData>,

    // Import/export
    pub import_decls: Vec<ImportDeclData>,
    pub import_clauses: Vec<ImportClauseData>,
    pub named_imports: Vec<NamedImportsData>,
    pub specifiers: Vec<SpecifierData>,
    pub import_equals: Vec<ImportEqualsData>,
    pub external_module_refs: Vec<ExternalModuleRefData>,
    pub export_decls: Vec<ExportDeclData>,
    pub export_assignments: Vec<ExportAssignmentData>,

    // Source file
    pub source_files: Vec<SourceFileData>,

    // Extended node info (parent, id)
    pub extended_info: Vec<ExtendedNodeInfo>,
}

/// Extended node info: the parent back-reference and a unique id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
    pub id: u32,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
            id: 0,
        }
    }
}
