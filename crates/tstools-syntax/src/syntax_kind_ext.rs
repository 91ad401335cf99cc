//! Node kinds above the token range.
//!
//! These are plain `u16` constants rather than enum variants so that they can
//! be compared against `Node::kind` and used directly as `match` patterns.
//! Values follow TypeScript's `SyntaxKind` layout; the first node kind
//! directly follows [`crate::SyntaxKind::LAST_TOKEN`].

// Names
pub const QUALIFIED_NAME: u16 = 166;
pub const COMPUTED_PROPERTY_NAME: u16 = 167;

// Signature elements
pub const TYPE_PARAMETER: u16 = 168;
pub const PARAMETER: u16 = 169;
pub const DECORATOR: u16 = 170;

// Type members
pub const PROPERTY_SIGNATURE: u16 = 171;
pub const PROPERTY_DECLARATION: u16 = 172;
pub const METHOD_SIGNATURE: u16 = 173;
pub const METHOD_DECLARATION: u16 = 174;
pub const CLASS_STATIC_BLOCK_DECLARATION: u16 = 175;
pub const CONSTRUCTOR: u16 = 176;
pub const GET_ACCESSOR: u16 = 177;
pub const SET_ACCESSOR: u16 = 178;
pub const CALL_SIGNATURE: u16 = 179;
pub const CONSTRUCT_SIGNATURE: u16 = 180;
pub const INDEX_SIGNATURE: u16 = 181;

// Types
pub const TYPE_PREDICATE: u16 = 182;
pub const TYPE_REFERENCE: u16 = 183;
pub const FUNCTION_TYPE: u16 = 184;
pub const CONSTRUCTOR_TYPE: u16 = 185;
pub const TYPE_QUERY: u16 = 186;
pub const TYPE_LITERAL: u16 = 187;
pub const ARRAY_TYPE: u16 = 188;
pub const TUPLE_TYPE: u16 = 189;
pub const OPTIONAL_TYPE: u16 = 190;
pub const REST_TYPE: u16 = 191;
pub const UNION_TYPE: u16 = 192;
pub const INTERSECTION_TYPE: u16 = 193;
pub const CONDITIONAL_TYPE: u16 = 194;
pub const INFER_TYPE: u16 = 195;
pub const PARENTHESIZED_TYPE: u16 = 196;
pub const THIS_TYPE: u16 = 197;
pub const TYPE_OPERATOR: u16 = 198;
pub const INDEXED_ACCESS_TYPE: u16 = 199;
pub const MAPPED_TYPE: u16 = 200;
pub const LITERAL_TYPE: u16 = 201;
pub const NAMED_TUPLE_MEMBER: u16 = 202;
pub const TEMPLATE_LITERAL_TYPE: u16 = 203;
pub const TEMPLATE_LITERAL_TYPE_SPAN: u16 = 204;
pub const IMPORT_TYPE: u16 = 205;

// Binding patterns
pub const OBJECT_BINDING_PATTERN: u16 = 206;
pub const ARRAY_BINDING_PATTERN: u16 = 207;
pub const BINDING_ELEMENT: u16 = 208;

// Expressions
pub const ARRAY_LITERAL_EXPRESSION: u16 = 209;
pub const OBJECT_LITERAL_EXPRESSION: u16 = 210;
pub const PROPERTY_ACCESS_EXPRESSION: u16 = 211;
pub const ELEMENT_ACCESS_EXPRESSION: u16 = 212;
pub const CALL_EXPRESSION: u16 = 213;
pub const NEW_EXPRESSION: u16 = 214;
pub const TAGGED_TEMPLATE_EXPRESSION: u16 = 215;
pub const TYPE_ASSERTION_EXPRESSION: u16 = 216;
pub const PARENTHESIZED_EXPRESSION: u16 = 217;
pub const FUNCTION_EXPRESSION: u16 = 218;
pub const ARROW_FUNCTION: u16 = 219;
pub const DELETE_EXPRESSION: u16 = 220;
pub const TYPEOF_EXPRESSION: u16 = 221;
pub const VOID_EXPRESSION: u16 = 222;
pub const AWAIT_EXPRESSION: u16 = 223;
pub const PREFIX_UNARY_EXPRESSION: u16 = 224;
pub const POSTFIX_UNARY_EXPRESSION: u16 = 225;
pub const BINARY_EXPRESSION: u16 = 226;
pub const CONDITIONAL_EXPRESSION: u16 = 227;
pub const TEMPLATE_EXPRESSION: u16 = 228;
pub const YIELD_EXPRESSION: u16 = 229;
pub const SPREAD_ELEMENT: u16 = 230;
pub const CLASS_EXPRESSION: u16 = 231;
pub const OMITTED_EXPRESSION: u16 = 232;
pub const EXPRESSION_WITH_TYPE_ARGUMENTS: u16 = 233;
pub const AS_EXPRESSION: u16 = 234;
pub const NON_NULL_EXPRESSION: u16 = 235;
pub const META_PROPERTY: u16 = 236;
pub const SYNTHETIC_EXPRESSION: u16 = 237;
pub const SATISFIES_EXPRESSION: u16 = 238;

// Misc
pub const TEMPLATE_SPAN: u16 = 239;
pub const SEMICOLON_CLASS_ELEMENT: u16 = 240;

// Statements
pub const BLOCK: u16 = 241;
pub const EMPTY_STATEMENT: u16 = 242;
pub const VARIABLE_STATEMENT: u16 = 243;
pub const EXPRESSION_STATEMENT: u16 = 244;
pub const IF_STATEMENT: u16 = 245;
pub const DO_STATEMENT: u16 = 246;
pub const WHILE_STATEMENT: u16 = 247;
pub const FOR_STATEMENT: u16 = 248;
pub const FOR_IN_STATEMENT: u16 = 249;
pub const FOR_OF_STATEMENT: u16 = 250;
pub const CONTINUE_STATEMENT: u16 = 251;
pub const BREAK_STATEMENT: u16 = 252;
pub const RETURN_STATEMENT: u16 = 253;
pub const WITH_STATEMENT: u16 = 254;
pub const SWITCH_STATEMENT: u16 = 255;
pub const LABELED_STATEMENT: u16 = 256;
pub const THROW_STATEMENT: u16 = 257;
pub const TRY_STATEMENT: u16 = 258;
pub const DEBUGGER_STATEMENT: u16 = 259;

// Declarations
pub const VARIABLE_DECLARATION: u16 = 260;
pub const VARIABLE_DECLARATION_LIST: u16 = 261;
pub const FUNCTION_DECLARATION: u16 = 262;
pub const CLASS_DECLARATION: u16 = 263;
pub const INTERFACE_DECLARATION: u16 = 264;
pub const TYPE_ALIAS_DECLARATION: u16 = 265;
pub const ENUM_DECLARATION: u16 = 266;
pub const MODULE_DECLARATION: u16 = 267;
pub const MODULE_BLOCK: u16 = 268;
pub const CASE_BLOCK: u16 = 269;
pub const NAMESPACE_EXPORT_DECLARATION: u16 = 270;
pub const IMPORT_EQUALS_DECLARATION: u16 = 271;
pub const IMPORT_DECLARATION: u16 = 272;
pub const IMPORT_CLAUSE: u16 = 273;
pub const NAMESPACE_IMPORT: u16 = 274;
pub const NAMED_IMPORTS: u16 = 275;
pub const IMPORT_SPECIFIER: u16 = 276;
pub const EXPORT_ASSIGNMENT: u16 = 277;
pub const EXPORT_DECLARATION: u16 = 278;
pub const NAMED_EXPORTS: u16 = 279;
pub const NAMESPACE_EXPORT: u16 = 280;
pub const EXPORT_SPECIFIER: u16 = 281;
pub const MISSING_DECLARATION: u16 = 282;

// Module references
pub const EXTERNAL_MODULE_REFERENCE: u16 = 283;

// JSX
pub const JSX_ELEMENT: u16 = 284;
pub const JSX_SELF_CLOSING_ELEMENT: u16 = 285;
pub const JSX_OPENING_ELEMENT: u16 = 286;
pub const JSX_CLOSING_ELEMENT: u16 = 287;
pub const JSX_FRAGMENT: u16 = 288;
pub const JSX_OPENING_FRAGMENT: u16 = 289;
pub const JSX_CLOSING_FRAGMENT: u16 = 290;
pub const JSX_ATTRIBUTE: u16 = 291;
pub const JSX_ATTRIBUTES: u16 = 292;
pub const JSX_SPREAD_ATTRIBUTE: u16 = 293;
pub const JSX_EXPRESSION: u16 = 294;
pub const JSX_NAMESPACED_NAME: u16 = 295;

// Clauses
pub const CASE_CLAUSE: u16 = 296;
pub const DEFAULT_CLAUSE: u16 = 297;
pub const HERITAGE_CLAUSE: u16 = 298;
pub const CATCH_CLAUSE: u16 = 299;
pub const IMPORT_ATTRIBUTES: u16 = 300;
pub const IMPORT_ATTRIBUTE: u16 = 301;

// Property assignments
pub const PROPERTY_ASSIGNMENT: u16 = 302;
pub const SHORTHAND_PROPERTY_ASSIGNMENT: u16 = 303;
pub const SPREAD_ASSIGNMENT: u16 = 304;

// Enum
pub const ENUM_MEMBER: u16 = 305;

// Top-level nodes
pub const SOURCE_FILE: u16 = 308;
pub const BUNDLE: u16 = 309;

// JSDoc nodes
pub const JSDOC_TYPE_EXPRESSION: u16 = 310;
pub const JSDOC_NAME_REFERENCE: u16 = 311;
pub const JSDOC_MEMBER_NAME: u16 = 312;
pub const JSDOC_ALL_TYPE: u16 = 313;
pub const JSDOC_UNKNOWN_TYPE: u16 = 314;
pub const JSDOC_NULLABLE_TYPE: u16 = 315;
pub const JSDOC_NON_NULLABLE_TYPE: u16 = 316;
pub const JSDOC_OPTIONAL_TYPE: u16 = 317;
pub const JSDOC_FUNCTION_TYPE: u16 = 318;
pub const JSDOC_VARIADIC_TYPE: u16 = 319;
pub const JSDOC_NAMEPATH_TYPE: u16 = 320;
pub const JSDOC: u16 = 321;
pub const JSDOC_TEXT: u16 = 322;
pub const JSDOC_TYPE_LITERAL: u16 = 323;
pub const JSDOC_SIGNATURE: u16 = 324;

pub const FIRST_NODE: u16 = QUALIFIED_NAME;
pub const FIRST_JSDOC_NODE: u16 = JSDOC_TYPE_EXPRESSION;
pub const LAST_JSDOC_NODE: u16 = JSDOC_SIGNATURE;

/// Display name of a node kind, in TypeScript's `SyntaxKind` spelling.
pub fn node_kind_name(kind: u16) -> Option<&'static str> {
    let name = match kind {
        QUALIFIED_NAME => "QualifiedName",
        COMPUTED_PROPERTY_NAME => "ComputedPropertyName",
        TYPE_PARAMETER => "TypeParameter",
        PARAMETER => "Parameter",
        DECORATOR => "Decorator",
        PROPERTY_SIGNATURE => "PropertySignature",
        PROPERTY_DECLARATION => "PropertyDeclaration",
        METHOD_SIGNATURE => "MethodSignature",
        METHOD_DECLARATION => "MethodDeclaration",
        CLASS_STATIC_BLOCK_DECLARATION => "ClassStaticBlockDeclaration",
        CONSTRUCTOR => "Constructor",
        GET_ACCESSOR => "GetAccessor",
        SET_ACCESSOR => "SetAccessor",
        CALL_SIGNATURE => "CallSignature",
        CONSTRUCT_SIGNATURE => "ConstructSignature",
        INDEX_SIGNATURE => "IndexSignature",
        TYPE_PREDICATE => "TypePredicate",
        TYPE_REFERENCE => "TypeReference",
        FUNCTION_TYPE => "FunctionType",
        CONSTRUCTOR_TYPE => "ConstructorType",
        TYPE_QUERY => "TypeQuery",
        TYPE_LITERAL => "TypeLiteral",
        ARRAY_TYPE => "ArrayType",
        TUPLE_TYPE => "TupleType",
        OPTIONAL_TYPE => "OptionalType",
        REST_TYPE => "RestType",
        UNION_TYPE => "UnionType",
        INTERSECTION_TYPE => "IntersectionType",
        CONDITIONAL_TYPE => "ConditionalType",
        INFER_TYPE => "InferType",
        PARENTHESIZED_TYPE => "ParenthesizedType",
        THIS_TYPE => "ThisType",
        TYPE_OPERATOR => "TypeOperator",
        INDEXED_ACCESS_TYPE => "IndexedAccessType",
        MAPPED_TYPE => "MappedType",
        LITERAL_TYPE => "LiteralType",
        NAMED_TUPLE_MEMBER => "NamedTupleMember",
        TEMPLATE_LITERAL_TYPE => "TemplateLiteralType",
        TEMPLATE_LITERAL_TYPE_SPAN => "TemplateLiteralTypeSpan",
        IMPORT_TYPE => "ImportType",
        OBJECT_BINDING_PATTERN => "ObjectBindingPattern",
        ARRAY_BINDING_PATTERN => "ArrayBindingPattern",
        BINDING_ELEMENT => "BindingElement",
        ARRAY_LITERAL_EXPRESSION => "ArrayLiteralExpression",
        OBJECT_LITERAL_EXPRESSION => "ObjectLiteralExpression",
        PROPERTY_ACCESS_EXPRESSION => "PropertyAccessExpression",
        ELEMENT_ACCESS_EXPRESSION => "ElementAccessExpression",
        CALL_EXPRESSION => "CallExpression",
        NEW_EXPRESSION => "NewExpression",
        TAGGED_TEMPLATE_EXPRESSION => "TaggedTemplateExpression",
        TYPE_ASSERTION_EXPRESSION => "TypeAssertionExpression",
        PARENTHESIZED_EXPRESSION => "ParenthesizedExpression",
        FUNCTION_EXPRESSION => "FunctionExpression",
        ARROW_FUNCTION => "ArrowFunction",
        DELETE_EXPRESSION => "DeleteExpression",
        TYPEOF_EXPRESSION => "TypeofExpression",
        VOID_EXPRESSION => "VoidExpression",
        AWAIT_EXPRESSION => "AwaitExpression",
        PREFIX_UNARY_EXPRESSION => "PrefixUnaryExpression",
        POSTFIX_UNARY_EXPRESSION => "PostfixUnaryExpression",
        BINARY_EXPRESSION => "BinaryExpression",
        CONDITIONAL_EXPRESSION => "ConditionalExpression",
        TEMPLATE_EXPRESSION => "TemplateExpression",
        YIELD_EXPRESSION => "YieldExpression",
        SPREAD_ELEMENT => "SpreadElement",
        CLASS_EXPRESSION => "ClassExpression",
        OMITTED_EXPRESSION => "OmittedExpression",
        EXPRESSION_WITH_TYPE_ARGUMENTS => "ExpressionWithTypeArguments",
        AS_EXPRESSION => "AsExpression",
        NON_NULL_EXPRESSION => "NonNullExpression",
        META_PROPERTY => "MetaProperty",
        SYNTHETIC_EXPRESSION => "SyntheticExpression",
        SATISFIES_EXPRESSION => "SatisfiesExpression",
        TEMPLATE_SPAN => "TemplateSpan",
        SEMICOLON_CLASS_ELEMENT => "SemicolonClassElement",
        BLOCK => "Block",
        EMPTY_STATEMENT => "EmptyStatement",
        VARIABLE_STATEMENT => "VariableStatement",
        EXPRESSION_STATEMENT => "ExpressionStatement",
        IF_STATEMENT => "IfStatement",
        DO_STATEMENT => "DoStatement",
        WHILE_STATEMENT => "WhileStatement",
        FOR_STATEMENT => "ForStatement",
        FOR_IN_STATEMENT => "ForInStatement",
        FOR_OF_STATEMENT => "ForOfStatement",
        CONTINUE_STATEMENT => "ContinueStatement",
        BREAK_STATEMENT => "BreakStatement",
        RETURN_STATEMENT => "ReturnStatement",
        WITH_STATEMENT => "WithStatement",
        SWITCH_STATEMENT => "SwitchStatement",
        LABELED_STATEMENT => "LabeledStatement",
        THROW_STATEMENT => "ThrowStatement",
        TRY_STATEMENT => "TryStatement",
        DEBUGGER_STATEMENT => "DebuggerStatement",
        VARIABLE_DECLARATION => "VariableDeclaration",
        VARIABLE_DECLARATION_LIST => "VariableDeclarationList",
        FUNCTION_DECLARATION => "FunctionDeclaration",
        CLASS_DECLARATION => "ClassDeclaration",
        INTERFACE_DECLARATION => "InterfaceDeclaration",
        TYPE_ALIAS_DECLARATION => "TypeAliasDeclaration",
        ENUM_DECLARATION => "EnumDeclaration",
        MODULE_DECLARATION => "ModuleDeclaration",
        MODULE_BLOCK => "ModuleBlock",
        CASE_BLOCK => "CaseBlock",
        NAMESPACE_EXPORT_DECLARATION => "NamespaceExportDeclaration",
        IMPORT_EQUALS_DECLARATION => "ImportEqualsDeclaration",
        IMPORT_DECLARATION => "ImportDeclaration",
        IMPORT_CLAUSE => "ImportClause",
        NAMESPACE_IMPORT => "NamespaceImport",
        NAMED_IMPORTS => "NamedImports",
        IMPORT_SPECIFIER => "ImportSpecifier",
        EXPORT_ASSIGNMENT => "ExportAssignment",
        EXPORT_DECLARATION => "ExportDeclaration",
        NAMED_EXPORTS => "NamedExports",
        NAMESPACE_EXPORT => "NamespaceExport",
        EXPORT_SPECIFIER => "ExportSpecifier",
        MISSING_DECLARATION => "MissingDeclaration",
        EXTERNAL_MODULE_REFERENCE => "ExternalModuleReference",
        JSX_ELEMENT => "JsxElement",
        JSX_SELF_CLOSING_ELEMENT => "JsxSelfClosingElement",
        JSX_OPENING_ELEMENT => "JsxOpeningElement",
        JSX_CLOSING_ELEMENT => "JsxClosingElement",
        JSX_FRAGMENT => "JsxFragment",
        JSX_OPENING_FRAGMENT => "JsxOpeningFragment",
        JSX_CLOSING_FRAGMENT => "JsxClosingFragment",
        JSX_ATTRIBUTE => "JsxAttribute",
        JSX_ATTRIBUTES => "JsxAttributes",
        JSX_SPREAD_ATTRIBUTE => "JsxSpreadAttribute",
        JSX_EXPRESSION => "JsxExpression",
        JSX_NAMESPACED_NAME => "JsxNamespacedName",
        CASE_CLAUSE => "CaseClause",
        DEFAULT_CLAUSE => "DefaultClause",
        HERITAGE_CLAUSE => "HeritageClause",
        CATCH_CLAUSE => "CatchClause",
        IMPORT_ATTRIBUTES => "ImportAttributes",
        IMPORT_ATTRIBUTE => "ImportAttribute",
        PROPERTY_ASSIGNMENT => "PropertyAssignment",
        SHORTHAND_PROPERTY_ASSIGNMENT => "ShorthandPropertyAssignment",
        SPREAD_ASSIGNMENT => "SpreadAssignment",
        ENUM_MEMBER => "EnumMember",
        SOURCE_FILE => "SourceFile",
        BUNDLE => "Bundle",
        JSDOC_TYPE_EXPRESSION => "JSDocTypeExpression",
        JSDOC_NAME_REFERENCE => "JSDocNameReference",
        JSDOC_MEMBER_NAME => "JSDocMemberName",
        JSDOC_ALL_TYPE => "JSDocAllType",
        JSDOC_UNKNOWN_TYPE => "JSDocUnknownType",
        JSDOC_NULLABLE_TYPE => "JSDocNullableType",
        JSDOC_NON_NULLABLE_TYPE => "JSDocNonNullableType",
        JSDOC_OPTIONAL_TYPE => "JSDocOptionalType",
        JSDOC_FUNCTION_TYPE => "JSDocFunctionType",
        JSDOC_VARIADIC_TYPE => "JSDocVariadicType",
        JSDOC_NAMEPATH_TYPE => "JSDocNamepathType",
        JSDOC => "JSDoc",
        JSDOC_TEXT => "JSDocText",
        JSDOC_TYPE_LITERAL => "JSDocTypeLiteral",
        JSDOC_SIGNATURE => "JSDocSignature",
        _ => return None,
    };
    Some(name)
}
