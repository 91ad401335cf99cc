//! Token kinds.
//!
//! Discriminants follow TypeScript's `SyntaxKind` numbering so that node kinds
//! coming from an external parser can be compared directly
//! (`node.kind == SyntaxKind::Identifier as u16`). Node kinds above the token
//! range live in [`crate::syntax_kind_ext`].

use serde::{Deserialize, Serialize};

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken = 1,
    SingleLineCommentTrivia = 2,
    MultiLineCommentTrivia = 3,
    NewLineTrivia = 4,
    WhitespaceTrivia = 5,
    ShebangTrivia = 6,
    ConflictMarkerTrivia = 7,
    NonTextFileMarkerTrivia = 8,
    // Literals
    NumericLiteral = 9,
    BigIntLiteral = 10,
    StringLiteral = 11,
    JsxText = 12,
    JsxTextAllWhiteSpaces = 13,
    RegularExpressionLiteral = 14,
    NoSubstitutionTemplateLiteral = 15,
    TemplateHead = 16,
    TemplateMiddle = 17,
    TemplateTail = 18,
    // Punctuation
    OpenBraceToken = 19,
    CloseBraceToken = 20,
    OpenParenToken = 21,
    CloseParenToken = 22,
    OpenBracketToken = 23,
    CloseBracketToken = 24,
    DotToken = 25,
    DotDotDotToken = 26,
    SemicolonToken = 27,
    CommaToken = 28,
    QuestionDotToken = 29,
    LessThanToken = 30,
    LessThanSlashToken = 31,
    GreaterThanToken = 32,
    LessThanEqualsToken = 33,
    GreaterThanEqualsToken = 34,
    EqualsEqualsToken = 35,
    ExclamationEqualsToken = 36,
    EqualsEqualsEqualsToken = 37,
    ExclamationEqualsEqualsToken = 38,
    EqualsGreaterThanToken = 39,
    PlusToken = 40,
    MinusToken = 41,
    AsteriskToken = 42,
    AsteriskAsteriskToken = 43,
    SlashToken = 44,
    PercentToken = 45,
    PlusPlusToken = 46,
    MinusMinusToken = 47,
    LessThanLessThanToken = 48,
    GreaterThanGreaterThanToken = 49,
    GreaterThanGreaterThanGreaterThanToken = 50,
    AmpersandToken = 51,
    BarToken = 52,
    CaretToken = 53,
    ExclamationToken = 54,
    TildeToken = 55,
    AmpersandAmpersandToken = 56,
    BarBarToken = 57,
    QuestionToken = 58,
    ColonToken = 59,
    AtToken = 60,
    QuestionQuestionToken = 61,
    BacktickToken = 62,
    HashToken = 63,
    EqualsToken = 64,
    PlusEqualsToken = 65,
    MinusEqualsToken = 66,
    AsteriskEqualsToken = 67,
    AsteriskAsteriskEqualsToken = 68,
    SlashEqualsToken = 69,
    PercentEqualsToken = 70,
    LessThanLessThanEqualsToken = 71,
    GreaterThanGreaterThanEqualsToken = 72,
    GreaterThanGreaterThanGreaterThanEqualsToken = 73,
    AmpersandEqualsToken = 74,
    BarEqualsToken = 75,
    BarBarEqualsToken = 76,
    AmpersandAmpersandEqualsToken = 77,
    QuestionQuestionEqualsToken = 78,
    CaretEqualsToken = 79,
    // Identifiers
    Identifier = 80,
    PrivateIdentifier = 81,
    JSDocCommentTextToken = 82,
    // Reserved words
    BreakKeyword = 83,
    CaseKeyword = 84,
    CatchKeyword = 85,
    ClassKeyword = 86,
    ConstKeyword = 87,
    ContinueKeyword = 88,
    DebuggerKeyword = 89,
    DefaultKeyword = 90,
    DeleteKeyword = 91,
    DoKeyword = 92,
    ElseKeyword = 93,
    EnumKeyword = 94,
    ExportKeyword = 95,
    ExtendsKeyword = 96,
    FalseKeyword = 97,
    FinallyKeyword = 98,
    ForKeyword = 99,
    FunctionKeyword = 100,
    IfKeyword = 101,
    ImportKeyword = 102,
    InKeyword = 103,
    InstanceOfKeyword = 104,
    NewKeyword = 105,
    NullKeyword = 106,
    ReturnKeyword = 107,
    SuperKeyword = 108,
    SwitchKeyword = 109,
    ThisKeyword = 110,
    ThrowKeyword = 111,
    TrueKeyword = 112,
    TryKeyword = 113,
    TypeOfKeyword = 114,
    VarKeyword = 115,
    VoidKeyword = 116,
    WhileKeyword = 117,
    WithKeyword = 118,
    // Strict mode reserved words
    ImplementsKeyword = 119,
    InterfaceKeyword = 120,
    LetKeyword = 121,
    PackageKeyword = 122,
    PrivateKeyword = 123,
    ProtectedKeyword = 124,
    PublicKeyword = 125,
    StaticKeyword = 126,
    YieldKeyword = 127,
    // Contextual keywords
    AbstractKeyword = 128,
    AccessorKeyword = 129,
    AsKeyword = 130,
    AssertsKeyword = 131,
    AssertKeyword = 132,
    AnyKeyword = 133,
    AsyncKeyword = 134,
    AwaitKeyword = 135,
    BooleanKeyword = 136,
    ConstructorKeyword = 137,
    DeclareKeyword = 138,
    GetKeyword = 139,
    InferKeyword = 140,
    IntrinsicKeyword = 141,
    IsKeyword = 142,
    KeyOfKeyword = 143,
    ModuleKeyword = 144,
    NamespaceKeyword = 145,
    NeverKeyword = 146,
    OutKeyword = 147,
    ReadonlyKeyword = 148,
    RequireKeyword = 149,
    NumberKeyword = 150,
    ObjectKeyword = 151,
    SatisfiesKeyword = 152,
    SetKeyword = 153,
    StringKeyword = 154,
    SymbolKeyword = 155,
    TypeKeyword = 156,
    UndefinedKeyword = 157,
    UniqueKeyword = 158,
    UnknownKeyword = 159,
    UsingKeyword = 160,
    FromKeyword = 161,
    GlobalKeyword = 162,
    BigIntKeyword = 163,
    OverrideKeyword = 164,
    OfKeyword = 165,
}

impl SyntaxKind {
    pub const FIRST_TRIVIA_TOKEN: u16 = SyntaxKind::SingleLineCommentTrivia as u16;
    pub const LAST_TRIVIA_TOKEN: u16 = SyntaxKind::ConflictMarkerTrivia as u16;
    pub const FIRST_PUNCTUATION: u16 = SyntaxKind::OpenBraceToken as u16;
    pub const LAST_PUNCTUATION: u16 = SyntaxKind::CaretEqualsToken as u16;
    pub const FIRST_KEYWORD: u16 = SyntaxKind::BreakKeyword as u16;
    pub const LAST_KEYWORD: u16 = SyntaxKind::OfKeyword as u16;
    pub const LAST_TOKEN: u16 = SyntaxKind::LAST_KEYWORD;

    /// Convert a raw kind back to a token kind.
    ///
    /// Returns `None` for node kinds (anything above [`SyntaxKind::LAST_TOKEN`]).
    pub fn try_from_u16(value: u16) -> Option<SyntaxKind> {
        TOKEN_KINDS.get(value as usize).copied()
    }
}

/// Every token kind, indexed by discriminant.
const TOKEN_KINDS: &[SyntaxKind] = &[
    SyntaxKind::Unknown,
    SyntaxKind::EndOfFileToken,
    SyntaxKind::SingleLineCommentTrivia,
    SyntaxKind::MultiLineCommentTrivia,
    SyntaxKind::NewLineTrivia,
    SyntaxKind::WhitespaceTrivia,
    SyntaxKind::ShebangTrivia,
    SyntaxKind::ConflictMarkerTrivia,
    SyntaxKind::NonTextFileMarkerTrivia,
    SyntaxKind::NumericLiteral,
    SyntaxKind::BigIntLiteral,
    SyntaxKind::StringLiteral,
    SyntaxKind::JsxText,
    SyntaxKind::JsxTextAllWhiteSpaces,
    SyntaxKind::RegularExpressionLiteral,
    SyntaxKind::NoSubstitutionTemplateLiteral,
    SyntaxKind::TemplateHead,
    SyntaxKind::TemplateMiddle,
    SyntaxKind::TemplateTail,
    SyntaxKind::OpenBraceToken,
    SyntaxKind::CloseBraceToken,
    SyntaxKind::OpenParenToken,
    SyntaxKind::CloseParenToken,
    SyntaxKind::OpenBracketToken,
    SyntaxKind::CloseBracketToken,
    SyntaxKind::DotToken,
    SyntaxKind::DotDotDotToken,
    SyntaxKind::SemicolonToken,
    SyntaxKind::CommaToken,
    SyntaxKind::QuestionDotToken,
    SyntaxKind::LessThanToken,
    SyntaxKind::LessThanSlashToken,
    SyntaxKind::GreaterThanToken,
    SyntaxKind::LessThanEqualsToken,
    SyntaxKind::GreaterThanEqualsToken,
    SyntaxKind::EqualsEqualsToken,
    SyntaxKind::ExclamationEqualsToken,
    SyntaxKind::EqualsEqualsEqualsToken,
    SyntaxKind::ExclamationEqualsEqualsToken,
    SyntaxKind::EqualsGreaterThanToken,
    SyntaxKind::PlusToken,
    SyntaxKind::MinusToken,
    SyntaxKind::AsteriskToken,
    SyntaxKind::AsteriskAsteriskToken,
    SyntaxKind::SlashToken,
    SyntaxKind::PercentToken,
    SyntaxKind::PlusPlusToken,
    SyntaxKind::MinusMinusToken,
    SyntaxKind::LessThanLessThanToken,
    SyntaxKind::GreaterThanGreaterThanToken,
    SyntaxKind::GreaterThanGreaterThanGreaterThanToken,
    SyntaxKind::AmpersandToken,
    SyntaxKind::BarToken,
    SyntaxKind::CaretToken,
    SyntaxKind::ExclamationToken,
    SyntaxKind::TildeToken,
    SyntaxKind::AmpersandAmpersandToken,
    SyntaxKind::BarBarToken,
    SyntaxKind::QuestionToken,
    SyntaxKind::ColonToken,
    SyntaxKind::AtToken,
    SyntaxKind::QuestionQuestionToken,
    SyntaxKind::BacktickToken,
    SyntaxKind::HashToken,
    SyntaxKind::EqualsToken,
    SyntaxKind::PlusEqualsToken,
    SyntaxKind::MinusEqualsToken,
    SyntaxKind::AsteriskEqualsToken,
    SyntaxKind::AsteriskAsteriskEqualsToken,
    SyntaxKind::SlashEqualsToken,
    SyntaxKind::PercentEqualsToken,
    SyntaxKind::LessThanLessThanEqualsToken,
    SyntaxKind::GreaterThanGreaterThanEqualsToken,
    SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken,
    SyntaxKind::AmpersandEqualsToken,
    SyntaxKind::BarEqualsToken,
    SyntaxKind::BarBarEqualsToken,
    SyntaxKind::AmpersandAmpersandEqualsToken,
    SyntaxKind::QuestionQuestionEqualsToken,
    SyntaxKind::CaretEqualsToken,
    SyntaxKind::Identifier,
    SyntaxKind::PrivateIdentifier,
    SyntaxKind::JSDocCommentTextToken,
    SyntaxKind::BreakKeyword,
    SyntaxKind::CaseKeyword,
    SyntaxKind::CatchKeyword,
    SyntaxKind::ClassKeyword,
    SyntaxKind::ConstKeyword,
    SyntaxKind::ContinueKeyword,
    SyntaxKind::DebuggerKeyword,
    SyntaxKind::DefaultKeyword,
    SyntaxKind::DeleteKeyword,
    SyntaxKind::DoKeyword,
    SyntaxKind::ElseKeyword,
    SyntaxKind::EnumKeyword,
    SyntaxKind::ExportKeyword,
    SyntaxKind::ExtendsKeyword,
    SyntaxKind::FalseKeyword,
    SyntaxKind::FinallyKeyword,
    SyntaxKind::ForKeyword,
    SyntaxKind::FunctionKeyword,
    SyntaxKind::IfKeyword,
    SyntaxKind::ImportKeyword,
    SyntaxKind::InKeyword,
    SyntaxKind::InstanceOfKeyword,
    SyntaxKind::NewKeyword,
    SyntaxKind::NullKeyword,
    SyntaxKind::ReturnKeyword,
    SyntaxKind::SuperKeyword,
    SyntaxKind::SwitchKeyword,
    SyntaxKind::ThisKeyword,
    SyntaxKind::ThrowKeyword,
    SyntaxKind::TrueKeyword,
    SyntaxKind::TryKeyword,
    SyntaxKind::TypeOfKeyword,
    SyntaxKind::VarKeyword,
    SyntaxKind::VoidKeyword,
    SyntaxKind::WhileKeyword,
    SyntaxKind::WithKeyword,
    SyntaxKind::ImplementsKeyword,
    SyntaxKind::InterfaceKeyword,
    SyntaxKind::LetKeyword,
    SyntaxKind::PackageKeyword,
    SyntaxKind::PrivateKeyword,
    SyntaxKind::ProtectedKeyword,
    SyntaxKind::PublicKeyword,
    SyntaxKind::StaticKeyword,
    SyntaxKind::YieldKeyword,
    SyntaxKind::AbstractKeyword,
    SyntaxKind::AccessorKeyword,
    SyntaxKind::AsKeyword,
    SyntaxKind::AssertsKeyword,
    SyntaxKind::AssertKeyword,
    SyntaxKind::AnyKeyword,
    SyntaxKind::AsyncKeyword,
    SyntaxKind::AwaitKeyword,
    SyntaxKind::BooleanKeyword,
    SyntaxKind::ConstructorKeyword,
    SyntaxKind::DeclareKeyword,
    SyntaxKind::GetKeyword,
    SyntaxKind::InferKeyword,
    SyntaxKind::IntrinsicKeyword,
    SyntaxKind::IsKeyword,
    SyntaxKind::KeyOfKeyword,
    SyntaxKind::ModuleKeyword,
    SyntaxKind::NamespaceKeyword,
    SyntaxKind::NeverKeyword,
    SyntaxKind::OutKeyword,
    SyntaxKind::ReadonlyKeyword,
    SyntaxKind::RequireKeyword,
    SyntaxKind::NumberKeyword,
    SyntaxKind::ObjectKeyword,
    SyntaxKind::SatisfiesKeyword,
    SyntaxKind::SetKeyword,
    SyntaxKind::StringKeyword,
    SyntaxKind::SymbolKeyword,
    SyntaxKind::TypeKeyword,
    SyntaxKind::UndefinedKeyword,
    SyntaxKind::UniqueKeyword,
    SyntaxKind::UnknownKeyword,
    SyntaxKind::UsingKeyword,
    SyntaxKind::FromKeyword,
    SyntaxKind::GlobalKeyword,
    SyntaxKind::BigIntKeyword,
    SyntaxKind::OverrideKeyword,
    SyntaxKind::OfKeyword,
];
