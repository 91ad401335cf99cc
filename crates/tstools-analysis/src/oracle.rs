//! The type-resolution seam.
//!
//! Heritage queries need semantic answers this crate never computes: which
//! type a heritage reference names, which symbol declares that type, and which
//! member symbols it has. A checker supplies them through [`TypeResolver`].

use serde::{Deserialize, Serialize};
use tstools_binder::SymbolId;
use tstools_syntax::NodeIndex;

/// Opaque handle to a resolved type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub u32);

/// Read-only type queries answered by an external checker.
///
/// Implementations are trusted to have completed binding and resolution; a
/// `None` where the walk needs an answer is reported as an
/// [`AnalysisError`](crate::AnalysisError), never papered over.
pub trait TypeResolver {
    /// Type named by a type-reference node (`Base<T>` in `extends Base<T>`).
    fn type_at_location(&self, node: NodeIndex) -> Option<TypeId>;

    /// Symbol declaring `ty`.
    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId>;

    /// Member symbols of `ty`, in declaration order.
    fn type_properties(&self, ty: TypeId) -> Vec<SymbolId>;

    /// Symbol an expression node refers to (a module specifier, an identifier).
    fn symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId>;
}

impl<R: TypeResolver + ?Sized> TypeResolver for &R {
    fn type_at_location(&self, node: NodeIndex) -> Option<TypeId> {
        (**self).type_at_location(node)
    }

    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId> {
        (**self).type_symbol(ty)
    }

    fn type_properties(&self, ty: TypeId) -> Vec<SymbolId> {
        (**self).type_properties(ty)
    }

    fn symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId> {
        (**self).symbol_at_location(node)
    }
}
