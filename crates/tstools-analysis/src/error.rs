use thiserror::Error;
use tstools_syntax::NodeIndex;

/// Failures of the heritage walk.
///
/// Every variant means the resolver broke its contract or the input graph is
/// malformed; none of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no type resolved for heritage reference {node}")]
    UnresolvedType { node: NodeIndex },

    #[error("type of heritage reference {node} has no declaring symbol")]
    MissingTypeSymbol { node: NodeIndex },

    #[error("symbol {symbol} returned by the resolver is not in the symbol table")]
    UnknownSymbol { symbol: u32 },

    #[error("heritage chain deeper than {depth} levels at {node} (cyclic extends?)")]
    HeritageTooDeep { depth: u32, node: NodeIndex },
}
