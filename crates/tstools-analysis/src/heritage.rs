//! Heritage resolution: members contributed by `extends` / `implements`.
//!
//! The walk resolves each heritage reference through a [`TypeResolver`], finds
//! the declaration of the referenced type, and recurses into that
//! declaration's own heritage clauses before collecting the type's members.
//! The most-base ancestors' members therefore come first within each branch.
//!
//! Results are not deduplicated and no visited set is kept: a shared ancestor
//! reached along two paths (a diamond) contributes its members once per path.
//! Recursion depth is capped at [`MAX_HERITAGE_DEPTH`] so a cyclic graph ends
//! in [`AnalysisError::HeritageTooDeep`] rather than a stack overflow.

use crate::error::AnalysisError;
use crate::modifiers::{ModifierFlags, has_modifier};
use crate::oracle::{TypeId, TypeResolver};
use crate::symbols::is_export_context;
use tracing::{debug, trace};
use tstools_binder::{BinderState, SymbolId};
use tstools_common::limits::MAX_HERITAGE_DEPTH;
use tstools_syntax::{NodeArena, NodeIndex};

/// Collects inherited member symbols of class-like declarations.
pub struct HeritageResolver<'a, R: TypeResolver + ?Sized> {
    arena: &'a NodeArena,
    binder: &'a BinderState,
    resolver: &'a R,
}

impl<'a, R: TypeResolver + ?Sized> HeritageResolver<'a, R> {
    pub fn new(arena: &'a NodeArena, binder: &'a BinderState, resolver: &'a R) -> Self {
        HeritageResolver {
            arena,
            binder,
            resolver,
        }
    }

    /// Exported members of every ancestor named in the heritage clauses of
    /// `class_like`, ancestors before descendants.
    ///
    /// Both `extends` and `implements` clauses are walked, in declaration
    /// order. The members of `class_like` itself are not included.
    pub fn collect_heritage_properties(
        &self,
        class_like: NodeIndex,
    ) -> Result<Vec<SymbolId>, AnalysisError> {
        let mut properties = Vec::new();
        self.collect_from_declaration(class_like, 0, &mut properties)?;
        debug!(
            node = %class_like,
            count = properties.len(),
            "collected heritage properties"
        );
        Ok(properties)
    }

    /// Members of every abstract class named in an `extends` clause.
    ///
    /// Only the directly named classes are inspected; their own ancestors are
    /// not visited.
    pub fn collect_abstract_properties(
        &self,
        extends_clause: NodeIndex,
    ) -> Result<Vec<SymbolId>, AnalysisError> {
        let mut properties = Vec::new();
        for type_ref in self.clause_types(extends_clause) {
            let (ty, type_symbol) = self.resolve_with_symbol(type_ref)?;
            let declaration = self.symbol(type_symbol)?.value_declaration;
            if declaration.is_none()
                || !has_modifier(self.arena, declaration, ModifierFlags::ABSTRACT)
            {
                trace!(reference = %type_ref, "skipping non-abstract base");
                continue;
            }
            properties.extend(self.resolver.type_properties(ty));
        }
        Ok(properties)
    }

    /// Members of every type named in an `implements` clause.
    pub fn collect_implements_properties(
        &self,
        implements_clause: NodeIndex,
    ) -> Result<Vec<SymbolId>, AnalysisError> {
        let mut properties = Vec::new();
        for type_ref in self.clause_types(implements_clause) {
            let ty = self.resolve(type_ref)?;
            properties.extend(self.resolver.type_properties(ty));
        }
        Ok(properties)
    }

    fn collect_from_declaration(
        &self,
        declaration: NodeIndex,
        depth: u32,
        out: &mut Vec<SymbolId>,
    ) -> Result<(), AnalysisError> {
        if depth > MAX_HERITAGE_DEPTH {
            return Err(AnalysisError::HeritageTooDeep {
                depth: MAX_HERITAGE_DEPTH,
                node: declaration,
            });
        }
        let Some(node) = self.arena.get(declaration) else {
            return Ok(());
        };
        let Some(clauses) = self.arena.get_heritage_clauses(node) else {
            return Ok(());
        };

        for clause in clauses.iter() {
            for type_ref in self.clause_types(clause) {
                let (ty, type_symbol) = self.resolve_with_symbol(type_ref)?;
                let symbol = self.symbol(type_symbol)?;
                debug!(
                    reference = %type_ref,
                    base = %symbol.escaped_name,
                    depth,
                    "resolved heritage reference"
                );

                // Interfaces have no value declaration, and any of their
                // declarations may carry heritage clauses.
                if symbol.value_declaration.is_some() {
                    self.collect_from_declaration(symbol.value_declaration, depth + 1, out)?;
                } else {
                    for &base_declaration in &symbol.declarations {
                        self.collect_from_declaration(base_declaration, depth + 1, out)?;
                    }
                }

                for property in self.resolver.type_properties(ty) {
                    let member = self.symbol(property)?;
                    if is_export_context(self.arena, member) {
                        trace!(member = %member.escaped_name, "collected heritage member");
                        out.push(property);
                    }
                }
            }
        }
        Ok(())
    }

    /// Type references of a heritage clause; empty for anything else.
    fn clause_types(&self, clause: NodeIndex) -> Vec<NodeIndex> {
        self.arena
            .get(clause)
            .and_then(|node| self.arena.get_heritage_clause(node))
            .map(|data| data.types.nodes.clone())
            .unwrap_or_default()
    }

    fn resolve(&self, type_ref: NodeIndex) -> Result<TypeId, AnalysisError> {
        self.resolver
            .type_at_location(type_ref)
            .ok_or(AnalysisError::UnresolvedType { node: type_ref })
    }

    fn resolve_with_symbol(&self, type_ref: NodeIndex) -> Result<(TypeId, SymbolId), AnalysisError> {
        let ty = self.resolve(type_ref)?;
        let symbol = self
            .resolver
            .type_symbol(ty)
            .ok_or(AnalysisError::MissingTypeSymbol { node: type_ref })?;
        Ok((ty, symbol))
    }

    fn symbol(&self, id: SymbolId) -> Result<&'a tstools_binder::Symbol, AnalysisError> {
        self.binder
            .symbols
            .get(id)
            .ok_or(AnalysisError::UnknownSymbol { symbol: id.0 })
    }
}
