//! Declarative construction of small checked programs.
//!
//! [`ProgramBuilder`] lays out classes and interfaces, declares their symbols
//! and fills a [`TypeTable`] the way a checker would answer for them: each
//! heritage reference resolves to the type of the declaration it names, and a
//! type's properties are the members declared on it. References to names that
//! were never declared stay unresolved.

use crate::snapshot::{ProgramSnapshot, TypeTable};
use rustc_hash::FxHashMap;
use tstools_binder::{BinderState, SymbolId, symbol_flags};
use tstools_syntax::syntax_kind_ext::{
    CLASS_DECLARATION, PROPERTY_DECLARATION, PROPERTY_SIGNATURE,
};
use tstools_syntax::{
    ClassData, ExprWithTypeArgsData, HeritageData, IdentifierData, InterfaceData, NodeArena,
    NodeIndex, NodeList, PropertyDeclData, SourceFileData, SyntaxKind, node_flags,
};

/// Shape of a class or interface declaration.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeclSpec<'a> {
    pub name: &'a str,
    pub modifiers: &'a [SyntaxKind],
    pub extends: &'a [&'a str],
    pub implements: &'a [&'a str],
    /// Property names, declared in order.
    pub members: &'a [&'a str],
    /// Sets `EXPORT_CONTEXT` on the declaration, so its members are visible
    /// to heritage collection.
    pub export_context: bool,
}

struct DeclaredType {
    symbol: SymbolId,
    members: Vec<SymbolId>,
}

struct PendingReference {
    type_ref: NodeIndex,
    expression: NodeIndex,
    target: String,
}

pub struct ProgramBuilder {
    arena: NodeArena,
    binder: BinderState,
    file_name: String,
    is_declaration_file: bool,
    statements: Vec<NodeIndex>,
    declared: Vec<DeclaredType>,
    by_name: FxHashMap<String, usize>,
    references: Vec<PendingReference>,
}

impl ProgramBuilder {
    pub fn new(file_name: &str) -> ProgramBuilder {
        ProgramBuilder {
            arena: NodeArena::new(),
            binder: BinderState::new(),
            file_name: file_name.to_string(),
            is_declaration_file: file_name.ends_with(".d.ts"),
            statements: Vec::new(),
            declared: Vec::new(),
            by_name: FxHashMap::default(),
            references: Vec::new(),
        }
    }

    /// Direct access for nodes the builder has no shortcut for.
    pub fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    pub fn binder_mut(&mut self) -> &mut BinderState {
        &mut self.binder
    }

    /// Add a hand-built node as a top-level statement.
    pub fn add_statement(&mut self, statement: NodeIndex) {
        self.statements.push(statement);
    }

    pub fn add_class(&mut self, spec: DeclSpec<'_>) -> NodeIndex {
        self.add_declaration(spec, true)
    }

    pub fn add_interface(&mut self, spec: DeclSpec<'_>) -> NodeIndex {
        self.add_declaration(spec, false)
    }

    fn identifier(&mut self, text: &str) -> NodeIndex {
        self.arena.add_identifier(
            0,
            text.len() as u32,
            IdentifierData {
                escaped_text: text.to_string(),
                is_in_jsdoc_namespace: false,
            },
        )
    }

    fn heritage_clause(&mut self, token: SyntaxKind, targets: &[&str]) -> Option<NodeIndex> {
        if targets.is_empty() {
            return None;
        }
        let mut types = Vec::with_capacity(targets.len());
        for &target in targets {
            let expression = self.identifier(target);
            let type_ref = self.arena.add_expr_with_type_args(
                0,
                0,
                ExprWithTypeArgsData {
                    expression,
                    type_arguments: None,
                },
            );
            self.references.push(PendingReference {
                type_ref,
                expression,
                target: target.to_string(),
            });
            types.push(type_ref);
        }
        Some(self.arena.add_heritage_clause(
            0,
            0,
            HeritageData {
                token: token as u16,
                types: NodeList::from_nodes(types),
            },
        ))
    }

    fn add_declaration(&mut self, spec: DeclSpec<'_>, is_class: bool) -> NodeIndex {
        let modifiers: Vec<NodeIndex> = spec
            .modifiers
            .iter()
            .map(|&kind| self.arena.add_token(kind, 0, 0))
            .collect();
        let modifiers = (!modifiers.is_empty()).then(|| NodeList::from_nodes(modifiers));
        let name = self.identifier(spec.name);

        let clauses: Vec<NodeIndex> = [
            self.heritage_clause(SyntaxKind::ExtendsKeyword, spec.extends),
            self.heritage_clause(SyntaxKind::ImplementsKeyword, spec.implements),
        ]
        .into_iter()
        .flatten()
        .collect();
        let heritage_clauses = (!clauses.is_empty()).then(|| NodeList::from_nodes(clauses));

        let member_kind = if is_class {
            PROPERTY_DECLARATION
        } else {
            PROPERTY_SIGNATURE
        };
        let mut member_nodes = Vec::with_capacity(spec.members.len());
        for &member in spec.members {
            let member_name = self.identifier(member);
            member_nodes.push(self.arena.add_property_decl(
                member_kind,
                0,
                0,
                PropertyDeclData {
                    modifiers: None,
                    name: member_name,
                    type_annotation: NodeIndex::NONE,
                    initializer: NodeIndex::NONE,
                },
            ));
        }
        let members = NodeList::from_nodes(member_nodes.clone());

        let declaration = if is_class {
            self.arena.add_class(
                CLASS_DECLARATION,
                0,
                0,
                ClassData {
                    modifiers,
                    name,
                    heritage_clauses,
                    members,
                },
            )
        } else {
            self.arena.add_interface(
                0,
                0,
                InterfaceData {
                    modifiers,
                    name,
                    heritage_clauses,
                    members,
                },
            )
        };
        if spec.export_context {
            self.arena
                .add_node_flags(declaration, node_flags::EXPORT_CONTEXT);
        }

        let flags = if is_class {
            symbol_flags::CLASS
        } else {
            symbol_flags::INTERFACE
        };
        let symbol = self.binder.declare_symbol(declaration, flags, spec.name);
        let member_symbols: Vec<SymbolId> = member_nodes
            .iter()
            .zip(spec.members)
            .map(|(&node, &member)| {
                self.binder
                    .declare_member(symbol, node, symbol_flags::PROPERTY, member)
            })
            .collect();

        // Reopened interfaces share one type.
        match self.by_name.get(spec.name) {
            Some(&index) => self.declared[index].members.extend(member_symbols),
            None => {
                self.by_name
                    .insert(spec.name.to_string(), self.declared.len());
                self.declared.push(DeclaredType {
                    symbol,
                    members: member_symbols,
                });
            }
        }

        self.statements.push(declaration);
        declaration
    }

    /// Resolve heritage references, wrap the statements in a source file and
    /// return the snapshot.
    pub fn finish(mut self) -> ProgramSnapshot {
        let mut types = TypeTable::new();
        let type_ids: Vec<_> = self
            .declared
            .iter()
            .map(|decl| types.add_type(Some(decl.symbol), decl.members.clone()))
            .collect();

        for reference in &self.references {
            let Some(&index) = self.by_name.get(&reference.target) else {
                continue;
            };
            types.set_type_at(reference.type_ref, type_ids[index]);
            types.set_symbol_at(reference.expression, self.declared[index].symbol);
        }

        let statements = std::mem::take(&mut self.statements);
        self.arena.add_source_file(
            0,
            0,
            SourceFileData {
                statements: NodeList::from_nodes(statements),
                file_name: self.file_name,
                is_declaration_file: self.is_declaration_file,
            },
        );

        ProgramSnapshot::new(self.arena, self.binder, types)
    }
}
