use std::collections::HashMap;

use super::graph::{DependencyEdge, EdgeKind};
use super::resolver::{SymbolResolver, UnitScope};
use crate::config::{ExtractorConfig, SupertypePolicy};
use crate::parsers::ast::{Body, CallRef, Member, TypeDecl};

/// Emits the dependency edges of one type declaration.
///
/// Edge order is inherit, then reference, then call. Duplicates are kept.
pub struct DependencyDeriver<'a> {
    config: &'a ExtractorConfig,
    resolver: &'a dyn SymbolResolver,
    scope: &'a UnitScope,
}

impl<'a> DependencyDeriver<'a> {
    pub fn new(
        config: &'a ExtractorConfig,
        resolver: &'a dyn SymbolResolver,
        scope: &'a UnitScope,
    ) -> Self {
        Self {
            config,
            resolver,
            scope,
        }
    }

    pub fn derive(&self, decl: &TypeDecl) -> Vec<DependencyEdge> {
        let mut edges = Vec::new();

        if self.config.emits(EdgeKind::Inherit) {
            self.inheritance_edges(decl, &mut edges);
        }
        if self.config.emits(EdgeKind::Reference) {
            self.reference_edges(decl, &mut edges);
        }
        if self.config.emits(EdgeKind::Call) {
            self.call_edges(decl, &mut edges);
        }

        edges
    }

    fn edge(&self, kind: EdgeKind, written: &str) -> DependencyEdge {
        let target = self
            .resolver
            .target_name(written, self.scope)
            .unwrap_or_else(|| written.to_string());
        DependencyEdge::new(kind, target)
    }

    fn inheritance_edges(&self, decl: &TypeDecl, edges: &mut Vec<DependencyEdge>) {
        match self.config.supertypes {
            SupertypePolicy::First => {
                if let Some(parent) = decl.extends.first() {
                    edges.push(self.edge(EdgeKind::Inherit, &parent.name));
                }
            }
            SupertypePolicy::All => {
                for parent in decl.extends.iter().chain(&decl.implements) {
                    edges.push(self.edge(EdgeKind::Inherit, &parent.name));
                }
            }
        }
    }

    fn reference_edges(&self, decl: &TypeDecl, edges: &mut Vec<DependencyEdge>) {
        for field in decl.fields() {
            if let Some(ty) = &field.ty {
                edges.push(self.edge(EdgeKind::Reference, &ty.name));
            }
        }
    }

    fn call_edges(&self, decl: &TypeDecl, edges: &mut Vec<DependencyEdge>) {
        let field_types: HashMap<&str, &str> = decl
            .fields()
            .filter_map(|field| field.ty.as_ref().map(|ty| (field, ty)))
            .flat_map(|(field, ty)| {
                field
                    .names
                    .iter()
                    .map(move |name| (name.as_str(), ty.name.as_str()))
            })
            .collect();

        for body in own_bodies(decl) {
            for call in &body.calls {
                let target = match call {
                    CallRef::Instantiation(ty) => Some(ty.name.as_str()),
                    CallRef::Invocation {
                        receiver: Some(receiver),
                        ..
                    } => field_types
                        .get(receiver.as_str())
                        .copied()
                        .or_else(|| is_type_like(receiver).then_some(receiver.as_str())),
                    CallRef::Invocation { receiver: None, .. } => None,
                };
                if let Some(target) = target {
                    edges.push(self.edge(EdgeKind::Call, target));
                }
            }
        }
    }
}

/// Bodies that belong to the type itself; nested type declarations own theirs.
fn own_bodies(decl: &TypeDecl) -> impl Iterator<Item = &Body> {
    decl.members.iter().filter_map(|member| match member {
        Member::Method(method) => Some(&method.body),
        Member::Field(field) => Some(&field.body),
        Member::Constructor(body) | Member::Initializer(body) => Some(body),
        Member::Type(_) => None,
    })
}

/// Receivers such as `Math` in `Math.max(..)` name a type rather than a value.
fn is_type_like(receiver: &str) -> bool {
    receiver
        .chars()
        .next()
        .map(char::is_uppercase)
        .unwrap_or(false)
}
