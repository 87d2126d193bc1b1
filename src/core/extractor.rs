use super::dependencies::DependencyDeriver;
use super::graph::TypeRecord;
use super::metrics::{method_records, summarize};
use super::resolver::{SymbolResolver, UnitScope};
use crate::config::ExtractorConfig;
use crate::parsers::ast::{walk_unit, CompilationUnit, DeclVisitor, Enclosing, TypeDecl, TypeKind};

/// Turns one parsed unit into Type Records, in tree-walk order.
pub struct TypeExtractor<'a> {
    config: &'a ExtractorConfig,
    resolver: &'a dyn SymbolResolver,
}

impl<'a> TypeExtractor<'a> {
    pub fn new(config: &'a ExtractorConfig, resolver: &'a dyn SymbolResolver) -> Self {
        Self { config, resolver }
    }

    pub fn extract(&self, unit: &CompilationUnit) -> Vec<TypeRecord> {
        let scope = UnitScope::build(unit);
        let mut visitor = RecordCollector {
            resolver: self.resolver,
            deriver: DependencyDeriver::new(self.config, self.resolver, &scope),
            records: Vec::new(),
        };
        walk_unit(unit, &mut visitor);
        visitor.records
    }
}

struct RecordCollector<'a> {
    resolver: &'a dyn SymbolResolver,
    deriver: DependencyDeriver<'a>,
    records: Vec<TypeRecord>,
}

impl DeclVisitor for RecordCollector<'_> {
    fn visit_type(&mut self, decl: &TypeDecl, enclosing: &Enclosing) {
        let is_interface = match decl.kind {
            TypeKind::Class => false,
            TypeKind::Interface => true,
            TypeKind::Enum | TypeKind::Record | TypeKind::Annotation => return,
        };

        let methods = method_records(decl);
        let metrics = summarize(decl, &methods);

        self.records.push(TypeRecord {
            simple_name: decl.name.clone(),
            qualified_name: self.resolver.type_name(decl, enclosing),
            is_interface,
            methods,
            metrics,
            dependencies: self.deriver.derive(decl),
        });
    }
}
