//! Best-effort name resolution layered over the syntactic declaration tree.
//!
//! Resolution never fails: when a name cannot be qualified the caller keeps
//! the name as written.

use std::collections::HashMap;

use crate::config::ExtractorConfig;
use crate::parsers::ast::{walk_unit, CompilationUnit, DeclVisitor, Enclosing, TypeDecl};

pub trait SymbolResolver: Send + Sync {
    /// Qualified name of a declared type, if one can be determined.
    fn type_name(&self, decl: &TypeDecl, enclosing: &Enclosing) -> Option<String>;

    /// Qualified name for a type referenced by its written simple name.
    fn target_name(&self, written: &str, scope: &UnitScope) -> Option<String>;
}

/// Never qualifies anything.
pub struct Unresolved;

impl SymbolResolver for Unresolved {
    fn type_name(&self, _decl: &TypeDecl, _enclosing: &Enclosing) -> Option<String> {
        None
    }

    fn target_name(&self, _written: &str, _scope: &UnitScope) -> Option<String> {
        None
    }
}

/// Qualifies from package, nesting and imports of the same file.
pub struct SyntacticResolver {
    qualify_types: bool,
    qualify_targets: bool,
}

impl SyntacticResolver {
    pub fn new(qualify_types: bool, qualify_targets: bool) -> Self {
        Self {
            qualify_types,
            qualify_targets,
        }
    }
}

impl SymbolResolver for SyntacticResolver {
    fn type_name(&self, decl: &TypeDecl, enclosing: &Enclosing) -> Option<String> {
        if !self.qualify_types {
            return None;
        }
        enclosing.qualify(&decl.name)
    }

    fn target_name(&self, written: &str, scope: &UnitScope) -> Option<String> {
        if !self.qualify_targets {
            return None;
        }
        scope.lookup(written).map(str::to_string)
    }
}

pub fn resolver_for(config: &ExtractorConfig) -> Box<dyn SymbolResolver> {
    if config.resolve_names || config.resolve_targets {
        Box::new(SyntacticResolver::new(
            config.resolve_names,
            config.resolve_targets,
        ))
    } else {
        Box::new(Unresolved)
    }
}

/// Simple-name lookup table for one compilation unit.
#[derive(Debug, Default)]
pub struct UnitScope {
    imported: HashMap<String, String>,
    declared: HashMap<String, String>,
}

impl UnitScope {
    pub fn build(unit: &CompilationUnit) -> Self {
        let imported = unit
            .imports
            .iter()
            .filter_map(|import| {
                import
                    .simple_name()
                    .map(|simple| (simple.to_string(), import.path.clone()))
            })
            .collect();

        let mut collector = DeclaredTypes::default();
        walk_unit(unit, &mut collector);

        Self {
            imported,
            declared: collector.names,
        }
    }

    /// Single-type imports are consulted before types declared in the file.
    pub fn lookup(&self, simple: &str) -> Option<&str> {
        self.imported
            .get(simple)
            .or_else(|| self.declared.get(simple))
            .map(String::as_str)
    }
}

#[derive(Default)]
struct DeclaredTypes {
    names: HashMap<String, String>,
}

impl DeclVisitor for DeclaredTypes {
    fn visit_type(&mut self, decl: &TypeDecl, enclosing: &Enclosing) {
        if let Some(qualified) = enclosing.qualify(&decl.name) {
            self.names.entry(decl.name.clone()).or_insert(qualified);
        }
    }
}
