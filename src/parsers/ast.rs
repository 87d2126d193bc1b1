//! Declaration tree produced by the unit parser.
//!
//! The concrete syntax tree is lowered into these closed types so that the
//! extraction passes match on declaration kinds exhaustively instead of
//! probing grammar node names.

use std::path::PathBuf;

/// 1-based inclusive line range of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_line: usize,
    pub end_line: usize,
}

impl Span {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// `end_line - start_line`; blank lines and comments are included.
    pub fn line_span(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }
}

#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub path: PathBuf,
    pub package: Option<String>,
    pub imports: Vec<Import>,
    pub types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub path: String,
    pub is_static: bool,
    pub is_wildcard: bool,
}

impl Import {
    /// Last segment of a single-type import (`a.b.Foo` -> `Foo`).
    pub fn simple_name(&self) -> Option<&str> {
        if self.is_wildcard || self.is_static {
            return None;
        }
        self.path.rsplit('.').next()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

/// A type as written at a use site, reduced to its simple name
/// (`a.b.Base<T>[]` -> `Base`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub name: String,
    pub extends: Vec<TypeRef>,
    pub implements: Vec<TypeRef>,
    pub members: Vec<Member>,
}

impl TypeDecl {
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(field) => Some(field),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Member {
    Method(MethodDecl),
    Field(FieldDecl),
    Constructor(Body),
    /// Static/instance initializer blocks and enum constant bodies.
    Initializer(Body),
    Type(TypeDecl),
}

#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    pub span: Span,
    pub body: Body,
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// `None` for primitive types.
    pub ty: Option<TypeRef>,
    pub names: Vec<String>,
    pub body: Body,
}

/// Executable content of a member: what it calls and which types it declares locally.
#[derive(Debug, Clone, Default)]
pub struct Body {
    pub calls: Vec<CallRef>,
    pub local_types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallRef {
    /// `receiver.method(..)`; `this.x` receivers are recorded as `x`.
    Invocation {
        receiver: Option<String>,
        method: String,
    },
    /// `new T(..)`.
    Instantiation(TypeRef),
}

/// Where a type declaration sits, which decides whether it has a qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enclosing {
    Unit { package: Option<String> },
    Type { qualified: Option<String> },
    /// Inside an executable body; such types have no qualified name.
    Local,
}

impl Enclosing {
    pub fn qualify(&self, name: &str) -> Option<String> {
        match self {
            Enclosing::Unit { package: Some(pkg) } => Some(format!("{pkg}.{name}")),
            Enclosing::Unit { package: None } => Some(name.to_string()),
            Enclosing::Type {
                qualified: Some(outer),
            } => Some(format!("{outer}.{name}")),
            Enclosing::Type { qualified: None } | Enclosing::Local => None,
        }
    }
}

pub trait DeclVisitor {
    fn visit_type(&mut self, decl: &TypeDecl, enclosing: &Enclosing);
}

/// Pre-order walk over every type declaration in the unit, nested and local ones included.
pub fn walk_unit<V: DeclVisitor + ?Sized>(unit: &CompilationUnit, visitor: &mut V) {
    let enclosing = Enclosing::Unit {
        package: unit.package.clone(),
    };
    for decl in &unit.types {
        walk_type(decl, &enclosing, visitor);
    }
}

pub fn walk_type<V: DeclVisitor + ?Sized>(decl: &TypeDecl, enclosing: &Enclosing, visitor: &mut V) {
    visitor.visit_type(decl, enclosing);

    let inner = Enclosing::Type {
        qualified: enclosing.qualify(&decl.name),
    };
    for member in &decl.members {
        match member {
            Member::Type(nested) => walk_type(nested, &inner, visitor),
            Member::Method(method) => walk_body(&method.body, visitor),
            Member::Field(field) => walk_body(&field.body, visitor),
            Member::Constructor(body) | Member::Initializer(body) => walk_body(body, visitor),
        }
    }
}

fn walk_body<V: DeclVisitor + ?Sized>(body: &Body, visitor: &mut V) {
    for local in &body.local_types {
        walk_type(local, &Enclosing::Local, visitor);
    }
}
