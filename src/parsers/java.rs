use std::path::Path;

use tree_sitter::Node as TSNode;

use super::ast::{
    Body, CallRef, CompilationUnit, FieldDecl, Import, Member, MethodDecl, Span, TypeDecl,
    TypeKind, TypeRef,
};
use super::common::{extract_text, find_child_by_kind, named_children, TreeSitterParser};
use super::UnitParser;
use crate::error::Result;

pub struct JavaParser;

impl JavaParser {
    /// Fails if the bundled grammar is incompatible with the tree-sitter runtime.
    pub fn new() -> Result<Self> {
        TreeSitterParser::new(tree_sitter_java::language())?;
        Ok(Self)
    }
}

impl UnitParser for JavaParser {
    fn parse_source(&self, file_path: &Path, source: &str) -> Result<CompilationUnit> {
        let mut parser = TreeSitterParser::new(tree_sitter_java::language())?;
        let tree = parser.parse_strict(file_path, source)?;

        let lowering = Lowering {
            source: source.as_bytes(),
        };
        Ok(lowering.unit(file_path, &tree.root_node()))
    }

    fn language_name(&self) -> &str {
        "java"
    }
}

fn type_kind(kind: &str) -> Option<TypeKind> {
    match kind {
        "class_declaration" => Some(TypeKind::Class),
        "interface_declaration" => Some(TypeKind::Interface),
        "enum_declaration" => Some(TypeKind::Enum),
        "record_declaration" => Some(TypeKind::Record),
        "annotation_type_declaration" => Some(TypeKind::Annotation),
        _ => None,
    }
}

fn span_of(node: &TSNode) -> Span {
    Span::new(node.start_position().row + 1, node.end_position().row + 1)
}

/// Lowers the tree-sitter CST of one file into the declaration tree.
struct Lowering<'s> {
    source: &'s [u8],
}

impl<'s> Lowering<'s> {
    fn text(&self, node: &TSNode) -> String {
        extract_text(node, self.source).to_string()
    }

    fn unit(&self, file_path: &Path, root: &TSNode) -> CompilationUnit {
        let mut package = None;
        let mut imports = Vec::new();
        let mut types = Vec::new();

        for child in named_children(root) {
            match child.kind() {
                "package_declaration" => {
                    package = self.qualified_name_child(&child);
                }
                "import_declaration" => {
                    if let Some(import) = self.import(&child) {
                        imports.push(import);
                    }
                }
                kind => {
                    if let Some(kind) = type_kind(kind) {
                        if let Some(decl) = self.type_decl(&child, kind) {
                            types.push(decl);
                        }
                    }
                }
            }
        }

        CompilationUnit {
            path: file_path.to_path_buf(),
            package,
            imports,
            types,
        }
    }

    fn qualified_name_child(&self, node: &TSNode) -> Option<String> {
        find_child_by_kind(node, "scoped_identifier")
            .or_else(|| find_child_by_kind(node, "identifier"))
            .map(|name| self.text(&name))
    }

    fn import(&self, node: &TSNode) -> Option<Import> {
        let path = self.qualified_name_child(node)?;
        let mut is_static = false;
        let mut is_wildcard = false;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "static" => is_static = true,
                "asterisk" => is_wildcard = true,
                _ => {}
            }
        }

        Some(Import {
            path,
            is_static,
            is_wildcard,
        })
    }

    fn type_decl(&self, node: &TSNode, kind: TypeKind) -> Option<TypeDecl> {
        let name = self.text(&node.child_by_field_name("name")?);

        let extends = match kind {
            TypeKind::Class => node
                .child_by_field_name("superclass")
                .map(|superclass| self.type_list(&superclass))
                .unwrap_or_default(),
            TypeKind::Interface => find_child_by_kind(node, "extends_interfaces")
                .map(|list| self.type_list(&list))
                .unwrap_or_default(),
            TypeKind::Enum | TypeKind::Record | TypeKind::Annotation => Vec::new(),
        };

        let implements = node
            .child_by_field_name("interfaces")
            .map(|list| self.type_list(&list))
            .unwrap_or_default();

        let members = node
            .child_by_field_name("body")
            .map(|body| self.members(&body))
            .unwrap_or_default();

        Some(TypeDecl {
            kind,
            name,
            extends,
            implements,
            members,
        })
    }

    /// Types listed under `extends`/`implements`, in source order.
    fn type_list(&self, node: &TSNode) -> Vec<TypeRef> {
        let mut types = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "type_list" | "interface_type_list" => types.extend(self.type_list(&child)),
                _ => {
                    if let Some(type_ref) = self.type_ref(&child) {
                        types.push(type_ref);
                    }
                }
            }
        }
        types
    }

    fn type_ref(&self, node: &TSNode) -> Option<TypeRef> {
        Some(TypeRef {
            name: self.simple_type_name(node)?,
        })
    }

    /// `a.b.Base<T>[]` -> `Base`; primitives and `void` have none.
    fn simple_type_name(&self, node: &TSNode) -> Option<String> {
        match node.kind() {
            "type_identifier" | "identifier" => Some(self.text(node)),
            "scoped_type_identifier" => named_children(node)
                .into_iter()
                .rev()
                .find(|child| child.kind() == "type_identifier")
                .map(|child| self.text(&child)),
            "generic_type" => named_children(node)
                .into_iter()
                .find(|child| {
                    matches!(child.kind(), "type_identifier" | "scoped_type_identifier")
                })
                .and_then(|child| self.simple_type_name(&child)),
            "array_type" => node
                .child_by_field_name("element")
                .and_then(|element| self.simple_type_name(&element)),
            "annotated_type" => named_children(node)
                .into_iter()
                .last()
                .and_then(|inner| self.simple_type_name(&inner)),
            _ => None,
        }
    }

    fn members(&self, body: &TSNode) -> Vec<Member> {
        let mut members = Vec::new();
        for child in named_children(body) {
            if child.kind() == "enum_body_declarations" {
                members.extend(self.members(&child));
            } else if let Some(member) = self.member(&child) {
                members.push(member);
            }
        }
        members
    }

    fn member(&self, node: &TSNode) -> Option<Member> {
        if let Some(kind) = type_kind(node.kind()) {
            return self.type_decl(node, kind).map(Member::Type);
        }

        match node.kind() {
            "method_declaration" => {
                let name = self.text(&node.child_by_field_name("name")?);
                let span = span_of(node);
                let body = node
                    .child_by_field_name("body")
                    .map(|block| self.body(&block))
                    .unwrap_or_default();
                Some(Member::Method(MethodDecl { name, span, body }))
            }
            "field_declaration" | "constant_declaration" => Some(Member::Field(self.field(node))),
            "constructor_declaration" | "compact_constructor_declaration" => {
                Some(Member::Constructor(self.body(node)))
            }
            "block" | "static_initializer" | "enum_constant" => {
                Some(Member::Initializer(self.body(node)))
            }
            _ => None,
        }
    }

    fn field(&self, node: &TSNode) -> FieldDecl {
        let ty = node
            .child_by_field_name("type")
            .and_then(|ty| self.type_ref(&ty));

        let names = named_children(node)
            .into_iter()
            .filter(|child| child.kind() == "variable_declarator")
            .filter_map(|declarator| declarator.child_by_field_name("name"))
            .map(|name| self.text(&name))
            .collect();

        FieldDecl {
            ty,
            names,
            body: self.body(node),
        }
    }

    fn body(&self, node: &TSNode) -> Body {
        let mut body = Body::default();
        self.scan_body(node, &mut body);
        body
    }

    /// Collects calls and local type declarations below `node`; local types own their contents.
    fn scan_body(&self, node: &TSNode, body: &mut Body) {
        for child in named_children(node) {
            if let Some(kind) = type_kind(child.kind()) {
                if let Some(decl) = self.type_decl(&child, kind) {
                    body.local_types.push(decl);
                }
                continue;
            }

            match child.kind() {
                "method_invocation" => {
                    if let Some(call) = self.invocation(&child) {
                        body.calls.push(call);
                    }
                }
                "object_creation_expression" => {
                    if let Some(ty) = child
                        .child_by_field_name("type")
                        .and_then(|ty| self.type_ref(&ty))
                    {
                        body.calls.push(CallRef::Instantiation(ty));
                    }
                }
                _ => {}
            }

            self.scan_body(&child, body);
        }
    }

    fn invocation(&self, node: &TSNode) -> Option<CallRef> {
        let method = self.text(&node.child_by_field_name("name")?);
        let receiver = node
            .child_by_field_name("object")
            .and_then(|object| match object.kind() {
                "identifier" => Some(self.text(&object)),
                "field_access" => {
                    let target = object.child_by_field_name("object")?;
                    if target.kind() == "this" {
                        object
                            .child_by_field_name("field")
                            .map(|field| self.text(&field))
                    } else {
                        None
                    }
                }
                _ => None,
            });

        Some(CallRef::Invocation { receiver, method })
    }
}
