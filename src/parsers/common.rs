use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tree_sitter::{Language, Node as TSNode, Parser, Tree};

use crate::error::{ExtractError, Result};

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(language)
            .map_err(|err| ExtractError::Grammar(err.to_string()))?;
        Ok(Self { parser })
    }

    /// Parses `source`, rejecting trees that contain syntax errors.
    pub fn parse_strict(&mut self, file_path: &Path, source: &str) -> Result<Tree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::parse(file_path, "parser produced no syntax tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let message = match first_syntax_error(&root) {
                Some(node) => {
                    let position = node.start_position();
                    let what = if node.is_missing() {
                        format!("missing `{}`", node.kind())
                    } else {
                        "unexpected input".to_string()
                    };
                    format!(
                        "syntax error at line {}, column {}: {}",
                        position.row + 1,
                        position.column + 1,
                        what
                    )
                }
                None => "syntax error".to_string(),
            };
            return Err(ExtractError::parse(file_path, message));
        }

        Ok(tree)
    }
}

/// Buffered read of a whole source file; invalid UTF-8 surfaces as an IO error.
pub fn read_source(file_path: &Path) -> Result<String> {
    let file = File::open(file_path).map_err(|err| ExtractError::io(file_path, err))?;
    let file_size = file
        .metadata()
        .map(|metadata| metadata.len() as usize)
        .unwrap_or(0);

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
    let mut content = String::with_capacity(file_size);
    reader
        .read_to_string(&mut content)
        .map_err(|err| ExtractError::io(file_path, err))?;
    Ok(content)
}

/// Depth-first search for the first ERROR or MISSING node.
pub fn first_syntax_error<'a>(node: &TSNode<'a>) -> Option<TSNode<'a>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_syntax_error(&child) {
            return Some(found);
        }
    }
    None
}

pub fn extract_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}

pub fn find_child_by_kind<'a>(node: &TSNode<'a>, kind: &str) -> Option<TSNode<'a>> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == kind {
            return Some(child);
        }
    }
    None
}

pub fn named_children<'a>(node: &TSNode<'a>) -> Vec<TSNode<'a>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}
