pub mod ast;
pub mod common;
pub mod java;

use std::path::Path;

use crate::error::Result;
use ast::CompilationUnit;

pub trait UnitParser: Send + Sync {
    fn parse_source(&self, file_path: &Path, source: &str) -> Result<CompilationUnit>;

    fn parse_file(&self, file_path: &Path) -> Result<CompilationUnit> {
        let source = common::read_source(file_path)?;
        self.parse_source(file_path, &source)
    }

    fn language_name(&self) -> &str;
}
