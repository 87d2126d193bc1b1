use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::extractor::TypeExtractor;
use super::graph::{ArchitectureGraph, GraphAssembler, TypeRecord};
use super::resolver::{resolver_for, SymbolResolver};
use super::scanner::FileScanner;
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::parsers::java::JavaParser;
use crate::parsers::UnitParser;

/// A source file that was left out of the graph.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug)]
pub struct Extraction {
    pub graph: ArchitectureGraph,
    pub files_scanned: usize,
    pub failures: Vec<FileFailure>,
}

pub struct ArchitectureExtractor {
    config: ExtractorConfig,
    file_scanner: FileScanner,
    parser: Box<dyn UnitParser>,
    resolver: Box<dyn SymbolResolver>,
}

impl ArchitectureExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        Ok(Self {
            file_scanner: FileScanner::new(&config),
            parser: Box::new(JavaParser::new()?),
            resolver: resolver_for(&config),
            config,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Runs the whole pipeline over `root_path`.
    ///
    /// Only an unreadable root is fatal; files that fail to read or parse
    /// are reported in [`Extraction::failures`] and skipped.
    pub fn extract(&self, root_path: &Path) -> Result<Extraction> {
        let files: Vec<PathBuf> = self.file_scanner.scan(root_path)?.collect();
        info!(
            root = %root_path.display(),
            files = files.len(),
            language = self.parser.language_name(),
            "discovered source files"
        );

        let outcomes: Vec<Result<Vec<TypeRecord>>> = if self.config.parallel {
            files.par_iter().map(|path| self.extract_file(path)).collect()
        } else {
            files.iter().map(|path| self.extract_file(path)).collect()
        };

        let mut assembler = GraphAssembler::new(root_path.to_string_lossy());
        let mut failures = Vec::new();

        for (path, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(records) => {
                    debug!(path = %path.display(), types = records.len(), "extracted");
                    assembler.append(records);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping file");
                    failures.push(FileFailure {
                        path: path.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        if assembler.is_empty() && !files.is_empty() {
            warn!(root = %root_path.display(), "no class or interface declarations found");
        }
        info!(
            types = assembler.len(),
            failed = failures.len(),
            "extraction finished"
        );

        Ok(Extraction {
            graph: assembler.finish(),
            files_scanned: files.len(),
            failures,
        })
    }

    /// Extraction of a single file; pure apart from reading it.
    pub fn extract_file(&self, path: &Path) -> Result<Vec<TypeRecord>> {
        let unit = self.parser.parse_file(path)?;
        Ok(TypeExtractor::new(&self.config, self.resolver.as_ref()).extract(&unit))
    }
}
