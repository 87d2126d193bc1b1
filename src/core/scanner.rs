use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};

pub struct FileScanner {
    extension: String,
    follow_links: bool,
}

impl FileScanner {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            extension: config.normalized_extension().to_string(),
            follow_links: config.follow_links,
        }
    }

    /// Lazily walks `root_path` for source files.
    ///
    /// The root itself must be a readable directory; anything that fails
    /// further down the tree is logged and skipped.
    pub fn scan(&self, root_path: &Path) -> Result<SourceFiles> {
        let metadata = fs::metadata(root_path).map_err(|err| ExtractError::io(root_path, err))?;
        if !metadata.is_dir() {
            return Err(ExtractError::io(
                root_path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
            ));
        }
        fs::read_dir(root_path).map_err(|err| ExtractError::io(root_path, err))?;

        let walker = WalkDir::new(root_path)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter();

        Ok(SourceFiles {
            walker,
            extension: self.extension.clone(),
        })
    }
}

/// Source files in directory-traversal order. Single pass.
pub struct SourceFiles {
    walker: walkdir::IntoIter,
    extension: String,
}

impl Iterator for SourceFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let location = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    warn!(path = %location, error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let matches = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == self.extension)
                .unwrap_or(false);
            if matches {
                return Some(entry.into_path());
            }
        }
    }
}
