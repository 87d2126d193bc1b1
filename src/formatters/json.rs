use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::ArchitectureGraph;
use crate::error::{ExtractError, Result};

/// Serializes the architecture graph for the clustering stage.
pub struct JsonFormatter {
    /// Two-space indented output instead of a single line
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format_graph(&self, graph: &ArchitectureGraph) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(graph)?
        } else {
            serde_json::to_string(graph)?
        };
        Ok(json)
    }

    /// Writes the whole document or nothing.
    ///
    /// The document is rendered in memory, written to a uniquely named file
    /// in the output directory and renamed into place, so a failed run never
    /// leaves a truncated file and never touches other files in that directory.
    pub fn format_to_file(&self, graph: &ArchitectureGraph, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(graph)?;

        let directory = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staging =
            NamedTempFile::new_in(directory).map_err(|err| ExtractError::io(directory, err))?;
        if let Err(err) = staging.write_all(json_content.as_bytes()) {
            return Err(ExtractError::io(staging.path(), err));
        }
        staging
            .persist(output_path)
            .map_err(|err| ExtractError::io(output_path, err.error))?;
        Ok(())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
