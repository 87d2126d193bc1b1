use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::EdgeKind;
use crate::error::{ExtractError, Result};

/// Which declared supertypes produce `inherit` edges.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SupertypePolicy {
    /// Only the first type of the `extends` clause.
    #[default]
    First,
    /// Every `extends` type, then every `implements` type.
    All,
}

/// Extraction settings, optionally loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    pub extension: String,
    pub follow_links: bool,
    pub parallel: bool,
    pub resolve_names: bool,
    pub resolve_targets: bool,
    pub supertypes: SupertypePolicy,
    pub edge_kinds: Vec<EdgeKind>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            extension: "java".to_string(),
            follow_links: false,
            parallel: true,
            resolve_names: true,
            resolve_targets: false,
            supertypes: SupertypePolicy::First,
            edge_kinds: vec![EdgeKind::Inherit],
        }
    }
}

impl ExtractorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| ExtractError::io(path, err))?;
        let config: Self = toml::from_str(&raw).map_err(|err| ExtractError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn validate(&self, origin: &Path) -> Result<()> {
        let invalid = |message: &str| ExtractError::Config {
            path: origin.to_path_buf(),
            message: message.to_string(),
        };

        if self.normalized_extension().is_empty() {
            return Err(invalid("`extension` must not be empty"));
        }
        if self.edge_kinds.is_empty() {
            return Err(invalid("`edge_kinds` must name at least one edge kind"));
        }
        Ok(())
    }

    /// Extension without a leading dot.
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim().trim_start_matches('.')
    }

    pub fn emits(&self, kind: EdgeKind) -> bool {
        self.edge_kinds.contains(&kind)
    }
}
