use crate::config::presets::{default_filesystem_types, MOUNTINFO_PATH};
use crate::config::types::{Fallback, MemTempError, RemovePaths, Result};
/// Configuration loading from a JSON file
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Per-instance resolution settings. Every field is optional in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemTempConfig {
    /// Searched before the defaults
    pub preferred_paths: Vec<String>,
    /// Drop all defaults (`true`) or only the listed ones
    pub remove_paths: RemovePaths,
    /// Searched after the defaults
    pub additional_paths: Vec<String>,
    /// Replaces (does not extend) the default `{tmpfs, ramfs}`
    pub filesystem_types: Option<BTreeSet<String>>,
    pub fallback: Fallback,
    /// Alternate mountinfo source, mainly for sandboxes and tests
    pub mount_table_path: Option<PathBuf>,
}

impl MemTempConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_content = std::fs::read_to_string(path).map_err(|e| {
            MemTempError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&config_content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| MemTempError::Config(format!("Failed to parse config JSON: {}", e)))
    }

    /// Accepted filesystem types after applying the override rule
    pub fn accepted_filesystem_types(&self) -> BTreeSet<String> {
        match &self.filesystem_types {
            Some(types) => types.clone(),
            None => default_filesystem_types(),
        }
    }

    pub fn mount_table_path(&self) -> &Path {
        self.mount_table_path
            .as_deref()
            .unwrap_or_else(|| Path::new(MOUNTINFO_PATH))
    }
}
