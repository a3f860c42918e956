/// Resolved temporary-directory facade
use crate::config::types::{Fallback, MemTempError, ResolvedPath, Result};
use crate::config::MemTempConfig;
use crate::kernel::credentials::current_uid;
use crate::kernel::mount::MountTable;
use crate::resolve::{MemFsResolver, PathCandidateBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The outcome of one resolution. Frozen after construction; build a new
/// instance to observe a changed mount table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemTempDir {
    usable_paths: Vec<ResolvedPath>,
    primary: PathBuf,
    fallback_used: bool,
}

/// Serializable summary for display
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    pub active_path: PathBuf,
    pub found_mem_tempdir: bool,
    pub fallback_used: bool,
    pub usable_paths: Vec<ResolvedPath>,
}

impl MemTempDir {
    /// Resolve with the built-in defaults and no fallback.
    pub fn new() -> Result<Self> {
        Self::from_config(&MemTempConfig::default())
    }

    /// Resolve against a fresh read of the configured mount table.
    pub fn from_config(config: &MemTempConfig) -> Result<Self> {
        let table = MountTable::snapshot(config.mount_table_path());
        Self::with_mount_table(config, &table)
    }

    /// Resolve against a caller-provided mount table snapshot.
    pub fn with_mount_table(config: &MemTempConfig, table: &MountTable) -> Result<Self> {
        Self::resolve(config, table, current_uid())
    }

    fn resolve(config: &MemTempConfig, table: &MountTable, uid: u32) -> Result<Self> {
        let candidates = PathCandidateBuilder::from_config(config).build(uid);
        let accepted = config.accepted_filesystem_types();
        let usable_paths = MemFsResolver::new(&accepted, table).resolve(&candidates);

        if let Some(first) = usable_paths.first() {
            log::info!(
                "Using RAM-backed temp dir {} ({})",
                first.path,
                first.filesystem_type
            );
            let primary = PathBuf::from(&first.path);
            return Ok(Self {
                usable_paths,
                primary,
                fallback_used: false,
            });
        }

        let primary = match &config.fallback {
            Fallback::Enabled(true) => tempfile::env::temp_dir(),
            Fallback::Path(path) => path.clone(),
            Fallback::Enabled(false) => {
                return Err(MemTempError::NoSuitableTempDir {
                    searched: candidates,
                });
            }
        };

        log::warn!(
            "No RAM-backed temp dir among {} candidates, falling back to {}",
            candidates.len(),
            primary.display()
        );

        Ok(Self {
            usable_paths,
            primary,
            fallback_used: true,
        })
    }

    /// True iff some candidate was RAM-backed, whatever the fallback setting.
    pub fn found_mem_tempdir(&self) -> bool {
        !self.usable_paths.is_empty()
    }

    /// RAM-backed matches only, in precedence order
    pub fn usable_paths(&self) -> Vec<&str> {
        self.usable_paths.iter().map(|r| r.path.as_str()).collect()
    }

    pub fn resolved_paths(&self) -> &[ResolvedPath] {
        &self.usable_paths
    }

    /// Base directory for every temp file created through this instance
    pub fn active_path(&self) -> &Path {
        &self.primary
    }

    pub fn fallback_used(&self) -> bool {
        self.fallback_used
    }

    pub fn report(&self) -> ResolutionReport {
        ResolutionReport {
            active_path: self.primary.clone(),
            found_mem_tempdir: self.found_mem_tempdir(),
            fallback_used: self.fallback_used,
            usable_paths: self.usable_paths.clone(),
        }
    }
}
