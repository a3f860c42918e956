/// Ordered, deduplicated candidate directories
///
/// Purely string-level: nothing here touches the filesystem.
use crate::config::presets::{default_suitable_paths, substitute_uid};
use crate::config::types::RemovePaths;
use crate::config::MemTempConfig;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct PathCandidateBuilder {
    preferred: Vec<String>,
    default_set: Vec<String>,
    remove: RemovePaths,
    additional: Vec<String>,
}

impl PathCandidateBuilder {
    pub fn new(
        preferred: Vec<String>,
        default_set: Vec<String>,
        remove: RemovePaths,
        additional: Vec<String>,
    ) -> Self {
        Self {
            preferred,
            default_set,
            remove,
            additional,
        }
    }

    /// Builder over the built-in default templates.
    pub fn from_config(config: &MemTempConfig) -> Self {
        Self::new(
            config.preferred_paths.clone(),
            default_suitable_paths(),
            config.remove_paths.clone(),
            config.additional_paths.clone(),
        )
    }

    /// `preferred ++ (default_set - remove) ++ additional`, with `{uid}`
    /// substituted and duplicates dropped after their first occurrence.
    pub fn build(&self, uid: u32) -> Vec<String> {
        let uid = uid.to_string();

        for entry in self.remove.unmatched(&self.default_set, &uid) {
            log::debug!("remove_paths entry {} is not a default path, ignoring", entry);
        }

        let defaults = self
            .default_set
            .iter()
            .filter(|template| self.remove.keeps(template, &uid));

        let mut seen = HashSet::new();
        self.preferred
            .iter()
            .chain(defaults)
            .chain(self.additional.iter())
            .map(|template| substitute_uid(template, &uid))
            .filter(|path| seen.insert(path.clone()))
            .collect()
    }
}
