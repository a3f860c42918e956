/// Filter candidates down to existing directories on accepted filesystems
use crate::config::types::ResolvedPath;
use crate::kernel::mount::MountTable;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct MemFsResolver<'a> {
    accepted_types: &'a BTreeSet<String>,
    table: &'a MountTable,
}

impl<'a> MemFsResolver<'a> {
    pub fn new(accepted_types: &'a BTreeSet<String>, table: &'a MountTable) -> Self {
        Self {
            accepted_types,
            table,
        }
    }

    /// Usable candidates in candidate order.
    pub fn resolve(&self, candidates: &[String]) -> Vec<ResolvedPath> {
        candidates
            .iter()
            .filter_map(|candidate| self.check(candidate))
            .collect()
    }

    fn check(&self, candidate: &str) -> Option<ResolvedPath> {
        let path = Path::new(candidate);
        if !path.is_dir() {
            log::debug!("Skipping {}: not an existing directory", candidate);
            return None;
        }

        // Look up where the directory really lives, so a symlinked
        // candidate is judged by its target's mount.
        let lookup = match fs::canonicalize(path) {
            Ok(canonical) => canonical.to_string_lossy().into_owned(),
            Err(_) => candidate.to_string(),
        };

        match self.table.filesystem_type_of(&lookup) {
            Some(fs_type) if self.accepted_types.contains(fs_type) => {
                log::debug!("Usable: {} ({})", candidate, fs_type);
                Some(ResolvedPath {
                    path: candidate.to_string(),
                    filesystem_type: fs_type.to_string(),
                })
            }
            Some(fs_type) => {
                log::debug!("Skipping {}: backed by {}", candidate, fs_type);
                None
            }
            None => {
                log::debug!("Skipping {}: no covering mount", candidate);
                None
            }
        }
    }
}

/// Convenience wrapper over [`MemFsResolver`].
pub fn resolve(
    candidates: &[String],
    accepted_types: &BTreeSet<String>,
    table: &MountTable,
) -> Vec<ResolvedPath> {
    MemFsResolver::new(accepted_types, table).resolve(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets::default_filesystem_types;

    /// Real directory plus a mount table claiming it as `fs_type`.
    fn mounted_dir(fs_type: &str) -> (tempfile::TempDir, String, MountTable) {
        let dir = tempfile::tempdir().unwrap();
        let path = fs::canonicalize(dir.path())
            .unwrap()
            .to_string_lossy()
            .into_owned();
        let text = format!(
            "1 0 8:1 / / rw - ext4 /dev/sda1 rw\n2 1 0:40 / {} rw shared:9 - {} none rw\n",
            path, fs_type
        );
        (dir, path, MountTable::parse(&text).unwrap())
    }

    #[test]
    fn test_resolve_accepts_tmpfs() {
        let (_dir, path, table) = mounted_dir("tmpfs");
        let types = default_filesystem_types();

        let usable = resolve(&[path.clone()], &types, &table);
        assert_eq!(
            usable,
            vec![ResolvedPath {
                path,
                filesystem_type: "tmpfs".to_string()
            }]
        );
    }

    #[test]
    fn test_resolve_rejects_disk_backed() {
        let (_dir, path, table) = mounted_dir("xfs");
        let types = default_filesystem_types();

        assert!(resolve(&[path], &types, &table).is_empty());
    }

    #[test]
    fn test_resolve_subdirectory_via_prefix() {
        let (_dir, path, table) = mounted_dir("ramfs");
        let sub = format!("{}/sub", path);
        fs::create_dir(&sub).unwrap();
        let types = default_filesystem_types();

        let usable = resolve(&[sub.clone()], &types, &table);
        assert_eq!(usable.len(), 1);
        assert_eq!(usable[0].path, sub);
        assert_eq!(usable[0].filesystem_type, "ramfs");
    }

    #[test]
    fn test_resolve_skips_missing_and_files() {
        let (_dir, path, table) = mounted_dir("tmpfs");
        let file = format!("{}/plain", path);
        fs::write(&file, b"x").unwrap();
        let missing = format!("{}/missing", path);
        let types = default_filesystem_types();

        assert!(resolve(&[file, missing], &types, &table).is_empty());
    }

    #[test]
    fn test_custom_types_replace_defaults() {
        let (_dir, path, table) = mounted_dir("tmpfs");
        let types: BTreeSet<String> = ["ext4".to_string()].into_iter().collect();

        // tmpfs no longer accepted once the caller supplies its own set
        assert!(resolve(&[path], &types, &table).is_empty());
    }

    #[test]
    fn test_resolve_preserves_candidate_order() {
        let (_a, path_a, _) = mounted_dir("tmpfs");
        let (_b, path_b, _) = mounted_dir("tmpfs");
        let text = format!(
            "2 1 0:40 / {} rw - tmpfs none rw\n3 1 0:41 / {} rw - tmpfs none rw\n",
            path_a, path_b
        );
        let table = MountTable::parse(&text).unwrap();
        let types = default_filesystem_types();

        let usable = resolve(&[path_b.clone(), path_a.clone()], &types, &table);
        let paths: Vec<&str> = usable.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec![path_b.as_str(), path_a.as_str()]);
    }

    #[test]
    fn test_resolve_follows_symlink_for_lookup() {
        let (dir, _path, table) = mounted_dir("tmpfs");
        let outside = tempfile::tempdir().unwrap();
        let link = outside.path().join("link");
        std::os::unix::fs::symlink(dir.path(), &link).unwrap();
        let link = link.to_string_lossy().into_owned();
        let types = default_filesystem_types();

        let usable = resolve(&[link.clone()], &types, &table);
        assert_eq!(usable.len(), 1);
        assert_eq!(usable[0].path, link);
    }

    #[test]
    fn test_resolve_with_empty_table() {
        let types = default_filesystem_types();
        let candidates = vec!["/".to_string()];
        assert!(resolve(&candidates, &types, &MountTable::default()).is_empty());
    }
}
