/// Built-in defaults for candidate templates and accepted filesystem types.
///
/// These are only ever read; every instance copies them into its own
/// configuration and may override them freely.
use std::collections::BTreeSet;

/// Placeholder replaced by the decimal effective user id
pub const UID_PLACEHOLDER: &str = "{uid}";

/// Candidate directories, searched in this order absent overrides
pub const DEFAULT_SUITABLE_PATHS: &[&str] = &["/tmp", "/run/user/{uid}", "/run/shm", "/dev/shm"];

/// Filesystems whose storage lives in memory
pub const DEFAULT_FILESYSTEM_TYPES: &[&str] = &["tmpfs", "ramfs"];

/// Per-process view of the mount table (respects mount namespaces)
pub const MOUNTINFO_PATH: &str = "/proc/self/mountinfo";

/// Replace every `{uid}` in a template with the decimal uid
pub fn substitute_uid(template: &str, uid: &str) -> String {
    template.replace(UID_PLACEHOLDER, uid)
}

pub fn default_suitable_paths() -> Vec<String> {
    DEFAULT_SUITABLE_PATHS.iter().map(|p| p.to_string()).collect()
}

pub fn default_filesystem_types() -> BTreeSet<String> {
    DEFAULT_FILESYSTEM_TYPES.iter().map(|t| t.to_string()).collect()
}
