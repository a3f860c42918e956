/// Mount table snapshot built from /proc/self/mountinfo
use crate::config::types::{MemTempError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Fields before the optional run: id, parent, major:minor, root, mount point, options
const FIXED_FIELDS: usize = 6;

/// Fixed fields + separator + fs type, source, super options
const MIN_FIELDS: usize = FIXED_FIELDS + 4;

/// One mountinfo line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRecord {
    pub mount_id: u32,
    pub parent_id: u32,
    pub device: String,
    pub root: String,
    pub mount_point: String,
    pub mount_options: String,
    /// `tag[:value]` entries such as `shared:7` or `master:1`
    pub optional_fields: Vec<String>,
    pub filesystem_type: String,
    pub mount_source: String,
}

/// Immutable map from mount point to the record that currently owns it.
///
/// Later lines for the same mount point replace earlier ones, so an
/// over-mounted directory reports the filesystem stacked on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountTable {
    mounts: BTreeMap<String, MountRecord>,
}

impl MountTable {
    /// Parse mountinfo text. Blank lines are skipped.
    pub fn parse(source: &str) -> Result<Self> {
        let mut mounts = BTreeMap::new();

        for (idx, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = parse_mountinfo_line(line).map_err(|reason| {
                MemTempError::MountTableParse {
                    line: idx + 1,
                    reason,
                }
            })?;
            mounts.insert(record.mount_point.clone(), record);
        }

        Ok(Self { mounts })
    }

    /// Read and parse a mountinfo file.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse mountinfo text, skipping malformed lines instead of failing.
    pub fn parse_lossy(source: &str) -> Self {
        let mut mounts = BTreeMap::new();

        for (idx, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_mountinfo_line(line) {
                Ok(record) => {
                    mounts.insert(record.mount_point.clone(), record);
                }
                Err(reason) => {
                    log::warn!("Skipping mountinfo line {}: {}", idx + 1, reason);
                }
            }
        }

        Self { mounts }
    }

    /// Read the live table for resolution. An unreadable file yields an
    /// empty snapshot and malformed lines are skipped one by one, so
    /// resolution can always proceed to fallback.
    pub fn snapshot<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let table = Self::parse_lossy(&content);
                log::debug!("Loaded {} mounts from {}", table.len(), path.display());
                table
            }
            Err(e) => {
                log::warn!(
                    "Mount table {} unavailable, treating as empty: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Filesystem type of the innermost mount covering `path`
    pub fn filesystem_type_of(&self, path: &str) -> Option<&str> {
        self.mount_of(path).map(|r| r.filesystem_type.as_str())
    }

    /// Longest-prefix lookup, compared by whole path segments.
    ///
    /// Relative paths never match.
    pub fn mount_of(&self, path: &str) -> Option<&MountRecord> {
        if !path.starts_with('/') {
            return None;
        }

        let normalized = normalize(path);
        let mut current = normalized.as_str();
        loop {
            if let Some(record) = self.mounts.get(current) {
                return Some(record);
            }
            if current == "/" {
                return None;
            }
            current = match current.rfind('/') {
                Some(0) => "/",
                Some(idx) => &current[..idx],
                None => return None,
            };
        }
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    /// Records ordered by mount point
    pub fn iter(&self) -> impl Iterator<Item = &MountRecord> {
        self.mounts.values()
    }
}

/// Parse a single line from /proc/self/mountinfo
/// Format: mount_id parent_id major:minor root mount_point options [optional...] - fs_type source super_options
fn parse_mountinfo_line(line: &str) -> std::result::Result<MountRecord, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.len() < MIN_FIELDS {
        return Err(format!(
            "expected at least {} fields, found {}",
            MIN_FIELDS,
            parts.len()
        ));
    }

    let mount_id = parts[0]
        .parse::<u32>()
        .map_err(|_| format!("invalid mount id {:?}", parts[0]))?;
    let parent_id = parts[1]
        .parse::<u32>()
        .map_err(|_| format!("invalid parent id {:?}", parts[1]))?;

    // The optional-field run has variable length; locate the separator.
    let sep_pos = parts[FIXED_FIELDS..]
        .iter()
        .position(|&p| p == "-")
        .map(|pos| pos + FIXED_FIELDS)
        .ok_or_else(|| "missing '-' separator".to_string())?;

    let filesystem_type = parts
        .get(sep_pos + 1)
        .ok_or_else(|| "missing filesystem type after separator".to_string())?;

    Ok(MountRecord {
        mount_id,
        parent_id,
        device: parts[2].to_string(),
        root: unescape(parts[3]),
        mount_point: unescape(parts[4]),
        mount_options: parts[5].to_string(),
        optional_fields: parts[FIXED_FIELDS..sep_pos]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        filesystem_type: filesystem_type.to_string(),
        mount_source: parts.get(sep_pos + 2).map(|s| unescape(s)).unwrap_or_default(),
    })
}

/// Decode the kernel's `\ooo` octal escapes (space, tab, newline, backslash).
fn unescape(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() && is_octal_escape(&bytes[i + 1..i + 4]) {
            let value = (bytes[i + 1] - b'0') as u32 * 64
                + (bytes[i + 2] - b'0') as u32 * 8
                + (bytes[i + 3] - b'0') as u32;
            out.push(value as u8);
            i += 4;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn is_octal_escape(digits: &[u8]) -> bool {
    digits.len() == 3 && digits[0] <= b'3' && digits.iter().all(|d| (b'0'..=b'7').contains(d))
}

/// Collapse repeated slashes, drop `.` segments and any trailing slash.
fn normalize(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    format!("/{}", segments.join("/"))
}
