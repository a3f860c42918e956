/// Shared type definitions: error enum, result alias and the closed
/// configuration enums used by the resolver.
use crate::config::presets::substitute_uid;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Which of the default candidate templates to drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemovePaths {
    /// `true` drops every default template, `false` keeps them all
    All(bool),
    /// Drop only these exact template strings
    Listed(Vec<String>),
}

impl Default for RemovePaths {
    fn default() -> Self {
        RemovePaths::All(false)
    }
}

impl RemovePaths {
    /// Whether a given default template survives this removal rule.
    ///
    /// Listed entries match the template as written or after `{uid}`
    /// substitution with `uid`.
    pub fn keeps(&self, template: &str, uid: &str) -> bool {
        match self {
            RemovePaths::All(remove_all) => !remove_all,
            RemovePaths::Listed(listed) => !listed.iter().any(|e| Self::names(e, template, uid)),
        }
    }

    /// Listed entries that match no template in `defaults`
    pub fn unmatched<'a>(&'a self, defaults: &[String], uid: &str) -> Vec<&'a str> {
        match self {
            RemovePaths::All(_) => Vec::new(),
            RemovePaths::Listed(listed) => listed
                .iter()
                .filter(|e| !defaults.iter().any(|d| Self::names(e, d, uid)))
                .map(|e| e.as_str())
                .collect(),
        }
    }

    fn names(entry: &str, template: &str, uid: &str) -> bool {
        entry == template || entry == substitute_uid(template, uid)
    }
}

/// What to do when no RAM-backed candidate qualifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fallback {
    /// `true` uses the platform temp dir, `false` fails
    Enabled(bool),
    /// Use this directory verbatim, unchecked
    Path(PathBuf),
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback::Enabled(false)
    }
}

/// A candidate that exists as a directory and sits on an accepted filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPath {
    pub path: String,
    pub filesystem_type: String,
}

#[derive(Error, Debug)]
pub enum MemTempError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed mount table at line {line}: {reason}")]
    MountTableParse { line: usize, reason: String },

    #[error("No RAM-backed temporary directory found (searched: {}) and fallback is disabled", .searched.join(", "))]
    NoSuitableTempDir { searched: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MemTempError>;
