use crate::config::types::{Fallback, RemovePaths};
use crate::config::MemTempConfig;
use crate::core::MemTempDir;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Print a RAM-backed directory suitable for temporary files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file; flags below are applied on top of it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Search this directory before the defaults (repeatable)
    #[arg(long = "prefer", value_name = "DIR")]
    preferred: Vec<String>,
    /// Search this directory after the defaults (repeatable)
    #[arg(long = "add", value_name = "DIR")]
    additional: Vec<String>,
    /// Drop one default directory from the search (repeatable)
    #[arg(long = "remove", value_name = "DIR", conflicts_with = "no_defaults")]
    remove: Vec<String>,
    /// Drop all default directories from the search
    #[arg(long)]
    no_defaults: bool,
    /// Accepted filesystem type; replaces tmpfs/ramfs when given (repeatable)
    #[arg(long = "fs-type", value_name = "TYPE")]
    filesystem_types: Vec<String>,
    /// Use the platform temp dir when nothing RAM-backed is found
    #[arg(long, conflicts_with = "fallback_path")]
    fallback: bool,
    /// Use this directory when nothing RAM-backed is found
    #[arg(long, value_name = "DIR")]
    fallback_path: Option<PathBuf>,
    /// Read mounts from this file instead of /proc/self/mountinfo
    #[arg(long, value_name = "FILE")]
    mountinfo: Option<PathBuf>,
    /// Print every usable directory, one per line
    #[arg(long, conflicts_with = "json")]
    all: bool,
    /// Print the full resolution as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> Result<(MemTempConfig, OutputMode)> {
        let mut config = match &self.config {
            Some(path) => MemTempConfig::load_from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => MemTempConfig::default(),
        };

        config.preferred_paths.extend(self.preferred);
        config.additional_paths.extend(self.additional);

        if self.no_defaults {
            config.remove_paths = RemovePaths::All(true);
        } else if !self.remove.is_empty() {
            config.remove_paths = match config.remove_paths {
                RemovePaths::Listed(mut listed) => {
                    listed.extend(self.remove);
                    RemovePaths::Listed(listed)
                }
                RemovePaths::All(true) => RemovePaths::All(true),
                RemovePaths::All(false) => RemovePaths::Listed(self.remove),
            };
        }

        if !self.filesystem_types.is_empty() {
            config.filesystem_types = Some(self.filesystem_types.into_iter().collect());
        }

        if let Some(path) = self.fallback_path {
            config.fallback = Fallback::Path(path);
        } else if self.fallback {
            config.fallback = Fallback::Enabled(true);
        }

        if let Some(path) = self.mountinfo {
            config.mount_table_path = Some(path);
        }

        let mode = if self.json {
            OutputMode::Json
        } else if self.all {
            OutputMode::All
        } else {
            OutputMode::Active
        };

        Ok((config, mode))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OutputMode {
    Active,
    All,
    Json,
}

pub fn run() -> Result<()> {
    env_logger::init();

    let (config, mode) = Cli::parse().into_config()?;
    let resolved = MemTempDir::from_config(&config)?;

    match mode {
        OutputMode::Active => println!("{}", resolved.active_path().display()),
        OutputMode::All => {
            for path in resolved.usable_paths() {
                println!("{}", path);
            }
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&resolved.report())?);
        }
    }

    Ok(())
}
