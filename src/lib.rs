//! memtempdir: locate a RAM-backed directory for temporary files on Linux
//!
//! Temporary files written under `tmpfs`/`ramfs` never touch a physical disk.
//! This crate finds such a directory by reading the per-process mount table,
//! then hands file creation off to the `tempfile` crate with that directory
//! pre-bound.
//!
//! # Architecture
//!
//! ## Kernel Interfaces ([`kernel`])
//! - [`kernel::mount`]: mountinfo parsing and longest-prefix mount lookup
//! - [`kernel::credentials`]: effective uid for `{uid}` substitution
//!
//! ## Resolution ([`resolve`])
//! - [`resolve::candidates`]: ordered, deduplicated candidate directories
//! - [`resolve::resolver`]: keep existing directories on accepted filesystems
//!
//! ## Facade ([`core`])
//! - [`core::tempdir`]: one-shot resolution with fallback policy
//! - [`core::forward`]: temp-file creation in the resolved directory
//!
//! ## Configuration ([`config`])
//! - [`config::loader`]: JSON configuration model
//! - [`config::presets`]: default paths and filesystem types
//! - [`config::types`]: error type and closed enums
//!
//! # Example
//!
//! ```no_run
//! use memtempdir::{Fallback, MemTempConfig, MemTempDir};
//!
//! let config = MemTempConfig {
//!     fallback: Fallback::Enabled(true),
//!     ..Default::default()
//! };
//! let tmp = MemTempDir::from_config(&config)?;
//! let file = tmp.named_temp_file()?;
//! println!("{} (in RAM: {})", file.path().display(), tmp.found_mem_tempdir());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Kernel Interfaces
pub mod kernel;

// Resolution
pub mod resolve;

// Facade
pub mod core;

// Configuration
pub mod config;

// CLI entrypoint wiring for the memtempdir binary.
pub mod cli;

// Re-export commonly used types for convenience
pub use config::types::*;
pub use config::MemTempConfig;
pub use crate::core::{MemTempDir, ResolutionReport};
pub use kernel::mount::{MountRecord, MountTable};
