//! Resolution facade
//!
//! - [`tempdir`]: one-shot resolution with fallback policy
//! - [`forward`]: temp-file creation bound to the resolved directory

pub mod forward;
pub mod tempdir;

pub use tempdir::{MemTempDir, ResolutionReport};
