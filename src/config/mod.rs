//! Configuration and defaults
//!
//! Error types, the per-instance configuration model and built-in presets.

pub mod loader;
pub mod presets;
pub mod types;

pub use loader::MemTempConfig;
