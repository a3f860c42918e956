//! Mount table access
//!
//! Parses the per-process mountinfo listing into an immutable snapshot with
//! longest-prefix lookup of the filesystem backing a directory.

pub mod table;

// Re-export commonly used items
pub use table::*;
