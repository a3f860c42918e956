//! Candidate construction and filtering
//!
//! - [`candidates`]: ordered, deduplicated directory templates
//! - [`resolver`]: keep only existing directories on RAM-backed mounts

pub mod candidates;
pub mod resolver;

pub use candidates::PathCandidateBuilder;
pub use resolver::MemFsResolver;
