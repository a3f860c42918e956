//! Thin wrappers around Linux kernel interfaces.
//!
//! Everything here is read-only: the mount table snapshot and the
//! process's own credentials.

pub mod credentials;
pub mod mount;
