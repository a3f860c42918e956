//! Identity of the calling process, used for `{uid}` substitution.

/// Effective user id of the current process.
///
/// Files created under the resolved directory are owned by the effective
/// uid, so that is the id whose runtime directory (`/run/user/<uid>`) fits.
pub fn current_uid() -> u32 {
    nix::unistd::geteuid().as_raw()
}
