/// Temp-file creation bound to the resolved directory.
///
/// Every call hands off to the `tempfile` crate with `active_path()` as the
/// parent directory; naming, permissions and cleanup are its business.
use crate::core::tempdir::MemTempDir;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tempfile::{Builder, NamedTempFile, SpooledTempFile, TempDir};

impl MemTempDir {
    /// Named file, deleted on drop
    pub fn named_temp_file(&self) -> io::Result<NamedTempFile> {
        NamedTempFile::new_in(self.active_path())
    }

    /// Named file with the builder's prefix/suffix/permissions
    pub fn named_temp_file_with(&self, builder: &Builder<'_, '_>) -> io::Result<NamedTempFile> {
        builder.tempfile_in(self.active_path())
    }

    /// Unlinked file with no name on disk
    pub fn temp_file(&self) -> io::Result<File> {
        tempfile::tempfile_in(self.active_path())
    }

    /// Directory, removed recursively on drop
    pub fn temp_dir(&self) -> io::Result<TempDir> {
        TempDir::new_in(self.active_path())
    }

    pub fn temp_dir_with(&self, builder: &Builder<'_, '_>) -> io::Result<TempDir> {
        builder.tempdir_in(self.active_path())
    }

    /// In-memory buffer that rolls over to a file here past `max_size` bytes
    pub fn spooled_temp_file(&self, max_size: usize) -> SpooledTempFile {
        tempfile::spooled_tempfile_in(max_size, self.active_path())
    }

    /// Named file that outlives this call; the caller removes it.
    pub fn mkstemp(&self) -> io::Result<(File, PathBuf)> {
        let (file, path) = self.named_temp_file()?.keep()?;
        Ok((file, path))
    }

    /// Directory that outlives this call; the caller removes it.
    pub fn mkdtemp(&self) -> io::Result<PathBuf> {
        Ok(self.temp_dir()?.keep())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::{Fallback, RemovePaths};
    use crate::config::MemTempConfig;
    use crate::core::tempdir::MemTempDir;
    use crate::kernel::mount::MountTable;
    use std::io::{Read, Seek, SeekFrom, Write};
    use std::path::PathBuf;

    /// Resolution whose active path is a private scratch directory
    fn scratch() -> (tempfile::TempDir, MemTempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = MemTempConfig {
            remove_paths: RemovePaths::All(true),
            fallback: Fallback::Path(dir.path().to_path_buf()),
            ..Default::default()
        };
        let resolved = MemTempDir::with_mount_table(&config, &MountTable::default()).unwrap();
        (dir, resolved)
    }

    #[test]
    fn test_named_temp_file_in_active_path() {
        let (dir, resolved) = scratch();
        let file = resolved.named_temp_file().unwrap();
        assert_eq!(file.path().parent().unwrap(), dir.path());
    }

    #[test]
    fn test_named_temp_file_with_builder() {
        let (dir, resolved) = scratch();
        let file = resolved
            .named_temp_file_with(tempfile::Builder::new().prefix("job-").suffix(".bin"))
            .unwrap();

        let name = file.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("job-"));
        assert!(name.ends_with(".bin"));
        assert_eq!(file.path().parent().unwrap(), dir.path());
    }

    #[test]
    fn test_unnamed_temp_file_leaves_no_entry() {
        let (dir, resolved) = scratch();
        let mut file = resolved.temp_file().unwrap();
        file.write_all(b"scratch").unwrap();

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_temp_dir_removed_on_drop() {
        let (dir, resolved) = scratch();
        let sub = resolved.temp_dir().unwrap();
        let sub_path = sub.path().to_path_buf();

        assert_eq!(sub_path.parent().unwrap(), dir.path());
        drop(sub);
        assert!(!sub_path.exists());
    }

    #[test]
    fn test_spooled_temp_file_rolls_over() {
        let (_dir, resolved) = scratch();
        let mut spooled = resolved.spooled_temp_file(4);
        spooled.write_all(b"more than four bytes").unwrap();
        assert!(spooled.is_rolled());

        spooled.seek(SeekFrom::Start(0)).unwrap();
        let mut contents = String::new();
        spooled.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "more than four bytes");
    }

    #[test]
    fn test_mkstemp_and_mkdtemp_persist() {
        let (dir, resolved) = scratch();

        let (_file, path) = resolved.mkstemp().unwrap();
        assert!(path.is_file());
        assert_eq!(path.parent().unwrap(), dir.path());

        let kept: PathBuf = resolved.mkdtemp().unwrap();
        assert!(kept.is_dir());
        assert_eq!(kept.parent().unwrap(), dir.path());
    }
}
