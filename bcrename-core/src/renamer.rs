use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("{} already exists", path.display())]
    TargetExists { path: PathBuf },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Rename `old_name` to `new_name` inside `dir`.
///
/// An existing destination is never replaced: POSIX `rename` would silently
/// overwrite it, so the check happens here.
pub fn rename_in_dir(dir: &Path, old_name: &str, new_name: &str) -> Result<(), RenameError> {
    let from = dir.join(old_name);
    let to = dir.join(new_name);

    // Best effort: another process may still create `to` before the rename.
    if fs::symlink_metadata(&to).is_ok() {
        return Err(RenameError::TargetExists { path: to });
    }

    fs::rename(&from, &to)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rename_in_place() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a - b - 01 c.flac"), "audio").unwrap();

        rename_in_dir(temp.path(), "a - b - 01 c.flac", "01 c.flac").unwrap();

        assert!(!temp.path().join("a - b - 01 c.flac").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("01 c.flac")).unwrap(),
            "audio"
        );
    }

    #[test]
    fn test_existing_target_is_not_overwritten() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a - b - 01 c.flac"), "new").unwrap();
        fs::write(temp.path().join("01 c.flac"), "old").unwrap();

        let err = rename_in_dir(temp.path(), "a - b - 01 c.flac", "01 c.flac").unwrap_err();

        assert!(matches!(err, RenameError::TargetExists { .. }));
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(temp.path().join("01 c.flac")).unwrap(),
            "old"
        );
        assert!(temp.path().join("a - b - 01 c.flac").exists());
    }

    #[test]
    fn test_missing_source_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = rename_in_dir(temp.path(), "gone.flac", "01 gone.flac").unwrap_err();
        assert!(matches!(err, RenameError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }
}
