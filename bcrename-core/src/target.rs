use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Absolute path of the directory whose files get renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDir {
    path: PathBuf,
}

impl TargetDir {
    /// Resolve `raw` against the current working directory.
    pub fn resolve(raw: &str) -> Result<Self> {
        let path = std::path::absolute(raw)
            .with_context(|| format!("Failed to resolve path '{raw}'"))?;
        Self::open(path)
    }

    /// Resolve `raw` against `base` instead of the current working directory.
    pub fn resolve_from(base: &Path, raw: &str) -> Result<Self> {
        let joined = base.join(raw);
        let path = std::path::absolute(&joined)
            .with_context(|| format!("Failed to resolve path '{raw}'"))?;
        Self::open(path)
    }

    fn open(path: PathBuf) -> Result<Self> {
        let metadata = fs::metadata(&path)
            .with_context(|| format!("Cannot access directory {}", path.display()))?;
        if !metadata.is_dir() {
            bail!("{} is not a directory", path.display());
        }
        // Entering a directory needs search permission, not read permission.
        // Looking up `dir/.` is the check a change of directory would make;
        // a directory that cannot be listed is reported later, per directory.
        fs::metadata(path.join("."))
            .with_context(|| format!("Cannot enter directory {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TargetDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
