use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter that accepts every file.
pub const MATCH_ALL: &str = "*";

/// A file found while walking the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub dir: PathBuf,
    pub name: OsString,
}

impl FileEntry {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// The file name, if it is valid UTF-8.
    pub fn name_str(&self) -> Option<&str> {
        self.name.to_str()
    }
}

#[derive(Debug, Error)]
pub enum EnumerateError {
    #[error("cannot list directory {}: {source}", dir.display())]
    ListDirectory {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read entry in {}: {source}", dir.display())]
    ReadEntry {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Compile a filename glob such as `*.flac`. Matching ignores case.
pub fn build_filter(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .with_context(|| format!("Invalid file filter '{pattern}'"))?;
    Ok(glob.compile_matcher())
}

/// Breadth-first walk over a directory tree yielding matching files.
///
/// Each directory is listed in full before any of its files are handed out,
/// so the caller may rename files while iterating. The walk is consumed once.
/// Directory symlinks are never followed.
#[derive(Debug)]
pub struct FileEnumerator {
    queue: VecDeque<PathBuf>,
    pending: VecDeque<Result<FileEntry, EnumerateError>>,
    filter: GlobMatcher,
    recurse: bool,
}

impl FileEnumerator {
    pub fn new(root: impl Into<PathBuf>, filter: GlobMatcher, recurse: bool) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root.into());
        Self {
            queue,
            pending: VecDeque::new(),
            filter,
            recurse,
        }
    }

    /// Walk `root` with a glob filter given as text.
    pub fn with_pattern(root: impl Into<PathBuf>, pattern: &str, recurse: bool) -> Result<Self> {
        Ok(Self::new(root, build_filter(pattern)?, recurse))
    }

    fn list(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                self.pending.push_back(Err(EnumerateError::ListDirectory {
                    dir: dir.to_path_buf(),
                    source,
                }));
                return;
            },
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    self.pending.push_back(Err(EnumerateError::ReadEntry {
                        dir: dir.to_path_buf(),
                        source,
                    }));
                    continue;
                },
            };

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(source) => {
                    self.pending.push_back(Err(EnumerateError::ReadEntry {
                        dir: dir.to_path_buf(),
                        source,
                    }));
                    continue;
                },
            };

            if file_type.is_dir() {
                if self.recurse {
                    self.queue.push_back(entry.path());
                }
                continue;
            }

            let is_file = if file_type.is_symlink() {
                // Dangling links and links to directories are skipped.
                fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
            } else {
                file_type.is_file()
            };
            if !is_file {
                continue;
            }

            let name = entry.file_name();
            if self.filter.is_match(Path::new(&name)) {
                self.pending.push_back(Ok(FileEntry {
                    dir: dir.to_path_buf(),
                    name,
                }));
            }
        }
    }
}

impl Iterator for FileEnumerator {
    type Item = Result<FileEntry, EnumerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(item);
            }
            let dir = self.queue.pop_front()?;
            self.list(&dir);
        }
    }
}
