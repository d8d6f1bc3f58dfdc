use std::collections::BTreeSet;

/// Audio formats a storefront download is expected to contain.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".aac", ".aiff", ".alac", ".flac", ".m4a", ".mogg", ".mp3", ".oga", ".ogg", ".wav", ".wma",
];

/// Case-insensitive set of file extensions, stored lowercased with a leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensions {
    extensions: BTreeSet<String>,
}

impl Default for AllowedExtensions {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl AllowedExtensions {
    /// Build a set from extensions given with or without the leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .filter_map(|ext| normalize(ext.as_ref()))
            .collect();
        Self { extensions }
    }

    /// Check whether `extension` (including its dot) is in the set.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    /// Check whether the extension of `file_name` is in the set.
    ///
    /// The extension runs from the last `.` to the end of the name, so
    /// `".flac"` on its own counts as a `.flac` file and `"notes"` has none.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        extension_of(file_name).is_some_and(|ext| self.contains(ext))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

/// Extension of a file name, from the last `.` to the end, dot included.
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|dot| &file_name[dot..])
}

fn normalize(extension: &str) -> Option<String> {
    let trimmed = extension.trim();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if lowered.starts_with('.') {
        Some(lowered)
    } else {
        Some(format!(".{lowered}"))
    }
}
