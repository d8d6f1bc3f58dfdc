use regex::Regex;

use crate::extensions::AllowedExtensions;

/// Separator before the track number: `" - "` followed by two digits and a space,
/// as in `"<artist> - <album> - <NN> <title>.<ext>"`.
pub const TRACK_PREFIX_PATTERN: &str = r" - [0-9]{2} ";

/// Length of the `" - "` that is dropped along with everything before it.
const SEPARATOR_LEN: usize = 3;

/// Outcome of running a file name through the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameDecision {
    /// Extension is not an audio format we touch.
    Ineligible,
    /// Audio file, but it has no artist/album prefix to strip.
    Unmatched,
    /// Audio file that should be renamed to the contained name.
    Rename(String),
}

#[derive(Debug, Clone)]
pub struct TrackPrefixRule {
    extensions: AllowedExtensions,
    pattern: Regex,
}

impl TrackPrefixRule {
    pub fn new(extensions: AllowedExtensions) -> Result<Self, regex::Error> {
        Ok(Self {
            extensions,
            pattern: Regex::new(TRACK_PREFIX_PATTERN)?,
        })
    }

    /// Decide what to do with `file_name`.
    ///
    /// Only the first `" - NN "` is considered. If the artist or album already
    /// contains that sequence the result is truncated too early.
    pub fn decide(&self, file_name: &str) -> RenameDecision {
        if !self.extensions.matches_file_name(file_name) {
            return RenameDecision::Ineligible;
        }

        match self.pattern.find(file_name) {
            // The match starts with three ASCII bytes, so this is a char boundary.
            Some(m) => RenameDecision::Rename(file_name[m.start() + SEPARATOR_LEN..].to_string()),
            None => RenameDecision::Unmatched,
        }
    }
}
