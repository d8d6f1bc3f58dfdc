#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod enumerator;
pub mod extensions;
pub mod operations;
pub mod renamer;
pub mod rule;
pub mod target;
pub mod usage;

pub use enumerator::{build_filter, EnumerateError, FileEntry, FileEnumerator, MATCH_ALL};
pub use extensions::{extension_of, AllowedExtensions, DEFAULT_EXTENSIONS};
pub use operations::{rename_operation, RenameOptions, RenameSummary};
pub use renamer::{rename_in_dir, RenameError};
pub use rule::{RenameDecision, TrackPrefixRule, TRACK_PREFIX_PATTERN};
pub use target::TargetDir;
pub use usage::{classify_args, Invocation, USAGE};
