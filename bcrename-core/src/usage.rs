/// Help text printed for malformed invocations.
pub const USAGE: &str = r#"Usage: br [folder]
Bandcamp rename. Renames music files from bandcamp by removing band and album name.
  arguments:  [folder]   Where files are renamed. Default is the current directory.
  example:    br
              br .
              br honeymoon
              br "~/flac/mourn/self worth"
  songs named like:  "mourn - self worth - 01 this feeling is disgusting.flac"
    are renamed to:  "01 this feeling is disgusting.flac""#;

/// Directory used when no argument is given.
pub const DEFAULT_TARGET: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Rename files in the given (still unresolved) path.
    Target(String),
    /// Print usage and exit with status 1.
    Usage,
}

/// Decide what the positional arguments ask for.
///
/// Anything containing `?` or starting with `-` or `/` is read as a request
/// for help, as is more than one argument.
pub fn classify_args<S: AsRef<str>>(args: &[S]) -> Invocation {
    match args {
        [] => Invocation::Target(DEFAULT_TARGET.to_string()),
        [arg] => {
            let arg = arg.as_ref();
            if arg.is_empty() || looks_like_help(arg) {
                Invocation::Usage
            } else {
                Invocation::Target(arg.to_string())
            }
        },
        _ => Invocation::Usage,
    }
}

fn looks_like_help(arg: &str) -> bool {
    arg.contains('?') || arg.starts_with('-') || arg.starts_with('/')
}
