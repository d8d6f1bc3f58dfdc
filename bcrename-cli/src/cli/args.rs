use bcrename_core::{classify_args, Invocation};
use clap::Parser;
use std::ffi::OsString;

/// Renames music files from bandcamp by removing band and album name
///
/// Help and version flags are turned off so that every flag-looking argument
/// reaches `classify_args` and ends in the usage text.
#[derive(Parser, Debug)]
#[command(name = "br", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Where files are renamed. Default is the current directory.
    #[arg(
        value_name = "FOLDER",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub folder: Vec<String>,
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        classify_args(&self.folder)
    }
}

/// Parse the full argument list (program name first) into an invocation.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // clap swallows a bare `--` as the end-of-options marker.
    if args.iter().skip(1).any(|arg| arg == "--") {
        return Ok(Invocation::Usage);
    }

    Ok(Cli::try_parse_from(args)?.invocation())
}
