use anyhow::Result;
use bcrename_core::{rename_operation, RenameOptions, TargetDir};
use std::io::{self, Write};

pub fn handle_rename(target: &TargetDir, options: &RenameOptions) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    rename_operation(target, options, &mut out, &mut err)?;

    // Output is best-effort; the renames have already happened.
    let _ = out.flush();
    Ok(())
}
