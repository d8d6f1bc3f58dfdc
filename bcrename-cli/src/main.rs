use anyhow::Result;
use bcrename_core::{Invocation, RenameOptions, TargetDir, USAGE};
use std::process;

mod cli;
mod rename;

fn main() {
    let raw_target = match cli::parse_invocation(std::env::args_os()) {
        Ok(Invocation::Target(raw)) => raw,
        Ok(Invocation::Usage) => usage(),
        Err(e) => {
            println!("error: {}", e.kind());
            usage();
        },
    };

    if let Err(e) = run(&raw_target) {
        println!("error: {e:#}");
        usage();
    }
}

fn run(raw_target: &str) -> Result<()> {
    let target = TargetDir::resolve(raw_target)?;
    rename::handle_rename(&target, &RenameOptions::default())
}

fn usage() -> ! {
    println!("{USAGE}");
    process::exit(1);
}
