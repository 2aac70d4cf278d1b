use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod classify;
mod report;
mod sanitize;

fn main() -> ExitCode {
    let root = match parse_args() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    // Missing root: distinguished exit status, checked before any traversal.
    if !root.exists() {
        eprintln!("Path does not exist: {}", root.display());
        return ExitCode::from(2);
    }

    match run(&root) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(root: &Path) -> Result<()> {
    let abs_root = std::fs::canonicalize(root)?;
    println!("Scanning: {}", abs_root.display());
    let findings = report::scan(root)?;
    report::emit(&findings)
}

// One optional positional argument: the root to scan; defaults to ".".
fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let root = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    if let Some(extra) = args.next() {
        return Err(anyhow::anyhow!("Unexpected argument: {}", extra));
    }
    Ok(root)
}
