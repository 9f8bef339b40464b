//! VFX tool mirror CLI
//!
//! Keeps `Assets/MCPForUnity/Editor/Tools/Vfx` identical to the canonical
//! package sources. Exit status: 0 in sync, 1 drift, 2 fatal error.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use mirror_core::MirrorLayout;

use cli::Cli;
use error::{CliError, Result};

/// Exit status for failures that are not drift
const FATAL_EXIT: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(FATAL_EXIT);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
        tracing::debug!("Verbose mode enabled");
    }

    let layout = resolve_layout(&cli)?;

    if cli.write {
        commands::run_write(&layout)
    } else {
        commands::run_check(&layout, true)
    }
}

fn resolve_layout(cli: &Cli) -> Result<MirrorLayout> {
    let layout = match &cli.root {
        Some(root) => MirrorLayout::at_root(root)?,
        None => {
            let cwd = std::env::current_dir()?;
            MirrorLayout::detect(&cwd)?
        }
    };
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirror_core::{CANONICAL_DIR, MIRROR_DIR};
    use mirror_test_utils::TestMirror;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_resolve_layout_with_explicit_root() {
        let repo = TestMirror::new(CANONICAL_DIR, MIRROR_DIR);
        let cli = Cli::try_parse_from(["vfx-mirror", "--root", repo.root().to_str().unwrap()])
            .unwrap();

        let layout = resolve_layout(&cli).unwrap();

        assert_eq!(layout, MirrorLayout::at_root(repo.root()).unwrap());
    }

    #[test]
    fn test_resolve_layout_missing_root_is_fatal() {
        let repo = TestMirror::new(CANONICAL_DIR, MIRROR_DIR);
        let missing = repo.root().join("nope");
        let cli =
            Cli::try_parse_from(["vfx-mirror", "--root", missing.to_str().unwrap()]).unwrap();

        assert!(resolve_layout(&cli).is_err());
    }
}
