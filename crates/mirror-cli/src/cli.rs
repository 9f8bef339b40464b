//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Check or restore the VFX tool compatibility mirror.
///
/// The package directory is the canonical source of truth. Without flags the
/// Assets mirror is compared against it and any drift is listed; the exit
/// status is 1 when drift is found.
#[derive(Parser, Debug)]
#[command(name = "vfx-mirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Copy canonical package tool files to the Assets compatibility path
    #[arg(long)]
    pub write: bool,

    /// Repository root (detected from the current directory when omitted)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
