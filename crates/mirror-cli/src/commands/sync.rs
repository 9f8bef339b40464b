//! Check and write command implementations
//!
//! Both commands return the process exit status: 0 when the mirror matches
//! the canonical tree, 1 when drift remains.

use colored::Colorize;

use mirror_core::{CheckReport, CheckStatus, MirrorEngine, MirrorLayout, WriteReport};

use crate::error::Result;

const DRIFT_HEADER: &str = "VFX tool mirror drift detected:";
const IN_SYNC: &str = "VFX package and Assets compatibility mirror are in sync.";
const NOTHING_TO_CHECK: &str = "No canonical VFX tool files found; nothing to check.";
const REMEDIATION: &str = "Run: vfx-mirror --write";

/// Run the check command
///
/// Lists drift and returns 1 when any is found. With `verbose`, a clean
/// result is confirmed on stdout.
pub fn run_check(layout: &MirrorLayout, verbose: bool) -> Result<i32> {
    let engine = MirrorEngine::new(layout.clone())?;
    let report = engine.check()?;

    emit(&check_lines(&report, verbose));
    Ok(report.exit_code())
}

/// Run the write command
///
/// Copies the canonical tree over the mirror, prunes orphans, then reports
/// the quiet check that follows.
pub fn run_write(layout: &MirrorLayout) -> Result<i32> {
    let engine = MirrorEngine::new(layout.clone())?;
    let report = engine.write()?;

    emit(&write_lines(&report));
    Ok(report.exit_code())
}

/// Lines printed for a check report.
pub fn check_lines(report: &CheckReport, verbose: bool) -> Vec<String> {
    match report.status {
        CheckStatus::Empty => vec![NOTHING_TO_CHECK.to_string()],
        CheckStatus::Healthy if verbose => vec![IN_SYNC.to_string()],
        CheckStatus::Healthy => Vec::new(),
        CheckStatus::Drifted => {
            let mut lines = Vec::with_capacity(report.findings.len() + 2);
            lines.push(DRIFT_HEADER.to_string());
            lines.extend(report.findings.iter().map(|item| format!("- {}", item)));
            lines.push(REMEDIATION.to_string());
            lines
        }
    }
}

/// Lines printed for a write report, followed by its quiet verification.
pub fn write_lines(report: &WriteReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Synced {} VFX tool files from package to Assets compatibility path.",
        report.copied
    )];
    if report.removed > 0 {
        lines.push(format!(
            "Removed {} orphaned file(s) from Assets mirror.",
            report.removed
        ));
    }
    lines.extend(check_lines(&report.verification, false));
    lines
}

fn emit(lines: &[String]) {
    for line in lines {
        match line.as_str() {
            DRIFT_HEADER => println!("{}", line.as_str().red().bold()),
            IN_SYNC => println!("{}", line.as_str().green()),
            _ => println!("{}", line),
        }
    }
}
