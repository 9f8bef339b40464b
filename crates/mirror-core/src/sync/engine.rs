//! MirrorEngine implementation
//!
//! The MirrorEngine compares the canonical tree with the compatibility
//! mirror and copies the former over the latter. Every run recomputes its
//! view from disk; nothing is cached between calls.

use std::collections::HashSet;

use mirror_fs::{NormalizedPath, compute_file_checksum, io, list_files_with_extension};

use crate::{Error, Result};
use crate::layout::MirrorLayout;

use super::check::{CheckReport, DriftItem};

/// Report from a write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Canonical files copied into the mirror
    pub copied: usize,
    /// Copied files whose mirror content was absent or different beforehand
    pub changed: usize,
    /// Sidecar files copied alongside their source file
    pub sidecars: usize,
    /// Stale mirror sidecars removed because canonical has none
    pub sidecars_removed: usize,
    /// Orphaned mirror files deleted
    pub removed: usize,
    /// Check run after reconciliation
    pub verification: CheckReport,
}

impl WriteReport {
    /// Exit status of the verification check
    pub fn exit_code(&self) -> i32 {
        self.verification.exit_code()
    }
}

/// Engine for keeping the mirror identical to the canonical tree
///
/// - **check**: report drift without modifying anything
/// - **write**: copy, prune, then check again
#[derive(Debug, Clone)]
pub struct MirrorEngine {
    layout: MirrorLayout,
}

impl MirrorEngine {
    /// Create a new MirrorEngine
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`](crate::Error::InvalidLayout) if the
    /// layout does not validate.
    pub fn new(layout: MirrorLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &MirrorLayout {
        &self.layout
    }

    /// Compare the mirror against the canonical tree.
    ///
    /// Read-only. An absent mirror directory counts as an empty one, so every
    /// canonical file shows up as missing.
    pub fn check(&self) -> Result<CheckReport> {
        let layout = &self.layout;
        let canonical = self.list(&layout.canonical_root())?;

        if canonical.is_empty() {
            tracing::info!(dir = %layout.canonical_root(), "no canonical files");
            return Ok(CheckReport::empty());
        }

        let canonical_names: HashSet<&str> = canonical.iter().map(String::as_str).collect();
        let mut findings = Vec::new();

        for name in &canonical {
            let source = layout.canonical_file(name);
            let target = layout.mirror_file(name);

            if !target.exists() {
                findings.push(DriftItem::missing(name, layout.display_mirror(name)));
                continue;
            }

            if compute_file_checksum(source.as_ref())? != compute_file_checksum(target.as_ref())? {
                findings.push(DriftItem::content_mismatch(
                    name,
                    layout.display_canonical(name),
                    layout.display_mirror(name),
                ));
            }
        }

        let mirror_root = layout.mirror_root();
        let mut mirror_count = 0;
        if mirror_root.exists() {
            let mirror = self.list(&mirror_root)?;
            mirror_count = mirror.len();

            for name in mirror {
                if !canonical_names.contains(name.as_str()) {
                    let path = layout.display_mirror(&name);
                    findings.push(DriftItem::orphan(name, path));
                }
            }
        }

        for item in &findings {
            tracing::debug!(finding = %item, "drift");
        }

        let report = CheckReport::from_findings(findings, canonical.len(), mirror_count);
        tracing::info!(
            status = ?report.status,
            findings = report.findings.len(),
            canonical = report.canonical_count,
            mirror = report.mirror_count,
            "check complete"
        );
        Ok(report)
    }

    /// Make the mirror an exact copy of the canonical tree, then verify.
    ///
    /// Filesystem errors abort immediately; a partially updated mirror is
    /// repaired by running write again.
    pub fn write(&self) -> Result<WriteReport> {
        let layout = &self.layout;
        let mirror_root = layout.mirror_root();
        io::ensure_dir(&mirror_root)?;

        let canonical_root = layout.canonical_root();
        if io::same_file(&canonical_root, &mirror_root)? {
            return Err(Error::invalid_layout(format!(
                "mirror directory {mirror_root} resolves to the canonical directory"
            )));
        }

        let canonical = self.list(&canonical_root)?;
        let canonical_names: HashSet<&str> = canonical.iter().map(String::as_str).collect();

        let mut copied = 0;
        let mut changed = 0;
        let mut sidecars = 0;
        let mut sidecars_removed = 0;

        for name in &canonical {
            let source = layout.canonical_file(name);
            let target = layout.mirror_file(name);

            if !target.is_file()
                || compute_file_checksum(source.as_ref())? != compute_file_checksum(target.as_ref())?
            {
                changed += 1;
            }

            io::copy_preserving(&source, &target)?;
            copied += 1;

            let source_sidecar = layout.sidecar_of(&source);
            let target_sidecar = layout.sidecar_of(&target);
            if source_sidecar.exists() {
                io::copy_preserving(&source_sidecar, &target_sidecar)?;
                sidecars += 1;
            } else if io::remove_if_exists(&target_sidecar)? {
                sidecars_removed += 1;
            }
        }

        let mut removed = 0;
        for name in self.list(&mirror_root)? {
            if canonical_names.contains(name.as_str()) {
                continue;
            }

            let orphan = layout.mirror_file(&name);
            io::remove_file(&orphan)?;
            io::remove_if_exists(&layout.sidecar_of(&orphan))?;
            removed += 1;
        }

        tracing::info!(copied, changed, sidecars, sidecars_removed, removed, "write complete");

        let verification = self.check()?;
        Ok(WriteReport {
            copied,
            changed,
            sidecars,
            sidecars_removed,
            removed,
            verification,
        })
    }

    fn list(&self, dir: &NormalizedPath) -> Result<Vec<String>> {
        Ok(list_files_with_extension(dir, self.layout.extension())?)
    }
}
