//! Check types for MirrorEngine validation
//!
//! Provides types for reporting drift between the canonical tree and the
//! compatibility mirror.

use std::fmt;

use mirror_fs::NormalizedPath;

/// Status of the synchronization check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The canonical tree has no files; nothing to compare
    Empty,
    /// Every canonical file is mirrored byte for byte and nothing else exists
    Healthy,
    /// At least one finding was recorded
    Drifted,
}

/// Kind of difference between the two trees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftKind {
    /// Canonical file has no mirror counterpart
    Missing,
    /// Both files exist but their checksums differ
    ContentMismatch,
    /// Mirror file has no canonical counterpart
    Orphan,
}

/// A single finding, with root-relative paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftItem {
    pub kind: DriftKind,
    /// The file name shared by both trees
    pub name: String,
    /// Canonical path, present for content mismatches
    pub canonical: Option<NormalizedPath>,
    /// Mirror path the finding is about
    pub mirror: NormalizedPath,
}

impl DriftItem {
    pub fn missing(name: impl Into<String>, mirror: NormalizedPath) -> Self {
        Self {
            kind: DriftKind::Missing,
            name: name.into(),
            canonical: None,
            mirror,
        }
    }

    pub fn content_mismatch(
        name: impl Into<String>,
        canonical: NormalizedPath,
        mirror: NormalizedPath,
    ) -> Self {
        Self {
            kind: DriftKind::ContentMismatch,
            name: name.into(),
            canonical: Some(canonical),
            mirror,
        }
    }

    pub fn orphan(name: impl Into<String>, mirror: NormalizedPath) -> Self {
        Self {
            kind: DriftKind::Orphan,
            name: name.into(),
            canonical: None,
            mirror,
        }
    }
}

impl fmt::Display for DriftItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.canonical) {
            (DriftKind::Missing, _) => write!(f, "missing: {}", self.mirror),
            (DriftKind::ContentMismatch, Some(canonical)) => {
                write!(f, "content mismatch: {} -> {}", canonical, self.mirror)
            }
            (DriftKind::ContentMismatch, None) => {
                write!(f, "content mismatch: {}", self.mirror)
            }
            (DriftKind::Orphan, _) => write!(f, "orphan (not in canonical): {}", self.mirror),
        }
    }
}

/// Report from a synchronization check
///
/// Findings keep scan order: the canonical pass (missing and mismatched
/// files, sorted by name) first, then the mirror-only pass (orphans, sorted
/// by name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub findings: Vec<DriftItem>,
    /// Number of canonical files compared
    pub canonical_count: usize,
    /// Number of mirror files listed (zero when the mirror is absent)
    pub mirror_count: usize,
}

impl CheckReport {
    /// Report for a canonical tree without files
    pub fn empty() -> Self {
        Self {
            status: CheckStatus::Empty,
            findings: Vec::new(),
            canonical_count: 0,
            mirror_count: 0,
        }
    }

    /// Build a report from recorded findings; the status follows from them
    pub fn from_findings(
        findings: Vec<DriftItem>,
        canonical_count: usize,
        mirror_count: usize,
    ) -> Self {
        let status = if findings.is_empty() {
            CheckStatus::Healthy
        } else {
            CheckStatus::Drifted
        };

        Self {
            status,
            findings,
            canonical_count,
            mirror_count,
        }
    }

    /// True when there is nothing to reconcile
    pub fn is_clean(&self) -> bool {
        self.status != CheckStatus::Drifted
    }

    /// Process exit status: 0 when clean, 1 on drift
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() { 0 } else { 1 }
    }

    /// Number of findings of the given kind
    pub fn count(&self, kind: DriftKind) -> usize {
        self.findings.iter().filter(|item| item.kind == kind).count()
    }
}
