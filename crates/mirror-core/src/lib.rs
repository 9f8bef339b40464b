//! Drift detection and one-way reconciliation for the VFX tool mirror
//!
//! The package directory is the canonical source of truth for the VFX MCP
//! tool sources. The Assets directory holds a compatibility mirror that must
//! contain byte-identical copies of every canonical file (plus its `.meta`
//! sidecar) and nothing else.
//!
//! - **check**: compare both trees and report missing, mismatched and
//!   orphaned files without touching the filesystem
//! - **write**: copy canonical files over the mirror, prune orphans, then
//!   run check again to verify convergence
//!
//! ```text
//!   mirror-cli
//!       |
//!   mirror-core  (MirrorLayout, MirrorEngine, CheckReport)
//!       |
//!   mirror-fs    (listing, checksums, copies)
//! ```

pub mod error;
pub mod layout;
pub mod sync;

pub use error::{Error, Result};
pub use layout::{CANONICAL_DIR, MIRROR_DIR, MirrorLayout, SIDECAR_SUFFIX, SOURCE_EXTENSION};
pub use sync::{CheckReport, CheckStatus, DriftItem, DriftKind, MirrorEngine, WriteReport};
