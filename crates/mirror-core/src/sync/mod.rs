//! MirrorEngine for keeping the compatibility mirror identical to the canonical tree
//!
//! This module provides:
//! - **check**: Report missing, mismatched and orphaned mirror files
//! - **write**: Copy canonical files and sidecars, prune orphans, verify

mod check;
mod engine;

pub use check::{CheckReport, CheckStatus, DriftItem, DriftKind};
pub use engine::{MirrorEngine, WriteReport};
