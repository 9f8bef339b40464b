//! Shared test utilities for the vfx-mirror workspace.
//!
//! This crate provides a standardised canonical/mirror fixture so every crate
//! builds its drift scenarios the same way. It is a dev-dependency only and
//! never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestMirror`] builder for canonical and mirror trees

pub mod tree;

pub use tree::TestMirror;
