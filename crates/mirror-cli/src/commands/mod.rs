//! Command implementations for mirror-cli

pub mod sync;

pub use sync::{run_check, run_write};
