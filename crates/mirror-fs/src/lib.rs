//! Filesystem primitives for the VFX tool mirror
//!
//! Provides normalized paths, content checksums, flat directory listing and
//! metadata-preserving copies. Everything above this crate treats the two
//! trees as flat name sets built from these operations.

pub mod checksum;
pub mod error;
pub mod io;
pub mod listing;
pub mod path;

pub use checksum::{compute_content_checksum, compute_file_checksum};
pub use error::{Error, Result};
pub use listing::list_files_with_extension;
pub use path::NormalizedPath;
