//! Error types for mirror-core

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mirror-core operations
///
/// Drift is not an error: it is reported through
/// [`CheckReport`](crate::CheckReport). Everything here aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured layout cannot describe a canonical/mirror pair
    #[error("Invalid mirror layout: {message}")]
    InvalidLayout { message: String },

    /// Filesystem error from mirror-fs
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),
}

impl Error {
    pub(crate) fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }
}
