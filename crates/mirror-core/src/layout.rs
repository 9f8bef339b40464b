//! Location of the canonical and mirror trees
//!
//! Both trees live at fixed paths relative to the repository root. The root
//! itself is either given explicitly or detected by walking up from a
//! starting directory, the way `git` finds its work tree.

use std::path::{Component, Path};

use mirror_fs::NormalizedPath;

use crate::{Error, Result};

/// Canonical tool sources, relative to the repository root
pub const CANONICAL_DIR: &str = "Packages/com.pakaya.mcp.vfx/Editor/Tools/Vfx";

/// Compatibility mirror, relative to the repository root
pub const MIRROR_DIR: &str = "Assets/MCPForUnity/Editor/Tools/Vfx";

/// Extension of the mirrored source files
pub const SOURCE_EXTENSION: &str = "cs";

/// Suffix appended to a source file name to form its sidecar metadata file
pub const SIDECAR_SUFFIX: &str = ".meta";

/// Marker that identifies a repository root during detection
const ROOT_MARKER: &str = ".git";

/// Where the two trees live and which files belong to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorLayout {
    root: NormalizedPath,
    canonical_dir: String,
    mirror_dir: String,
    extension: String,
    sidecar_suffix: String,
}

impl MirrorLayout {
    /// Layout with the default directories under `root`.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self {
            root: root.into(),
            canonical_dir: CANONICAL_DIR.to_string(),
            mirror_dir: MIRROR_DIR.to_string(),
            extension: SOURCE_EXTENSION.to_string(),
            sidecar_suffix: SIDECAR_SUFFIX.to_string(),
        }
    }

    /// Detect the repository root starting from `start`.
    ///
    /// Walks up from `start` to the first directory that contains the
    /// canonical directory or a `.git` marker. Falls back to `start` itself
    /// when no ancestor qualifies. The result is canonicalized.
    pub fn detect(start: &Path) -> Result<Self> {
        let start = NormalizedPath::canonicalize(start)?.to_native();

        let root = start
            .ancestors()
            .find(|dir| dir.join(CANONICAL_DIR).is_dir() || dir.join(ROOT_MARKER).exists())
            .unwrap_or(start.as_path());

        tracing::debug!(root = %root.display(), "detected repository root");
        Ok(Self::new(root))
    }

    /// Layout rooted at an explicitly provided directory.
    pub fn at_root(root: &Path) -> Result<Self> {
        Ok(Self::new(NormalizedPath::canonicalize(root)?))
    }

    pub fn with_canonical_dir(mut self, dir: impl Into<String>) -> Self {
        self.canonical_dir = dir.into();
        self
    }

    pub fn with_mirror_dir(mut self, dir: impl Into<String>) -> Self {
        self.mirror_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_sidecar_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.sidecar_suffix = suffix.into();
        self
    }

    /// Reject layouts under which check and write cannot be meaningful.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] when the extension or sidecar suffix
    /// is unusable, when a directory escapes the root, or when both trees
    /// point at the same directory.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.contains(['/', '\\', '.']) {
            return Err(Error::invalid_layout(format!(
                "extension must be a bare, non-empty extension, got {:?}",
                self.extension
            )));
        }

        if self.sidecar_suffix.is_empty() || self.sidecar_suffix.contains(['/', '\\']) {
            return Err(Error::invalid_layout(format!(
                "sidecar suffix must be a non-empty file name suffix, got {:?}",
                self.sidecar_suffix
            )));
        }

        // A sidecar that itself carries the source extension would be listed
        // as a source file.
        if self.sidecar_suffix.ends_with(&format!(".{}", self.extension)) {
            return Err(Error::invalid_layout(format!(
                "sidecar suffix {:?} collides with extension {:?}",
                self.sidecar_suffix, self.extension
            )));
        }

        for (label, dir) in [("canonical", &self.canonical_dir), ("mirror", &self.mirror_dir)] {
            validate_relative_dir(label, dir)?;
        }

        if trim_dir(&self.canonical_dir) == trim_dir(&self.mirror_dir) {
            return Err(Error::invalid_layout(format!(
                "canonical and mirror directories are the same: {}",
                self.canonical_dir
            )));
        }

        Ok(())
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Absolute path of the canonical directory.
    pub fn canonical_root(&self) -> NormalizedPath {
        self.root.join(trim_dir(&self.canonical_dir))
    }

    /// Absolute path of the mirror directory.
    pub fn mirror_root(&self) -> NormalizedPath {
        self.root.join(trim_dir(&self.mirror_dir))
    }

    pub fn canonical_file(&self, name: &str) -> NormalizedPath {
        self.canonical_root().join(name)
    }

    pub fn mirror_file(&self, name: &str) -> NormalizedPath {
        self.mirror_root().join(name)
    }

    /// Root-relative path of a canonical file, as printed in reports.
    pub fn display_canonical(&self, name: &str) -> NormalizedPath {
        NormalizedPath::new(trim_dir(&self.canonical_dir)).join(name)
    }

    /// Root-relative path of a mirror file, as printed in reports.
    pub fn display_mirror(&self, name: &str) -> NormalizedPath {
        NormalizedPath::new(trim_dir(&self.mirror_dir)).join(name)
    }

    /// Sidecar metadata path for a source file path.
    pub fn sidecar_of(&self, path: &NormalizedPath) -> NormalizedPath {
        path.with_appended_suffix(&self.sidecar_suffix)
    }
}

fn trim_dir(dir: &str) -> &str {
    dir.trim_end_matches(['/', '\\'])
}

fn validate_relative_dir(label: &str, dir: &str) -> Result<()> {
    let path = Path::new(trim_dir(dir));

    if trim_dir(dir).is_empty() {
        return Err(Error::invalid_layout(format!(
            "{label} directory must not be empty"
        )));
    }

    let escapes = path.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes || dir.starts_with(['/', '\\']) {
        return Err(Error::invalid_layout(format!(
            "{label} directory must be relative to the repository root: {dir}"
        )));
    }

    Ok(())
}
