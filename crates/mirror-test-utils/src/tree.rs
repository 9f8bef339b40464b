//! [`TestMirror`] builder for canonical/mirror test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary repository root holding a canonical and a mirror directory,
/// with helper methods for test setup and assertion.
///
/// Directories are given relative to the root so the fixture does not need
/// to know the production layout.
///
/// # Example
///
/// ```rust,no_run
/// use mirror_test_utils::TestMirror;
///
/// let repo = TestMirror::new("Packages/Vfx", "Assets/Vfx");
/// repo.write_canonical("Foo.cs", "class Foo {}");
/// repo.write_mirror("Extra.cs", "class Extra {}");
/// repo.assert_mirror_missing("Foo.cs");
/// ```
pub struct TestMirror {
    temp_dir: TempDir,
    canonical_dir: PathBuf,
    mirror_dir: PathBuf,
}

impl TestMirror {
    /// Create an empty root. Neither tree exists until a file is written to it.
    pub fn new(canonical_dir: &str, mirror_dir: &str) -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            canonical_dir: PathBuf::from(canonical_dir),
            mirror_dir: PathBuf::from(mirror_dir),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn canonical_path(&self, name: &str) -> PathBuf {
        self.root().join(&self.canonical_dir).join(name)
    }

    pub fn mirror_path(&self, name: &str) -> PathBuf {
        self.root().join(&self.mirror_dir).join(name)
    }

    /// Create the canonical directory without any files.
    pub fn create_canonical_dir(&self) {
        fs::create_dir_all(self.root().join(&self.canonical_dir)).unwrap();
    }

    /// Create the mirror directory without any files.
    pub fn create_mirror_dir(&self) {
        fs::create_dir_all(self.root().join(&self.mirror_dir)).unwrap();
    }

    /// Write `content` to `name` in the canonical tree, creating the directory.
    pub fn write_canonical(&self, name: &str, content: impl AsRef<[u8]>) {
        write_file(&self.canonical_path(name), content.as_ref());
    }

    /// Write `content` to `name` in the mirror tree, creating the directory.
    pub fn write_mirror(&self, name: &str, content: impl AsRef<[u8]>) {
        write_file(&self.mirror_path(name), content.as_ref());
    }

    pub fn read_canonical(&self, name: &str) -> Vec<u8> {
        let path = self.canonical_path(name);
        fs::read(&path).unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    pub fn read_mirror(&self, name: &str) -> Vec<u8> {
        let path = self.mirror_path(name);
        fs::read(&path).unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Set the modification time of a mirror file, in seconds since the epoch.
    pub fn set_mirror_mtime(&self, name: &str, unix_seconds: i64) {
        let time = filetime::FileTime::from_unix_time(unix_seconds, 0);
        filetime::set_file_mtime(self.mirror_path(name), time).unwrap();
    }

    /// All file names directly inside the mirror directory, sorted.
    ///
    /// Includes sidecars and files of any extension.
    pub fn mirror_names(&self) -> Vec<String> {
        let dir = self.root().join(&self.mirror_dir);
        if !dir.exists() {
            return Vec::new();
        }

        let mut names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `name` exists in the mirror.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file does not exist.
    pub fn assert_mirror_exists(&self, name: &str) {
        let path = self.mirror_path(name);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that `name` does **not** exist in the mirror.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file exists.
    pub fn assert_mirror_missing(&self, name: &str) {
        let path = self.mirror_path(name);
        assert!(
            !path.exists(),
            "Expected file NOT to exist: {}",
            path.display()
        );
    }

    /// Assert that the mirror copy of `name` is byte-identical to canonical.
    ///
    /// # Panics
    /// Panics if either file cannot be read or the bytes differ.
    pub fn assert_mirror_matches_canonical(&self, name: &str) {
        assert!(
            self.read_canonical(name) == self.read_mirror(name),
            "Mirror copy of {} differs from canonical",
            name
        );
    }
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
