//! Flat, sorted directory listing

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// List the names of regular files in `dir` ending with `.<extension>`.
///
/// The listing is flat (subdirectories are ignored) and sorted by name so
/// that every report built from it has a reproducible order. Symlinks are
/// followed. The extension match is case-sensitive.
///
/// A directory that does not exist lists as empty. Names that are not valid
/// UTF-8 are skipped with a warning.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] if `dir` exists but is not a directory,
/// or [`Error::Io`] if the directory cannot be read.
pub fn list_files_with_extension(dir: &NormalizedPath, extension: &str) -> Result<Vec<String>> {
    let native = dir.to_native();
    if !native.exists() {
        tracing::debug!(dir = %dir, "directory absent, listing as empty");
        return Ok(Vec::new());
    }
    if !native.is_dir() {
        return Err(Error::NotADirectory { path: native });
    }

    let suffix = format!(".{}", extension);
    let mut names = Vec::new();

    for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        let path = entry.path();

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::warn!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };

        if name.ends_with(&suffix) && path.is_file() {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}
