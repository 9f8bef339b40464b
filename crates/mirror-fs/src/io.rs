//! Copy and removal operations used to reconcile the mirror

use std::fs;

use filetime::FileTime;

use crate::{Error, NormalizedPath, Result};

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &NormalizedPath) -> Result<()> {
    let native = dir.to_native();
    fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))
}

/// Copy `src` over `dst`, preserving permissions and timestamps.
///
/// The destination is overwritten if present. Permission bits are carried by
/// `fs::copy`; access and modification times are applied afterwards so the
/// mirrored file carries the canonical file's timestamps.
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns [`Error::SameFile`] when `dst` resolves to `src`, for example
/// through a symlink. Nothing is written in that case.
pub fn copy_preserving(src: &NormalizedPath, dst: &NormalizedPath) -> Result<u64> {
    let src_native = src.to_native();
    let dst_native = dst.to_native();

    if same_file(src, dst)? {
        return Err(Error::SameFile {
            src: src_native,
            dst: dst_native,
        });
    }

    let metadata = fs::metadata(&src_native).map_err(|e| Error::io(&src_native, e))?;
    let bytes = fs::copy(&src_native, &dst_native).map_err(|e| Error::io(&dst_native, e))?;

    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(&dst_native, atime, mtime)
        .map_err(|e| Error::io(&dst_native, e))?;

    tracing::debug!(src = %src, dst = %dst, bytes, "copied");
    Ok(bytes)
}

/// True when both paths exist and resolve to the same file.
pub fn same_file(a: &NormalizedPath, b: &NormalizedPath) -> Result<bool> {
    if !a.exists() || !b.exists() {
        return Ok(false);
    }
    Ok(NormalizedPath::canonicalize(a)? == NormalizedPath::canonicalize(b)?)
}

/// Delete a file.
pub fn remove_file(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    fs::remove_file(&native).map_err(|e| Error::io(&native, e))?;
    tracing::debug!(path = %path, "removed");
    Ok(())
}

/// Delete a file if it exists. Returns whether anything was removed.
pub fn remove_if_exists(path: &NormalizedPath) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    remove_file(path)?;
    Ok(true)
}
