//! Backup utilities for the data directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::errors::{Result, StoreError};

/// Copy the data directory's files into a timestamped directory
///
/// Creates `backup_<YYYYMMDD_HHMMSS>` under `backup_root` and copies every
/// regular file directly inside `data_dir` into it (the data layout is
/// flat). Returns the created path.
///
/// # Errors
///
/// Returns `Io` if the data directory does not exist or a copy fails.
pub fn perform_backup(data_dir: &Path, backup_root: &Path) -> Result<PathBuf> {
    if !data_dir.is_dir() {
        return Err(StoreError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("data directory {} does not exist", data_dir.display()),
        )));
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let target = backup_root.join(format!("backup_{stamp}"));
    fs::create_dir_all(&target)?;

    let mut copied = 0usize;
    for entry in fs::read_dir(data_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::copy(entry.path(), target.join(entry.file_name()))?;
            copied += 1;
        }
    }

    tracing::debug!(copied, target = %target.display(), "backup complete");
    Ok(target)
}

/// Recursively sum file sizes in bytes under the given directory
///
/// # Errors
///
/// Returns `Io` if the directory cannot be read.
pub fn directory_size(path: &Path) -> Result<u64> {
    let mut total = 0u64;
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            total += directory_size(&entry.path())?;
        } else if file_type.is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
