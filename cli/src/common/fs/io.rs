//! # Goney File Emission
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! The filesystem primitives behind every generated file:
//!
//! - **`ensure_dir_exists`**: creates a directory and its parents (mode `0755`
//!   on Unix), or confirms an existing path is a directory.
//! - **`write_string_to_file`**: creates the parent directory, then creates or
//!   truncates the file. Generated files are always overwritten; there is no
//!   diffing and no locking, so concurrent runs race and the last writer wins.
//! - **`create_file_if_absent`**: the create-once variant used for shared
//!   artifacts. Existing files are never touched.
//! - **`read_file_to_string`**: a read with path context on failure.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::write_string_to_file(Path::new("src/modules/users/users.dto.go"), &rendered)?;
//! let created = io::create_file_if_absent(Path::new("src/common/dto/base.go"), &shared)?;
//! ```
//!
use crate::core::error::{GoneyError, Result};
use anyhow::Context;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Permission bits for directories created by the generator.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Ensures that a directory exists at `path`, creating it and any missing
/// parents when needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// it fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder
            .create(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(GoneyError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes `content` to `path`, overwriting any existing file.
///
/// The parent directory is created first. Hand edits to a previously
/// generated file are lost.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Creates `path` with `content` only if nothing exists there yet.
///
/// Returns `Ok(true)` when the file was created and `Ok(false)` when an
/// existing file was left untouched. The existence check and the creation are
/// a single `create_new` open, so two racing callers cannot both write.
///
/// # Errors
///
/// Returns an `Err` if something other than a regular file occupies `path`,
/// or if the new file cannot be created or written. A file that could not be
/// fully written is removed again.
pub fn create_file_if_absent(path: &Path, content: &str) -> Result<bool> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    let file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if !path.is_file() {
                anyhow::bail!(GoneyError::FileSystem(format!(
                    "Path exists but is not a file: {:?}",
                    path
                )));
            }
            debug!("Keeping existing file: {:?}", path);
            return Ok(false);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create file {:?}", path));
        }
    };
    fill_new_file(file, path, content)?;
    info!("Created file: {:?}", path);
    Ok(true)
}

/// Writes `content` into the file just created at `path`, removing it again
/// if the write fails so that it does not pass for an existing file later.
fn fill_new_file(mut file: impl Write, path: &Path, content: &str) -> Result<()> {
    let written = file
        .write_all(content.as_bytes())
        .and_then(|()| file.flush());
    if let Err(e) = written {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("Failed to remove partial file {:?}: {}", path, remove_err);
        }
        return Err(e).with_context(|| format!("Failed to write to file {:?}", path));
    }
    Ok(())
}
