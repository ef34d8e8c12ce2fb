//! Writing generated vhosts and preparing log destinations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::fields::{STDERR_ERROR_LOG, STDOUT_ACCESS_LOG};

/// Device the access log symlink points at.
pub const STDOUT_DEVICE: &str = "/dev/stdout";

/// Device the error log symlink points at.
pub const STDERR_DEVICE: &str = "/dev/stderr";

/// Writes `text` to `<conf_dir>/<name>.conf`, replacing any existing file.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns [`Error::OutputDirNotFound`] if `conf_dir` is not a directory and
/// [`Error::Filesystem`] if the file cannot be written.
pub fn save_vhost(conf_dir: &Path, name: &str, text: &str) -> Result<PathBuf> {
    if !conf_dir.is_dir() {
        return Err(Error::OutputDirNotFound {
            path: conf_dir.to_path_buf(),
        });
    }

    let path = conf_dir.join(format!("{name}.conf"));
    fs::write(&path, text).map_err(|source| Error::Filesystem {
        action: "cannot write",
        path: path.clone(),
        source,
    })?;

    log::debug!("wrote vhost to {}", path.display());
    Ok(path)
}

/// Applies the log settings that need filesystem changes.
///
/// Access and error logs sent to stdout/stderr get their well-known log
/// paths symlinked to the matching device, and the log directory is created
/// when `log.dir.create` is set.
///
/// # Errors
///
/// Returns the first symlink or directory creation failure.
pub fn apply_log_settings(config: &Config) -> Result<()> {
    let log = &config.vhost.log;

    if log.access.stdout {
        force_symlink(Path::new(STDOUT_DEVICE), Path::new(STDOUT_ACCESS_LOG))?;
    }
    if log.error.stderr {
        force_symlink(Path::new(STDERR_DEVICE), Path::new(STDERR_ERROR_LOG))?;
    }
    if log.dir.create {
        ensure_dir(Path::new(&log.dir.path))?;
    }

    Ok(())
}

/// Creates a symlink at `dst` pointing to `src`, replacing whatever file or
/// link is already at `dst`.
///
/// # Errors
///
/// Returns [`Error::DestinationIsDirectory`] if `dst` is a directory, and
/// [`Error::Filesystem`] if the old entry cannot be removed or the link
/// cannot be created.
pub fn force_symlink(src: &Path, dst: &Path) -> Result<()> {
    if dst.is_dir() {
        return Err(Error::DestinationIsDirectory {
            path: dst.to_path_buf(),
        });
    }

    // symlink_metadata also sees dangling links
    if fs::symlink_metadata(dst).is_ok() {
        fs::remove_file(dst).map_err(|source| Error::Filesystem {
            action: "cannot delete",
            path: dst.to_path_buf(),
            source,
        })?;
    }

    symlink(src, dst).map_err(|source| Error::Filesystem {
        action: "cannot create link",
        path: dst.to_path_buf(),
        source,
    })?;

    log::debug!("linked {} -> {}", dst.display(), src.display());
    Ok(())
}

/// Creates `dir` and its parents unless it already is a directory.
///
/// # Errors
///
/// Returns [`Error::Filesystem`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| Error::Filesystem {
        action: "cannot create directory",
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

#[cfg(windows)]
fn symlink(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}
