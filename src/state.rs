//! State file path resolution and locked, atomic writes.
//!
//! When running in a git repository root, state files are stored in
//! `.git/inkstreak/` (automatically ignored). Otherwise they live in
//! `.inkstreak/` at the project root.

use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::{InkstreakError, Result};

const STATE_DIR_NAME: &str = "inkstreak";
const FALLBACK_STATE_DIR: &str = ".inkstreak";
const SNAPSHOT_LOG_FILENAME: &str = "snapshots.json";
pub const CONFIG_FILENAME: &str = ".inkstreak.toml";

/// Default lock timeout in milliseconds.
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5000;

/// Polling interval for lock acquisition in milliseconds.
const LOCK_POLL_INTERVAL_MS: u64 = 50;

/// Detect the state directory for the snapshot log.
///
/// Only the immediate project root is checked for `.git`.
#[must_use]
pub fn detect_state_dir(project_root: &Path) -> PathBuf {
    let git_dir = project_root.join(".git");
    if git_dir.is_dir() {
        git_dir.join(STATE_DIR_NAME)
    } else {
        project_root.join(FALLBACK_STATE_DIR)
    }
}

/// Default snapshot log path for the given project root.
#[must_use]
pub fn snapshot_log_path(project_root: &Path) -> PathBuf {
    detect_state_dir(project_root).join(SNAPSHOT_LOG_FILENAME)
}

/// Ensure the parent directory exists for a given path.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Discover the project root by walking up from `start`.
///
/// Markers checked at each level: a `.git/` directory, then `.inkstreak.toml`.
/// Returns `start` (canonicalized when possible) if no marker is found.
#[must_use]
pub fn discover_project_root(start: &Path) -> PathBuf {
    let abs_start = fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

    for ancestor in abs_start.ancestors() {
        if ancestor.join(".git").is_dir() {
            return ancestor.to_path_buf();
        }
        if ancestor.join(CONFIG_FILENAME).is_file() {
            return ancestor.to_path_buf();
        }
    }

    abs_start
}

// =============================================================================
// File Locking Utilities
// =============================================================================

/// Result of a locked save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Another process held the lock past the timeout; nothing was written.
    Skipped,
}

/// Error type for lock acquisition failures.
#[derive(Debug)]
pub enum LockError {
    /// Lock acquisition timed out.
    Timeout,
    /// I/O error during lock operation.
    Io(io::Error),
}

impl From<io::Error> for LockError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for LockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "lock acquisition timed out"),
            Self::Io(e) => write!(f, "lock I/O error: {e}"),
        }
    }
}

impl std::error::Error for LockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Timeout => None,
            Self::Io(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum LockMode {
    Shared,
    Exclusive,
}

fn try_lock_with_timeout(
    file: &File,
    mode: LockMode,
    timeout_ms: u64,
) -> std::result::Result<(), LockError> {
    let start = Instant::now();
    let timeout = Duration::from_millis(timeout_ms);
    let poll_interval = Duration::from_millis(LOCK_POLL_INTERVAL_MS);

    loop {
        let attempt = match mode {
            LockMode::Shared => file.try_lock_shared(),
            LockMode::Exclusive => file.try_lock(),
        };
        match attempt {
            Ok(()) => return Ok(()),
            Err(TryLockError::WouldBlock) => {
                if start.elapsed() >= timeout {
                    return Err(LockError::Timeout);
                }
                thread::sleep(poll_interval);
            }
            Err(TryLockError::Error(e)) => return Err(LockError::Io(e)),
        }
    }
}

/// Try to acquire an exclusive (write) lock on the file with timeout.
///
/// # Errors
/// - `LockError::Timeout` if lock cannot be acquired within `timeout_ms`
/// - `LockError::Io` for other I/O errors
pub fn try_lock_exclusive_with_timeout(
    file: &File,
    timeout_ms: u64,
) -> std::result::Result<(), LockError> {
    try_lock_with_timeout(file, LockMode::Exclusive, timeout_ms)
}

/// Try to acquire a shared (read) lock on the file with timeout.
///
/// # Errors
/// - `LockError::Timeout` if lock cannot be acquired within `timeout_ms`
/// - `LockError::Io` for other I/O errors
pub fn try_lock_shared_with_timeout(
    file: &File,
    timeout_ms: u64,
) -> std::result::Result<(), LockError> {
    try_lock_with_timeout(file, LockMode::Shared, timeout_ms)
}

/// Sidecar lock file guarding `path`.
///
/// Locking a sidecar instead of the data file keeps the lock valid across
/// the rename performed by [`atomic_write_with_lock`].
#[must_use]
pub fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}

fn open_lock_file(path: &Path) -> io::Result<File> {
    let lock = lock_path(path);
    ensure_parent_dir(&lock)?;
    OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(lock)
}

/// RAII shared lock; unlocks on drop.
///
/// Acquisition failures are logged and tolerated so a stuck writer never
/// blocks reads forever.
#[derive(Debug)]
pub struct SharedLockGuard {
    file: Option<File>,
}

impl SharedLockGuard {
    #[must_use]
    pub fn try_acquire(path: &Path, timeout_ms: u64, what: &str) -> Self {
        let file = match open_lock_file(path) {
            Ok(file) => file,
            Err(e) => {
                log::debug!("cannot open lock for {what} {}: {e}", path.display());
                return Self { file: None };
            }
        };

        match try_lock_shared_with_timeout(&file, timeout_ms) {
            Ok(()) => Self { file: Some(file) },
            Err(e) => {
                log::warn!("reading {what} {} without lock: {e}", path.display());
                Self { file: None }
            }
        }
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.file.is_some()
    }
}

impl Drop for SharedLockGuard {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            unlock_file(file);
        }
    }
}

/// Write `contents` to `path` atomically under an exclusive lock.
///
/// 1. Write to a temporary file next to the target
/// 2. Acquire the exclusive lock
/// 3. Rename temp over target
///
/// The original file is untouched on any failure.
///
/// # Errors
/// Returns an error if the temp file cannot be written or renamed. A lock
/// timeout is reported as `SaveOutcome::Skipped`, not an error.
pub fn atomic_write_with_lock(path: &Path, contents: &[u8], what: &str) -> Result<SaveOutcome> {
    let access = |source| InkstreakError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    ensure_parent_dir(path).map_err(access)?;

    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(format!(".tmp.{}", std::process::id()));
    let tmp_path = path.with_file_name(tmp_name);

    {
        let mut tmp = File::create(&tmp_path).map_err(access)?;
        tmp.write_all(contents).map_err(access)?;
        tmp.sync_all().map_err(access)?;
    }

    let lock_file = open_lock_file(path).map_err(access)?;
    match try_lock_exclusive_with_timeout(&lock_file, DEFAULT_LOCK_TIMEOUT_MS) {
        Ok(()) => {}
        Err(LockError::Timeout) => {
            let _ = fs::remove_file(&tmp_path);
            log::warn!("skipped writing {what} {}: lock timed out", path.display());
            return Ok(SaveOutcome::Skipped);
        }
        Err(LockError::Io(e)) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(access(e));
        }
    }

    let renamed = fs::rename(&tmp_path, path);
    unlock_file(&lock_file);
    if let Err(e) = renamed {
        let _ = fs::remove_file(&tmp_path);
        return Err(access(e));
    }

    log::debug!("wrote {what} {}", path.display());
    Ok(SaveOutcome::Saved)
}

/// Unlock a file, releasing any held lock. Failures are ignored.
pub fn unlock_file(file: &File) {
    let _ = file.unlock();
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
