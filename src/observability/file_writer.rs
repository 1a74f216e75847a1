//! Size-rotated trace file writer.
//!
//! Each exported batch is one line. Before a write, a file that has grown
//! past [`RotationPolicy::max_bytes`] is moved aside as a timestamped backup
//! and only the newest [`RotationPolicy::backups`] backups are kept.

use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Default rotation threshold (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated backups to keep.
pub const DEFAULT_BACKUPS: usize = 3;

/// When to rotate and how many backups survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            backups: DEFAULT_BACKUPS,
        }
    }
}

/// Thread-safe rotating writer.
///
/// The file is opened lazily on the first write, so construction never
/// touches the filesystem.
///
/// Backups are named `<file name>.<nanos since epoch>` with the timestamp
/// zero-padded, so lexical order is age order.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if needed.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotation, opening, writing, or
    /// flushing fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        let file = match writer.as_mut() {
            Some(file) => file,
            None => writer.insert(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            ),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|meta| meta.len() > self.policy.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.file_path.exists() {
            fs::rename(&self.file_path, self.next_backup_path()?)?;
        }
        self.cleanup_old_backups()
    }

    fn file_name(&self) -> io::Result<&str> {
        self.file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid trace file name"))
    }

    fn parent_dir(&self) -> &Path {
        match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn next_backup_path(&self) -> io::Result<PathBuf> {
        let file_name = self.file_name()?;
        let mut nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_nanos();

        loop {
            let candidate = self.parent_dir().join(format!("{file_name}.{nanos:020}"));
            if !candidate.exists() {
                return Ok(candidate);
            }
            nanos += 1;
        }
    }

    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let prefix = format!("{}.", self.file_name()?);

        let mut backups: Vec<PathBuf> = fs::read_dir(self.parent_dir())?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(&prefix))
                    .is_some_and(|suffix| suffix.bytes().all(|b| b.is_ascii_digit()))
            })
            .collect();

        // newest first
        backups.sort_unstable_by(|a, b| b.cmp(a));
        Ok(backups)
    }

    fn cleanup_old_backups(&self) -> io::Result<()> {
        for stale in self.backups()?.iter().skip(self.policy.backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
