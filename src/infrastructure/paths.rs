//! Data directory resolution and `~` expansion.
//!
//! The data directory holds the writable catalog copy and the trace file.
//! It is resolved from, in order:
//!
//! 1. `SITEFLOW_DATA_DIR`
//! 2. `$XDG_DATA_HOME/siteflow`
//! 3. `~/.local/share/siteflow`
//! 4. `./.siteflow` when no home directory is known

use std::env;
use std::path::{Path, PathBuf};

/// Overrides the data directory.
pub const DATA_DIR_ENV: &str = "SITEFLOW_DATA_DIR";

const APP_DIR: &str = "siteflow";

/// Returns the data directory for siteflow.
///
/// The directory is not created.
///
/// # Examples
///
/// ```
/// use siteflow::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("siteflow") || std::env::var_os("SITEFLOW_DATA_DIR").is_some());
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        home_dir().as_deref(),
    )
}

fn resolve_data_dir(
    override_dir: Option<PathBuf>,
    xdg_data_home: Option<PathBuf>,
    home: Option<&Path>,
) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return dir;
    }
    // XDG requires an absolute path; relative values are ignored.
    if let Some(xdg) = xdg_data_home.filter(|d| d.is_absolute()) {
        return xdg.join(APP_DIR);
    }
    match home {
        Some(home) => home.join(".local").join("share").join(APP_DIR),
        None => PathBuf::from(".").join(format!(".{APP_DIR}")),
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Expands a leading `~` to `$HOME`.
///
/// Paths without a leading `~`, and `~user` forms, are returned unchanged.
/// Without `HOME` set, the path is returned unchanged.
///
/// # Examples
///
/// ```
/// use siteflow::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, home_dir().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (home, path) {
        (Some(home), "~") => home.to_path_buf(),
        (Some(home), _) if path.starts_with("~/") => home.join(&path[2..]),
        _ => PathBuf::from(path),
    }
}
