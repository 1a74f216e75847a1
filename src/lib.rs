//! siteflow: presentation flows for a site-building application.
//!
//! The crate covers two screens:
//! - the **verticals step** of new-site onboarding, where a typed query
//!   produces live, debounced and cancelable site-category suggestions
//! - the **posts & pages stats block**, which turns view counts into display
//!   rows

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Demo binary (main.rs)                              │  ← stdin events, ANSI frames
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← VerticalsViewModel
//! │  - Debounce and cancellation                        │
//! │  - Snapshot publication                             │
//! │  - Event handling, host actions                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Use cases     │   │ Stats         │
//! │ (ui/)         │   │ (usecases/)   │   │ (stats/)      │
//! │ - Rows, diff  │   │ - Fetch traits│   │ - Block rows  │
//! │ - Rendering   │   │ - Catalog impl│   │ - Store trait │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage, Domain & Infrastructure                   │
//! │  - JSON catalog (storage/)                          │
//! │  - Verticals, list state, errors (domain/)          │
//! │  - Data dir (infrastructure/)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use siteflow::app::{handle_event, Event, VerticalsViewModel};
//! use siteflow::storage::JsonCatalog;
//! use siteflow::usecases::{CatalogHeaderInfo, CatalogVerticals};
//! use std::sync::Arc;
//!
//! # async fn demo() -> siteflow::Result<()> {
//! let catalog = Arc::new(JsonCatalog::bundled()?);
//! let vm = VerticalsViewModel::with_current_runtime(
//!     Arc::new(CatalogHeaderInfo::new(catalog.clone())),
//!     Arc::new(CatalogVerticals::new(catalog)),
//! )?;
//!
//! let mut states = vm.subscribe();
//! vm.start();
//! let first = states.next().await;
//!
//! handle_event(&vm, &Event::QueryChanged("garden".to_string()))?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod usecases;

pub use app::{handle_event, Action, Event, StateSubscription, VerticalsViewModel};
pub use domain::{HeaderInfo, ListState, MessageKey, Result, SiteflowError, Vertical};
pub use ui::Theme;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the catalog file inside the data directory.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Runtime configuration.
///
/// Built from a flat key/value map ([`Config::from_map`]) or a TOML file
/// ([`Config::from_toml_file`]). Missing keys keep their defaults.
///
/// # Example
///
/// ```toml
/// catalog_path = "~/siteflow/catalog.json"
/// debounce_ms = 300
/// max_suggestions = 8
/// theme = "catppuccin-latte"
/// trace_level = "siteflow=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog JSON file. Default: `catalog.json` in the data directory,
    /// seeded from the bundled copy.
    pub catalog_path: Option<PathBuf>,

    /// Debounce between the last keystroke and the suggestion fetch.
    /// Default: 500
    pub debounce_ms: u64,

    /// Maximum number of suggestions returned per query. Default: 10
    pub max_suggestions: usize,

    /// Built-in theme name. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<PathBuf>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Trace file size that triggers rotation. Default: 10 MiB
    pub trace_max_bytes: u64,

    /// Rotated trace files to keep. Default: 3
    pub trace_backups: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            debounce_ms: app::DEFAULT_DEBOUNCE.as_millis() as u64,
            max_suggestions: usecases::DEFAULT_MAX_SUGGESTIONS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            trace_max_bytes: observability::DEFAULT_MAX_BYTES,
            trace_backups: observability::DEFAULT_BACKUPS,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// Unknown keys are ignored. Numbers that fail to parse fall back to
    /// their defaults. Paths starting with `~/` are expanded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use siteflow::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    /// map.insert("max_suggestions".to_string(), "many".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce_ms, 250);
    /// assert_eq!(config.max_suggestions, 10);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let number = |key: &str| map.get(key).and_then(|v| v.trim().parse().ok());

        let config = Self {
            catalog_path: text("catalog_path").map(PathBuf::from),
            debounce_ms: number("debounce_ms").unwrap_or(defaults.debounce_ms),
            max_suggestions: map
                .get("max_suggestions")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_suggestions),
            theme_name: text("theme"),
            theme_file: text("theme_file").map(PathBuf::from),
            trace_level: text("trace_level"),
            trace_max_bytes: number("trace_max_bytes").unwrap_or(defaults.trace_max_bytes),
            trace_backups: map
                .get("trace_backups")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.trace_backups),
        };
        config.with_expanded_paths()
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SiteflowError::Config`] for invalid TOML, unknown keys or
    /// values of the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| SiteflowError::Config(format!("failed to parse config TOML: {e}")))?;
        Ok(config.with_expanded_paths())
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SiteflowError::Config`] if the file cannot be read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SiteflowError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        tracing::debug!(path = ?path, "loaded config file");
        Self::from_toml_str(&contents)
    }

    fn with_expanded_paths(mut self) -> Self {
        let expand = |p: PathBuf| match p.to_str() {
            Some(s) => infrastructure::expand_tilde(s),
            None => p,
        };
        self.catalog_path = self.catalog_path.map(expand);
        self.theme_file = self.theme_file.map(expand);
        self
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Configured catalog path, or the default one in the data directory.
    #[must_use]
    pub fn resolved_catalog_path(&self) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| infrastructure::get_data_dir().join(CATALOG_FILE_NAME))
    }

    /// Resolves the configured theme.
    ///
    /// # Errors
    ///
    /// Returns [`SiteflowError::Theme`] for an unreadable theme file or an
    /// unknown theme name.
    pub fn load_theme(&self) -> Result<Theme> {
        Theme::load(self.theme_name.as_deref(), self.theme_file.as_deref())
    }
}
