//! Error types for siteflow.
//!
//! This module defines the crate-level error type [`SiteflowError`] and the
//! [`Result`] alias used throughout the crate, plus the error types reported by
//! fetch collaborators. Fetch errors are never surfaced to the presentation
//! layer as errors; the state machines turn them into state.

use thiserror::Error;

/// The main error type for siteflow operations.
///
/// Consolidates failures from catalog loading, configuration, theming and
/// misuse of the state machine. I/O errors convert automatically.
///
/// # Examples
///
/// ```
/// use siteflow::SiteflowError;
///
/// fn validate() -> Result<(), SiteflowError> {
///     Err(SiteflowError::Config("debounce_ms must be a number".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum SiteflowError {
    /// Reading or parsing the vertical/stats catalog failed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An operation was invoked before the screen reached a state that
    /// supports it (e.g. a query update before header info arrived).
    #[error("Not ready: {0}")]
    NotReady(&'static str),

    /// No async runtime was available to run background work.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// A specialized `Result` type for siteflow operations.
pub type Result<T> = std::result::Result<T, SiteflowError>;

/// Classification of a fetch failure reported by a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Unspecified failure.
    Generic,
    /// The remote end could not be reached.
    Network,
    /// The response could not be understood.
    InvalidResponse,
}

/// Header info could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch header info ({kind:?}): {}", .message.as_deref().unwrap_or("no details"))]
pub struct FetchHeaderInfoError {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

impl FetchHeaderInfoError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: Option<String>) -> Self {
        Self { kind, message }
    }
}

/// Vertical suggestions could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch verticals ({kind:?}): {}", .message.as_deref().unwrap_or("no details"))]
pub struct FetchVerticalsError {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

impl FetchVerticalsError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: Option<String>) -> Self {
        Self { kind, message }
    }

    /// Message shown alongside the error state, falling back to the kind.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("{:?}", self.kind).to_lowercase())
    }
}

/// Stats could not be fetched from the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch stats ({kind:?}): {}", .message.as_deref().unwrap_or("no details"))]
pub struct StatsError {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

impl StatsError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: Option<String>) -> Self {
        Self { kind, message }
    }
}
