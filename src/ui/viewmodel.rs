//! View model types representing renderable screen state.
//!
//! Rows and snapshots are computed from the screen state by the state machine
//! and consumed by the renderer. They contain no business logic, only
//! display-ready data.
//!
//! # Example
//!
//! ```rust
//! use siteflow::app::ScreenMode;
//! use siteflow::ui::viewmodel::{VerticalsListItem, VerticalsUiState};
//!
//! let snapshot = VerticalsUiState {
//!     mode: ScreenMode::Content,
//!     show_skip_button: false,
//!     items: vec![VerticalsListItem::Suggestion {
//!         id: "p1v1".to_string(),
//!         title: "Landscaping".to_string(),
//!         show_divider: false,
//!     }],
//! };
//! assert_eq!(snapshot.suggestions().count(), 1);
//! ```

use crate::app::modes::ScreenMode;
use crate::domain::MessageKey;

/// One row of the verticals screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerticalsListItem {
    /// Title block, shown only while the query is empty.
    Header { title: String, subtitle: String },

    /// The search field.
    SearchInput {
        query: String,
        /// Placeholder shown while `query` is empty.
        hint: String,
        /// A suggestion fetch is pending.
        show_progress: bool,
        show_clear_button: bool,
    },

    /// A selectable suggestion.
    Suggestion {
        id: String,
        title: String,
        /// Draw a separator under this row; false for the last suggestion.
        show_divider: bool,
    },

    /// Inline error replacing the suggestions after a failed fetch.
    SuggestionError { message: MessageKey, retry: MessageKey },
}

/// Identity of a row for list diffing.
///
/// Header, search input and error rows are singletons; suggestions are keyed
/// by vertical id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowIdentity {
    Header,
    SearchInput,
    Suggestion(String),
    SuggestionError,
}

impl VerticalsListItem {
    /// Identity of this row.
    #[must_use]
    pub fn identity(&self) -> RowIdentity {
        match self {
            Self::Header { .. } => RowIdentity::Header,
            Self::SearchInput { .. } => RowIdentity::SearchInput,
            Self::Suggestion { id, .. } => RowIdentity::Suggestion(id.clone()),
            Self::SuggestionError { .. } => RowIdentity::SuggestionError,
        }
    }
}

/// Snapshot published by the verticals state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerticalsUiState {
    pub mode: ScreenMode,
    /// True only in content mode with an empty query.
    pub show_skip_button: bool,
    /// Rows to display; empty outside content mode.
    pub items: Vec<VerticalsListItem>,
}

impl VerticalsUiState {
    /// Suggestion rows as `(id, title)` pairs in display order.
    pub fn suggestions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().filter_map(|item| match item {
            VerticalsListItem::Suggestion { id, title, .. } => Some((id.as_str(), title.as_str())),
            _ => None,
        })
    }

    /// Current query, taken from the search input row.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            VerticalsListItem::SearchInput { query, .. } => Some(query.as_str()),
            _ => None,
        })
    }
}
