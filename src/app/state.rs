//! Screen state of the verticals step and its pure row derivation.
//!
//! [`ScreenState`] is the single source of truth owned by the state machine.
//! Rows and published snapshots are derived from it on every transition and
//! never stored on their own.
//!
//! # Row Layout
//!
//! In content mode the rows are, top to bottom:
//! 1. Header (title and subtitle), only while the query is empty
//! 2. Search input
//! 3. Either a single suggestion error row, or one row per suggestion

use crate::app::modes::ScreenMode;
use crate::domain::{HeaderInfo, ListState, MessageKey, Vertical};
use crate::ui::viewmodel::{VerticalsListItem, VerticalsUiState};

/// Full state of the verticals screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    /// Header info is being fetched.
    AwaitingHeader,

    /// The last header fetch failed.
    HeaderFailed,

    /// Header info is known.
    Content {
        header: HeaderInfo,
        query: String,
        list_state: ListState<Vertical>,
    },
}

impl ScreenState {
    /// Content state right after the header arrived.
    #[must_use]
    pub fn initial_content(header: HeaderInfo) -> Self {
        Self::Content {
            header,
            query: String::new(),
            list_state: ListState::Ready(vec![]),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ScreenMode {
        match self {
            Self::AwaitingHeader => ScreenMode::FullscreenProgress,
            Self::HeaderFailed => ScreenMode::FullscreenError,
            Self::Content { .. } => ScreenMode::Content,
        }
    }

    /// Header info, once known.
    #[must_use]
    pub const fn header(&self) -> Option<&HeaderInfo> {
        match self {
            Self::Content { header, .. } => Some(header),
            _ => None,
        }
    }

    /// Current query, in content mode.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Content { query, .. } => Some(query),
            _ => None,
        }
    }

    /// Suggestion list state, in content mode.
    #[must_use]
    pub const fn list_state(&self) -> Option<&ListState<Vertical>> {
        match self {
            Self::Content { list_state, .. } => Some(list_state),
            _ => None,
        }
    }

    /// Derives the ordered rows for this state.
    ///
    /// # Returns
    ///
    /// An empty list outside content mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use siteflow::app::ScreenState;
    /// use siteflow::ui::viewmodel::VerticalsListItem;
    /// use siteflow::{HeaderInfo, ListState, Vertical};
    ///
    /// let state = ScreenState::Content {
    ///     header: HeaderInfo::new("Title", "Subtitle", "Hint"),
    ///     query: "la".to_string(),
    ///     list_state: ListState::Ready(vec![
    ///         Vertical::new("1", "Landscaping"),
    ///         Vertical::new("2", "Lawn Care"),
    ///     ]),
    /// };
    /// let rows = state.rows();
    /// assert_eq!(rows.len(), 3);
    /// assert!(matches!(rows[0], VerticalsListItem::SearchInput { .. }));
    /// assert!(matches!(rows[2], VerticalsListItem::Suggestion { show_divider: false, .. }));
    /// ```
    #[must_use]
    pub fn rows(&self) -> Vec<VerticalsListItem> {
        let Self::Content {
            header,
            query,
            list_state,
        } = self
        else {
            return vec![];
        };

        let mut rows = Vec::with_capacity(list_state.data().len() + 2);

        if query.is_empty() {
            rows.push(VerticalsListItem::Header {
                title: header.title.clone(),
                subtitle: header.subtitle.clone(),
            });
        }

        rows.push(VerticalsListItem::SearchInput {
            query: query.clone(),
            hint: header.input_hint.clone(),
            show_progress: list_state.is_loading(),
            show_clear_button: !query.is_empty(),
        });

        if list_state.is_error() {
            rows.push(VerticalsListItem::SuggestionError {
                message: MessageKey::FetchSuggestionsFailed,
                retry: MessageKey::Retry,
            });
        } else {
            let items = list_state.data();
            let last = items.len().saturating_sub(1);
            rows.extend(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, vertical)| VerticalsListItem::Suggestion {
                        id: vertical.id.clone(),
                        title: vertical.name.clone(),
                        show_divider: index != last,
                    }),
            );
        }

        rows
    }

    /// Snapshot published to subscribers.
    #[must_use]
    pub fn snapshot(&self) -> VerticalsUiState {
        VerticalsUiState {
            mode: self.mode(),
            show_skip_button: matches!(self, Self::Content { query, .. } if query.is_empty()),
            items: self.rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> HeaderInfo {
        HeaderInfo::new("title", "subtitle", "hint")
    }

    fn content(query: &str, list_state: ListState<Vertical>) -> ScreenState {
        ScreenState::Content {
            header: header(),
            query: query.to_string(),
            list_state,
        }
    }

    #[test]
    fn no_rows_outside_content() {
        for state in [ScreenState::AwaitingHeader, ScreenState::HeaderFailed] {
            let snapshot = state.snapshot();
            assert!(snapshot.items.is_empty());
            assert!(!snapshot.show_skip_button);
        }
        assert_eq!(ScreenState::AwaitingHeader.mode(), ScreenMode::FullscreenProgress);
        assert_eq!(ScreenState::HeaderFailed.mode(), ScreenMode::FullscreenError);
    }

    #[test]
    fn empty_query_shows_header_and_skip() {
        let snapshot = ScreenState::initial_content(header()).snapshot();
        assert_eq!(snapshot.mode, ScreenMode::Content);
        assert!(snapshot.show_skip_button);
        assert_eq!(
            snapshot.items,
            vec![
                VerticalsListItem::Header {
                    title: "title".to_string(),
                    subtitle: "subtitle".to_string(),
                },
                VerticalsListItem::SearchInput {
                    query: String::new(),
                    hint: "hint".to_string(),
                    show_progress: false,
                    show_clear_button: false,
                },
            ]
        );
    }

    #[test]
    fn loading_shows_progress_without_header() {
        let state = content("a", ListState::Ready(vec![]).into_loading());
        let snapshot = state.snapshot();
        assert!(!snapshot.show_skip_button);
        assert_eq!(
            snapshot.items,
            vec![VerticalsListItem::SearchInput {
                query: "a".to_string(),
                hint: "hint".to_string(),
                show_progress: true,
                show_clear_button: true,
            }]
        );
    }

    #[test]
    fn error_replaces_suggestions() {
        let previous = ListState::Ready(vec![Vertical::new("1", "one")]);
        let rows = content("a", previous.into_error("boom")).rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            VerticalsListItem::SuggestionError {
                message: MessageKey::FetchSuggestionsFailed,
                retry: MessageKey::Retry,
            }
        );
    }

    #[test]
    fn dividers_on_all_but_last_suggestion() {
        let items = vec![
            Vertical::new("1", "one"),
            Vertical::new("2", "two"),
            Vertical::new("3", "three"),
        ];
        let rows = content("t", ListState::Ready(items)).rows();
        let dividers: Vec<bool> = rows
            .iter()
            .filter_map(|row| match row {
                VerticalsListItem::Suggestion { show_divider, .. } => Some(*show_divider),
                _ => None,
            })
            .collect();
        assert_eq!(dividers, vec![true, true, false]);
    }
}
