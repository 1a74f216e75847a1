//! Resource keys for user-facing copy.
//!
//! Rows and blocks carry a [`MessageKey`] instead of literal text so a
//! surface can localize them. [`MessageKey::text`] returns the built-in
//! English copy used by the terminal renderer.

use serde::{Deserialize, Serialize};

/// Key of a piece of user-facing copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    /// Inline error shown when suggestions could not be fetched.
    FetchSuggestionsFailed,
    /// Label of the retry affordance.
    Retry,
    /// Label of the skip affordance on the verticals step.
    Skip,
    /// Full-screen error shown when header info could not be fetched.
    HeaderFailed,
    /// Title of the posts & pages stats block.
    StatsPostsAndPages,
    /// Label of the "view more" link under a stats block.
    ViewMore,
    /// Placeholder shown by an empty stats block.
    StatsEmpty,
    /// Fallback text for a stats error without details.
    StatsGenericError,
}

impl MessageKey {
    /// Built-in English copy for this key.
    ///
    /// # Examples
    ///
    /// ```
    /// use siteflow::MessageKey;
    ///
    /// assert_eq!(MessageKey::Retry.text(), "Retry");
    /// ```
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::FetchSuggestionsFailed => "Couldn't load suggestions",
            Self::Retry => "Retry",
            Self::Skip => "Skip",
            Self::HeaderFailed => "There was a problem loading this step",
            Self::StatsPostsAndPages => "Posts & Pages",
            Self::ViewMore => "View more",
            Self::StatsEmpty => "No data yet",
            Self::StatsGenericError => "An error occurred while loading stats",
        }
    }
}
