//! Display blocks produced by stats use cases.
//!
//! A [`StatsBlock`] is either a titled list of [`BlockListItem`] rows or an
//! error. Links carry a [`LinkTarget`] which the owning use case turns into a
//! [`NavigationTarget`] when clicked.

use crate::domain::MessageKey;
use crate::stats::models::StatsGranularity;

/// Icon shown next to a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Posts,
    Pages,
}

impl Icon {
    /// Single-glyph rendering for terminal surfaces.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Posts => "✎",
            Self::Pages => "▤",
        }
    }
}

/// What a link row leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// The full posts & pages list.
    ViewPostsAndPages,
}

/// A row inside a [`StatsBlock::BlockList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockListItem {
    Title {
        text: MessageKey,
    },
    /// Placeholder for a block without entries.
    Empty,
    ListItemWithIcon {
        icon: Icon,
        text: String,
        value: String,
        show_divider: bool,
    },
    Link {
        text: MessageKey,
        target: LinkTarget,
    },
}

/// Result of a stats use case fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsBlock {
    BlockList { items: Vec<BlockListItem> },
    Error { message: String },
}

impl StatsBlock {
    /// Rows of a block list; empty for errors.
    #[must_use]
    pub fn items(&self) -> &[BlockListItem] {
        match self {
            Self::BlockList { items } => items,
            Self::Error { .. } => &[],
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Screen the host should open after a link click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    ViewPostsAndPages {
        granularity: StatsGranularity,
        /// Date the detail screen is anchored to, `YYYY-MM-DD`.
        selected_date: String,
    },
}
