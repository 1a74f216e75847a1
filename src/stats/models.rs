//! Stats domain models.

use serde::{Deserialize, Serialize};

/// The site whose stats are requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub url: String,
}

impl Site {
    #[must_use]
    pub fn new(id: i64, url: impl Into<String>) -> Self {
        Self { id, url: url.into() }
    }
}

/// Period stats are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsGranularity {
    Days,
    Weeks,
    Months,
    Years,
}

/// What a views entry counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewsType {
    Post,
    Page,
    Homepage,
}

/// View count of one post or page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewsModel {
    pub id: i64,
    pub title: String,
    pub views: u64,
    pub kind: ViewsType,
    pub url: String,
}

impl ViewsModel {
    #[must_use]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        views: u64,
        kind: ViewsType,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            views,
            kind,
            url: url.into(),
        }
    }
}

/// One page of post/page view counts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostAndPageViewsModel {
    pub views: Vec<ViewsModel>,
    /// More entries exist beyond this page.
    pub has_more: bool,
}

impl PostAndPageViewsModel {
    #[must_use]
    pub fn new(views: Vec<ViewsModel>, has_more: bool) -> Self {
        Self { views, has_more }
    }
}
