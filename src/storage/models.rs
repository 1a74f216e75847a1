//! Catalog record models for the persistence layer.
//!
//! These are the on-disk shapes of the JSON catalog. They are kept separate
//! from the domain and stats models so the file format can evolve without
//! touching the state machines.

use crate::domain::{HeaderInfo, Vertical};
use crate::stats::{ViewsModel, ViewsType};
use serde::{Deserialize, Serialize};

/// Header copy as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    pub title: String,
    pub subtitle: String,
    pub input_hint: String,
}

impl From<HeaderRecord> for HeaderInfo {
    fn from(record: HeaderRecord) -> Self {
        Self::new(record.title, record.subtitle, record.input_hint)
    }
}

/// A vertical as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalRecord {
    pub id: String,
    pub name: String,
}

impl From<VerticalRecord> for Vertical {
    fn from(record: VerticalRecord) -> Self {
        Self::new(record.id, record.name)
    }
}

/// View count of a single post or page as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewsRecord {
    pub id: i64,
    pub title: String,
    pub views: u64,
    pub kind: ViewsType,
    #[serde(default)]
    pub url: String,
}

impl From<ViewsRecord> for ViewsModel {
    fn from(record: ViewsRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            views: record.views,
            kind: record.kind,
            url: record.url,
        }
    }
}
