//! Fetch collaborators of the verticals step and their catalog-backed
//! implementations.
//!
//! The state machine depends only on the traits; the catalog implementations
//! let the demo binary run without a network.

pub mod catalog;
pub mod header_info;
pub mod verticals;

pub use catalog::{
    CatalogHeaderInfo, CatalogPostAndPageViews, CatalogVerticals, DEFAULT_MAX_SUGGESTIONS,
};
pub use header_info::FetchVerticalsHeaderInfo;
pub use verticals::FetchVerticals;
