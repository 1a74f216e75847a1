//! Stats screen blocks.
//!
//! # Modules
//!
//! - `models`: Site, granularity and view count models
//! - `store`: Store trait the use cases fetch from
//! - `block`: Display blocks and navigation targets
//! - `format`: Count and date formatting
//! - `posts_and_pages`: The posts & pages block use case

pub mod block;
pub mod format;
pub mod models;
pub mod posts_and_pages;
pub mod store;

pub use block::{BlockListItem, Icon, LinkTarget, NavigationTarget, StatsBlock};
pub use format::{
    to_formatted_string, FixedDateFormatter, LocalDateFormatter, StatsDateFormatter,
    STATS_DATE_FORMAT,
};
pub use models::{PostAndPageViewsModel, Site, StatsGranularity, ViewsModel, ViewsType};
pub use posts_and_pages::{PostsAndPagesUseCase, PAGE_SIZE};
pub use store::PostAndPageViewsStore;
