//! Store abstraction for post/page view counts.

use crate::domain::StatsError;
use crate::stats::models::{PostAndPageViewsModel, Site, StatsGranularity};
use futures_util::future::BoxFuture;

/// Source of post/page view counts.
///
/// `fetch` goes to the network (or whatever backs the store) and refreshes the
/// cache; `cached` never blocks and returns the last stored page, if any.
pub trait PostAndPageViewsStore: Send + Sync {
    /// Fetches one page of view counts.
    ///
    /// # Parameters
    ///
    /// * `site` - Site whose stats are fetched
    /// * `page_size` - Maximum number of entries to return
    /// * `granularity` - Period to group by
    /// * `forced` - Bypass any freshness checks in the store
    fn fetch<'a>(
        &'a self,
        site: &'a Site,
        page_size: usize,
        granularity: StatsGranularity,
        forced: bool,
    ) -> BoxFuture<'a, Result<PostAndPageViewsModel, StatsError>>;

    /// Last page stored for these parameters.
    fn cached(
        &self,
        site: &Site,
        page_size: usize,
        granularity: StatsGranularity,
    ) -> Option<PostAndPageViewsModel>;
}
