//! Collaborators backed by a [`Catalog`].
//!
//! These stand in for remote services: header copy and post/page view counts
//! are read straight from the catalog, suggestions are ranked with the Skim
//! fuzzy matcher. An optional artificial latency makes the loading states
//! visible in the terminal demo.

use crate::domain::{
    ErrorKind, FetchHeaderInfoError, FetchVerticalsError, HeaderInfo, StatsError, Vertical,
};
use crate::stats::{PostAndPageViewsModel, PostAndPageViewsStore, Site, StatsGranularity};
use crate::storage::Catalog;
use crate::usecases::{FetchVerticals, FetchVerticalsHeaderInfo};
use futures_util::future::{BoxFuture, FutureExt};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Default cap on the number of suggestions returned for one query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// Header info read from the catalog.
pub struct CatalogHeaderInfo {
    catalog: Arc<dyn Catalog>,
    latency: Duration,
}

impl CatalogHeaderInfo {
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            latency: Duration::ZERO,
        }
    }

    /// Delays every fetch by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl FetchVerticalsHeaderInfo for CatalogHeaderInfo {
    fn fetch_header_info(&self) -> BoxFuture<'_, Result<HeaderInfo, FetchHeaderInfoError>> {
        async move {
            simulate_latency(self.latency).await;
            self.catalog.header_info().ok_or_else(|| {
                FetchHeaderInfoError::new(
                    ErrorKind::Generic,
                    Some("catalog has no header".to_string()),
                )
            })
        }
        .boxed()
    }
}

/// Vertical suggestions ranked by fuzzy match against the catalog.
pub struct CatalogVerticals {
    catalog: Arc<dyn Catalog>,
    max_suggestions: usize,
    latency: Duration,
}

impl CatalogVerticals {
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            latency: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Delays every fetch by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Ranks catalog verticals against `query`.
    ///
    /// Every whitespace-separated token must fuzzy-match the lowercased name.
    /// Results are ordered by total score (best first), ties broken by name.
    /// A blank query yields no suggestions.
    ///
    /// # Examples
    ///
    /// ```
    /// use siteflow::storage::JsonCatalog;
    /// use siteflow::usecases::CatalogVerticals;
    /// use std::sync::Arc;
    ///
    /// let catalog = Arc::new(JsonCatalog::bundled()?);
    /// let verticals = CatalogVerticals::new(catalog);
    /// assert!(verticals.search("   ").is_empty());
    /// assert_eq!(verticals.search("landsc")[0].name, "Landscaping");
    /// # Ok::<(), siteflow::SiteflowError>(())
    /// ```
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Vertical> {
        let _span = tracing::debug_span!("catalog_search", query_len = query.len()).entered();

        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return vec![];
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, Vertical)> = self
            .catalog
            .verticals()
            .into_iter()
            .filter_map(|vertical| {
                let name_lower = vertical.name.to_lowercase();
                tokens
                    .iter()
                    .map(|token| matcher.fuzzy_match(&name_lower, token))
                    .sum::<Option<i64>>()
                    .map(|score| (score, vertical))
            })
            .collect();

        scored.sort_by(|(a_score, a), (b_score, b)| {
            b_score.cmp(a_score).then_with(|| a.name.cmp(&b.name))
        });
        scored.truncate(self.max_suggestions);

        tracing::debug!(matches = scored.len(), "catalog search finished");
        scored.into_iter().map(|(_, vertical)| vertical).collect()
    }
}

impl FetchVerticals for CatalogVerticals {
    fn fetch_verticals<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Vertical>, FetchVerticalsError>> {
        async move {
            simulate_latency(self.latency).await;
            Ok(self.search(query))
        }
        .boxed()
    }
}

type CacheKey = (i64, usize, StatsGranularity);

/// Post/page view counts read from the catalog.
///
/// The catalog has no notion of periods, so every granularity sees the same
/// entries. The last page fetched per site, page size and granularity is
/// kept as the cache.
pub struct CatalogPostAndPageViews {
    catalog: Arc<dyn Catalog>,
    cache: Mutex<HashMap<CacheKey, PostAndPageViewsModel>>,
    latency: Duration,
}

impl CatalogPostAndPageViews {
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            cache: Mutex::new(HashMap::new()),
            latency: Duration::ZERO,
        }
    }

    /// Delays every fetch by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl PostAndPageViewsStore for CatalogPostAndPageViews {
    fn fetch<'a>(
        &'a self,
        site: &'a Site,
        page_size: usize,
        granularity: StatsGranularity,
        forced: bool,
    ) -> BoxFuture<'a, Result<PostAndPageViewsModel, StatsError>> {
        async move {
            tracing::debug!(site_id = site.id, page_size, ?granularity, forced, "fetching posts and pages");
            simulate_latency(self.latency).await;

            let all = self.catalog.posts_and_pages();
            let has_more = all.len() > page_size;
            let model =
                PostAndPageViewsModel::new(all.into_iter().take(page_size).collect(), has_more);

            self.cache
                .lock()
                .insert((site.id, page_size, granularity), model.clone());
            Ok(model)
        }
        .boxed()
    }

    fn cached(
        &self,
        site: &Site,
        page_size: usize,
        granularity: StatsGranularity,
    ) -> Option<PostAndPageViewsModel> {
        self.cache
            .lock()
            .get(&(site.id, page_size, granularity))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonCatalog;

    fn catalog(json: &str) -> Arc<dyn Catalog> {
        Arc::new(JsonCatalog::from_json(json).unwrap())
    }

    const VERTICALS: &str = r#"{
        "version": 1,
        "verticals": [
            { "id": "1", "name": "Landscaping" },
            { "id": "2", "name": "Lawn Care" },
            { "id": "3", "name": "Consulting" },
            { "id": "4", "name": "Legal Services" }
        ]
    }"#;

    #[test]
    fn blank_query_has_no_suggestions() {
        let verticals = CatalogVerticals::new(catalog(VERTICALS));
        assert!(verticals.search("").is_empty());
        assert!(verticals.search("  \t ").is_empty());
    }

    #[test]
    fn ranks_and_filters_by_fuzzy_match() {
        let verticals = CatalogVerticals::new(catalog(VERTICALS));
        let names: Vec<String> = verticals
            .search("lawn")
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("Lawn Care"));
        assert!(!names.contains(&"Consulting".to_string()));
    }

    #[test]
    fn every_token_must_match() {
        let verticals = CatalogVerticals::new(catalog(VERTICALS));
        let result = verticals.search("legal serv");
        assert_eq!(result, vec![Vertical::new("4", "Legal Services")]);
        assert!(verticals.search("legal zzz").is_empty());
    }

    #[test]
    fn caps_suggestions() {
        let verticals = CatalogVerticals::new(catalog(VERTICALS)).with_max_suggestions(1);
        assert_eq!(verticals.search("l").len(), 1);
    }

    #[tokio::test]
    async fn missing_header_is_generic_error() {
        let header = CatalogHeaderInfo::new(catalog(r#"{ "version": 1 }"#));
        let err = header.fetch_header_info().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Generic);
    }

    #[tokio::test]
    async fn posts_and_pages_pages_and_caches() {
        let store = CatalogPostAndPageViews::new(catalog(
            r#"{
                "version": 1,
                "posts_and_pages": [
                    { "id": 1, "title": "a", "views": 3, "kind": "post" },
                    { "id": 2, "title": "b", "views": 2, "kind": "page" },
                    { "id": 3, "title": "c", "views": 1, "kind": "homepage" }
                ]
            }"#,
        ));
        let site = Site::new(9, "example.com");

        assert!(store.cached(&site, 2, StatsGranularity::Days).is_none());

        let model = store
            .fetch(&site, 2, StatsGranularity::Days, false)
            .await
            .unwrap();
        assert_eq!(model.views.len(), 2);
        assert!(model.has_more);

        assert_eq!(store.cached(&site, 2, StatsGranularity::Days), Some(model));
        assert!(store.cached(&site, 2, StatsGranularity::Weeks).is_none());

        let full = store
            .fetch(&site, 6, StatsGranularity::Days, true)
            .await
            .unwrap();
        assert_eq!(full.views.len(), 3);
        assert!(!full.has_more);
    }
}
