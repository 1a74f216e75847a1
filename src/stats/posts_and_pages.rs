//! Posts & pages stats block.
//!
//! Fetches the most viewed posts and pages of a site from a
//! [`PostAndPageViewsStore`] and maps them into a [`StatsBlock`]. The latest
//! block and the latest navigation request are published on
//! [`tokio::sync::watch`] channels so a surface can observe them.

use crate::domain::{MessageKey, StatsError};
use crate::stats::block::{BlockListItem, Icon, LinkTarget, NavigationTarget, StatsBlock};
use crate::stats::format::{to_formatted_string, StatsDateFormatter};
use crate::stats::models::{PostAndPageViewsModel, Site, StatsGranularity, ViewsType};
use crate::stats::store::PostAndPageViewsStore;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::Instrument;

/// Number of entries shown in the block.
pub const PAGE_SIZE: usize = 6;

/// Use case behind the posts & pages block of the stats screen.
///
/// # Examples
///
/// ```no_run
/// use siteflow::stats::{LocalDateFormatter, PostsAndPagesUseCase, Site, StatsGranularity};
/// # async fn demo(store: std::sync::Arc<dyn siteflow::stats::PostAndPageViewsStore>) {
/// let use_case = PostsAndPagesUseCase::new(
///     StatsGranularity::Days,
///     store,
///     std::sync::Arc::new(LocalDateFormatter),
/// );
/// let block = use_case.fetch(&Site::new(1, "example.com"), true, false).await;
/// # }
/// ```
pub struct PostsAndPagesUseCase {
    granularity: StatsGranularity,
    store: Arc<dyn PostAndPageViewsStore>,
    date_formatter: Arc<dyn StatsDateFormatter>,
    block_tx: watch::Sender<Option<StatsBlock>>,
    navigation_tx: watch::Sender<Option<NavigationTarget>>,
}

impl PostsAndPagesUseCase {
    #[must_use]
    pub fn new(
        granularity: StatsGranularity,
        store: Arc<dyn PostAndPageViewsStore>,
        date_formatter: Arc<dyn StatsDateFormatter>,
    ) -> Self {
        let (block_tx, _) = watch::channel(None);
        let (navigation_tx, _) = watch::channel(None);
        Self {
            granularity,
            store,
            date_formatter,
            block_tx,
            navigation_tx,
        }
    }

    #[must_use]
    pub const fn granularity(&self) -> StatsGranularity {
        self.granularity
    }

    /// Receiver of every block this use case publishes.
    #[must_use]
    pub fn blocks(&self) -> watch::Receiver<Option<StatsBlock>> {
        self.block_tx.subscribe()
    }

    /// Receiver of navigation requests raised by link clicks.
    #[must_use]
    pub fn navigation_targets(&self) -> watch::Receiver<Option<NavigationTarget>> {
        self.navigation_tx.subscribe()
    }

    /// Loads the block, publishes it and returns it.
    ///
    /// # Parameters
    ///
    /// * `site` - Site whose stats are shown
    /// * `refresh` - Go to the store even when a cached page exists
    /// * `forced` - Passed through to the store to bypass its freshness checks
    pub async fn fetch(&self, site: &Site, refresh: bool, forced: bool) -> StatsBlock {
        let span = tracing::debug_span!(
            "posts_and_pages_fetch",
            site_id = site.id,
            refresh,
            forced,
            granularity = ?self.granularity
        );

        async {
            let cached = if refresh {
                None
            } else {
                self.store.cached(site, PAGE_SIZE, self.granularity)
            };

            let result = match cached {
                Some(model) => {
                    tracing::debug!(entries = model.views.len(), "using cached posts and pages");
                    Ok(model)
                }
                None => {
                    let result = self
                        .store
                        .fetch(site, PAGE_SIZE, self.granularity, forced)
                        .await;
                    tracing::debug!(ok = result.is_ok(), "posts and pages fetched from store");
                    result
                }
            };

            let block = Self::map(result);
            self.block_tx.send_replace(Some(block.clone()));
            block
        }
        .instrument(span)
        .await
    }

    /// Handles a click on a link row.
    pub fn navigate(&self, target: LinkTarget) {
        let navigation = match target {
            LinkTarget::ViewPostsAndPages => NavigationTarget::ViewPostsAndPages {
                granularity: self.granularity,
                selected_date: self.date_formatter.todays_date_in_stats_format(),
            },
        };
        tracing::debug!(?navigation, "navigation requested");
        self.navigation_tx.send_replace(Some(navigation));
    }

    fn map(result: Result<PostAndPageViewsModel, StatsError>) -> StatsBlock {
        let model = match result {
            Ok(model) => model,
            Err(err) => {
                tracing::debug!(error = %err, "posts and pages fetch failed");
                return StatsBlock::Error {
                    message: err
                        .message
                        .unwrap_or_else(|| MessageKey::StatsGenericError.text().to_string()),
                };
            }
        };

        let mut items = vec![BlockListItem::Title {
            text: MessageKey::StatsPostsAndPages,
        }];

        if model.views.is_empty() {
            items.push(BlockListItem::Empty);
        } else {
            let last = model.views.len() - 1;
            items.extend(model.views.into_iter().enumerate().map(|(index, view)| {
                let icon = match view.kind {
                    ViewsType::Post => Icon::Posts,
                    ViewsType::Page | ViewsType::Homepage => Icon::Pages,
                };
                BlockListItem::ListItemWithIcon {
                    icon,
                    text: view.title,
                    value: to_formatted_string(view.views),
                    show_divider: index < last,
                }
            }));
        }

        if model.has_more {
            items.push(BlockListItem::Link {
                text: MessageKey::ViewMore,
                target: LinkTarget::ViewPostsAndPages,
            });
        }

        StatsBlock::BlockList { items }
    }
}
