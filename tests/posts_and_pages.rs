//! Posts & pages block mapping, caching and navigation.

use chrono::NaiveDate;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use parking_lot::Mutex;
use siteflow::domain::{ErrorKind, StatsError};
use siteflow::stats::{
    BlockListItem, FixedDateFormatter, Icon, LinkTarget, NavigationTarget, PostAndPageViewsModel,
    PostAndPageViewsStore, PostsAndPagesUseCase, Site, StatsBlock, StatsGranularity, ViewsModel,
    ViewsType, PAGE_SIZE,
};
use siteflow::MessageKey;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct FakeStore {
    result: Result<PostAndPageViewsModel, StatsError>,
    cached: Mutex<Option<PostAndPageViewsModel>>,
    fetches: AtomicUsize,
    last_request: Mutex<Option<(usize, StatsGranularity, bool)>>,
}

impl FakeStore {
    fn returning(result: Result<PostAndPageViewsModel, StatsError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            cached: Mutex::new(None),
            fetches: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }
}

impl PostAndPageViewsStore for FakeStore {
    fn fetch<'a>(
        &'a self,
        _site: &'a Site,
        page_size: usize,
        granularity: StatsGranularity,
        forced: bool,
    ) -> BoxFuture<'a, Result<PostAndPageViewsModel, StatsError>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some((page_size, granularity, forced));
        let result = self.result.clone();
        async move { result }.boxed()
    }

    fn cached(
        &self,
        _site: &Site,
        _page_size: usize,
        _granularity: StatsGranularity,
    ) -> Option<PostAndPageViewsModel> {
        self.cached.lock().clone()
    }
}

fn site() -> Site {
    Site::new(3, "site.example")
}

fn use_case(store: Arc<FakeStore>) -> PostsAndPagesUseCase {
    let date = NaiveDate::from_ymd_opt(2018, 10, 10).unwrap();
    PostsAndPagesUseCase::new(
        StatsGranularity::Days,
        store,
        Arc::new(FixedDateFormatter(date)),
    )
}

fn views(kind: ViewsType, views: u64) -> ViewsModel {
    ViewsModel::new(1, "Title", views, kind, "url")
}

fn title() -> BlockListItem {
    BlockListItem::Title {
        text: MessageKey::StatsPostsAndPages,
    }
}

#[tokio::test]
async fn store_error_message_becomes_error_block() {
    let store = FakeStore::returning(Err(StatsError::new(
        ErrorKind::Network,
        Some("Site is private".to_string()),
    )));
    let block = use_case(store).fetch(&site(), true, false).await;

    assert_eq!(
        block,
        StatsBlock::Error {
            message: "Site is private".to_string()
        }
    );
    assert!(block.items().is_empty());
}

#[tokio::test]
async fn error_without_message_uses_generic_text() {
    let store = FakeStore::returning(Err(StatsError::new(ErrorKind::Generic, None)));
    let block = use_case(store).fetch(&site(), true, false).await;

    assert_eq!(
        block,
        StatsBlock::Error {
            message: MessageKey::StatsGenericError.text().to_string()
        }
    );
}

#[tokio::test]
async fn no_views_gives_title_and_empty() {
    let store = FakeStore::returning(Ok(PostAndPageViewsModel::new(vec![], false)));
    let block = use_case(store).fetch(&site(), true, false).await;

    assert_eq!(block.items(), &[title(), BlockListItem::Empty]);
}

#[tokio::test]
async fn icons_follow_views_type() {
    for (kind, icon) in [
        (ViewsType::Post, Icon::Posts),
        (ViewsType::Page, Icon::Pages),
        (ViewsType::Homepage, Icon::Pages),
    ] {
        let store = FakeStore::returning(Ok(PostAndPageViewsModel::new(
            vec![views(kind, 12840)],
            false,
        )));
        let block = use_case(store).fetch(&site(), true, false).await;

        assert_eq!(
            block.items(),
            &[
                title(),
                BlockListItem::ListItemWithIcon {
                    icon,
                    text: "Title".to_string(),
                    value: "12,840".to_string(),
                    show_divider: false,
                },
            ],
            "{kind:?}"
        );
    }
}

#[tokio::test]
async fn every_row_but_the_last_has_a_divider() {
    let store = FakeStore::returning(Ok(PostAndPageViewsModel::new(
        vec![
            views(ViewsType::Post, 1),
            views(ViewsType::Page, 2),
            views(ViewsType::Post, 3),
        ],
        false,
    )));
    let block = use_case(store).fetch(&site(), true, false).await;

    let dividers: Vec<bool> = block
        .items()
        .iter()
        .filter_map(|item| match item {
            BlockListItem::ListItemWithIcon { show_divider, .. } => Some(*show_divider),
            _ => None,
        })
        .collect();
    assert_eq!(dividers, vec![true, true, false]);
}

#[tokio::test]
async fn view_more_link_navigates_with_todays_date() {
    let store = FakeStore::returning(Ok(PostAndPageViewsModel::new(
        vec![views(ViewsType::Post, 5)],
        true,
    )));
    let use_case = use_case(store);
    let block = use_case.fetch(&site(), true, false).await;

    let link = block.items().last().cloned();
    assert_eq!(
        link,
        Some(BlockListItem::Link {
            text: MessageKey::ViewMore,
            target: LinkTarget::ViewPostsAndPages,
        })
    );

    let navigation = use_case.navigation_targets();
    assert!(navigation.borrow().is_none());
    use_case.navigate(LinkTarget::ViewPostsAndPages);
    assert_eq!(
        *navigation.borrow(),
        Some(NavigationTarget::ViewPostsAndPages {
            granularity: StatsGranularity::Days,
            selected_date: "2018-10-10".to_string(),
        })
    );
}

#[tokio::test]
async fn cached_page_is_used_unless_refreshing() {
    let store = FakeStore::returning(Ok(PostAndPageViewsModel::new(
        vec![views(ViewsType::Post, 1)],
        false,
    )));
    *store.cached.lock() = Some(PostAndPageViewsModel::new(vec![], false));
    let use_case = use_case(store.clone());

    let cached = use_case.fetch(&site(), false, false).await;
    assert_eq!(cached.items(), &[title(), BlockListItem::Empty]);
    assert_eq!(store.fetches.load(Ordering::SeqCst), 0);

    let fresh = use_case.fetch(&site(), true, true).await;
    assert_eq!(fresh.items().len(), 2);
    assert_eq!(store.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(
        *store.last_request.lock(),
        Some((PAGE_SIZE, StatsGranularity::Days, true))
    );
}

#[tokio::test]
async fn missing_cache_falls_through_to_store() {
    let store = FakeStore::returning(Ok(PostAndPageViewsModel::new(vec![], false)));
    let use_case = use_case(store.clone());

    use_case.fetch(&site(), false, false).await;
    assert_eq!(store.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fetched_blocks_are_published() {
    let store = FakeStore::returning(Ok(PostAndPageViewsModel::new(vec![], false)));
    let use_case = use_case(store);
    let mut blocks = use_case.blocks();

    let block = use_case.fetch(&site(), true, false).await;

    assert!(blocks.has_changed().unwrap());
    assert_eq!(*blocks.borrow_and_update(), Some(block));
}
