//! Behavior of the verticals state machine against fake collaborators.
//!
//! Every test runs on a paused clock, so debounce windows and fetch delays
//! elapse deterministically whenever the test task sleeps.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use parking_lot::Mutex;
use siteflow::app::{handle_event, Action, Event, ScreenMode, VerticalsViewModel};
use siteflow::domain::{ErrorKind, FetchHeaderInfoError, FetchVerticalsError};
use siteflow::ui::viewmodel::{VerticalsListItem, VerticalsUiState};
use siteflow::usecases::{FetchVerticals, FetchVerticalsHeaderInfo};
use siteflow::{HeaderInfo, MessageKey, SiteflowError, Vertical};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::sleep;

const DEBOUNCE: Duration = Duration::from_millis(500);

fn header() -> HeaderInfo {
    HeaderInfo::new("Pick a focus", "We'll add sections for it.", "e.g. Landscaping")
}

#[derive(Default)]
struct FakeHeader {
    calls: AtomicUsize,
    failures_left: AtomicUsize,
}

impl FakeHeader {
    fn failing_once() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failures_left: AtomicUsize::new(1),
        }
    }
}

impl FetchVerticalsHeaderInfo for FakeHeader {
    fn fetch_header_info(&self) -> BoxFuture<'_, Result<HeaderInfo, FetchHeaderInfoError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fail = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        async move {
            sleep(Duration::from_millis(50)).await;
            if fail {
                Err(FetchHeaderInfoError::new(ErrorKind::Network, None))
            } else {
                Ok(header())
            }
        }
        .boxed()
    }
}

/// Returns `<query>-1..=3` after `delay`, or fails while `fail` is set.
#[derive(Default)]
struct FakeVerticals {
    queries: Mutex<Vec<String>>,
    delay: Duration,
    fail: AtomicBool,
}

impl FakeVerticals {
    fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

impl FetchVerticals for FakeVerticals {
    fn fetch_verticals<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Vertical>, FetchVerticalsError>> {
        self.queries.lock().push(query.to_string());
        async move {
            sleep(self.delay).await;
            if self.fail.load(Ordering::SeqCst) {
                return Err(FetchVerticalsError::new(
                    ErrorKind::Network,
                    Some("offline".to_string()),
                ));
            }
            Ok((1..=3)
                .map(|n| Vertical::new(format!("{query}-{n}"), format!("{query} #{n}")))
                .collect())
        }
        .boxed()
    }
}

struct Harness {
    vm: VerticalsViewModel,
    header: Arc<FakeHeader>,
    verticals: Arc<FakeVerticals>,
}

fn harness(header: FakeHeader, verticals: FakeVerticals) -> Harness {
    let header = Arc::new(header);
    let verticals = Arc::new(verticals);
    let vm = VerticalsViewModel::new(header.clone(), verticals.clone(), Handle::current())
        .with_debounce(DEBOUNCE);
    Harness {
        vm,
        header,
        verticals,
    }
}

/// Lets every pending timer and task run to completion.
async fn settle() {
    sleep(Duration::from_secs(10)).await;
}

async fn started(header: FakeHeader, verticals: FakeVerticals) -> Harness {
    let h = harness(header, verticals);
    h.vm.start();
    settle().await;
    h
}

fn header_and_empty() -> VerticalsUiState {
    let header = header();
    VerticalsUiState {
        mode: ScreenMode::Content,
        show_skip_button: true,
        items: vec![
            VerticalsListItem::Header {
                title: header.title,
                subtitle: header.subtitle,
            },
            search_input("", false),
        ],
    }
}

fn search_input(query: &str, loading: bool) -> VerticalsListItem {
    VerticalsListItem::SearchInput {
        query: query.to_string(),
        hint: header().input_hint,
        show_progress: loading,
        show_clear_button: !query.is_empty(),
    }
}

fn loading(query: &str) -> VerticalsUiState {
    VerticalsUiState {
        mode: ScreenMode::Content,
        show_skip_button: query.is_empty(),
        items: vec![search_input(query, true)],
    }
}

fn results(query: &str) -> VerticalsUiState {
    let mut items = vec![search_input(query, false)];
    items.extend((1..=3).map(|n| VerticalsListItem::Suggestion {
        id: format!("{query}-{n}"),
        title: format!("{query} #{n}"),
        show_divider: n != 3,
    }));
    VerticalsUiState {
        mode: ScreenMode::Content,
        show_skip_button: false,
        items,
    }
}

#[tokio::test(start_paused = true)]
async fn header_loads_into_empty_content() {
    let h = harness(FakeHeader::default(), FakeVerticals::default());
    let mut states = h.vm.subscribe();
    assert!(h.vm.current().is_none());

    h.vm.start();
    settle().await;

    let published = states.drain();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].mode, ScreenMode::FullscreenProgress);
    assert!(published[0].items.is_empty());
    assert_eq!(published[1], header_and_empty());
    assert!(h.verticals.queries().is_empty());
}

#[tokio::test(start_paused = true)]
async fn typing_publishes_loading_then_results_in_order() {
    let h = started(FakeHeader::default(), FakeVerticals::default()).await;
    let mut states = h.vm.subscribe();

    h.vm.update_query("a", DEBOUNCE).unwrap();
    settle().await;
    h.vm.update_query("ab", DEBOUNCE).unwrap();
    settle().await;

    assert_eq!(
        states.drain(),
        vec![
            header_and_empty(),
            loading("a"),
            results("a"),
            loading("ab"),
            results("ab"),
        ]
    );
    assert_eq!(h.verticals.queries(), vec!["a", "ab"]);
}

#[tokio::test(start_paused = true)]
async fn query_replaced_during_debounce_is_never_fetched() {
    let h = started(FakeHeader::default(), FakeVerticals::default()).await;
    let mut states = h.vm.subscribe();

    h.vm.update_query("a", DEBOUNCE).unwrap();
    sleep(Duration::from_millis(100)).await;
    h.vm.update_query("ab", DEBOUNCE).unwrap();
    settle().await;

    assert_eq!(h.verticals.queries(), vec!["ab"]);
    assert_eq!(
        states.drain(),
        vec![header_and_empty(), loading("a"), loading("ab"), results("ab")]
    );
}

#[tokio::test(start_paused = true)]
async fn superseded_fetch_in_flight_never_publishes() {
    let h = started(
        FakeHeader::default(),
        FakeVerticals::with_delay(Duration::from_secs(1)),
    )
    .await;
    let mut states = h.vm.subscribe();

    h.vm.update_query("a", Duration::ZERO).unwrap();
    sleep(Duration::from_millis(200)).await;
    assert_eq!(h.verticals.queries(), vec!["a"]);

    h.vm.update_query("ab", Duration::ZERO).unwrap();
    settle().await;

    let published = states.drain();
    assert_eq!(published.last(), Some(&results("ab")));
    assert!(published
        .iter()
        .all(|state| state.suggestions().all(|(id, _)| !id.starts_with("a-"))));
}

#[tokio::test(start_paused = true)]
async fn nothing_is_published_after_close() {
    let h = started(FakeHeader::default(), FakeVerticals::default()).await;
    let mut states = h.vm.subscribe();

    h.vm.update_query("a", DEBOUNCE).unwrap();
    h.vm.close();
    settle().await;

    assert!(h.verticals.queries().is_empty());
    assert_eq!(states.drain(), vec![header_and_empty(), loading("a")]);
    assert_eq!(states.next().await, None);

    assert!(h.vm.is_closed());
    h.vm.update_query("b", Duration::ZERO).unwrap();
    h.vm.start();
    settle().await;
    assert!(h.verticals.queries().is_empty());
    assert_eq!(h.vm.current(), Some(loading("a")));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_view_model_cancels_pending_debounce() {
    let Harness { vm, verticals, .. } =
        started(FakeHeader::default(), FakeVerticals::default()).await;
    let mut states = vm.subscribe();

    vm.update_query("a", DEBOUNCE).unwrap();
    drop(vm);
    settle().await;

    assert!(verticals.queries().is_empty());
    assert_eq!(states.drain(), vec![header_and_empty(), loading("a")]);
    assert_eq!(states.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_shows_only_search_and_error_rows() {
    let verticals = FakeVerticals::default();
    verticals.fail.store(true, Ordering::SeqCst);
    let h = started(FakeHeader::default(), verticals).await;

    h.vm.update_query("a", Duration::ZERO).unwrap();
    settle().await;

    let state = h.vm.current().unwrap();
    assert_eq!(state.mode, ScreenMode::Content);
    assert!(!state.show_skip_button);
    assert_eq!(
        state.items,
        vec![
            search_input("a", false),
            VerticalsListItem::SuggestionError {
                message: MessageKey::FetchSuggestionsFailed,
                retry: MessageKey::Retry,
            },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn retry_reruns_current_query_after_failure() {
    let verticals = FakeVerticals::default();
    verticals.fail.store(true, Ordering::SeqCst);
    let h = started(FakeHeader::default(), verticals).await;

    // Not in the error state yet: nothing to retry.
    h.vm.retry_suggestions().unwrap();
    settle().await;
    assert!(h.verticals.queries().is_empty());

    h.vm.update_query("garden", Duration::ZERO).unwrap();
    settle().await;
    h.verticals.fail.store(false, Ordering::SeqCst);

    let actions = handle_event(&h.vm, &Event::RetrySuggestions).unwrap();
    assert!(actions.is_empty());
    settle().await;

    assert_eq!(h.verticals.queries(), vec!["garden", "garden"]);
    assert_eq!(h.vm.current(), Some(results("garden")));
}

#[tokio::test(start_paused = true)]
async fn start_fetches_header_once() {
    let h = harness(FakeHeader::default(), FakeVerticals::default());
    h.vm.start();
    h.vm.start();
    settle().await;
    h.vm.start();
    settle().await;

    assert_eq!(h.header.calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.vm.current(), Some(header_and_empty()));
}

#[tokio::test(start_paused = true)]
async fn header_retry_after_failure_reaches_content() {
    let h = started(FakeHeader::failing_once(), FakeVerticals::default()).await;

    let failed = h.vm.current().unwrap();
    assert_eq!(failed.mode, ScreenMode::FullscreenError);
    assert!(failed.items.is_empty());
    assert!(!failed.show_skip_button);

    let mut states = h.vm.subscribe();
    handle_event(&h.vm, &Event::RetryHeader).unwrap();
    settle().await;

    let published = states.drain();
    assert_eq!(published.len(), 3);
    assert_eq!(published[1].mode, ScreenMode::FullscreenProgress);
    assert_eq!(published[2], header_and_empty());
    assert_eq!(h.header.calls.load(Ordering::SeqCst), 2);

    // Once loaded, header info is never fetched again.
    h.vm.retry_header_fetch();
    settle().await;
    assert_eq!(h.header.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn query_before_header_is_not_ready() {
    let h = harness(FakeHeader::default(), FakeVerticals::default());
    assert!(matches!(
        h.vm.update_query("a", DEBOUNCE),
        Err(SiteflowError::NotReady(_))
    ));

    h.vm.start();
    assert!(matches!(
        handle_event(&h.vm, &Event::QueryChanged("a".to_string())),
        Err(SiteflowError::NotReady(_))
    ));

    settle().await;
    assert!(h.vm.on_query_changed("a").is_ok());
}

#[tokio::test(start_paused = true)]
async fn clearing_the_query_restores_header_and_skip() {
    let h = started(FakeHeader::default(), FakeVerticals::default()).await;
    h.vm.update_query("a", Duration::ZERO).unwrap();
    settle().await;

    handle_event(&h.vm, &Event::ClearQuery).unwrap();
    settle().await;

    assert_eq!(h.vm.query().as_deref(), Some(""));
    // The empty query is fetched like any other.
    assert_eq!(h.verticals.queries(), vec!["a", ""]);

    let state = h.vm.current().unwrap();
    assert!(state.show_skip_button);
    assert!(matches!(state.items[0], VerticalsListItem::Header { .. }));
}

#[tokio::test(start_paused = true)]
async fn handler_reports_host_actions() {
    let h = started(FakeHeader::default(), FakeVerticals::default()).await;

    assert_eq!(
        handle_event(&h.vm, &Event::Skip).unwrap(),
        vec![Action::SkipStep]
    );

    h.vm.update_query("yoga", Duration::ZERO).unwrap();
    settle().await;

    assert!(handle_event(&h.vm, &Event::Skip).unwrap().is_empty());
    assert_eq!(
        handle_event(
            &h.vm,
            &Event::SuggestionClicked {
                id: "yoga-2".to_string()
            }
        )
        .unwrap(),
        vec![Action::VerticalSelected {
            id: "yoga-2".to_string(),
            name: "yoga #2".to_string(),
        }]
    );
    assert!(handle_event(
        &h.vm,
        &Event::SuggestionClicked {
            id: "gone".to_string()
        }
    )
    .unwrap()
    .is_empty());

    assert_eq!(
        handle_event(&h.vm, &Event::Close).unwrap(),
        vec![Action::Close]
    );
    assert!(h.vm.is_closed());
}

#[tokio::test(start_paused = true)]
async fn bundled_catalog_ranks_suggestions() {
    use siteflow::storage::{Catalog, JsonCatalog};
    use siteflow::usecases::{CatalogHeaderInfo, CatalogVerticals};

    let catalog: Arc<dyn Catalog> = Arc::new(JsonCatalog::bundled().unwrap());
    let vm = VerticalsViewModel::with_current_runtime(
        Arc::new(CatalogHeaderInfo::new(catalog.clone())),
        Arc::new(CatalogVerticals::new(catalog)),
    )
    .unwrap();

    vm.start();
    settle().await;
    vm.update_query("lawn", Duration::ZERO).unwrap();
    settle().await;

    let state = vm.current().unwrap();
    assert_eq!(state.suggestions().next().map(|(_, title)| title), Some("Lawn Care"));
}
