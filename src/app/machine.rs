//! Debounced, cancelable suggestion state machine for the verticals step.
//!
//! [`VerticalsViewModel`] owns the [`ScreenState`] of one screen instance. All
//! transitions happen under a single lock and every transition that changes
//! what a surface would draw publishes a full [`VerticalsUiState`] snapshot to
//! every subscriber, in one total order.
//!
//! # Concurrency
//!
//! Header and suggestion fetches run as tokio tasks on the runtime handle
//! captured at construction. At most one task of each kind exists. Starting a
//! new one aborts the previous task handle and bumps a generation counter
//! under the lock, so a task that already got past its last await point still
//! cannot publish a stale result.
//!
//! # Example
//!
//! ```no_run
//! use siteflow::app::VerticalsViewModel;
//! use siteflow::storage::JsonCatalog;
//! use siteflow::usecases::{CatalogHeaderInfo, CatalogVerticals};
//! use std::sync::Arc;
//!
//! # async fn demo() -> siteflow::Result<()> {
//! let catalog = Arc::new(JsonCatalog::bundled()?);
//! let vm = VerticalsViewModel::with_current_runtime(
//!     Arc::new(CatalogHeaderInfo::new(catalog.clone())),
//!     Arc::new(CatalogVerticals::new(catalog)),
//! )?;
//! let mut states = vm.subscribe();
//! vm.start();
//! while let Some(state) = states.next().await {
//!     println!("{:?}", state.mode);
//! }
//! # Ok(())
//! # }
//! ```

use crate::app::state::ScreenState;
use crate::domain::error::{Result, SiteflowError};
use crate::domain::ListState;
use crate::ui::viewmodel::VerticalsUiState;
use crate::usecases::{FetchVerticals, FetchVerticalsHeaderInfo};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Debounce applied by [`VerticalsViewModel::on_query_changed`] unless
/// configured otherwise.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// State machine behind the verticals screen.
///
/// Dropping the view model tears it down like [`close`](Self::close).
pub struct VerticalsViewModel {
    inner: Arc<Inner>,
}

struct Inner {
    fetch_header: Arc<dyn FetchVerticalsHeaderInfo>,
    fetch_verticals: Arc<dyn FetchVerticals>,
    runtime: Handle,
    shared: Mutex<Shared>,
}

struct Shared {
    started: bool,
    closed: bool,
    screen: ScreenState,
    default_debounce: Duration,
    last_published: Option<VerticalsUiState>,
    subscribers: Vec<mpsc::UnboundedSender<VerticalsUiState>>,
    header_task: Option<JoinHandle<()>>,
    header_generation: u64,
    search_task: Option<JoinHandle<()>>,
    search_generation: u64,
}

impl Shared {
    /// Publishes the snapshot of the current screen state.
    ///
    /// Identical consecutive snapshots are suppressed. Subscribers whose
    /// receiver is gone are dropped.
    fn publish(&mut self) {
        if self.closed {
            return;
        }

        let snapshot = self.screen.snapshot();
        if self.last_published.as_ref() == Some(&snapshot) {
            tracing::trace!(mode = ?snapshot.mode, "snapshot unchanged, not publishing");
            return;
        }

        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());

        tracing::debug!(
            mode = ?snapshot.mode,
            rows = snapshot.items.len(),
            show_skip_button = snapshot.show_skip_button,
            subscribers = self.subscribers.len(),
            "published snapshot"
        );
        self.last_published = Some(snapshot);
    }
}

impl VerticalsViewModel {
    /// Creates a view model whose background work runs on `runtime`.
    ///
    /// The screen starts in the awaiting-header state; nothing is fetched
    /// until [`start`](Self::start).
    #[must_use]
    pub fn new(
        fetch_header: Arc<dyn FetchVerticalsHeaderInfo>,
        fetch_verticals: Arc<dyn FetchVerticals>,
        runtime: Handle,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                fetch_header,
                fetch_verticals,
                runtime,
                shared: Mutex::new(Shared {
                    started: false,
                    closed: false,
                    screen: ScreenState::AwaitingHeader,
                    default_debounce: DEFAULT_DEBOUNCE,
                    last_published: None,
                    subscribers: Vec::new(),
                    header_task: None,
                    header_generation: 0,
                    search_task: None,
                    search_generation: 0,
                }),
            }),
        }
    }

    /// Creates a view model on the runtime of the calling context.
    ///
    /// # Errors
    ///
    /// Returns [`SiteflowError::Runtime`] when called outside a tokio runtime.
    pub fn with_current_runtime(
        fetch_header: Arc<dyn FetchVerticalsHeaderInfo>,
        fetch_verticals: Arc<dyn FetchVerticals>,
    ) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| SiteflowError::Runtime(e.to_string()))?;
        Ok(Self::new(fetch_header, fetch_verticals, runtime))
    }

    /// Sets the debounce used by [`on_query_changed`](Self::on_query_changed).
    #[must_use]
    pub fn with_debounce(self, debounce: Duration) -> Self {
        self.inner.shared.lock().default_debounce = debounce;
        self
    }

    /// Subscribes to published snapshots.
    ///
    /// The subscription first yields the latest published snapshot, if any,
    /// then every later one in publication order. It ends when the view model
    /// is closed or dropped.
    #[must_use]
    pub fn subscribe(&self) -> StateSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut shared = self.inner.shared.lock();

        if !shared.closed {
            if let Some(snapshot) = shared.last_published.clone() {
                // Receiver is held locally, the send cannot fail.
                let _ = tx.send(snapshot);
            }
            shared.subscribers.push(tx);
        }

        StateSubscription { rx }
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn current(&self) -> Option<VerticalsUiState> {
        self.inner.shared.lock().last_published.clone()
    }

    /// Current query, once header info is loaded.
    #[must_use]
    pub fn query(&self) -> Option<String> {
        self.inner.shared.lock().screen.query().map(str::to_string)
    }

    /// Starts the screen by fetching header info.
    ///
    /// Only the first call has any effect.
    pub fn start(&self) {
        let mut shared = self.inner.shared.lock();
        if shared.started || shared.closed {
            tracing::trace!(closed = shared.closed, "start ignored");
            return;
        }
        shared.started = true;
        tracing::debug!("starting verticals screen");
        self.spawn_header_fetch(&mut shared);
    }

    /// Fetches header info again after a failure.
    ///
    /// No-op once header info has been loaded. A header fetch still in flight
    /// is cancelled and replaced.
    pub fn retry_header_fetch(&self) {
        let mut shared = self.inner.shared.lock();
        if shared.closed || matches!(shared.screen, ScreenState::Content { .. }) {
            tracing::trace!(closed = shared.closed, "header retry ignored");
            return;
        }
        shared.started = true;
        tracing::debug!("retrying header fetch");
        self.spawn_header_fetch(&mut shared);
    }

    /// Replaces the query and schedules a suggestion fetch after `debounce`.
    ///
    /// Any pending debounce or in-flight fetch is cancelled first. The list is
    /// cleared and a loading snapshot is published immediately.
    ///
    /// # Errors
    ///
    /// Returns [`SiteflowError::NotReady`] before header info has loaded.
    pub fn update_query(&self, query: impl Into<String>, debounce: Duration) -> Result<()> {
        let query = query.into();
        let mut shared = self.inner.shared.lock();
        if shared.closed {
            return Ok(());
        }

        let header = shared
            .screen
            .header()
            .cloned()
            .ok_or(SiteflowError::NotReady("query updated before header info loaded"))?;

        shared.search_generation += 1;
        let generation = shared.search_generation;
        if let Some(task) = shared.search_task.take() {
            tracing::debug!(generation, "cancelling superseded suggestion fetch");
            task.abort();
        }

        // Suggestions are cleared, then marked as loading.
        let cleared = ListState::Ready(vec![]);
        shared.screen = ScreenState::Content {
            header,
            query: query.clone(),
            list_state: cleared.into_loading(),
        };
        shared.publish();

        let span = tracing::debug_span!(
            "fetch_suggestions",
            generation,
            query_len = query.len(),
            debounce_ms = debounce.as_millis() as u64
        );
        let task = self.inner.runtime.spawn(
            Self::run_suggestion_fetch(Arc::clone(&self.inner), query, debounce, generation)
                .instrument(span),
        );
        shared.search_task = Some(task);
        Ok(())
    }

    /// [`update_query`](Self::update_query) with the configured debounce.
    ///
    /// # Errors
    ///
    /// Returns [`SiteflowError::NotReady`] before header info has loaded.
    pub fn on_query_changed(&self, query: impl Into<String>) -> Result<()> {
        let debounce = self.inner.shared.lock().default_debounce;
        self.update_query(query, debounce)
    }

    /// Re-runs the current query without debounce after a failed fetch.
    ///
    /// No-op unless the suggestion list is in the error state.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`update_query`](Self::update_query).
    pub fn retry_suggestions(&self) -> Result<()> {
        let query = {
            let shared = self.inner.shared.lock();
            match &shared.screen {
                ScreenState::Content {
                    query, list_state, ..
                } if list_state.is_error() && !shared.closed => query.clone(),
                _ => {
                    tracing::trace!("suggestion retry ignored");
                    return Ok(());
                }
            }
        };

        tracing::debug!("retrying suggestion fetch");
        self.update_query(query, Duration::ZERO)
    }

    /// Tears the screen down.
    ///
    /// Pending debounce timers and fetches are cancelled, subscriptions end
    /// and nothing is published afterwards. Later calls are no-ops.
    pub fn close(&self) {
        let mut shared = self.inner.shared.lock();
        if shared.closed {
            return;
        }
        shared.closed = true;
        shared.header_generation += 1;
        shared.search_generation += 1;

        if let Some(task) = shared.header_task.take() {
            task.abort();
        }
        if let Some(task) = shared.search_task.take() {
            task.abort();
        }
        shared.subscribers.clear();
        tracing::debug!("verticals screen closed");
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.shared.lock().closed
    }

    fn spawn_header_fetch(&self, shared: &mut Shared) {
        shared.header_generation += 1;
        let generation = shared.header_generation;
        if let Some(task) = shared.header_task.take() {
            tracing::debug!(generation, "cancelling superseded header fetch");
            task.abort();
        }

        shared.screen = ScreenState::AwaitingHeader;
        shared.publish();

        let span = tracing::debug_span!("fetch_header_info", generation);
        let task = self.inner.runtime.spawn(
            Self::run_header_fetch(Arc::clone(&self.inner), generation).instrument(span),
        );
        shared.header_task = Some(task);
    }

    async fn run_header_fetch(inner: Arc<Inner>, generation: u64) {
        tracing::debug!("header fetch started");
        let result = inner.fetch_header.fetch_header_info().await;

        let mut shared = inner.shared.lock();
        if shared.closed || shared.header_generation != generation {
            tracing::debug!("header fetch superseded, dropping result");
            return;
        }
        shared.header_task = None;

        shared.screen = match result {
            Ok(header) => {
                tracing::debug!("header fetch succeeded");
                ScreenState::initial_content(header)
            }
            Err(err) => {
                tracing::debug!(error = %err, "header fetch failed");
                ScreenState::HeaderFailed
            }
        };
        shared.publish();
    }

    async fn run_suggestion_fetch(
        inner: Arc<Inner>,
        query: String,
        debounce: Duration,
        generation: u64,
    ) {
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
        }

        tracing::debug!("suggestion fetch started");
        let result = inner.fetch_verticals.fetch_verticals(&query).await;

        let mut shared = inner.shared.lock();
        if shared.closed || shared.search_generation != generation {
            tracing::debug!("suggestion fetch superseded, dropping result");
            return;
        }
        shared.search_task = None;

        let (header, previous) = match &shared.screen {
            ScreenState::Content {
                header, list_state, ..
            } => (header.clone(), list_state.clone()),
            _ => return,
        };

        let list_state = match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "suggestion fetch succeeded");
                ListState::Ready(items)
            }
            Err(err) => {
                tracing::debug!(error = %err, "suggestion fetch failed");
                previous.into_error(err.display_message())
            }
        };

        shared.screen = ScreenState::Content {
            header,
            query,
            list_state,
        };
        shared.publish();
    }
}

impl Drop for VerticalsViewModel {
    fn drop(&mut self) {
        self.close();
    }
}

/// Ordered stream of snapshots from a [`VerticalsViewModel`].
#[derive(Debug)]
pub struct StateSubscription {
    rx: mpsc::UnboundedReceiver<VerticalsUiState>,
}

impl StateSubscription {
    /// Waits for the next snapshot.
    ///
    /// Returns `None` once the view model is closed and every queued snapshot
    /// has been received.
    pub async fn next(&mut self) -> Option<VerticalsUiState> {
        self.rx.recv().await
    }

    /// Next queued snapshot without waiting.
    pub fn try_next(&mut self) -> Option<VerticalsUiState> {
        self.rx.try_recv().ok()
    }

    /// Every queued snapshot without waiting.
    pub fn drain(&mut self) -> Vec<VerticalsUiState> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}
