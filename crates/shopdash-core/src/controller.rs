// ── ViewController ──
//
// Reconciles the remote paginated dataset with local view state.
// Owns the latest-request-wins consistency rule, the debounced search
// commit, and the detail drill-down lifecycle. All rendering goes
// through the RenderSink boundary.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use shopdash_api::ApiClient;

use crate::error::CoreError;
use crate::filter::filter_customers;
use crate::model::{Customer, Order, Statistics};
use crate::pagination::{PageMetadata, PaginationState};
use crate::view::{DetailPanel, OrdersPanel, RenderSink, ViewModel};

/// Fixed page size used by the dashboard.
pub const PAGE_SIZE: u32 = 12;

/// Quiet period a keystroke must survive before the search commits.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

// ── ViewState ────────────────────────────────────────────────────────

/// Lifecycle of the customer-list view, observable by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded,
    Error,
}

// ── ViewController ───────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<Inner>` so the debounce continuation can
/// be spawned off it. All state mutation happens behind one mutex; the
/// guard is never held across an await of a fetch.
#[derive(Clone)]
pub struct ViewController {
    inner: Arc<Inner>,
}

struct Inner {
    client: ApiClient,
    sink: Arc<dyn RenderSink>,
    view: Mutex<ViewData>,

    // Per-query-class sequence counters. A response is applied only if
    // its tag still equals the counter when it arrives; anything else
    // was superseded and is dropped silently. List, detail, and orders
    // are independent classes.
    list_seq: AtomicU64,
    detail_seq: AtomicU64,
    orders_seq: AtomicU64,

    /// Cancellation handle for the pending (not yet committed) search.
    pending_search: Mutex<Option<CancellationToken>>,

    quiet_period: Duration,
    page_size: u32,
}

struct ViewData {
    state: ViewState,
    pagination: PaginationState,
    search: String,
    /// The current page as fetched — unfiltered. The active filter is
    /// applied on top of this when building a view-model.
    page_customers: Vec<Arc<Customer>>,
    statistics: Option<Statistics>,
    detail: Option<DetailPanel>,
    error: Option<String>,
}

impl ViewController {
    /// Create a controller with the standard page size and debounce.
    pub fn new(client: ApiClient, sink: Arc<dyn RenderSink>) -> Self {
        Self::with_options(client, sink, PAGE_SIZE, SEARCH_DEBOUNCE)
    }

    /// Create a controller with explicit page size and quiet period.
    pub fn with_options(
        client: ApiClient,
        sink: Arc<dyn RenderSink>,
        page_size: u32,
        quiet_period: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                sink,
                view: Mutex::new(ViewData {
                    state: ViewState::Idle,
                    pagination: PaginationState::new(),
                    search: String::new(),
                    page_customers: Vec::new(),
                    statistics: None,
                    detail: None,
                    error: None,
                }),
                list_seq: AtomicU64::new(0),
                detail_seq: AtomicU64::new(0),
                orders_seq: AtomicU64::new(0),
                pending_search: Mutex::new(None),
                quiet_period,
                page_size: page_size.max(1),
            }),
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Initial mount: fetch statistics, then the first customer page.
    ///
    /// A statistics failure is reported as a banner but does not stop
    /// the customer list from loading.
    pub async fn mount(&self) -> Result<(), CoreError> {
        self.load_statistics().await;
        self.load_page(1).await
    }

    async fn load_statistics(&self) {
        match self.inner.client.statistics().await {
            Ok(raw) => {
                self.inner.view.lock().await.statistics = Some(raw.into());
            }
            Err(e) => {
                warn!(error = %e, "statistics fetch failed");
                self.inner.sink.render_error("Failed to load statistics");
            }
        }
    }

    // ── Pagination ───────────────────────────────────────────────────

    /// Navigate relative to the current page (clamped to valid pages).
    pub async fn change_page(&self, delta: i32) -> Result<(), CoreError> {
        let target = self.inner.view.lock().await.pagination.target_page(delta);
        self.load_page(target).await
    }

    /// Navigate to an absolute page number.
    pub async fn goto_page(&self, page: u32) -> Result<(), CoreError> {
        self.load_page(page.max(1)).await
    }

    /// Fetch one page of customers; the active search filter (if any)
    /// re-applies to the new page.
    async fn load_page(&self, page: u32) -> Result<(), CoreError> {
        let seq = self.inner.list_seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut view = self.inner.view.lock().await;
            view.state = ViewState::Loading;
            view.error = None;
        }
        self.inner.sink.set_loading(true);

        let result = self
            .inner
            .client
            .list_customers(page, self.inner.page_size)
            .await;

        // Stale guard: a newer list request owns the view now. Success
        // or failure, this response no longer matches user intent.
        if self.inner.list_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, page, "discarding superseded customer page response");
            return Ok(());
        }

        match result {
            Ok(raw) => {
                let meta = PageMetadata::from(raw.pagination);
                let customers: Vec<Arc<Customer>> = raw
                    .customers
                    .into_iter()
                    .map(|c| Arc::new(Customer::from(c)))
                    .collect();

                {
                    let mut view = self.inner.view.lock().await;
                    view.pagination.apply(meta);
                    view.page_customers = customers;
                    view.state = ViewState::Loaded;
                }
                self.inner.sink.set_loading(false);
                self.emit().await;
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                let message = format!("Failed to load customers: {err}");
                {
                    let mut view = self.inner.view.lock().await;
                    view.state = ViewState::Error;
                    view.error = Some(message.clone());
                }
                self.inner.sink.set_loading(false);
                self.inner.sink.render_error(&message);
                self.emit().await;
                Err(err)
            }
        }
    }

    // ── Search ───────────────────────────────────────────────────────

    /// Record a keystroke. The filter commits only after the quiet
    /// period elapses with no further keystrokes; each keystroke cancels
    /// the previously scheduled commit.
    pub async fn search_input(&self, text: &str) {
        let token = CancellationToken::new();
        {
            let mut pending = self.inner.pending_search.lock().await;
            if let Some(prev) = pending.replace(token.clone()) {
                prev.cancel();
            }
        }

        let ctrl = self.clone();
        let text = text.to_owned();
        let quiet = self.inner.quiet_period;
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(quiet) => ctrl.commit_search(&text).await,
            }
        });
    }

    /// Apply a search term immediately (the debounced continuation).
    ///
    /// Filtering is local to the already-fetched page; no server query
    /// is issued.
    pub async fn commit_search(&self, text: &str) {
        self.inner.view.lock().await.search = text.to_owned();
        self.emit().await;
    }

    /// Clear the search and restore the unfiltered page. Immediate —
    /// the debounce applies to keystrokes, not to clearing.
    pub async fn clear_search(&self) {
        if let Some(prev) = self.inner.pending_search.lock().await.take() {
            prev.cancel();
        }
        self.commit_search("").await;
    }

    // ── Detail drill-down ────────────────────────────────────────────

    /// Open the detail view for one customer.
    ///
    /// A failure here is scoped to the detail panel; the list view keeps
    /// whatever it was showing.
    pub async fn open_detail(&self, id: u64) -> Result<(), CoreError> {
        let seq = self.inner.detail_seq.fetch_add(1, Ordering::SeqCst) + 1;

        self.inner.view.lock().await.detail = Some(DetailPanel::Loading);
        self.emit().await;

        let result = self.inner.client.get_customer(id).await;

        if self.inner.detail_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, customer = id, "discarding superseded detail response");
            return Ok(());
        }

        match result {
            Ok(raw) => {
                self.inner.view.lock().await.detail = Some(DetailPanel::Ready {
                    customer: Arc::new(raw.into()),
                    orders: OrdersPanel::NotRequested,
                });
                self.emit().await;
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.inner.view.lock().await.detail = Some(DetailPanel::Failed {
                    message: err.to_string(),
                });
                self.emit().await;
                Err(err)
            }
        }
    }

    /// Fetch the open customer's orders into the detail panel.
    ///
    /// Independent of the customer fetch: the panel renders customer
    /// fields first, then appends orders (or an inline, orders-scoped
    /// error) once they resolve.
    pub async fn load_orders(&self, id: u64) -> Result<(), CoreError> {
        let seq = self.inner.orders_seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut view = self.inner.view.lock().await;
            if let Some(DetailPanel::Ready { customer, orders }) = view.detail.as_mut() {
                if customer.id == id {
                    *orders = OrdersPanel::Loading;
                }
            }
        }
        self.emit().await;

        let result = self.inner.client.list_customer_orders(id).await;

        if self.inner.orders_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, customer = id, "discarding superseded orders response");
            return Ok(());
        }

        let mut view = self.inner.view.lock().await;
        let Some(DetailPanel::Ready { customer, orders }) = view.detail.as_mut() else {
            // Detail closed or replaced while the fetch was in flight.
            return Ok(());
        };
        if customer.id != id {
            return Ok(());
        }

        let outcome = match result {
            Ok(raw) => {
                *orders = OrdersPanel::Loaded {
                    orders: raw.orders.into_iter().map(Order::from).collect(),
                    total: raw.total_orders,
                };
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                *orders = OrdersPanel::Failed {
                    message: format!("Failed to load orders: {err}"),
                };
                Err(err)
            }
        };
        drop(view);
        self.emit().await;
        outcome
    }

    /// Close the detail view.
    pub async fn close_detail(&self) {
        self.inner.view.lock().await.detail = None;
        self.emit().await;
    }

    // ── Ad-hoc queries ───────────────────────────────────────────────
    //
    // These bypass the view state and query the API directly. Intended
    // for one-shot reporting that doesn't need the dashboard lifecycle.

    /// Fetch one page of all orders (across customers).
    pub async fn list_orders(
        &self,
        page: u32,
    ) -> Result<(Vec<Order>, PageMetadata), CoreError> {
        let raw = self
            .inner
            .client
            .list_orders(page.max(1), self.inner.page_size)
            .await?;
        let meta = PageMetadata::from(raw.pagination);
        Ok((raw.orders.into_iter().map(Order::from).collect(), meta))
    }

    /// Fetch a single order by identifier.
    pub async fn get_order(&self, id: u64) -> Result<Order, CoreError> {
        Ok(self.inner.client.get_order(id).await?.into())
    }

    /// Fetch aggregate statistics without touching view state.
    pub async fn statistics(&self) -> Result<Statistics, CoreError> {
        Ok(self.inner.client.statistics().await?.into())
    }

    // ── State observation ────────────────────────────────────────────

    /// Current list-view lifecycle state.
    pub async fn state(&self) -> ViewState {
        self.inner.view.lock().await.state
    }

    /// Build a view-model snapshot of the current state.
    pub async fn view_model(&self) -> ViewModel {
        let view = self.inner.view.lock().await;
        let customers = filter_customers(&view.page_customers, &view.search);
        ViewModel {
            loading: view.state == ViewState::Loading,
            error: view.error.clone(),
            statistics: view.statistics.clone(),
            customers,
            pagination: view.pagination.metadata(),
            search: view.search.clone(),
            detail: view.detail.clone(),
        }
    }

    async fn emit(&self) {
        let vm = self.view_model().await;
        self.inner.sink.render(&vm);
    }
}
