#![allow(clippy::unwrap_used)]
// Behavior tests for `ViewController` against a mocked API.
//
// The interesting cases are the ones a happy-path demo never hits:
// out-of-order response completion, keystroke coalescing, and failures
// that must stay scoped to the panel that triggered them.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopdash_api::ApiClient;
use shopdash_core::{
    CoreError, DetailPanel, OrdersPanel, RenderSink, ViewController, ViewModel, ViewState,
};

// ── Recording sink ──────────────────────────────────────────────────

#[derive(Default)]
struct RecordingSink {
    renders: Mutex<Vec<ViewModel>>,
    errors: Mutex<Vec<String>>,
}

impl RenderSink for RecordingSink {
    fn render(&self, view: &ViewModel) {
        self.renders.lock().unwrap().push(view.clone());
    }

    fn render_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_owned());
    }

    fn set_loading(&self, _loading: bool) {}
}

impl RecordingSink {
    fn renders(&self) -> Vec<ViewModel> {
        self.renders.lock().unwrap().clone()
    }

    fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

// ── Fixtures ────────────────────────────────────────────────────────

fn customer_json(id: u64, first: &str, last: &str) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": last,
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "age": 30,
        "city": "Portland",
        "state": "Oregon",
        "country": "United States",
        "created_at": "2023-01-15 10:30:00"
    })
}

fn page_json(page: u32, total_pages: u32, customers: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "customers": customers,
        "pagination": {
            "page": page,
            "per_page": 12,
            "total_count": u64::from(total_pages) * 12,
            "total_pages": total_pages,
            "has_next": page < total_pages,
            "has_prev": page > 1
        }
    })
}

fn statistics_json() -> serde_json::Value {
    json!({
        "statistics": {
            "unique_customers": 80000,
            "total_orders": 125226,
            "avg_items_per_order": 1.4,
            "delivered_orders": 31354,
            "returned_orders": 12447
        }
    })
}

async fn mock_statistics(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(statistics_json()))
        .mount(server)
        .await;
}

async fn mock_page(server: &MockServer, page: u32, total: u32, body: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(page, total, body)))
        .mount(server)
        .await;
}

fn controller(server: &MockServer, sink: Arc<RecordingSink>) -> ViewController {
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    ViewController::new(client, sink)
}

// ── Mount / pagination ──────────────────────────────────────────────

#[tokio::test]
async fn mount_loads_statistics_and_first_page() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    mock_page(&server, 1, 3, vec![customer_json(1, "John", "Smith")]).await;

    let sink = Arc::new(RecordingSink::default());
    let ctrl = controller(&server, Arc::clone(&sink));
    ctrl.mount().await.unwrap();

    assert_eq!(ctrl.state().await, ViewState::Loaded);
    let vm = ctrl.view_model().await;
    assert!(!vm.loading);
    assert_eq!(vm.error, None);
    assert_eq!(vm.statistics.as_ref().unwrap().unique_customers, 80000);
    assert_eq!(vm.customers.len(), 1);
    let meta = vm.pagination.unwrap();
    assert_eq!(meta.page, 1);
    assert!(meta.has_next);
    assert!(!meta.has_prev);
    assert!(!sink.renders().is_empty());
}

#[tokio::test]
async fn list_failure_sets_error_state_and_banner() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Internal server error" })),
        )
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::default());
    let ctrl = controller(&server, Arc::clone(&sink));

    let result = ctrl.mount().await;
    assert!(matches!(result, Err(CoreError::Api { .. })));
    assert_eq!(ctrl.state().await, ViewState::Error);

    let vm = ctrl.view_model().await;
    assert!(vm.error.as_deref().unwrap().contains("Failed to load customers"));
    assert!(
        sink.errors().iter().any(|e| e.contains("Failed to load customers")),
        "expected a global banner, got: {:?}",
        sink.errors()
    );
    // The controller stays usable after a failure.
    assert!(vm.customers.is_empty());
}

// ── Latest request wins ─────────────────────────────────────────────

#[tokio::test]
async fn slow_superseded_page_is_dropped_silently() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    mock_page(&server, 1, 3, vec![customer_json(1, "Alpha", "One")]).await;

    // Page 2 resolves long after page 3 — completion order is inverted
    // relative to issue order.
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(2, 3, vec![customer_json(2, "Beta", "Two")]))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    mock_page(&server, 3, 3, vec![customer_json(3, "Gamma", "Three")]).await;

    let sink = Arc::new(RecordingSink::default());
    let ctrl = controller(&server, Arc::clone(&sink));
    ctrl.mount().await.unwrap();

    let slow = {
        let ctrl = ctrl.clone();
        tokio::spawn(async move { ctrl.goto_page(2).await })
    };
    // Let the page-2 request get issued before superseding it.
    tokio::time::sleep(Duration::from_millis(100)).await;
    ctrl.goto_page(3).await.unwrap();

    // The superseded request completes without error and without effect.
    slow.await.unwrap().unwrap();

    let vm = ctrl.view_model().await;
    assert_eq!(vm.pagination.unwrap().page, 3);
    assert_eq!(vm.customers[0].first_name, "Gamma");

    // Page 2 must never have been rendered — not even transiently.
    assert!(
        sink.renders()
            .iter()
            .all(|r| r.pagination.map_or(true, |m| m.page != 2)),
        "a stale page-2 response reached the sink"
    );
}

#[tokio::test]
async fn superseded_detail_fetch_is_dropped() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    mock_page(&server, 1, 1, vec![customer_json(1, "John", "Smith")]).await;

    Mock::given(method("GET"))
        .and(path("/api/customers/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "customer": customer_json(1, "John", "Smith") }))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers/2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "customer": customer_json(2, "Jane", "Doe") })),
        )
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::default());
    let ctrl = controller(&server, Arc::clone(&sink));
    ctrl.mount().await.unwrap();

    let slow = {
        let ctrl = ctrl.clone();
        tokio::spawn(async move { ctrl.open_detail(1).await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;
    ctrl.open_detail(2).await.unwrap();
    slow.await.unwrap().unwrap();

    match ctrl.view_model().await.detail {
        Some(DetailPanel::Ready { customer, .. }) => assert_eq!(customer.id, 2),
        other => panic!("expected customer 2 detail, got: {other:?}"),
    }
}

// ── Search ──────────────────────────────────────────────────────────

#[tokio::test]
async fn keystrokes_coalesce_into_one_commit() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    // Exactly one list fetch: search filters locally, never refetches.
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            1,
            1,
            vec![
                customer_json(1, "John", "Smith"),
                customer_json(2, "Jane", "Doe"),
            ],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::default());
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    let ctrl = ViewController::with_options(
        client,
        sink.clone(),
        12,
        Duration::from_millis(200),
    );
    ctrl.mount().await.unwrap();

    ctrl.search_input("jo").await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    ctrl.search_input("joh").await;

    // Well inside the quiet window after the last keystroke: no commit yet.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(
        sink.renders().iter().all(|r| r.search.is_empty()),
        "search committed before the quiet period elapsed"
    );

    // Past the quiet window: exactly one commit, for the last keystroke.
    tokio::time::sleep(Duration::from_millis(250)).await;
    let committed: Vec<_> = sink
        .renders()
        .into_iter()
        .filter(|r| !r.search.is_empty())
        .collect();
    assert_eq!(committed.len(), 1, "expected one coalesced commit");
    assert_eq!(committed[0].search, "joh");
    assert_eq!(committed[0].customers.len(), 1);
    assert_eq!(committed[0].customers[0].first_name, "John");
}

#[tokio::test]
async fn clearing_search_restores_the_full_page() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    mock_page(
        &server,
        1,
        1,
        vec![
            customer_json(1, "John", "Smith"),
            customer_json(2, "Jane", "Doe"),
        ],
    )
    .await;

    let sink = Arc::new(RecordingSink::default());
    let ctrl = controller(&server, Arc::clone(&sink));
    ctrl.mount().await.unwrap();

    ctrl.commit_search("smith").await;
    assert_eq!(ctrl.view_model().await.customers.len(), 1);

    ctrl.clear_search().await;
    let vm = ctrl.view_model().await;
    assert_eq!(vm.search, "");
    assert_eq!(vm.customers.len(), 2);
}

// ── Detail drill-down ───────────────────────────────────────────────

#[tokio::test]
async fn detail_404_is_scoped_to_the_panel() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    mock_page(&server, 1, 1, vec![customer_json(1, "John", "Smith")]).await;
    Mock::given(method("GET"))
        .and(path("/api/customers/999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Customer not found" })),
        )
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::default());
    let ctrl = controller(&server, Arc::clone(&sink));
    ctrl.mount().await.unwrap();

    let result = ctrl.open_detail(999).await;
    assert!(matches!(result, Err(CoreError::CustomerNotFound { id: 999 })));

    let vm = ctrl.view_model().await;
    assert!(matches!(vm.detail, Some(DetailPanel::Failed { .. })));
    // The list view is untouched: same customers, no global error.
    assert_eq!(vm.customers.len(), 1);
    assert_eq!(vm.error, None);
    assert_eq!(ctrl.state().await, ViewState::Loaded);
}

#[tokio::test]
async fn empty_orders_is_a_valid_result() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    mock_page(&server, 1, 1, vec![customer_json(7, "Grace", "Hopper")]).await;
    Mock::given(method("GET"))
        .and(path("/api/customers/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "customer": customer_json(7, "Grace", "Hopper") })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers/7/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer_id": 7,
            "orders": [],
            "total_orders": 0
        })))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::default());
    let ctrl = controller(&server, Arc::clone(&sink));
    ctrl.mount().await.unwrap();
    ctrl.open_detail(7).await.unwrap();
    ctrl.load_orders(7).await.unwrap();

    match ctrl.view_model().await.detail {
        Some(DetailPanel::Ready {
            orders: OrdersPanel::Loaded { orders, total },
            ..
        }) => {
            assert!(orders.is_empty());
            assert_eq!(total, 0);
        }
        other => panic!("expected empty Loaded orders panel, got: {other:?}"),
    }
}

#[tokio::test]
async fn orders_failure_is_scoped_to_the_subsection() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    mock_page(&server, 1, 1, vec![customer_json(7, "Grace", "Hopper")]).await;
    Mock::given(method("GET"))
        .and(path("/api/customers/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "customer": customer_json(7, "Grace", "Hopper") })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers/7/orders"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Internal server error" })),
        )
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::default());
    let ctrl = controller(&server, Arc::clone(&sink));
    ctrl.mount().await.unwrap();
    ctrl.open_detail(7).await.unwrap();

    let result = ctrl.load_orders(7).await;
    assert!(result.is_err());

    let vm = ctrl.view_model().await;
    match vm.detail {
        Some(DetailPanel::Ready {
            customer,
            orders: OrdersPanel::Failed { message },
        }) => {
            // Customer fields stay renderable; only the sub-section errs.
            assert_eq!(customer.id, 7);
            assert!(message.contains("Failed to load orders"));
        }
        other => panic!("expected orders-scoped failure, got: {other:?}"),
    }
    assert_eq!(vm.error, None);
}

#[tokio::test]
async fn page_change_reapplies_active_search() {
    let server = MockServer::start().await;
    mock_statistics(&server).await;
    mock_page(
        &server,
        1,
        2,
        vec![
            customer_json(1, "John", "Smith"),
            customer_json(2, "Jane", "Doe"),
        ],
    )
    .await;
    mock_page(
        &server,
        2,
        2,
        vec![
            customer_json(3, "Joan", "Johnson"),
            customer_json(4, "Pat", "Jones"),
        ],
    )
    .await;

    let sink = Arc::new(RecordingSink::default());
    let ctrl = controller(&server, Arc::clone(&sink));
    ctrl.mount().await.unwrap();

    ctrl.commit_search("john").await;
    assert_eq!(ctrl.view_model().await.customers.len(), 1);

    ctrl.change_page(1).await.unwrap();
    let vm = ctrl.view_model().await;
    assert_eq!(vm.pagination.unwrap().page, 2);
    // The filter survives the page change and applies to the new page.
    assert_eq!(vm.search, "john");
    assert_eq!(vm.customers.len(), 1);
    assert_eq!(vm.customers[0].last_name, "Johnson");
}
