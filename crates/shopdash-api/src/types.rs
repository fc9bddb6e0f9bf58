// Wire-level response types for the shopdash REST API.
//
// These mirror the JSON payloads exactly; `shopdash-core` converts them
// into domain types. Fields the server sometimes omits are `Option` with
// `#[serde(default)]` so older payload shapes still parse.

use serde::Deserialize;

// ── Statistics ──────────────────────────────────────────────────────

/// Aggregate counters from `GET /statistics`.
#[derive(Debug, Clone, Deserialize)]
pub struct Statistics {
    pub unique_customers: u64,
    pub total_orders: u64,
    /// `AVG(...)` over zero rows is null on the server side.
    #[serde(default)]
    pub avg_items_per_order: Option<f64>,
    pub delivered_orders: u64,
    #[serde(default)]
    pub returned_orders: u64,
}

// ── Pagination envelope ─────────────────────────────────────────────

/// Server-computed pagination block attached to every list response.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub total_count: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

// ── Customers ───────────────────────────────────────────────────────

/// A single customer row as returned by the API.
///
/// The list endpoint omits `order_count`; the detail endpoint includes it.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order_count: Option<u32>,
}

/// `GET /customers?page=P&per_page=N` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerPage {
    pub customers: Vec<CustomerRecord>,
    pub pagination: Pagination,
}

// ── Orders ──────────────────────────────────────────────────────────

/// A single order row.
///
/// Rows from the all-orders endpoint additionally carry the owning
/// customer's identity (`user_id`, names, email); rows scoped to one
/// customer do not.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub order_id: u64,
    pub status: String,
    #[serde(default)]
    pub num_of_item: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub shipped_at: Option<String>,
    #[serde(default)]
    pub delivered_at: Option<String>,
    #[serde(default)]
    pub returned_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `GET /customers/{id}/orders` response. An empty `orders` list is a
/// valid, non-error result.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerOrders {
    pub customer_id: u64,
    pub orders: Vec<OrderRecord>,
    pub total_orders: u32,
}

/// `GET /orders?page=P&per_page=N` response.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderPage {
    pub orders: Vec<OrderRecord>,
    pub pagination: Pagination,
}
