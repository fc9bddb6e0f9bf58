// ── Aggregate statistics ──

use serde::{Deserialize, Serialize};

/// Dashboard-level counters from `GET /statistics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub unique_customers: u64,
    pub total_orders: u64,
    pub avg_items_per_order: f64,
    pub delivered_orders: u64,
    pub returned_orders: u64,
}

impl From<shopdash_api::types::Statistics> for Statistics {
    fn from(raw: shopdash_api::types::Statistics) -> Self {
        Self {
            unique_customers: raw.unique_customers,
            total_orders: raw.total_orders,
            avg_items_per_order: raw.avg_items_per_order.unwrap_or(0.0),
            delivered_orders: raw.delivered_orders,
            returned_orders: raw.returned_orders,
        }
    }
}
