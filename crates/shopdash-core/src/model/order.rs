// ── Order domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Order fulfillment status.
///
/// The server stores free-form lowercase strings; anything outside the
/// known set is carried verbatim in [`OrderStatus::Other`] rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(into = "String", from = "String")]
pub enum OrderStatus {
    Delivered,
    Shipped,
    Processing,
    Returned,
    Cancelled,
    #[strum(default)]
    Other(String),
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| Self::Other(value))
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.to_string()
    }
}

/// The owning customer's identity, present on rows from the all-orders
/// listing (the per-customer listing omits it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
}

/// An order as the dashboard sees it. Owned by exactly one customer,
/// related by identifier rather than embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub status: OrderStatus,
    pub item_count: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub returned_at: Option<DateTime<Utc>>,
    pub customer: Option<OrderCustomer>,
}

impl From<shopdash_api::types::OrderRecord> for Order {
    fn from(raw: shopdash_api::types::OrderRecord) -> Self {
        let parse = |field: &Option<String>| field.as_deref().and_then(super::parse_timestamp);

        let customer = raw.user_id.map(|id| OrderCustomer {
            id,
            name: match (raw.first_name.as_deref(), raw.last_name.as_deref()) {
                (Some(first), Some(last)) => format!("{first} {last}"),
                (Some(one), None) | (None, Some(one)) => one.to_owned(),
                (None, None) => String::new(),
            },
            email: raw.email.clone(),
        });

        Self {
            id: raw.order_id,
            status: OrderStatus::from(raw.status),
            item_count: raw.num_of_item.unwrap_or(0),
            created_at: parse(&raw.created_at),
            shipped_at: parse(&raw.shipped_at),
            delivered_at: parse(&raw.delivered_at),
            returned_at: parse(&raw.returned_at),
            customer,
        }
    }
}
