//! Canonical domain types, converted from `shopdash-api` wire types.

pub mod customer;
pub mod order;
pub mod statistics;

pub use customer::Customer;
pub use order::{Order, OrderCustomer, OrderStatus};
pub use statistics::Statistics;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a server timestamp leniently.
///
/// The API emits either RFC 3339 or SQLite's `%Y-%m-%d %H:%M:%S`;
/// anything else maps to `None` rather than failing the whole record.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
