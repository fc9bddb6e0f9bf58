// ── Customer domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer as the dashboard sees it: read-only, rebuilt from every
/// fetch response, never merged or cached across pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    /// Lifetime order count. Absent on list rows — treated as 0.
    pub order_count: u32,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "City, State" when both are known.
    pub fn location(&self) -> Option<String> {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            (Some(one), None) | (None, Some(one)) => Some(one.to_owned()),
            (None, None) => None,
        }
    }
}

impl From<shopdash_api::types::CustomerRecord> for Customer {
    fn from(raw: shopdash_api::types::CustomerRecord) -> Self {
        Self {
            id: raw.id,
            first_name: raw.first_name,
            last_name: raw.last_name,
            email: raw.email,
            age: raw.age,
            gender: raw.gender,
            city: raw.city,
            state: raw.state,
            country: raw.country,
            created_at: raw.created_at.as_deref().and_then(super::parse_timestamp),
            order_count: raw.order_count.unwrap_or(0),
        }
    }
}
