//! Local search over the currently loaded page.
//!
//! Search operates only within the page already in memory — it never
//! issues a server query, so a match set is always a subset of the page.

use std::sync::Arc;

use crate::model::Customer;

/// Case-insensitive substring filter over first name, last name, and
/// email (any one match includes the record).
///
/// An empty or whitespace-only query is the identity. The filter is
/// stable: relative order of matches is preserved from the input, and
/// each record is evaluated independently.
pub fn filter_customers(customers: &[Arc<Customer>], query: &str) -> Vec<Arc<Customer>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return customers.to_vec();
    }

    customers
        .iter()
        .filter(|c| {
            c.first_name.to_lowercase().contains(&needle)
                || c.last_name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
