//! View-state synchronization core for the shopdash dashboard.
//!
//! This crate owns the business logic between `shopdash-api` and the
//! rendering front-end:
//!
//! - **[`ViewController`]** — Central facade reconciling the remote
//!   paginated dataset with local view state. Owns the latest-request-wins
//!   consistency rule (per-query-class sequence tags), the debounced search
//!   commit, and the detail drill-down lifecycle. Drives a [`RenderSink`].
//!
//! - **[`PaginationState`]** — Pure page bookkeeping: navigation targets
//!   clamped to `[1, total_pages]`, affordances re-derived from the latest
//!   server metadata.
//!
//! - **[`filter_customers`]** — Stable, case-insensitive substring filter
//!   over the currently loaded page.
//!
//! - **Domain model** ([`model`]) — `Customer`, `Order`, `OrderStatus`,
//!   `Statistics`, converted from the wire types in `shopdash-api`.

pub mod controller;
pub mod error;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use controller::{PAGE_SIZE, SEARCH_DEBOUNCE, ViewController, ViewState};
pub use error::CoreError;
pub use filter::filter_customers;
pub use pagination::{PageMetadata, PaginationState};
pub use view::{DetailPanel, OrdersPanel, RenderSink, ViewModel};

// Re-export model types at the crate root for ergonomics.
pub use model::{Customer, Order, OrderCustomer, OrderStatus, Statistics};
