//! The rendering boundary.
//!
//! The controller never reaches into a presentation layer; it emits
//! [`ViewModel`] snapshots through a [`RenderSink`], and user-generated
//! events re-enter the controller as new commands.

use std::sync::Arc;

use serde::Serialize;

use crate::model::{Customer, Order, Statistics};
use crate::pagination::PageMetadata;

/// Rendering target driven by the controller.
///
/// Implementations draw; they never mutate controller state and never
/// feed anything back except through user events.
pub trait RenderSink: Send + Sync {
    /// Draw a full view-model snapshot.
    fn render(&self, view: &ViewModel);

    /// Show a global error banner (list/statistics failures).
    fn render_error(&self, message: &str);

    /// Toggle the loading indicator.
    fn set_loading(&self, loading: bool);
}

/// The minimal snapshot a rendering layer needs to draw the current
/// state. Produced only by the controller; never mutated by the sink.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub loading: bool,
    pub error: Option<String>,
    pub statistics: Option<Statistics>,
    /// Customers to display: the current page, filtered when a search
    /// term is active.
    pub customers: Vec<Arc<Customer>>,
    pub pagination: Option<PageMetadata>,
    pub search: String,
    pub detail: Option<DetailPanel>,
}

/// Detail drill-down state for one customer.
#[derive(Debug, Clone, Serialize)]
pub enum DetailPanel {
    /// Customer fetch in flight.
    Loading,
    /// Detail-scoped failure; the list view is unaffected.
    Failed { message: String },
    /// Customer fields are renderable; orders arrive independently.
    Ready {
        customer: Arc<Customer>,
        orders: OrdersPanel,
    },
}

/// Orders sub-section of the detail panel.
///
/// `Loaded` with an empty list is the explicit empty state — distinct
/// from `Failed`, which is an inline error scoped to this sub-section.
#[derive(Debug, Clone, Serialize)]
pub enum OrdersPanel {
    NotRequested,
    Loading,
    Loaded { orders: Vec<Order>, total: u32 },
    Failed { message: String },
}
