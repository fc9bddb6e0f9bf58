//! Terminal implementation of the core's `RenderSink` boundary.
//!
//! Renders settled view-model frames to stdout: statistics, the customer
//! table, pagination, and the detail panel. Detail frames append — the
//! customer block prints once, then the orders section prints below it
//! when the independent orders fetch resolves.

use std::sync::{Arc, Mutex};

use owo_colors::OwoColorize;
use tabled::Tabled;
use tracing::debug;

use shopdash_core::{
    Customer, DetailPanel, Order, OrderStatus, OrdersPanel, RenderSink, ViewModel,
};

use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Age")]
    age: String,
    #[tabled(rename = "Location")]
    location: String,
}

impl From<&Arc<Customer>> for CustomerRow {
    fn from(c: &Arc<Customer>) -> Self {
        Self {
            id: c.id,
            name: c.full_name(),
            email: c.email.clone(),
            age: c.age.map_or_else(|| "-".into(), |a| a.to_string()),
            location: c.location().unwrap_or_else(|| "-".into()),
        }
    }
}

#[derive(Tabled)]
pub struct OrderRow {
    #[tabled(rename = "Order")]
    id: u64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Items")]
    items: u32,
    #[tabled(rename = "Created")]
    created: String,
}

impl OrderRow {
    pub fn new(order: &Order, color: bool) -> Self {
        Self {
            id: order.id,
            status: colored_status(&order.status, color),
            items: order.item_count,
            created: fmt_date(order.created_at),
        }
    }
}

// ── Formatting helpers ──────────────────────────────────────────────

pub fn fmt_date(ts: Option<chrono::DateTime<chrono::Utc>>) -> String {
    ts.map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d").to_string())
}

/// Order status with the dashboard's color scheme.
pub fn colored_status(status: &OrderStatus, color: bool) -> String {
    let text = status.to_string();
    if !color {
        return text;
    }
    match status {
        OrderStatus::Delivered => text.green().to_string(),
        OrderStatus::Shipped => text.blue().to_string(),
        OrderStatus::Processing => text.yellow().to_string(),
        OrderStatus::Returned => text.red().to_string(),
        OrderStatus::Cancelled | OrderStatus::Other(_) => text.dimmed().to_string(),
    }
}

/// Aligned field block for a single customer.
pub fn customer_detail(c: &Customer) -> String {
    let mut lines = vec![
        format!("ID:        {}", c.id),
        format!("Name:      {}", c.full_name()),
        format!("Email:     {}", c.email),
    ];
    if let Some(age) = c.age {
        lines.push(format!("Age:       {age}"));
    }
    if let Some(ref gender) = c.gender {
        lines.push(format!("Gender:    {gender}"));
    }
    if let Some(location) = c.location() {
        lines.push(format!("Location:  {location}"));
    }
    if let Some(ref country) = c.country {
        lines.push(format!("Country:   {country}"));
    }
    lines.push(format!("Created:   {}", fmt_date(c.created_at)));
    lines.push(format!("Orders:    {}", c.order_count));
    lines.join("\n")
}

// ── TerminalSink ────────────────────────────────────────────────────

pub struct TerminalSink {
    /// Frames print only in table mode; structured formats are rendered
    /// by the command handlers from the final view-model.
    enabled: bool,
    quiet: bool,
    color: bool,
    state: Mutex<SinkState>,
}

#[derive(Default)]
struct SinkState {
    /// Customer whose detail block has already been printed.
    last_detail: Option<u64>,
    stats_printed: bool,
}

impl TerminalSink {
    pub fn new(enabled: bool, quiet: bool, color: bool) -> Self {
        Self {
            enabled,
            quiet,
            color,
            state: Mutex::new(SinkState::default()),
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_owned()
        }
    }

    fn render_list_frame(&self, view: &ViewModel, state: &mut SinkState) {
        // Nothing fetched yet — wait for a settled frame.
        let Some(meta) = view.pagination else { return };

        if let Some(ref stats) = view.statistics {
            if !state.stats_printed {
                println!(
                    "{}  customers: {} · orders: {} · avg items/order: {:.1} · delivered: {} · returned: {}",
                    self.dim("stats"),
                    output::thousands(stats.unique_customers),
                    output::thousands(stats.total_orders),
                    stats.avg_items_per_order,
                    output::thousands(stats.delivered_orders),
                    output::thousands(stats.returned_orders),
                );
                state.stats_printed = true;
            }
        }

        if view.customers.is_empty() {
            if view.search.trim().is_empty() {
                println!("No customers found.");
            } else {
                println!("No customers found matching your search criteria.");
            }
        } else {
            let rows: Vec<CustomerRow> = view.customers.iter().map(CustomerRow::from).collect();
            println!("{}", output::render_table(&rows));
        }

        if meta.controls_visible() {
            println!("{}", self.dim(&format!("Page {} of {}", meta.page, meta.total_pages)));
        }
    }

    fn render_detail_frame(
        &self,
        customer: &Arc<Customer>,
        orders: &OrdersPanel,
        state: &mut SinkState,
    ) {
        if matches!(orders, OrdersPanel::Loading) {
            return;
        }

        if state.last_detail != Some(customer.id) {
            println!("{}", customer_detail(customer));
            state.last_detail = Some(customer.id);
        }

        match orders {
            OrdersPanel::NotRequested | OrdersPanel::Loading => {}
            OrdersPanel::Loaded { orders, total } => {
                if orders.is_empty() {
                    println!("\nNo orders found for this customer.");
                } else {
                    println!("\nCustomer orders ({total}):");
                    let rows: Vec<OrderRow> =
                        orders.iter().map(|o| OrderRow::new(o, self.color)).collect();
                    println!("{}", output::render_table(&rows));
                }
            }
            OrdersPanel::Failed { message } => {
                // Inline, scoped to the orders sub-section.
                eprintln!("{}", self.error_text(message));
            }
        }
    }

    fn error_text(&self, message: &str) -> String {
        if self.color {
            message.red().to_string()
        } else {
            message.to_owned()
        }
    }
}

impl RenderSink for TerminalSink {
    fn render(&self, view: &ViewModel) {
        if !self.enabled || self.quiet {
            return;
        }
        // In-flight frames settle into a later render; skip them.
        if view.loading {
            return;
        }

        let mut state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        match &view.detail {
            // Detail failures surface through the command's error path.
            Some(DetailPanel::Loading | DetailPanel::Failed { .. }) => {}
            Some(DetailPanel::Ready { customer, orders }) => {
                self.render_detail_frame(customer, orders, &mut state);
            }
            None => self.render_list_frame(view, &mut state),
        }
    }

    fn render_error(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{}", self.error_text(message));
    }

    fn set_loading(&self, loading: bool) {
        debug!(loading, "loading indicator");
    }
}
