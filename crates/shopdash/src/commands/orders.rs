//! Order command handlers — ad-hoc reporting over all orders.

use tabled::Tabled;

use shopdash_core::{Order, ViewController};

use crate::cli::{GlobalOpts, OrdersArgs, OrdersCommand, OutputFormat};
use crate::error::CliError;
use crate::output;
use crate::sink;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct OrderListRow {
    #[tabled(rename = "Order")]
    id: u64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Items")]
    items: u32,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl OrderListRow {
    fn new(order: &Order, color: bool) -> Self {
        Self {
            id: order.id,
            status: sink::colored_status(&order.status, color),
            items: order.item_count,
            customer: order
                .customer
                .as_ref()
                .map_or_else(|| "-".into(), |c| c.name.clone()),
            created: sink::fmt_date(order.created_at),
        }
    }
}

fn detail(order: &Order, color: bool) -> String {
    let mut lines = vec![
        format!("Order:     {}", order.id),
        format!("Status:    {}", sink::colored_status(&order.status, color)),
        format!("Items:     {}", order.item_count),
    ];
    if let Some(ref customer) = order.customer {
        lines.push(format!("Customer:  {} ({})", customer.name, customer.id));
        if let Some(ref email) = customer.email {
            lines.push(format!("Email:     {email}"));
        }
    }
    lines.push(format!("Created:   {}", sink::fmt_date(order.created_at)));
    if order.shipped_at.is_some() {
        lines.push(format!("Shipped:   {}", sink::fmt_date(order.shipped_at)));
    }
    if order.delivered_at.is_some() {
        lines.push(format!("Delivered: {}", sink::fmt_date(order.delivered_at)));
    }
    if order.returned_at.is_some() {
        lines.push(format!("Returned:  {}", sink::fmt_date(order.returned_at)));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &ViewController,
    args: OrdersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(&global.color);

    match args.command {
        OrdersCommand::List { page } => {
            let (orders, meta) = controller.list_orders(page).await?;

            let out = output::render_list(
                &global.output,
                &orders,
                |o| OrderListRow::new(o, color),
                |o| o.id.to_string(),
            );
            output::print_output(&out, global.quiet);

            if global.output == OutputFormat::Table && meta.controls_visible() && !global.quiet {
                println!("Page {} of {}", meta.page, meta.total_pages);
            }
            Ok(())
        }

        OrdersCommand::Get { id } => {
            let order = controller.get_order(id).await?;

            let out = output::render_single(
                &global.output,
                &order,
                |o| detail(o, color),
                |o| o.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
