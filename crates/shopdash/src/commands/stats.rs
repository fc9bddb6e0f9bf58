//! Statistics command handler.

use shopdash_core::{Statistics, ViewController};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn detail(stats: &Statistics) -> String {
    [
        format!("Customers:        {}", output::thousands(stats.unique_customers)),
        format!("Total orders:     {}", output::thousands(stats.total_orders)),
        format!("Avg items/order:  {:.1}", stats.avg_items_per_order),
        format!("Delivered orders: {}", output::thousands(stats.delivered_orders)),
        format!("Returned orders:  {}", output::thousands(stats.returned_orders)),
    ]
    .join("\n")
}

pub async fn handle(controller: &ViewController, global: &GlobalOpts) -> Result<(), CliError> {
    let stats = controller.statistics().await?;

    let out = output::render_single(&global.output, &stats, detail, |s| {
        s.total_orders.to_string()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
