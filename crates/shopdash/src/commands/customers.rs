//! Customer command handlers — the dashboard flows.
//!
//! Table output is drawn by the [`TerminalSink`](crate::sink::TerminalSink)
//! as the controller emits frames; structured formats serialize the final
//! view-model instead.

use shopdash_core::{DetailPanel, OrdersPanel, ViewController, ViewModel};

use crate::cli::{CustomersArgs, CustomersCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;
use crate::sink;

pub async fn handle(
    controller: &ViewController,
    args: CustomersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CustomersCommand::List { page, search } => {
            // Seed the search before loading so the single settled frame
            // already has the filter applied.
            if let Some(query) = search.as_deref() {
                controller.commit_search(query).await;
            }
            if page <= 1 {
                controller.mount().await?;
            } else {
                controller.goto_page(page).await?;
            }

            let vm = controller.view_model().await;
            render_list_structured(&vm, global);
            Ok(())
        }

        CustomersCommand::Get { id } => {
            controller.open_detail(id).await?;

            let vm = controller.view_model().await;
            if let Some(DetailPanel::Ready { customer, .. }) = vm.detail {
                let out = output::render_single(
                    &global.output,
                    customer.as_ref(),
                    sink::customer_detail,
                    |c| c.id.to_string(),
                );
                // Table mode already rendered through the sink.
                if global.output != OutputFormat::Table {
                    output::print_output(&out, global.quiet);
                }
            }
            Ok(())
        }

        CustomersCommand::Orders { id } => {
            // Two independent steps: customer fields render first, orders
            // append once they resolve.
            controller.open_detail(id).await?;
            controller.load_orders(id).await?;

            if global.output != OutputFormat::Table {
                let vm = controller.view_model().await;
                if let Some(DetailPanel::Ready {
                    orders: OrdersPanel::Loaded { orders, .. },
                    ..
                }) = vm.detail
                {
                    let out = output::render_list(
                        &global.output,
                        &orders,
                        |o| sink::OrderRow::new(o, false),
                        |o| o.id.to_string(),
                    );
                    output::print_output(&out, global.quiet);
                }
            }
            Ok(())
        }
    }
}

fn render_list_structured(vm: &ViewModel, global: &GlobalOpts) {
    let out = match global.output {
        // Table mode already rendered through the sink.
        OutputFormat::Table => return,
        OutputFormat::Json => output::render_json_pretty(vm),
        OutputFormat::JsonCompact => output::render_json_compact(vm),
        OutputFormat::Yaml => output::render_yaml(vm),
        OutputFormat::Plain => vm
            .customers
            .iter()
            .map(|c| c.id.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    output::print_output(&out, global.quiet);
}
