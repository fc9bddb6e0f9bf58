//! Command handlers. Each handler drives a [`ViewController`] and renders
//! through the sink (table mode) or serializes the result (structured).

pub mod customers;
pub mod orders;
pub mod stats;

use shopdash_core::ViewController;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Command,
    controller: &ViewController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Stats => stats::handle(controller, global).await,
        Command::Customers(args) => customers::handle(controller, args, global).await,
        Command::Orders(args) => orders::handle(controller, args, global).await,
        // Completions are handled before a controller exists.
        Command::Completions(_) => Ok(()),
    }
}
