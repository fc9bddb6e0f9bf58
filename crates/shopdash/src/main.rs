mod cli;
mod commands;
mod config;
mod error;
mod output;
mod sink;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shopdash_api::{ApiClient, TransportConfig};
use shopdash_core::{CoreError, ViewController};

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Shell completions don't need an API client
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "shopdash", &mut std::io::stdout());
            Ok(())
        }

        // All other commands drive a controller against the API
        cmd => {
            let controller = build_controller(&cli.global)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &controller, &cli.global).await
        }
    }
}

/// Build a `ViewController` from the config file, environment, and CLI
/// overrides, wired to a terminal render sink.
fn build_controller(global: &cli::GlobalOpts) -> Result<ViewController, CliError> {
    let cfg = config::load_config()?;
    let resolved = config::resolve(global, &cfg);

    let transport = TransportConfig {
        timeout: resolved.timeout,
    };
    let client = ApiClient::new(&resolved.api_url, &transport)
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    let sink = Arc::new(sink::TerminalSink::new(
        global.output == OutputFormat::Table,
        global.quiet,
        output::should_color(&global.color),
    ));

    Ok(ViewController::new(client, sink))
}
