//! Clap derive structures for the `shopdash` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// shopdash -- terminal dashboard for a customer/order API
#[derive(Debug, Parser)]
#[command(
    name = "shopdash",
    version,
    about = "Browse customers, orders, and statistics from the command line",
    long_about = "A terminal dashboard client for the shopdash REST API.\n\n\
        Lists are paginated server-side (12 per page); search filters the\n\
        currently loaded page by name or email.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL (e.g. http://localhost:5000)
    #[arg(long, short = 'u', env = "SHOPDASH_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SHOPDASH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "SHOPDASH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show aggregate order statistics
    Stats,

    /// Browse customers
    #[command(alias = "cust", alias = "c")]
    Customers(CustomersArgs),

    /// Browse orders
    #[command(alias = "ord")]
    Orders(OrdersArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Customers ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomersCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List one page of customers
    #[command(alias = "ls")]
    List {
        /// Page number (1-based)
        #[arg(long, short = 'p', default_value = "1")]
        page: u32,

        /// Filter the page by name or email (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show one customer's details
    Get {
        /// Customer identifier
        id: u64,
    },

    /// List a customer's orders
    Orders {
        /// Customer identifier
        id: u64,
    },
}

// ── Orders ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List one page of all orders
    #[command(alias = "ls")]
    List {
        /// Page number (1-based)
        #[arg(long, short = 'p', default_value = "1")]
        page: u32,
    },

    /// Show one order's details
    Get {
        /// Order identifier
        id: u64,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
