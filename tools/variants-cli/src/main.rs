//! Variants CLI - Command line tool for product variant selectors.
//!
//! Commands:
//! - `variants inspect` - Show dimensions, prices and stock for a product
//! - `variants resolve` - Apply selections and report availability
//! - `variants pick` - Choose a variant interactively

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{InspectArgs, PickArgs, ResolveArgs};

/// Variants CLI - Inspect and drive product variant selectors
#[derive(Parser)]
#[command(name = "variants")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dimensions, price range and stock of a product
    Inspect(InspectArgs),

    /// Apply selections and print availability
    Resolve(ResolveArgs),

    /// Pick a variant interactively
    Pick(PickArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Inspect(args) => commands::inspect::run(args, &ctx),
        Commands::Resolve(args) => commands::resolve::run(args, &ctx),
        Commands::Pick(args) => commands::pick::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
