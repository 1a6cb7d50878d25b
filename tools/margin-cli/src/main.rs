//! Margin CLI - pricing and shipping calculators for cross-border
//! marketplace sellers.
//!
//! Commands:
//! - `margin ship` - Rank shipping tariffs for a package
//! - `margin weight` - Resolve volumetric and chargeable weight
//! - `margin price` - Solve the sale price for a target margin
//! - `margin max-cost` - Solve the max procurement cost at a price
//! - `margin config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, MaxCostArgs, PriceArgs, ShipArgs, WeightArgs};

/// Margin CLI - margin and shipping-rate calculators
#[derive(Parser)]
#[command(name = "margin")]
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
    /// Rank shipping tariffs for a package
    Ship(ShipArgs),

    /// Resolve volumetric and chargeable weight
    Weight(WeightArgs),

    /// Solve the sale price for a target margin
    Price(PriceArgs),

    /// Solve the max procurement cost at a sale price
    MaxCost(MaxCostArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Ship(args) => commands::ship::run(args, &ctx),
        Commands::Weight(args) => commands::weight::run(args, &ctx),
        Commands::Price(args) => commands::price::run(args, &ctx),
        Commands::MaxCost(args) => commands::max_cost::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
