//! CLI command implementations.

pub mod config;
pub mod max_cost;
pub mod price;
pub mod ship;
pub mod weight;

use clap::{Args, Subcommand};

/// Arguments for the ship command.
#[derive(Args)]
pub struct ShipArgs {
    /// Package length in cm.
    #[arg(long)]
    pub length: f64,

    /// Package width in cm.
    #[arg(long)]
    pub width: f64,

    /// Package height in cm.
    #[arg(long)]
    pub height: f64,

    /// Actual weight in grams.
    #[arg(long)]
    pub weight: f64,

    /// Declared value, in the tariff currency.
    #[arg(long, default_value = "0")]
    pub value: f64,

    /// Use the deliver-to-door fee variant.
    #[arg(long)]
    pub door: bool,
}

/// Arguments for the weight command.
#[derive(Args)]
pub struct WeightArgs {
    /// Package length in cm.
    #[arg(long)]
    pub length: f64,

    /// Package width in cm.
    #[arg(long)]
    pub width: f64,

    /// Package height in cm.
    #[arg(long)]
    pub height: f64,

    /// Actual weight in grams.
    #[arg(long)]
    pub weight: f64,
}

/// Arguments for the price command.
#[derive(Args)]
pub struct PriceArgs {
    /// Procurement cost of the goods.
    #[arg(long)]
    pub cost: f64,

    /// Chargeable weight in grams (used when --shipping is not given).
    #[arg(long, default_value = "0")]
    pub weight: f64,

    /// Target profit rate: percent, or a fraction below 1.
    #[arg(short, long)]
    pub margin: Option<f64>,

    /// Platform commission rate, percent.
    #[arg(long, default_value = "0")]
    pub commission: f64,

    /// Advertising rate, percent.
    #[arg(long, default_value = "0")]
    pub ad: f64,

    /// Withdrawal fee rate, percent.
    #[arg(long, default_value = "0")]
    pub withdraw: f64,

    /// Return-loss rate, percent.
    #[arg(long = "return", default_value = "0")]
    pub return_rate: f64,

    /// Domestic (first-leg) shipping fee.
    #[arg(long, default_value = "0")]
    pub domestic: f64,

    /// Other flat fees.
    #[arg(long, default_value = "0")]
    pub other: f64,

    /// Cross-border shipping cost override.
    #[arg(long)]
    pub shipping: Option<f64>,

    /// Storefront discount (informational, not in the formula).
    #[arg(long, default_value = "0")]
    pub discount: f64,

    /// Exchange rate to the destination currency.
    #[arg(long)]
    pub rate: Option<f64>,

    /// Destination currency code.
    #[arg(long)]
    pub to: Option<String>,
}

/// Arguments for the max-cost command.
#[derive(Args)]
pub struct MaxCostArgs {
    /// Sale price the margin is measured against.
    #[arg(long)]
    pub price: f64,

    /// Chargeable weight in grams.
    #[arg(long)]
    pub weight: f64,

    /// Target profit rate: percent, or a fraction below 1.
    #[arg(short, long)]
    pub margin: Option<f64>,

    /// Flat packing fee.
    #[arg(long)]
    pub packing: Option<f64>,

    /// Flat commission rate, percent.
    #[arg(long)]
    pub commission: Option<f64>,

    /// Category whose commission table to use from the config.
    #[arg(long)]
    pub category: Option<String>,

    /// Extra percentage costs of the price (ads, withdrawal,
    /// return-loss), percent.
    #[arg(long, default_value = "0")]
    pub extra_rate: f64,

    /// Tariff code from the catalog; omit for the default formula.
    #[arg(long)]
    pub tariff: Option<String>,

    /// Use the deliver-to-door fee variant.
    #[arg(long)]
    pub door: bool,

    /// Working currency code.
    #[arg(long)]
    pub currency: Option<String>,

    /// Exchange rate from the tariff currency to the working currency.
    #[arg(long)]
    pub rate: Option<f64>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
