//! CLI configuration.
//!
//! `margin.toml` carries what the remote platform would normally
//! supply: the tariff catalog and per-category commission tables,
//! plus calculator defaults. The engine never reads this itself; the
//! CLI resolves everything here and passes plain values in.

use std::collections::HashMap;

use anyhow::{Context, Result};
use margin_engine::commission::{CommissionCatalog, CommissionTable};
use margin_engine::ids::CategoryId;
use margin_engine::shipping::{ShippingTariff, TariffCatalog};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Calculator defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Tariff catalog; empty means the built-in reference catalog.
    #[serde(default)]
    pub tariffs: Vec<ShippingTariff>,

    /// Commission tables keyed by category.
    #[serde(default)]
    pub commission: HashMap<String, CommissionTable>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// The tariff catalog to calculate against.
    pub fn catalog(&self) -> TariffCatalog {
        if self.tariffs.is_empty() {
            TariffCatalog::builtin()
        } else {
            TariffCatalog::new(self.tariffs.clone())
        }
    }

    /// Commission tables as an engine catalog.
    pub fn commission_catalog(&self) -> CommissionCatalog {
        let mut catalog = CommissionCatalog::new();
        for (category, table) in &self.commission {
            catalog.insert(CategoryId::new(category.clone()), *table);
        }
        catalog
    }
}

/// Calculator defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Working currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Target profit rate, percent.
    #[serde(default = "default_margin")]
    pub target_profit_rate: f64,

    /// Flat packing fee.
    #[serde(default)]
    pub packing_fee: f64,

    /// Exchange rate to the destination currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,

    /// Destination currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_currency: Option<String>,
}

fn default_currency() -> String {
    "CNY".to_string()
}

fn default_margin() -> f64 {
    20.0
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            target_profit_rate: default_margin(),
            packing_fee: 0.0,
            exchange_rate: None,
            destination_currency: None,
        }
    }
}

/// Generate a default margin.toml config file.
pub fn generate_default_config() -> String {
    r#"# Margin calculator configuration

[defaults]
currency = "CNY"
target_profit_rate = 20.0
packing_fee = 5.0
# exchange_rate = 11.5
# destination_currency = "RUB"

# Tariffs override the built-in reference catalog when present.
# [[tariffs]]
# code = "economy"
# name = "Economy"
# min_days = 15
# max_days = 45
# currency = "CNY"
# base_fee = 23.0
# rate_fee = 0.025
# min_weight_g = 501.0
# max_weight_g = 25000.0
# max_value = 30000.0
# dimension_limit = { sum_cm = 150.0, max_side_cm = 105.0 }
# door_delivery_fee = "33+0.025/g"

# Commission tables per category: percent for the three price bands
# (up to 1500, 1501-5000, above 5000).
[commission.electronics]
low = 14.0
mid = 12.0
high = 9.5

[commission.apparel]
low = 16.0
mid = 14.0
high = 12.0
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.defaults.currency, "CNY");
        assert!(config.tariffs.is_empty());
        assert_eq!(config.commission["electronics"].mid, 12.0);
        // empty tariff list falls back to the built-in catalog
        assert!(!config.catalog().is_empty());
    }
}
