//! Tiered platform commission by price band.

use crate::error::EngineError;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Price bands used by the platform's commission schedule, in the
/// reference currency.
///
/// Bands are contiguous and non-overlapping; boundary values belong to
/// the lower band (1500 is low, 5000 is mid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBand {
    /// Price ≤ 1500.
    Low,
    /// 1500 < price ≤ 5000.
    Mid,
    /// Price > 5000.
    High,
}

impl PriceBand {
    /// Resolve the band for a price.
    pub fn for_price(price: f64) -> Self {
        if price <= 1500.0 {
            PriceBand::Low
        } else if price <= 5000.0 {
            PriceBand::Mid
        } else {
            PriceBand::High
        }
    }

    /// Display label for the band.
    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Low => "\u{2264}1500",
            PriceBand::Mid => "1501-5000",
            PriceBand::High => ">5000",
        }
    }
}

/// A category's commission percentages, one per price band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommissionTable {
    /// Percentage for the ≤1500 band.
    pub low: f64,
    /// Percentage for the 1501–5000 band.
    pub mid: f64,
    /// Percentage for the >5000 band.
    pub high: f64,
}

impl CommissionTable {
    /// Create a table from three band percentages.
    pub fn new(low: f64, mid: f64, high: f64) -> Self {
        Self { low, mid, high }
    }

    /// A table charging the same percentage in every band.
    pub fn flat(rate: f64) -> Self {
        Self::new(rate, rate, rate)
    }

    /// Commission percentage applicable at a price.
    pub fn rate_for(&self, price: f64) -> f64 {
        match PriceBand::for_price(price) {
            PriceBand::Low => self.low,
            PriceBand::Mid => self.mid,
            PriceBand::High => self.high,
        }
    }
}

/// Per-category commission tables.
///
/// A missing category is a signaled condition: lookups return `None`
/// and the caller decides the fallback. The catalog never invents a
/// default rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommissionCatalog {
    tables: HashMap<CategoryId, CommissionTable>,
}

impl CommissionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a category's table.
    pub fn insert(&mut self, category: CategoryId, table: CommissionTable) {
        self.tables.insert(category, table);
    }

    /// Get the table for a category.
    pub fn table_for(&self, category: &CategoryId) -> Option<&CommissionTable> {
        self.tables.get(category)
    }

    /// Get the table for a category, failing with a typed error.
    pub fn require(&self, category: &CategoryId) -> Result<&CommissionTable, EngineError> {
        self.table_for(category)
            .ok_or_else(|| EngineError::MissingCommissionTable(category.to_string()))
    }

    /// Resolve the commission percentage for a category at a price.
    pub fn rate_for(&self, category: &CategoryId, price: f64) -> Option<f64> {
        self.table_for(category).map(|t| t.rate_for(price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(PriceBand::for_price(1500.0), PriceBand::Low);
        assert_eq!(PriceBand::for_price(1500.01), PriceBand::Mid);
        assert_eq!(PriceBand::for_price(5000.0), PriceBand::Mid);
        assert_eq!(PriceBand::for_price(5000.01), PriceBand::High);
    }

    #[test]
    fn test_table_rate_for() {
        let table = CommissionTable::new(14.0, 12.0, 9.5);
        assert_eq!(table.rate_for(800.0), 14.0);
        assert_eq!(table.rate_for(2000.0), 12.0);
        assert_eq!(table.rate_for(9000.0), 9.5);
    }

    #[test]
    fn test_flat_table() {
        let table = CommissionTable::flat(10.0);
        assert_eq!(table.rate_for(100.0), 10.0);
        assert_eq!(table.rate_for(10000.0), 10.0);
    }

    #[test]
    fn test_missing_category_is_signaled() {
        let mut catalog = CommissionCatalog::new();
        catalog.insert(
            CategoryId::new("electronics"),
            CommissionTable::new(14.0, 12.0, 9.5),
        );

        let known = CategoryId::new("electronics");
        let unknown = CategoryId::new("furniture");
        assert_eq!(catalog.rate_for(&known, 2000.0), Some(12.0));
        assert_eq!(catalog.rate_for(&unknown, 2000.0), None);
        assert!(matches!(
            catalog.require(&unknown),
            Err(EngineError::MissingCommissionTable(_))
        ));
    }
}
