//! Shipping-service tariff reference data.
//!
//! Tariffs are read-only: the surrounding application loads them from
//! the platform (or configuration) once and passes them into each
//! calculation.

use crate::error::EngineError;
use crate::ids::TariffCode;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Dimension constraints on a tariff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionLimit {
    /// Maximum of length + width + height, in cm.
    pub sum_cm: f64,
    /// Maximum of any single side, in cm.
    pub max_side_cm: f64,
}

/// A shipping-service tariff: a two-part fee formula plus eligibility
/// bounds.
///
/// Any absent bound means "no limit" for that check. Fees are in
/// `currency` major units; `rate_fee` is per gram of chargeable
/// weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingTariff {
    /// Unique service code.
    pub code: TariffCode,
    /// Display name.
    pub name: String,
    /// Minimum delivery days.
    pub min_days: u32,
    /// Maximum delivery days.
    pub max_days: u32,
    /// Currency the fees are quoted in.
    #[serde(default)]
    pub currency: Currency,
    /// Flat fee component.
    pub base_fee: f64,
    /// Per-gram fee component.
    pub rate_fee: f64,
    /// Minimum chargeable weight in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_weight_g: Option<f64>,
    /// Maximum chargeable weight in grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight_g: Option<f64>,
    /// Minimum declared value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    /// Maximum declared value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Dimension constraints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_limit: Option<DimensionLimit>,
    /// Alternate fee formula for the deliver-to-door service level,
    /// as the platform ships it: flat fee, a `+`, then the per-gram
    /// part (e.g. `"33+0.035/g"`). Only the flat component differs
    /// from the regular formula.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_delivery_fee: Option<String>,
}

impl ShippingTariff {
    /// Get a delivery estimate string (e.g. "12-20 days").
    pub fn delivery_estimate(&self) -> String {
        if self.min_days == self.max_days {
            format!("{} days", self.min_days)
        } else {
            format!("{}-{} days", self.min_days, self.max_days)
        }
    }

    /// Flat fee for the deliver-to-door service level, parsed out of
    /// the platform's formula string.
    ///
    /// Returns `Ok(None)` when the tariff has no door-delivery
    /// variant. A present but unparsable formula is a data defect and
    /// reported as [`EngineError::BadFeeFormula`].
    pub fn door_delivery_base_fee(&self) -> Result<Option<f64>, EngineError> {
        let Some(formula) = &self.door_delivery_fee else {
            return Ok(None);
        };
        let flat = formula
            .split('+')
            .next()
            .map(str::trim)
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| EngineError::BadFeeFormula(formula.clone()))?;
        Ok(Some(flat))
    }
}

/// The set of tariffs offered by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TariffCatalog {
    tariffs: Vec<ShippingTariff>,
}

impl TariffCatalog {
    /// Create a catalog from a list of tariffs.
    pub fn new(tariffs: Vec<ShippingTariff>) -> Self {
        Self { tariffs }
    }

    /// Look up a tariff by code.
    pub fn get(&self, code: &str) -> Option<&ShippingTariff> {
        self.tariffs.iter().find(|t| t.code.as_str() == code)
    }

    /// Look up a tariff by code, failing with a typed error.
    pub fn require(&self, code: &str) -> Result<&ShippingTariff, EngineError> {
        self.get(code)
            .ok_or_else(|| EngineError::TariffNotFound(code.to_string()))
    }

    /// Iterate all tariffs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ShippingTariff> {
        self.tariffs.iter()
    }

    /// Number of tariffs.
    pub fn len(&self) -> usize {
        self.tariffs.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }

    /// Reference catalog matching the platform's published rate card.
    ///
    /// Real deployments replace this with data fetched from the
    /// platform; the built-ins keep the calculators usable offline.
    pub fn builtin() -> Self {
        Self::new(vec![
            ShippingTariff {
                code: TariffCode::new("economy-small"),
                name: "Economy small packet".to_string(),
                min_days: 20,
                max_days: 50,
                currency: Currency::CNY,
                base_fee: 13.0,
                rate_fee: 0.02,
                min_weight_g: Some(1.0),
                max_weight_g: Some(500.0),
                min_value: None,
                max_value: Some(7000.0),
                dimension_limit: Some(DimensionLimit {
                    sum_cm: 90.0,
                    max_side_cm: 60.0,
                }),
                door_delivery_fee: Some("21+0.02/g".to_string()),
            },
            ShippingTariff {
                code: TariffCode::new("economy"),
                name: "Economy".to_string(),
                min_days: 15,
                max_days: 45,
                currency: Currency::CNY,
                base_fee: 23.0,
                rate_fee: 0.025,
                min_weight_g: Some(501.0),
                max_weight_g: Some(25000.0),
                min_value: None,
                max_value: Some(30000.0),
                dimension_limit: Some(DimensionLimit {
                    sum_cm: 150.0,
                    max_side_cm: 105.0,
                }),
                door_delivery_fee: Some("33+0.025/g".to_string()),
            },
            ShippingTariff {
                code: TariffCode::new("express"),
                name: "Express".to_string(),
                min_days: 7,
                max_days: 15,
                currency: Currency::CNY,
                base_fee: 45.0,
                rate_fee: 0.035,
                min_weight_g: Some(1.0),
                max_weight_g: Some(31000.0),
                min_value: Some(100.0),
                max_value: Some(100000.0),
                dimension_limit: Some(DimensionLimit {
                    sum_cm: 180.0,
                    max_side_cm: 120.0,
                }),
                door_delivery_fee: Some("55+0.035/g".to_string()),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn economy() -> ShippingTariff {
        TariffCatalog::builtin().get("economy").unwrap().clone()
    }

    #[test]
    fn test_delivery_estimate() {
        let mut tariff = economy();
        assert_eq!(tariff.delivery_estimate(), "15-45 days");

        tariff.min_days = 10;
        tariff.max_days = 10;
        assert_eq!(tariff.delivery_estimate(), "10 days");
    }

    #[test]
    fn test_door_delivery_base_fee_parsed() {
        let tariff = economy();
        assert_eq!(tariff.door_delivery_base_fee().unwrap(), Some(33.0));
    }

    #[test]
    fn test_door_delivery_absent() {
        let mut tariff = economy();
        tariff.door_delivery_fee = None;
        assert_eq!(tariff.door_delivery_base_fee().unwrap(), None);
    }

    #[test]
    fn test_door_delivery_malformed() {
        let mut tariff = economy();
        tariff.door_delivery_fee = Some("call us".to_string());
        assert!(matches!(
            tariff.door_delivery_base_fee(),
            Err(EngineError::BadFeeFormula(_))
        ));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = TariffCatalog::builtin();
        assert!(catalog.get("express").is_some());
        assert!(catalog.get("teleport").is_none());
        assert!(matches!(
            catalog.require("teleport"),
            Err(EngineError::TariffNotFound(_))
        ));
    }

    #[test]
    fn test_catalog_serde_roundtrip() {
        let catalog = TariffCatalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: TariffCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }
}
