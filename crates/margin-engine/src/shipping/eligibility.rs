//! Tariff eligibility checks.
//!
//! Rejections carry a human-readable reason instead of disappearing,
//! so the caller can show why a service is unavailable. The checks run
//! in a fixed order and stop at the first violation; when several
//! constraints fail, the reported reason is always the earliest one.

use crate::package::PackageDimensions;
use crate::shipping::tariff::ShippingTariff;
use serde::{Deserialize, Serialize};

/// What the eligibility checks look at: the package reduced to the
/// four figures the tariff bounds constrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageProfile {
    /// Chargeable weight in grams.
    pub weight_g: f64,
    /// Declared value in the tariff's currency.
    pub declared_value: f64,
    /// Sum of the three sides in cm.
    pub side_sum_cm: f64,
    /// Longest single side in cm.
    pub longest_side_cm: f64,
}

impl PackageProfile {
    /// Create a profile from raw figures.
    pub fn new(weight_g: f64, declared_value: f64, side_sum_cm: f64, longest_side_cm: f64) -> Self {
        Self {
            weight_g,
            declared_value,
            side_sum_cm,
            longest_side_cm,
        }
    }

    /// Build a profile from package dimensions, using the chargeable
    /// weight as the weight basis.
    pub fn from_package(package: &PackageDimensions, declared_value: f64) -> Self {
        Self {
            weight_g: package.chargeable_weight_g(),
            declared_value,
            side_sum_cm: package.side_sum_cm(),
            longest_side_cm: package.longest_side_cm(),
        }
    }
}

/// Outcome of checking one tariff against one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Eligibility {
    /// All checks passed.
    Eligible,
    /// The first violated constraint, as a display-ready reason.
    Rejected { reason: String },
}

impl Eligibility {
    /// Check if the tariff is usable.
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    /// Get the rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Rejected { reason } => Some(reason),
        }
    }
}

/// Check a package against a tariff's constraints.
///
/// Order matters for reproducibility: weight bounds, then value
/// bounds, then dimension limits. Absent constraints are skipped.
pub fn check(tariff: &ShippingTariff, profile: &PackageProfile) -> Eligibility {
    if let Some(min) = tariff.min_weight_g {
        if profile.weight_g < min {
            return rejected(format!("below minimum weight limit {}g", fmt_limit(min)));
        }
    }
    if let Some(max) = tariff.max_weight_g {
        if profile.weight_g > max {
            return rejected(format!("exceeds maximum weight limit {}g", fmt_limit(max)));
        }
    }
    if let Some(min) = tariff.min_value {
        if profile.declared_value < min {
            return rejected(format!("below minimum value limit {}", fmt_limit(min)));
        }
    }
    if let Some(max) = tariff.max_value {
        if profile.declared_value > max {
            return rejected(format!("exceeds maximum value limit {}", fmt_limit(max)));
        }
    }
    if let Some(limit) = tariff.dimension_limit {
        if profile.side_sum_cm > limit.sum_cm {
            return rejected(format!(
                "sum of three sides exceeds {}cm",
                fmt_limit(limit.sum_cm)
            ));
        }
        if profile.longest_side_cm > limit.max_side_cm {
            return rejected(format!(
                "longest side exceeds {}cm",
                fmt_limit(limit.max_side_cm)
            ));
        }
    }
    Eligibility::Eligible
}

fn rejected(reason: String) -> Eligibility {
    Eligibility::Rejected { reason }
}

/// Limits are whole numbers on the platform's rate card; print them
/// without a trailing ".0".
fn fmt_limit(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::TariffCode;
    use crate::money::Currency;
    use crate::shipping::tariff::DimensionLimit;

    fn tariff() -> ShippingTariff {
        ShippingTariff {
            code: TariffCode::new("test"),
            name: "Test".to_string(),
            min_days: 10,
            max_days: 20,
            currency: Currency::CNY,
            base_fee: 23.0,
            rate_fee: 0.025,
            min_weight_g: Some(501.0),
            max_weight_g: Some(25000.0),
            min_value: Some(50.0),
            max_value: Some(30000.0),
            dimension_limit: Some(DimensionLimit {
                sum_cm: 150.0,
                max_side_cm: 105.0,
            }),
            door_delivery_fee: None,
        }
    }

    #[test]
    fn test_eligible_package() {
        let profile = PackageProfile::new(600.0, 2000.0, 120.0, 60.0);
        assert!(check(&tariff(), &profile).is_eligible());
    }

    #[test]
    fn test_below_min_weight() {
        let profile = PackageProfile::new(400.0, 2000.0, 120.0, 60.0);
        let result = check(&tariff(), &profile);
        assert_eq!(result.reason(), Some("below minimum weight limit 501g"));
    }

    #[test]
    fn test_above_max_weight() {
        let profile = PackageProfile::new(26000.0, 2000.0, 120.0, 60.0);
        let result = check(&tariff(), &profile);
        assert_eq!(result.reason(), Some("exceeds maximum weight limit 25000g"));
    }

    #[test]
    fn test_value_bounds() {
        let low = PackageProfile::new(600.0, 10.0, 120.0, 60.0);
        assert_eq!(
            check(&tariff(), &low).reason(),
            Some("below minimum value limit 50")
        );

        let high = PackageProfile::new(600.0, 50000.0, 120.0, 60.0);
        assert_eq!(
            check(&tariff(), &high).reason(),
            Some("exceeds maximum value limit 30000")
        );
    }

    #[test]
    fn test_dimension_limits() {
        let sum = PackageProfile::new(600.0, 2000.0, 200.0, 80.0);
        assert_eq!(
            check(&tariff(), &sum).reason(),
            Some("sum of three sides exceeds 150cm")
        );

        let side = PackageProfile::new(600.0, 2000.0, 140.0, 110.0);
        assert_eq!(
            check(&tariff(), &side).reason(),
            Some("longest side exceeds 105cm")
        );
    }

    #[test]
    fn test_first_violation_wins() {
        // 600 g package, value 2000, sum of sides 200 cm against a
        // tariff with max weight 500 g and sum limit 150 cm: the
        // weight violation must be the one reported.
        let mut t = tariff();
        t.min_weight_g = None;
        t.max_weight_g = Some(500.0);
        let profile = PackageProfile::new(600.0, 2000.0, 200.0, 80.0);
        assert_eq!(
            check(&t, &profile).reason(),
            Some("exceeds maximum weight limit 500g")
        );
    }

    #[test]
    fn test_absent_constraints_skipped() {
        let mut t = tariff();
        t.min_weight_g = None;
        t.max_weight_g = None;
        t.min_value = None;
        t.max_value = None;
        t.dimension_limit = None;
        let profile = PackageProfile::new(0.5, 0.0, 500.0, 400.0);
        assert!(check(&t, &profile).is_eligible());
    }

    #[test]
    fn test_profile_from_package() {
        let pkg = PackageDimensions::new(30.0, 20.0, 10.0, 600.0);
        let profile = PackageProfile::from_package(&pkg, 2000.0);
        // volumetric 1200 g beats actual 600 g
        assert_eq!(profile.weight_g, 1200.0);
        assert_eq!(profile.side_sum_cm, 60.0);
        assert_eq!(profile.longest_side_cm, 30.0);
    }
}
