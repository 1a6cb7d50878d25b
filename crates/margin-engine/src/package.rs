//! Package dimensions and chargeable weight resolution.

use serde::{Deserialize, Serialize};

/// Carrier-standard divisor for volumetric weight (cm³ per gram).
///
/// Fixed industry constant; callers never change it.
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Physical dimensions and actual weight of one package.
///
/// Immutable, constructed per calculation call. Inputs are assumed
/// already validated as non-negative by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageDimensions {
    /// Length in cm.
    pub length_cm: f64,
    /// Width in cm.
    pub width_cm: f64,
    /// Height in cm.
    pub height_cm: f64,
    /// Actual (scale) weight in grams.
    pub actual_weight_g: f64,
}

impl PackageDimensions {
    /// Create new package dimensions.
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64, actual_weight_g: f64) -> Self {
        Self {
            length_cm,
            width_cm,
            height_cm,
            actual_weight_g,
        }
    }

    /// Volumetric weight in grams.
    pub fn volumetric_weight_g(&self) -> f64 {
        volumetric_weight(self.length_cm, self.width_cm, self.height_cm)
    }

    /// Chargeable weight in grams: max of actual and volumetric.
    pub fn chargeable_weight_g(&self) -> f64 {
        chargeable_weight(self.actual_weight_g, self.volumetric_weight_g())
    }

    /// Sum of the three sides in cm, used for dimension limits.
    pub fn side_sum_cm(&self) -> f64 {
        self.length_cm + self.width_cm + self.height_cm
    }

    /// Longest single side in cm.
    pub fn longest_side_cm(&self) -> f64 {
        self.length_cm.max(self.width_cm).max(self.height_cm)
    }
}

/// Volumetric weight in grams from dimensions in cm.
pub fn volumetric_weight(length_cm: f64, width_cm: f64, height_cm: f64) -> f64 {
    length_cm * width_cm * height_cm / VOLUMETRIC_DIVISOR
}

/// Chargeable (billable) weight: the larger of actual and volumetric.
///
/// If either input is zero the other wins, so a missing measurement
/// never zeroes out the shipping basis.
pub fn chargeable_weight(actual_g: f64, volumetric_g: f64) -> f64 {
    actual_g.max(volumetric_g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumetric_weight() {
        // 30 × 20 × 10 cm → 6000 cm³ / 5000 = 1200 g
        assert_eq!(volumetric_weight(30.0, 20.0, 10.0), 1200.0);
    }

    #[test]
    fn test_chargeable_weight_takes_max() {
        assert_eq!(chargeable_weight(600.0, 1200.0), 1200.0);
        assert_eq!(chargeable_weight(1500.0, 1200.0), 1500.0);
    }

    #[test]
    fn test_chargeable_weight_zero_input() {
        assert_eq!(chargeable_weight(0.0, 800.0), 800.0);
        assert_eq!(chargeable_weight(800.0, 0.0), 800.0);
    }

    #[test]
    fn test_package_helpers() {
        let pkg = PackageDimensions::new(40.0, 30.0, 20.0, 500.0);
        assert_eq!(pkg.side_sum_cm(), 90.0);
        assert_eq!(pkg.longest_side_cm(), 40.0);
        // 24000 cm³ / 5000 = 4800 g volumetric beats 500 g actual
        assert_eq!(pkg.chargeable_weight_g(), 4800.0);
    }
}
