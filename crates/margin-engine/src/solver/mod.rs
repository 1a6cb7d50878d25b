//! Margin solvers: max procurement cost and required sale price.

pub mod max_cost;
pub mod price;

pub use max_cost::{solve_max_cost, MaxCost, MaxCostBreakdown, MaxCostInputs};
pub use price::{solve_price, PriceBreakdown, PriceInputs, PriceSolution};

/// Flat component of the fallback shipping formula, applied when no
/// tariff has been selected.
pub const DEFAULT_BASE_FEE: f64 = 3.0;

/// Per-gram component of the fallback shipping formula.
pub const DEFAULT_RATE_FEE: f64 = 0.035;

/// Fallback cross-border shipping cost from chargeable weight alone.
pub fn default_shipping_cost(weight_g: f64) -> f64 {
    DEFAULT_BASE_FEE + DEFAULT_RATE_FEE * weight_g
}

/// Normalize a rate given either as a fraction (0.20) or a percentage
/// (20). Values above 1.0 are read as percentages; 1.0 itself is a
/// 100% target, which no price satisfies, so the boundary reading is
/// irrelevant.
pub(crate) fn to_fraction(rate: f64) -> f64 {
    if rate > 1.0 {
        rate / 100.0
    } else {
        rate
    }
}
