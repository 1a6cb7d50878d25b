//! Required sale price for a target margin.
//!
//! The algebraic inverse of the max-cost solve: all fixed costs are
//! known, every percentage cost scales with the price, and the price
//! is the unique solution of
//! `price × (1 − rates − target) = fixed costs`.

use crate::error::EngineError;
use crate::money::{Amount, Currency, ExchangeRate};
use crate::solver::{default_shipping_cost, to_fraction};
use serde::{Deserialize, Serialize};

/// Inputs to the price solve. All monetary fields are major units of
/// `currency`; all `*_rate` fields are percentages of the sale price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInputs {
    /// Working currency of every monetary input.
    pub currency: Currency,
    /// Procurement cost of the goods.
    pub purchase_cost: f64,
    /// Chargeable weight in grams, used when no explicit
    /// cross-border shipping cost is given.
    pub chargeable_weight_g: f64,
    /// Target profit rate, as a fraction (0.20) or percentage (20).
    pub target_profit_rate: f64,
    /// Storefront discount shown to buyers. Informational only: the
    /// platform applies it on top of the listed price, so it does not
    /// enter the solve.
    pub front_discount: f64,
    /// Domestic (first-leg) shipping fee.
    pub domestic_shipping_fee: f64,
    /// Other flat fees.
    pub other_fee: f64,
    /// Cross-border shipping cost; `None` falls back to the default
    /// weight formula.
    pub cross_border_shipping: Option<f64>,
    /// Platform commission percentage.
    pub commission_rate: f64,
    /// Advertising percentage.
    pub ad_rate: f64,
    /// Withdrawal fee percentage.
    pub withdraw_rate: f64,
    /// Return-loss percentage.
    pub return_rate: f64,
    /// Optional rate to quote the result in the destination currency.
    pub exchange_rate: Option<ExchangeRate>,
}

impl Default for PriceInputs {
    fn default() -> Self {
        Self {
            currency: Currency::CNY,
            purchase_cost: 0.0,
            chargeable_weight_g: 0.0,
            target_profit_rate: 0.0,
            front_discount: 0.0,
            domestic_shipping_fee: 0.0,
            other_fee: 0.0,
            cross_border_shipping: None,
            commission_rate: 0.0,
            ad_rate: 0.0,
            withdraw_rate: 0.0,
            return_rate: 0.0,
            exchange_rate: None,
        }
    }
}

/// Every component of a solved price. The components sum back to the
/// price within floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Resolved sale price in the procurement currency.
    pub price: Amount,
    /// Price converted to the destination currency, when an exchange
    /// rate was supplied. Display-only; never feeds back into the
    /// solve.
    pub destination_price: Option<Amount>,
    /// Sum of all flat costs.
    pub fixed_cost: Amount,
    /// Cross-border shipping component of the fixed costs.
    pub shipping: Amount,
    /// Commission cost at the resolved price.
    pub commission: Amount,
    /// Advertising cost.
    pub ads: Amount,
    /// Withdrawal fee.
    pub withdrawal: Amount,
    /// Expected return-loss cost.
    pub return_loss: Amount,
    /// Profit at the target rate.
    pub profit: Amount,
}

/// Outcome of the price solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PriceSolution {
    /// The percentage costs plus the margin target reach or exceed
    /// 100% of any price: no sale price satisfies them.
    Infeasible {
        /// Combined percentage load, including the target margin.
        total_rate_percent: f64,
    },
    /// A price exists; the full component breakdown.
    Solved(PriceBreakdown),
}

impl PriceSolution {
    /// Get the breakdown if a price was found.
    pub fn breakdown(&self) -> Option<&PriceBreakdown> {
        match self {
            PriceSolution::Infeasible { .. } => None,
            PriceSolution::Solved(b) => Some(b),
        }
    }
}

/// Solve for the sale price that hits the target profit rate.
pub fn solve_price(inputs: &PriceInputs) -> Result<PriceSolution, EngineError> {
    let shipping = inputs
        .cross_border_shipping
        .unwrap_or_else(|| default_shipping_cost(inputs.chargeable_weight_g));

    let fixed_cost = inputs.purchase_cost
        + inputs.domestic_shipping_fee
        + inputs.other_fee
        + shipping;

    let total_percent_rate =
        inputs.commission_rate + inputs.ad_rate + inputs.withdraw_rate + inputs.return_rate;
    let target_fraction = to_fraction(inputs.target_profit_rate);

    let denominator = 1.0 - total_percent_rate / 100.0 - target_fraction;
    if denominator <= 0.0 {
        return Ok(PriceSolution::Infeasible {
            total_rate_percent: total_percent_rate + target_fraction * 100.0,
        });
    }

    let currency = inputs.currency;
    let price = Amount::new(fixed_cost / denominator, currency);

    let destination_price = match inputs.exchange_rate {
        None => None,
        Some(rate) => {
            if rate.from != currency {
                return Err(EngineError::CurrencyMismatch {
                    expected: currency,
                    got: rate.from,
                });
            }
            rate.convert(&price)
        }
    };

    Ok(PriceSolution::Solved(PriceBreakdown {
        price,
        destination_price,
        fixed_cost: Amount::new(fixed_cost, currency),
        shipping: Amount::new(shipping, currency),
        commission: price.percentage(inputs.commission_rate),
        ads: price.percentage(inputs.ad_rate),
        withdrawal: price.percentage(inputs.withdraw_rate),
        return_loss: price.percentage(inputs.return_rate),
        profit: price.scale(target_fraction),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn reference_inputs() -> PriceInputs {
        PriceInputs {
            currency: Currency::CNY,
            purchase_cost: 100.0,
            chargeable_weight_g: 600.0,
            target_profit_rate: 20.0,
            domestic_shipping_fee: 5.0,
            other_fee: 4.0,
            commission_rate: 14.0,
            ad_rate: 8.0,
            withdraw_rate: 1.4,
            return_rate: 2.0,
            ..Default::default()
        }
    }

    fn assert_close(a: f64, b: f64) {
        let scale = a.abs().max(b.abs()).max(1.0);
        assert!(
            (a - b).abs() / scale < TOLERANCE,
            "{} != {} within tolerance",
            a,
            b
        );
    }

    #[test]
    fn test_reference_price() {
        // fixed = 100 + 5 + 4 + (3 + 0.035 × 600) = 133
        // denominator = 1 − 0.254 − 0.20 = 0.546
        let solution = solve_price(&reference_inputs()).unwrap();
        let b = solution.breakdown().expect("solvable");
        assert_close(b.fixed_cost.value, 133.0);
        assert_close(b.price.value, 133.0 / 0.546);
        assert!((b.price.value - 243.59).abs() < 0.01);
    }

    #[test]
    fn test_components_reconcile() {
        let solution = solve_price(&reference_inputs()).unwrap();
        let b = solution.breakdown().unwrap();

        let percent_costs = b.commission.value
            + b.ads.value
            + b.withdrawal.value
            + b.return_loss.value
            + b.profit.value;
        // price minus every percentage component leaves the fixed costs
        assert_close(b.price.value - percent_costs, b.fixed_cost.value);
        // and all components sum back to the price
        assert_close(percent_costs + b.fixed_cost.value, b.price.value);
    }

    #[test]
    fn test_fraction_and_percent_targets_agree() {
        let percent = solve_price(&reference_inputs()).unwrap();
        let mut inputs = reference_inputs();
        inputs.target_profit_rate = 0.20;
        let fraction = solve_price(&inputs).unwrap();
        assert_close(
            percent.breakdown().unwrap().price.value,
            fraction.breakdown().unwrap().price.value,
        );
    }

    #[test]
    fn test_explicit_shipping_overrides_formula() {
        let mut inputs = reference_inputs();
        inputs.cross_border_shipping = Some(50.0);
        let solution = solve_price(&inputs).unwrap();
        let b = solution.breakdown().unwrap();
        assert_close(b.shipping.value, 50.0);
        assert_close(b.fixed_cost.value, 159.0);
    }

    #[test]
    fn test_infeasible_rate_load() {
        let mut inputs = reference_inputs();
        inputs.commission_rate = 60.0;
        inputs.ad_rate = 30.0;
        inputs.withdraw_rate = 5.0;
        inputs.return_rate = 5.0;
        // 100% of the price in percentage costs + 20% target
        match solve_price(&inputs).unwrap() {
            PriceSolution::Infeasible { total_rate_percent } => {
                assert_close(total_rate_percent, 120.0);
            }
            PriceSolution::Solved(b) => panic!("expected infeasible, got price {}", b.price),
        }
    }

    #[test]
    fn test_destination_conversion() {
        let mut inputs = reference_inputs();
        inputs.exchange_rate = Some(ExchangeRate::new(Currency::CNY, Currency::RUB, 11.0));
        let solution = solve_price(&inputs).unwrap();
        let b = solution.breakdown().unwrap();
        let destination = b.destination_price.unwrap();
        assert_eq!(destination.currency, Currency::RUB);
        assert_close(destination.value, b.price.value * 11.0);
        // conversion is display-only: the CNY-side solve is unchanged
        assert_close(b.price.value, 133.0 / 0.546);
    }

    #[test]
    fn test_mismatched_exchange_rate_is_error() {
        let mut inputs = reference_inputs();
        inputs.exchange_rate = Some(ExchangeRate::new(Currency::USD, Currency::RUB, 90.0));
        assert!(matches!(
            solve_price(&inputs),
            Err(EngineError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_front_discount_does_not_affect_price() {
        let mut inputs = reference_inputs();
        inputs.front_discount = 15.0;
        let with = solve_price(&inputs).unwrap();
        let without = solve_price(&reference_inputs()).unwrap();
        assert_eq!(
            with.breakdown().unwrap().price,
            without.breakdown().unwrap().price
        );
    }
}
