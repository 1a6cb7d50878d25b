//! Maximum procurement cost at a given sale price.
//!
//! Answers the product-card question: at this sale price, weight, and
//! margin target, what is the most I can pay for the goods?

use crate::commission::CommissionTable;
use crate::error::EngineError;
use crate::money::{Amount, ExchangeRate};
use crate::shipping::tariff::ShippingTariff;
use crate::shipping::{self};
use crate::solver::{default_shipping_cost, to_fraction};
use serde::{Deserialize, Serialize};

/// Inputs to the max-cost solve.
///
/// `sale_price` is whichever the caller decided matters: the seller's
/// own price or a known competitor's minimum. All flat fees are in the
/// sale price's currency; a tariff quoted in another currency needs
/// `exchange_rate` to bridge it.
#[derive(Debug, Clone)]
pub struct MaxCostInputs<'a> {
    /// Sale price the margin is measured against.
    pub sale_price: Amount,
    /// Chargeable weight in grams.
    pub chargeable_weight_g: f64,
    /// Target profit rate, as a fraction (0.20) or percentage (20).
    pub target_profit_rate: f64,
    /// Flat packing fee, in the sale price's currency.
    pub packing_fee: f64,
    /// Commission percentages per price band.
    pub commission: CommissionTable,
    /// Further percentage costs of the price (ads, withdrawal,
    /// return-loss) folded into the deduction. Zero when only
    /// commission applies.
    pub extra_percent_rate: f64,
    /// Selected tariff; `None` falls back to the default weight formula.
    pub tariff: Option<&'a ShippingTariff>,
    /// Use the tariff's door-delivery fee variant.
    pub door_delivery: bool,
    /// Rate from the tariff's currency to the sale currency.
    pub exchange_rate: Option<ExchangeRate>,
}

/// Cost figures behind a max-cost verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxCostBreakdown {
    /// Maximum allowable procurement cost. Negative when infeasible.
    pub max_cost: Amount,
    /// Shipping cost used, in the sale currency.
    pub shipping_cost: Amount,
    /// Commission percentage resolved for the sale price.
    pub commission_rate: f64,
}

/// Verdict of the max-cost solve: three distinct states the UI must
/// tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MaxCost {
    /// Weight or price is zero/negative: not yet computable.
    Indeterminate,
    /// Even zero procurement cost misses the margin target; the
    /// breakdown carries the negative allowance.
    Infeasible(MaxCostBreakdown),
    /// The target is achievable at any procurement cost up to
    /// `max_cost`.
    Feasible(MaxCostBreakdown),
}

impl MaxCost {
    /// Check if the margin target is achievable.
    pub fn is_feasible(&self) -> bool {
        matches!(self, MaxCost::Feasible(_))
    }

    /// Get the computed max cost, if any was computable.
    pub fn max_cost(&self) -> Option<Amount> {
        match self {
            MaxCost::Indeterminate => None,
            MaxCost::Infeasible(b) | MaxCost::Feasible(b) => Some(b.max_cost),
        }
    }
}

/// Solve for the maximum procurement cost.
///
/// `max_cost = price × (1 − rates − target) − shipping − packing`,
/// where `rates` is the resolved commission plus any extra percentage
/// costs. A negative result is a valid verdict ([`MaxCost::Infeasible`]),
/// not an error.
pub fn solve_max_cost(inputs: &MaxCostInputs<'_>) -> Result<MaxCost, EngineError> {
    if inputs.chargeable_weight_g <= 0.0 || inputs.sale_price.value <= 0.0 {
        return Ok(MaxCost::Indeterminate);
    }

    let currency = inputs.sale_price.currency;
    let shipping_cost = resolve_shipping(inputs, currency)?;
    let commission_rate = inputs.commission.rate_for(inputs.sale_price.value);

    let deduction = 1.0
        - (commission_rate + inputs.extra_percent_rate) / 100.0
        - to_fraction(inputs.target_profit_rate);
    let max_cost = inputs.sale_price.value * deduction - shipping_cost.value - inputs.packing_fee;

    let breakdown = MaxCostBreakdown {
        max_cost: Amount::new(max_cost, currency),
        shipping_cost,
        commission_rate,
    };

    if max_cost < 0.0 {
        Ok(MaxCost::Infeasible(breakdown))
    } else {
        Ok(MaxCost::Feasible(breakdown))
    }
}

fn resolve_shipping(
    inputs: &MaxCostInputs<'_>,
    currency: crate::money::Currency,
) -> Result<Amount, EngineError> {
    let Some(tariff) = inputs.tariff else {
        return Ok(Amount::new(
            default_shipping_cost(inputs.chargeable_weight_g),
            currency,
        ));
    };

    let cost = shipping::shipping_cost(tariff, inputs.chargeable_weight_g, inputs.door_delivery)?;
    if cost.currency == currency {
        return Ok(cost);
    }

    let Some(rate) = inputs.exchange_rate else {
        return Err(EngineError::MissingExchangeRate {
            from: cost.currency,
            to: currency,
        });
    };
    // a rate was supplied but converts from the wrong currency
    let converted = rate.convert(&cost).ok_or(EngineError::CurrencyMismatch {
        expected: cost.currency,
        got: rate.from,
    })?;
    if converted.currency != currency {
        return Err(EngineError::CurrencyMismatch {
            expected: currency,
            got: converted.currency,
        });
    }
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use crate::shipping::TariffCatalog;

    fn base_inputs() -> MaxCostInputs<'static> {
        MaxCostInputs {
            sale_price: Amount::new(243.5897435897436, Currency::CNY),
            chargeable_weight_g: 600.0,
            target_profit_rate: 0.20,
            packing_fee: 9.0,
            commission: CommissionTable::flat(14.0),
            extra_percent_rate: 11.4, // ads 8 + withdrawal 1.4 + return-loss 2
            tariff: None,
            door_delivery: false,
            exchange_rate: None,
        }
    }

    #[test]
    fn test_indeterminate_on_zero_weight() {
        let mut inputs = base_inputs();
        inputs.chargeable_weight_g = 0.0;
        assert_eq!(solve_max_cost(&inputs).unwrap(), MaxCost::Indeterminate);
    }

    #[test]
    fn test_indeterminate_on_zero_price() {
        let mut inputs = base_inputs();
        inputs.sale_price = Amount::zero(Currency::CNY);
        assert_eq!(solve_max_cost(&inputs).unwrap(), MaxCost::Indeterminate);
    }

    #[test]
    fn test_round_trip_recovers_purchase_cost() {
        // The price solver's reference example: price ≈ 243.59 covers
        // purchase cost 100 with the same cost structure. Solving the
        // other direction must land back on 100.
        let inputs = base_inputs();
        let result = solve_max_cost(&inputs).unwrap();
        let max_cost = result.max_cost().unwrap();
        assert!(result.is_feasible());
        // default shipping: 3 + 0.035 × 600 = 24; fixed side fees
        // here are packing 9 (domestic 5 + other 4)
        assert!((max_cost.value - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_allowance_is_infeasible() {
        let mut inputs = base_inputs();
        inputs.sale_price = Amount::new(40.0, Currency::CNY);
        let result = solve_max_cost(&inputs).unwrap();
        assert!(!result.is_feasible());
        let max_cost = result.max_cost().unwrap();
        assert!(max_cost.value < 0.0);
    }

    #[test]
    fn test_commission_band_applied_to_price() {
        let mut inputs = base_inputs();
        inputs.commission = CommissionTable::new(14.0, 12.0, 9.5);
        inputs.sale_price = Amount::new(2000.0, Currency::CNY);
        inputs.extra_percent_rate = 0.0;
        let result = solve_max_cost(&inputs).unwrap();
        match result {
            MaxCost::Feasible(b) => assert_eq!(b.commission_rate, 12.0),
            other => panic!("expected feasible, got {:?}", other),
        }
    }

    #[test]
    fn test_tariff_in_other_currency_needs_rate() {
        let catalog = TariffCatalog::builtin();
        let economy = catalog.get("economy").unwrap();

        let mut inputs = base_inputs();
        inputs.sale_price = Amount::new(3000.0, Currency::RUB);
        inputs.tariff = Some(economy);

        assert!(matches!(
            solve_max_cost(&inputs),
            Err(EngineError::MissingExchangeRate { .. })
        ));

        inputs.exchange_rate = Some(ExchangeRate::new(Currency::CNY, Currency::RUB, 12.0));
        let result = solve_max_cost(&inputs).unwrap();
        match result {
            MaxCost::Feasible(b) => {
                // 38 CNY × 12 = 456 RUB
                assert_eq!(b.shipping_cost, Amount::new(456.0, Currency::RUB));
            }
            other => panic!("expected feasible, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_source_rate_is_currency_mismatch() {
        // a rate was supplied but converts from the wrong currency:
        // the diagnostic must name the mismatch, not a missing rate
        let catalog = TariffCatalog::builtin();
        let economy = catalog.get("economy").unwrap();

        let mut inputs = base_inputs();
        inputs.sale_price = Amount::new(3000.0, Currency::RUB);
        inputs.tariff = Some(economy);
        inputs.exchange_rate = Some(ExchangeRate::new(Currency::USD, Currency::RUB, 90.0));

        assert_eq!(
            solve_max_cost(&inputs),
            Err(EngineError::CurrencyMismatch {
                expected: Currency::CNY,
                got: Currency::USD,
            })
        );
    }

    #[test]
    fn test_fraction_and_percent_targets_agree() {
        let fraction = solve_max_cost(&base_inputs()).unwrap();
        let mut inputs = base_inputs();
        inputs.target_profit_rate = 20.0;
        let percent = solve_max_cost(&inputs).unwrap();
        assert_eq!(fraction.max_cost(), percent.max_cost());
    }
}
