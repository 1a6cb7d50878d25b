//! Shipping cost calculation and tariff ranking.

use crate::error::EngineError;
use crate::ids::TariffCode;
use crate::money::Amount;
use crate::shipping::eligibility::{self, Eligibility, PackageProfile};
use crate::shipping::tariff::{ShippingTariff, TariffCatalog};
use serde::{Deserialize, Serialize};

/// Total shipping cost for one tariff at the given chargeable weight.
///
/// With `door_delivery` set and a door-delivery variant on the tariff,
/// the flat component comes from the variant's formula; the per-gram
/// component is the tariff's regular rate either way. No rounding is
/// applied; callers round for display only.
pub fn shipping_cost(
    tariff: &ShippingTariff,
    weight_g: f64,
    door_delivery: bool,
) -> Result<Amount, EngineError> {
    let base_fee = if door_delivery {
        tariff.door_delivery_base_fee()?.unwrap_or(tariff.base_fee)
    } else {
        tariff.base_fee
    };
    Ok(Amount::new(
        base_fee + weight_g * tariff.rate_fee,
        tariff.currency,
    ))
}

/// One tariff's evaluation against a package: cost plus eligibility.
///
/// Ineligible tariffs keep their cost and reason so the caller can
/// show "why not available" next to the quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffQuote {
    /// Tariff code.
    pub code: TariffCode,
    /// Tariff display name.
    pub name: String,
    /// Total shipping cost at the package's chargeable weight.
    pub cost: Amount,
    /// Eligibility verdict with rejection reason, if any.
    pub eligibility: Eligibility,
    /// Delivery window (e.g. "15-45 days").
    pub delivery_estimate: String,
}

impl TariffQuote {
    /// Check if this quote is usable for the package.
    pub fn is_eligible(&self) -> bool {
        self.eligibility.is_eligible()
    }
}

/// Evaluate every tariff in the catalog against a package.
///
/// Eligible quotes come first, cheapest to dearest; ineligible quotes
/// follow in catalog order with their rejection reasons. The batch
/// never fails: a tariff that rejects the package, or one carrying a
/// malformed door-delivery fee formula, still yields a quote with the
/// reason attached.
pub fn rank_tariffs(
    catalog: &TariffCatalog,
    profile: &PackageProfile,
    door_delivery: bool,
) -> Vec<TariffQuote> {
    let mut eligible = Vec::new();
    let mut ineligible = Vec::new();

    for tariff in catalog.iter() {
        let mut eligibility = eligibility::check(tariff, profile);
        let cost = match shipping_cost(tariff, profile.weight_g, door_delivery) {
            Ok(cost) => cost,
            Err(_) => {
                // data defect on this one tariff: quote the regular
                // rate and mark it unusable instead of failing the batch
                if eligibility.is_eligible() {
                    eligibility = Eligibility::Rejected {
                        reason: "malformed door-delivery fee formula".to_string(),
                    };
                }
                Amount::new(
                    tariff.base_fee + profile.weight_g * tariff.rate_fee,
                    tariff.currency,
                )
            }
        };
        let quote = TariffQuote {
            code: tariff.code.clone(),
            name: tariff.name.clone(),
            cost,
            eligibility,
            delivery_estimate: tariff.delivery_estimate(),
        };
        if quote.is_eligible() {
            eligible.push(quote);
        } else {
            ineligible.push(quote);
        }
    }

    eligible.sort_by(|a, b| {
        a.cost
            .value
            .partial_cmp(&b.cost.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    eligible.extend(ineligible);
    eligible
}
