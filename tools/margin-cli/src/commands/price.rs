//! Price solver command.

use anyhow::{bail, Result};
use margin_engine::money::{Currency, ExchangeRate};
use margin_engine::solver::{solve_price, PriceInputs, PriceSolution};

use super::PriceArgs;
use crate::context::Context;

/// Run the price command.
pub fn run(args: PriceArgs, ctx: &Context) -> Result<()> {
    if args.cost <= 0.0 {
        bail!("Procurement cost must be positive");
    }

    let defaults = &ctx.config.defaults;
    let currency = match Currency::from_code(&defaults.currency) {
        Some(c) => c,
        None => bail!("Unknown currency code: {}", defaults.currency),
    };

    let exchange_rate = resolve_exchange_rate(&args, ctx, currency)?;

    let inputs = PriceInputs {
        currency,
        purchase_cost: args.cost,
        chargeable_weight_g: args.weight,
        target_profit_rate: args.margin.unwrap_or(defaults.target_profit_rate),
        front_discount: args.discount,
        domestic_shipping_fee: args.domestic,
        other_fee: args.other,
        cross_border_shipping: args.shipping,
        commission_rate: args.commission,
        ad_rate: args.ad,
        withdraw_rate: args.withdraw,
        return_rate: args.return_rate,
        exchange_rate,
    };

    let solution = solve_price(&inputs)?;

    if ctx.output.is_json() {
        ctx.output.json(&solution);
        return Ok(());
    }

    match solution {
        PriceSolution::Infeasible { total_rate_percent } => {
            ctx.output.warn(&format!(
                "No price can satisfy the inputs: percentage costs and margin \
                 target add up to {:.1}% of any price",
                total_rate_percent
            ));
        }
        PriceSolution::Solved(b) => {
            ctx.output.header("Price resolution");
            ctx.output.success(&format!("Sale price: {}", b.price));
            if let Some(destination) = &b.destination_price {
                ctx.output.kv("Destination price", &destination.display());
            }
            ctx.output.kv("Fixed costs", &b.fixed_cost.display());
            ctx.output.kv("  of which shipping", &b.shipping.display());
            ctx.output.kv("Commission", &b.commission.display());
            ctx.output.kv("Advertising", &b.ads.display());
            ctx.output.kv("Withdrawal", &b.withdrawal.display());
            ctx.output.kv("Return loss", &b.return_loss.display());
            ctx.output.kv("Profit", &b.profit.display());
            if args.discount > 0.0 {
                ctx.output.info(&format!(
                    "Storefront discount {} is applied by the platform on top \
                     of the listed price and does not change the solve",
                    args.discount
                ));
            }
        }
    }

    Ok(())
}

/// Exchange rate from CLI flags, falling back to the config defaults.
fn resolve_exchange_rate(
    args: &PriceArgs,
    ctx: &Context,
    currency: Currency,
) -> Result<Option<ExchangeRate>> {
    let defaults = &ctx.config.defaults;
    let rate = args.rate.or(defaults.exchange_rate);
    let to_code = args
        .to
        .clone()
        .or_else(|| defaults.destination_currency.clone());

    match (rate, to_code) {
        (Some(rate), Some(code)) => {
            let Some(to) = Currency::from_code(&code) else {
                bail!("Unknown destination currency code: {}", code);
            };
            Ok(Some(ExchangeRate::new(currency, to, rate)))
        }
        (Some(_), None) => bail!("--rate requires a destination currency (--to)"),
        (None, Some(_)) => Ok(None),
        (None, None) => Ok(None),
    }
}
