//! Max procurement cost command.

use anyhow::{bail, Context as _, Result};
use margin_engine::commission::CommissionTable;
use margin_engine::ids::CategoryId;
use margin_engine::money::{Amount, Currency, ExchangeRate};
use margin_engine::solver::{solve_max_cost, MaxCost, MaxCostInputs};

use super::MaxCostArgs;
use crate::context::Context;

/// Run the max-cost command.
pub fn run(args: MaxCostArgs, ctx: &Context) -> Result<()> {
    let defaults = &ctx.config.defaults;

    let currency_code = args.currency.as_deref().unwrap_or(&defaults.currency);
    let currency = match Currency::from_code(currency_code) {
        Some(c) => c,
        None => bail!("Unknown currency code: {}", currency_code),
    };

    let commission = resolve_commission(&args, ctx)?;

    // fraction or percent, normalized by the solver
    let target_profit_rate = args.margin.unwrap_or(defaults.target_profit_rate);

    let catalog = ctx.config.catalog();
    let tariff = match &args.tariff {
        Some(code) => Some(catalog.require(code)?),
        None => None,
    };

    let exchange_rate = match (tariff, args.rate) {
        (Some(t), Some(rate)) if t.currency != currency => {
            Some(ExchangeRate::new(t.currency, currency, rate))
        }
        _ => None,
    };

    let inputs = MaxCostInputs {
        sale_price: Amount::new(args.price, currency),
        chargeable_weight_g: args.weight,
        target_profit_rate,
        packing_fee: args.packing.unwrap_or(defaults.packing_fee),
        commission,
        extra_percent_rate: args.extra_rate,
        tariff,
        door_delivery: args.door,
        exchange_rate,
    };

    let verdict = solve_max_cost(&inputs)?;

    if ctx.output.is_json() {
        ctx.output.json(&verdict);
        return Ok(());
    }

    match verdict {
        MaxCost::Indeterminate => {
            ctx.output
                .warn("Sale price and weight must both be positive to solve");
        }
        MaxCost::Infeasible(b) => {
            ctx.output.header("Max procurement cost");
            ctx.output.warn(&format!(
                "Target margin is out of reach at this price: the allowance \
                 is {} even at zero procurement cost",
                b.max_cost
            ));
            ctx.output.kv("Shipping cost", &b.shipping_cost.display());
            ctx.output
                .kv("Commission rate", &format!("{}%", b.commission_rate));
        }
        MaxCost::Feasible(b) => {
            ctx.output.header("Max procurement cost");
            ctx.output
                .success(&format!("Max procurement cost: {}", b.max_cost));
            ctx.output.kv("Shipping cost", &b.shipping_cost.display());
            ctx.output
                .kv("Commission rate", &format!("{}%", b.commission_rate));
        }
    }

    Ok(())
}

/// Commission table from a configured category or a flat rate flag.
fn resolve_commission(args: &MaxCostArgs, ctx: &Context) -> Result<CommissionTable> {
    if let Some(category) = &args.category {
        let catalog = ctx.config.commission_catalog();
        let table = catalog
            .require(&CategoryId::new(category.clone()))
            .context("Add the category to the config or pass --commission")?;
        return Ok(*table);
    }
    match args.commission {
        Some(rate) => Ok(CommissionTable::flat(rate)),
        None => bail!("A commission rate is required: pass --commission or --category"),
    }
}
