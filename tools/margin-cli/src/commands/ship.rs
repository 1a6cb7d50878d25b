//! Tariff ranking command.

use anyhow::{bail, Result};

use margin_engine::package::PackageDimensions;
use margin_engine::shipping::{rank_tariffs, PackageProfile};

use super::ShipArgs;
use crate::context::Context;
use crate::output::availability_badge;

/// Run the ship command.
pub fn run(args: ShipArgs, ctx: &Context) -> Result<()> {
    if args.length <= 0.0 || args.width <= 0.0 || args.height <= 0.0 || args.weight <= 0.0 {
        bail!("Dimensions and weight must be positive");
    }

    let package = PackageDimensions::new(args.length, args.width, args.height, args.weight);
    let profile = PackageProfile::from_package(&package, args.value);
    let catalog = ctx.config.catalog();

    ctx.output.debug(&format!(
        "volumetric {:.1} g, chargeable {:.1} g",
        package.volumetric_weight_g(),
        profile.weight_g
    ));

    let quotes = rank_tariffs(&catalog, &profile, args.door);

    if ctx.output.is_json() {
        ctx.output.json(&quotes);
        return Ok(());
    }

    ctx.output.header("Shipping quotes");
    ctx.output.kv(
        "Chargeable weight",
        &format!(
            "{:.0} g ({:.0} g actual, {:.0} g volumetric)",
            profile.weight_g,
            package.actual_weight_g,
            package.volumetric_weight_g()
        ),
    );
    if args.door {
        ctx.output.kv("Service level", "deliver to door");
    }

    ctx.output
        .table_row(&["CODE", "COST", "DELIVERY", "STATUS"], &[16, 12, 12, 40]);
    ctx.output.info(&"-".repeat(84));

    for quote in &quotes {
        let status = match quote.eligibility.reason() {
            None => availability_badge(true),
            Some(reason) => format!("{} ({})", availability_badge(false), reason),
        };
        ctx.output.table_row(
            &[
                quote.code.as_str(),
                &quote.cost.display(),
                &quote.delivery_estimate,
                &status,
            ],
            &[16, 12, 12, 40],
        );
    }

    ctx.output.info("");
    let eligible = quotes.iter().filter(|q| q.is_eligible()).count();
    ctx.output.info(&format!(
        "{} of {} tariff(s) available",
        eligible,
        quotes.len()
    ));

    Ok(())
}
