//! Chargeable weight command.

use anyhow::{bail, Result};
use margin_engine::package::PackageDimensions;

use super::WeightArgs;
use crate::context::Context;

/// Run the weight command.
pub fn run(args: WeightArgs, ctx: &Context) -> Result<()> {
    if args.length <= 0.0 || args.width <= 0.0 || args.height <= 0.0 || args.weight <= 0.0 {
        bail!("Dimensions and weight must be positive");
    }

    let package = PackageDimensions::new(args.length, args.width, args.height, args.weight);

    if ctx.output.is_json() {
        ctx.output.json(&WeightReport::from(&package));
        return Ok(());
    }

    ctx.output.header("Weight resolution");
    ctx.output
        .kv("Actual weight", &format!("{:.0} g", package.actual_weight_g));
    ctx.output.kv(
        "Volumetric weight",
        &format!("{:.1} g", package.volumetric_weight_g()),
    );
    ctx.output.kv(
        "Chargeable weight",
        &format!("{:.1} g", package.chargeable_weight_g()),
    );
    ctx.output
        .kv("Sum of sides", &format!("{:.1} cm", package.side_sum_cm()));
    ctx.output.kv(
        "Longest side",
        &format!("{:.1} cm", package.longest_side_cm()),
    );

    Ok(())
}

#[derive(serde::Serialize)]
struct WeightReport {
    actual_g: f64,
    volumetric_g: f64,
    chargeable_g: f64,
    side_sum_cm: f64,
    longest_side_cm: f64,
}

impl From<&PackageDimensions> for WeightReport {
    fn from(package: &PackageDimensions) -> Self {
        Self {
            actual_g: package.actual_weight_g,
            volumetric_g: package.volumetric_weight_g(),
            chargeable_g: package.chargeable_weight_g(),
            side_sum_cm: package.side_sum_cm(),
            longest_side_cm: package.longest_side_cm(),
        }
    }
}
