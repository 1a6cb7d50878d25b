//! Config inspection and scaffolding.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(ctx, force),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let rendered =
        toml::to_string_pretty(&ctx.config).context("Failed to render configuration")?;
    ctx.output.header("Current configuration");
    ctx.output.info(&rendered);
    Ok(())
}

fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = ctx.cwd.join("margin.toml");
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    ctx.output
        .success(&format!("Created config file: {}", path.display()));
    Ok(())
}
