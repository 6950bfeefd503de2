use anyhow::{Context, Result};
use clap::Parser;
use fixture_gen::cli::{print_json, print_plan, print_report, FixtureGenCli, OutputFormat};
use fixture_gen::generator::{generate_fixture, plan_fixture, GeneratorConfig};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = FixtureGenCli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting fixture-gen v{}", env!("CARGO_PKG_VERSION"));

    let config = GeneratorConfig::from(&cli);

    if config.dry_run {
        let plan = plan_fixture(&config).context("Invalid fixture settings")?;
        match cli.format {
            OutputFormat::Text => print_plan(&plan),
            OutputFormat::Json => print_json(&plan)?,
        }
        return Ok(());
    }

    let report = generate_fixture(&config)
        .await
        .with_context(|| format!("Failed to generate {}", config.output.display()))?;

    match cli.format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}
