use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::path::Path;

use planheader::cli::{Cli, Command};
use planheader::config::{Config, OutputFormat};
use planheader::{CurrentSitePlan, HeaderProps, HeaderRenderer, PlanSlug, discount_tooltip_message};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    Ok(())
}

fn load_props(path: &Path) -> Result<HeaderProps> {
    HeaderProps::load(path).context(format!("Failed to load props from {}", path.display()))
}

fn flag(value: bool) -> ColoredString {
    if value { "shown".green() } else { "hidden".dimmed() }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("planheader starting (currency: {})", config.currency_code);

    match cli.command {
        Command::Plans => {
            for plan in PlanSlug::ALL {
                let jetpack = if plan.is_jetpack() { "jetpack" } else { "" };
                println!(
                    "{:<26} {:<9} {:<9} {}",
                    plan.as_str().cyan(),
                    plan.tier(),
                    plan.term(),
                    jetpack.dimmed()
                );
            }
        }
        Command::Tooltip { slug } => {
            let plan: PlanSlug = slug.parse().context("Failed to parse plan slug")?;
            println!("{}", discount_tooltip_message(&CurrentSitePlan::new(plan)));
        }
        Command::Check { props, format } => {
            let props = load_props(&props)?;
            let decisions = HeaderRenderer::new(config.currency_code.clone()).decisions(&props);
            match format.unwrap_or(config.output_format) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&decisions)?),
                OutputFormat::Text => {
                    println!("Plan: {}", props.plan_type.as_str().cyan());
                    println!("  Discount tooltip: {}", decisions.discount_tooltip);
                    println!("  Timeframe indicator: {}", flag(decisions.timeframe_indicator));
                    println!("  Interval discount: {}", flag(decisions.interval_discount));
                    println!("  Credit label: {}", flag(decisions.credit_label));
                }
            }
        }
        Command::Render { props, format } => {
            let props = load_props(&props)?;
            let header = HeaderRenderer::new(config.currency_code.clone()).header(&props);
            match format.unwrap_or(config.output_format) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&header)?),
                OutputFormat::Text => println!("{}", header.to_text()),
            }
        }
    }

    Ok(())
}
