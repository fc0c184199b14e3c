use anyhow::{Context, Result};
use clap::Parser;
use pv_model::Payback;
use pv_proposal::simple::plot::plot_cash_flow;
use pv_proposal::simple::proposal::{ProposalResults, build_proposal};
use pv_proposal::simple::proposal_utils::ProposalConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Size a PV system, price it and project its payback
#[derive(Debug, Parser)]
#[command(name = "pv-proposal", version)]
struct Cli {
    /// TOML file overriding the default proposal inputs
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the full results as JSON
    #[arg(long)]
    json: bool,
    /// Save the cash-flow chart as PNG
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ProposalConfig::from_toml_file(path)?,
        None => ProposalConfig::default(),
    };

    let results = build_proposal(&config).context("Failed to build proposal")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_summary(&results);
    }

    if let Some(path) = &cli.plot {
        plot_cash_flow(&results.projection, &path.to_string_lossy())
            .map_err(|e| anyhow::anyhow!("Failed to plot cash flow: {}", e))?;
    }

    Ok(())
}

fn print_summary(results: &ProposalResults) {
    let config = &results.config;
    let sizing = &results.sizing;
    let first_year = &results.first_year;
    let payment = &results.payment;

    println!("=== System ===");
    println!(
        "Panels: {} x {} W (recommended: {})",
        sizing.panel_count, config.panel_watts, sizing.recommended_panels
    );
    println!("Capacity: {:.2} kWp", sizing.capacity_kw);
    println!(
        "Monthly generation: {:.0} kWh (target {:.0} kWh)",
        sizing.monthly_generation_kwh, config.monthly_consumption_kwh
    );
    println!("Base cost: R$ {:.2}", results.base_cost);

    println!("\n=== Savings, year 1 ({}) ===", config.start_year);
    println!(
        "Connection: {} ({:.0} kWh minimum)",
        config.connection_tier.local_name(),
        config.connection_tier.min_availability_kwh()
    );
    println!("Self-consumption: {:.0} %", config.self_consumption_pct);
    println!(
        "Exported energy: {:.0} kWh/month, wire fee payable {:.0} %",
        first_year.exported_kwh, first_year.payable_pct
    );
    println!("Wire fee cost: R$ {:.2}/month", first_year.wire_fee_monthly);
    println!("Availability charge: R$ {:.2}/month", first_year.availability_monthly);
    println!(
        "Bill: R$ {:.2} -> R$ {:.2}/month",
        first_year.old_monthly_bill, first_year.new_monthly_bill
    );
    println!(
        "Net saving: R$ {:.2}/month, R$ {:.2}/year",
        first_year.monthly_saving, first_year.annual_saving
    );

    println!("\n=== Payment ===");
    println!("Modality: {}", payment.modality.name());
    if let Some(installment) = payment.installment {
        println!("Principal: R$ {:.2}", payment.principal);
        println!("Installment: R$ {:.2}/month", installment);
    }
    println!("Final amount: R$ {:.2}", payment.final_amount);

    println!("\n=== Projection ({} years) ===", config.horizon_years);
    for year in &results.projection {
        println!(
            "{:>3} ({}): without solar R$ {:>12.2} | with solar R$ {:>12.2}",
            year.year,
            year.calendar_year,
            year.accumulated_baseline_spend,
            year.accumulated_cash_flow
        );
    }
    let payback = match results.payback {
        Payback::Interpolated { months, .. } => {
            format!("{} years {} months", (months / 12.0).floor(), (months % 12.0).round())
        }
        Payback::WholeYear { year } => format!("year {}", year),
        Payback::BeyondHorizon { horizon_years } => format!("+ {} years", horizon_years),
    };
    println!("Payback: {}", payback);
    println!(
        "Net savings after {} years: R$ {:.2}",
        config.horizon_years, results.horizon_net_savings
    );
}
