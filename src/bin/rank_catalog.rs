//! Run all three strategies for every listing in the catalog
//!
//! Writes one CSV row per listing with each strategy's headline numbers

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use property_returns::cli::{DataArgs, FinancingArgs};
use property_returns::{PropertyRepository, ScenarioRunner};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "rank_catalog")]
#[command(about = "Rank investment strategies across the whole catalog")]
struct Args {
    /// Output CSV path
    #[arg(short, long, default_value = "catalog_ranking.csv")]
    output: PathBuf,

    #[command(flatten)]
    financing: FinancingArgs,

    #[command(flatten)]
    data: DataArgs,
}

#[derive(Debug, Serialize)]
struct RankingRow<'a> {
    property_id: &'a str,
    city: &'a str,
    state: &'a str,
    price: f64,
    mortgage_payment: i64,
    airbnb_cash_flow: i64,
    airbnb_roi: f64,
    lease_cash_flow: i64,
    lease_roi: f64,
    flip_net_profit: i64,
    flip_roi: f64,
    best_strategy: &'static str,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let catalog = args.data.catalog().context("Failed to load listings")?;
    let runner = ScenarioRunner::with_assumptions(
        args.data.strategy_assumptions().context("Failed to load assumptions")?,
    );
    let financing = args.financing.financing();
    println!("Loaded {} listings in {:?}", catalog.len(), start.elapsed());

    // Listings the financing cannot apply to (down payment above price) are skipped
    let eligible: Vec<_> = catalog
        .all()
        .iter()
        .filter(|p| match financing.validate(p.price) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping {}: {}", p.id, e);
                false
            }
        })
        .cloned()
        .collect();

    let analyses = runner.run_catalog(&eligible, &financing);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    for (property, analysis) in eligible.iter().zip(&analyses) {
        let c = &analysis.comparison;
        writer.serialize(RankingRow {
            property_id: &property.id,
            city: &property.city,
            state: &property.state,
            price: property.price,
            mortgage_payment: c.monthly_costs.mortgage_payment,
            airbnb_cash_flow: c.airbnb.monthly_cash_flow,
            airbnb_roi: c.airbnb.total_roi,
            lease_cash_flow: c.lease.monthly_cash_flow,
            lease_roi: c.lease.total_roi,
            flip_net_profit: c.flip.net_profit,
            flip_roi: c.flip.annualized_roi,
            best_strategy: c.best().as_str(),
        })?;
    }
    writer.flush()?;

    println!("\n{:<4} {:<10} {:>10} {:>9} {:>9} {:>9}  {}", "Id", "City", "Price", "Airbnb%", "Lease%", "Flip%", "Best");
    for (property, analysis) in eligible.iter().zip(&analyses) {
        let c = &analysis.comparison;
        println!(
            "{:<4} {:<10} {:>10.0} {:>9.1} {:>9.1} {:>9.1}  {}",
            property.id, property.city, property.price,
            c.airbnb.total_roi, c.lease.total_roi, c.flip.annualized_roi, c.best()
        );
    }

    println!("\nOutput written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
