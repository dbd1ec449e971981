//! Property Returns CLI
//!
//! Prints the three-strategy comparison for one listing

use anyhow::Context;
use clap::Parser;
use property_returns::cli::{DataArgs, FinancingArgs};
use property_returns::PropertyRepository;

#[derive(Debug, Parser)]
#[command(name = "property_returns")]
#[command(about = "Compare rental and flip returns for a listing")]
struct Args {
    /// Listing id
    #[arg(short, long, default_value = "1")]
    property: String,

    #[command(flatten)]
    financing: FinancingArgs,

    #[command(flatten)]
    data: DataArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = args.data.catalog().context("Failed to load listings")?;
    let calculator = args.data.calculator().context("Failed to load assumptions")?;
    let property = catalog.find(&args.property)?;

    let financing = args.financing.financing();
    financing.validate(property.price)?;

    let result = calculator.compute_all_strategies(&property.financials(), &financing);

    println!("Property {}: {}", property.id, property.address);
    println!("  Price: ${:.0}", property.price);
    println!("  {} bd / {} ba / {} sqft", property.bedrooms, property.bathrooms, property.sqft);
    println!(
        "  Financing: ${:.0} down, {}% over {} years",
        financing.down_payment, financing.interest_rate, financing.loan_term
    );
    println!();

    let costs = &result.monthly_costs;
    println!("Monthly basis:");
    println!("  Mortgage:      ${:>8}", costs.mortgage_payment);
    println!("  Fixed costs:   ${:>8}", costs.fixed_monthly_cost);
    println!("  Base rent:     ${:>8}", costs.base_rent);
    println!();

    println!("{:<8} {:>12} {:>14} {:>14} {:>9}", "Strategy", "Income/mo", "CashFlow/mo", "CashFlow/yr", "ROI %");
    println!("{}", "-".repeat(61));
    for (name, r) in [("airbnb", &result.airbnb), ("lease", &result.lease)] {
        println!(
            "{:<8} {:>12} {:>14} {:>14} {:>9.1}",
            name, r.monthly_income, r.monthly_cash_flow, r.annual_cash_flow, r.total_roi
        );
    }
    println!();

    let flip = &result.flip;
    println!("Flip ({} month hold):", flip.holding_period_months);
    println!("  After-repair value:  ${:>9}", flip.after_repair_value);
    println!("  Renovation:          ${:>9}", flip.renovation_budget);
    println!("  Closing (buy/sell):  ${:>9} / ${}", flip.closing_costs_buy, flip.closing_costs_sell);
    println!("  Holding costs:       ${:>9}", flip.holding_costs);
    println!("  Total investment:    ${:>9}", flip.total_investment);
    println!("  Net profit:          ${:>9}", flip.net_profit);
    println!("  Annualized ROI:      {:>9.1}%", flip.annualized_roi);
    println!();

    println!("Ranking:");
    for entry in result.ranking() {
        println!("  {}. {:<7} {:>7.1}%  ({:?})", entry.rank, entry.strategy.to_string(), entry.roi, entry.tier);
    }

    Ok(())
}
