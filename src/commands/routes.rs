use anyhow::Result;
use colored::Colorize;
use ltl_quote::config;
use std::path::Path;

/// Execute the routes command
pub fn execute(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let rates = &cfg.rates;

    println!("{}", "Route:".bold());
    println!("  origin → {} → destination", rates.hub.cyan());
    println!(
        "  First leg: {:.2} {}/kg",
        rates.first_leg_rate_per_kg, rates.currency
    );
    println!();

    println!("  {}: {}", "Origins".cyan(), rates.origins.len());
    for origin in &rates.origins {
        println!("    {}", origin);
    }
    println!();

    println!("  {}: {}", "Destinations".cyan(), rates.destinations.len());
    for destination in &rates.destinations {
        println!(
            "    {:<28} {:.2} {}/kg",
            destination.name, destination.rate_per_kg, rates.currency
        );
    }

    Ok(())
}
