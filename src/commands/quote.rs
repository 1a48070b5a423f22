use anyhow::Result;
use colored::Colorize;
use ltl_quote::{
    config,
    freight::{self, CostBreakdown, QuoteRequest, RateSchedule},
    intake::QuoteIntake,
};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::cli::QuoteArgs;

/// Execute the quote command
///
/// Feeds the arguments through the intake steps, prices the finished request and
/// prints the breakdown.
pub fn execute(config_path: &Path, args: QuoteArgs) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let schedule = &cfg.rates;
    let json_output = args.json;

    let request = collect(schedule, args)?;
    let breakdown = freight::quote(schedule, &request)?;
    info!(
        destination = %request.destination,
        total = breakdown.total_cost,
        "Quote computed"
    );

    if json_output {
        println!("{}", to_json(schedule, &request, &breakdown)?);
    } else {
        for line in render(schedule, &request, &breakdown) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// `--json` body; the breakdown keeps its display order
#[derive(Serialize)]
struct QuoteOutput<'a> {
    origin: &'a str,
    hub: &'a str,
    destination: &'a str,
    stackable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<&'a str>,
    breakdown: &'a CostBreakdown,
}

fn to_json(schedule: &RateSchedule, request: &QuoteRequest, breakdown: &CostBreakdown) -> Result<String> {
    let output = QuoteOutput {
        origin: &request.origin,
        hub: &schedule.hub,
        destination: &request.destination,
        stackable: request.stackable,
        company: request.company.as_deref(),
        breakdown,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

fn collect(schedule: &RateSchedule, args: QuoteArgs) -> Result<QuoteRequest> {
    let mut intake = QuoteIntake::new()
        .with_invoice_details(args.stackable, args.company)
        .choose_route(schedule, &args.origin, &args.destination)?;

    for pallet in args.pallets {
        intake = intake.add_pallet(pallet)?;
    }

    let request = intake
        .finish_pallets()?
        .set_insurance(args.insurance_rate, args.cargo_value)?
        .into_request()?;

    Ok(request)
}

/// Plain terminal listing of a quote
fn render(schedule: &RateSchedule, request: &QuoteRequest, breakdown: &CostBreakdown) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(company) = &request.company {
        out.push(company.bold().to_string());
    }
    out.push(format!(
        "{} {} → {} → {}",
        "Route:".cyan(),
        request.origin,
        schedule.hub,
        request.destination
    ));
    out.push(format!(
        "{} {} line(s), {}",
        "Cargo:".cyan(),
        request.pallets.len(),
        if request.stackable { "stackable" } else { "non-stackable" }
    ));
    out.push(String::new());

    let lines = breakdown.lines();
    let width = lines.iter().map(|l| l.label.len()).max().unwrap_or(0);
    let last = lines.len().saturating_sub(1);
    for (idx, line) in lines.iter().enumerate() {
        let row = format!("  {:<width$}  {:>12.2}", line.label, line.value, width = width);
        if idx == last {
            out.push(row.green().bold().to_string());
        } else {
            out.push(row);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltl_quote::freight::{Pallet, QuoteError};

    fn args(destination: &str) -> QuoteArgs {
        QuoteArgs {
            origin: "Yiwu, China".to_string(),
            destination: destination.to_string(),
            pallets: vec![Pallet::new(120.0, 80.0, 100.0, 200.0, 1).unwrap()],
            insurance_rate: 2.0,
            cargo_value: 1000.0,
            stackable: true,
            company: Some("Caspian Traders".to_string()),
            json: false,
        }
    }

    #[test]
    fn test_collect_builds_request() {
        let schedule = RateSchedule::default();
        let request = collect(&schedule, args("Baku, Azerbaijan")).unwrap();

        assert_eq!(request.pallets.len(), 1);
        assert!(request.stackable);
        assert_eq!(request.company.as_deref(), Some("Caspian Traders"));
    }

    #[test]
    fn test_collect_unknown_destination() {
        let schedule = RateSchedule::default();
        let err = collect(&schedule, args("Mars")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<QuoteError>(),
            Some(&QuoteError::UnknownDestination("Mars".to_string()))
        );
    }

    #[test]
    fn test_render_lists_every_line() {
        colored::control::set_override(false);

        let schedule = RateSchedule::default();
        let request = collect(&schedule, args("Baku, Azerbaijan")).unwrap();
        let breakdown = freight::quote(&schedule, &request).unwrap();
        let out = render(&schedule, &request, &breakdown);

        assert_eq!(out[0], "Caspian Traders");
        assert_eq!(out[1], "Route: Yiwu, China → Khorgos, Kazakhstan → Baku, Azerbaijan");
        assert!(out[2].ends_with(", stackable"));
        assert_eq!(out.len(), 4 + 11);
        assert!(out.iter().any(|l| l.contains("Second Leg Cost (USD)") && l.ends_with("95.90")));
        assert!(out.last().unwrap().contains("Total Cost (USD)"));
    }

    #[test]
    fn test_json_output_keeps_display_order() {
        let schedule = RateSchedule::default();
        let request = collect(&schedule, args("Baku, Azerbaijan")).unwrap();
        let breakdown = freight::quote(&schedule, &request).unwrap();
        let body = to_json(&schedule, &request, &breakdown).unwrap();

        let positions: Vec<usize> = breakdown
            .lines()
            .iter()
            .map(|line| body.find(&line.label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["hub"], "Khorgos, Kazakhstan");
        assert_eq!(json["company"], "Caspian Traders");
        assert_eq!(json["breakdown"]["Total Cost (USD)"], 675.74);
    }
}
