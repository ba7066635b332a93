//! Savings Projector CLI
//!
//! Command-line interface for running savings projections and goal solvers

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use savings_projector::{
    calendar::months_between,
    export::{to_json, write_series_csv},
    goals::parse_date,
    projection::{
        horizon_from_signed, required_periodic_contribution, ProjectionConfig, ProjectionEngine,
        ProjectionInput,
    },
    scenario::{compare, ScenarioRunner},
};
use std::fs::File;

#[derive(Parser, Debug)]
#[command(name = "savings_projector", version, about = "Compound-interest savings projections")]
struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Override the target-date search cap (defaults to MAX_SEARCH_MONTHS or 600)
    #[arg(long, global = true)]
    max_search_months: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a balance forward month by month
    Project {
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,
        /// Annual return rate in percent
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
        #[arg(long, allow_hyphen_values = true)]
        months: i64,
        #[arg(long)]
        target: Option<f64>,
        /// Write the full series to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },
    /// Monthly contribution needed to reach a target
    Required {
        #[arg(long, default_value_t = 0.0)]
        current: f64,
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
        #[arg(long, allow_hyphen_values = true)]
        months: i64,
    },
    /// Date at which a fixed monthly saving reaches a target
    TargetDate {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long)]
        monthly: f64,
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
    },
    /// Approximate months between two dates
    MonthsBetween {
        start: String,
        end: String,
    },
    /// Compare final totals across several return rates
    WhatIf {
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,
        #[arg(long)]
        months: u32,
        /// Comma-separated annual rates in percent
        #[arg(long, value_delimiter = ',', default_values_t = vec![2.0, 4.0, 6.0, 8.0])]
        rates: Vec<f64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = ProjectionConfig::from_env();
    if let Some(cap) = cli.max_search_months {
        config.max_search_months = cap;
    }
    let engine = ProjectionEngine::new(config);

    match cli.command {
        Command::Project { start, contribution, rate, months, target, csv } => {
            let horizon = horizon_from_signed(months)?;
            let mut input = ProjectionInput::new(start, contribution, rate, horizon);
            input.target_amount = target;
            let result = engine.project(&input);

            if let Some(path) = csv {
                let file = File::create(&path)
                    .with_context(|| format!("Unable to create {}", path))?;
                write_series_csv(file, &result)?;
                eprintln!("Full series written to: {}", path);
            }

            if cli.json {
                println!("{}", to_json(&result)?);
                return Ok(());
            }

            println!("Projection Results ({} months):", horizon);
            println!("{:>5} {:>14} {:>14} {:>14}", "Month", "Principal", "Interest", "Total");
            println!("{}", "-".repeat(50));
            for point in result.series.iter().take(24) {
                println!(
                    "{:>5} {:>14.2} {:>14.2} {:>14.2}",
                    point.month_index, point.principal, point.interest, point.total
                );
            }
            if result.series.len() > 24 {
                println!("... ({} more months)", result.series.len() - 24);
            }

            let summary = result.summary();
            println!("\nSummary:");
            println!("  Contributed:    ${:.2}", summary.total_contributed);
            println!("  Final Principal: ${:.2}", summary.final_principal);
            println!("  Final Interest:  ${:.2}", summary.final_interest);
            println!("  Final Total:     ${:.2}", summary.final_total);
            match (target, summary.months_to_target) {
                (Some(t), Some(m)) => println!("  Target ${:.2} reached in month {}", t, m),
                (Some(t), None) => println!("  Target ${:.2} not reached within horizon", t),
                _ => {}
            }
        }
        Command::Required { current, target, rate, months } => {
            let months = horizon_from_signed(months)?;
            let required = required_periodic_contribution(current, target, rate, months);
            if cli.json {
                println!("{}", serde_json::json!({ "required_monthly_contribution": required }));
            } else {
                println!("Required monthly contribution: ${:.2}", required);
            }
        }
        Command::TargetDate { start_date, initial, monthly, target, rate } => {
            let start: NaiveDate = parse_date(&start_date)?;
            let found = engine.target_date_search(start, initial, monthly, target, rate);
            if cli.json {
                println!("{}", to_json(&found)?);
            } else {
                match found {
                    Some(t) => println!("Target reached on {} ({} months)", t.date, t.months),
                    None => println!(
                        "Target not reachable within {} months",
                        engine.config().max_search_months
                    ),
                }
            }
        }
        Command::MonthsBetween { start, end } => {
            let months = months_between(parse_date(&start)?, parse_date(&end)?);
            if cli.json {
                println!("{}", serde_json::json!({ "months": months }));
            } else {
                println!("{}", months);
            }
        }
        Command::WhatIf { start, contribution, months, rates } => {
            let runner = ScenarioRunner::with_config(engine.config().clone());
            let base = ProjectionInput::new(start, contribution, 0.0, months);
            let outcomes = runner.run_scenarios(&ScenarioRunner::rate_sweep(&base, &rates));

            if cli.json {
                println!("{}", to_json(&outcomes)?);
                return Ok(());
            }

            println!("{:>16} {:>14} {:>14} {:>14}", "Scenario", "Principal", "Interest", "Total");
            println!("{}", "-".repeat(62));
            for outcome in &outcomes {
                println!(
                    "{:>16} {:>14.2} {:>14.2} {:>14.2}",
                    outcome.label,
                    outcome.result.final_principal,
                    outcome.result.final_interest,
                    outcome.result.final_total
                );
            }
            if let Some(cmp) = compare(&outcomes) {
                println!(
                    "\nBest: {} (${:.2}), spread ${:.2}",
                    cmp.best_label, cmp.best_total, cmp.spread
                );
            }
        }
    }

    Ok(())
}
