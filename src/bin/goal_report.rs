//! Evaluate every savings goal in a CSV export
//!
//! Outputs one row per goal with projected totals and required contributions.
//! Usage: goal_report [GOALS_CSV] [AS_OF YYYY-MM-DD]
//! Current saved amounts come from the optional CurrentAmount column. Goals
//! without one fall back to the CURRENT_AMOUNT env var (default 0).

use anyhow::{Context, Result};
use chrono::Local;
use savings_projector::{
    goals::{load_goals_with_amounts, loader::DEFAULT_GOALS_PATH, parse_date},
    projection::ProjectionConfig,
    scenario::ScenarioRunner,
};
use std::env;
use std::fs::File;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let mut args = env::args().skip(1);
    let goals_path = args.next().unwrap_or_else(|| DEFAULT_GOALS_PATH.to_string());
    let as_of = match args.next() {
        Some(date) => parse_date(&date)?,
        None => Local::now().date_naive(),
    };
    let default_amount: f64 = env::var("CURRENT_AMOUNT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0);

    println!("Loading goals from {}...", goals_path);
    let goals = load_goals_with_amounts(&goals_path)
        .with_context(|| format!("Failed to load goals from {}", goals_path))?;
    println!("Loaded {} goals in {:?}", goals.len(), start.elapsed());

    let runner = ScenarioRunner::with_config(ProjectionConfig::from_env());
    let inputs: Vec<_> = goals
        .into_iter()
        .map(|(goal, current)| (goal, current.unwrap_or(default_amount)))
        .collect();

    let proj_start = Instant::now();
    let outlooks = runner.evaluate_goals(&inputs, as_of);
    println!("Evaluated {} goals in {:?}", outlooks.len(), proj_start.elapsed());

    let output_path = "goal_report_output.csv";
    let file = File::create(output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "GoalID",
        "Name",
        "MonthsRemaining",
        "ProjectedTotal",
        "OnTrack",
        "Shortfall",
        "RequiredMonthly",
        "ProjectedReachDate",
    ])?;

    for outlook in &outlooks {
        writer.write_record(&[
            outlook.goal_id.to_string(),
            outlook.goal_name.clone(),
            outlook.months_remaining.to_string(),
            format!("{:.2}", outlook.projection.final_total),
            outlook.on_track.to_string(),
            format!("{:.2}", outlook.shortfall),
            format!("{:.2}", outlook.required_monthly_contribution),
            outlook
                .projected_reach
                .map(|r| r.date.to_string())
                .unwrap_or_default(),
        ])?;
    }
    writer.flush()?;

    println!("Output written to {}", output_path);

    let on_track = outlooks.iter().filter(|o| o.on_track).count();
    let total_shortfall: f64 = outlooks.iter().map(|o| o.shortfall).sum();
    println!("\nGoal Summary (as of {}):", as_of);
    println!("  On track:        {}/{}", on_track, outlooks.len());
    println!("  Total shortfall: ${:.2}", total_shortfall);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
