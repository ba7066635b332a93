//! Load savings goals from CSV exports

use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;

use super::SavingsGoal;
use crate::error::{ProjectionError, Result};

/// Default path to the goals file used by the batch report
pub const DEFAULT_GOALS_PATH: &str = "data/savings_goals.csv";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw CSV row matching the goals export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "GoalID")]
    goal_id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "TargetAmount")]
    target_amount: f64,
    #[serde(rename = "StartDate")]
    start_date: String,
    #[serde(rename = "TargetDate")]
    target_date: String,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: f64,
    #[serde(rename = "ExpectedReturnPct")]
    expected_return_pct: f64,
    /// Optional amount already saved toward the goal
    #[serde(rename = "CurrentAmount", default)]
    current_amount: Option<f64>,
}

impl CsvRow {
    fn to_goal(self) -> Result<(SavingsGoal, Option<f64>)> {
        let current_amount = self.current_amount;
        let goal = SavingsGoal {
            id: self.goal_id,
            name: self.name,
            target_amount: self.target_amount,
            start_date: parse_date(&self.start_date)?,
            target_date: parse_date(&self.target_date)?,
            monthly_contribution: self.monthly_contribution,
            expected_return_rate_pct: self.expected_return_pct,
        };
        goal.validate()?;
        Ok((goal, current_amount))
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| ProjectionError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Load all goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<SavingsGoal>> {
    Ok(strip_amounts(collect_goals(Reader::from_path(path)?)?))
}

/// Load goals from any reader (e.g., string buffer, network stream)
pub fn load_goals_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<SavingsGoal>> {
    Ok(strip_amounts(collect_goals(Reader::from_reader(reader))?))
}

/// Load goals with the optional `CurrentAmount` column (None where blank or absent)
pub fn load_goals_with_amounts<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<(SavingsGoal, Option<f64>)>> {
    collect_goals(Reader::from_path(path)?)
}

/// Reader variant of [`load_goals_with_amounts`]
pub fn load_goals_with_amounts_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<(SavingsGoal, Option<f64>)>> {
    collect_goals(Reader::from_reader(reader))
}

fn strip_amounts(rows: Vec<(SavingsGoal, Option<f64>)>) -> Vec<SavingsGoal> {
    rows.into_iter().map(|(goal, _)| goal).collect()
}

/// Load goals from the default location
pub fn load_default_goals() -> Result<Vec<SavingsGoal>> {
    load_goals(DEFAULT_GOALS_PATH)
}

fn collect_goals<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<Vec<(SavingsGoal, Option<f64>)>> {
    let mut goals = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        goals.push(row.to_goal()?);
    }

    log::info!("Loaded {} savings goals", goals.len());
    Ok(goals)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOALS_CSV: &str = "\
GoalID,Name,TargetAmount,StartDate,TargetDate,MonthlyContribution,ExpectedReturnPct
1,Emergency fund,10000,2024-01-01,2025-01-01,800,4.5
2,House deposit,60000,2024-03-15,2029-03-15,750,6
";

    #[test]
    fn test_load_goals_from_reader() {
        let goals = load_goals_from_reader(GOALS_CSV.as_bytes()).unwrap();
        assert_eq!(goals.len(), 2);

        let house = &goals[1];
        assert_eq!(house.id, 2);
        assert_eq!(house.name, "House deposit");
        assert_eq!(house.start_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(house.monthly_contribution, 750.0);
        assert_eq!(house.expected_return_rate_pct, 6.0);
    }

    #[test]
    fn test_current_amount_column() {
        let csv = "\
GoalID,Name,TargetAmount,StartDate,TargetDate,MonthlyContribution,ExpectedReturnPct,CurrentAmount
1,Emergency fund,10000,2024-01-01,2025-01-01,800,4.5,2500
2,Car,5000,2024-01-01,2025-01-01,100,3,
";
        let rows = load_goals_with_amounts_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1, Some(2500.0));
        assert_eq!(rows[1].1, None);
    }

    #[test]
    fn test_current_amount_column_optional() {
        let rows = load_goals_with_amounts_from_reader(GOALS_CSV.as_bytes()).unwrap();
        assert!(rows.iter().all(|(_, amount)| amount.is_none()));
    }

    #[test]
    fn test_bad_date_rejected() {
        let csv = "\
GoalID,Name,TargetAmount,StartDate,TargetDate,MonthlyContribution,ExpectedReturnPct
1,Car,5000,2024-13-01,2025-01-01,100,3
";
        let err = load_goals_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidDate { .. }));
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let csv = "\
GoalID,Name,TargetAmount,StartDate,TargetDate,MonthlyContribution,ExpectedReturnPct
1,Car,5000,2025-01-01,2024-01-01,100,3
";
        let err = load_goals_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidArgument(_)));
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let csv = "\
GoalID,Name,TargetAmount,StartDate,TargetDate,MonthlyContribution,ExpectedReturnPct
1,Car,lots,2024-01-01,2025-01-01,100,3
";
        let err = load_goals_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::Csv(_)));
    }
}
