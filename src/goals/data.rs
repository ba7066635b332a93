//! Savings goal records and their projected outlook

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::months_between;
use crate::error::{ProjectionError, Result};
use crate::projection::{ProjectionInput, ProjectionResult, TargetDate};

/// Amount below the target still treated as reached (half a cent)
pub const GOAL_TOLERANCE: f64 = 0.005;

/// A savings goal as stored by the owning application
///
/// The engine only reads goals; it never mutates or persists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: u32,
    pub name: String,
    pub target_amount: f64,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub monthly_contribution: f64,
    /// Expected annual return as a percentage (7.0 = 7%)
    pub expected_return_rate_pct: f64,
}

impl SavingsGoal {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        target_amount: f64,
        start_date: NaiveDate,
        target_date: NaiveDate,
        monthly_contribution: f64,
        expected_return_rate_pct: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            target_amount,
            start_date,
            target_date,
            monthly_contribution,
            expected_return_rate_pct,
        }
    }

    /// Check the goal is usable for projection
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ProjectionError::invalid(format!("goal {} has an empty name", self.id)));
        }
        if !(self.target_amount > 0.0) {
            return Err(ProjectionError::invalid(format!(
                "goal {} target amount must be positive, got {}",
                self.id, self.target_amount
            )));
        }
        if self.target_date < self.start_date {
            return Err(ProjectionError::invalid(format!(
                "goal {} target date {} is before start date {}",
                self.id, self.target_date, self.start_date
            )));
        }
        if self.monthly_contribution < 0.0 {
            return Err(ProjectionError::invalid(format!(
                "goal {} monthly contribution must not be negative, got {}",
                self.id, self.monthly_contribution
            )));
        }
        Ok(())
    }

    /// Approximate months from start date to target date
    pub fn horizon_months(&self) -> u32 {
        months_between(self.start_date, self.target_date)
    }

    /// Approximate months left as of a given date (never counts time before the start date)
    pub fn months_remaining(&self, as_of: NaiveDate) -> u32 {
        months_between(self.effective_start(as_of), self.target_date)
    }

    /// Later of the goal start date and `as_of`
    pub fn effective_start(&self, as_of: NaiveDate) -> NaiveDate {
        as_of.max(self.start_date)
    }

    /// Projection input over the full goal horizon, starting from `current_amount`
    pub fn to_projection_input(&self, current_amount: f64) -> ProjectionInput {
        ProjectionInput::new(
            current_amount,
            self.monthly_contribution,
            self.expected_return_rate_pct,
            self.horizon_months(),
        )
        .with_target(self.target_amount)
    }

    /// Share of the target already saved, capped at 100%
    pub fn progress_pct(&self, current_amount: f64) -> f64 {
        if self.target_amount <= 0.0 {
            return 100.0;
        }
        (current_amount / self.target_amount * 100.0).clamp(0.0, 100.0)
    }
}

/// Projected status of a goal as of a given date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOutlook {
    pub goal_id: u32,
    pub goal_name: String,
    pub as_of: NaiveDate,
    pub current_amount: f64,
    pub progress_pct: f64,
    pub months_remaining: u32,

    /// Projection from `as_of` to the target date at the planned contribution
    pub projection: ProjectionResult,

    /// Projected total meets the target by the target date
    pub on_track: bool,

    /// Amount the projection falls short of the target (0 when on track)
    pub shortfall: f64,

    /// Monthly contribution needed to hit the target on time
    pub required_monthly_contribution: f64,

    /// When the planned contribution reaches the target, if ever within the search cap
    pub projected_reach: Option<TargetDate>,
}

impl GoalOutlook {
    /// Extra monthly saving needed over the current plan (0 if none)
    pub fn contribution_gap(&self, planned_contribution: f64) -> f64 {
        (self.required_monthly_contribution - planned_contribution).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn house_goal() -> SavingsGoal {
        SavingsGoal::new(
            1,
            "House deposit",
            60_000.0,
            date(2025, 1, 1),
            date(2030, 1, 1),
            800.0,
            5.0,
        )
    }

    #[test]
    fn test_horizon_months() {
        let goal = house_goal();
        assert_eq!(goal.horizon_months(), 60);
        assert_eq!(goal.months_remaining(date(2024, 6, 1)), 60);
        assert!(goal.months_remaining(date(2027, 1, 1)) < 60);
        assert_eq!(goal.months_remaining(date(2031, 1, 1)), 0);
    }

    #[test]
    fn test_to_projection_input() {
        let input = house_goal().to_projection_input(10_000.0);
        assert_eq!(input.starting_balance, 10_000.0);
        assert_eq!(input.periodic_contribution, 800.0);
        assert_eq!(input.annual_return_rate_pct, 5.0);
        assert_eq!(input.horizon_months, 60);
        assert_eq!(input.target_amount, Some(60_000.0));
    }

    #[test]
    fn test_validate() {
        assert!(house_goal().validate().is_ok());

        let mut goal = house_goal();
        goal.target_amount = 0.0;
        assert!(matches!(goal.validate(), Err(ProjectionError::InvalidArgument(_))));

        let mut goal = house_goal();
        goal.target_date = date(2024, 1, 1);
        assert!(goal.validate().is_err());

        let mut goal = house_goal();
        goal.name = "  ".to_string();
        assert!(goal.validate().is_err());

        let mut goal = house_goal();
        goal.monthly_contribution = -1.0;
        assert!(goal.validate().is_err());
    }

    #[test]
    fn test_progress_pct() {
        let goal = house_goal();
        assert_eq!(goal.progress_pct(15_000.0), 25.0);
        assert_eq!(goal.progress_pct(90_000.0), 100.0);
        assert_eq!(goal.progress_pct(-5.0), 0.0);
    }
}
