//! Core projection engine for monthly compound-interest savings projections

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::goals::{GoalOutlook, SavingsGoal, GOAL_TOLERANCE};
use super::search::{self, TargetDate, DEFAULT_MAX_SEARCH_MONTHS};
use super::series::{ProjectionPoint, ProjectionResult};
use super::solver::{monthly_rate, required_periodic_contribution};
use super::state::ProjectionState;

/// Configuration for the projection engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Hard cap on months simulated by the target-date search
    pub max_search_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_search_months: DEFAULT_MAX_SEARCH_MONTHS, // 50 years
        }
    }
}

impl ProjectionConfig {
    /// Read config from environment, falling back to defaults
    ///
    /// `MAX_SEARCH_MONTHS` overrides the target-date search cap.
    pub fn from_env() -> Self {
        let max_search_months = std::env::var("MAX_SEARCH_MONTHS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_SEARCH_MONTHS);

        Self { max_search_months }
    }
}

/// Inputs for a single forward projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Opening balance at month 0
    pub starting_balance: f64,

    /// Amount added at the start of each month after month 0
    pub periodic_contribution: f64,

    /// Expected annual return as a percentage (6.0 = 6%)
    pub annual_return_rate_pct: f64,

    /// Number of months to project; the series has `horizon_months + 1` points
    pub horizon_months: u32,

    /// Optional goal amount used to detect the first month it is reached
    #[serde(default)]
    pub target_amount: Option<f64>,
}

impl ProjectionInput {
    pub fn new(
        starting_balance: f64,
        periodic_contribution: f64,
        annual_return_rate_pct: f64,
        horizon_months: u32,
    ) -> Self {
        Self {
            starting_balance,
            periodic_contribution,
            annual_return_rate_pct,
            horizon_months,
            target_amount: None,
        }
    }

    /// Build an input from a signed horizon, rejecting negative values
    pub fn with_signed_horizon(
        starting_balance: f64,
        periodic_contribution: f64,
        annual_return_rate_pct: f64,
        horizon_months: i64,
        target_amount: Option<f64>,
    ) -> Result<Self> {
        let horizon_months = horizon_from_signed(horizon_months)?;
        Ok(Self {
            target_amount,
            ..Self::new(
                starting_balance,
                periodic_contribution,
                annual_return_rate_pct,
                horizon_months,
            )
        })
    }

    pub fn with_target(mut self, target_amount: f64) -> Self {
        self.target_amount = Some(target_amount);
        self
    }
}

/// Convert a signed month count to the engine's unsigned horizon
pub fn horizon_from_signed(months: i64) -> Result<u32> {
    if months < 0 {
        return Err(ProjectionError::invalid(format!(
            "horizon must be non-negative, got {} months",
            months
        )));
    }
    u32::try_from(months)
        .map_err(|_| ProjectionError::invalid(format!("horizon of {} months is too large", months)))
}

/// Main projection engine
///
/// Holds no state between calls; a single engine can be shared across
/// threads and every call returns its own series.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run a month-by-month projection
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        if input.annual_return_rate_pct < 0.0 || input.periodic_contribution < 0.0 {
            warn!(
                "Simulating negative inputs: rate={}%, contribution={}",
                input.annual_return_rate_pct, input.periodic_contribution
            );
        }

        let rate = monthly_rate(input.annual_return_rate_pct);
        let mut result = ProjectionResult::with_capacity(input.horizon_months as usize + 1);
        let mut state = ProjectionState::new(input.starting_balance, input.periodic_contribution);

        for month in 0..=input.horizon_months {
            let point = self.calculate_month(&mut state, month, rate);

            // First crossing wins, even if a later month dips below the target
            if result.months_to_target.is_none() {
                if let Some(target) = input.target_amount {
                    if point.total >= target {
                        result.months_to_target = Some(month);
                    }
                }
            }

            result.add_point(point);
        }

        result.finalize();

        debug!(
            "Projected {} months: principal={:.2}, interest={:.2}, total={:.2}, target_month={:?}",
            input.horizon_months,
            result.final_principal,
            result.final_interest,
            result.final_total,
            result.months_to_target
        );

        result
    }

    /// Advance one month: contribution first (after month 0), then interest
    fn calculate_month(
        &self,
        state: &mut ProjectionState,
        month: u32,
        rate: f64,
    ) -> ProjectionPoint {
        state.advance_month(month);
        state.accrue_interest(rate);

        ProjectionPoint {
            month_index: month,
            principal: state.principal(),
            interest: state.interest(),
            total: state.balance,
        }
    }

    /// Find the date a fixed monthly saving reaches the target, using the
    /// configured search cap
    pub fn target_date_search(
        &self,
        start_date: NaiveDate,
        initial_amount: f64,
        monthly_savings: f64,
        target_amount: f64,
        annual_return_rate_pct: f64,
    ) -> Option<TargetDate> {
        search::search_target_date(
            start_date,
            initial_amount,
            monthly_savings,
            target_amount,
            annual_return_rate_pct,
            self.config.max_search_months,
        )
    }

    /// Project a goal from `as_of` to its target date and compare against the target
    pub fn evaluate_goal(
        &self,
        goal: &SavingsGoal,
        current_amount: f64,
        as_of: NaiveDate,
    ) -> GoalOutlook {
        let months_remaining = goal.months_remaining(as_of);
        // Within half a cent counts as reached
        let reach_threshold = goal.target_amount - GOAL_TOLERANCE;
        let input = ProjectionInput::new(
            current_amount,
            goal.monthly_contribution,
            goal.expected_return_rate_pct,
            months_remaining,
        )
        .with_target(reach_threshold);

        let projection = self.project(&input);
        let on_track = projection.final_total >= reach_threshold;
        let shortfall = if on_track {
            0.0
        } else {
            goal.target_amount - projection.final_total
        };

        let required_monthly_contribution = required_periodic_contribution(
            current_amount,
            goal.target_amount,
            goal.expected_return_rate_pct,
            months_remaining,
        );

        let projected_reach = self.target_date_search(
            goal.effective_start(as_of),
            current_amount,
            goal.monthly_contribution,
            reach_threshold,
            goal.expected_return_rate_pct,
        );

        debug!(
            "Goal {} '{}': {} months left, on_track={}, required={:.2}",
            goal.id, goal.name, months_remaining, on_track, required_monthly_contribution
        );

        GoalOutlook {
            goal_id: goal.id,
            goal_name: goal.name.clone(),
            as_of,
            current_amount,
            progress_pct: goal.progress_pct(current_amount),
            months_remaining,
            projection,
            on_track,
            shortfall,
            required_monthly_contribution,
            projected_reach,
        }
    }
}

/// Run a projection with a default engine
pub fn project(
    starting_balance: f64,
    periodic_contribution: f64,
    annual_return_rate_pct: f64,
    horizon_months: u32,
    target_amount: Option<f64>,
) -> ProjectionResult {
    let input = ProjectionInput {
        target_amount,
        ..ProjectionInput::new(
            starting_balance,
            periodic_contribution,
            annual_return_rate_pct,
            horizon_months,
        )
    };
    ProjectionEngine::default().project(&input)
}
