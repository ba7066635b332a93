//! What-if scenario runner for batch projections
//!
//! Runs the same engine over many variations of one projection (different
//! return rates or contributions) and evaluates many goals at once.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::{GoalOutlook, SavingsGoal};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionInput, ProjectionResult};

/// A labelled projection input for side-by-side comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatIfScenario {
    pub label: String,
    pub input: ProjectionInput,
}

impl WhatIfScenario {
    pub fn new(label: impl Into<String>, input: ProjectionInput) -> Self {
        Self {
            label: label.into(),
            input,
        }
    }
}

/// Result of running one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub label: String,
    pub result: ProjectionResult,
}

/// Best and worst scenarios by final total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub best_label: String,
    pub best_total: f64,
    pub worst_label: String,
    pub worst_total: f64,
    /// Best minus worst final total
    pub spread: f64,
}

/// Scenario runner wrapping a shared projection engine
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let base = ProjectionInput::new(10_000.0, 500.0, 6.0, 120);
/// let outcomes = runner.run_scenarios(&ScenarioRunner::rate_sweep(&base, &[4.0, 6.0, 8.0]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with default engine config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific engine config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> ProjectionResult {
        self.engine.project(input)
    }

    /// Run every scenario, preserving order
    pub fn run_scenarios(&self, scenarios: &[WhatIfScenario]) -> Vec<ScenarioOutcome> {
        scenarios
            .iter()
            .map(|scenario| ScenarioOutcome {
                label: scenario.label.clone(),
                result: self.engine.project(&scenario.input),
            })
            .collect()
    }

    /// Evaluate many goals in parallel against their current saved amounts
    pub fn evaluate_goals(
        &self,
        goals: &[(SavingsGoal, f64)],
        as_of: NaiveDate,
    ) -> Vec<GoalOutlook> {
        goals
            .par_iter()
            .map(|(goal, current)| self.engine.evaluate_goal(goal, *current, as_of))
            .collect()
    }

    /// Copies of `base` with each annual return rate substituted
    pub fn rate_sweep(base: &ProjectionInput, rates_pct: &[f64]) -> Vec<WhatIfScenario> {
        rates_pct
            .iter()
            .map(|&rate| {
                let input = ProjectionInput {
                    annual_return_rate_pct: rate,
                    ..base.clone()
                };
                WhatIfScenario::new(format!("{:.2}% return", rate), input)
            })
            .collect()
    }

    /// Copies of `base` with each monthly contribution substituted
    pub fn contribution_sweep(
        base: &ProjectionInput,
        contributions: &[f64],
    ) -> Vec<WhatIfScenario> {
        contributions
            .iter()
            .map(|&amount| {
                let input = ProjectionInput {
                    periodic_contribution: amount,
                    ..base.clone()
                };
                WhatIfScenario::new(format!("{:.2}/month", amount), input)
            })
            .collect()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

/// Compare outcomes by final total; `None` when there are no outcomes
pub fn compare(outcomes: &[ScenarioOutcome]) -> Option<ScenarioComparison> {
    let best = outcomes
        .iter()
        .max_by(|a, b| a.result.final_total.total_cmp(&b.result.final_total))?;
    let worst = outcomes
        .iter()
        .min_by(|a, b| a.result.final_total.total_cmp(&b.result.final_total))?;

    Some(ScenarioComparison {
        best_label: best.label.clone(),
        best_total: best.result.final_total,
        worst_label: worst.label.clone(),
        worst_total: worst.result.final_total,
        spread: best.result.final_total - worst.result.final_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> ProjectionInput {
        ProjectionInput::new(10_000.0, 500.0, 6.0, 120)
    }

    #[test]
    fn test_rate_sweep() {
        let runner = ScenarioRunner::new();
        let scenarios = ScenarioRunner::rate_sweep(&base_input(), &[3.0, 5.0, 7.0]);
        let outcomes = runner.run_scenarios(&scenarios);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].label, "3.00% return");

        // Higher return should result in a higher final total
        assert!(outcomes[2].result.final_total > outcomes[0].result.final_total);

        // Principal does not depend on the rate
        assert_eq!(outcomes[0].result.final_principal, outcomes[2].result.final_principal);
    }

    #[test]
    fn test_contribution_sweep_and_compare() {
        let runner = ScenarioRunner::new();
        let scenarios = ScenarioRunner::contribution_sweep(&base_input(), &[250.0, 1000.0, 500.0]);
        let outcomes = runner.run_scenarios(&scenarios);

        let comparison = compare(&outcomes).unwrap();
        assert_eq!(comparison.best_label, "1000.00/month");
        assert_eq!(comparison.worst_label, "250.00/month");
        assert!(comparison.spread > 0.0);
    }

    #[test]
    fn test_compare_empty() {
        assert!(compare(&[]).is_none());
    }

    #[test]
    fn test_evaluate_goals_preserves_order() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let goals: Vec<(SavingsGoal, f64)> = (1..=20)
            .map(|id| {
                let target = 5_000.0 * id as f64;
                let name = format!("Goal {}", id);
                let goal = SavingsGoal::new(id, name, target, start, end, 200.0, 4.0);
                (goal, 1_000.0)
            })
            .collect();

        let outlooks = ScenarioRunner::new().evaluate_goals(&goals, start);
        assert_eq!(outlooks.len(), 20);
        for (outlook, (goal, _)) in outlooks.iter().zip(&goals) {
            assert_eq!(outlook.goal_id, goal.id);
        }
        assert!(outlooks[0].on_track);
        assert!(!outlooks[19].on_track);
    }
}
