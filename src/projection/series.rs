//! Projection output structures

use serde::{Deserialize, Serialize};

/// A single month of projection output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month_index: u32,
    /// Opening balance plus contributions to date
    pub principal: f64,
    /// Growth portion of the balance (total - principal)
    pub interest: f64,
    pub total: f64,
}

/// Complete projection result
///
/// The series is fully materialized: one point per month from 0 to the
/// horizon inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Monthly points, `horizon_months + 1` long
    pub series: Vec<ProjectionPoint>,

    pub final_total: f64,
    pub final_interest: f64,
    pub final_principal: f64,

    /// First month at which the total met the target, if a target was given
    /// and reached within the horizon
    pub months_to_target: Option<u32>,
}

impl ProjectionResult {
    pub(crate) fn with_capacity(months: usize) -> Self {
        Self {
            series: Vec::with_capacity(months),
            final_total: 0.0,
            final_interest: 0.0,
            final_principal: 0.0,
            months_to_target: None,
        }
    }

    /// Add a point
    pub(crate) fn add_point(&mut self, point: ProjectionPoint) {
        self.series.push(point);
    }

    /// Copy summary fields from the last point
    pub(crate) fn finalize(&mut self) {
        if let Some(last) = self.series.last() {
            self.final_total = last.total;
            self.final_interest = last.interest;
            self.final_principal = last.principal;
        }
    }

    /// Number of months projected (excluding month 0)
    pub fn horizon_months(&self) -> u32 {
        self.series.len().saturating_sub(1) as u32
    }

    /// Point for a given month, if within the horizon
    pub fn point(&self, month: u32) -> Option<&ProjectionPoint> {
        self.series.get(month as usize)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let starting_balance = self.series.first().map(|p| p.principal).unwrap_or(0.0);
        let total_contributed = self.final_principal - starting_balance;

        let growth_multiple = if self.final_principal.abs() > 1e-12 {
            self.final_total / self.final_principal
        } else {
            1.0
        };

        ProjectionSummary {
            horizon_months: self.horizon_months(),
            starting_balance,
            total_contributed,
            final_principal: self.final_principal,
            final_interest: self.final_interest,
            final_total: self.final_total,
            growth_multiple,
            months_to_target: self.months_to_target,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_months: u32,
    pub starting_balance: f64,
    pub total_contributed: f64,
    pub final_principal: f64,
    pub final_interest: f64,
    pub final_total: f64,
    /// Final total divided by final principal
    pub growth_multiple: f64,
    pub months_to_target: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month_index: u32, principal: f64, total: f64) -> ProjectionPoint {
        ProjectionPoint {
            month_index,
            principal,
            interest: total - principal,
            total,
        }
    }

    #[test]
    fn test_finalize_uses_last_point() {
        let mut result = ProjectionResult::with_capacity(3);
        result.add_point(point(0, 100.0, 101.0));
        result.add_point(point(1, 150.0, 153.0));
        result.add_point(point(2, 200.0, 206.0));
        result.finalize();

        assert_eq!(result.horizon_months(), 2);
        assert_eq!(result.final_total, 206.0);
        assert_eq!(result.final_principal, 200.0);
        assert_eq!(result.final_interest, 6.0);

        let summary = result.summary();
        assert_eq!(summary.starting_balance, 100.0);
        assert_eq!(summary.total_contributed, 100.0);
        assert!((summary.growth_multiple - 1.03).abs() < 1e-12);
    }

    #[test]
    fn test_empty_result_summary() {
        let mut result = ProjectionResult::with_capacity(0);
        result.finalize();
        let summary = result.summary();
        assert_eq!(summary.horizon_months, 0);
        assert_eq!(summary.growth_multiple, 1.0);
        assert!(result.point(0).is_none());
    }
}
