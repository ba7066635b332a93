//! Target-date search: how long a fixed monthly saving takes to reach a goal

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::calendar::add_months;
use super::solver::monthly_rate;

/// Default search cap (50 years)
pub const DEFAULT_MAX_SEARCH_MONTHS: u32 = 600;

/// Date and month count at which a savings target is first reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDate {
    pub date: NaiveDate,
    pub months: u32,
}

/// Search with the default 600-month cap
///
/// Returns `None` when the search is infeasible (no positive saving or no
/// positive target) or the target is not reached within the cap. Hitting the
/// cap is a normal outcome meaning "unreachable in practice".
pub fn target_date_search(
    start_date: NaiveDate,
    initial_amount: f64,
    monthly_savings: f64,
    target_amount: f64,
    annual_return_rate_pct: f64,
) -> Option<TargetDate> {
    search_target_date(
        start_date,
        initial_amount,
        monthly_savings,
        target_amount,
        annual_return_rate_pct,
        DEFAULT_MAX_SEARCH_MONTHS,
    )
}

/// Step forward month by month until the balance meets the target.
///
/// Each step adds the saving before crediting interest, the same order the
/// projection engine uses for months after month 0.
pub fn search_target_date(
    start_date: NaiveDate,
    initial_amount: f64,
    monthly_savings: f64,
    target_amount: f64,
    annual_return_rate_pct: f64,
    max_months: u32,
) -> Option<TargetDate> {
    if monthly_savings <= 0.0 || !(target_amount > 0.0) {
        return None;
    }

    let rate = monthly_rate(annual_return_rate_pct);
    let mut balance = initial_amount;
    let mut months: u32 = 0;

    while balance < target_amount {
        balance += monthly_savings;
        balance += balance * rate;
        months += 1;

        if months > max_months {
            debug!(
                "Target {:.2} not reached within {} months (balance {:.2})",
                target_amount, max_months, balance
            );
            return None;
        }
    }

    let date = add_months(start_date, months)?;
    Some(TargetDate { date, months })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_simple_linear_search() {
        let found = target_date_search(date(2024, 1, 31), 0.0, 1000.0, 3000.0, 0.0).unwrap();
        assert_eq!(found.months, 3);
        assert_eq!(found.date, date(2024, 4, 30));
    }

    #[test]
    fn test_already_reached() {
        let found = target_date_search(date(2024, 6, 1), 5000.0, 100.0, 5000.0, 5.0).unwrap();
        assert_eq!(found.months, 0);
        assert_eq!(found.date, date(2024, 6, 1));
    }

    #[test]
    fn test_infeasible_inputs() {
        let start = date(2024, 1, 1);
        assert_eq!(target_date_search(start, 0.0, 0.0, 1000.0, 5.0), None);
        assert_eq!(target_date_search(start, 0.0, -50.0, 1000.0, 5.0), None);
        assert_eq!(target_date_search(start, 0.0, 100.0, 0.0, 5.0), None);
        assert_eq!(target_date_search(start, 0.0, 100.0, f64::NAN, 5.0), None);
    }

    #[test]
    fn test_cap_returns_none() {
        let start = date(2024, 1, 1);
        assert_eq!(target_date_search(start, 0.0, 1.0, 1e12, 7.0), None);
    }

    #[test]
    fn test_custom_cap() {
        let start = date(2024, 1, 1);
        assert_eq!(search_target_date(start, 0.0, 1000.0, 3000.0, 0.0, 2), None);

        let found = search_target_date(start, 0.0, 1000.0, 3000.0, 0.0, 3).unwrap();
        assert_eq!(found.months, 3);
    }

    #[test]
    fn test_interest_shortens_search() {
        let start = date(2024, 1, 1);
        let flat = target_date_search(start, 0.0, 500.0, 60_000.0, 0.0).unwrap();
        let growing = target_date_search(start, 0.0, 500.0, 60_000.0, 8.0).unwrap();
        assert_eq!(flat.months, 120);
        assert!(growing.months < flat.months);
    }
}
