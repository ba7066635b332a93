//! Calendar helpers for goal horizons
//!
//! Month counts here are approximations based on an average month length,
//! not calendar-aware differences.

use chrono::{Months, NaiveDate};

/// Average days per month used for horizon approximation
pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.44;

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Approximate number of months between two dates, rounded up.
///
/// Returns 0 when `end` is on or before `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let millis = (end - start).num_milliseconds() as f64;
    let months = (millis / (MILLIS_PER_DAY * AVERAGE_DAYS_PER_MONTH)).ceil();

    if months <= 0.0 {
        0
    } else {
        months as u32
    }
}

/// Advance a date by whole calendar months.
///
/// Day-of-month is preserved where possible and clamped to the last day of
/// the target month otherwise (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_zero() {
        let d = date(2024, 3, 15);
        assert_eq!(months_between(d, d), 0);
    }

    #[test]
    fn test_one_year_is_about_twelve_months() {
        let d = date(2023, 1, 1);
        let months = months_between(d, d + Duration::days(365));
        assert!((11..=13).contains(&months), "got {}", months);
        assert_eq!(months, 12);
    }

    #[test]
    fn test_partial_month_rounds_up() {
        let d = date(2024, 1, 1);
        assert_eq!(months_between(d, d + Duration::days(1)), 1);
        assert_eq!(months_between(d, d + Duration::days(31)), 2);
    }

    #[test]
    fn test_reversed_dates_clamp_to_zero() {
        assert_eq!(months_between(date(2025, 6, 1), date(2024, 6, 1)), 0);
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(add_months(date(2023, 1, 31), 1), Some(date(2023, 2, 28)));
        assert_eq!(add_months(date(2024, 1, 15), 14), Some(date(2025, 3, 15)));
    }
}
