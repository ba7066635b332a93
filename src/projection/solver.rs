//! Closed-form savings solvers
//!
//! Used to recommend a monthly contribution for a goal and to cross-check the
//! month-by-month simulation.

/// Convert an annual percentage rate (e.g. 6.0 for 6%) to a monthly decimal rate
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Calculate the monthly contribution needed to grow `current_amount` into
/// `target_amount` over `total_months`, using the future value of an annuity
/// solved for payment.
///
/// # Arguments
/// * `current_amount` - Amount already saved
/// * `target_amount` - Goal amount
/// * `annual_rate_pct` - Expected annual return as a percentage
/// * `total_months` - Months remaining until the goal date
///
/// # Returns
/// * `f64` - Required monthly contribution, never negative. With a non-zero
///   rate the result is rounded up to the next whole currency unit so that
///   following it never falls a fraction short.
pub fn required_periodic_contribution(
    current_amount: f64,
    target_amount: f64,
    annual_rate_pct: f64,
    total_months: u32,
) -> f64 {
    let remaining = target_amount - current_amount;

    if total_months == 0 {
        return 0.0;
    }

    if remaining <= 0.0 {
        return 0.0;
    }

    if annual_rate_pct == 0.0 {
        return remaining / total_months as f64;
    }

    let rate = monthly_rate(annual_rate_pct);
    let growth = (1.0 + rate).powf(total_months as f64) - 1.0;
    let required = (remaining * rate / growth).ceil();

    // Rates below -100% a month flip the annuity factor's sign
    required.max(0.0)
}

/// Closed-form value of the projection recurrence after `months` months.
///
/// Month 0 credits one period of interest on the opening balance, and each
/// later month adds the contribution before crediting interest, so:
/// `FV = start * (1+r)^(n+1) + c * (1+r) * ((1+r)^n - 1) / r`
pub fn future_value(
    starting_balance: f64,
    periodic_contribution: f64,
    annual_rate_pct: f64,
    months: u32,
) -> f64 {
    let rate = monthly_rate(annual_rate_pct);
    let n = months as f64;

    if rate.abs() < 1e-15 {
        return starting_balance + periodic_contribution * months as f64;
    }

    let opening = starting_balance * (1.0 + rate).powf(n + 1.0);
    let contributions = periodic_contribution * (1.0 + rate) * ((1.0 + rate).powf(n) - 1.0) / rate;
    opening + contributions
}
