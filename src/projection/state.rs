//! Running balance state for a single projection

/// State of the savings balance at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (0-indexed, month 0 is the opening period)
    pub month: u32,

    /// Opening balance at month 0
    pub starting_balance: f64,

    /// Contribution added at the start of every month after month 0
    pub periodic_contribution: f64,

    /// Running balance including interest
    pub balance: f64,
}

impl ProjectionState {
    /// Initialize state at month 0 before any interest is credited
    pub fn new(starting_balance: f64, periodic_contribution: f64) -> Self {
        Self {
            month: 0,
            starting_balance,
            periodic_contribution,
            balance: starting_balance,
        }
    }

    /// Move to the given month, adding the contribution for months after 0.
    ///
    /// The contribution lands at the start of the period and earns that
    /// period's interest.
    pub fn advance_month(&mut self, month: u32) {
        self.month = month;
        if month > 0 {
            self.balance += self.periodic_contribution;
        }
    }

    /// Credit one month of interest on the current balance
    pub fn accrue_interest(&mut self, monthly_rate: f64) {
        let monthly_interest = self.balance * monthly_rate;
        self.balance += monthly_interest;
    }

    /// Cumulative amount paid in (opening balance plus contributions so far)
    pub fn principal(&self) -> f64 {
        self.starting_balance + self.periodic_contribution * self.month as f64
    }

    /// Growth attributable to interest
    pub fn interest(&self) -> f64 {
        self.balance - self.principal()
    }
}
