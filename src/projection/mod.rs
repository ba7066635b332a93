//! Projection engine for savings balances, goal solvers and target-date search

mod state;
mod engine;
mod series;
mod search;
pub mod solver;

pub use state::ProjectionState;
pub use engine::{
    horizon_from_signed, project, ProjectionConfig, ProjectionEngine, ProjectionInput,
};
pub use series::{ProjectionPoint, ProjectionResult, ProjectionSummary};
pub use search::{search_target_date, target_date_search, TargetDate, DEFAULT_MAX_SEARCH_MONTHS};
pub use solver::{required_periodic_contribution, future_value, monthly_rate};
