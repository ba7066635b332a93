//! Savings Projector - compound-interest projection engine for savings goals
//!
//! This library provides:
//! - Month-by-month savings projections split into principal and interest
//! - Required monthly contribution solving for a target amount and date
//! - Target-date search for a fixed monthly saving
//! - Savings goal evaluation and what-if scenario comparison

pub mod error;
pub mod calendar;
pub mod projection;
pub mod goals;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use calendar::months_between;
pub use projection::{
    project, required_periodic_contribution, target_date_search, ProjectionConfig,
    ProjectionEngine, ProjectionInput, ProjectionPoint, ProjectionResult, TargetDate,
};
pub use goals::{SavingsGoal, GoalOutlook};
pub use scenario::{ScenarioRunner, WhatIfScenario};
