//! Savings goal data structures and CSV loading

mod data;
pub mod loader;

pub use data::{SavingsGoal, GoalOutlook, GOAL_TOLERANCE};
pub use loader::{
    load_default_goals, load_goals, load_goals_from_reader, load_goals_with_amounts,
    load_goals_with_amounts_from_reader, parse_date,
};
