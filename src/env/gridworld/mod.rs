//! Stochastic puddle gridworld
//!
//! A single agent on a fixed 12x12 grid:
//! - Actions: 0 (up), 1 (down), 2 (left), 3 (right)
//! - Noise: with probability 0.1 the action is replaced by one of the others
//! - Drift: on variants A and B, with probability 0.5 the agent is pushed one
//!   extra column to the right
//! - Reward: -1, -2 or -3 inside the three puddles, +10 on reaching the goal
//! - Termination: reaching the goal cell of the chosen variant

pub use config::GridWorldConfig;
pub use environment::GridWorld;
pub use error::GridWorldError;
pub use types::{Action, Position, Variant};

// Submodules
mod config;
mod environment;
mod error;
pub mod layout;
mod types;

/// Create a gridworld from a variant name
pub fn make_gridworld_env(variant: &str) -> Result<GridWorld, GridWorldError> {
    GridWorld::from_variant(variant)
}
