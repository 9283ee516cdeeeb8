//! # gridworld-rl
//!
//! A stochastic 12x12 puddle gridworld for reinforcement learning.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridworld_rl::prelude::*;
//!
//! let mut env = GridWorld::from_variant("A").unwrap();
//! env.seed(Some(0));
//!
//! let start = env.reset().unwrap();
//! let result = env.step(3).unwrap();
//! assert!(result.observation.in_bounds(12));
//! # let _ = start;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Environment traits and implementations
pub mod env;

/// Utility functions and helpers
pub mod utils;

/// Prelude module for convenient imports
///
/// This module re-exports commonly used types and traits for convenience.
pub mod prelude {
    pub use crate::env::{
        gridworld::{Action, GridWorld, GridWorldConfig, GridWorldError, Position, Variant},
        pool::EnvPool,
        wrappers::EpisodeStats,
        Environment, SpaceInfo, SpaceType, StepInfo, StepResult,
    };
}

/// Current version of gridworld-rl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
