//! Environment traits and implementations
//!
//! This module defines the core environment interface and the puddle
//! gridworld built on top of it.

use anyhow::Result;
use serde::Serialize;

/// Core trait for RL environments
pub trait Environment {
    /// Observation type
    type Observation;

    /// Action type
    type Action;

    /// Reset the environment and return initial observation
    fn reset(&mut self) -> Result<Self::Observation>;

    /// Step the environment with an action
    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>>;

    /// Reseed the environment's random source
    ///
    /// Returns the seeds actually used, so a run seeded from entropy can be
    /// replayed later.
    fn seed(&mut self, seed: Option<u64>) -> Vec<u64>;

    /// Get the observation space dimensions
    fn observation_space(&self) -> SpaceInfo;

    /// Get the action space dimensions
    fn action_space(&self) -> SpaceInfo;

    /// Render the current state. No-op unless an environment overrides it.
    fn render(&self) {}
}

/// Result of an environment step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult<O> {
    /// Next observation
    pub observation: O,

    /// Reward received
    pub reward: i32,

    /// Whether the episode terminated
    pub terminated: bool,

    /// Additional info
    pub info: StepInfo,
}

/// Space information for observations and actions
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceInfo {
    /// Shape of the space
    pub shape: Vec<usize>,

    /// Data type
    pub dtype: SpaceType,
}

/// Space data types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpaceType {
    /// Discrete space with n options
    Discrete(usize),

    /// Bounded integer box, inclusive on both ends
    Box {
        /// Lowest admissible value
        low: i32,
        /// Highest admissible value
        high: i32,
    },
}

/// Additional step information
///
/// Always empty; serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepInfo {}

pub mod gridworld;
pub mod pool;
pub mod wrappers;
