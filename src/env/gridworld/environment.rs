//! Gridworld environment implementation
//!
//! This module implements the GridWorld struct and the Environment trait.

use anyhow::Result;
use rand::{rngs::StdRng, seq::SliceRandom, Rng};

use super::{
    config::GridWorldConfig,
    error::GridWorldError,
    layout::{penalty_at, GOAL_REWARD, GRID_SIZE, START_POSITIONS},
    types::{Action, Position, Variant},
};
use crate::{
    env::{Environment, SpaceInfo, SpaceType, StepInfo, StepResult},
    utils::seeding,
};

/// Stochastic puddle gridworld
///
/// The agent starts in one of four cells on the left edge and has to reach
/// the goal selected by the variant. Each step the requested action may be
/// swapped for another one, and on variants A and B a wind may push the
/// agent one extra column to the right.
#[derive(Debug, Clone)]
pub struct GridWorld {
    current_position: Position,
    variant: Variant,
    goal_position: Position,
    noise_prob: f64,
    drift_prob: f64,
    /// Set by a goal-reaching step, cleared by reset
    terminated: bool,
    rng: StdRng,
}

impl GridWorld {
    /// Create a gridworld with default transition noise, seeded from entropy
    pub fn new(variant: Variant) -> Self {
        Self::build(GridWorldConfig::new().variant(variant))
    }

    /// Create a gridworld from a variant name (`"A"`, `"B"` or `"C"`)
    pub fn from_variant(name: &str) -> Result<Self, GridWorldError> {
        Ok(Self::new(name.parse()?))
    }

    /// Create a gridworld from a full configuration
    pub fn with_config(config: GridWorldConfig) -> Result<Self, GridWorldError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GridWorldConfig) -> Self {
        let (mut rng, seed) = seeding::np_random(config.seed);
        let current_position = sample_start(&mut rng);
        let goal_position = config.variant.goal();

        tracing::debug!(
            variant = %config.variant,
            goal = %goal_position,
            seed,
            "created gridworld"
        );

        Self {
            current_position,
            variant: config.variant,
            goal_position,
            noise_prob: config.noise_prob,
            drift_prob: config.drift_prob,
            terminated: false,
            rng,
        }
    }

    /// Current agent position
    pub fn position(&self) -> Position {
        self.current_position
    }

    /// Layout variant
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Goal cell
    pub fn goal(&self) -> Position {
        self.goal_position
    }

    /// Whether the last step reached the goal
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Apply action noise: with `noise_prob`, swap in one of the other three
    fn perturb(&mut self, action: Action) -> Action {
        if self.rng.gen_bool(self.noise_prob) {
            *action.others().choose(&mut self.rng).unwrap_or(&action)
        } else {
            action
        }
    }

    /// Candidate cell for `action`, after drift and the boundary check
    fn transition(&mut self, action: Action) -> Position {
        let mut next = self.current_position.offset(action);

        if self.rng.gen_bool(self.drift_prob) && self.variant.has_drift() {
            next.col = (next.col + 1).min(GRID_SIZE);
        }

        if next.in_bounds(GRID_SIZE) {
            next
        } else {
            self.current_position
        }
    }
}

fn sample_start(rng: &mut StdRng) -> Position {
    START_POSITIONS[rng.gen_range(0..START_POSITIONS.len())]
}

impl Environment for GridWorld {
    type Observation = Position;
    type Action = i64;

    fn reset(&mut self) -> Result<Self::Observation> {
        self.current_position = sample_start(&mut self.rng);
        self.terminated = false;
        tracing::debug!(start = %self.current_position, "reset gridworld");
        Ok(self.current_position)
    }

    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>> {
        let requested = Action::try_from(action)?;

        if self.terminated {
            tracing::warn!(
                position = %self.current_position,
                "step called after episode terminated without reset"
            );
        }

        let effective = self.perturb(requested);
        let next = self.transition(effective);
        let mut reward = penalty_at(next);

        tracing::trace!(?requested, ?effective, next = %next, reward, "step");

        if next == self.goal_position {
            // The goal is reported but not committed to the agent position.
            reward += GOAL_REWARD;
            self.terminated = true;
            tracing::debug!(goal = %next, reward, "episode terminated");
            return Ok(StepResult {
                observation: next,
                reward,
                terminated: true,
                info: StepInfo::default(),
            });
        }

        self.current_position = next;
        Ok(StepResult { observation: next, reward, terminated: false, info: StepInfo::default() })
    }

    fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        let (rng, used) = seeding::np_random(seed);
        self.rng = rng;
        vec![used]
    }

    fn observation_space(&self) -> SpaceInfo {
        SpaceInfo {
            shape: vec![GRID_SIZE as usize, GRID_SIZE as usize],
            dtype: SpaceType::Box { low: 1, high: GRID_SIZE },
        }
    }

    fn action_space(&self) -> SpaceInfo {
        SpaceInfo { shape: vec![], dtype: SpaceType::Discrete(Action::ALL.len()) }
    }
}
