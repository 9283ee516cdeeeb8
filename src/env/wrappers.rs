//! Environment wrappers
//!
//! Wrappers own an inner environment and forward the `Environment` trait to
//! it, adding bookkeeping on the way through.

use anyhow::Result;

use super::{Environment, SpaceInfo, StepResult};

/// Return and length of one finished episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRecord {
    /// Sum of rewards over the episode
    pub episode_return: i64,

    /// Number of steps taken
    pub episode_length: usize,
}

/// Records return and length of every completed episode
#[derive(Debug, Clone)]
pub struct EpisodeStats<E> {
    env: E,
    episode_return: i64,
    episode_length: usize,
    completed: Vec<EpisodeRecord>,
}

impl<E: Environment> EpisodeStats<E> {
    /// Wrap an environment
    pub fn new(env: E) -> Self {
        Self { env, episode_return: 0, episode_length: 0, completed: Vec::new() }
    }

    /// Episodes finished so far, oldest first
    pub fn completed(&self) -> &[EpisodeRecord] {
        &self.completed
    }

    /// Mean return over completed episodes, `None` before the first one ends
    pub fn mean_return(&self) -> Option<f64> {
        if self.completed.is_empty() {
            return None;
        }
        let total: i64 = self.completed.iter().map(|r| r.episode_return).sum();
        Some(total as f64 / self.completed.len() as f64)
    }

    /// Return accumulated in the running episode
    pub fn running_return(&self) -> i64 {
        self.episode_return
    }

    /// Steps taken in the running episode
    pub fn running_length(&self) -> usize {
        self.episode_length
    }

    /// Borrow the wrapped environment
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Unwrap the environment
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E: Environment> Environment for EpisodeStats<E> {
    type Observation = E::Observation;
    type Action = E::Action;

    fn reset(&mut self) -> Result<Self::Observation> {
        self.episode_return = 0;
        self.episode_length = 0;
        self.env.reset()
    }

    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>> {
        let result = self.env.step(action)?;
        self.episode_return += i64::from(result.reward);
        self.episode_length += 1;

        if result.terminated {
            let record = EpisodeRecord {
                episode_return: self.episode_return,
                episode_length: self.episode_length,
            };
            tracing::debug!(
                episode = self.completed.len(),
                episode_return = record.episode_return,
                episode_length = record.episode_length,
                "episode finished"
            );
            self.completed.push(record);
            self.episode_return = 0;
            self.episode_length = 0;
        }

        Ok(result)
    }

    fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        self.env.seed(seed)
    }

    fn observation_space(&self) -> SpaceInfo {
        self.env.observation_space()
    }

    fn action_space(&self) -> SpaceInfo {
        self.env.action_space()
    }

    fn render(&self) {
        self.env.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::gridworld::{layout::GOAL_REWARD, GridWorld, GridWorldConfig, Position, Variant};

    /// Drive a deterministic variant-A world from its start to the goal
    fn run_to_goal(env: &mut EpisodeStats<GridWorld>) -> usize {
        let start = env.reset().unwrap();
        let Position { row, col } = start;
        let mut steps = 0;

        for _ in 1..row {
            env.step(0).unwrap();
            steps += 1;
        }
        for _ in col..12 {
            env.step(3).unwrap();
            steps += 1;
        }
        steps
    }

    #[test]
    fn test_records_completed_episode() {
        let config = GridWorldConfig::deterministic(Variant::A).seed(4);
        let mut env = EpisodeStats::new(GridWorld::with_config(config).unwrap());

        assert_eq!(env.mean_return(), None);
        let steps = run_to_goal(&mut env);

        assert_eq!(env.completed().len(), 1);
        let record = env.completed()[0];
        assert_eq!(record.episode_length, steps);
        assert_eq!(record.episode_return, GOAL_REWARD as i64);
        assert_eq!(env.mean_return(), Some(GOAL_REWARD as f64));
        assert_eq!(env.running_length(), 0);
    }

    #[test]
    fn test_reset_clears_running_counters() {
        let config = GridWorldConfig::deterministic(Variant::A).seed(4);
        let mut env = EpisodeStats::new(GridWorld::with_config(config).unwrap());

        env.reset().unwrap();
        env.step(1).unwrap();
        env.step(1).unwrap();
        assert_eq!(env.running_length(), 2);

        env.reset().unwrap();
        assert_eq!(env.running_length(), 0);
        assert_eq!(env.running_return(), 0);
        assert!(env.completed().is_empty());
    }

    #[test]
    fn test_forwards_seed_and_spaces() {
        let mut env = EpisodeStats::new(GridWorld::new(Variant::B));
        assert_eq!(env.seed(Some(8)), vec![8]);
        assert_eq!(env.action_space(), env.inner().action_space());
        assert_eq!(env.into_inner().variant(), Variant::B);
    }
}
