//! Vectorized environment pool for parallel execution
//!
//! Each environment in the pool is an independent instance with its own
//! random source, so stepping them on separate threads needs no locking.
//! Execution is spread over Rayon's thread pool.
//!
//! # Example
//!
//! ```rust
//! use gridworld_rl::env::{
//!     gridworld::{GridWorld, GridWorldConfig},
//!     pool::EnvPool,
//! };
//!
//! // Four reproducible environments seeded 100, 101, 102, 103
//! let mut pool = EnvPool::seeded(
//!     |seed| GridWorld::with_config(GridWorldConfig::new().seed(seed)).unwrap(),
//!     4,
//!     100,
//! );
//!
//! let observations = pool.reset().unwrap();
//! let results = pool.step(&[0, 1, 2, 3]).unwrap();
//! assert_eq!(results.len(), observations.len());
//! ```

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    env::{Environment, SpaceInfo, StepResult},
    utils::seeding::derive_seed,
};

/// A pool of environments for parallel execution
pub struct EnvPool<E: Environment> {
    /// Vector of environment instances
    envs: Vec<E>,

    /// Number of environments
    num_envs: usize,
}

impl<E> EnvPool<E>
where
    E: Environment + Send,
    E::Observation: Send,
    E::Action: Copy + Sync,
{
    /// Create a new environment pool
    ///
    /// # Arguments
    ///
    /// * `env_fn` - Factory function to create environment instances
    /// * `num_envs` - Number of parallel environments
    pub fn new<F>(env_fn: F, num_envs: usize) -> Self
    where
        F: Fn() -> E,
    {
        let envs = (0..num_envs).map(|_| env_fn()).collect();
        Self { envs, num_envs }
    }

    /// Create a pool whose `i`-th environment is built from seed `base_seed + i`
    pub fn seeded<F>(env_fn: F, num_envs: usize, base_seed: u64) -> Self
    where
        F: Fn(u64) -> E,
    {
        let envs = (0..num_envs).map(|i| env_fn(derive_seed(base_seed, i))).collect();
        tracing::debug!(num_envs, base_seed, "created seeded env pool");
        Self { envs, num_envs }
    }

    /// Reset all environments in parallel
    ///
    /// Returns a vector of initial observations, one per environment.
    pub fn reset(&mut self) -> Result<Vec<E::Observation>> {
        self.envs.par_iter_mut().map(|env| env.reset()).collect()
    }

    /// Step all environments in parallel with given actions
    ///
    /// # Panics
    ///
    /// Panics if the number of actions doesn't match the number of
    /// environments.
    pub fn step(&mut self, actions: &[E::Action]) -> Result<Vec<StepResult<E::Observation>>> {
        assert_eq!(
            actions.len(),
            self.num_envs,
            "Number of actions must match number of environments"
        );

        self.envs
            .par_iter_mut()
            .zip(actions.par_iter())
            .map(|(env, &action)| env.step(action))
            .collect()
    }

    /// Get the number of environments in the pool
    pub fn num_envs(&self) -> usize {
        self.num_envs
    }

    /// Get observation space information from first environment
    pub fn observation_space(&self) -> SpaceInfo {
        self.envs[0].observation_space()
    }

    /// Get action space information from first environment
    pub fn action_space(&self) -> SpaceInfo {
        self.envs[0].action_space()
    }

    /// Reset a specific environment by index
    pub fn reset_env(&mut self, env_id: usize) -> Result<E::Observation> {
        self.envs[env_id].reset()
    }

    /// Borrow a specific environment
    pub fn env(&self, env_id: usize) -> &E {
        &self.envs[env_id]
    }
}

/// Result of stepping an environment pool
///
/// Contains observations, rewards, and done flags for all environments.
#[derive(Debug, Clone)]
pub struct PoolStepResult<O> {
    /// Observations for each environment
    pub observations: Vec<O>,

    /// Rewards for each environment
    pub rewards: Vec<i32>,

    /// Termination flags for each environment
    pub terminated: Vec<bool>,
}

impl<E> EnvPool<E>
where
    E: Environment + Send,
    E::Observation: Send,
    E::Action: Copy + Sync,
{
    /// Step all environments and return structured result
    ///
    /// Unpacks individual StepResults into parallel vectors.
    pub fn step_structured(
        &mut self,
        actions: &[E::Action],
    ) -> Result<PoolStepResult<E::Observation>> {
        let results = self.step(actions)?;

        let mut observations = Vec::with_capacity(self.num_envs);
        let mut rewards = Vec::with_capacity(self.num_envs);
        let mut terminated = Vec::with_capacity(self.num_envs);

        for result in results {
            observations.push(result.observation);
            rewards.push(result.reward);
            terminated.push(result.terminated);
        }

        Ok(PoolStepResult { observations, rewards, terminated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::gridworld::{layout::START_POSITIONS, GridWorld, GridWorldConfig, Variant};

    fn make_pool(n: usize) -> EnvPool<GridWorld> {
        EnvPool::seeded(
            |seed| GridWorld::with_config(GridWorldConfig::new().seed(seed)).unwrap(),
            n,
            1234,
        )
    }

    #[test]
    fn test_pool_creation() {
        let pool = EnvPool::new(|| GridWorld::new(Variant::A), 4);
        assert_eq!(pool.num_envs(), 4);
    }

    #[test]
    fn test_pool_reset() {
        let mut pool = make_pool(4);
        let observations = pool.reset().unwrap();

        assert_eq!(observations.len(), 4);
        for obs in observations {
            assert!(START_POSITIONS.contains(&obs));
        }
    }

    #[test]
    fn test_pool_step() {
        let mut pool = make_pool(4);
        pool.reset().unwrap();

        let results = pool.step(&[0, 1, 2, 3]).unwrap();

        assert_eq!(results.len(), 4);
        for result in results {
            assert!(result.observation.in_bounds(12));
            assert!((-3..=10).contains(&result.reward));
        }
    }

    #[test]
    fn test_pool_step_structured() {
        let mut pool = make_pool(4);
        pool.reset().unwrap();

        let result = pool.step_structured(&[3, 3, 3, 3]).unwrap();

        assert_eq!(result.observations.len(), 4);
        assert_eq!(result.rewards.len(), 4);
        assert_eq!(result.terminated.len(), 4);
    }

    #[test]
    #[should_panic(expected = "Number of actions must match number of environments")]
    fn test_pool_step_wrong_action_count() {
        let mut pool = make_pool(4);
        pool.reset().unwrap();

        let _ = pool.step(&[0, 1]);
    }

    #[test]
    fn test_pool_invalid_action_errors() {
        let mut pool = make_pool(2);
        pool.reset().unwrap();

        assert!(pool.step(&[0, 9]).is_err());
    }

    #[test]
    fn test_pool_seeded_is_reproducible() {
        let mut a = make_pool(8);
        let mut b = make_pool(8);

        assert_eq!(a.reset().unwrap(), b.reset().unwrap());
        for i in 0..20 {
            let actions: Vec<i64> = (0..8).map(|j| ((i + j) % 4) as i64).collect();
            assert_eq!(a.step(&actions).unwrap(), b.step(&actions).unwrap());
        }
    }

    #[test]
    fn test_pool_spaces() {
        let pool = make_pool(2);
        assert_eq!(pool.observation_space().shape, vec![12, 12]);
        assert_eq!(pool.action_space().shape, Vec::<usize>::new());
    }

    #[test]
    fn test_pool_reset_env() {
        let mut pool = make_pool(3);
        pool.reset().unwrap();

        let obs = pool.reset_env(1).unwrap();
        assert_eq!(pool.env(1).position(), obs);
    }
}
