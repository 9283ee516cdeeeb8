//! Random-policy rollouts on the puddle gridworld
//!
//! Runs a pool of seeded environments with a uniform random policy and
//! reports per-variant episode statistics.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example random_rollout --release
//! RUST_LOG=debug cargo run --example random_rollout
//! ```

use anyhow::Result;
use gridworld_rl::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const NUM_ENVS: usize = 8;
const TOTAL_STEPS: usize = 20_000;
const BASE_SEED: u64 = 7;

fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    for variant in [Variant::A, Variant::B, Variant::C] {
        let config = GridWorldConfig::new().variant(variant);
        config.validate()?;
        tracing::info!("Variant {} config: {}", variant, config.to_json()?);

        let mut pool = EnvPool::seeded(
            |seed| {
                let env = GridWorld::with_config(config.clone().seed(seed))
                    .expect("config validated above");
                EpisodeStats::new(env)
            },
            NUM_ENVS,
            BASE_SEED,
        );
        let mut policy = StdRng::seed_from_u64(BASE_SEED);
        pool.reset()?;

        for _ in 0..TOTAL_STEPS / NUM_ENVS {
            let actions: Vec<i64> = (0..NUM_ENVS).map(|_| policy.gen_range(0..4)).collect();
            let step = pool.step_structured(&actions)?;

            for (env_id, &done) in step.terminated.iter().enumerate() {
                if done {
                    pool.reset_env(env_id)?;
                }
            }
        }

        let episodes: Vec<_> =
            (0..NUM_ENVS).flat_map(|i| pool.env(i).completed().iter().copied()).collect();
        if episodes.is_empty() {
            tracing::info!("  Variant {}: no episode reached the goal", variant);
            continue;
        }

        let mean_return =
            episodes.iter().map(|e| e.episode_return as f64).sum::<f64>() / episodes.len() as f64;
        let mean_length =
            episodes.iter().map(|e| e.episode_length as f64).sum::<f64>() / episodes.len() as f64;

        tracing::info!("  Variant {} (goal {}):", variant, variant.goal());
        tracing::info!("    Episodes:    {}", episodes.len());
        tracing::info!("    Mean return: {:.2}", mean_return);
        tracing::info!("    Mean length: {:.1}", mean_length);
    }

    Ok(())
}
