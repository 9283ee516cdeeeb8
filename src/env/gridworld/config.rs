//! Gridworld configuration
//!
//! Transition probabilities and seeding, with builder methods and
//! validation.

use serde::{Deserialize, Serialize};

use super::{error::GridWorldError, types::Variant};

/// Gridworld configuration parameters
///
/// Defaults reproduce the stochastic puddle world: 10% action noise and a
/// 50% rightward drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridWorldConfig {
    /// Layout variant, selecting the goal
    pub variant: Variant,

    /// Probability that the requested action is replaced by another one
    pub noise_prob: f64,

    /// Probability of an extra step to the right (variants A and B only)
    pub drift_prob: f64,

    /// Seed for the environment's generator, `None` for entropy
    pub seed: Option<u64>,
}

impl Default for GridWorldConfig {
    fn default() -> Self {
        Self { variant: Variant::A, noise_prob: 0.1, drift_prob: 0.5, seed: None }
    }
}

impl GridWorldConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with both noise and drift switched off
    ///
    /// Transitions become deterministic; only the start cell is still drawn
    /// at random.
    pub fn deterministic(variant: Variant) -> Self {
        Self { variant, noise_prob: 0.0, drift_prob: 0.0, seed: None }
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, GridWorldError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> Result<String, GridWorldError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), GridWorldError> {
        check_probability("noise_prob", self.noise_prob)?;
        check_probability("drift_prob", self.drift_prob)?;
        Ok(())
    }

    /// Set layout variant
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set action noise probability
    pub fn noise_prob(mut self, p: f64) -> Self {
        self.noise_prob = p;
        self
    }

    /// Set drift probability
    pub fn drift_prob(mut self, p: f64) -> Self {
        self.drift_prob = p;
        self
    }

    /// Set seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), GridWorldError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GridWorldError::InvalidProbability { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GridWorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.noise_prob, 0.1);
        assert_eq!(config.drift_prob, 0.5);
    }

    #[test]
    fn test_builder() {
        let config = GridWorldConfig::new().variant(Variant::C).noise_prob(0.0).seed(3);

        assert_eq!(config.variant, Variant::C);
        assert_eq!(config.noise_prob, 0.0);
        assert_eq!(config.drift_prob, 0.5);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_rejects_bad_probabilities() {
        let err = GridWorldConfig::new().noise_prob(1.5).validate().unwrap_err();
        assert!(matches!(err, GridWorldError::InvalidProbability { name: "noise_prob", .. }));

        assert!(GridWorldConfig::new().drift_prob(-0.1).validate().is_err());
        assert!(GridWorldConfig::new().drift_prob(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = GridWorldConfig::from_json(r#"{"variant": "B", "seed": 9}"#).unwrap();

        assert_eq!(config.variant, Variant::B);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.noise_prob, 0.1, "missing fields should take defaults");
    }

    #[test]
    fn test_from_json_rejects_unknown_variant() {
        let err = GridWorldConfig::from_json(r#"{"variant": "D"}"#).unwrap_err();
        assert!(matches!(err, GridWorldError::Config(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = GridWorldConfig::deterministic(Variant::C).seed(11);
        let json = config.to_json().unwrap();
        assert_eq!(GridWorldConfig::from_json(&json).unwrap(), config);
    }
}
