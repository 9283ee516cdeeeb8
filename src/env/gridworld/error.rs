use thiserror::Error;

/// Errors raised while configuring or driving a gridworld
#[derive(Error, Debug)]
pub enum GridWorldError {
    /// Variant name outside A, B, C
    #[error("invalid variant {0:?}: expected one of A, B, C")]
    InvalidVariant(String),
    /// Action index outside 0..=3
    #[error("invalid action {0}: expected 0 (up), 1 (down), 2 (left) or 3 (right)")]
    InvalidAction(i64),
    /// Transition probability outside [0, 1]
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability {
        /// Offending config field
        name: &'static str,
        /// Rejected value
        value: f64,
    },
    /// Config JSON failed to parse
    #[error("malformed config: {0}")]
    Config(#[from] serde_json::Error),
}
