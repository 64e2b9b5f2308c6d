use crate::Prng;
use thiserror::Error;

/// Build an environment instance.
pub trait BuildEnv {
    type Environment;

    /// Build an environment instance.
    ///
    /// # Args
    /// * `rng` - Random number generator used for any randomized initial arm probabilities.
    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError>;
}

/// Error building an environment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildEnvError {
    #[error("a bandit must have at least one arm")]
    NoArms,
    #[error("arm {arm} probability {value} is not in [0, 1]")]
    InvalidProbability { arm: usize, value: f64 },
    #[error("drift rate {0} is not in (0, 1)")]
    InvalidDriftRate(f64),
}
