//! Epsilon-greedy bandit policy
use super::super::{ArmCounts, BuildAgentError};
use super::Policy;
use crate::utils::iter::ArgMaxBy;
use crate::Prng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Explore a uniformly random arm with probability `epsilon`, otherwise exploit.
///
/// Exploitation takes the arm with the highest empirical success rate
/// `successes / (successes + failures + 0.1)`.
/// The offset in the denominator gives unobserved arms a rate of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsilonGreedy {
    /// Probability of taking a uniform random action.
    pub epsilon: f64,
}

impl EpsilonGreedy {
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// # Errors
    /// If `epsilon` is not in `[0, 1]`.
    pub fn validate(&self) -> Result<(), BuildAgentError> {
        if (0.0..=1.0).contains(&self.epsilon) {
            Ok(())
        } else {
            Err(BuildAgentError::InvalidEpsilon(self.epsilon))
        }
    }

    fn greedy_action(counts: &ArmCounts) -> usize {
        counts
            .iter()
            .map(|(successes, failures)| successes / (successes + failures + 0.1))
            .argmax_by(f64::total_cmp)
            .expect("empty action space")
    }
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl fmt::Display for EpsilonGreedy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EpsilonGreedyAgent(epsilon={:?})", self.epsilon)
    }
}

impl Policy for EpsilonGreedy {
    fn choose(&self, counts: &ArmCounts, rng: &mut Prng) -> usize {
        if rng.gen::<f64>() < self.epsilon {
            rng.gen_range(0..counts.num_actions())
        } else {
            Self::greedy_action(counts)
        }
    }
}
