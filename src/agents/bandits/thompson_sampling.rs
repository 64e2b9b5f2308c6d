//! Thompson sampling bandit policy
use super::super::ArmCounts;
use super::Policy;
use crate::utils::iter::ArgMaxBy;
use crate::Prng;
use rand::distributions::Distribution;
use rand_distr::Beta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Thompson sampling for Bernoulli rewards with a uniform Beta prior.
///
/// Draws one sample per arm from `Beta(successes + 1, failures + 1)`
/// and takes the arm with the highest sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThompsonSampling;

impl ThompsonSampling {
    pub const fn new() -> Self {
        Self
    }
}

impl fmt::Display for ThompsonSampling {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ThompsonSamplingAgent")
    }
}

impl Policy for ThompsonSampling {
    fn choose(&self, counts: &ArmCounts, rng: &mut Prng) -> usize {
        counts
            .iter()
            .map(|(successes, failures)| {
                Beta::new(successes + 1.0, failures + 1.0)
                    .expect("posterior parameters are at least 1")
                    .sample(rng)
            })
            .argmax_by(f64::total_cmp)
            .expect("empty action space")
    }
}
