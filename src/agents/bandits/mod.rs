//! Multi-armed bandit policies.
//!
//! Each policy chooses an arm from the per-arm success and failure counts of an agent.
mod epsilon_greedy;
mod thompson_sampling;
mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use thompson_sampling::ThompsonSampling;
pub use ucb::Ucb;

use super::{ArmCounts, BanditAgent, BuildAgent, BuildAgentError};
use crate::Prng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An arm selection rule.
pub trait Policy {
    /// Choose an arm given the observed success and failure counts.
    ///
    /// # Panics
    /// If `counts` has no arms.
    fn choose(&self, counts: &ArmCounts, rng: &mut Prng) -> usize;
}

/// The bandit policies known to the simulator.
///
/// Serves as the serializable configuration of a [`BanditAgent`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AgentPolicy {
    EpsilonGreedy(EpsilonGreedy),
    Ucb(Ucb),
    ThompsonSampling(ThompsonSampling),
}

impl Default for AgentPolicy {
    fn default() -> Self {
        Self::EpsilonGreedy(EpsilonGreedy::default())
    }
}

impl AgentPolicy {
    /// # Errors
    /// If any hyperparameter is out of range.
    pub fn validate(&self) -> Result<(), BuildAgentError> {
        match self {
            Self::EpsilonGreedy(policy) => policy.validate(),
            Self::Ucb(_) | Self::ThompsonSampling(_) => Ok(()),
        }
    }
}

impl Policy for AgentPolicy {
    fn choose(&self, counts: &ArmCounts, rng: &mut Prng) -> usize {
        match self {
            Self::EpsilonGreedy(policy) => policy.choose(counts, rng),
            Self::Ucb(policy) => policy.choose(counts, rng),
            Self::ThompsonSampling(policy) => policy.choose(counts, rng),
        }
    }
}

impl fmt::Display for AgentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EpsilonGreedy(policy) => fmt::Display::fmt(policy, f),
            Self::Ucb(policy) => fmt::Display::fmt(policy, f),
            Self::ThompsonSampling(policy) => fmt::Display::fmt(policy, f),
        }
    }
}

impl From<EpsilonGreedy> for AgentPolicy {
    fn from(policy: EpsilonGreedy) -> Self {
        Self::EpsilonGreedy(policy)
    }
}

impl From<Ucb> for AgentPolicy {
    fn from(policy: Ucb) -> Self {
        Self::Ucb(policy)
    }
}

impl From<ThompsonSampling> for AgentPolicy {
    fn from(policy: ThompsonSampling) -> Self {
        Self::ThompsonSampling(policy)
    }
}

impl BuildAgent for AgentPolicy {
    type Agent = BanditAgent;

    fn build_agent(&self) -> Result<Self::Agent, BuildAgentError> {
        self.validate()?;
        Ok(BanditAgent::new(*self))
    }
}

macro_rules! impl_build_agent {
    ($($policy:ty),*) => {$(
        impl BuildAgent for $policy {
            type Agent = BanditAgent;

            fn build_agent(&self) -> Result<Self::Agent, BuildAgentError> {
                AgentPolicy::from(*self).build_agent()
            }
        }
    )*};
}
impl_build_agent!(EpsilonGreedy, Ucb, ThompsonSampling);
