//! Bandit agents
pub mod bandits;
mod builder;
mod counts;
#[cfg(test)]
pub mod testing;

pub use bandits::{AgentPolicy, EpsilonGreedy, Policy, ThompsonSampling, Ucb};
pub use builder::{BuildAgent, BuildAgentError};
pub use counts::ArmCounts;

use crate::Prng;
use std::fmt;

/// A learning bandit agent.
///
/// The [`Display`](fmt::Display) representation is the agent name.
pub trait Agent: fmt::Display {
    /// Reset the belief state for an environment with `num_actions` arms.
    ///
    /// Must be called before the first call to [`Agent::act`] and at the start of each trial.
    fn init_actions(&mut self, num_actions: usize);

    /// Choose an arm.
    ///
    /// # Panics
    /// If called before [`Agent::init_actions`].
    fn act(&mut self, rng: &mut Prng) -> usize;

    /// Update the belief state from the reward observed for `action`.
    fn update(&mut self, action: usize, reward: f64);

    /// Name identifying this agent in a comparison.
    fn name(&self) -> String {
        self.to_string()
    }
}

impl<T: Agent + ?Sized> Agent for Box<T> {
    fn init_actions(&mut self, num_actions: usize) {
        T::init_actions(self, num_actions)
    }
    fn act(&mut self, rng: &mut Prng) -> usize {
        T::act(self, rng)
    }
    fn update(&mut self, action: usize, reward: f64) {
        T::update(self, action, reward)
    }
    fn name(&self) -> String {
        T::name(self)
    }
}

/// An agent combining per-arm success / failure counts with a bandit policy.
#[derive(Debug, Clone, PartialEq)]
pub struct BanditAgent {
    policy: AgentPolicy,
    counts: Option<ArmCounts>,
}

impl BanditAgent {
    /// Create an agent without any belief state.
    ///
    /// Prefer [`BuildAgent::build_agent`], which validates the policy.
    pub const fn new(policy: AgentPolicy) -> Self {
        Self {
            policy,
            counts: None,
        }
    }

    pub const fn policy(&self) -> &AgentPolicy {
        &self.policy
    }

    /// The current belief state; `None` until [`Agent::init_actions`] is called.
    pub fn counts(&self) -> Option<&ArmCounts> {
        self.counts.as_ref()
    }

    fn initialized_counts(&mut self) -> &mut ArmCounts {
        self.counts
            .as_mut()
            .expect("init_actions must be called before using the agent")
    }
}

impl fmt::Display for BanditAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.policy, f)
    }
}

impl Agent for BanditAgent {
    fn init_actions(&mut self, num_actions: usize) {
        self.counts = Some(ArmCounts::new(num_actions));
    }

    fn act(&mut self, rng: &mut Prng) -> usize {
        let policy = self.policy;
        policy.choose(self.initialized_counts(), rng)
    }

    fn update(&mut self, action: usize, reward: f64) {
        self.initialized_counts().update(action, reward)
    }
}
