//! Multi-armed bandit environments
mod bandits;
mod builder;
mod drifting;

pub use bandits::{ArmMeans, BernoulliBandit, BernoulliBanditConfig};
pub use builder::{BuildEnv, BuildEnvError};
pub use drifting::{DriftingBandit, DriftingBanditConfig};

use crate::Prng;

/// A multi-armed bandit environment.
///
/// Holds the true (possibly time-varying) success probability of each arm.
/// The ground-truth queries [`optimal_reward`](Environment::optimal_reward) and
/// [`action_value`](Environment::action_value) are for regret bookkeeping only;
/// agents only ever observe the rewards returned by [`pull`](Environment::pull).
pub trait Environment {
    /// The number of arms. Fixed for the lifetime of the environment.
    fn num_actions(&self) -> usize;

    /// Prepare the environment for a new trial.
    fn reset(&mut self, rng: &mut Prng);

    /// Advance the environment dynamics by one time step.
    fn step(&mut self, rng: &mut Prng);

    /// Pull an arm and sample its reward: `1.0` with the arm's success probability else `0.0`.
    ///
    /// # Panics
    /// If `action` is not less than [`num_actions`](Environment::num_actions).
    fn pull(&self, action: usize, rng: &mut Prng) -> f64;

    /// The best expected reward available at the current step.
    fn optimal_reward(&self) -> f64;

    /// The current success probability of an arm.
    ///
    /// # Panics
    /// If `action` is not less than [`num_actions`](Environment::num_actions).
    fn action_value(&self, action: usize) -> f64;
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn num_actions(&self) -> usize {
        E::num_actions(self)
    }
    fn reset(&mut self, rng: &mut Prng) {
        E::reset(self, rng)
    }
    fn step(&mut self, rng: &mut Prng) {
        E::step(self, rng)
    }
    fn pull(&self, action: usize, rng: &mut Prng) -> f64 {
        E::pull(self, action, rng)
    }
    fn optimal_reward(&self) -> f64 {
        E::optimal_reward(self)
    }
    fn action_value(&self, action: usize) -> f64 {
        E::action_value(self, action)
    }
}
