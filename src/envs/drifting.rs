//! Non-stationary bandit with randomly wandering arm probabilities.
use super::{ArmMeans, BernoulliBandit, BuildEnv, BuildEnvError, Environment};
use crate::Prng;
use ndarray::{Array1, ArrayView1};
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Beta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for [`DriftingBandit`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftingBanditConfig {
    pub means: ArmMeans,
    /// Exponential smoothing rate of the pseudo-counts, in `(0, 1)`.
    ///
    /// Small values give slow drift.
    pub drift_rate: f64,
}

impl DriftingBanditConfig {
    pub const fn new(means: ArmMeans, drift_rate: f64) -> Self {
        Self { means, drift_rate }
    }
}

impl Default for DriftingBanditConfig {
    fn default() -> Self {
        Self::new(ArmMeans::default(), 0.01)
    }
}

impl BuildEnv for DriftingBanditConfig {
    type Environment = DriftingBandit;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        DriftingBandit::new(self.means.clone(), self.drift_rate, rng)
    }
}

/// A Bernoulli bandit whose arm probabilities drift over time.
///
/// Each step pulls a random arm and folds the outcome into per-arm pseudo-success and
/// pseudo-failure counts that decay towards one. The exposed arm probabilities are then
/// re-drawn from `Beta(pseudo_successes, pseudo_failures)` for every arm.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftingBandit {
    bandit: BernoulliBandit,
    drift_rate: f64,
    pseudo_successes: Array1<f64>,
    pseudo_failures: Array1<f64>,
    num_steps: u64,
}

impl DriftingBandit {
    /// # Errors
    /// If there are no arms, a fixed probability is outside of `[0, 1]`,
    /// or `drift_rate` is outside of `(0, 1)`.
    pub fn new(means: ArmMeans, drift_rate: f64, rng: &mut Prng) -> Result<Self, BuildEnvError> {
        if !(drift_rate > 0.0 && drift_rate < 1.0) {
            return Err(BuildEnvError::InvalidDriftRate(drift_rate));
        }
        let bandit = BernoulliBandit::new(means, rng)?;
        let num_arms = bandit.num_actions();
        Ok(Self {
            bandit,
            drift_rate,
            pseudo_successes: Array1::ones(num_arms),
            pseudo_failures: Array1::ones(num_arms),
            num_steps: 0,
        })
    }

    pub const fn drift_rate(&self) -> f64 {
        self.drift_rate
    }

    /// Number of drift steps taken since the last reset.
    pub const fn num_steps(&self) -> u64 {
        self.num_steps
    }

    pub fn pseudo_successes(&self) -> ArrayView1<f64> {
        self.pseudo_successes.view()
    }

    pub fn pseudo_failures(&self) -> ArrayView1<f64> {
        self.pseudo_failures.view()
    }

    /// The current success probability of every arm.
    pub fn probabilities(&self) -> &[f64] {
        self.bandit.probabilities()
    }

    /// Fold an observed pull outcome into the pseudo-counts and re-draw the arm probabilities.
    fn drift(&mut self, action: usize, reward: f64, rng: &mut Prng) {
        let rate = self.drift_rate;
        let decay = 1.0 - rate;
        self.pseudo_successes.mapv_inplace(|x| x * decay + rate);
        self.pseudo_failures.mapv_inplace(|x| x * decay + rate);
        self.num_steps += 1;

        self.pseudo_successes[action] += reward;
        self.pseudo_failures[action] += 1.0 - reward;

        let probabilities = self
            .pseudo_successes
            .iter()
            .zip(&self.pseudo_failures)
            .map(|(&alpha, &beta)| {
                // Smoothing towards 1 from a prior of 1 keeps every pseudo-count >= 1
                Beta::new(alpha, beta)
                    .expect("pseudo-counts are positive")
                    .sample(rng)
            })
            .collect();
        self.bandit.set_probabilities(probabilities);
    }
}

impl fmt::Display for DriftingBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DriftingBandit({:?}, drift_rate={})",
            self.bandit.probabilities(),
            self.drift_rate
        )
    }
}

impl Environment for DriftingBandit {
    fn num_actions(&self) -> usize {
        self.bandit.num_actions()
    }

    fn reset(&mut self, rng: &mut Prng) {
        self.bandit.reset(rng);
        self.pseudo_successes.fill(1.0);
        self.pseudo_failures.fill(1.0);
        self.num_steps = 0;
    }

    fn step(&mut self, rng: &mut Prng) {
        let action = rng.gen_range(0..self.num_actions());
        let reward = self.bandit.pull(action, rng);
        self.drift(action, reward, rng);
    }

    fn pull(&self, action: usize, rng: &mut Prng) -> f64 {
        self.bandit.pull(action, rng)
    }

    fn optimal_reward(&self) -> f64 {
        self.bandit.optimal_reward()
    }

    fn action_value(&self, action: usize) -> f64 {
        self.bandit.action_value(action)
    }
}
