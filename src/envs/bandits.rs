use super::{BuildEnv, BuildEnvError, Environment};
use crate::utils::iter::PartialMax;
use crate::Prng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of the arm success probabilities of a bandit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArmMeans {
    /// Draw each probability uniformly from `[0, 1)`, anew on every reset.
    Uniform { num_arms: usize },
    /// Use exactly these probabilities.
    Fixed(Vec<f64>),
}

impl Default for ArmMeans {
    fn default() -> Self {
        Self::Uniform { num_arms: 5 }
    }
}

impl ArmMeans {
    pub fn num_arms(&self) -> usize {
        match self {
            Self::Uniform { num_arms } => *num_arms,
            Self::Fixed(means) => means.len(),
        }
    }

    /// Check that the means describe a non-empty set of valid probabilities.
    pub fn validate(&self) -> Result<(), BuildEnvError> {
        if self.num_arms() == 0 {
            return Err(BuildEnvError::NoArms);
        }
        if let Self::Fixed(means) = self {
            if let Some((arm, &value)) = means
                .iter()
                .enumerate()
                .find(|(_, p)| !(0.0..=1.0).contains(*p))
            {
                return Err(BuildEnvError::InvalidProbability { arm, value });
            }
        }
        Ok(())
    }

    /// Produce a set of arm probabilities.
    pub fn sample(&self, rng: &mut Prng) -> Vec<f64> {
        match self {
            Self::Uniform { num_arms } => (0..*num_arms).map(|_| rng.gen()).collect(),
            Self::Fixed(means) => means.clone(),
        }
    }
}

/// Configuration for [`BernoulliBandit`]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BernoulliBanditConfig {
    pub means: ArmMeans,
}

impl BernoulliBanditConfig {
    pub const fn new(means: ArmMeans) -> Self {
        Self { means }
    }

    /// Bandit with `num_arms` arms whose probabilities are drawn uniformly at random.
    pub const fn uniform(num_arms: usize) -> Self {
        Self::new(ArmMeans::Uniform { num_arms })
    }

    /// Bandit with the given arm probabilities.
    pub fn fixed<T: Into<Vec<f64>>>(means: T) -> Self {
        Self::new(ArmMeans::Fixed(means.into()))
    }
}

impl BuildEnv for BernoulliBanditConfig {
    type Environment = BernoulliBandit;

    fn build_env(&self, rng: &mut Prng) -> Result<Self::Environment, BuildEnvError> {
        BernoulliBandit::new(self.means.clone(), rng)
    }
}

/// A stationary multi-armed bandit with Bernoulli-distributed arm rewards.
#[derive(Debug, Clone, PartialEq)]
pub struct BernoulliBandit {
    means: ArmMeans,
    probabilities: Vec<f64>,
}

impl BernoulliBandit {
    /// Create a new bandit, drawing the initial arm probabilities from `means`.
    ///
    /// # Errors
    /// If there are no arms or a fixed probability is outside of `[0, 1]`.
    pub fn new(means: ArmMeans, rng: &mut Prng) -> Result<Self, BuildEnvError> {
        means.validate()?;
        let probabilities = means.sample(rng);
        Ok(Self {
            means,
            probabilities,
        })
    }

    /// Create a bandit with fixed arm probabilities.
    ///
    /// # Errors
    /// If `probabilities` is empty or contains a value outside of `[0, 1]`.
    pub fn from_means(probabilities: Vec<f64>) -> Result<Self, BuildEnvError> {
        let means = ArmMeans::Fixed(probabilities.clone());
        means.validate()?;
        Ok(Self {
            means,
            probabilities,
        })
    }

    /// The current success probability of every arm.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Replace the arm probabilities. The arm count must not change.
    pub(super) fn set_probabilities(&mut self, probabilities: Vec<f64>) {
        debug_assert_eq!(probabilities.len(), self.probabilities.len());
        self.probabilities = probabilities;
    }

    fn probability(&self, action: usize) -> f64 {
        match self.probabilities.get(action) {
            Some(p) => *p,
            None => panic!(
                "action {} out of range for a bandit with {} arms",
                action,
                self.probabilities.len()
            ),
        }
    }
}

impl fmt::Display for BernoulliBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BernoulliBandit({:?})", self.probabilities)
    }
}

impl Environment for BernoulliBandit {
    fn num_actions(&self) -> usize {
        self.probabilities.len()
    }

    fn reset(&mut self, rng: &mut Prng) {
        self.probabilities = self.means.sample(rng);
    }

    fn step(&mut self, _rng: &mut Prng) {}

    fn pull(&self, action: usize, rng: &mut Prng) -> f64 {
        if rng.gen_bool(self.probability(action)) {
            1.0
        } else {
            0.0
        }
    }

    fn optimal_reward(&self) -> f64 {
        self.probabilities
            .iter()
            .copied()
            .partial_max()
            .expect("bandit probabilities are non-empty and comparable")
    }

    fn action_value(&self, action: usize) -> f64 {
        self.probability(action)
    }
}
