use ndarray::{Array1, ArrayView1};

/// Per-arm success and failure counts of a Bernoulli bandit agent.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmCounts {
    successes: Array1<f64>,
    failures: Array1<f64>,
    total_pulls: u64,
}

impl ArmCounts {
    /// Zeroed counts for `num_actions` arms.
    pub fn new(num_actions: usize) -> Self {
        Self {
            successes: Array1::zeros(num_actions),
            failures: Array1::zeros(num_actions),
            total_pulls: 0,
        }
    }

    pub fn num_actions(&self) -> usize {
        self.successes.len()
    }

    pub fn successes(&self) -> ArrayView1<f64> {
        self.successes.view()
    }

    pub fn failures(&self) -> ArrayView1<f64> {
        self.failures.view()
    }

    pub const fn total_pulls(&self) -> u64 {
        self.total_pulls
    }

    /// Record the reward observed from pulling `action`.
    ///
    /// A reward of exactly `1.0` counts as a success, anything else as a failure.
    #[allow(clippy::float_cmp)]
    pub fn update(&mut self, action: usize, reward: f64) {
        self.total_pulls += 1;
        if reward == 1.0 {
            self.successes[action] += 1.0;
        } else {
            self.failures[action] += 1.0;
        }
    }

    /// Iterate over `(successes, failures)` for each arm.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.successes
            .iter()
            .zip(&self.failures)
            .map(|(&s, &f)| (s, f))
    }
}
