//! Upper confidence bound bandit policy.
use super::super::ArmCounts;
use super::Policy;
use crate::utils::iter::ArgMaxBy;
use crate::Prng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper confidence bound (UCB1) policy.
///
/// Scores each arm by its empirical success rate plus an exploration bonus
/// `sqrt(2 ln(total_pulls + 0.1) / pulls)`, where `pulls = successes + failures + 0.1`,
/// and takes the arm with the highest score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ucb;

impl Ucb {
    pub const fn new() -> Self {
        Self
    }

    /// Upper confidence bound of each arm.
    pub fn scores(counts: &ArmCounts) -> impl Iterator<Item = f64> + '_ {
        #[allow(clippy::cast_precision_loss)]
        let log_total_pulls = (counts.total_pulls() as f64 + 0.1).ln();
        counts.iter().map(move |(successes, failures)| {
            let pulls = successes + failures + 0.1;
            // ln(0.1) < 0 before the first pull; every arm then scores 0
            let bonus = (2.0 * log_total_pulls / pulls).max(0.0).sqrt();
            successes / pulls + bonus
        })
    }
}

impl fmt::Display for Ucb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UCBAgent")
    }
}

impl Policy for Ucb {
    fn choose(&self, counts: &ArmCounts, _rng: &mut Prng) -> usize {
        Self::scores(counts)
            .argmax_by(f64::total_cmp)
            .expect("empty action space")
    }
}

#[cfg(test)]
mod ucb {
    use super::super::super::testing;
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn learns_deterministic_bandit() {
        testing::train_deterministic_bandit(Ucb, 1000, 0.9, 0);
    }

    #[test]
    fn first_action_is_first_arm() {
        let counts = ArmCounts::new(3);
        let mut rng = Prng::seed_from_u64(0);
        assert_eq!(Ucb.choose(&counts, &mut rng), 0);
        assert!(Ucb::scores(&counts).all(|score| score == 0.0));
    }

    #[test]
    fn prefers_unexplored_arm() {
        let mut counts = ArmCounts::new(3);
        let mut rng = Prng::seed_from_u64(1);
        counts.update(0, 0.0);
        assert_eq!(Ucb.choose(&counts, &mut rng), 1);
        counts.update(1, 0.0);
        assert_eq!(Ucb.choose(&counts, &mut rng), 2);
    }

    #[test]
    fn score_formula() {
        let mut counts = ArmCounts::new(2);
        counts.update(0, 1.0);
        counts.update(0, 0.0);
        counts.update(1, 1.0);
        let scores: Vec<f64> = Ucb::scores(&counts).collect();
        let log_total = 3.1_f64.ln();
        let expected_0 = 1.0 / 2.1 + (2.0 * log_total / 2.1).sqrt();
        let expected_1 = 1.0 / 1.1 + (2.0 * log_total / 1.1).sqrt();
        assert!((scores[0] - expected_0).abs() < 1e-12);
        assert!((scores[1] - expected_1).abs() < 1e-12);
    }

    #[test]
    fn bonus_shrinks_with_pulls() {
        let mut counts = ArmCounts::new(2);
        for _ in 0..10 {
            counts.update(0, 0.0);
            counts.update(1, 0.0);
        }
        counts.update(1, 0.0);
        let scores: Vec<f64> = Ucb::scores(&counts).collect();
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn display() {
        assert_eq!(Ucb::new().to_string(), "UCBAgent");
    }
}
