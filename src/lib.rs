//! Multi-armed bandit policies compared by cumulative regret.
//!
//! A [`RegretSimulator`] runs several [agents](agents) against a bandit
//! [environment](envs) over many independent trials and reports each agent's expected
//! cumulative regret curve.
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)]
pub mod agents;
pub mod envs;
mod error;
pub mod logging;
pub mod simulation;
pub mod utils;

pub use agents::{Agent, BanditAgent, BuildAgent};
pub use envs::{BuildEnv, Environment};
pub use error::BanditError;
pub use simulation::{compute_regret, RegretScores, RegretSimulator, RegretSimulatorConfig};

/// Pseudo-random number generator used throughout the crate.
pub type Prng = rand_chacha::ChaCha8Rng;
