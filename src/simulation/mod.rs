//! Simulating bandit agents and measuring their regret
mod regret;
mod scores;
mod simulator;

pub use regret::compute_regret;
pub use scores::RegretScores;
pub use simulator::{RegretSimulator, RegretSimulatorConfig};

use crate::logging::LogError;
use thiserror::Error;

/// Error running a regret simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("the number of steps must be positive")]
    ZeroSteps,
    #[error("the number of trials must be positive")]
    ZeroTrials,
    #[error("agent name {0:?} is not unique")]
    DuplicateAgentName(String),
    #[error(transparent)]
    Log(#[from] LogError),
}
