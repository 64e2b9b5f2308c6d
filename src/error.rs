//! Error type
use crate::agents::BuildAgentError;
use crate::envs::BuildEnvError;
use crate::simulation::SimulationError;
use thiserror::Error;

/// Error from configuring or running a bandit regret comparison.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BanditError {
    #[error("error building agent")]
    BuildAgent(#[from] BuildAgentError),
    #[error("error building environment")]
    BuildEnv(#[from] BuildEnvError),
    #[error("error running simulation")]
    Simulation(#[from] SimulationError),
}
