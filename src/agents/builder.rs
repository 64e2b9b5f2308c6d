use thiserror::Error;

/// Build an agent instance.
pub trait BuildAgent {
    type Agent;

    /// Build an agent from this configuration.
    ///
    /// The agent holds no belief state until it is initialized for an environment.
    fn build_agent(&self) -> Result<Self::Agent, BuildAgentError>;
}

/// Error building an agent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildAgentError {
    #[error("exploration rate {0} is not in [0, 1]")]
    InvalidEpsilon(f64),
}
