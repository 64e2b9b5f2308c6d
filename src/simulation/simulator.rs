use super::{compute_regret, RegretScores, SimulationError};
use crate::agents::{AgentPolicy, BuildAgent};
use crate::envs::{BuildEnv, Environment};
use crate::logging::StatsLogger;
use crate::{BanditError, Prng};
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Length of a regret simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegretSimulatorConfig {
    /// Number of sequential steps in each trial.
    pub num_steps: usize,
    /// Number of independent trials to average over.
    pub num_trials: usize,
}

impl RegretSimulatorConfig {
    pub const fn new(num_steps: usize, num_trials: usize) -> Self {
        Self {
            num_steps,
            num_trials,
        }
    }

    /// # Errors
    /// If either count is zero.
    pub const fn validate(&self) -> Result<(), SimulationError> {
        if self.num_steps == 0 {
            Err(SimulationError::ZeroSteps)
        } else if self.num_trials == 0 {
            Err(SimulationError::ZeroTrials)
        } else {
            Ok(())
        }
    }
}

impl Default for RegretSimulatorConfig {
    fn default() -> Self {
        Self::new(5000, 50)
    }
}

/// Compares bandit policies by their expected cumulative regret on an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegretSimulator<EC> {
    /// Environment configuration
    pub env: EC,
    /// One agent per policy, compared in this order.
    pub agents: Vec<AgentPolicy>,
    pub config: RegretSimulatorConfig,
}

impl<EC> RegretSimulator<EC>
where
    EC: BuildEnv,
    EC::Environment: Environment,
{
    pub fn new(env: EC, agents: Vec<AgentPolicy>, config: RegretSimulatorConfig) -> Self {
        Self {
            env,
            agents,
            config,
        }
    }

    /// Build the environment and agents then run the simulation.
    ///
    /// All randomness in the run is derived from `seed`.
    ///
    /// # Errors
    /// If any configuration is invalid or the logger rejects a value.
    /// Configuration is fully checked before the simulation starts.
    pub fn run_simulation(
        &self,
        seed: u64,
        logger: &mut dyn StatsLogger,
    ) -> Result<RegretScores, BanditError> {
        self.config.validate()?;
        let mut agents = self
            .agents
            .iter()
            .map(BuildAgent::build_agent)
            .collect::<Result<Vec<_>, _>>()?;
        let mut rng = Prng::seed_from_u64(seed);
        let mut env = self.env.build_env(&mut rng)?;
        let scores = compute_regret(
            &mut env,
            &mut agents,
            self.config.num_steps,
            self.config.num_trials,
            &mut rng,
            logger,
        )?;
        Ok(scores)
    }
}

#[cfg(test)]
mod regret_simulator {
    use super::*;
    use crate::agents::{BuildAgentError, EpsilonGreedy, ThompsonSampling, Ucb};
    use crate::envs::{BernoulliBanditConfig, BuildEnvError, DriftingBanditConfig};

    fn policies() -> Vec<AgentPolicy> {
        vec![
            EpsilonGreedy::default().into(),
            Ucb.into(),
            ThompsonSampling.into(),
        ]
    }

    #[test]
    fn compares_policies() {
        let simulator = RegretSimulator::new(
            BernoulliBanditConfig::default(),
            policies(),
            RegretSimulatorConfig::new(200, 3),
        );
        let scores = simulator.run_simulation(0, &mut ()).unwrap();
        assert_eq!(scores.len(), 3);
        for (_, curve) in scores.iter() {
            assert_eq!(curve.len(), 200);
        }
    }

    #[test]
    fn same_seed_same_scores() {
        let simulator = RegretSimulator::new(
            DriftingBanditConfig::default(),
            policies(),
            RegretSimulatorConfig::new(100, 2),
        );
        assert_eq!(
            simulator.run_simulation(11, &mut ()).unwrap(),
            simulator.run_simulation(11, &mut ()).unwrap()
        );
        assert_ne!(
            simulator.run_simulation(11, &mut ()).unwrap(),
            simulator.run_simulation(12, &mut ()).unwrap()
        );
    }

    #[test]
    fn rejects_invalid_agent() {
        let simulator = RegretSimulator::new(
            BernoulliBanditConfig::default(),
            vec![EpsilonGreedy::new(-1.0).into()],
            RegretSimulatorConfig::default(),
        );
        assert_eq!(
            simulator.run_simulation(0, &mut ()),
            Err(BanditError::BuildAgent(BuildAgentError::InvalidEpsilon(
                -1.0
            )))
        );
    }

    #[test]
    fn rejects_invalid_env() {
        let simulator = RegretSimulator::new(
            BernoulliBanditConfig::uniform(0),
            policies(),
            RegretSimulatorConfig::default(),
        );
        assert_eq!(
            simulator.run_simulation(0, &mut ()),
            Err(BanditError::BuildEnv(BuildEnvError::NoArms))
        );
    }

    #[test]
    fn rejects_zero_trials() {
        let simulator = RegretSimulator::new(
            BernoulliBanditConfig::default(),
            policies(),
            RegretSimulatorConfig::new(10, 0),
        );
        assert_eq!(
            simulator.run_simulation(0, &mut ()),
            Err(BanditError::Simulation(SimulationError::ZeroTrials))
        );
    }

    #[test]
    fn serde_round_trip() {
        let simulator = RegretSimulator::new(
            DriftingBanditConfig::default(),
            policies(),
            RegretSimulatorConfig::default(),
        );
        let json = serde_json::to_string(&simulator).unwrap();
        let parsed: RegretSimulator<DriftingBanditConfig> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, simulator);
    }
}
