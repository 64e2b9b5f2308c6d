//! Cumulative regret of bandit agents
use super::{RegretScores, SimulationError};
use crate::agents::Agent;
use crate::envs::Environment;
use crate::logging::{Event, StatsLogger};
use crate::Prng;
use ndarray::{Array2, Axis};
use std::collections::HashSet;

/// Compute the expected cumulative regret of each agent on an environment.
///
/// Runs `num_trials` independent trials of `num_steps` steps each.
/// Every trial resets the environment and re-initializes every agent.
/// On each step, every agent (in order) acts against the same environment state and
/// accumulates the regret `optimal_reward - action_value(action)`;
/// the environment then advances by one step.
///
/// # Returns
/// The per-step cumulative regret of each agent, averaged over trials,
/// keyed by agent name in the order the agents were given.
///
/// # Errors
/// If `num_steps` or `num_trials` is zero, two agents share a name,
/// or the logger rejects a value.
pub fn compute_regret<E, A, L>(
    env: &mut E,
    agents: &mut [A],
    num_steps: usize,
    num_trials: usize,
    rng: &mut Prng,
    logger: &mut L,
) -> Result<RegretScores, SimulationError>
where
    E: Environment + ?Sized,
    A: Agent,
    L: StatsLogger + ?Sized,
{
    if num_steps == 0 {
        return Err(SimulationError::ZeroSteps);
    }
    if num_trials == 0 {
        return Err(SimulationError::ZeroTrials);
    }
    let names: Vec<String> = agents.iter().map(Agent::name).collect();
    let mut seen = HashSet::new();
    if let Some(name) = names.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(SimulationError::DuplicateAgentName(name.clone()));
    }

    // Regret of each agent (rows) at each step (columns), summed over trials
    let mut regret = Array2::<f64>::zeros((agents.len(), num_steps));
    let mut trial_regret = vec![0.0; agents.len()];

    for _ in 0..num_trials {
        env.reset(rng);
        let num_actions = env.num_actions();
        for agent in agents.iter_mut() {
            agent.init_actions(num_actions);
        }
        trial_regret.fill(0.0);

        for step in 0..num_steps {
            let optimal_reward = env.optimal_reward();
            for (i, agent) in agents.iter_mut().enumerate() {
                let action = agent.act(rng);
                let reward = env.pull(action, rng);
                agent.update(action, reward);

                let step_regret = optimal_reward - env.action_value(action);
                regret[[i, step]] += step_regret;
                trial_regret[i] += step_regret;
            }
            // No-op for stationary bandits
            env.step(rng);
        }

        for (name, &value) in names.iter().zip(&trial_regret) {
            logger.log(Event::Trial, name, value.into())?;
        }
        logger.done(Event::Trial);
    }

    regret.accumulate_axis_inplace(Axis(1), |&prev, curr| *curr += prev);
    #[allow(clippy::cast_precision_loss)]
    let num_trials = num_trials as f64;
    regret /= num_trials;

    let mut scores = RegretScores::new();
    for (name, curve) in names.into_iter().zip(regret.outer_iter()) {
        let final_regret = curve[num_steps - 1];
        logger.log(Event::Run, &name, final_regret.into())?;
        scores.push(name, curve.to_vec());
    }
    logger.done(Event::Run);
    Ok(scores)
}

#[cfg(test)]
mod compute_regret {
    use super::*;
    use crate::agents::{
        AgentPolicy, BanditAgent, BuildAgent, EpsilonGreedy, ThompsonSampling, Ucb,
    };
    use crate::envs::{ArmMeans, BernoulliBandit, BuildEnv, DriftingBanditConfig};
    use crate::logging::DisplayLogger;
    use rand::SeedableRng;
    use rstest::rstest;
    use std::time::Duration;

    fn all_agents() -> Vec<BanditAgent> {
        [
            AgentPolicy::from(EpsilonGreedy::default()),
            AgentPolicy::from(Ucb),
            AgentPolicy::from(ThompsonSampling),
        ]
        .iter()
        .map(|policy| policy.build_agent().unwrap())
        .collect()
    }

    #[test]
    fn curve_per_agent_in_order() {
        let mut env = BernoulliBandit::from_means(vec![0.3, 0.6, 0.4]).unwrap();
        let mut agents = all_agents();
        let mut rng = Prng::seed_from_u64(0);
        let scores = compute_regret(&mut env, &mut agents, 300, 2, &mut rng, &mut ()).unwrap();

        assert_eq!(
            scores.names().collect::<Vec<_>>(),
            vec![
                "EpsilonGreedyAgent(epsilon=0.05)",
                "UCBAgent",
                "ThompsonSamplingAgent"
            ]
        );
        for (_, curve) in scores.iter() {
            assert_eq!(curve.len(), 300);
        }
    }

    #[rstest]
    #[case(BernoulliBandit::from_means(vec![0.2, 0.8]).unwrap())]
    #[case(BernoulliBandit::from_means(vec![0.5, 0.5, 0.5]).unwrap())]
    fn cumulative_regret_is_non_decreasing(#[case] env: BernoulliBandit) {
        let mut env = env;
        let mut agents = all_agents();
        let mut rng = Prng::seed_from_u64(1);
        let scores = compute_regret(&mut env, &mut agents, 500, 3, &mut rng, &mut ()).unwrap();
        for (name, curve) in scores.iter() {
            assert!(curve[0] >= 0.0, "{}", name);
            assert!(
                curve.windows(2).all(|w| w[1] >= w[0]),
                "{} regret decreases",
                name
            );
        }
    }

    #[test]
    fn ucb_regret_is_sublinear() {
        let mut env = BernoulliBandit::from_means(vec![0.2, 0.8]).unwrap();
        let mut agents = vec![Ucb.build_agent().unwrap()];
        let mut rng = Prng::seed_from_u64(2);
        let scores = compute_regret(&mut env, &mut agents, 1000, 1, &mut rng, &mut ()).unwrap();
        let curve = scores.get("UCBAgent").unwrap();

        let final_regret = curve[999];
        assert!(final_regret.is_finite());
        assert!(final_regret >= 0.0);
        // Always pulling the worse arm would give 600
        assert!(final_regret < 100.0, "{}", final_regret);

        let first_half_rate = curve[499] / 500.0;
        let second_half_rate = (curve[999] - curve[499]) / 500.0;
        assert!(second_half_rate < first_half_rate);
        assert!(second_half_rate < 0.05, "{}", second_half_rate);
    }

    #[test]
    fn optimal_arm_has_zero_regret() {
        let mut env = BernoulliBandit::from_means(vec![0.9]).unwrap();
        let mut agents = all_agents();
        let mut rng = Prng::seed_from_u64(3);
        let scores = compute_regret(&mut env, &mut agents, 50, 2, &mut rng, &mut ()).unwrap();
        for (_, curve) in scores.iter() {
            assert!(curve.iter().all(|&r| r == 0.0));
        }
    }

    #[test]
    fn reproducible_given_seed() {
        let run = || {
            let mut rng = Prng::seed_from_u64(4);
            let mut env = DriftingBanditConfig::new(ArmMeans::Uniform { num_arms: 4 }, 0.05)
                .build_env(&mut rng)
                .unwrap();
            let mut agents = all_agents();
            compute_regret(&mut env, &mut agents, 200, 3, &mut rng, &mut ()).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn drifting_environment_regret_is_finite() {
        let mut rng = Prng::seed_from_u64(5);
        let mut env = DriftingBanditConfig::default().build_env(&mut rng).unwrap();
        let mut agents = all_agents();
        let scores = compute_regret(&mut env, &mut agents, 400, 2, &mut rng, &mut ()).unwrap();
        for (_, curve) in scores.iter() {
            assert_eq!(curve.len(), 400);
            assert!(curve.iter().all(|r| r.is_finite() && *r >= 0.0));
        }
    }

    /// Counts resets and steps of the wrapped environment.
    struct CountSteps<E> {
        env: E,
        resets: usize,
        steps: usize,
    }

    impl<E: Environment> Environment for CountSteps<E> {
        fn num_actions(&self) -> usize {
            self.env.num_actions()
        }
        fn reset(&mut self, rng: &mut Prng) {
            self.resets += 1;
            self.env.reset(rng)
        }
        fn step(&mut self, rng: &mut Prng) {
            self.steps += 1;
            self.env.step(rng)
        }
        fn pull(&self, action: usize, rng: &mut Prng) -> f64 {
            self.env.pull(action, rng)
        }
        fn optimal_reward(&self) -> f64 {
            self.env.optimal_reward()
        }
        fn action_value(&self, action: usize) -> f64 {
            self.env.action_value(action)
        }
    }

    #[test]
    fn environment_steps_once_per_step() {
        let means = vec![0.2, 0.8];
        let mut rng = Prng::seed_from_u64(10);
        let drifting = DriftingBanditConfig::new(ArmMeans::Fixed(means.clone()), 0.05)
            .build_env(&mut rng)
            .unwrap();
        let mut env = CountSteps {
            env: drifting,
            resets: 0,
            steps: 0,
        };
        let mut agents = all_agents();
        compute_regret(&mut env, &mut agents, 30, 3, &mut rng, &mut ()).unwrap();

        assert_eq!(env.resets, 3);
        // One step per simulation step, shared by all agents
        assert_eq!(env.steps, 90);
        assert_eq!(env.env.num_steps(), 30);
        assert_ne!(env.env.probabilities(), means.as_slice());
    }

    #[test]
    fn logs_each_trial() {
        let mut env = BernoulliBandit::from_means(vec![0.2, 0.8]).unwrap();
        let mut agents = all_agents();
        let mut rng = Prng::seed_from_u64(6);
        let mut logger = DisplayLogger::new(Duration::from_secs(3600));
        let scores = compute_regret(&mut env, &mut agents, 100, 4, &mut rng, &mut logger).unwrap();

        assert_eq!(logger.event_count(Event::Trial), 4);
        assert_eq!(logger.event_count(Event::Run), 1);
        for (name, final_regret) in scores.final_regrets() {
            let trials = logger.summary(Event::Trial, name).unwrap();
            assert_eq!(trials.count(), 4);
            // The final expected regret is the mean over trials of the per-trial totals
            assert!((trials.mean().unwrap() - final_regret).abs() < 1e-9);
            let run = logger.summary(Event::Run, name).unwrap();
            assert_eq!(run.mean(), Some(final_regret));
        }
    }

    #[rstest]
    #[case(0, 1, SimulationError::ZeroSteps)]
    #[case(1, 0, SimulationError::ZeroTrials)]
    fn invalid_run_length(
        #[case] num_steps: usize,
        #[case] num_trials: usize,
        #[case] expected: SimulationError,
    ) {
        let mut env = BernoulliBandit::from_means(vec![0.5]).unwrap();
        let mut agents = all_agents();
        let mut rng = Prng::seed_from_u64(7);
        let result = compute_regret(&mut env, &mut agents, num_steps, num_trials, &mut rng, &mut ());
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn duplicate_agent_names() {
        let mut env = BernoulliBandit::from_means(vec![0.5, 0.1]).unwrap();
        let mut agents = vec![Ucb.build_agent().unwrap(), Ucb.build_agent().unwrap()];
        let mut rng = Prng::seed_from_u64(8);
        let result = compute_regret(&mut env, &mut agents, 10, 1, &mut rng, &mut ());
        assert_eq!(
            result,
            Err(SimulationError::DuplicateAgentName("UCBAgent".into()))
        );
        // Nothing was run
        assert!(agents[0].counts().is_none());
    }

    #[test]
    fn boxed_agents() {
        let mut env = BernoulliBandit::from_means(vec![0.1, 0.9]).unwrap();
        let mut agents: Vec<Box<dyn Agent>> = all_agents()
            .into_iter()
            .map(|agent| Box::new(agent) as Box<dyn Agent>)
            .collect();
        let mut rng = Prng::seed_from_u64(9);
        let scores = compute_regret(&mut env, &mut agents, 100, 1, &mut rng, &mut ()).unwrap();
        assert_eq!(scores.len(), 3);
    }
}
