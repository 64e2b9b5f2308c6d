//! Agent testing utilities
use super::{Agent, AgentPolicy, BuildAgent};
use crate::envs::{BernoulliBandit, Environment};
use crate::Prng;
use rand::SeedableRng;

/// Check that an agent with the given policy learns a trivial bandit environment.
///
/// The environment is a two-armed Bernoulli bandit where the first arm always gives 0 reward
/// and the second always gives 1.
/// After `num_train_steps` steps, the agent must choose the second arm on at least
/// `threshold` of the following 1000 steps.
pub fn train_deterministic_bandit<P>(policy: P, num_train_steps: u64, threshold: f64, seed: u64)
where
    P: Into<AgentPolicy>,
{
    let env = BernoulliBandit::from_means(vec![0.0, 1.0]).unwrap();
    let policy: AgentPolicy = policy.into();
    let mut agent = policy.build_agent().unwrap();
    let mut rng = Prng::seed_from_u64(seed);
    agent.init_actions(env.num_actions());

    let run_step = |agent: &mut dyn Agent, rng: &mut Prng| {
        let action = agent.act(rng);
        let reward = env.pull(action, rng);
        agent.update(action, reward);
        action
    };

    for _ in 0..num_train_steps {
        run_step(&mut agent, &mut rng);
    }

    let num_eval_steps: u32 = 1000;
    let action_1_count = (0..num_eval_steps)
        .filter(|_| run_step(&mut agent, &mut rng) == 1)
        .count();
    #[allow(clippy::cast_precision_loss)]
    let fraction = action_1_count as f64 / f64::from(num_eval_steps);
    assert!(
        fraction >= threshold,
        "chose the best arm on {} of steps",
        fraction
    );
}
