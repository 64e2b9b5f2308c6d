use serde::{Deserialize, Serialize};
use std::vec;

/// Expected cumulative regret curves, one per agent, in the order the agents were supplied.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegretScores {
    curves: Vec<(String, Vec<f64>)>,
}

impl RegretScores {
    pub const fn new() -> Self {
        Self { curves: Vec::new() }
    }

    /// Append the curve of the next agent.
    pub fn push(&mut self, name: String, curve: Vec<f64>) {
        self.curves.push((name, curve));
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Agent names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|(name, _)| name.as_str())
    }

    /// The curve of the agent with the given name.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.iter()
            .find(|(curve_name, _)| *curve_name == name)
            .map(|(_, curve)| curve)
    }

    /// Iterate over `(name, curve)` in agent order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.curves
            .iter()
            .map(|(name, curve)| (name.as_str(), curve.as_slice()))
    }

    /// The expected cumulative regret at the final step for each agent.
    pub fn final_regrets(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter()
            .filter_map(|(name, curve)| Some((name, *curve.last()?)))
    }
}

impl IntoIterator for RegretScores {
    type Item = (String, Vec<f64>);
    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.into_iter()
    }
}

impl FromIterator<(String, Vec<f64>)> for RegretScores {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        Self {
            curves: iter.into_iter().collect(),
        }
    }
}
