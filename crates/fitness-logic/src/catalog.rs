//! Built-in strategy catalog

use crate::strategy::Strategy;

/// Built-in strategies in catalog order
pub const BUILTIN_STRATEGIES: [Strategy; 3] =
    [Strategy::Naive, Strategy::Evil, Strategy::TitForTat];

/// Fixed, enumerable set of strategies available to an evaluation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyCatalog {
    strategies: Vec<Strategy>,
}

impl StrategyCatalog {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    pub fn all(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn find(&self, name: &str) -> Option<Strategy> {
        let wanted = name.parse::<Strategy>().ok()?;
        self.strategies.iter().copied().find(|s| *s == wanted)
    }
}

impl Default for StrategyCatalog {
    fn default() -> Self {
        Self::new(BUILTIN_STRATEGIES.to_vec())
    }
}
