//! Strategy definitions and execution

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitnessError;

/// A choice made in one round of the Prisoner's Dilemma
///
/// The "no prior round" sentinel is `Option::<Choice>::None`, so a value of
/// this type is always a choice that was actually made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Cooperate,
    Defect,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Cooperate => f.write_str("Cooperate"),
            Choice::Defect => f.write_str("Defect"),
        }
    }
}

/// Built-in strategy
///
/// Every strategy is a pure function of the opponent's last choice.
/// Equality and hashing go through [`Strategy::name`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Strategy {
    /// Always cooperate.
    Naive,
    /// Always defect.
    Evil,
    /// Copy opponent's last choice. Start with cooperate.
    TitForTat,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Naive => "Naive",
            Strategy::Evil => "Evil",
            Strategy::TitForTat => "Tit for tat",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Naive => "Always cooperate.",
            Strategy::Evil => "Always defect.",
            Strategy::TitForTat => {
                "Mimic the choice last made by the opponent and cooperate by default."
            }
        }
    }

    /// Choose this round's move given the opponent's previous one
    ///
    /// `opponent_last_choice` is `None` on the first round of a matchup.
    pub fn choose(&self, opponent_last_choice: Option<Choice>) -> Choice {
        match self {
            Strategy::Naive => Choice::Cooperate,
            Strategy::Evil => Choice::Defect,
            Strategy::TitForTat => execute_tit_for_tat(opponent_last_choice),
        }
    }
}

/// Tit-for-Tat: Copy opponent's last choice, start with cooperate
fn execute_tit_for_tat(opponent_last_choice: Option<Choice>) -> Choice {
    match opponent_last_choice {
        None => Choice::Cooperate,
        Some(Choice::Cooperate) => Choice::Cooperate,
        Some(Choice::Defect) => Choice::Defect,
    }
}

impl PartialEq for Strategy {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Strategy {}

impl Hash for Strategy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = FitnessError;

    /// Accepts the display name ("Tit for tat"), the identifier ("TitForTat")
    /// or a kebab form ("tit-for-tat"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "naive" => Ok(Strategy::Naive),
            "evil" => Ok(Strategy::Evil),
            "titfortat" => Ok(Strategy::TitForTat),
            _ => Err(FitnessError::InvalidArgument(format!("unknown strategy: {:?}", s))),
        }
    }
}
