//! Payoff matrix for the Prisoner's Dilemma

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::strategy::Choice;

/// Configurable 2×2 payoff table
///
/// Each field is the score earned by a player making the first choice
/// against an opponent making the second one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoffRule {
    pub cooperate_cooperate: i32,
    pub cooperate_defect: i32,
    pub defect_cooperate: i32,
    pub defect_defect: i32,
}

impl PayoffRule {
    pub const DEFAULT_COOPERATE_COOPERATE: i32 = 3;
    pub const DEFAULT_COOPERATE_DEFECT: i32 = 0;
    pub const DEFAULT_DEFECT_COOPERATE: i32 = 5;
    pub const DEFAULT_DEFECT_DEFECT: i32 = 1;

    pub fn new(
        cooperate_cooperate: i32,
        cooperate_defect: i32,
        defect_cooperate: i32,
        defect_defect: i32,
    ) -> Self {
        Self {
            cooperate_cooperate,
            cooperate_defect,
            defect_cooperate,
            defect_defect,
        }
    }

    /// Score for a player choosing `choice` while the opponent chose `opponent_choice`
    pub fn calculate(&self, choice: Choice, opponent_choice: Choice) -> i32 {
        match (choice, opponent_choice) {
            (Choice::Cooperate, Choice::Cooperate) => self.cooperate_cooperate,
            (Choice::Cooperate, Choice::Defect) => self.cooperate_defect,
            (Choice::Defect, Choice::Cooperate) => self.defect_cooperate,
            (Choice::Defect, Choice::Defect) => self.defect_defect,
        }
    }

    /// True when the table has the dilemma shape T > R > P > S
    pub fn is_dilemma(&self) -> bool {
        self.defect_cooperate > self.cooperate_cooperate
            && self.cooperate_cooperate > self.defect_defect
            && self.defect_defect > self.cooperate_defect
    }
}

impl Default for PayoffRule {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_COOPERATE_COOPERATE,
            Self::DEFAULT_COOPERATE_DEFECT,
            Self::DEFAULT_DEFECT_COOPERATE,
            Self::DEFAULT_DEFECT_DEFECT,
        )
    }
}

impl fmt::Display for PayoffRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CC={} CD={} DC={} DD={}",
            self.cooperate_cooperate,
            self.cooperate_defect,
            self.defect_cooperate,
            self.defect_defect
        )
    }
}
