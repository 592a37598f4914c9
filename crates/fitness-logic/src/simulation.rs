//! Repeated play of a single matchup

use serde::Serialize;
use tracing::trace;

use crate::error::{FitnessError, Result};
use crate::game::{Matchup, MatchupRoundResult};

/// Drives one matchup for a number of rounds
#[derive(Clone, Copy, Debug)]
pub struct MatchupSimulation<'a> {
    pub matchup: Matchup<'a>,
}

impl<'a> MatchupSimulation<'a> {
    pub fn new(matchup: Matchup<'a>) -> Self {
        Self { matchup }
    }

    /// Play `number_of_rounds` rounds, each one reacting to the round before it
    ///
    /// # Errors
    /// [`FitnessError::InvalidArgument`] if `number_of_rounds` is not positive.
    pub fn simulate(&self, number_of_rounds: i32) -> Result<MatchupSimulationResult<'a>> {
        if number_of_rounds <= 0 {
            return Err(FitnessError::InvalidArgument(format!(
                "number of rounds must be positive, got {}",
                number_of_rounds
            )));
        }

        let mut rounds: Vec<MatchupRoundResult> = Vec::with_capacity(number_of_rounds as usize);
        let mut last = self.matchup.play();
        rounds.push(last);

        for _ in 1..number_of_rounds {
            last = self.matchup.play_after(&last);
            rounds.push(last);
        }

        trace!(
            a = self.matchup.strategy_a.name(),
            b = self.matchup.strategy_b.name(),
            rounds = rounds.len(),
            "simulated matchup"
        );

        Ok(MatchupSimulationResult {
            matchup: self.matchup,
            rounds,
        })
    }
}

/// Complete play log of one matchup, rounds in play order
#[derive(Clone, Debug, Serialize)]
pub struct MatchupSimulationResult<'a> {
    pub matchup: Matchup<'a>,
    pub rounds: Vec<MatchupRoundResult>,
}

impl MatchupSimulationResult<'_> {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn payoff_for_a(&self) -> i64 {
        self.rounds.iter().map(|r| r.a.payoff as i64).sum()
    }

    pub fn payoff_for_b(&self) -> i64 {
        self.rounds.iter().map(|r| r.b.payoff as i64).sum()
    }
}
