//! Fitness Logic for Dilemma Fitness
//!
//! Core game logic for ranking Iterated Prisoner's Dilemma strategies by
//! round-robin fitness. This crate is compiled to:
//! - Native (for the command-line host)
//! - WASM (for a browser front end)

mod catalog;
mod error;
mod evaluator;
mod game;
mod pairing;
mod payoff;
mod simulation;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{StrategyCatalog, BUILTIN_STRATEGIES};
pub use error::{FitnessError, Result};
pub use evaluator::{
    rank, validate_number_of_rounds, EvaluatorConfig, Fitness, FitnessEvaluator,
    DEFAULT_NUMBER_OF_ROUNDS, MAX_NUMBER_OF_ROUNDS,
};
pub use game::{Matchup, MatchupRoundResult, RoundResult};
pub use pairing::{calculate_matchup_count, generate_round_robin};
pub use payoff::PayoffRule;
pub use simulation::{MatchupSimulation, MatchupSimulationResult};
pub use strategy::{Choice, Strategy};
