//! Round-robin fitness evaluation
//!
//! Every strategy plays every strategy (itself included) for a fixed number
//! of rounds. A strategy's fitness is the sum of what it earned on either
//! side of every matchup it took part in.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::StrategyCatalog;
use crate::error::{FitnessError, Result};
use crate::pairing::generate_round_robin;
use crate::payoff::PayoffRule;
use crate::simulation::{MatchupSimulation, MatchupSimulationResult};
use crate::strategy::Strategy;

/// Rounds per matchup unless configured otherwise
pub const DEFAULT_NUMBER_OF_ROUNDS: i32 = 10;

/// Most rounds a config file or front end may ask for
pub const MAX_NUMBER_OF_ROUNDS: i32 = 100;

/// A strategy's total payoff over one evaluation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fitness {
    pub strategy: Strategy,
    pub total_payoff: i64,
}

/// Plain evaluator settings, as read from a config file or a front end
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub strategies: Vec<Strategy>,
    pub payoff_rule: PayoffRule,
    pub number_of_rounds: i32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            strategies: StrategyCatalog::default().all().to_vec(),
            payoff_rule: PayoffRule::default(),
            number_of_rounds: DEFAULT_NUMBER_OF_ROUNDS,
        }
    }
}

impl EvaluatorConfig {
    /// Check the settings before handing them to an evaluator
    pub fn validate(&self) -> Result<()> {
        validate_number_of_rounds(self.number_of_rounds)
    }
}

/// Check a host-supplied round count against `1..=MAX_NUMBER_OF_ROUNDS`
///
/// # Errors
/// [`FitnessError::InvalidArgument`] if the count is out of range.
pub fn validate_number_of_rounds(number_of_rounds: i32) -> Result<()> {
    if !(1..=MAX_NUMBER_OF_ROUNDS).contains(&number_of_rounds) {
        return Err(FitnessError::InvalidArgument(format!(
            "number of rounds must be between 1 and {}, got {}",
            MAX_NUMBER_OF_ROUNDS, number_of_rounds
        )));
    }
    Ok(())
}

fn check_rounds(number_of_rounds: i32) -> std::result::Result<(), String> {
    if number_of_rounds <= 0 {
        return Err(format!("number of rounds must be positive, got {}", number_of_rounds));
    }
    Ok(())
}

/// Evaluates a set of strategies for their relative fitness
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitnessEvaluator {
    strategies: Vec<Strategy>,
    payoff_rule: PayoffRule,
    number_of_rounds: i32,
}

impl Default for FitnessEvaluator {
    fn default() -> Self {
        Self::new(&StrategyCatalog::default())
    }
}

impl FitnessEvaluator {
    /// Evaluator over every strategy of `catalog`, default payoffs and rounds
    pub fn new(catalog: &StrategyCatalog) -> Self {
        Self {
            strategies: catalog.all().to_vec(),
            payoff_rule: PayoffRule::default(),
            number_of_rounds: DEFAULT_NUMBER_OF_ROUNDS,
        }
    }

    /// Take the settings as they are; [`FitnessEvaluator::evaluate`] reports
    /// any that are invalid.
    pub fn from_config(config: EvaluatorConfig) -> Self {
        Self {
            strategies: config.strategies,
            payoff_rule: config.payoff_rule,
            number_of_rounds: config.number_of_rounds,
        }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn set_strategies(&mut self, strategies: Vec<Strategy>) {
        self.strategies = strategies;
    }

    pub fn payoff_rule(&self) -> &PayoffRule {
        &self.payoff_rule
    }

    pub fn payoff_rule_mut(&mut self) -> &mut PayoffRule {
        &mut self.payoff_rule
    }

    pub fn set_payoff_rule(&mut self, payoff_rule: PayoffRule) {
        self.payoff_rule = payoff_rule;
    }

    pub fn number_of_rounds(&self) -> i32 {
        self.number_of_rounds
    }

    /// # Errors
    /// [`FitnessError::InvalidArgument`] if `number_of_rounds` is not positive;
    /// the previous value is kept.
    pub fn set_number_of_rounds(&mut self, number_of_rounds: i32) -> Result<()> {
        check_rounds(number_of_rounds).map_err(FitnessError::InvalidArgument)?;
        self.number_of_rounds = number_of_rounds;
        Ok(())
    }

    /// Simulate every distinct round-robin matchup
    pub fn simulate_all(&self) -> Result<Vec<MatchupSimulationResult<'_>>> {
        check_rounds(self.number_of_rounds).map_err(FitnessError::InvalidOperation)?;

        generate_round_robin(&self.strategies, &self.payoff_rule)
            .into_iter()
            .map(|matchup| {
                let result = MatchupSimulation::new(matchup).simulate(self.number_of_rounds)?;
                debug!(
                    a = matchup.strategy_a.name(),
                    b = matchup.strategy_b.name(),
                    payoff_a = result.payoff_for_a(),
                    payoff_b = result.payoff_for_b(),
                    "matchup played"
                );
                Ok(result)
            })
            .collect::<Result<Vec<_>>>()
    }

    /// Evaluate the fitness of every configured strategy
    ///
    /// One record per entry of [`FitnessEvaluator::strategies`], in the same
    /// order; repeated entries get repeated records.
    ///
    /// # Errors
    /// [`FitnessError::InvalidOperation`] if the round count is not positive.
    pub fn evaluate(&self) -> Result<Vec<Fitness>> {
        let results = self.simulate_all()?;
        Ok(self.calculate_fitnesses(&results))
    }

    /// Fitness records from results already produced by
    /// [`FitnessEvaluator::simulate_all`]
    pub fn calculate_fitnesses(&self, results: &[MatchupSimulationResult<'_>]) -> Vec<Fitness> {
        let fitnesses: Vec<Fitness> = self
            .strategies
            .iter()
            .map(|&strategy| Fitness {
                strategy,
                total_payoff: calculate_total_payoff(&strategy, results),
            })
            .collect();

        info!(
            strategies = self.strategies.len(),
            matchups = results.len(),
            rounds = self.number_of_rounds,
            payoff_rule = %self.payoff_rule,
            "fitness evaluated"
        );

        fitnesses
    }
}

/// Sum of `strategy`'s payoffs over all results, from both sides
///
/// A self-play matchup credits the strategy with both sides' payoffs.
fn calculate_total_payoff(strategy: &Strategy, results: &[MatchupSimulationResult<'_>]) -> i64 {
    results
        .iter()
        .filter(|r| r.matchup.involves(strategy))
        .map(|r| {
            let mut total = 0;
            if r.matchup.strategy_a == *strategy {
                total += r.payoff_for_a();
            }
            if r.matchup.strategy_b == *strategy {
                total += r.payoff_for_b();
            }
            total
        })
        .sum()
}

/// Sort by total payoff, highest first; ties keep their input order
pub fn rank(fitnesses: &[Fitness]) -> Vec<Fitness> {
    let mut ranked = fitnesses.to_vec();
    ranked.sort_by(|a, b| b.total_payoff.cmp(&a.total_payoff));
    ranked
}
