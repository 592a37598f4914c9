//! WASM bindings for a browser front end

#![cfg(feature = "wasm")]

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::{
    rank, validate_number_of_rounds, EvaluatorConfig, FitnessEvaluator, Matchup,
    MatchupSimulation, PayoffRule, Strategy, StrategyCatalog,
};

/// Evaluator settings as posted by the front end
///
/// `strategies` may hold `null` entries, which are skipped.
#[derive(Deserialize)]
#[serde(default)]
struct FormConfig {
    strategies: Option<Vec<Option<Strategy>>>,
    payoff_rule: PayoffRule,
    number_of_rounds: i32,
}

impl Default for FormConfig {
    fn default() -> Self {
        let defaults = EvaluatorConfig::default();
        Self {
            strategies: None,
            payoff_rule: defaults.payoff_rule,
            number_of_rounds: defaults.number_of_rounds,
        }
    }
}

impl From<FormConfig> for EvaluatorConfig {
    fn from(form: FormConfig) -> Self {
        let strategies = match form.strategies {
            Some(list) => list.into_iter().flatten().collect(),
            None => EvaluatorConfig::default().strategies,
        };
        EvaluatorConfig {
            strategies,
            payoff_rule: form.payoff_rule,
            number_of_rounds: form.number_of_rounds,
        }
    }
}

fn parse_config(json: &str) -> Result<EvaluatorConfig, String> {
    let form: FormConfig =
        serde_json::from_str(json).map_err(|e| format!("Invalid config: {}", e))?;
    Ok(form.into())
}

fn find_strategy(catalog: &StrategyCatalog, name: &str, side: &str) -> Result<Strategy, String> {
    catalog
        .find(name)
        .ok_or_else(|| format!("Invalid strategy {}: unknown strategy {:?}", side, name))
}

/// Resolve both sides of a replay and check its round count
fn parse_replay(
    strategy_a: &str,
    strategy_b: &str,
    number_of_rounds: i32,
) -> Result<(Strategy, Strategy), String> {
    let catalog = StrategyCatalog::default();
    let a = find_strategy(&catalog, strategy_a, "A")?;
    let b = find_strategy(&catalog, strategy_b, "B")?;
    validate_number_of_rounds(number_of_rounds).map_err(|e| e.to_string())?;
    Ok((a, b))
}

#[derive(serde::Serialize)]
struct RankedFitness {
    rank: usize,
    name: &'static str,
    total_payoff: i64,
}

/// Evaluate strategy fitness
///
/// # Arguments
/// * `config_json` - JSON `{strategies, payoff_rule, number_of_rounds}`, every key optional
///
/// # Returns
/// Fitness records ranked by total payoff, highest first
#[wasm_bindgen]
pub fn evaluate_fitness(config_json: &str) -> Result<JsValue, JsError> {
    let config = parse_config(config_json).map_err(|e| JsError::new(&e))?;
    config.validate().map_err(|e| JsError::new(&e.to_string()))?;

    let fitnesses = FitnessEvaluator::from_config(config)
        .evaluate()
        .map_err(|e| JsError::new(&e.to_string()))?;

    let ranked: Vec<RankedFitness> = rank(&fitnesses)
        .iter()
        .enumerate()
        .map(|(i, f)| RankedFitness {
            rank: i + 1,
            name: f.strategy.name(),
            total_payoff: f.total_payoff,
        })
        .collect();

    serde_wasm_bindgen::to_value(&ranked)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Replay one matchup with full round-by-round details
#[wasm_bindgen]
pub fn replay_matchup(
    strategy_a: &str,
    strategy_b: &str,
    payoff_rule_json: &str,
    number_of_rounds: i32,
) -> Result<JsValue, JsError> {
    let (a, b) =
        parse_replay(strategy_a, strategy_b, number_of_rounds).map_err(|e| JsError::new(&e))?;
    let rule: PayoffRule = serde_json::from_str(payoff_rule_json)
        .map_err(|e| JsError::new(&format!("Invalid payoff rule: {}", e)))?;

    let result = MatchupSimulation::new(Matchup::new(a, b, &rule))
        .simulate(number_of_rounds)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: Strategy,
    name: &'static str,
    description: &'static str,
}

/// Get all catalog strategies
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = StrategyCatalog::default()
        .all()
        .iter()
        .map(|&s| StrategyInfo {
            id: s,
            name: s.name(),
            description: s.description(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
