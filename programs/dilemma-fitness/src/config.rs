//! Evaluator configuration: TOML file plus command-line overrides

use anyhow::{Context, Result};
use fitness_logic::{EvaluatorConfig, PayoffRule, Strategy};
use std::{fs, path::Path};

/// Command-line values that take precedence over the config file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub number_of_rounds: Option<i32>,
    pub cooperate_cooperate: Option<i32>,
    pub cooperate_defect: Option<i32>,
    pub defect_cooperate: Option<i32>,
    pub defect_defect: Option<i32>,
    pub strategies: Vec<Strategy>,
}

impl Overrides {
    pub fn apply_to_rule(&self, rule: &mut PayoffRule) {
        if let Some(v) = self.cooperate_cooperate {
            rule.cooperate_cooperate = v;
        }
        if let Some(v) = self.cooperate_defect {
            rule.cooperate_defect = v;
        }
        if let Some(v) = self.defect_cooperate {
            rule.defect_cooperate = v;
        }
        if let Some(v) = self.defect_defect {
            rule.defect_defect = v;
        }
    }

    pub fn apply(&self, config: &mut EvaluatorConfig) {
        if let Some(n) = self.number_of_rounds {
            config.number_of_rounds = n;
        }
        self.apply_to_rule(&mut config.payoff_rule);
        if !self.strategies.is_empty() {
            config.strategies = self.strategies.clone();
        }
    }
}

/// Parse a TOML config; missing keys take the evaluator defaults.
pub fn parse_config(text: &str) -> Result<EvaluatorConfig> {
    toml::from_str(text).context("failed to deserialize config")
}

/// Build the final configuration from an optional file and the overrides.
///
/// # Errors
/// Returns an error if the file cannot be read or deserialized, or if the
/// resulting configuration is invalid.
pub fn load_config(file: Option<&Path>, overrides: &Overrides) -> Result<EvaluatorConfig> {
    let mut config = match file {
        Some(file) => {
            let text =
                fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
            parse_config(&text).with_context(|| format!("invalid config file {file:?}"))?
        }
        None => EvaluatorConfig::default(),
    };

    overrides.apply(&mut config);

    config.validate().context("failed to validate config")?;

    if !config.payoff_rule.is_dilemma() {
        tracing::warn!(
            payoff_rule = %config.payoff_rule,
            "payoff table is not a prisoner's dilemma"
        );
    }

    Ok(config)
}
