//! Dilemma Fitness CLI
//!
//! Commands:
//! - evaluate: Rank strategies by round-robin fitness
//! - replay: Show one matchup round by round
//! - strategies: List the built-in strategies

mod config;
mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fitness_logic::{
    validate_number_of_rounds, FitnessEvaluator, Matchup, MatchupSimulation, PayoffRule, Strategy,
    StrategyCatalog, DEFAULT_NUMBER_OF_ROUNDS,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, Overrides};

#[derive(Debug, Parser)]
#[command(name = "dilemma-fitness", version)]
#[command(about = "Rank Iterated Prisoner's Dilemma strategies by round-robin fitness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate every strategy against every other (and itself)
    Evaluate {
        /// TOML config file; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
        /// Rounds per matchup (1-100)
        #[arg(long)]
        rounds: Option<i32>,
        #[command(flatten)]
        payoff: PayoffArgs,
        /// Strategy to include (repeatable); defaults to the whole catalog
        #[arg(long = "strategy", value_parser = parse_strategy)]
        strategies: Vec<Strategy>,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Also print the head-to-head result of every matchup
        #[arg(long)]
        matchups: bool,
    },
    /// Play a single matchup and print every round
    Replay {
        #[arg(long, value_parser = parse_strategy)]
        a: Strategy,
        #[arg(long, value_parser = parse_strategy)]
        b: Strategy,
        /// Rounds to play (1-100)
        #[arg(long, default_value_t = DEFAULT_NUMBER_OF_ROUNDS)]
        rounds: i32,
        #[command(flatten)]
        payoff: PayoffArgs,
    },
    /// List the built-in strategies
    Strategies,
}

/// Payoff table entries, each defaulting to the standard dilemma values
#[derive(Debug, Args)]
struct PayoffArgs {
    /// Payoff for cooperating while the opponent cooperates
    #[arg(long, allow_hyphen_values = true)]
    cc: Option<i32>,
    /// Payoff for cooperating while the opponent defects
    #[arg(long, allow_hyphen_values = true)]
    cd: Option<i32>,
    /// Payoff for defecting while the opponent cooperates
    #[arg(long, allow_hyphen_values = true)]
    dc: Option<i32>,
    /// Payoff for defecting while the opponent defects
    #[arg(long, allow_hyphen_values = true)]
    dd: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    StrategyCatalog::default()
        .find(s)
        .ok_or_else(|| format!("unknown strategy {s:?}"))
}

fn build_overrides(
    rounds: Option<i32>,
    payoff: &PayoffArgs,
    strategies: Vec<Strategy>,
) -> Overrides {
    Overrides {
        number_of_rounds: rounds,
        cooperate_cooperate: payoff.cc,
        cooperate_defect: payoff.cd,
        defect_cooperate: payoff.dc,
        defect_defect: payoff.dd,
        strategies,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_cli() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Evaluate {
            config,
            rounds,
            payoff,
            strategies,
            format,
            matchups,
        } => {
            let overrides = build_overrides(rounds, &payoff, strategies);
            let config = load_config(config.as_deref(), &overrides)?;
            info!(
                rounds = config.number_of_rounds,
                strategies = config.strategies.len(),
                payoff_rule = %config.payoff_rule,
                "evaluating"
            );

            let evaluator = FitnessEvaluator::from_config(config);
            let results = evaluator.simulate_all().context("evaluation failed")?;
            let fitnesses = evaluator.calculate_fitnesses(&results);

            match format {
                Format::Table => print!("{}", report::render_table(&fitnesses)),
                Format::Json => println!("{}", report::render_json(&fitnesses)?),
            }

            if matchups {
                println!();
                print!("{}", report::render_matchups(&results));
            }
        }
        Command::Replay {
            a,
            b,
            rounds,
            payoff,
        } => {
            validate_number_of_rounds(rounds).context("invalid replay")?;

            let mut rule = PayoffRule::default();
            build_overrides(None, &payoff, Vec::new()).apply_to_rule(&mut rule);

            let result = MatchupSimulation::new(Matchup::new(a, b, &rule))
                .simulate(rounds)
                .context("replay failed")?;

            print!("{}", report::render_rounds(&result));
        }
        Command::Strategies => {
            for strategy in StrategyCatalog::default().all() {
                println!("{:<12} {}", strategy.name(), strategy.description());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_evaluate_flags() {
        let cli = Cli::try_parse_from([
            "dilemma-fitness",
            "evaluate",
            "--rounds",
            "3",
            "--cd",
            "-1",
            "--strategy",
            "tit-for-tat",
            "--strategy",
            "Evil",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Evaluate {
                rounds,
                payoff,
                strategies,
                format,
                ..
            } => {
                assert_eq!(rounds, Some(3));
                assert_eq!(payoff.cd, Some(-1));
                assert_eq!(payoff.cc, None);
                assert_eq!(strategies, vec![Strategy::TitForTat, Strategy::Evil]);
                assert_eq!(format, Format::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_strategy_rejected() {
        let result =
            Cli::try_parse_from(["dilemma-fitness", "replay", "--a", "Pavlov", "--b", "Evil"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_replay_rejects_too_many_rounds() {
        let cli = Cli::try_parse_from([
            "dilemma-fitness",
            "replay",
            "--a",
            "Naive",
            "--b",
            "Evil",
            "--rounds",
            "101",
        ])
        .unwrap();

        match cli.command {
            Command::Replay { rounds, .. } => assert!(validate_number_of_rounds(rounds).is_err()),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
