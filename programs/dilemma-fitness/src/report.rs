//! Plain-text and JSON rendering of evaluation results

use anyhow::{Context, Result};
use fitness_logic::{rank, Fitness, MatchupSimulationResult};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Serialize)]
struct RankedRow {
    rank: usize,
    strategy: &'static str,
    total_payoff: i64,
}

fn ranked_rows(fitnesses: &[Fitness]) -> Vec<RankedRow> {
    rank(fitnesses)
        .iter()
        .enumerate()
        .map(|(i, f)| RankedRow {
            rank: i + 1,
            strategy: f.strategy.name(),
            total_payoff: f.total_payoff,
        })
        .collect()
}

/// Ranked table, highest total payoff first
pub fn render_table(fitnesses: &[Fitness]) -> String {
    let rows = ranked_rows(fitnesses);
    let width = rows.iter().map(|r| r.strategy.len()).max().unwrap_or(0).max("Strategy".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:<width$}  {:>12}", "Rank", "Strategy", "Total payoff");
    for row in &rows {
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>12}",
            row.rank, row.strategy, row.total_payoff
        );
    }
    out
}

pub fn render_json(fitnesses: &[Fitness]) -> Result<String> {
    serde_json::to_string_pretty(&ranked_rows(fitnesses)).context("failed to serialize fitnesses")
}

/// One line per matchup: both sides and what each earned
pub fn render_matchups(results: &[MatchupSimulationResult<'_>]) -> String {
    let mut out = String::new();
    for result in results {
        let _ = writeln!(
            out,
            "{} vs {}: {} - {}",
            result.matchup.strategy_a,
            result.matchup.strategy_b,
            result.payoff_for_a(),
            result.payoff_for_b()
        );
    }
    out
}

/// Round-by-round log of one matchup
pub fn render_rounds(result: &MatchupSimulationResult<'_>) -> String {
    let a = result.matchup.strategy_a.name();
    let b = result.matchup.strategy_b.name();
    let width = a.len().max(b.len()).max("Cooperate".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<width$}  {:<width$}  {:>6}  {:>6}", "Round", a, b, "A", "B");
    for (i, round) in result.rounds.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>5}  {:<width$}  {:<width$}  {:>6}  {:>6}",
            i + 1,
            round.a.choice.to_string(),
            round.b.choice.to_string(),
            round.a.payoff,
            round.b.payoff
        );
    }
    let _ = writeln!(
        out,
        "{:>5}  {:<width$}  {:<width$}  {:>6}  {:>6}",
        "Total",
        "",
        "",
        result.payoff_for_a(),
        result.payoff_for_b()
    );
    out
}
