//! Round-robin matchup generation
//!
//! Every strategy meets every strategy in the collection, itself included.
//! (s, t) and (t, s) are the same matchup and are kept once, in the order
//! the first of them was generated.

use std::collections::HashSet;

use crate::game::Matchup;
use crate::payoff::PayoffRule;
use crate::strategy::Strategy;

/// Generate the distinct matchups of a full round-robin with self-play
///
/// Side A of each kept matchup is the strategy that came first in
/// `strategies`. Repeated strategies add no extra matchups.
pub fn generate_round_robin<'a>(
    strategies: &[Strategy],
    payoff_rule: &'a PayoffRule,
) -> Vec<Matchup<'a>> {
    let mut seen: HashSet<Matchup<'a>> = HashSet::new();
    let mut matchups = Vec::new();

    for &strategy in strategies {
        for &other in strategies {
            let matchup = Matchup::new(strategy, other, payoff_rule);
            if seen.insert(matchup) {
                matchups.push(matchup);
            }
        }
    }

    matchups
}

/// Number of distinct matchups for `n` distinct strategies: n(n+1)/2
pub fn calculate_matchup_count(distinct_strategies: usize) -> usize {
    distinct_strategies * (distinct_strategies + 1) / 2
}
