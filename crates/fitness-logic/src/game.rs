//! Matchup execution: one round at a time

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::payoff::PayoffRule;
use crate::strategy::{Choice, Strategy};

/// What one side of a matchup did in a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub strategy: Strategy,
    pub choice: Choice,
    pub payoff: i32,
}

/// Both sides of the same round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupRoundResult {
    pub a: RoundResult,
    pub b: RoundResult,
}

/// Two strategies facing each other under one payoff rule
///
/// Side order is kept for attributing results, but equality and hashing are
/// symmetric: `Matchup(x, y, r) == Matchup(y, x, r)`. The rule is borrowed so
/// that all matchups of an evaluation score against the same instance.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Matchup<'a> {
    pub strategy_a: Strategy,
    pub strategy_b: Strategy,
    pub payoff_rule: &'a PayoffRule,
}

impl<'a> Matchup<'a> {
    pub fn new(strategy_a: Strategy, strategy_b: Strategy, payoff_rule: &'a PayoffRule) -> Self {
        Self {
            strategy_a,
            strategy_b,
            payoff_rule,
        }
    }

    /// Play the opening round, with no prior choices to react to
    pub fn play(&self) -> MatchupRoundResult {
        let choice_a = self.strategy_a.choose(None);
        let choice_b = self.strategy_b.choose(None);
        self.score(choice_a, choice_b)
    }

    /// Play the round following `last`
    ///
    /// Each side reacts to what the other side chose in `last`.
    pub fn play_after(&self, last: &MatchupRoundResult) -> MatchupRoundResult {
        let choice_a = self.strategy_a.choose(Some(last.b.choice));
        let choice_b = self.strategy_b.choose(Some(last.a.choice));
        self.score(choice_a, choice_b)
    }

    /// True if `strategy` plays on either side
    pub fn involves(&self, strategy: &Strategy) -> bool {
        self.strategy_a == *strategy || self.strategy_b == *strategy
    }

    fn score(&self, choice_a: Choice, choice_b: Choice) -> MatchupRoundResult {
        MatchupRoundResult {
            a: RoundResult {
                strategy: self.strategy_a,
                choice: choice_a,
                payoff: self.payoff_rule.calculate(choice_a, choice_b),
            },
            b: RoundResult {
                strategy: self.strategy_b,
                choice: choice_b,
                payoff: self.payoff_rule.calculate(choice_b, choice_a),
            },
        }
    }

    /// Order-independent identity: strategy names sorted, then the rule
    fn canonical_key(&self) -> (&'static str, &'static str, PayoffRule) {
        let (a, b) = (self.strategy_a.name(), self.strategy_b.name());
        if a <= b {
            (a, b, *self.payoff_rule)
        } else {
            (b, a, *self.payoff_rule)
        }
    }
}

impl PartialEq for Matchup<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl Eq for Matchup<'_> {}

impl Hash for Matchup<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_play_first_round() {
        let rule = PayoffRule::default();
        let matchup = Matchup::new(Strategy::TitForTat, Strategy::Evil, &rule);

        let result = matchup.play();

        assert_eq!(result.a.strategy, Strategy::TitForTat);
        assert_eq!(result.a.choice, Choice::Cooperate);
        assert_eq!(result.a.payoff, 0);
        assert_eq!(result.b.strategy, Strategy::Evil);
        assert_eq!(result.b.choice, Choice::Defect);
        assert_eq!(result.b.payoff, 5);
    }

    #[test]
    fn test_play_after_reacts_to_opponent() {
        let rule = PayoffRule::default();
        let matchup = Matchup::new(Strategy::TitForTat, Strategy::Evil, &rule);

        let first = matchup.play();
        let second = matchup.play_after(&first);

        // TFT sees Evil's defection, not its own cooperation
        assert_eq!(second.a.choice, Choice::Defect);
        assert_eq!(second.b.choice, Choice::Defect);
        assert_eq!(second.a.payoff, 1);
        assert_eq!(second.b.payoff, 1);
    }

    #[test]
    fn test_play_after_uses_other_side_of_last_round() {
        let rule = PayoffRule::default();
        let matchup = Matchup::new(Strategy::TitForTat, Strategy::TitForTat, &rule);
        let last = MatchupRoundResult {
            a: RoundResult {
                strategy: Strategy::TitForTat,
                choice: Choice::Defect,
                payoff: 5,
            },
            b: RoundResult {
                strategy: Strategy::TitForTat,
                choice: Choice::Cooperate,
                payoff: 0,
            },
        };

        let next = matchup.play_after(&last);

        assert_eq!(next.a.choice, Choice::Cooperate);
        assert_eq!(next.b.choice, Choice::Defect);
        assert_eq!(next.a.payoff, 0);
        assert_eq!(next.b.payoff, 5);
    }

    #[test]
    fn test_payoff_from_each_side_perspective() {
        let rule = PayoffRule::default();
        let matchup = Matchup::new(Strategy::Evil, Strategy::Naive, &rule);

        let result = matchup.play();

        assert_eq!(result.a.payoff, 5);
        assert_eq!(result.b.payoff, 0);
    }

    #[test]
    fn test_equality_is_symmetric() {
        let rule = PayoffRule::default();
        let xy = Matchup::new(Strategy::Naive, Strategy::Evil, &rule);
        let yx = Matchup::new(Strategy::Evil, Strategy::Naive, &rule);

        assert_eq!(xy, yx);
        assert_eq!(yx, xy);
    }

    #[test]
    fn test_equality_requires_same_rule_values() {
        let rule = PayoffRule::default();
        let other_rule = PayoffRule::new(3, 0, 5, 2);
        let same_values = PayoffRule::default();

        let base = Matchup::new(Strategy::Naive, Strategy::Evil, &rule);
        assert_ne!(base, Matchup::new(Strategy::Naive, Strategy::Evil, &other_rule));
        assert_eq!(base, Matchup::new(Strategy::Evil, Strategy::Naive, &same_values));
    }

    #[test]
    fn test_different_strategies_not_equal() {
        let rule = PayoffRule::default();
        assert_ne!(
            Matchup::new(Strategy::Naive, Strategy::Evil, &rule),
            Matchup::new(Strategy::Naive, Strategy::TitForTat, &rule)
        );
    }

    #[test]
    fn test_hash_set_collapses_flipped_matchups() {
        let rule = PayoffRule::default();
        let mut set = HashSet::new();
        set.insert(Matchup::new(Strategy::Naive, Strategy::Evil, &rule));
        set.insert(Matchup::new(Strategy::Evil, Strategy::Naive, &rule));
        set.insert(Matchup::new(Strategy::Evil, Strategy::Evil, &rule));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_involves() {
        let rule = PayoffRule::default();
        let matchup = Matchup::new(Strategy::Naive, Strategy::Evil, &rule);
        assert!(matchup.involves(&Strategy::Naive));
        assert!(matchup.involves(&Strategy::Evil));
        assert!(!matchup.involves(&Strategy::TitForTat));
    }
}
