//! Property-based tests for fitness-logic
//!
//! Uses proptest to verify invariants of matchups, simulations and evaluation.

use fitness_logic::{
    calculate_matchup_count, generate_round_robin, Choice, FitnessEvaluator, Matchup,
    MatchupSimulation, PayoffRule, Strategy as Player, BUILTIN_STRATEGIES,
};
use proptest::prelude::*;

fn any_choice() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Cooperate), Just(Choice::Defect)]
}

fn any_strategy() -> impl Strategy<Value = Player> {
    prop::sample::select(BUILTIN_STRATEGIES.to_vec())
}

fn any_rule() -> impl Strategy<Value = PayoffRule> {
    (-20i32..20, -20i32..20, -20i32..20, -20i32..20)
        .prop_map(|(cc, cd, dc, dd)| PayoffRule::new(cc, cd, dc, dd))
}

proptest! {
    // ==================== Payoff Properties ====================

    #[test]
    fn calculate_reads_matching_field(rule in any_rule(), mine in any_choice(), theirs in any_choice()) {
        let expected = match (mine, theirs) {
            (Choice::Cooperate, Choice::Cooperate) => rule.cooperate_cooperate,
            (Choice::Cooperate, Choice::Defect) => rule.cooperate_defect,
            (Choice::Defect, Choice::Cooperate) => rule.defect_cooperate,
            (Choice::Defect, Choice::Defect) => rule.defect_defect,
        };
        prop_assert_eq!(rule.calculate(mine, theirs), expected);
    }

    // ==================== Strategy Properties ====================

    #[test]
    fn choose_is_pure(strategy in any_strategy(), last in prop::option::of(any_choice())) {
        prop_assert_eq!(strategy.choose(last), strategy.choose(last));
    }

    // ==================== Matchup Properties ====================

    #[test]
    fn matchup_equality_symmetric(x in any_strategy(), y in any_strategy(), rule in any_rule()) {
        let other = rule;
        prop_assert_eq!(Matchup::new(x, y, &rule), Matchup::new(y, x, &other));
    }

    #[test]
    fn matchup_equality_tracks_rule(x in any_strategy(), y in any_strategy(), rule in any_rule(), bump in 1i32..5) {
        let mut changed = rule;
        changed.defect_defect += bump;
        prop_assert_ne!(Matchup::new(x, y, &rule), Matchup::new(x, y, &changed));
    }

    #[test]
    fn flipped_matchup_mirrors_payoffs(x in any_strategy(), y in any_strategy(), rule in any_rule(), n in 1i32..30) {
        let forward = MatchupSimulation::new(Matchup::new(x, y, &rule)).simulate(n).unwrap();
        let backward = MatchupSimulation::new(Matchup::new(y, x, &rule)).simulate(n).unwrap();
        prop_assert_eq!(forward.payoff_for_a(), backward.payoff_for_b());
        prop_assert_eq!(forward.payoff_for_b(), backward.payoff_for_a());
    }

    // ==================== Simulation Properties ====================

    #[test]
    fn simulate_returns_n_rounds(x in any_strategy(), y in any_strategy(), n in 1i32..200) {
        let rule = PayoffRule::default();
        let result = MatchupSimulation::new(Matchup::new(x, y, &rule)).simulate(n).unwrap();
        prop_assert_eq!(result.round_count(), n as usize);
        let sum_a: i64 = result.rounds.iter().map(|r| r.a.payoff as i64).sum();
        prop_assert_eq!(result.payoff_for_a(), sum_a);
    }

    #[test]
    fn simulate_rejects_non_positive(n in -1000i32..=0) {
        let rule = PayoffRule::default();
        let simulation = MatchupSimulation::new(Matchup::new(Player::Naive, Player::Evil, &rule));
        prop_assert!(simulation.simulate(n).is_err());
    }

    // ==================== Evaluator Properties ====================

    #[test]
    fn evaluate_is_deterministic(
        strategies in prop::collection::vec(any_strategy(), 0..6),
        rule in any_rule(),
        n in 1i32..20
    ) {
        let mut evaluator = FitnessEvaluator::default();
        evaluator.set_strategies(strategies.clone());
        evaluator.set_payoff_rule(rule);
        evaluator.set_number_of_rounds(n).unwrap();

        let first = evaluator.evaluate().unwrap();
        let second = evaluator.evaluate().unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), strategies.len());
        for (fitness, strategy) in first.iter().zip(&strategies) {
            prop_assert_eq!(fitness.strategy, *strategy);
        }
    }

    #[test]
    fn round_robin_size(strategies in prop::collection::vec(any_strategy(), 0..8)) {
        let rule = PayoffRule::default();
        let mut distinct = strategies.clone();
        distinct.sort_by_key(|s| s.name());
        distinct.dedup();

        let matchups = generate_round_robin(&strategies, &rule);
        prop_assert_eq!(matchups.len(), calculate_matchup_count(distinct.len()));
    }
}

#[test]
fn three_round_reference_totals() {
    let mut evaluator = FitnessEvaluator::default();
    evaluator.set_number_of_rounds(3).unwrap();

    let totals: Vec<i64> = evaluator.evaluate().unwrap().iter().map(|f| f.total_payoff).collect();

    assert_eq!(totals, vec![27, 28, 29]);
}
