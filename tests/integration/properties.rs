//! Property tests for the rewrite engine
//!
//! Random rulesets over a fixed working alphabet, random inputs over
//! sigma. The checked properties are termination within `len - 1`
//! steps, the one-symbol shrink per step, and the priority-first,
//! leftmost-within-rule selection contract.

use pairsys::{evaluate, PairingSystem, Rule, Symbol};
use proptest::prelude::*;

fn sym(c: char) -> Symbol {
    Symbol::Char(c)
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    let gamma = || proptest::sample::select(vec!['a', 'b', 'c', 'd']);
    (gamma(), gamma(), gamma()).prop_map(|(left, right, replacement)| Rule {
        left: sym(left),
        right: sym(right),
        replacement: sym(replacement),
    })
}

fn arb_system() -> impl Strategy<Value = PairingSystem> {
    (
        proptest::collection::vec(arb_rule(), 0..6),
        proptest::collection::vec(proptest::sample::select(vec!['a', 'b', 'c', 'd']), 0..3),
    )
        .prop_map(|(rules, accept)| PairingSystem {
            sigma: vec![sym('a'), sym('b')],
            gamma: vec![sym('a'), sym('b'), sym('c'), sym('d')],
            rules,
            accept: accept.into_iter().map(sym).collect(),
        })
}

/// Positions where a rule's pair occurs in a string.
fn matches_of(
    rule: &Rule,
    string: &[Symbol],
) -> Vec<usize> {
    (0..string.len().saturating_sub(1))
        .filter(|&k| string[k] == rule.left && string[k + 1] == rule.right)
        .collect()
}

proptest! {
    #[test]
    fn prop_terminates_within_len_minus_one(
        system in arb_system(),
        input in "[ab]{0,12}",
    ) {
        let evaluation = evaluate(&system, &input).unwrap();
        prop_assert!(evaluation.steps.len() <= input.len().saturating_sub(1));
    }

    #[test]
    fn prop_each_step_shrinks_by_exactly_one(
        system in arb_system(),
        input in "[ab]{0,12}",
    ) {
        let evaluation = evaluate(&system, &input).unwrap();
        for (i, step) in evaluation.steps.iter().enumerate() {
            prop_assert_eq!(step.string.len(), input.len() - i);
        }
        prop_assert_eq!(
            evaluation.final_string.len(),
            input.len() - evaluation.steps.len()
        );
    }

    #[test]
    fn prop_selection_is_priority_first_then_leftmost(
        system in arb_system(),
        input in "[ab]{0,12}",
    ) {
        let evaluation = evaluate(&system, &input).unwrap();
        for step in &evaluation.steps {
            // no earlier rule matches anywhere
            for rule in &system.rules[..step.rule] {
                prop_assert!(matches_of(rule, &step.string).is_empty());
            }
            // the applied rule matches nowhere to the left
            let positions = matches_of(&system.rules[step.rule], &step.string);
            prop_assert_eq!(positions.first().copied(), Some(step.position));
        }
    }

    #[test]
    fn prop_final_string_is_stuck(
        system in arb_system(),
        input in "[ab]{0,12}",
    ) {
        let evaluation = evaluate(&system, &input).unwrap();
        for rule in &system.rules {
            prop_assert!(matches_of(rule, &evaluation.final_string).is_empty());
        }
    }

    #[test]
    fn prop_evaluation_is_deterministic(
        system in arb_system(),
        input in "[ab]{0,12}",
    ) {
        let first = evaluate(&system, &input).unwrap();
        let second = evaluate(&system, &input).unwrap();
        prop_assert_eq!(first, second);
    }
}
