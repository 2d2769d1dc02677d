//! Evaluation integration tests
//!
//! Parse a description and evaluate inputs through the public API.

use pairsys::{evaluate, parse_system, InputError, Symbol, Verdict};

const BASIC: &str = "!sigma: a b\n!gamma: a b c\n!rules: [a,b -> c].\n!accept: c\n";

#[test]
fn test_accepting_run() {
    let system = parse_system(BASIC).unwrap();
    let evaluation = evaluate(&system, "ab").unwrap();
    assert_eq!(evaluation.steps.len(), 1);
    assert_eq!(evaluation.result, Symbol::Char('c'));
    assert_eq!(evaluation.verdict, Verdict::Accepted);
}

#[test]
fn test_empty_input_rejected_when_epsilon_not_accepted() {
    let system = parse_system(BASIC).unwrap();
    let evaluation = evaluate(&system, "").unwrap();
    assert_eq!(evaluation.result, Symbol::Epsilon);
    assert_eq!(evaluation.verdict, Verdict::Rejected);
}

#[test]
fn test_one_system_serves_many_evaluations() {
    let system = parse_system(BASIC).unwrap();
    for input in ["ab", "ba", "", "aabb", "ab"] {
        let _ = evaluate(&system, input).unwrap();
    }
    // the system is untouched by evaluation
    let again = parse_system(BASIC).unwrap();
    assert_eq!(system, again);
}

#[test]
fn test_cascading_reduction() {
    let source = "!sigma: a b\n!gamma: a b c\n!rules: [a,b -> c], [a,c -> c], [c,b -> c].\n!accept: c\n";
    let system = parse_system(source).unwrap();
    let evaluation = evaluate(&system, "aabb").unwrap();
    assert_eq!(evaluation.steps.len(), 3);
    assert_eq!(evaluation.final_string, vec![Symbol::Char('c')]);
    assert_eq!(evaluation.verdict, Verdict::Accepted);
}

#[test]
fn test_input_outside_sigma_is_reported_not_evaluated() {
    let system = parse_system(BASIC).unwrap();
    let err = evaluate(&system, "abc").unwrap_err();
    // 'c' is in gamma but not in sigma
    assert!(matches!(err, InputError::NotOverSigma { ch: 'c' }));
}

#[test]
fn test_trace_feeds_display_layer() {
    let system = parse_system(BASIC).unwrap();
    let evaluation = evaluate(&system, "abab").unwrap();
    // every snapshot carries the matched position for highlighting
    for step in &evaluation.steps {
        assert!(step.position + 2 <= step.string.len());
    }
}
