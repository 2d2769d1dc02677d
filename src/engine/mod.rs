//! Rewrite evaluation engine
//!
//! Reduces an input string under a parsed [`PairingSystem`] by
//! repeatedly applying the highest-priority applicable rule until no
//! rule matches, then decides membership against the acceptance set.
//!
//! Rule selection is priority-first: the ruleset is scanned in
//! declaration order, the first rule that matches anywhere wins, and
//! among that rule's match positions the leftmost one is taken. A rule
//! listed earlier beats a later rule even when the later rule matches
//! further to the left.

use tracing::debug;

use crate::frontend::parser::system::{PairingSystem, Rule, Symbol};

/// Input rejected before evaluation: not a string over sigma. This is
/// user-input validation, not a system fault; callers report it and
/// move on to the next input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input string not valid: must have sigma as alphabet (found '{ch}')")]
    NotOverSigma { ch: char },
}

/// One reduction step: the working string as it looked before the
/// step, plus which rule fired and where. The position feeds the
/// display layer's pair highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub string: Vec<Symbol>,
    pub rule: usize,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// The observable result of evaluating one input: the full reduction
/// trace, the irreducible final string, the residual symbol and the
/// verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub steps: Vec<Step>,
    pub final_string: Vec<Symbol>,
    /// Epsilon for an empty final string, otherwise its first symbol.
    pub result: Symbol,
    pub verdict: Verdict,
}

impl Evaluation {
    pub fn accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }
}

/// Render a working string as plain text.
pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(ToString::to_string).collect()
}

/// Find the next reduction: the highest-priority rule matching
/// anywhere in the string, at its leftmost match position.
fn select_rule(
    string: &[Symbol],
    rules: &[Rule],
) -> Option<(usize, usize)> {
    if string.len() < 2 {
        return None;
    }
    for (index, rule) in rules.iter().enumerate() {
        for k in 0..string.len() - 1 {
            if string[k] == rule.left && string[k + 1] == rule.right {
                return Some((index, k));
            }
        }
    }
    None
}

/// Evaluate one input string against the system.
///
/// The working string is owned by this call alone; the system itself
/// is only read, so one system can serve any number of evaluations.
/// Every applied rule shrinks the string by one symbol, so reduction
/// always terminates within `input.len() - 1` steps.
pub fn evaluate(
    system: &PairingSystem,
    input: &str,
) -> Result<Evaluation, InputError> {
    for ch in input.chars() {
        if !system.sigma.contains(&Symbol::Char(ch)) {
            return Err(InputError::NotOverSigma { ch });
        }
    }

    let mut string: Vec<Symbol> = input.chars().map(Symbol::Char).collect();
    let mut steps = Vec::new();

    while let Some((rule, position)) = select_rule(&string, &system.rules) {
        steps.push(Step {
            string: string.clone(),
            rule,
            position,
        });
        let replacement = system.rules[rule].replacement;
        string.splice(position..position + 2, [replacement]);
        debug!(
            step = steps.len(),
            rule,
            position,
            string = %render(&string),
            "applied rule"
        );
    }

    // An empty string reduces to Epsilon; otherwise only the first
    // symbol is inspected, even when the string got stuck with more
    // than one symbol left.
    let result = string.first().copied().unwrap_or(Symbol::Epsilon);
    let verdict = if system.accept.contains(&result) {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    };

    Ok(Evaluation {
        steps,
        final_string: string,
        result,
        verdict,
    })
}
