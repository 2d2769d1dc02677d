//! Pairing system data model
//!
//! The validated output of the parser: the input alphabet Sigma, the
//! working alphabet Gamma, the ordered ruleset and the acceptance set.
//! A [`PairingSystem`] is immutable once built and can be shared
//! read-only across any number of evaluations.

use std::fmt;

/// A single symbol: one character from the restricted symbol set, or
/// the distinguished empty-string marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Char(char),
    Epsilon,
}

impl Symbol {
    /// Characters usable as bare symbols: ASCII letters, ASCII digits
    /// and `@ - . ( )`.
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '@' | '-' | '.' | '(' | ')')
    }
}

impl fmt::Display for Symbol {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Epsilon => write!(f, "!eps"),
        }
    }
}

/// A pairwise rewrite: the adjacent pair (left, right) may be replaced
/// by the single `replacement` symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub left: Symbol,
    pub right: Symbol,
    pub replacement: Symbol,
}

impl fmt::Display for Rule {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[{}, {} -> {}]", self.left, self.right, self.replacement)
    }
}

/// One parsed and validated rewriting automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingSystem {
    /// Input alphabet; non-empty, never contains Epsilon.
    pub sigma: Vec<Symbol>,
    /// Working alphabet; superset of sigma.
    pub gamma: Vec<Symbol>,
    /// Rewrite rules; declaration order decides priority.
    pub rules: Vec<Rule>,
    /// Acceptance set; subset of gamma plus Epsilon.
    pub accept: Vec<Symbol>,
}

/// Subset test between charsets. Epsilon is implicitly a member of
/// every superset, whether or not it was declared.
pub fn is_subset(
    subset: &[Symbol],
    superset: &[Symbol],
) -> bool {
    subset
        .iter()
        .all(|s| matches!(s, Symbol::Epsilon) || superset.contains(s))
}

fn write_charset(
    f: &mut fmt::Formatter<'_>,
    charset: &[Symbol],
) -> fmt::Result {
    write!(f, "{{ ")?;
    for (i, symbol) in charset.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{symbol}")?;
    }
    write!(f, " }}")
}

impl fmt::Display for PairingSystem {
    /// Renders the summary block shown after a successful parse.
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Sigma = ")?;
        write_charset(f, &self.sigma)?;
        write!(f, "\nGamma = ")?;
        write_charset(f, &self.gamma)?;
        writeln!(f, "\n    R = (")?;
        for rule in &self.rules {
            writeln!(f, "         {rule},")?;
        }
        writeln!(f, "        )")?;
        write!(f, "    A = ")?;
        write_charset(f, &self.accept)
    }
}
