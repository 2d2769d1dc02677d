//! Parser for pairing system descriptions
//!
//! Consumes the token stream produced by the lexer under the fixed
//! four-section grammar:
//!
//! ```text
//! system  := !sigma: charset !gamma: charset !rules: ruleset !accept: charset
//! charset := symbol* <end of line>
//! ruleset := rule* '.'
//! rule    := '[' symbol ',' symbol -> symbol ']'
//! ```
//!
//! Sections are mandatory and appear exactly in that order. The output
//! is a validated [`PairingSystem`] or the first error encountered.

pub mod system;


use tracing::debug;

use super::lexer::{Keyword, Lexer, SyntaxError, Token};
use system::{is_subset, PairingSystem, Rule, Symbol};

/// Structurally well-formed description that violates a system
/// invariant.
#[derive(Debug, thiserror::Error)]
pub enum SemanticError {
    #[error("empty alphabet")]
    EmptyAlphabet,
    #[error("gamma must extend sigma")]
    GammaNotSuperset,
    #[error("only symbols in gamma can be used in rules, found '{symbol}'")]
    RuleSymbolOutsideGamma { symbol: Symbol },
    #[error("accept set must be within gamma")]
    AcceptOutsideGamma,
}

/// Any failure while parsing a description. Both kinds abort the parse
/// immediately; no partial system is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// Parse a complete description into a validated pairing system.
pub fn parse(source: &str) -> Result<PairingSystem, ParseError> {
    Parser::new(source).parse_system()
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
        }
    }

    fn parse_system(mut self) -> Result<PairingSystem, ParseError> {
        self.expect(Token::Keyword(Keyword::Sigma))?;
        let sigma = self.parse_charset(false)?;
        debug!(symbols = sigma.len(), "parsed sigma");
        if sigma.is_empty() {
            return Err(SemanticError::EmptyAlphabet.into());
        }

        self.expect(Token::Keyword(Keyword::Gamma))?;
        let gamma = self.parse_charset(false)?;
        debug!(symbols = gamma.len(), "parsed gamma");
        if !is_subset(&sigma, &gamma) {
            return Err(SemanticError::GammaNotSuperset.into());
        }

        self.expect(Token::Keyword(Keyword::Rules))?;
        let rules = self.parse_rules(&gamma)?;
        debug!(rules = rules.len(), "parsed ruleset");

        self.expect(Token::Keyword(Keyword::Accept))?;
        let accept = self.parse_charset(true)?;
        debug!(symbols = accept.len(), "parsed accept set");
        if !is_subset(&accept, &gamma) {
            return Err(SemanticError::AcceptOutsideGamma.into());
        }

        Ok(PairingSystem {
            sigma,
            gamma,
            rules,
            accept,
        })
    }

    fn expect(
        &mut self,
        expected: Token,
    ) -> Result<(), SyntaxError> {
        let found = self.lexer.next_token(false)?;
        if found != expected {
            return Err(SyntaxError::Expected { expected, found });
        }
        Ok(())
    }

    /// Read symbols up to the end of the line (or of the input).
    fn parse_charset(
        &mut self,
        allow_epsilon: bool,
    ) -> Result<Vec<Symbol>, ParseError> {
        let mut charset = Vec::new();
        loop {
            match self.lexer.next_token(true)? {
                Token::LineEnd | Token::Eof => break,
                Token::Epsilon if allow_epsilon => charset.push(Symbol::Epsilon),
                Token::Char(c) if Symbol::is_valid_char(c) => charset.push(Symbol::Char(c)),
                token => return Err(SyntaxError::InvalidSymbol { token }.into()),
            }
        }
        Ok(charset)
    }

    /// Read bracketed rule triples until the terminating `.`.
    fn parse_rules(
        &mut self,
        gamma: &[Symbol],
    ) -> Result<Vec<Rule>, ParseError> {
        let mut rules: Vec<Rule> = Vec::new();
        loop {
            let token = self.lexer.next_token(false)?;
            match token {
                Token::Char('.') => break,
                // rules may be separated by a comma
                Token::Char(',') if !rules.is_empty() => continue,
                Token::Char('[') => {}
                found => {
                    return Err(SyntaxError::Expected {
                        expected: Token::Char('['),
                        found,
                    }
                    .into())
                }
            }

            let left = self.rule_symbol(gamma)?;
            self.expect(Token::Char(','))?;
            let right = self.rule_symbol(gamma)?;
            self.expect(Token::Arrow)?;
            let replacement = self.rule_symbol(gamma)?;
            self.expect(Token::Char(']'))?;

            rules.push(Rule {
                left,
                right,
                replacement,
            });
        }
        Ok(rules)
    }

    /// A single symbol inside a rule; must be a member of gamma.
    fn rule_symbol(
        &mut self,
        gamma: &[Symbol],
    ) -> Result<Symbol, ParseError> {
        let symbol = match self.lexer.next_token(false)? {
            Token::Char(c) if Symbol::is_valid_char(c) => Symbol::Char(c),
            token => return Err(SyntaxError::InvalidSymbol { token }.into()),
        };
        if !gamma.contains(&symbol) {
            return Err(SemanticError::RuleSymbolOutsideGamma { symbol }.into());
        }
        Ok(symbol)
    }
}
