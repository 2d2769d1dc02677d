//! Token definitions for the description language

use std::fmt;

/// Section keywords, spelled `!word:` in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Sigma,
    Gamma,
    Rules,
    Accept,
}

impl fmt::Display for Keyword {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Keyword::Sigma => write!(f, "!sigma:"),
            Keyword::Gamma => write!(f, "!gamma:"),
            Keyword::Rules => write!(f, "!rules:"),
            Keyword::Accept => write!(f, "!accept:"),
        }
    }
}

/// One atomic token of a description.
///
/// Structural punctuation (`[`, `]`, `,`, `.`) is carried as a plain
/// [`Token::Char`]; whether a character is acceptable as a symbol is
/// decided by the parser, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A single literal character (candidate symbol or punctuation).
    Char(char),
    /// The rewrite arrow `->`.
    Arrow,
    /// A section keyword such as `!sigma:`.
    Keyword(Keyword),
    /// The empty-string literal `!eps`.
    Epsilon,
    /// End of line, only produced in line-delimited mode.
    LineEnd,
    /// End of input.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Token::Char(c) => write!(f, "{c}"),
            Token::Arrow => write!(f, "->"),
            Token::Keyword(kw) => write!(f, "{kw}"),
            Token::Epsilon => write!(f, "!eps"),
            Token::LineEnd => write!(f, "end of line"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
