//! Lexer for pairing system descriptions
//!
//! Turns a character stream into [`Token`]s. Comments (`#` through end
//! of line) and whitespace are consumed here and never reach the
//! parser. The single character of lookahead lives inside the lexer as
//! a `Peekable<Chars>`, so two descriptions can be lexed side by side
//! without interfering.

pub mod tokens;

use std::iter::Peekable;
use std::str::Chars;

pub use tokens::{Keyword, Token};

/// Malformed token stream or grammar violation.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("expected '>' after '-'")]
    BrokenArrow,
    #[error("expected ':' after '!{word}'")]
    MissingColon { word: String },
    #[error("unrecognized identifier '!{word}'")]
    UnknownKeyword { word: String },
    #[error("expected '{expected}', found '{found}'")]
    Expected { expected: Token, found: Token },
    #[error("'{token}' cannot be used as a symbol")]
    InvalidSymbol { token: Token },
}

/// Tokenizer over one description source.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
        }
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Produce the next token.
    ///
    /// With `stop_at_line_end` set, only intra-line whitespace is
    /// skipped and a newline comes back as [`Token::LineEnd`]; this is
    /// how one charset declaration is delimited. Otherwise all
    /// whitespace, newlines included, is transparent.
    pub fn next_token(
        &mut self,
        stop_at_line_end: bool,
    ) -> Result<Token, SyntaxError> {
        loop {
            if stop_at_line_end {
                while self.peek().is_some_and(|c| c.is_whitespace() && c != '\n') {
                    self.advance();
                }
                if self.peek() == Some('\n') {
                    self.advance();
                    return Ok(Token::LineEnd);
                }
            } else {
                while self.peek().is_some_and(char::is_whitespace) {
                    self.advance();
                }
            }

            if self.peek() == Some('#') {
                // A comment runs through its newline; in line-delimited
                // mode that newline still terminates the declaration.
                let mut saw_newline = false;
                while let Some(c) = self.advance() {
                    if c == '\n' {
                        saw_newline = true;
                        break;
                    }
                }
                if stop_at_line_end && saw_newline {
                    return Ok(Token::LineEnd);
                }
                continue;
            }

            break;
        }

        let Some(c) = self.advance() else {
            return Ok(Token::Eof);
        };

        match c {
            '-' => match self.advance() {
                Some('>') => Ok(Token::Arrow),
                _ => Err(SyntaxError::BrokenArrow),
            },
            '!' => self.scan_keyword(),
            c => Ok(Token::Char(c)),
        }
    }

    /// Scan the word after a `!`: either the `!eps` literal or a
    /// `!word:` section keyword.
    fn scan_keyword(&mut self) -> Result<Token, SyntaxError> {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            word.push(c);
            self.advance();
        }

        if word == "eps" {
            return Ok(Token::Epsilon);
        }

        if self.peek() != Some(':') {
            return Err(SyntaxError::MissingColon { word });
        }
        self.advance();

        match word.as_str() {
            "sigma" => Ok(Token::Keyword(Keyword::Sigma)),
            "gamma" => Ok(Token::Keyword(Keyword::Gamma)),
            "rules" => Ok(Token::Keyword(Keyword::Rules)),
            "accept" => Ok(Token::Keyword(Keyword::Accept)),
            _ => Err(SyntaxError::UnknownKeyword { word }),
        }
    }
}
