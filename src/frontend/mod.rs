//! Frontend: lexing and parsing of pairing system descriptions

pub mod lexer;
pub mod parser;

pub use lexer::SyntaxError;
pub use parser::system::{PairingSystem, Rule, Symbol};
pub use parser::{parse, ParseError, SemanticError};
