//! # ltlsimp parser
//!
//! Reads the textual LTL syntax into [`Formula`] values.
//!
//! ```text
//! formula  := formula '<->' formula | formula '->' formula
//!           | formula '|' formula   | formula '&' formula
//!           | formula ('U' | 'R' | 'W' | 'M') formula
//!           | ('!' | 'X' | 'G' | 'F') formula
//!           | 'true' | 'false' | ident | term cmp term | '(' formula ')'
//! term     := int | ident | '-' term | term ('+' | '-' | '*') term | '(' term ')'
//! cmp      := '<=' | '<' | '>=' | '>'
//! ```
//!
//! `W`, `M`, `->` and `<->` have no node of their own and are rewritten into
//! the core connectives while parsing.
//!
//! ```rust
//! use ltlsimp_parser::parse;
//!
//! let f = parse("G (r | (p & r))").unwrap();
//! assert_eq!(f.to_string(), "G (r | (p & r))");
//!
//! assert!(parse("a U").is_err());
//! ```

mod error;
mod lexer;
mod parser;

pub use error::ParseError;
pub use parser::MAX_NESTING;

use ltlsimp_ir::Formula;
use tracing::trace;

/// Parse a single formula.
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    let tokens = lexer::tokenize(input)?;
    trace!(tokens = tokens.len(), "tokenized formula");
    parser::Parser::new(tokens).parse_formula()
}
