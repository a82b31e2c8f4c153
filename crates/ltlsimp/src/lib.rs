//! ltlsimp - simplification of Linear Temporal Logic formulas
//!
//! This is the top-level umbrella crate that re-exports the ltlsimp components.
//!
//! # Architecture
//!
//! - **Core**: `ir` (formula model, rewrite rules, simplifier, lasso semantics)
//! - **Front end**: `parser` (textual syntax)
//!
//! ```rust
//! use ltlsimp::{parse, simplify_str, Strategy};
//!
//! let simplified = simplify_str("G (F (X b))", Strategy::PullupX).unwrap();
//! assert_eq!(simplified, parse("X (G (F b))").unwrap());
//! ```

pub use ltlsimp_ir as ir;
pub use ltlsimp_parser as parser;

pub use ltlsimp_ir::{simplify, Formula, SimplificationMetrics, Simplifier, Strategy};
pub use ltlsimp_parser::{parse, ParseError};

/// Parse `input` and simplify it with `strategy`.
pub fn simplify_str(input: &str, strategy: Strategy) -> Result<Formula, ParseError> {
    parse(input).map(|formula| simplify(&formula, strategy))
}
