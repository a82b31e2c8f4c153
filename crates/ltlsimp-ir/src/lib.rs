//! # ltlsimp IR
//!
//! **Formula representation and simplification engine for Linear Temporal Logic**
//!
//! This crate holds everything below the parser: the LTL formula tree, the
//! equivalence-preserving rewrite rules, the strategy-driven fixpoint simplifier
//! and a reference semantics used to check that the rules are sound.
//!
//! ## Core Components
//!
//! ### Formulas ([`Formula`])
//! An immutable tree with shared children:
//! - **Leaves**: Boolean constants, atomic propositions (possibly negated) and
//!   numeric constraints `term op term` ([`Term`], [`CompOperator`])
//! - **Unary**: negation, Next (`X`), Globally (`G`), Finally (`F`)
//! - **Binary**: Until (`U`), Release (`R`)
//! - **N-ary**: conjunction and disjunction over a set of operands, flattened and
//!   deduplicated by the smart constructors
//!
//! ### Simplification ([`Simplifier`], [`simplify`])
//! - [`Strategy`] selects a rule set: `propositional`, `modal`, `aggressively`
//!   or `pullup-x`
//! - Rules are applied bottom-up and repeated to a fixpoint
//! - [`SimplificationMetrics`] records passes and per-rule firing counts
//!
//! ### Semantics ([`Lasso`])
//! Exact evaluation on ultimately periodic words `prefix · cycle^ω`, with
//! [`bounded_lassos`] enumerating every small word over a set of propositions.
//!
//! ## Quick Start
//!
//! ```rust
//! use ltlsimp_ir::{simplify, Formula, Strategy};
//!
//! // G (r | (p & r))
//! let r = Formula::literal("r");
//! let f = Formula::globally(Formula::or([
//!     r.clone(),
//!     Formula::and([Formula::literal("p"), r.clone()]),
//! ]));
//!
//! let simplified = simplify(&f, Strategy::Aggressively);
//! assert_eq!(simplified, Formula::globally(r));
//! assert_eq!(simplified.to_string(), "G r");
//! ```

mod comp_op;
mod display;
mod error;
mod formula;
pub mod semantics;
pub mod simplify;
mod term;


pub use comp_op::CompOperator;
pub use error::IrError;
pub use formula::Formula;
pub use semantics::{bounded_lassos, find_disagreement, Lasso, State};
pub use simplify::{
    implies, simplify, RewriteRule, SimplificationMetrics, Simplifier, SimplifierConfig, Strategy,
};
pub use term::Term;
