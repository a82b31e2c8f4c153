//! Rewrite rules and the groups strategies are assembled from.

use super::{modal, propositional, pullup, subsumption};
use crate::formula::Formula;

/// Attempts to rewrite the root of a formula, returning `Some(result)` when the
/// rule applies.
pub type TransformFn = fn(&Formula) -> Option<Formula>;

/// A named, equivalence-preserving local rewrite.
#[derive(Clone, Copy)]
pub struct RewriteRule {
    /// Name used in metrics and logs
    pub name: &'static str,
    /// Short statement of the law
    pub description: &'static str,
    pub transform: TransformFn,
}

impl RewriteRule {
    pub const fn new(name: &'static str, description: &'static str, transform: TransformFn) -> Self {
        Self {
            name,
            description,
            transform,
        }
    }

    /// Apply the rule at the root of `formula`.
    ///
    /// A result equal to the input counts as not applying.
    pub fn apply(&self, formula: &Formula) -> Option<Formula> {
        (self.transform)(formula).filter(|result| result != formula)
    }
}

impl std::fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteRule")
            .field("name", &self.name)
            .finish()
    }
}

pub const PROPOSITIONAL_RULES: &[RewriteRule] = &[
    RewriteRule::new(
        "fold_constants",
        "true/false absorb or vanish in junctions; !true = false",
        propositional::fold_constants,
    ),
    RewriteRule::new(
        "double_negation",
        "!!a = a",
        propositional::double_negation,
    ),
    RewriteRule::new(
        "negate_leaf",
        "!p becomes a negated literal; !(x op y) = x negate(op) y",
        propositional::negate_leaf,
    ),
    RewriteRule::new(
        "complementary_operands",
        "a & !a = false; a | !a = true",
        propositional::complementary_operands,
    ),
];

pub const MODAL_RULES: &[RewriteRule] = &[
    RewriteRule::new(
        "push_negation",
        "De Morgan and the X/G/F/U/R dualities",
        modal::push_negation,
    ),
    RewriteRule::new(
        "temporal_constants",
        "temporal operators over true/false",
        modal::temporal_constants,
    ),
    RewriteRule::new(
        "temporal_idempotence",
        "FF a = F a; GG a = G a; a U a = a; suffix-invariant operands",
        modal::temporal_idempotence,
    ),
    RewriteRule::new(
        "merge_temporal",
        "G a & G b = G (a & b); F a | F b = F (a | b); X distributes",
        modal::merge_temporal,
    ),
];

pub const SUBSUMPTION_RULES: &[RewriteRule] = &[
    RewriteRule::new(
        "drop_implied_conjunct",
        "a & b = a when a implies b",
        subsumption::drop_implied_conjunct,
    ),
    RewriteRule::new(
        "drop_implying_disjunct",
        "a | b = b when a implies b",
        subsumption::drop_implying_disjunct,
    ),
    RewriteRule::new(
        "contextual_absorption",
        "a & (b | (a & c)) = a & (b | c)",
        subsumption::contextual_absorption,
    ),
    RewriteRule::new(
        "subsumed_until_release",
        "a U b = b when a implies b; F (a U b) = F b",
        subsumption::subsumed_until_release,
    ),
];

pub const PULLUP_RULES: &[RewriteRule] = &[RewriteRule::new(
    "pullup_next",
    "X commutes with !, G, F, U, R, & and |",
    pullup::pullup_next,
)];
