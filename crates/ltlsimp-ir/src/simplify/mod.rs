//! Strategy-driven fixpoint simplification.
//!
//! A [`Strategy`] selects a list of [`RewriteRule`]s. The [`Simplifier`] applies
//! them in passes: each pass rebuilds the tree bottom-up, and at every node tries
//! the rules in order, replacing the node with the first rule's output until no
//! rule fires. A rule's output may carry fresh sub-terms (pushing a negation
//! creates new negations one level down); those children are simplified before
//! the rules are tried at the node again. Passes repeat until one leaves the tree
//! unchanged, which normally means a second pass only confirms the first.
//!
//! Every rule strictly decreases the lexicographic measure
//! (negation weight, node count, summed depth of Next nodes), which bounds the
//! number of firings. `max_passes` is a safety limit on top of that: it caps the
//! number of passes and, scaled by rule count and node size, the firings at any
//! one node.
//!
//! # Example
//!
//! ```rust
//! use ltlsimp_ir::{simplify, Formula, Strategy};
//!
//! let p0 = Formula::literal("p0");
//! let f = Formula::and([Formula::globally(p0.clone()), p0.clone()]);
//! assert_eq!(simplify(&f, Strategy::Aggressively), Formula::globally(p0));
//! ```

mod modal;
mod propositional;
mod pullup;
mod rules;
mod subsumption;

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::IrError;
use crate::formula::Formula;

pub use rules::{
    RewriteRule, TransformFn, MODAL_RULES, PROPOSITIONAL_RULES, PULLUP_RULES, SUBSUMPTION_RULES,
};
pub use subsumption::implies;

/// Which rule groups a simplification run uses.
///
/// `PullupX` is independent of the other strategies: it normalises the position
/// of Next and shares no rules with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Constant folding, double negation, leaf negation, complementary operands
    Propositional,
    /// Propositional rules plus negation pushing and temporal identities
    Modal,
    /// Float every Next towards the root
    PullupX,
    /// Modal rules plus propositional and temporal subsumption
    #[default]
    Aggressively,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Propositional,
        Strategy::Modal,
        Strategy::PullupX,
        Strategy::Aggressively,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Propositional => "propositional",
            Strategy::Modal => "modal",
            Strategy::PullupX => "pullup-x",
            Strategy::Aggressively => "aggressively",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Propositional => "Boolean constant folding and negation of leaves",
            Strategy::Modal => "propositional rules plus temporal dualities and identities",
            Strategy::PullupX => "move every X operator as far towards the root as possible",
            Strategy::Aggressively => "modal rules plus propositional and temporal subsumption",
        }
    }

    /// Rule groups in the order they are tried.
    pub fn groups(&self) -> &'static [&'static [RewriteRule]] {
        match self {
            Strategy::Propositional => &[PROPOSITIONAL_RULES],
            Strategy::Modal => &[PROPOSITIONAL_RULES, MODAL_RULES],
            Strategy::PullupX => &[PULLUP_RULES],
            Strategy::Aggressively => &[PROPOSITIONAL_RULES, MODAL_RULES, SUBSUMPTION_RULES],
        }
    }

    pub fn rules(&self) -> Vec<RewriteRule> {
        self.groups().iter().flat_map(|group| group.iter().copied()).collect()
    }
}

impl FromStr for Strategy {
    type Err = IrError;

    /// Accepts the kebab-case name in any case, with `_` in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| IrError::UnknownStrategy {
                name: s.to_string(),
                expected: Strategy::ALL.map(|strategy| strategy.name()).join(", "),
            })
    }
}

/// Configuration for a [`Simplifier`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifierConfig {
    pub strategy: Strategy,
    /// Upper bound on bottom-up passes
    pub max_passes: usize,
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_passes: 64,
        }
    }
}

impl SimplifierConfig {
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}

/// What a simplification run did.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplificationMetrics {
    pub strategy: Strategy,
    /// Number of bottom-up passes, including the final one that changed nothing
    pub passes: usize,
    /// Whether a fixpoint was reached within the pass limit
    pub converged: bool,
    /// Total number of rule firings
    pub rewrites: usize,
    /// Firings per rule name
    pub rule_counts: BTreeMap<String, usize>,
    pub initial_size: usize,
    pub final_size: usize,
    /// `1 - final_size / initial_size`
    pub reduction_ratio: f64,
}

impl SimplificationMetrics {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    fn record(&mut self, rule: &RewriteRule) {
        self.rewrites += 1;
        *self.rule_counts.entry(rule.name.to_string()).or_insert(0) += 1;
    }

    fn finalize(&mut self, initial_size: usize, final_size: usize) {
        self.initial_size = initial_size;
        self.final_size = final_size;
        self.reduction_ratio = if initial_size > 0 {
            1.0 - (final_size as f64 / initial_size as f64)
        } else {
            0.0
        };
    }
}

/// Applies a strategy's rules to a fixpoint.
#[derive(Clone, Debug, Default)]
pub struct Simplifier {
    config: SimplifierConfig,
}

impl Simplifier {
    pub fn new(config: SimplifierConfig) -> Self {
        Self { config }
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(SimplifierConfig::with_strategy(strategy))
    }

    pub fn config(&self) -> &SimplifierConfig {
        &self.config
    }

    /// Simplify `formula`, returning the result and metrics about the run.
    pub fn run(&self, formula: &Formula) -> (Formula, SimplificationMetrics) {
        let strategy = self.config.strategy;
        let rules = strategy.rules();
        let mut metrics = SimplificationMetrics::new(strategy);
        let initial_size = formula.size();
        let mut current = formula.clone();

        for pass in 1..=self.config.max_passes {
            metrics.passes = pass;
            let before = metrics.rewrites;
            let mut rewriter = Rewriter::new(&rules, self.config.max_passes, &mut metrics);
            let next = rewriter.rewrite(&current);
            let exhausted = rewriter.exhausted;
            debug!(
                strategy = strategy.name(),
                pass,
                rewrites = metrics.rewrites - before,
                size = next.size(),
                "simplification pass"
            );
            if next == current && !exhausted {
                metrics.converged = true;
                break;
            }
            current = next;
        }

        if !metrics.converged {
            warn!(
                strategy = strategy.name(),
                max_passes = self.config.max_passes,
                "simplification stopped at the pass limit before reaching a fixpoint"
            );
        }
        debug_assert!(current.validate().is_ok());

        metrics.finalize(initial_size, current.size());
        (current, metrics)
    }
}

/// Simplify `formula` with the default configuration for `strategy`.
pub fn simplify(formula: &Formula, strategy: Strategy) -> Formula {
    Simplifier::with_strategy(strategy).run(formula).0
}

/// One bottom-up pass.
///
/// Firings at a single node are capped at `max_passes` times the rule count
/// times the node's size; a node that hits the cap is left as it is and the
/// pass is marked `exhausted`, so it never counts as a fixpoint.
struct Rewriter<'a> {
    rules: &'a [RewriteRule],
    max_passes: usize,
    metrics: &'a mut SimplificationMetrics,
    exhausted: bool,
}

impl<'a> Rewriter<'a> {
    fn new(
        rules: &'a [RewriteRule],
        max_passes: usize,
        metrics: &'a mut SimplificationMetrics,
    ) -> Self {
        Self {
            rules,
            max_passes,
            metrics,
            exhausted: false,
        }
    }

    fn rewrite(&mut self, formula: &Formula) -> Formula {
        let mut current = rebuild(formula, |child| self.rewrite(child));
        let limit = self
            .max_passes
            .saturating_mul(self.rules.len())
            .saturating_mul(current.size());
        let mut firings = 0;

        'fixpoint: loop {
            for rule in self.rules {
                if let Some(next) = rule.apply(&current) {
                    if firings >= limit {
                        self.exhausted = true;
                        warn!(node = %current, firings, "firing limit reached at a single node");
                        return current;
                    }
                    trace!(rule = rule.name, from = %current, to = %next, "rewrite");
                    self.metrics.record(rule);
                    firings += 1;
                    current = rebuild(&next, |child| self.rewrite(child));
                    continue 'fixpoint;
                }
            }
            return current;
        }
    }
}

/// Rebuild `formula` from `f` applied to its children through the smart
/// constructors; an untouched node is returned as a cheap clone.
fn rebuild(formula: &Formula, mut f: impl FnMut(&Formula) -> Formula) -> Formula {
    fn unary(e: &Arc<Formula>, f: &mut impl FnMut(&Formula) -> Formula) -> Option<Formula> {
        let new = f(e.as_ref());
        (new != **e).then_some(new)
    }

    match formula {
        Formula::Const(_) | Formula::Literal { .. } | Formula::Atom { .. } => formula.clone(),
        Formula::Not(e) => unary(e, &mut f).map_or_else(|| formula.clone(), Formula::not),
        Formula::Next(e) => unary(e, &mut f).map_or_else(|| formula.clone(), Formula::next),
        Formula::Globally(e) => unary(e, &mut f).map_or_else(|| formula.clone(), Formula::globally),
        Formula::Finally(e) => unary(e, &mut f).map_or_else(|| formula.clone(), Formula::finally),
        Formula::Until(l, r) | Formula::Release(l, r) => {
            let (new_l, new_r) = (f(l.as_ref()), f(r.as_ref()));
            if new_l == **l && new_r == **r {
                return formula.clone();
            }
            if matches!(formula, Formula::Until(_, _)) {
                Formula::until(new_l, new_r)
            } else {
                Formula::release(new_l, new_r)
            }
        }
        Formula::And(ops) | Formula::Or(ops) => {
            let new: Vec<Formula> = ops.iter().map(&mut f).collect();
            if new.iter().eq(ops.iter()) {
                return formula.clone();
            }
            if matches!(formula, Formula::And(_)) {
                Formula::and(new)
            } else {
                Formula::or(new)
            }
        }
    }
}
