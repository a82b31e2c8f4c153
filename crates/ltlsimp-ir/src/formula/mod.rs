//! LTL formulas.
//!
//! [`Formula`] is an immutable tree. Children of unary and binary nodes are held in
//! [`Arc`], so cloning a formula or rebuilding a node around unchanged children
//! shares the untouched sub-trees, and formulas can be handed to other threads.
//!
//! The n-ary connectives keep their operands in a [`BTreeSet`]: duplicates are
//! removed and the operand order is canonical, so equality and hashing of
//! conjunctions and disjunctions are set-based. The smart constructors
//! ([`Formula::and`], [`Formula::or`]) additionally flatten nested connectives of
//! the same kind and collapse zero or one operands, so every formula built through
//! them satisfies the invariants checked by [`Formula::validate`].

mod analysis;
mod repr;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::comp_op::CompOperator;
use crate::error::IrError;
use crate::term::Term;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "repr::FormulaRepr")]
pub enum Formula {
    /// `true` / `false`
    Const(bool),
    /// Atomic proposition, possibly negated.
    Literal { name: String, negated: bool },
    /// Numeric constraint `left op right`.
    Atom {
        left: Term,
        op: CompOperator,
        right: Term,
    },
    Not(Arc<Formula>),
    /// `X φ`
    Next(Arc<Formula>),
    /// `G φ`
    Globally(Arc<Formula>),
    /// `F φ`
    Finally(Arc<Formula>),
    /// `φ U ψ`
    Until(Arc<Formula>, Arc<Formula>),
    /// `φ R ψ`
    Release(Arc<Formula>, Arc<Formula>),
    And(Arc<BTreeSet<Formula>>),
    Or(Arc<BTreeSet<Formula>>),
}

impl Formula {
    pub const TRUE: Formula = Formula::Const(true);
    pub const FALSE: Formula = Formula::Const(false);

    pub fn constant(value: bool) -> Self {
        Formula::Const(value)
    }

    pub fn literal(name: impl Into<String>) -> Self {
        Formula::Literal {
            name: name.into(),
            negated: false,
        }
    }

    pub fn negated_literal(name: impl Into<String>) -> Self {
        Formula::Literal {
            name: name.into(),
            negated: true,
        }
    }

    pub fn atom(left: Term, op: CompOperator, right: Term) -> Self {
        Formula::Atom { left, op, right }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Formula) -> Self {
        Formula::Not(Arc::new(operand))
    }

    pub fn next(operand: Formula) -> Self {
        Formula::Next(Arc::new(operand))
    }

    /// `X^n φ`; `next_n(0, φ)` is `φ`.
    pub fn next_n(n: usize, operand: Formula) -> Self {
        (0..n).fold(operand, |acc, _| Formula::next(acc))
    }

    pub fn globally(operand: Formula) -> Self {
        Formula::Globally(Arc::new(operand))
    }

    pub fn finally(operand: Formula) -> Self {
        Formula::Finally(Arc::new(operand))
    }

    pub fn until(left: Formula, right: Formula) -> Self {
        Formula::Until(Arc::new(left), Arc::new(right))
    }

    pub fn release(left: Formula, right: Formula) -> Self {
        Formula::Release(Arc::new(left), Arc::new(right))
    }

    /// Conjunction of `operands`: flattened, deduplicated, `true` when empty and
    /// the operand itself when there is exactly one.
    pub fn and<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = Formula>,
    {
        Self::junction(operands, true)
    }

    /// Disjunction of `operands`: flattened, deduplicated, `false` when empty and
    /// the operand itself when there is exactly one.
    pub fn or<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = Formula>,
    {
        Self::junction(operands, false)
    }

    fn junction<I>(operands: I, conjunctive: bool) -> Self
    where
        I: IntoIterator<Item = Formula>,
    {
        let mut set = BTreeSet::new();
        for operand in operands {
            match operand {
                Formula::And(inner) if conjunctive => set.extend(inner.iter().cloned()),
                Formula::Or(inner) if !conjunctive => set.extend(inner.iter().cloned()),
                other => {
                    set.insert(other);
                }
            }
        }

        if set.len() > 1 {
            return if conjunctive {
                Formula::And(Arc::new(set))
            } else {
                Formula::Or(Arc::new(set))
            };
        }
        set.pop_first().unwrap_or(Formula::Const(conjunctive))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Formula::Const(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Formula::Const(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Formula::Const(false))
    }

    /// Operands of a conjunction or disjunction.
    pub fn operands(&self) -> Option<&BTreeSet<Formula>> {
        match self {
            Formula::And(ops) | Formula::Or(ops) => Some(ops),
            _ => None,
        }
    }

    /// Immediate sub-formulas, in canonical order.
    pub fn children(&self) -> Vec<&Formula> {
        match self {
            Formula::Const(_) | Formula::Literal { .. } | Formula::Atom { .. } => Vec::new(),
            Formula::Not(e) | Formula::Next(e) | Formula::Globally(e) | Formula::Finally(e) => {
                vec![e.as_ref()]
            }
            Formula::Until(l, r) | Formula::Release(l, r) => vec![l.as_ref(), r.as_ref()],
            Formula::And(ops) | Formula::Or(ops) => ops.iter().collect(),
        }
    }

    /// Syntactic complement of a leaf or of a negation.
    ///
    /// Returns `Some(ψ)` only where `ψ` is equivalent to `¬self` without further
    /// rewriting: flipped constants and literals, atoms with the negated operator,
    /// and the operand of a [`Formula::Not`].
    pub fn complement(&self) -> Option<Formula> {
        match self {
            Formula::Const(value) => Some(Formula::Const(!value)),
            Formula::Literal { name, negated } => Some(Formula::Literal {
                name: name.clone(),
                negated: !negated,
            }),
            Formula::Atom { left, op, right } => Some(Formula::Atom {
                left: left.clone(),
                op: op.negate(),
                right: right.clone(),
            }),
            Formula::Not(inner) => Some(inner.as_ref().clone()),
            Formula::Next(_)
            | Formula::Globally(_)
            | Formula::Finally(_)
            | Formula::Until(_, _)
            | Formula::Release(_, _)
            | Formula::And(_)
            | Formula::Or(_) => None,
        }
    }

    /// Whether the truth of this formula is the same on a word and on all of its
    /// suffixes (`GF φ`, `FG φ`, constants and Boolean/temporal combinations of
    /// those). For such a formula `X φ`, `F φ` and `G φ` are all equivalent to `φ`.
    pub fn is_suffix_invariant(&self) -> bool {
        match self {
            Formula::Const(_) => true,
            Formula::Literal { .. } | Formula::Atom { .. } => false,
            Formula::Globally(inner) => {
                matches!(inner.as_ref(), Formula::Finally(_)) || inner.is_suffix_invariant()
            }
            Formula::Finally(inner) => {
                matches!(inner.as_ref(), Formula::Globally(_)) || inner.is_suffix_invariant()
            }
            Formula::Not(inner) | Formula::Next(inner) => inner.is_suffix_invariant(),
            Formula::Until(l, r) | Formula::Release(l, r) => {
                l.is_suffix_invariant() && r.is_suffix_invariant()
            }
            Formula::And(ops) | Formula::Or(ops) => ops.iter().all(Formula::is_suffix_invariant),
        }
    }

    /// Check the structural invariants the smart constructors guarantee.
    ///
    /// Formulas assembled directly from enum variants bypass the constructors;
    /// this reports the first violation found.
    pub fn validate(&self) -> Result<(), IrError> {
        match self {
            Formula::Const(_) | Formula::Literal { .. } | Formula::Atom { .. } => Ok(()),
            Formula::Not(e) | Formula::Next(e) | Formula::Globally(e) | Formula::Finally(e) => {
                e.validate()
            }
            Formula::Until(l, r) | Formula::Release(l, r) => {
                l.validate()?;
                r.validate()
            }
            Formula::And(ops) | Formula::Or(ops) => {
                let conjunctive = matches!(self, Formula::And(_));
                if ops.len() < 2 {
                    return Err(IrError::InvariantViolation {
                        formula: self.to_string(),
                        reason: format!("junction with {} operand(s)", ops.len()),
                    });
                }
                for op in ops.iter() {
                    let nested = match op {
                        Formula::And(_) => conjunctive,
                        Formula::Or(_) => !conjunctive,
                        _ => false,
                    };
                    if nested {
                        return Err(IrError::InvariantViolation {
                            formula: self.to_string(),
                            reason: "junction directly nests a junction of the same kind"
                                .to_string(),
                        });
                    }
                    op.validate()?;
                }
                Ok(())
            }
        }
    }
}

impl Default for Formula {
    fn default() -> Self {
        Formula::TRUE
    }
}

impl From<bool> for Formula {
    fn from(value: bool) -> Self {
        Formula::Const(value)
    }
}
