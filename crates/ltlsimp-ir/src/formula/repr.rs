//! Deserialisation shape of [`Formula`].
//!
//! Mirrors the serialised form of [`Formula`] but rebuilds every node through the
//! smart constructors, so a decoded tree is flattened and deduplicated even when
//! the input was written by hand.

use serde::Deserialize;

use super::Formula;
use crate::comp_op::CompOperator;
use crate::term::Term;

#[derive(Deserialize)]
pub(super) enum FormulaRepr {
    Const(bool),
    Literal {
        name: String,
        negated: bool,
    },
    Atom {
        left: Term,
        op: CompOperator,
        right: Term,
    },
    Not(Box<FormulaRepr>),
    Next(Box<FormulaRepr>),
    Globally(Box<FormulaRepr>),
    Finally(Box<FormulaRepr>),
    Until(Box<FormulaRepr>, Box<FormulaRepr>),
    Release(Box<FormulaRepr>, Box<FormulaRepr>),
    And(Vec<FormulaRepr>),
    Or(Vec<FormulaRepr>),
}

impl From<FormulaRepr> for Formula {
    fn from(repr: FormulaRepr) -> Self {
        match repr {
            FormulaRepr::Const(value) => Formula::Const(value),
            FormulaRepr::Literal { name, negated } => Formula::Literal { name, negated },
            FormulaRepr::Atom { left, op, right } => Formula::Atom { left, op, right },
            FormulaRepr::Not(e) => Formula::not((*e).into()),
            FormulaRepr::Next(e) => Formula::next((*e).into()),
            FormulaRepr::Globally(e) => Formula::globally((*e).into()),
            FormulaRepr::Finally(e) => Formula::finally((*e).into()),
            FormulaRepr::Until(l, r) => Formula::until((*l).into(), (*r).into()),
            FormulaRepr::Release(l, r) => Formula::release((*l).into(), (*r).into()),
            FormulaRepr::And(ops) => Formula::and(ops.into_iter().map(Formula::from)),
            FormulaRepr::Or(ops) => Formula::or(ops.into_iter().map(Formula::from)),
        }
    }
}
