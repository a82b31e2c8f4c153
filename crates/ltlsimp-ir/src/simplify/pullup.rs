//! Floating `X` towards the root.
//!
//! Next commutes with every other connective, so `G (F (X b))` is rewritten to
//! `X (G (F b))`. Applied bottom-up to a fixpoint this leaves each Next chain as
//! high in the tree as the surrounding operators allow.

use super::modal::next_operand;
use crate::formula::Formula;

pub fn pullup_next(formula: &Formula) -> Option<Formula> {
    match formula {
        Formula::Not(e) => next_operand(e).map(|x| Formula::next(Formula::not(x.clone()))),
        Formula::Globally(e) => next_operand(e).map(|x| Formula::next(Formula::globally(x.clone()))),
        Formula::Finally(e) => next_operand(e).map(|x| Formula::next(Formula::finally(x.clone()))),
        Formula::Until(l, r) => {
            let (l, r) = (next_operand(l)?, next_operand(r)?);
            Some(Formula::next(Formula::until(l.clone(), r.clone())))
        }
        Formula::Release(l, r) => {
            let (l, r) = (next_operand(l)?, next_operand(r)?);
            Some(Formula::next(Formula::release(l.clone(), r.clone())))
        }
        Formula::And(ops) | Formula::Or(ops) => {
            let inner = ops
                .iter()
                .map(|op| next_operand(op).cloned())
                .collect::<Option<Vec<_>>>()?;
            Some(Formula::next(if matches!(formula, Formula::And(_)) {
                Formula::and(inner)
            } else {
                Formula::or(inner)
            }))
        }
        Formula::Const(_) | Formula::Literal { .. } | Formula::Atom { .. } | Formula::Next(_) => {
            None
        }
    }
}
