//! Boolean rewrites: constants, negation of leaves, complementary operands.

use crate::formula::Formula;

pub fn fold_constants(formula: &Formula) -> Option<Formula> {
    match formula {
        Formula::Not(inner) => inner.as_bool().map(|value| Formula::Const(!value)),
        Formula::And(ops) | Formula::Or(ops) => {
            let conjunctive = matches!(formula, Formula::And(_));
            // the absorbing element of And is false, of Or true
            if ops.iter().any(|op| op.as_bool() == Some(!conjunctive)) {
                return Some(Formula::Const(!conjunctive));
            }
            if !ops.iter().any(|op| op.as_bool().is_some()) {
                return None;
            }
            let rest = ops.iter().filter(|op| op.as_bool().is_none()).cloned();
            Some(if conjunctive {
                Formula::and(rest)
            } else {
                Formula::or(rest)
            })
        }
        _ => None,
    }
}

pub fn double_negation(formula: &Formula) -> Option<Formula> {
    match formula {
        Formula::Not(inner) => match inner.as_ref() {
            Formula::Not(operand) => Some(operand.as_ref().clone()),
            _ => None,
        },
        _ => None,
    }
}

pub fn negate_leaf(formula: &Formula) -> Option<Formula> {
    match formula {
        Formula::Not(inner) => match inner.as_ref() {
            Formula::Literal { .. } | Formula::Atom { .. } => inner.complement(),
            _ => None,
        },
        _ => None,
    }
}

pub fn complementary_operands(formula: &Formula) -> Option<Formula> {
    let ops = formula.operands()?;
    let clash = ops
        .iter()
        .filter_map(Formula::complement)
        .any(|complement| ops.contains(&complement));
    clash.then(|| Formula::Const(matches!(formula, Formula::Or(_))))
}
