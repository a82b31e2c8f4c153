//! Temporal rewrites: negation pushing, constants under temporal operators,
//! idempotence and merging of like operators.

use std::sync::Arc;

use crate::formula::Formula;

fn negated(formula: &Formula) -> Formula {
    formula
        .complement()
        .unwrap_or_else(|| Formula::not(formula.clone()))
}

pub fn push_negation(formula: &Formula) -> Option<Formula> {
    let Formula::Not(inner) = formula else {
        return None;
    };
    match inner.as_ref() {
        Formula::And(ops) => Some(Formula::or(ops.iter().map(negated))),
        Formula::Or(ops) => Some(Formula::and(ops.iter().map(negated))),
        Formula::Next(e) => Some(Formula::next(negated(e))),
        Formula::Globally(e) => Some(Formula::finally(negated(e))),
        Formula::Finally(e) => Some(Formula::globally(negated(e))),
        Formula::Until(l, r) => Some(Formula::release(negated(l), negated(r))),
        Formula::Release(l, r) => Some(Formula::until(negated(l), negated(r))),
        Formula::Const(_) | Formula::Literal { .. } | Formula::Atom { .. } | Formula::Not(_) => {
            None
        }
    }
}

pub fn temporal_constants(formula: &Formula) -> Option<Formula> {
    match formula {
        Formula::Next(e) | Formula::Globally(e) | Formula::Finally(e) => {
            e.as_bool().map(Formula::Const)
        }
        Formula::Until(l, r) => match (l.as_bool(), r.as_bool()) {
            (_, Some(value)) => Some(Formula::Const(value)),
            (Some(false), None) => Some(r.as_ref().clone()),
            (Some(true), None) => Some(Formula::Finally(Arc::clone(r))),
            (None, None) => None,
        },
        Formula::Release(l, r) => match (l.as_bool(), r.as_bool()) {
            (_, Some(value)) => Some(Formula::Const(value)),
            (Some(true), None) => Some(r.as_ref().clone()),
            (Some(false), None) => Some(Formula::Globally(Arc::clone(r))),
            (None, None) => None,
        },
        _ => None,
    }
}

pub fn temporal_idempotence(formula: &Formula) -> Option<Formula> {
    match formula {
        Formula::Finally(e) if matches!(e.as_ref(), Formula::Finally(_)) => {
            Some(e.as_ref().clone())
        }
        Formula::Globally(e) if matches!(e.as_ref(), Formula::Globally(_)) => {
            Some(e.as_ref().clone())
        }
        Formula::Next(e) | Formula::Globally(e) | Formula::Finally(e)
            if e.is_suffix_invariant() =>
        {
            Some(e.as_ref().clone())
        }
        Formula::Until(l, r) | Formula::Release(l, r) if l == r => Some(l.as_ref().clone()),
        _ => None,
    }
}

/// Combine the operands of a junction that share the head `pick` extracts,
/// wrapping the combined operand back with `wrap`.
fn merge_operands(
    ops: &std::collections::BTreeSet<Formula>,
    conjunctive: bool,
    pick: fn(&Formula) -> Option<&Formula>,
    wrap: fn(Formula) -> Formula,
) -> Option<Formula> {
    let (matching, rest): (Vec<&Formula>, Vec<&Formula>) =
        ops.iter().partition(|op| pick(*op).is_some());
    if matching.len() < 2 {
        return None;
    }
    let inner = matching.into_iter().filter_map(pick).cloned();
    let merged = if conjunctive {
        wrap(Formula::and(inner))
    } else {
        wrap(Formula::or(inner))
    };
    let operands = rest.into_iter().cloned().chain(std::iter::once(merged));
    Some(if conjunctive {
        Formula::and(operands)
    } else {
        Formula::or(operands)
    })
}

fn globally_operand(formula: &Formula) -> Option<&Formula> {
    match formula {
        Formula::Globally(e) => Some(e.as_ref()),
        _ => None,
    }
}

fn finally_operand(formula: &Formula) -> Option<&Formula> {
    match formula {
        Formula::Finally(e) => Some(e.as_ref()),
        _ => None,
    }
}

pub(super) fn next_operand(formula: &Formula) -> Option<&Formula> {
    match formula {
        Formula::Next(e) => Some(e.as_ref()),
        _ => None,
    }
}

pub fn merge_temporal(formula: &Formula) -> Option<Formula> {
    match formula {
        Formula::And(ops) => merge_operands(ops, true, globally_operand, Formula::globally)
            .or_else(|| merge_operands(ops, true, next_operand, Formula::next)),
        Formula::Or(ops) => merge_operands(ops, false, finally_operand, Formula::finally)
            .or_else(|| merge_operands(ops, false, next_operand, Formula::next)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> Formula {
        Formula::literal(name)
    }

    #[test]
    fn test_push_negation_de_morgan() {
        let f = Formula::not(Formula::and([p("a"), Formula::globally(p("b"))]));
        assert_eq!(
            push_negation(&f),
            Some(Formula::or([
                Formula::negated_literal("a"),
                Formula::not(Formula::globally(p("b"))),
            ]))
        );
    }

    #[test]
    fn test_push_negation_temporal_duals() {
        let f = Formula::not(Formula::until(p("a"), p("b")));
        assert_eq!(
            push_negation(&f),
            Some(Formula::release(
                Formula::negated_literal("a"),
                Formula::negated_literal("b")
            ))
        );
        let g = Formula::not(Formula::globally(p("a")));
        assert_eq!(
            push_negation(&g),
            Some(Formula::finally(Formula::negated_literal("a")))
        );
        let x = Formula::not(Formula::next(p("a")));
        assert_eq!(
            push_negation(&x),
            Some(Formula::next(Formula::negated_literal("a")))
        );
        assert_eq!(push_negation(&Formula::not(p("a"))), None);
    }

    #[test]
    fn test_temporal_constants() {
        assert_eq!(
            temporal_constants(&Formula::globally(Formula::FALSE)),
            Some(Formula::FALSE)
        );
        assert_eq!(
            temporal_constants(&Formula::until(Formula::TRUE, p("b"))),
            Some(Formula::finally(p("b")))
        );
        assert_eq!(
            temporal_constants(&Formula::until(p("a"), Formula::FALSE)),
            Some(Formula::FALSE)
        );
        assert_eq!(
            temporal_constants(&Formula::release(Formula::FALSE, p("b"))),
            Some(Formula::globally(p("b")))
        );
        assert_eq!(
            temporal_constants(&Formula::release(Formula::TRUE, p("b"))),
            Some(p("b"))
        );
        assert_eq!(temporal_constants(&Formula::until(p("a"), p("b"))), None);
    }

    #[test]
    fn test_temporal_idempotence() {
        let ff = Formula::finally(Formula::finally(p("a")));
        assert_eq!(temporal_idempotence(&ff), Some(Formula::finally(p("a"))));

        let gf = Formula::globally(Formula::finally(p("a")));
        assert_eq!(temporal_idempotence(&Formula::next(gf.clone())), Some(gf.clone()));
        assert_eq!(temporal_idempotence(&Formula::finally(gf.clone())), Some(gf));

        assert_eq!(
            temporal_idempotence(&Formula::until(p("a"), p("a"))),
            Some(p("a"))
        );
        assert_eq!(temporal_idempotence(&Formula::globally(Formula::finally(p("a")))), None);
    }

    #[test]
    fn test_merge_temporal() {
        let f = Formula::and([Formula::globally(p("a")), Formula::globally(p("b")), p("c")]);
        assert_eq!(
            merge_temporal(&f),
            Some(Formula::and([
                p("c"),
                Formula::globally(Formula::and([p("a"), p("b")]))
            ]))
        );

        let g = Formula::or([Formula::next(p("a")), Formula::next(p("b"))]);
        assert_eq!(
            merge_temporal(&g),
            Some(Formula::next(Formula::or([p("a"), p("b")])))
        );

        // G does not distribute over |
        let h = Formula::or([Formula::globally(p("a")), Formula::globally(p("b"))]);
        assert_eq!(merge_temporal(&h), None);
    }
}
