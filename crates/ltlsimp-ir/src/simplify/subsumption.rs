//! Subsumption rewrites.
//!
//! All rules here are driven by [`implies`], a syntactic implication check that is
//! sound but incomplete: `implies(a, b)` only returns `true` when `a → b` holds at
//! every position of every word. Rules built on it remove one operand per firing,
//! so two equivalent operands never eliminate each other.

use std::collections::BTreeSet;

use crate::formula::Formula;

/// Conservative check that `a` entails `b` at every position of every word.
pub fn implies(a: &Formula, b: &Formula) -> bool {
    if a == b || b.is_true() || a.is_false() {
        return true;
    }

    match b {
        Formula::Or(ops) if ops.iter().any(|s| implies(a, s)) => return true,
        Formula::And(ops) if ops.iter().all(|s| implies(a, s)) => return true,
        _ => {}
    }
    match a {
        Formula::And(ops) if ops.iter().any(|s| implies(s, b)) => return true,
        Formula::Or(ops) if ops.iter().all(|s| implies(s, b)) => return true,
        _ => {}
    }

    match (a, b) {
        // G x holds now and at every later position
        (Formula::Globally(x), _) if implies(x, b) => true,
        (Formula::Globally(_), Formula::Next(y) | Formula::Globally(y)) if implies(a, y) => true,
        (_, Formula::Finally(y)) if implies(a, y) => true,
        (Formula::Next(x), Formula::Next(y)) | (Formula::Finally(x), Formula::Finally(y)) => {
            implies(x, y)
        }
        (_, Formula::Until(_, z)) if implies(a, z) => true,
        (_, Formula::Release(y, z))
            if implies(a, z) && (implies(a, y) || matches!(a, Formula::Globally(_))) =>
        {
            true
        }
        (Formula::Until(x, y), _) => implies(x, b) && implies(y, b),
        (Formula::Release(_, y), _) => implies(y, b),
        _ => false,
    }
}

fn without<'a>(
    ops: &'a BTreeSet<Formula>,
    dropped: &Formula,
) -> impl Iterator<Item = Formula> + 'a {
    let dropped = dropped.clone();
    ops.iter().filter(move |op| **op != dropped).cloned()
}

/// An operand of `ops` that `related(other, op)` holds for with some other operand.
fn find_redundant<'a>(
    ops: &'a BTreeSet<Formula>,
    related: impl Fn(&Formula, &Formula) -> bool,
) -> Option<&'a Formula> {
    ops.iter()
        .find(|op| ops.iter().any(|other| other != *op && related(other, *op)))
}

pub fn drop_implied_conjunct(formula: &Formula) -> Option<Formula> {
    let Formula::And(ops) = formula else {
        return None;
    };
    let redundant = find_redundant(ops, |other, op| implies(other, op))?;
    Some(Formula::and(without(ops, redundant)))
}

pub fn drop_implying_disjunct(formula: &Formula) -> Option<Formula> {
    let Formula::Or(ops) = formula else {
        return None;
    };
    let redundant = find_redundant(ops, |other, op| implies(op, other))?;
    Some(Formula::or(without(ops, redundant)))
}

/// Operands of `formula` viewed as a junction of the given kind; any other
/// formula is a junction of one.
fn junction_operands(formula: &Formula, conjunctive: bool) -> Vec<Formula> {
    match formula {
        Formula::And(ops) if conjunctive => ops.iter().cloned().collect(),
        Formula::Or(ops) if !conjunctive => ops.iter().cloned().collect(),
        other => vec![other.clone()],
    }
}

/// Inside `a & (b | (c & d))`, a conjunct `c` implied by the sibling `a` is true
/// wherever the whole formula can be, so it is dropped. Dually inside
/// `a | (b & (c | d))` a disjunct `c` implying `a` is dropped.
pub fn contextual_absorption(formula: &Formula) -> Option<Formula> {
    let ops = formula.operands()?;
    let conjunctive = matches!(formula, Formula::And(_));

    for op in ops.iter() {
        let nested = match op {
            Formula::Or(nested) if conjunctive => nested,
            Formula::And(nested) if !conjunctive => nested,
            _ => continue,
        };
        let siblings: Vec<&Formula> = ops.iter().filter(|s| *s != op).collect();
        let redundant = |leaf: &Formula| {
            siblings.iter().any(|s| {
                if conjunctive {
                    implies(s, leaf)
                } else {
                    implies(leaf, s)
                }
            })
        };

        let mut changed = false;
        let mut rebuilt = Vec::with_capacity(nested.len());
        for inner in nested.iter() {
            let leaves = junction_operands(inner, conjunctive);
            let kept: Vec<Formula> = leaves.iter().filter(|l| !redundant(*l)).cloned().collect();
            if kept.len() == leaves.len() {
                rebuilt.push(inner.clone());
                continue;
            }
            changed = true;
            if kept.is_empty() {
                rebuilt.clear();
                break;
            }
            rebuilt.push(if conjunctive {
                Formula::and(kept)
            } else {
                Formula::or(kept)
            });
        }
        if !changed {
            continue;
        }

        // an empty rebuild means the nested junction is the identity of `formula`
        let replacement = match (rebuilt.is_empty(), conjunctive) {
            (true, _) => None,
            (false, true) => Some(Formula::or(rebuilt)),
            (false, false) => Some(Formula::and(rebuilt)),
        };
        let operands = without(ops, op).chain(replacement);
        return Some(if conjunctive {
            Formula::and(operands)
        } else {
            Formula::or(operands)
        });
    }
    None
}

pub fn subsumed_until_release(formula: &Formula) -> Option<Formula> {
    match formula {
        Formula::Until(l, r) if implies(l, r) => Some(r.as_ref().clone()),
        Formula::Release(l, r) if implies(r, l) => Some(r.as_ref().clone()),
        Formula::Finally(e) => match e.as_ref() {
            Formula::Until(_, r) => Some(Formula::finally(r.as_ref().clone())),
            _ => None,
        },
        Formula::Globally(e) => match e.as_ref() {
            Formula::Release(_, r) => Some(Formula::globally(r.as_ref().clone())),
            _ => None,
        },
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
    fn test_implies_basic() {
        let a = p("a");
        let ga = Formula::globally(a.clone());
        let fa = Formula::finally(a.clone());
        assert!(implies(&ga, &a));
        assert!(implies(&a, &fa));
        assert!(implies(&ga, &fa));
        assert!(implies(&ga, &Formula::next(a.clone())));
        assert!(!implies(&a, &ga));
        assert!(!implies(&fa, &a));
    }

    #[test]
    fn test_implies_junctions() {
        let ab = Formula::and([p("a"), p("b")]);
        let a_or_c = Formula::or([p("a"), p("c")]);
        assert!(implies(&ab, &p("a")));
        assert!(implies(&ab, &a_or_c));
        assert!(implies(&p("a"), &a_or_c));
        assert!(!implies(&a_or_c, &p("a")));
        assert!(implies(&Formula::or([p("a"), ab.clone()]), &a_or_c));
    }

    #[test]
    fn test_implies_until_release() {
        let a_u_b = Formula::until(p("a"), p("b"));
        assert!(implies(&p("b"), &a_u_b));
        assert!(implies(&a_u_b, &Formula::or([p("a"), p("b")])));
        assert!(!implies(&a_u_b, &p("b")));

        let a_r_b = Formula::release(p("a"), p("b"));
        assert!(implies(&a_r_b, &p("b")));
        assert!(implies(&Formula::globally(p("b")), &a_r_b));
        assert!(implies(&Formula::and([p("a"), p("b")]), &a_r_b));
        assert!(!implies(&p("b"), &a_r_b));
    }

    #[test]
    fn test_without_outlives_dropped_operand() {
        let ops: BTreeSet<Formula> = [p("a"), p("b"), p("c")].into_iter().collect();
        let rest = {
            let dropped = p("b");
            without(&ops, &dropped)
        };
        assert_eq!(rest.collect::<Vec<_>>(), vec![p("a"), p("c")]);
    }

    #[test]
    fn test_drop_implied_conjunct() {
        let f = Formula::and([Formula::globally(p("p0")), p("p0")]);
        assert_eq!(drop_implied_conjunct(&f), Some(Formula::globally(p("p0"))));
        assert_eq!(drop_implied_conjunct(&Formula::and([p("a"), p("b")])), None);
    }

    #[test]
    fn test_drop_implying_disjunct() {
        let g = Formula::or([Formula::globally(p("p0")), p("p0")]);
        assert_eq!(drop_implying_disjunct(&g), Some(p("p0")));
        let f = Formula::or([Formula::finally(p("p0")), p("p0")]);
        assert_eq!(drop_implying_disjunct(&f), Some(Formula::finally(p("p0"))));
    }

    #[test]
    fn test_contextual_absorption() {
        let f = Formula::and([
            p("a"),
            Formula::or([p("b"), Formula::and([p("a"), p("c")])]),
        ]);
        assert_eq!(
            contextual_absorption(&f),
            Some(Formula::and([p("a"), Formula::or([p("b"), p("c")])]))
        );

        let g = Formula::or([
            p("a"),
            Formula::and([p("b"), Formula::or([p("a"), p("c")])]),
        ]);
        assert_eq!(
            contextual_absorption(&g),
            Some(Formula::or([p("a"), Formula::and([p("b"), p("c")])]))
        );
    }

    #[test]
    fn test_contextual_absorption_decides_nested() {
        // under G a the disjunct X a is true, so the nested Or is too
        let f = Formula::and([
            Formula::globally(p("a")),
            Formula::or([p("b"), Formula::next(p("a"))]),
        ]);
        assert_eq!(contextual_absorption(&f), Some(Formula::globally(p("a"))));
    }

    #[test]
    fn test_subsumed_until_release() {
        let f = Formula::until(Formula::and([p("a"), p("b")]), p("b"));
        assert_eq!(subsumed_until_release(&f), Some(p("b")));
        let g = Formula::finally(Formula::until(p("a"), p("b")));
        assert_eq!(subsumed_until_release(&g), Some(Formula::finally(p("b"))));
        let h = Formula::globally(Formula::release(p("a"), p("b")));
        assert_eq!(subsumed_until_release(&h), Some(Formula::globally(p("b"))));
        assert_eq!(subsumed_until_release(&Formula::until(p("a"), p("b"))), None);
    }
}
