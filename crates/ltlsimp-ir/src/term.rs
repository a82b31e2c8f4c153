//! Integer terms: the operands of numeric atoms.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Var(String),
    Int(i64),
    Neg(Box<Term>),
    Add(Box<Term>, Box<Term>),
    Sub(Box<Term>, Box<Term>),
    Mul(Box<Term>, Box<Term>),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn int(value: i64) -> Self {
        Term::Int(value)
    }

    pub fn neg(inner: Term) -> Self {
        Term::Neg(Box::new(inner))
    }

    pub fn add(left: Term, right: Term) -> Self {
        Term::Add(Box::new(left), Box::new(right))
    }

    pub fn sub(left: Term, right: Term) -> Self {
        Term::Sub(Box::new(left), Box::new(right))
    }

    pub fn mul(left: Term, right: Term) -> Self {
        Term::Mul(Box::new(left), Box::new(right))
    }

    /// Evaluate with two's-complement wrapping; `lookup` supplies variable values.
    pub fn evaluate<F>(&self, lookup: &F) -> i64
    where
        F: Fn(&str) -> i64,
    {
        match self {
            Term::Var(name) => lookup(name),
            Term::Int(value) => *value,
            Term::Neg(inner) => inner.evaluate(lookup).wrapping_neg(),
            Term::Add(l, r) => l.evaluate(lookup).wrapping_add(r.evaluate(lookup)),
            Term::Sub(l, r) => l.evaluate(lookup).wrapping_sub(r.evaluate(lookup)),
            Term::Mul(l, r) => l.evaluate(lookup).wrapping_mul(r.evaluate(lookup)),
        }
    }

    /// Collect the variable names occurring in this term.
    pub fn collect_vars(&self, out: &mut BTreeSet<String>) {
        match self {
            Term::Var(name) => {
                out.insert(name.clone());
            }
            Term::Int(_) => {}
            Term::Neg(inner) => inner.collect_vars(out),
            Term::Add(l, r) | Term::Sub(l, r) | Term::Mul(l, r) => {
                l.collect_vars(out);
                r.collect_vars(out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_arithmetic() {
        // (x + 2) * -y - 1
        let term = Term::sub(
            Term::mul(Term::add(Term::var("x"), Term::int(2)), Term::neg(Term::var("y"))),
            Term::int(1),
        );
        let lookup = |name: &str| match name {
            "x" => 3,
            "y" => 4,
            _ => 0,
        };
        assert_eq!(term.evaluate(&lookup), -21);
    }

    #[test]
    fn test_evaluate_wraps_on_overflow() {
        let term = Term::add(Term::int(i64::MAX), Term::int(1));
        assert_eq!(term.evaluate(&|_| 0), i64::MIN);
    }

    #[test]
    fn test_collect_vars() {
        let term = Term::add(Term::var("x"), Term::mul(Term::var("y"), Term::var("x")));
        let mut vars = BTreeSet::new();
        term.collect_vars(&mut vars);
        assert_eq!(vars.into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
