//! Display trait implementations for IR types.
//!
//! The rendering uses the textual LTL syntax (`!`, `&`, `|`, `X`, `G`, `F`, `U`,
//! `R`) and is meant for diagnostics; junction operands appear in canonical order.

use std::fmt;

use crate::{comp_op::CompOperator, formula::Formula, simplify::Strategy, term::Term};

impl fmt::Display for CompOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn term_precedence(term: &Term) -> u8 {
    match term {
        Term::Add(_, _) | Term::Sub(_, _) => 1,
        Term::Mul(_, _) => 2,
        Term::Neg(_) => 3,
        Term::Var(_) | Term::Int(_) => 4,
    }
}

fn write_term_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &Term,
    parent: u8,
    right: bool,
) -> fmt::Result {
    let prec = term_precedence(operand);
    if prec < parent || (right && prec == parent) {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => write!(f, "{}", name),
            Term::Int(value) => write!(f, "{}", value),
            // `-3` reads back as an integer literal, so a negated literal keeps its parentheses
            Term::Neg(inner) => match inner.as_ref() {
                Term::Int(_) => write!(f, "-({})", inner),
                _ => {
                    f.write_str("-")?;
                    write_term_operand(f, inner, 3, false)
                }
            },
            Term::Add(l, r) | Term::Sub(l, r) | Term::Mul(l, r) => {
                let (symbol, prec) = match self {
                    Term::Add(_, _) => ("+", 1),
                    Term::Sub(_, _) => ("-", 1),
                    _ => ("*", 2),
                };
                write_term_operand(f, l, prec, false)?;
                write!(f, " {} ", symbol)?;
                write_term_operand(f, r, prec, true)
            }
        }
    }
}

fn write_formula(f: &mut fmt::Formatter<'_>, formula: &Formula, nested: bool) -> fmt::Result {
    match formula {
        Formula::Const(true) => f.write_str("true"),
        Formula::Const(false) => f.write_str("false"),
        Formula::Literal { name, negated } => {
            if *negated {
                f.write_str("!")?;
            }
            f.write_str(name)
        }
        Formula::Atom { left, op, right } => {
            if nested {
                write!(f, "({} {} {})", left, op, right)
            } else {
                write!(f, "{} {} {}", left, op, right)
            }
        }
        Formula::Not(e) => {
            f.write_str("!")?;
            write_formula(f, e, true)
        }
        Formula::Next(e) | Formula::Globally(e) | Formula::Finally(e) => {
            let symbol = match formula {
                Formula::Next(_) => "X",
                Formula::Globally(_) => "G",
                _ => "F",
            };
            write!(f, "{} ", symbol)?;
            write_formula(f, e, true)
        }
        Formula::Until(l, r) | Formula::Release(l, r) => {
            let symbol = if matches!(formula, Formula::Until(_, _)) {
                "U"
            } else {
                "R"
            };
            if nested {
                f.write_str("(")?;
            }
            write_formula(f, l, true)?;
            write!(f, " {} ", symbol)?;
            write_formula(f, r, true)?;
            if nested {
                f.write_str(")")?;
            }
            Ok(())
        }
        Formula::And(ops) | Formula::Or(ops) => {
            let symbol = if matches!(formula, Formula::And(_)) {
                " & "
            } else {
                " | "
            };
            if nested {
                f.write_str("(")?;
            }
            for (i, op) in ops.iter().enumerate() {
                if i > 0 {
                    f.write_str(symbol)?;
                }
                write_formula(f, op, true)?;
            }
            if nested {
                f.write_str(")")?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_formula(f, self, false)
    }
}
