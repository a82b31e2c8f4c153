//! Comparison operators of numeric atoms.

use serde::{Deserialize, Serialize};

/// Relational operator of a numeric constraint `lhs op rhs`.
///
/// Only the four strict/non-strict orderings exist. Equality is expressible as
/// `x <= y & x >= y`, so the closed set stays partitioned into two complementary
/// pairs under [`CompOperator::negate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompOperator {
    /// `<=`
    Leq,
    /// `<`
    Lt,
    /// `>=`
    Geq,
    /// `>`
    Gt,
}

impl CompOperator {
    pub const ALL: [CompOperator; 4] = [
        CompOperator::Leq,
        CompOperator::Lt,
        CompOperator::Geq,
        CompOperator::Gt,
    ];

    /// The operator `op'` with `!(x op y) == (x op' y)` over a total order.
    ///
    /// `negate` is an involution: `op.negate().negate() == op`.
    pub fn negate(self) -> CompOperator {
        match self {
            CompOperator::Geq => CompOperator::Lt,
            CompOperator::Gt => CompOperator::Leq,
            CompOperator::Leq => CompOperator::Gt,
            CompOperator::Lt => CompOperator::Geq,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompOperator::Geq => ">=",
            CompOperator::Gt => ">",
            CompOperator::Leq => "<=",
            CompOperator::Lt => "<",
        }
    }

    /// Decide `lhs op rhs`.
    pub fn evaluate(self, lhs: i64, rhs: i64) -> bool {
        match self {
            CompOperator::Leq => lhs <= rhs,
            CompOperator::Lt => lhs < rhs,
            CompOperator::Geq => lhs >= rhs,
            CompOperator::Gt => lhs > rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate_pairs() {
        assert_eq!(CompOperator::Leq.negate(), CompOperator::Gt);
        assert_eq!(CompOperator::Gt.negate(), CompOperator::Leq);
        assert_eq!(CompOperator::Lt.negate(), CompOperator::Geq);
        assert_eq!(CompOperator::Geq.negate(), CompOperator::Lt);
    }

    #[test]
    fn test_negate_is_involution() {
        for op in CompOperator::ALL {
            assert_eq!(op.negate().negate(), op);
            assert_ne!(op.negate(), op);
        }
    }

    #[test]
    fn test_negate_matches_evaluation() {
        for op in CompOperator::ALL {
            for lhs in -2..=2 {
                for rhs in -2..=2 {
                    assert_eq!(!op.evaluate(lhs, rhs), op.negate().evaluate(lhs, rhs));
                }
            }
        }
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: std::collections::HashSet<_> =
            CompOperator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols.len(), 4);
        assert_eq!(CompOperator::Leq.to_string(), "<=");
        assert_eq!(CompOperator::Gt.to_string(), ">");
    }
}
