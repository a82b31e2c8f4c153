//! Formula analysis and metrics for the ltlsimp CLI

use ltlsimp_ir::Formula;
use std::collections::BTreeMap;

/// Formula complexity metrics
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaMetrics {
    /// Total number of nodes
    pub size: usize,
    /// Height of the tree
    pub depth: usize,
    /// Maximum nesting of temporal operators
    pub temporal_depth: usize,
    /// Distinct atomic propositions
    pub propositions: usize,
    /// Distinct numeric variables
    pub variables: usize,
    /// Node count per operator
    pub op_breakdown: BTreeMap<&'static str, usize>,
}

impl FormulaMetrics {
    pub fn analyze(formula: &Formula) -> Self {
        let mut op_breakdown = BTreeMap::new();
        count_operators(formula, &mut op_breakdown);

        Self {
            size: formula.size(),
            depth: formula.depth(),
            temporal_depth: formula.temporal_depth(),
            propositions: formula.propositions().len(),
            variables: formula.variables().len(),
            op_breakdown,
        }
    }

    /// Print the input and simplified metrics side by side
    pub fn print_comparison(before: &Self, after: &Self) {
        println!("Formula Metrics:        before    after");
        let rows = [
            ("Size", before.size, after.size),
            ("Depth", before.depth, after.depth),
            ("Temporal depth", before.temporal_depth, after.temporal_depth),
            ("Propositions", before.propositions, after.propositions),
            ("Variables", before.variables, after.variables),
        ];
        for (label, b, a) in rows {
            println!("  {:<20} {:>6} {:>8}", label, b, a);
        }

        println!("\nOperator Breakdown:");
        let mut ops: Vec<&str> = before
            .op_breakdown
            .keys()
            .chain(after.op_breakdown.keys())
            .copied()
            .collect();
        ops.sort_unstable();
        ops.dedup();
        for op in ops {
            let count = |m: &Self| m.op_breakdown.get(op).copied().unwrap_or(0);
            println!("  {:<20} {:>6} {:>8}", op, count(before), count(after));
        }
    }
}

fn operator_name(formula: &Formula) -> &'static str {
    match formula {
        Formula::Const(_) => "constant",
        Formula::Literal { .. } => "literal",
        Formula::Atom { .. } => "atom",
        Formula::Not(_) => "not",
        Formula::Next(_) => "next",
        Formula::Globally(_) => "globally",
        Formula::Finally(_) => "finally",
        Formula::Until(_, _) => "until",
        Formula::Release(_, _) => "release",
        Formula::And(_) => "and",
        Formula::Or(_) => "or",
    }
}

fn count_operators(formula: &Formula, counts: &mut BTreeMap<&'static str, usize>) {
    *counts.entry(operator_name(formula)).or_insert(0) += 1;
    for child in formula.children() {
        count_operators(child, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze() {
        let a = Formula::literal("a");
        let f = Formula::globally(Formula::or([
            a.clone(),
            Formula::next(Formula::and([a, Formula::negated_literal("b")])),
        ]));
        let metrics = FormulaMetrics::analyze(&f);

        assert_eq!(metrics.size, 7);
        assert_eq!(metrics.depth, 5);
        assert_eq!(metrics.temporal_depth, 2);
        assert_eq!(metrics.propositions, 2);
        assert_eq!(metrics.variables, 0);
        assert_eq!(metrics.op_breakdown.get("literal"), Some(&3));
        assert_eq!(metrics.op_breakdown.get("globally"), Some(&1));
        assert_eq!(metrics.op_breakdown.get("until"), None);
    }
}
