//! Formula analysis (sizes, depths, proposition and variable collection).

use std::collections::BTreeSet;

use super::Formula;

impl Formula {
    /// Number of nodes; an n-ary junction counts once plus its operands.
    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(Formula::size).sum::<usize>()
    }

    /// Height of the tree; leaves have depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Formula::depth)
            .max()
            .unwrap_or(0)
    }

    /// Maximum nesting of temporal operators (X, G, F, U, R).
    pub fn temporal_depth(&self) -> usize {
        let inner = self
            .children()
            .into_iter()
            .map(Formula::temporal_depth)
            .max()
            .unwrap_or(0);
        match self {
            Formula::Next(_)
            | Formula::Globally(_)
            | Formula::Finally(_)
            | Formula::Until(_, _)
            | Formula::Release(_, _) => inner + 1,
            Formula::Const(_)
            | Formula::Literal { .. }
            | Formula::Atom { .. }
            | Formula::Not(_)
            | Formula::And(_)
            | Formula::Or(_) => inner,
        }
    }

    /// Names of all atomic propositions occurring in the formula.
    pub fn propositions(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_leaves(&mut names, &mut BTreeSet::new());
        names
    }

    /// Names of all numeric variables occurring in atoms.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_leaves(&mut BTreeSet::new(), &mut vars);
        vars
    }

    fn collect_leaves(&self, props: &mut BTreeSet<String>, vars: &mut BTreeSet<String>) {
        match self {
            Formula::Literal { name, .. } => {
                props.insert(name.clone());
            }
            Formula::Atom { left, right, .. } => {
                left.collect_vars(vars);
                right.collect_vars(vars);
            }
            _ => {
                for child in self.children() {
                    child.collect_leaves(props, vars);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{CompOperator, Formula, Term};

    #[test]
    fn test_size_and_depth() {
        // G (a | (b & c))
        let f = Formula::globally(Formula::or([
            Formula::literal("a"),
            Formula::and([Formula::literal("b"), Formula::literal("c")]),
        ]));
        assert_eq!(f.size(), 6);
        assert_eq!(f.depth(), 4);
        assert_eq!(f.temporal_depth(), 1);
    }

    #[test]
    fn test_temporal_depth_counts_nesting() {
        let f = Formula::until(
            Formula::next(Formula::literal("a")),
            Formula::not(Formula::finally(Formula::globally(Formula::literal("b")))),
        );
        assert_eq!(f.temporal_depth(), 3);
    }

    #[test]
    fn test_collect_names() {
        let f = Formula::and([
            Formula::negated_literal("p"),
            Formula::finally(Formula::atom(
                Term::add(Term::var("x"), Term::int(1)),
                CompOperator::Lt,
                Term::var("y"),
            )),
            Formula::literal("q"),
        ]);
        assert_eq!(
            f.propositions().into_iter().collect::<Vec<_>>(),
            vec!["p", "q"]
        );
        assert_eq!(f.variables().into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
