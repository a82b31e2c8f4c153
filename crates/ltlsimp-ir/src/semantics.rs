//! LTL semantics over ultimately periodic words.
//!
//! A [`Lasso`] denotes the infinite word `prefix · cycle^ω`. It has only
//! `prefix.len() + cycle.len()` distinct positions, so every formula can be
//! evaluated exactly: Until and Finally are least fixpoints and Release and
//! Globally greatest fixpoints over that finite position set.
//!
//! This is the reference oracle used to cross-check rewrite rules; it is not part
//! of the simplification path.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::IrError;
use crate::formula::Formula;

/// Valuation at a single position. Absent propositions are false and absent
/// numeric variables are 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub props: BTreeSet<String>,
    pub vars: BTreeMap<String, i64>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_props<I, S>(props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            props: props.into_iter().map(Into::into).collect(),
            vars: BTreeMap::new(),
        }
    }

    pub fn with_prop(mut self, name: impl Into<String>) -> Self {
        self.props.insert(name.into());
        self
    }

    pub fn with_var(mut self, name: impl Into<String>, value: i64) -> Self {
        self.vars.insert(name.into(), value);
        self
    }

    pub fn prop(&self, name: &str) -> bool {
        self.props.contains(name)
    }

    pub fn var(&self, name: &str) -> i64 {
        self.vars.get(name).copied().unwrap_or(0)
    }
}

/// The ultimately periodic word `prefix · cycle^ω`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lasso {
    prefix: Vec<State>,
    cycle: Vec<State>,
}

impl Lasso {
    pub fn new(prefix: Vec<State>, cycle: Vec<State>) -> Result<Self, IrError> {
        if cycle.is_empty() {
            return Err(IrError::EmptyLassoCycle);
        }
        Ok(Self { prefix, cycle })
    }

    /// The word repeating `state` forever.
    pub fn constant(state: State) -> Self {
        Self {
            prefix: Vec::new(),
            cycle: vec![state],
        }
    }

    pub fn prefix(&self) -> &[State] {
        &self.prefix
    }

    pub fn cycle(&self) -> &[State] {
        &self.cycle
    }

    /// Number of distinct positions.
    pub fn len(&self) -> usize {
        self.prefix.len() + self.cycle.len()
    }

    /// Always false: the cycle is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn state(&self, position: usize) -> &State {
        if position < self.prefix.len() {
            &self.prefix[position]
        } else {
            &self.cycle[position - self.prefix.len()]
        }
    }

    fn successor(&self, position: usize) -> usize {
        if position + 1 < self.len() {
            position + 1
        } else {
            self.prefix.len()
        }
    }

    /// Map an arbitrary position of the infinite word onto a distinct position.
    fn normalize(&self, position: usize) -> usize {
        if position < self.len() {
            position
        } else {
            self.prefix.len() + (position - self.prefix.len()) % self.cycle.len()
        }
    }

    /// Whether the word satisfies `formula` at its first position.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        self.holds_at(formula, 0)
    }

    /// Whether `formula` holds at `position` of the infinite word.
    pub fn holds_at(&self, formula: &Formula, position: usize) -> bool {
        self.evaluate(formula)[self.normalize(position)]
    }

    /// Truth value of `formula` at every distinct position.
    pub fn evaluate(&self, formula: &Formula) -> Vec<bool> {
        let n = self.len();
        match formula {
            Formula::Const(value) => vec![*value; n],
            Formula::Literal { name, negated } => (0..n)
                .map(|i| self.state(i).prop(name) != *negated)
                .collect(),
            Formula::Atom { left, op, right } => (0..n)
                .map(|i| {
                    let state = self.state(i);
                    let lookup = |name: &str| state.var(name);
                    op.evaluate(left.evaluate(&lookup), right.evaluate(&lookup))
                })
                .collect(),
            Formula::Not(e) => self.evaluate(e).into_iter().map(|v| !v).collect(),
            Formula::Next(e) => {
                let inner = self.evaluate(e);
                (0..n).map(|i| inner[self.successor(i)]).collect()
            }
            Formula::Globally(e) => {
                let inner = self.evaluate(e);
                self.fixpoint(true, |i, next| inner[i] && next)
            }
            Formula::Finally(e) => {
                let inner = self.evaluate(e);
                self.fixpoint(false, |i, next| inner[i] || next)
            }
            Formula::Until(l, r) => {
                let (left, right) = (self.evaluate(l), self.evaluate(r));
                self.fixpoint(false, |i, next| right[i] || (left[i] && next))
            }
            Formula::Release(l, r) => {
                let (left, right) = (self.evaluate(l), self.evaluate(r));
                self.fixpoint(true, |i, next| right[i] && (left[i] || next))
            }
            Formula::And(ops) => ops.iter().fold(vec![true; n], |acc, op| {
                acc.into_iter()
                    .zip(self.evaluate(op))
                    .map(|(a, b)| a && b)
                    .collect()
            }),
            Formula::Or(ops) => ops.iter().fold(vec![false; n], |acc, op| {
                acc.into_iter()
                    .zip(self.evaluate(op))
                    .map(|(a, b)| a || b)
                    .collect()
            }),
        }
    }

    /// Iterate `step(i, value[succ(i)])` from the constant `start` vector until
    /// stable: `start = false` yields the least, `start = true` the greatest
    /// fixpoint of a monotone step.
    fn fixpoint<F>(&self, start: bool, step: F) -> Vec<bool>
    where
        F: Fn(usize, bool) -> bool,
    {
        let mut values = vec![start; self.len()];
        loop {
            let mut changed = false;
            for i in (0..self.len()).rev() {
                let value = step(i, values[self.successor(i)]);
                if value != values[i] {
                    values[i] = value;
                    changed = true;
                }
            }
            if !changed {
                return values;
            }
        }
    }
}

/// Every lasso over `props` with a prefix of at most `max_prefix` and a cycle of
/// 1 to `max_cycle` states.
///
/// The count grows as `(2^|props|)^(max_prefix + max_cycle)`; keep the bounds small.
pub fn bounded_lassos(props: &[String], max_prefix: usize, max_cycle: usize) -> Vec<Lasso> {
    let valuations: Vec<State> = (0..1usize << props.len())
        .map(|mask| {
            State::from_props(
                props
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, name)| name.clone()),
            )
        })
        .collect();

    let mut lassos = Vec::new();
    for prefix_len in 0..=max_prefix {
        for cycle_len in 1..=max_cycle.max(1) {
            for word in sequences(&valuations, prefix_len + cycle_len) {
                let (prefix, cycle) = word.split_at(prefix_len);
                lassos.push(Lasso {
                    prefix: prefix.to_vec(),
                    cycle: cycle.to_vec(),
                });
            }
        }
    }
    lassos
}

fn sequences(alphabet: &[State], len: usize) -> Vec<Vec<State>> {
    (0..len).fold(vec![Vec::new()], |words, _| {
        words
            .iter()
            .flat_map(|word| {
                alphabet.iter().map(move |state| {
                    let mut extended = word.clone();
                    extended.push(state.clone());
                    extended
                })
            })
            .collect()
    })
}

/// The first lasso on which `left` and `right` disagree, if any.
pub fn find_disagreement<'a>(
    left: &Formula,
    right: &Formula,
    lassos: &'a [Lasso],
) -> Option<&'a Lasso> {
    lassos
        .iter()
        .find(|lasso| lasso.satisfies(left) != lasso.satisfies(right))
}
