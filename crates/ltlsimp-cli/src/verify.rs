//! Bounded equivalence check behind `--verify`.
//!
//! Both formulas are evaluated on every lasso word with a prefix of at most one
//! state and a cycle of at most two states over their propositions. Numeric
//! variables hold a constant value per word, drawn from a small range.

use anyhow::Result;
use ltlsimp_ir::{bounded_lassos, find_disagreement, Formula, Lasso, State};
use std::fmt::Write;

/// Above this the number of words gets out of hand.
const MAX_PROPOSITIONS: usize = 6;
const MAX_VARIABLES: usize = 2;
const VARIABLE_VALUES: [i64; 5] = [-2, -1, 0, 1, 2];

/// Outcome of a successful check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub lassos: usize,
}

pub fn verify(original: &Formula, simplified: &Formula) -> Result<Verification> {
    let mut props = original.propositions();
    props.extend(simplified.propositions());
    let mut vars = original.variables();
    vars.extend(simplified.variables());

    if props.len() > MAX_PROPOSITIONS {
        anyhow::bail!(
            "--verify supports at most {} propositions, the formula has {}",
            MAX_PROPOSITIONS,
            props.len()
        );
    }
    if vars.len() > MAX_VARIABLES {
        anyhow::bail!(
            "--verify supports at most {} numeric variables, the formula has {}",
            MAX_VARIABLES,
            vars.len()
        );
    }

    let props: Vec<String> = props.into_iter().collect();
    let max_cycle = if props.len() <= 3 { 2 } else { 1 };
    let words = bounded_lassos(&props, 1, max_cycle);

    let vars: Vec<String> = vars.into_iter().collect();
    let mut lassos = Vec::new();
    for valuation in valuations(&vars) {
        for word in &words {
            lassos.push(assign(word, &valuation)?);
        }
    }
    tracing::debug!(
        propositions = props.len(),
        variables = vars.len(),
        lassos = lassos.len(),
        "verifying simplification"
    );

    match find_disagreement(original, simplified, &lassos) {
        Some(witness) => anyhow::bail!(
            "Verification failed: `{}` and `{}` differ on {}",
            original,
            simplified,
            describe(witness)
        ),
        None => Ok(Verification {
            lassos: lassos.len(),
        }),
    }
}

/// Every assignment of `VARIABLE_VALUES` to `vars`.
fn valuations(vars: &[String]) -> Vec<Vec<(String, i64)>> {
    vars.iter().fold(vec![Vec::new()], |partials, var| {
        partials
            .iter()
            .flat_map(|partial| {
                VARIABLE_VALUES.iter().map(move |value| {
                    let mut next = partial.clone();
                    next.push((var.clone(), *value));
                    next
                })
            })
            .collect()
    })
}

fn assign(word: &Lasso, valuation: &[(String, i64)]) -> Result<Lasso> {
    let with_vars = |state: &State| {
        valuation
            .iter()
            .fold(state.clone(), |state, (name, value)| state.with_var(name.clone(), *value))
    };
    Ok(Lasso::new(
        word.prefix().iter().map(with_vars).collect(),
        word.cycle().iter().map(with_vars).collect(),
    )?)
}

/// `{a} ({a, b} {})^w` style rendering of a word.
fn describe(lasso: &Lasso) -> String {
    let state = |s: &State| {
        let mut items: Vec<String> = s.props.iter().cloned().collect();
        items.extend(s.vars.iter().map(|(name, value)| format!("{}={}", name, value)));
        format!("{{{}}}", items.join(", "))
    };

    let mut out = String::new();
    for s in lasso.prefix() {
        let _ = write!(out, "{} ", state(s));
    }
    let cycle: Vec<String> = lasso.cycle().iter().map(state).collect();
    let _ = write!(out, "({})^w", cycle.join(" "));
    out
}
