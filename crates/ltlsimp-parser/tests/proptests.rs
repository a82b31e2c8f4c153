//! Property-based tests for the parser.

use ltlsimp_ir::{CompOperator, Formula, Term};
use ltlsimp_parser::{parse, ParseError};
use proptest::prelude::*;

// ===== Strategies for generating test data =====

fn arb_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        prop_oneof![Just("x"), Just("y")].prop_map(Term::var),
        any::<i64>().prop_map(Term::int),
    ];
    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Term::neg),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Term::add(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Term::sub(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Term::mul(l, r)),
        ]
    })
}

fn arb_leaf() -> impl Strategy<Value = Formula> {
    prop_oneof![
        3 => (prop_oneof![Just("a"), Just("b"), Just("c")], any::<bool>()).prop_map(
            |(name, negated)| {
                if negated {
                    Formula::negated_literal(name)
                } else {
                    Formula::literal(name)
                }
            }
        ),
        1 => any::<bool>().prop_map(Formula::constant),
        1 => (arb_term(), prop::sample::select(CompOperator::ALL.to_vec()), arb_term())
            .prop_map(|(l, op, r)| Formula::atom(l, op, r)),
    ]
}

/// The textual syntax has no way to write a negation node directly above a
/// positive literal, so generated formulas use negative literals instead.
fn negate(f: Formula) -> Formula {
    match f {
        Formula::Literal {
            name,
            negated: false,
        } => Formula::negated_literal(name),
        other => Formula::not(other),
    }
}

fn arb_formula() -> impl Strategy<Value = Formula> {
    arb_leaf().prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(negate),
            inner.clone().prop_map(Formula::next),
            inner.clone().prop_map(Formula::globally),
            inner.clone().prop_map(Formula::finally),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::until(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Formula::release(l, r)),
            prop::collection::vec(inner.clone(), 2..4).prop_map(Formula::and),
            prop::collection::vec(inner, 2..4).prop_map(Formula::or),
        ]
    })
}

// ===== Property Tests =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_display_parses_back(f in arb_formula()) {
        let text = f.to_string();
        let parsed = parse(&text);
        prop_assert_eq!(parsed, Ok(f), "`{}` did not read back", text);
    }

    #[test]
    fn prop_parse_never_panics(input in "[ a-cxXGFURWM()!&|<>=0-9+*~-]{0,40}") {
        let _ = parse(&input);
    }

    #[test]
    fn prop_error_offsets_are_in_bounds(input in "[ a-c()!&|<>0-9-]{0,24}") {
        if let Err(err) = parse(&input) {
            if let Some(offset) = err.offset() {
                prop_assert!(offset < input.len(), "{} points past `{}`", err, input);
            }
        }
    }

    #[test]
    fn prop_whitespace_is_insignificant(f in arb_formula()) {
        let spaced = f
            .to_string()
            .replace('(', " ( ")
            .replace(')', " ) ")
            .replace(' ', "\t ");
        prop_assert_eq!(parse(&spaced), Ok(f));
    }
}

#[test]
fn test_unknown_characters_are_reported() {
    for (input, ch) in [("a ^ b", '^'), ("G {a}", '{'), ("a = b", '=')] {
        match parse(input) {
            Err(ParseError::UnexpectedChar { ch: found, .. }) => assert_eq!(found, ch),
            other => panic!("`{}` gave {:?}", input, other),
        }
    }
}
