//! Example 01: the same formulas under every strategy.
//!
//! Strategies demonstrated:
//! - propositional: Boolean clean-up only
//! - modal: adds negation pushing and temporal identities
//! - pullup-x: moves every Next towards the root
//! - aggressively: adds subsumption (the default)

use ltlsimp::{parse, simplify, Strategy};

const FORMULAS: &[&str] = &[
    "!(a U !G b)",
    "G (F (X b))",
    "G ((r) | ((p) & (r)))",
    "X a & X (b | a) & G c & G a",
    "!(x + 1 <= y) | F F (x + 1 <= y)",
];

fn main() {
    let sep = "=".repeat(70);
    println!("{}", sep);
    println!("ltlsimp - Strategy Comparison");
    println!("{}", sep);

    for input in FORMULAS {
        let formula = match parse(input) {
            Ok(formula) => formula,
            Err(e) => {
                eprintln!("skipping `{}`: {}", input, e);
                continue;
            }
        };

        println!();
        println!("{}", formula);
        for strategy in Strategy::ALL {
            println!("  {:<14} {}", strategy.name(), simplify(&formula, strategy));
        }
    }
}
