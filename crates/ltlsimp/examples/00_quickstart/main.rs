//! Example 00: parse a formula, simplify it and inspect the run.

use ltlsimp::{parse, Simplifier, Strategy};

fn main() {
    let input = "G (req -> F ack) & G F (req | !req) & (req U (req & ack))";
    let formula = match parse(input) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("cannot parse `{}`: {}", input, e);
            std::process::exit(1);
        }
    };

    let (simplified, metrics) = Simplifier::with_strategy(Strategy::Aggressively).run(&formula);

    println!("input:      {}", formula);
    println!("simplified: {}", simplified);
    println!();
    println!(
        "{} passes, {} rewrites, {} -> {} nodes ({:.0}% smaller)",
        metrics.passes,
        metrics.rewrites,
        metrics.initial_size,
        metrics.final_size,
        metrics.reduction_ratio * 100.0
    );
    for (rule, count) in &metrics.rule_counts {
        println!("  {:<26} {}", rule, count);
    }
}
