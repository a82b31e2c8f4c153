#![no_main]

use libfuzzer_sys::fuzz_target;
use ltlsimp_ir::{Simplifier, Strategy};
use ltlsimp_parser::parse;

fuzz_target!(|data: &[u8]| {
    // Keep inputs small; the rule set is quadratic in junction width
    if data.is_empty() || data.len() > 512 {
        return;
    }
    let Ok(input) = std::str::from_utf8(&data[1..]) else {
        return;
    };
    let Ok(formula) = parse(input) else {
        return;
    };
    let strategy = Strategy::ALL[data[0] as usize % Strategy::ALL.len()];

    let simplifier = Simplifier::with_strategy(strategy);
    let (once, metrics) = simplifier.run(&formula);
    assert!(metrics.converged, "`{}` did not converge", formula);
    assert!(once.validate().is_ok());

    let (twice, _) = simplifier.run(&once);
    assert_eq!(once, twice, "`{}` is not a fixpoint", once);

    let printed = once.to_string();
    if let Ok(reparsed) = parse(&printed) {
        assert_eq!(reparsed.to_string(), printed);
    }
});
