//! Example: Quine–McCluskey minimization step by step
//!
//! Builds a few terms with the expr! macro, normalizes them, and walks through
//! minterms, prime implicants and the selected cover.

use qmc_logic::{create_variables, expr, MinimizeConfig, QuineMcCluskey};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let vars = create_variables(["a", "b", "c", "d"])?;
    let (a, b, c, d) = (&vars[0], &vars[1], &vars[2], &vars[3]);

    println!("=== Normalization ===\n");
    for term in [
        expr!((a | b) & c),
        expr!(a & (a | c)),
        expr!(!((a | b) & !c)),
        expr!(!(a | b & c) & d),
    ] {
        println!("   {}  =>  {}", term, term.normalize());
    }
    println!();

    println!("=== Minimization Pipeline ===\n");
    let term = expr!(!a & !b & c & d | b & c & d | a & b & !c | a & !b & c & d);
    println!("   Input: {}", term);

    let qm = QuineMcCluskey::new(&term)?;
    let minterms = qm.minterms()?;
    println!("   Minterms over {:?}:", qm.variables());
    for minterm in &minterms {
        println!("      {}", minterm);
    }

    let primes = qm.prime_implicants(&minterms);
    println!("   Prime implicants:");
    for prime in &primes {
        println!("      {:?}", prime);
    }

    let cover = qm.essential_and_selected_implicants(&primes)?;
    println!("   Selected cover:");
    for cube in &cover {
        println!("      {:?}", cube);
    }
    let minimized = qm.restore(&cover);
    println!("   Result: {}", minimized);
    println!("   Equivalent: {}", minimized.equivalent_to(&term));
    println!();

    println!("=== Petrick's Method ===\n");
    // No prime is essential for m(0, 1, 2, 5, 6, 7)
    let cyclic = expr!(!a & !b & !c | !a & !b & c | !a & b & !c | a & !b & c | a & b & !c | a & b & c);
    println!("   Input:  {}", cyclic);
    println!("   Result: {}", cyclic.minimize()?);
    println!();

    println!("=== Size Limits ===\n");
    let config = MinimizeConfig {
        max_variables: 3,
        ..MinimizeConfig::default()
    };
    match term.minimize_with_config(&config) {
        Ok(result) => println!("   Minimized: {}", result),
        Err(err) => println!("   Rejected: {}", err),
    }

    Ok(())
}
