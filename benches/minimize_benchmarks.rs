//! Benchmark suite for normalization and Quine–McCluskey minimization
//!
//! Inputs are generated deterministically: parity functions (no merges at all),
//! threshold functions (many overlapping primes) and products of sums (heavy
//! distribution in the normalizer).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qmc_logic::{create_variables, normalize, QuineMcCluskey, Term};

fn variables(n: usize) -> Vec<Term> {
    let labels: Vec<String> = (0..n).map(|i| format!("x{:02}", i)).collect();
    create_variables(&labels).unwrap_or_default()
}

/// Sum of all minterms with an odd number of positive literals
fn parity(vars: &[Term]) -> Term {
    let mut products = Vec::new();
    for row in 0..(1usize << vars.len()) {
        if row.count_ones() % 2 == 1 {
            let literals = vars.iter().enumerate().map(|(i, v)| {
                if row & (1 << i) != 0 {
                    v.clone()
                } else {
                    !v
                }
            });
            products.extend(Term::all(literals));
        }
    }
    Term::any(products).unwrap_or_else(|_| vars[0].clone())
}

/// True when at least two variables are true
fn at_least_two(vars: &[Term]) -> Term {
    let mut pairs = Vec::new();
    for i in 0..vars.len() {
        for j in (i + 1)..vars.len() {
            pairs.push(&vars[i] & &vars[j]);
        }
    }
    Term::any(pairs).unwrap_or_else(|_| vars[0].clone())
}

/// `(x0 | x1) & (x1 | x2) & ...`
fn chain_of_sums(vars: &[Term]) -> Term {
    let clauses = vars.windows(2).map(|w| &w[0] | &w[1]);
    Term::all(clauses).unwrap_or_else(|_| vars[0].clone())
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for n in [3, 4, 5, 6] {
        let term = chain_of_sums(&variables(n));
        group.bench_with_input(BenchmarkId::new("chain_of_sums", n), &term, |b, term| {
            b.iter(|| normalize(black_box(term)))
        });
    }
    group.finish();
}

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for n in [3, 4, 5, 6] {
        let vars = variables(n);
        group.throughput(Throughput::Elements(1 << n));

        let term = parity(&vars);
        group.bench_with_input(BenchmarkId::new("parity", n), &term, |b, term| {
            b.iter(|| black_box(term).minimize())
        });

        let term = at_least_two(&vars);
        group.bench_with_input(BenchmarkId::new("at_least_two", n), &term, |b, term| {
            b.iter(|| black_box(term).minimize())
        });
    }
    group.finish();
}

fn bench_prime_implicants(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_implicants");
    for n in [4, 6, 8] {
        let term = at_least_two(&variables(n));
        let Ok(qm) = QuineMcCluskey::new(&term) else {
            continue;
        };
        let Ok(minterms) = qm.minterms() else {
            continue;
        };
        group.throughput(Throughput::Elements(minterms.len() as u64));
        group.bench_with_input(BenchmarkId::new("at_least_two", n), &minterms, |b, minterms| {
            b.iter(|| qm.prime_implicants(black_box(minterms)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_minimize,
    bench_prime_implicants
);
criterion_main!(benches);
