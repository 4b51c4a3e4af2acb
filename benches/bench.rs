use std::fmt::Write;
use std::hint::black_box;

use aig2cnf::{Assignments, parse_aag, translate};
use criterion::{Criterion, criterion_group, criterion_main};

/// A chain of `num_ands` gates, each combining the previous gate with the next input.
fn chain_circuit(num_ands: usize) -> String {
    let num_inputs = num_ands + 1;
    let num_vars = num_inputs + num_ands;
    let mut src = String::new();
    writeln!(src, "aag {} {} 0 1 {}", num_vars, num_inputs, num_ands).unwrap();

    for i in 1..=num_inputs {
        writeln!(src, "{}", 2 * i).unwrap();
    }
    writeln!(src, "{}", 2 * num_vars).unwrap();

    let mut prev = 2;
    for k in 0..num_ands {
        let lhs = 2 * (num_inputs + 1 + k);
        writeln!(src, "{} {} {}", lhs, prev, 2 * (k + 2) + (k & 1)).unwrap();
        prev = lhs;
    }

    for i in 0..num_inputs {
        writeln!(src, "i{} x{}", i, i).unwrap();
    }
    writeln!(src, "o0 out").unwrap();
    src
}

fn bench_parse(c: &mut Criterion) {
    let data = chain_circuit(10_000);

    c.bench_function("parse_aag", |b| {
        b.iter(|| {
            let _ = parse_aag(black_box(data.as_bytes())).unwrap();
        })
    });
}

fn bench_translate(c: &mut Criterion) {
    let data = chain_circuit(10_000);
    let circuit = parse_aag(data.as_bytes()).expect("failed to parse fixture");
    let assignments = Assignments::from_args(["out=1", "x0=0"]).unwrap();
    assert_eq!(circuit.gates.len(), 10_000);

    c.bench_function("translate", |b| {
        b.iter(|| {
            let translation = translate(black_box(&circuit), &assignments).unwrap();
            let _ = translation.render().unwrap();
        })
    });
}

criterion_group!(benches, bench_parse, bench_translate);
criterion_main!(benches);
