use circuitpath::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Ring of `n` components with a chord from every node to the one two steps ahead.
fn chorded_ring(n: usize) -> CircuitGraph {
    let mut graph = new_graph("Chorded Ring");
    for i in 0..n {
        add_component(&mut graph, &format!("N{}", i), "Resistor", None).unwrap();
    }
    for i in 0..n {
        let a = format!("N{}", i);
        add_connection(&mut graph, &a, &format!("N{}", (i + 2) % n), 2.0).unwrap();
        add_connection(&mut graph, &a, &format!("N{}", (i + 1) % n), 1.0).unwrap();
    }
    graph
}

/// Chain with one pendant per node: no Hamiltonian path, full exhaustion.
fn comb(n: usize) -> CircuitGraph {
    let mut graph = new_graph("Comb");
    for i in 0..n {
        add_component(&mut graph, &format!("N{}", i), "Resistor", None).unwrap();
        add_component(&mut graph, &format!("P{}", i), "Capacitor", None).unwrap();
    }
    for i in 0..n {
        if i + 1 < n {
            add_connection(&mut graph, &format!("N{}", i), &format!("N{}", i + 1), 1.0).unwrap();
        }
        add_connection(&mut graph, &format!("N{}", i), &format!("P{}", i), 1.0).unwrap();
    }
    graph
}

fn bench_find_cycle(c: &mut Criterion) {
    let graph = chorded_ring(16);
    c.bench_function("find_cycle_chorded_ring_16", |b| {
        b.iter(|| find_hamiltonian_cycle(black_box(&graph)))
    });
}

fn bench_exhaustive_search(c: &mut Criterion) {
    let graph = comb(8);
    c.bench_function("exhaust_comb_8", |b| {
        b.iter(|| find_hamiltonian_path(black_box(&graph)))
    });
}

fn bench_analyze_sample(c: &mut Criterion) {
    let graph = circuitpath::sample_circuit();
    c.bench_function("analyze_sample_circuit", |b| {
        b.iter(|| CircuitPathCore::analyze(black_box(&graph), AnalysisOptions::default()))
    });
}

criterion_group!(benches, bench_find_cycle, bench_exhaustive_search, bench_analyze_sample);
criterion_main!(benches);
