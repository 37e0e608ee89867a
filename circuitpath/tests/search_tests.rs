//! Tests for search limits: time limits and interrupts

use circuitpath::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Components 0..n joined in a chain plus one pendant per chain node.
/// No Hamiltonian path exists, and the search has plenty of work to do.
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

#[test]
fn test_zero_time_limit_times_out() {
    let graph = comb(6);
    let options = SearchOptions::default()
        .with_time_limit(Duration::ZERO)
        .with_clock_check_mask(0);

    let result = HamiltonianSearch::new(&graph).with_options(options).find_path();
    assert!(matches!(result, Err(SearchError::TimedOut { .. })));
}

#[test]
fn test_generous_time_limit_matches_unbounded_search() {
    let graph = comb(5);
    let bounded = HamiltonianSearch::new(&graph)
        .with_options(SearchOptions::default().with_time_limit(Duration::from_secs(60)))
        .find_path()
        .unwrap();

    assert_eq!(bounded, find_hamiltonian_path(&graph).unwrap());
    assert_eq!(bounded, None);
}

#[test]
fn test_interrupt_stops_search() {
    let graph = comb(6);
    let flag = Arc::new(AtomicBool::new(false));
    flag.store(true, Ordering::Relaxed);

    let search =
        HamiltonianSearch::new(&graph).with_options(SearchOptions::default().with_interrupt(flag));

    assert_eq!(search.find_path(), Err(SearchError::Interrupted));
    assert_eq!(search.find_cycle(), Err(SearchError::Interrupted));
}

#[test]
fn test_existence_check_swallows_timeouts() {
    let mut graph = new_graph("Ring");
    for id in ["A", "B", "C"] {
        add_component(&mut graph, id, "Resistor", None).unwrap();
    }
    add_connection(&mut graph, "A", "B", 1.0).unwrap();
    add_connection(&mut graph, "B", "C", 1.0).unwrap();
    add_connection(&mut graph, "C", "A", 1.0).unwrap();

    let limited = HamiltonianSearch::new(&graph).with_options(
        SearchOptions::default()
            .with_time_limit(Duration::ZERO)
            .with_clock_check_mask(0),
    );
    assert!(!limited.is_hamiltonian());
    assert!(HamiltonianSearch::new(&graph).is_hamiltonian());
}

#[test]
fn test_analysis_propagates_timeouts() {
    let graph = comb(6);
    let options = AnalysisOptions {
        search: SearchOptions::default()
            .with_time_limit(Duration::ZERO)
            .with_clock_check_mask(0),
        ..AnalysisOptions::default()
    };

    match CircuitPathCore::analyze(&graph, options) {
        Err(CircuitPathError::Search(SearchError::TimedOut { .. })) => {}
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[test]
fn test_search_stats_are_reported() {
    let graph = comb(4);
    let report = HamiltonianSearch::new(&graph).run().unwrap();

    assert!(report.path.is_none());
    assert_eq!(report.stats.starts_tried, graph.component_count());
    assert!(report.stats.steps > 0);
    assert!(report.stats.backtracks > 0);
}
