//! CircuitPath - Hamiltonian path analysis for electronic circuits
//!
//! This library models a circuit as an undirected graph whose edges carry a
//! resistance, finds a path that visits every component exactly once, closes
//! it into a cycle when possible, and scores the result by energy efficiency.
//!
//! # Quick Start
//!
//! ```
//! use circuitpath::prelude::*;
//!
//! let mut graph = new_graph("Ring");
//! for id in ["A", "B", "C", "D"] {
//!     add_component(&mut graph, id, ComponentKind::Resistor, None).unwrap();
//! }
//! add_connection(&mut graph, "A", "B", 1.0).unwrap();
//! add_connection(&mut graph, "B", "C", 2.0).unwrap();
//! add_connection(&mut graph, "C", "D", 3.0).unwrap();
//! add_connection(&mut graph, "D", "A", 4.0).unwrap();
//!
//! let cycle = find_hamiltonian_cycle(&graph).unwrap().unwrap();
//! assert_eq!(cycle, ["A", "B", "C", "D", "A"]);
//!
//! let report = compute_efficiency(&graph, &cycle);
//! assert_eq!(report.total_weight, 10.0);
//! ```
//!
//! # Features
//!
//! - **Graph model**: insertion-ordered components and weighted connections
//! - **Hamiltonian search**: deterministic backtracking with optional time limit and interrupt
//! - **Efficiency**: `1 / (1 + total resistance)` with a high/medium/low tier
//! - **Circuit properties**: density, connectivity, diameter and degrees

pub mod circuit;
pub mod core;
pub mod efficiency;
pub mod search;

// Re-export main types
pub use circuit::{
    CircuitGraph, CircuitStats, Component, ComponentKind, Connection, GraphError, Position,
    DEFAULT_WEIGHT,
};
pub use crate::core::{sample_circuit, AnalysisOptions, AnalysisReport, CircuitPathCore, CircuitPathError};
pub use efficiency::{compute_efficiency, EfficiencyReport, Tier};
pub use search::{HamiltonianSearch, SearchError, SearchOptions, SearchReport, SearchStats};

/// Create an empty circuit graph.
pub fn new_graph(name: &str) -> CircuitGraph {
    CircuitGraph::new(name)
}

/// Add a component to `graph` (convenience wrapper).
pub fn add_component(
    graph: &mut CircuitGraph,
    id: &str,
    kind: impl Into<ComponentKind>,
    position: Option<Position>,
) -> Result<(), GraphError> {
    let mut component = Component::new(id, kind);
    component.position = position;
    graph.add_component(component)
}

/// Connect two components in `graph` (convenience wrapper).
pub fn add_connection(
    graph: &mut CircuitGraph,
    a: &str,
    b: &str,
    weight: f64,
) -> Result<(), GraphError> {
    graph.add_connection(a, b, weight)
}

/// First Hamiltonian path in `graph`, without a time limit.
pub fn find_hamiltonian_path(graph: &CircuitGraph) -> Result<Option<Vec<String>>, SearchError> {
    HamiltonianSearch::new(graph).find_path()
}

/// Hamiltonian cycle derived from the first path found, without a time limit.
pub fn find_hamiltonian_cycle(graph: &CircuitGraph) -> Result<Option<Vec<String>>, SearchError> {
    HamiltonianSearch::new(graph).find_cycle()
}

/// Whether `graph` has a Hamiltonian path. Never fails.
pub fn is_hamiltonian(graph: &CircuitGraph) -> bool {
    HamiltonianSearch::new(graph).is_hamiltonian()
}

/// Circuit properties report for `graph`.
pub fn graph_stats(graph: &CircuitGraph) -> CircuitStats {
    graph.stats()
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        add_component, add_connection, compute_efficiency, find_hamiltonian_cycle,
        find_hamiltonian_path, graph_stats, is_hamiltonian, new_graph, AnalysisOptions,
        AnalysisReport, CircuitGraph, CircuitPathCore, CircuitPathError, CircuitStats, Component,
        ComponentKind, EfficiencyReport, GraphError, HamiltonianSearch, SearchError,
        SearchOptions, Tier,
    };
}
