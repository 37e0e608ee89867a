//! Circuit properties report: size, density, connectivity, diameter and degrees.

use petgraph::algo::dijkstra;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::graph::CircuitGraph;

/// Statistics about a circuit graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitStats {
    pub component_count: usize,
    pub connection_count: usize,
    pub density: f64,
    pub is_connected: bool,
    /// Longest shortest path in hops, only for connected graphs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<usize>,
    pub average_degree: f64,
    pub max_degree: usize,
    /// Number of components per kind label
    pub kind_counts: BTreeMap<String, usize>,
}

impl CircuitGraph {
    /// Get statistics about the circuit
    pub fn stats(&self) -> CircuitStats {
        let component_count = self.component_count();
        let connection_count = self.connection_count();
        let is_connected = self.is_connected();

        let graph = self.graph();
        let max_degree = graph
            .node_indices()
            .map(|idx| graph.edges(idx).count())
            .max()
            .unwrap_or(0);

        let average_degree = if component_count == 0 {
            0.0
        } else {
            2.0 * connection_count as f64 / component_count as f64
        };

        let mut kind_counts = BTreeMap::new();
        for component in self.components() {
            *kind_counts.entry(component.kind.label().to_string()).or_insert(0) += 1;
        }

        CircuitStats {
            component_count,
            connection_count,
            density: self.density(),
            is_connected,
            diameter: if is_connected { Some(self.hop_diameter()) } else { None },
            average_degree,
            max_degree,
            kind_counts,
        }
    }

    /// Longest unweighted shortest-path distance. Callers must check connectivity.
    fn hop_diameter(&self) -> usize {
        let graph = self.graph();
        graph
            .node_indices()
            .filter_map(|start| {
                dijkstra(graph, start, None, |_| 1usize)
                    .into_values()
                    .max()
            })
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use crate::circuit::{CircuitGraph, Component, ComponentKind};

    fn ring(ids: &[&str]) -> CircuitGraph {
        let mut graph = CircuitGraph::new("Ring");
        for id in ids {
            graph.add_component(Component::new(*id, ComponentKind::Resistor)).unwrap();
        }
        for pair in ids.windows(2) {
            graph.add_connection(pair[0], pair[1], 1.0).unwrap();
        }
        graph.add_connection(ids[ids.len() - 1], ids[0], 1.0).unwrap();
        graph
    }

    #[test]
    fn test_ring_stats() {
        let stats = ring(&["A", "B", "C", "D", "E", "F"]).stats();

        assert_eq!(stats.component_count, 6);
        assert_eq!(stats.connection_count, 6);
        assert!(stats.is_connected);
        assert_eq!(stats.diameter, Some(3));
        assert!((stats.average_degree - 2.0).abs() < 1e-12);
        assert_eq!(stats.max_degree, 2);
        assert!((stats.density - 0.4).abs() < 1e-12);
        assert_eq!(stats.kind_counts.get("Resistor"), Some(&6));
    }

    #[test]
    fn test_disconnected_has_no_diameter() {
        let mut graph = ring(&["A", "B", "C"]);
        graph.add_component(Component::new("X", "IC")).unwrap();

        let stats = graph.stats();
        assert!(!stats.is_connected);
        assert_eq!(stats.diameter, None);
        assert_eq!(stats.kind_counts.get("IC"), Some(&1));
    }

    #[test]
    fn test_trivial_graphs() {
        let empty = CircuitGraph::new("Empty").stats();
        assert_eq!(empty.component_count, 0);
        assert!(!empty.is_connected);
        assert_eq!(empty.diameter, None);
        assert_eq!(empty.average_degree, 0.0);

        let mut single = CircuitGraph::new("Single");
        single.add_component(Component::new("U1", "IC")).unwrap();
        let stats = single.stats();
        assert!(stats.is_connected);
        assert_eq!(stats.diameter, Some(0));
        assert_eq!(stats.density, 0.0);
    }
}
