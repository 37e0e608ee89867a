//! Circuit Graph Implementation
//!
//! This module provides the weighted, undirected circuit graph using petgraph.
//! Node indices follow component insertion order and edge indices follow
//! connection insertion order, which gives every query a deterministic
//! iteration order:
//! - Components are listed in the order they were added
//! - Neighbours are listed in the order their connections were first added
//! - Re-adding an existing pair rewrites its weight in place

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use thiserror::Error;

use super::schema::*;

/// Resistance assumed for a pair of components that share no connection
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Errors raised by graph mutation and queries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("Component already exists: {0}")]
    DuplicateComponent(String),

    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Invalid connection: cannot connect {0} to itself")]
    InvalidConnection(String),

    #[error("Invalid weight {weight} for connection {a}-{b}: must be finite and non-negative")]
    InvalidWeight { a: String, b: String, weight: f64 },
}

/// The circuit graph: components as nodes, resistances as edge weights
#[derive(Debug, Clone)]
pub struct CircuitGraph {
    /// The underlying graph structure
    graph: UnGraph<Component, f64>,

    /// Index mapping: component id -> node index
    indices: HashMap<String, NodeIndex>,

    /// Circuit metadata
    pub metadata: GraphMetadata,
}

impl CircuitGraph {
    /// Create a new empty circuit graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            graph: UnGraph::default(),
            indices: HashMap::new(),
            metadata: GraphMetadata::new(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Add a component with no connections
    pub fn add_component(&mut self, component: Component) -> Result<(), GraphError> {
        if self.indices.contains_key(&component.id) {
            return Err(GraphError::DuplicateComponent(component.id));
        }
        let id = component.id.clone();
        let idx = self.graph.add_node(component);
        self.indices.insert(id, idx);
        Ok(())
    }

    /// Connect two components, or overwrite the weight of an existing pair
    pub fn add_connection(&mut self, a: &str, b: &str, weight: f64) -> Result<(), GraphError> {
        let a_idx = self.index_of(a)?;
        let b_idx = self.index_of(b)?;
        if a_idx == b_idx {
            return Err(GraphError::InvalidConnection(a.to_string()));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                a: a.to_string(),
                b: b.to_string(),
                weight,
            });
        }

        match self.graph.find_edge(a_idx, b_idx) {
            Some(edge) => {
                if let Some(stored) = self.graph.edge_weight_mut(edge) {
                    tracing::debug!("Updating connection {}-{}: {} -> {}", a, b, stored, weight);
                    *stored = weight;
                }
            }
            None => {
                self.graph.add_edge(a_idx, b_idx, weight);
            }
        }
        Ok(())
    }

    /// Get a component by id
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.indices
            .get(id)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.indices.contains_key(id)
    }

    /// All components, in insertion order
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.graph.node_weights()
    }

    /// All component ids, in insertion order
    pub fn component_ids(&self) -> Vec<String> {
        self.components().map(|c| c.id.clone()).collect()
    }

    /// All connections, in insertion order
    pub fn connections(&self) -> Vec<Connection> {
        self.graph
            .edge_references()
            .map(|edge| Connection {
                a: self.graph[edge.source()].id.clone(),
                b: self.graph[edge.target()].id.clone(),
                weight: *edge.weight(),
            })
            .collect()
    }

    /// Components connected to `id`, in the order their connections were added
    pub fn neighbors(&self, id: &str) -> Result<Vec<&Component>, GraphError> {
        let idx = self.index_of(id)?;
        Ok(self
            .ordered_neighbors(idx)
            .into_iter()
            .map(|n| &self.graph[n])
            .collect())
    }

    pub fn degree_of(&self, id: &str) -> Result<usize, GraphError> {
        let idx = self.index_of(id)?;
        Ok(self.graph.edges(idx).count())
    }

    pub fn has_connection(&self, a: &str, b: &str) -> bool {
        self.edge_between(a, b).is_some()
    }

    /// Weight of the connection between `a` and `b`, regardless of argument order.
    ///
    /// Both components must exist. A pair without a connection reports
    /// [`DEFAULT_WEIGHT`].
    pub fn connection_weight(&self, a: &str, b: &str) -> Result<f64, GraphError> {
        let a_idx = self.index_of(a)?;
        let b_idx = self.index_of(b)?;
        Ok(self
            .graph
            .find_edge(a_idx, b_idx)
            .and_then(|edge| self.graph.edge_weight(edge).copied())
            .unwrap_or(DEFAULT_WEIGHT))
    }

    /// Weight lookup that never fails: anything that is not a stored
    /// connection reports [`DEFAULT_WEIGHT`].
    pub fn weight_or_default(&self, a: &str, b: &str) -> f64 {
        self.edge_between(a, b)
            .and_then(|edge| self.graph.edge_weight(edge).copied())
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Square 0/1 matrix over component insertion order
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.graph.node_count();
        let mut matrix = vec![vec![0u8; n]; n];
        for edge in self.graph.edge_references() {
            let (i, j) = (edge.source().index(), edge.target().index());
            matrix[i][j] = 1;
            matrix[j][i] = 1;
        }
        matrix
    }

    pub fn component_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True when every component is reachable from every other one.
    /// The empty graph is not connected.
    pub fn is_connected(&self) -> bool {
        self.graph.node_count() > 0 && petgraph::algo::connected_components(&self.graph) == 1
    }

    /// `2|E| / (|V|(|V|-1))` for more than one component, else 0
    pub fn density(&self) -> f64 {
        let n = self.graph.node_count();
        if n < 2 {
            return 0.0;
        }
        let e = self.graph.edge_count() as f64;
        2.0 * e / (n as f64 * (n as f64 - 1.0))
    }

    /// Ordered adjacency lists keyed by node position, used by the search
    pub(crate) fn adjacency_snapshot(&self) -> Vec<Vec<usize>> {
        self.graph
            .node_indices()
            .map(|idx| {
                self.ordered_neighbors(idx)
                    .into_iter()
                    .map(|n| n.index())
                    .collect()
            })
            .collect()
    }

    pub(crate) fn graph(&self) -> &UnGraph<Component, f64> {
        &self.graph
    }

    fn index_of(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.indices
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownComponent(id.to_string()))
    }

    fn edge_between(&self, a: &str, b: &str) -> Option<EdgeIndex> {
        let a_idx = self.indices.get(a)?;
        let b_idx = self.indices.get(b)?;
        self.graph.find_edge(*a_idx, *b_idx)
    }

    /// Neighbours of `idx`, sorted by the index of the connecting edge
    fn ordered_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut incident: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges(idx)
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id(), other)
            })
            .collect();
        incident.sort_by_key(|(edge, _)| edge.index());
        incident.into_iter().map(|(_, node)| node).collect()
    }
}

impl Default for CircuitGraph {
    fn default() -> Self {
        Self::new("Circuit")
    }
}
