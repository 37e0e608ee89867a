//! Hamiltonian Search Engine
//!
//! Backtracking depth-first search for a path that visits every component
//! exactly once. The search is deterministic:
//! - start components are tried in component insertion order
//! - from each component, neighbours are tried in connection insertion order
//! - the first full-length path wins
//!
//! Given the same construction order, every run returns the same sequence.
//!
//! The walk keeps a single path buffer, a visited array and one neighbour
//! cursor per depth. Descending pushes, backtracking pops, and the order in
//! which candidates are visited is exactly the order of the plain recursive
//! formulation.

pub mod budget;

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::circuit::CircuitGraph;
pub use budget::SearchOptions;
use budget::SearchBudget;

/// Reasons a search can stop without an answer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Search timed out after {elapsed:?}")]
    TimedOut { elapsed: Duration },

    #[error("Search interrupted")]
    Interrupted,

    #[error("Inconsistent graph: {0}")]
    InconsistentGraph(String),
}

/// Work done by one search run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Number of extension attempts
    pub steps: u64,
    /// Number of dead ends undone
    pub backtracks: u64,
    /// Number of start components tried
    pub starts_tried: usize,
    pub elapsed: Duration,
}

/// Outcome of a completed search
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// First Hamiltonian path found, if any
    pub path: Option<Vec<String>>,
    pub stats: SearchStats,
}

/// Hamiltonian path and cycle search over a circuit graph
#[derive(Debug, Clone)]
pub struct HamiltonianSearch<'g> {
    graph: &'g CircuitGraph,
    options: SearchOptions,
}

impl<'g> HamiltonianSearch<'g> {
    pub fn new(graph: &'g CircuitGraph) -> Self {
        Self {
            graph,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the search and report the first path found together with stats.
    ///
    /// Graphs with fewer than two components are their own path.
    pub fn run(&self) -> Result<SearchReport, SearchError> {
        let ids = self.graph.component_ids();
        let n = ids.len();
        let mut budget = SearchBudget::start(&self.options);
        let mut stats = SearchStats::default();

        if n < 2 {
            stats.elapsed = budget.elapsed();
            return Ok(SearchReport {
                path: Some(ids),
                stats,
            });
        }

        let adjacency = self.graph.adjacency_snapshot();
        check_adjacency(&adjacency)?;

        tracing::debug!(
            "Searching Hamiltonian path in '{}' ({} components)",
            self.graph.name(),
            n
        );

        let mut walk = Walk::new(n);
        let mut path = None;
        for start in 0..n {
            stats.starts_tried += 1;
            tracing::trace!("Trying start component {}", ids[start]);

            match walk.explore(start, &adjacency, &mut budget) {
                Ok(true) => {
                    path = Some(walk.path.iter().map(|&i| ids[i].clone()).collect());
                    break;
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("Hamiltonian search aborted after {} steps: {}", budget.steps(), e);
                    return Err(e);
                }
            }
        }

        stats.steps = budget.steps();
        stats.backtracks = walk.backtracks;
        stats.elapsed = budget.elapsed();

        tracing::debug!(
            "Hamiltonian search finished: found={} steps={} backtracks={} in {:?}",
            path.is_some(),
            stats.steps,
            stats.backtracks,
            stats.elapsed
        );

        Ok(SearchReport { path, stats })
    }

    /// First Hamiltonian path, or `None` if the graph has none.
    pub fn find_path(&self) -> Result<Option<Vec<String>>, SearchError> {
        Ok(self.run()?.path)
    }

    /// Hamiltonian cycle derived from the first path found.
    ///
    /// Only that single path is considered: when its endpoints are not
    /// connected the answer is `None`, even if another Hamiltonian path with
    /// connected endpoints exists.
    pub fn find_cycle(&self) -> Result<Option<Vec<String>>, SearchError> {
        let path = match self.find_path()? {
            Some(path) if path.len() >= 2 => path,
            _ => return Ok(None),
        };
        Ok(close_cycle(self.graph, path))
    }

    /// Whether a Hamiltonian path exists. Never fails: any error, including
    /// a timeout or interrupt, reports `false`.
    pub fn is_hamiltonian(&self) -> bool {
        match self.find_path() {
            Ok(path) => path.is_some(),
            Err(e) => {
                tracing::debug!("Treating failed search as non-Hamiltonian: {}", e);
                false
            }
        }
    }
}

/// Append the first component if the path's endpoints are connected.
pub(crate) fn close_cycle(graph: &CircuitGraph, mut path: Vec<String>) -> Option<Vec<String>> {
    let first = path.first()?.clone();
    let last = path.last()?;
    if path.len() < 2 || !graph.has_connection(last, &first) {
        return None;
    }
    path.push(first);
    Some(path)
}

fn check_adjacency(adjacency: &[Vec<usize>]) -> Result<(), SearchError> {
    let n = adjacency.len();
    for (node, neighbors) in adjacency.iter().enumerate() {
        for &next in neighbors {
            if next >= n {
                return Err(SearchError::InconsistentGraph(format!(
                    "node {} references missing node {}",
                    node, next
                )));
            }
            if next == node {
                return Err(SearchError::InconsistentGraph(format!(
                    "node {} is connected to itself",
                    node
                )));
            }
        }
    }
    Ok(())
}

/// Reusable DFS state: path buffer, visited markers and neighbour cursors
struct Walk {
    path: Vec<usize>,
    visited: Vec<bool>,
    cursors: Vec<usize>,
    backtracks: u64,
}

impl Walk {
    fn new(n: usize) -> Self {
        Self {
            path: Vec::with_capacity(n),
            visited: vec![false; n],
            cursors: Vec::with_capacity(n),
            backtracks: 0,
        }
    }

    /// Search for a full-length path starting at `start`.
    ///
    /// On success `self.path` holds the path. On failure the walk is left
    /// empty and ready for the next start.
    fn explore(
        &mut self,
        start: usize,
        adjacency: &[Vec<usize>],
        budget: &mut SearchBudget<'_>,
    ) -> Result<bool, SearchError> {
        let n = adjacency.len();
        self.reset();
        self.descend(start);

        loop {
            if self.path.len() == n {
                return Ok(true);
            }
            budget.on_step()?;

            let depth = self.path.len() - 1;
            let neighbors = &adjacency[self.path[depth]];

            let mut next = None;
            while self.cursors[depth] < neighbors.len() {
                let candidate = neighbors[self.cursors[depth]];
                self.cursors[depth] += 1;
                if !self.visited[candidate] {
                    next = Some(candidate);
                    break;
                }
            }

            match next {
                Some(node) => self.descend(node),
                None => {
                    self.ascend();
                    if self.path.is_empty() {
                        return Ok(false);
                    }
                }
            }
        }
    }

    fn descend(&mut self, node: usize) {
        self.visited[node] = true;
        self.path.push(node);
        self.cursors.push(0);
    }

    fn ascend(&mut self) {
        if let Some(node) = self.path.pop() {
            self.visited[node] = false;
            self.cursors.pop();
            self.backtracks += 1;
        }
    }

    fn reset(&mut self) {
        self.path.clear();
        self.cursors.clear();
        self.visited.iter_mut().for_each(|v| *v = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{CircuitGraph, Component, ComponentKind};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn build(ids: &[&str], connections: &[(&str, &str)]) -> CircuitGraph {
        let mut graph = CircuitGraph::new("Test");
        for id in ids {
            graph.add_component(Component::new(*id, ComponentKind::Resistor)).unwrap();
        }
        for (a, b) in connections {
            graph.add_connection(a, b, 1.0).unwrap();
        }
        graph
    }

    #[test]
    fn test_ring_path_and_cycle() {
        let graph = build(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
        );
        let search = HamiltonianSearch::new(&graph);

        assert_eq!(search.find_path().unwrap(), Some(vec!["A".into(), "B".into(), "C".into(), "D".into()]));
        assert_eq!(
            search.find_cycle().unwrap(),
            Some(vec!["A".into(), "B".into(), "C".into(), "D".into(), "A".into()])
        );
        assert!(search.is_hamiltonian());
    }

    #[test]
    fn test_star_has_no_path() {
        let graph = build(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("A", "D")],
        );
        let search = HamiltonianSearch::new(&graph);

        let report = search.run().unwrap();
        assert_eq!(report.path, None);
        assert_eq!(report.stats.starts_tried, 4);
        assert!(report.stats.backtracks > 0);
        assert_eq!(search.find_cycle().unwrap(), None);
        assert!(!search.is_hamiltonian());
    }

    #[test]
    fn test_backtracks_to_later_start() {
        // From A the walk dead-ends at B, then A-C-D misses B.
        let graph = build(&["A", "B", "C", "D"], &[("A", "B"), ("A", "C"), ("C", "D")]);
        let report = HamiltonianSearch::new(&graph).run().unwrap();

        assert_eq!(
            report.path,
            Some(vec!["B".into(), "A".into(), "C".into(), "D".into()])
        );
        assert_eq!(report.stats.starts_tried, 2);
    }

    #[test]
    fn test_neighbor_order_decides_the_witness() {
        let graph = build(
            &["A", "B", "C"],
            &[("A", "C"), ("A", "B"), ("B", "C")],
        );
        assert_eq!(
            HamiltonianSearch::new(&graph).find_path().unwrap(),
            Some(vec!["A".into(), "C".into(), "B".into()])
        );
    }

    #[test]
    fn test_cycle_only_checks_first_path() {
        // A-B-D-C-A is a Hamiltonian cycle, but the first path is A-B-C-D
        // and D is not connected to A.
        let graph = build(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("B", "D"), ("A", "C")],
        );
        let search = HamiltonianSearch::new(&graph);

        assert_eq!(
            search.find_path().unwrap(),
            Some(vec!["A".into(), "B".into(), "C".into(), "D".into()])
        );
        assert_eq!(search.find_cycle().unwrap(), None);
    }

    #[test]
    fn test_trivial_graphs() {
        let empty = CircuitGraph::new("Empty");
        assert_eq!(HamiltonianSearch::new(&empty).find_path().unwrap(), Some(vec![]));
        assert_eq!(HamiltonianSearch::new(&empty).find_cycle().unwrap(), None);

        let single = build(&["U1"], &[]);
        assert_eq!(
            HamiltonianSearch::new(&single).find_path().unwrap(),
            Some(vec!["U1".into()])
        );
        assert_eq!(HamiltonianSearch::new(&single).find_cycle().unwrap(), None);
        assert!(HamiltonianSearch::new(&single).is_hamiltonian());
    }

    #[test]
    fn test_two_components() {
        let pair = build(&["A", "B"], &[("A", "B")]);
        assert_eq!(
            HamiltonianSearch::new(&pair).find_cycle().unwrap(),
            Some(vec!["A".into(), "B".into(), "A".into()])
        );

        let apart = build(&["A", "B"], &[]);
        assert_eq!(HamiltonianSearch::new(&apart).find_path().unwrap(), None);
    }

    #[test]
    fn test_interrupt_is_reported_strictly_and_swallowed_by_existence_check() {
        let graph = build(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let flag = Arc::new(AtomicBool::new(true));
        let search = HamiltonianSearch::new(&graph)
            .with_options(SearchOptions::default().with_interrupt(flag));

        assert_eq!(search.find_path(), Err(SearchError::Interrupted));
        assert!(!search.is_hamiltonian());
    }

    #[test]
    fn test_check_adjacency_rejects_bad_snapshots() {
        assert!(check_adjacency(&[vec![1], vec![0]]).is_ok());
        assert!(matches!(
            check_adjacency(&[vec![5], vec![0]]),
            Err(SearchError::InconsistentGraph(_))
        ));
        assert!(matches!(
            check_adjacency(&[vec![0]]),
            Err(SearchError::InconsistentGraph(_))
        ));
    }
}
