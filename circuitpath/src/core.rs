//! Core analysis logic shared by the CLI and library callers.
//! No rendering or front-end dependencies.

use serde::Serialize;
use std::time::Instant;

use crate::circuit::{CircuitGraph, CircuitStats, Component, ComponentKind, GraphError};
use crate::efficiency::{compute_efficiency, EfficiencyReport};
use crate::search::{close_cycle, HamiltonianSearch, SearchError, SearchOptions, SearchStats};

#[derive(Debug, thiserror::Error)]
pub enum CircuitPathError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Options for analysis runs (CLI or library).
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    pub search: SearchOptions,
    pub include_cycle: bool,
    pub include_stats: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            search: SearchOptions::default(),
            include_cycle: true,
            include_stats: true,
        }
    }
}

/// Everything known about one circuit after analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub circuit: String,
    pub path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_efficiency: Option<EfficiencyReport>,
    pub cycle: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_efficiency: Option<EfficiencyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CircuitStats>,
    pub search: SearchStats,
    /// Wall time spent searching, in milliseconds
    pub search_time_ms: f64,
}

impl AnalysisReport {
    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    pub fn to_json_pretty(&self) -> Result<String, CircuitPathError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Core analysis API used by both the CLI and library callers.
pub struct CircuitPathCore;

impl CircuitPathCore {
    /// Search for a Hamiltonian path, derive the cycle from it, and score both.
    pub fn analyze(
        graph: &CircuitGraph,
        options: AnalysisOptions,
    ) -> Result<AnalysisReport, CircuitPathError> {
        let started = Instant::now();
        let report = HamiltonianSearch::new(graph)
            .with_options(options.search)
            .run()?;
        let search_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        let cycle = if options.include_cycle {
            report.path.clone().and_then(|path| close_cycle(graph, path))
        } else {
            None
        };

        let path_efficiency = report
            .path
            .as_ref()
            .map(|path| compute_efficiency(graph, path));
        let cycle_efficiency = cycle.as_ref().map(|cycle| compute_efficiency(graph, cycle));

        tracing::info!(
            "Analyzed '{}': path={} cycle={} in {:.3} ms",
            graph.name(),
            report.path.is_some(),
            cycle.is_some(),
            search_time_ms
        );

        Ok(AnalysisReport {
            circuit: graph.name().to_string(),
            path: report.path,
            path_efficiency,
            cycle,
            cycle_efficiency,
            stats: options.include_stats.then(|| graph.stats()),
            search: report.stats,
            search_time_ms,
        })
    }
}

/// Built-in example circuit: six components joined in a weighted ring,
/// which has a Hamiltonian cycle.
pub fn sample_circuit() -> CircuitGraph {
    let mut graph = CircuitGraph::new("Sample Circuit");

    let components = [
        ("R1", ComponentKind::Resistor),
        ("R2", ComponentKind::Resistor),
        ("C1", ComponentKind::Capacitor),
        ("L1", ComponentKind::Inductor),
        ("T1", ComponentKind::Transistor),
        ("VCC", ComponentKind::Source),
    ];
    let connections = [
        ("VCC", "R1", 10.0),
        ("R1", "C1", 5.0),
        ("C1", "L1", 3.0),
        ("L1", "T1", 8.0),
        ("T1", "R2", 6.0),
        ("R2", "VCC", 4.0),
    ];

    // Ids are distinct and every connection names known components.
    for (id, kind) in components {
        if let Err(e) = graph.add_component(Component::new(id, kind)) {
            tracing::error!("Sample circuit: {}", e);
        }
    }
    for (a, b, weight) in connections {
        if let Err(e) = graph.add_connection(a, b, weight) {
            tracing::error!("Sample circuit: {}", e);
        }
    }

    graph
}
