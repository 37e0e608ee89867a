//! Building a circuit graph from command-line specs.

use anyhow::{anyhow, bail, Context, Result};
use circuitpath::{CircuitGraph, Component, ComponentKind, Position, DEFAULT_WEIGHT};

/// Parse `ID=KIND` or `ID=KIND@X,Y`.
pub fn parse_component(spec: &str) -> Result<Component> {
    let (id, rest) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid component '{}': expected ID=KIND[@X,Y]", spec))?;
    let id = id.trim();
    if id.is_empty() {
        bail!("Invalid component '{}': empty id", spec);
    }

    let (kind, position) = match rest.split_once('@') {
        Some((kind, position)) => (kind, Some(parse_position(position, spec)?)),
        None => (rest, None),
    };
    if kind.trim().is_empty() {
        bail!("Invalid component '{}': empty kind", spec);
    }

    let mut component = Component::new(id, ComponentKind::from(kind.trim()));
    component.position = position;
    Ok(component)
}

fn parse_position(text: &str, spec: &str) -> Result<Position> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("Invalid position in '{}': expected X,Y", spec))?;
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("Invalid x coordinate in '{}'", spec))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("Invalid y coordinate in '{}'", spec))?;
    Ok(Position::new(x, y))
}

/// Parse `A,B` or `A,B,WEIGHT`. A missing weight is [`DEFAULT_WEIGHT`].
pub fn parse_connection(spec: &str) -> Result<(String, String, f64)> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let (a, b, weight) = match parts.as_slice() {
        [a, b] => (*a, *b, DEFAULT_WEIGHT),
        [a, b, weight] => {
            let weight: f64 = weight
                .parse()
                .with_context(|| format!("Invalid weight in connection '{}'", spec))?;
            (*a, *b, weight)
        }
        _ => bail!("Invalid connection '{}': expected A,B[,WEIGHT]", spec),
    };
    if a.is_empty() || b.is_empty() {
        bail!("Invalid connection '{}': empty component id", spec);
    }
    Ok((a.to_string(), b.to_string(), weight))
}

/// Build a graph from an optional base circuit plus component and connection specs.
pub fn build_graph(
    base: Option<CircuitGraph>,
    name: &str,
    components: &[String],
    connections: &[String],
) -> Result<CircuitGraph> {
    let mut graph = base.unwrap_or_else(|| CircuitGraph::new(name));

    for spec in components {
        let component = parse_component(spec)?;
        tracing::debug!("Adding component {} ({})", component.id, component.kind);
        graph.add_component(component)?;
    }
    for spec in connections {
        let (a, b, weight) = parse_connection(spec)?;
        tracing::debug!("Connecting {}-{} (R={})", a, b, weight);
        graph.add_connection(&a, &b, weight)?;
    }

    Ok(graph)
}

/// Parse a comma-separated list of component ids.
pub fn parse_route(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
