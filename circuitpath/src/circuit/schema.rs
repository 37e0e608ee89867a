//! Circuit Data Types
//!
//! Plain data carried by the circuit graph: component identity and kind,
//! advisory placement, stored connections and graph metadata.
//!
//! Component kinds are opaque labels. The well-known kinds get their own
//! variant, but any other label is still representable through
//! [`ComponentKind::Other`], so callers never lose data on the way in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Kind of an electronic component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Resistor,
    Capacitor,
    Inductor,
    Transistor,
    Ic,
    Source,
    /// Any label outside the well-known set
    Other(String),
}

impl ComponentKind {
    /// Canonical label for this kind.
    pub fn label(&self) -> &str {
        match self {
            ComponentKind::Resistor => "Resistor",
            ComponentKind::Capacitor => "Capacitor",
            ComponentKind::Inductor => "Inductor",
            ComponentKind::Transistor => "Transistor",
            ComponentKind::Ic => "IC",
            ComponentKind::Source => "Source",
            ComponentKind::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ComponentKind::Other(_))
    }
}

impl FromStr for ComponentKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "resistor" => ComponentKind::Resistor,
            "capacitor" => ComponentKind::Capacitor,
            "inductor" => ComponentKind::Inductor,
            "transistor" => ComponentKind::Transistor,
            "ic" => ComponentKind::Ic,
            "source" => ComponentKind::Source,
            _ => ComponentKind::Other(s.to_string()),
        };
        Ok(kind)
    }
}

impl From<String> for ComponentKind {
    fn from(label: String) -> Self {
        match label.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for ComponentKind {
    fn from(label: &str) -> Self {
        ComponentKind::from(label.to_string())
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        kind.label().to_string()
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Placement of a component on the drawing plane (advisory only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A node of the circuit graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier (e.g., "R1", "VCC")
    pub id: String,

    /// Component kind label
    pub kind: ComponentKind,

    /// Optional placement, ignored by every analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Component {
    pub fn new(id: impl Into<String>, kind: impl Into<ComponentKind>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }
}

/// A stored undirected connection and its resistance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

impl Connection {
    /// True if this connection joins `x` and `y`, in either orientation.
    pub fn joins(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Metadata about a circuit graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphMetadata {
    /// Circuit name
    pub name: String,

    /// When the graph was created
    pub created: DateTime<Utc>,
}

impl GraphMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: Utc::now(),
        }
    }
}

impl Default for GraphMetadata {
    fn default() -> Self {
        Self::new("Circuit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("resistor".parse::<ComponentKind>().unwrap(), ComponentKind::Resistor);
        assert_eq!("IC".parse::<ComponentKind>().unwrap(), ComponentKind::Ic);
        assert_eq!(" Source ".parse::<ComponentKind>().unwrap(), ComponentKind::Source);
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let kind = ComponentKind::from("Memristor");
        assert_eq!(kind, ComponentKind::Other("Memristor".to_string()));
        assert_eq!(kind.label(), "Memristor");
        assert!(!kind.is_known());
    }

    #[test]
    fn test_kind_serializes_as_label() {
        let json = serde_json::to_string(&ComponentKind::Ic).unwrap();
        assert_eq!(json, "\"IC\"");

        let kind: ComponentKind = serde_json::from_str("\"Diode\"").unwrap();
        assert_eq!(kind, ComponentKind::Other("Diode".to_string()));
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_connection_joins_both_orientations() {
        let conn = Connection {
            a: "R1".to_string(),
            b: "C1".to_string(),
            weight: 5.0,
        };
        assert!(conn.joins("R1", "C1"));
        assert!(conn.joins("C1", "R1"));
        assert!(!conn.joins("R1", "L1"));
    }
}
