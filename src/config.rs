use std::io::Read;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::Filters;
use crate::vertex::Vertex;

/// Arity and label of an interaction vertex
///
/// Reads from and writes to a two-element sequence, e.g. `[3, g]`.
#[derive(
    Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize,
)]
#[serde(from = "(u32, String)", into = "(u32, String)")]
pub struct VertexType {
    pub arity: u32,
    pub label: String,
}

impl VertexType {
    pub fn new(arity: u32, label: impl Into<String>) -> Self {
        Self {
            arity,
            label: label.into(),
        }
    }

    pub fn instantiate(&self) -> Vertex {
        Vertex::internal(self.arity, self.label.as_str())
    }
}

impl From<(u32, String)> for VertexType {
    fn from((arity, label): (u32, String)) -> Self {
        Self { arity, label }
    }
}

impl From<VertexType> for (u32, String) {
    fn from(t: VertexType) -> Self {
        (t.arity, t.label)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Labels of the incoming momenta
    pub momenta_in: Vec<String>,
    /// Labels of the outgoing momenta
    pub momenta_out: Vec<String>,
    /// Catalog of interaction vertices
    pub vertex_types: Vec<VertexType>,
    /// Maximum number of interaction vertices in a diagram
    pub perturbation_order: usize,
    /// Reject diagrams with a line starting and ending on the same vertex
    pub normal_ordering: bool,
    /// Reject diagrams that are not connected
    pub fully_connected: bool,
    /// Reject diagrams with a piece not connected to any external vertex
    pub no_vacuum_pieces: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            momenta_in: vec!["p1".to_owned(), "p2".to_owned()],
            momenta_out: vec!["q1".to_owned(), "q2".to_owned()],
            vertex_types: vec![
                VertexType::new(3, "g"),
                VertexType::new(4, "λ"),
            ],
            perturbation_order: 2,
            normal_ordering: true,
            fully_connected: true,
            no_vacuum_pieces: true,
        }
    }
}

impl Config {
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(s: &str) -> Result<Self, ConfigError> {
        Self::from_reader(s.as_bytes())
    }

    /// Check that the configuration describes sensible diagrams
    pub fn validate(&self) -> Result<(), ConfigError> {
        use ConfigError::*;

        let mut momenta = AHashSet::new();
        for p in self.momenta_in.iter().chain(&self.momenta_out) {
            if p.is_empty() {
                return Err(EmptyLabel);
            }
            if !momenta.insert(p.as_str()) {
                return Err(DuplicateMomentum(p.clone()));
            }
        }
        let mut labels = AHashSet::new();
        for t in &self.vertex_types {
            if t.label.is_empty() {
                return Err(EmptyLabel);
            }
            if t.arity == 0 {
                return Err(ZeroArity(t.label.clone()));
            }
            if momenta.contains(t.label.as_str()) {
                return Err(LabelClash(t.label.clone()));
            }
            if !labels.insert(t.label.as_str()) {
                return Err(DuplicateVertexType(t.label.clone()));
            }
        }
        Ok(())
    }

    /// External vertices: incoming ones first, then outgoing ones
    pub fn external_vertices(&self) -> Vec<Vertex> {
        let incoming =
            self.momenta_in.iter().map(|p| Vertex::incoming(p.as_str()));
        let outgoing =
            self.momenta_out.iter().map(|q| Vertex::outgoing(q.as_str()));
        incoming.chain(outgoing).collect()
    }

    pub fn filters(&self) -> Filters {
        Filters {
            normal_ordering: self.normal_ordering,
            fully_connected: self.fully_connected,
            no_vacuum_pieces: self.no_vacuum_pieces,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Vertex type `{0}` has no slots")]
    ZeroArity(String),
    #[error("Labels must not be empty")]
    EmptyLabel,
    #[error("Momentum `{0}` appears more than once")]
    DuplicateMomentum(String),
    #[error("Vertex type `{0}` appears more than once")]
    DuplicateVertexType(String),
    #[error("Vertex type label `{0}` is also used as a momentum")]
    LabelClash(String),
}
