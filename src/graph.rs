use std::collections::HashMap;

use anyhow::{Context, Result};

pub type NodeId = usize;
pub type Weight = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// Immutable graph shared by both engines: node labels in input order plus
/// the undirected edge list with endpoints resolved to indices.
pub struct Graph {
    labels: Vec<String>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Resolves labeled edges against the node list. Fails on an empty node
    /// list or an edge endpoint that does not name a listed node.
    pub fn new(labels: Vec<String>, edges: Vec<(String, String, Weight)>) -> Result<Self> {
        if labels.is_empty() {
            return Err(anyhow::Error::msg("graph has no nodes"));
        }
        let index_of = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.as_str(), id))
            .collect::<HashMap<&str, NodeId>>();
        let resolve = |label: &str| {
            index_of
                .get(label)
                .copied()
                .with_context(|| format!("edge endpoint '{}' is not a listed node", label))
        };
        let edges = edges
            .iter()
            .map(|(from, to, weight)| {
                Ok(Edge {
                    from: resolve(from)?,
                    to: resolve(to)?,
                    weight: *weight,
                })
            })
            .collect::<Result<Vec<Edge>>>()?;
        Ok(Self { labels, edges })
    }

    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Builds the adjacency view in a single pass over the edge list. Each
    /// edge contributes one entry per direction; parallel edges are kept.
    pub fn adjacency(&self) -> Adjacency {
        let mut incident = vec![Vec::new(); self.labels.len()];
        for edge in &self.edges {
            incident[edge.from].push((edge.to, edge.weight));
            incident[edge.to].push((edge.from, edge.weight));
        }
        Adjacency { incident }
    }
}

pub struct Adjacency {
    incident: Vec<Vec<(NodeId, Weight)>>,
}

impl Adjacency {
    pub fn incident(&self, node: NodeId) -> &[(NodeId, Weight)] {
        &self.incident[node]
    }
}
