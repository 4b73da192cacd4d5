//! Label-keyed directed graph
//!
//! Vertices are addressed by string labels in the public API and by dense
//! indices internally, so the traversal code can keep its marks in plain
//! vectors.

use std::collections::HashMap;

use petgraph::graph::DiGraph;

use crate::constants::graph::INITIAL_VERTEX_CAPACITY;
use crate::error::GraphError;

/// A mutable directed graph whose vertices are identified by labels
///
/// Indices are handed out in insertion order starting at 0 and are never
/// reused. Adjacency containers are multisets: adding the same edge twice
/// records it twice, and it takes two deletions to remove both copies.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledDigraph {
    indices: HashMap<String, usize>,
    labels: Vec<String>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Default for LabeledDigraph {
    fn default() -> Self {
        Self::new()
    }
}

impl LabeledDigraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            indices: HashMap::with_capacity(INITIAL_VERTEX_CAPACITY),
            labels: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            adjacency: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            edge_count: 0,
        }
    }

    /// Insert a new vertex and return its index
    pub fn add_vertex(&mut self, label: &str) -> Result<usize, GraphError> {
        validate_label(label)?;
        if self.indices.contains_key(label) {
            return Err(GraphError::DuplicateVertex {
                label: label.to_string(),
            });
        }

        let index = self.labels.len();
        self.indices.insert(label.to_string(), index);
        self.labels.push(label.to_string());
        self.adjacency.push(Vec::new());
        Ok(index)
    }

    /// Add a directed edge from `from` to `to`
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let (from_index, to_index) = self.resolve_edge(from, to)?;
        self.adjacency[from_index].push(to_index);
        self.edge_count += 1;
        Ok(())
    }

    /// Remove one occurrence of the edge from `from` to `to`
    ///
    /// Returns `Ok(false)` without touching the graph when no such edge
    /// exists.
    pub fn delete_edge(&mut self, from: &str, to: &str) -> Result<bool, GraphError> {
        let (from_index, to_index) = self.resolve_edge(from, to)?;
        let successors = &mut self.adjacency[from_index];

        match successors.iter().position(|&target| target == to_index) {
            Some(position) => {
                successors.remove(position);
                self.edge_count -= 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges, counting duplicates
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Check whether a vertex exists
    ///
    /// An empty label is rejected rather than reported as absent.
    pub fn has_vertex(&self, label: &str) -> Result<bool, GraphError> {
        validate_label(label)?;
        Ok(self.indices.contains_key(label))
    }

    /// Labels of all vertices this vertex has an edge to, duplicates
    /// included
    pub fn neighbors(&self, label: &str) -> Result<Vec<&str>, GraphError> {
        let index = self.require_vertex(label)?;
        Ok(self.adjacency[index]
            .iter()
            .map(|&target| self.labels[target].as_str())
            .collect())
    }

    /// All vertex labels in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// All edges as `(from, to)` label pairs
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(from, successors)| {
                successors
                    .iter()
                    .map(move |&to| (self.labels[from].as_str(), self.labels[to].as_str()))
            })
    }

    /// Build a new graph with the same vertices and every edge flipped
    ///
    /// Vertices keep their indices and edge multiplicity is preserved.
    pub fn reversed(&self) -> LabeledDigraph {
        let mut adjacency = vec![Vec::new(); self.adjacency.len()];
        for (from, successors) in self.adjacency.iter().enumerate() {
            for &to in successors {
                adjacency[to].push(from);
            }
        }

        LabeledDigraph {
            indices: self.indices.clone(),
            labels: self.labels.clone(),
            adjacency,
            edge_count: self.edge_count,
        }
    }

    /// Convert into a `petgraph` graph whose node indices match the vertex
    /// indices of this graph
    pub fn to_petgraph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count);
        let nodes: Vec<_> = self
            .labels
            .iter()
            .map(|label| graph.add_node(label.clone()))
            .collect();

        for (from, successors) in self.adjacency.iter().enumerate() {
            for &to in successors {
                graph.add_edge(nodes[from], nodes[to], ());
            }
        }

        graph
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<usize> {
        self.indices.get(label).copied()
    }

    pub(crate) fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    pub(crate) fn successors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    fn require_vertex(&self, label: &str) -> Result<usize, GraphError> {
        validate_label(label)?;
        self.index_of(label).ok_or_else(|| GraphError::UnknownVertex {
            label: label.to_string(),
        })
    }

    fn resolve_edge(&self, from: &str, to: &str) -> Result<(usize, usize), GraphError> {
        validate_label(from)?;
        validate_label(to)?;
        if from == to {
            return Err(GraphError::SelfLoop {
                label: from.to_string(),
            });
        }
        Ok((self.require_vertex(from)?, self.require_vertex(to)?))
    }
}

fn validate_label(label: &str) -> Result<(), GraphError> {
    if label.is_empty() {
        Err(GraphError::InvalidLabel)
    } else {
        Ok(())
    }
}
