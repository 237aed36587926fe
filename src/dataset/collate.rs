//! Concatenation of several graphs into one storage graph plus slice offsets.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::model::graph::Graph;

/// Cumulative offsets of each graph's nodes, edges, and labels.
///
/// Each vector starts at `0` and holds one more entry than there are graphs;
/// graph `i` occupies `offsets[i]..offsets[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slices {
    pub nodes: Vec<usize>,
    pub edges: Vec<usize>,
    pub labels: Vec<usize>,
}

impl Default for Slices {
    fn default() -> Self {
        Self {
            nodes: vec![0],
            edges: vec![0],
            labels: vec![0],
        }
    }
}

impl Slices {
    /// Number of graphs described.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node, edge, and label ranges of graph `index`.
    pub fn get(&self, index: usize) -> Option<(Range<usize>, Range<usize>, Range<usize>)> {
        if index >= self.len() {
            return None;
        }
        Some((
            self.nodes[index]..self.nodes[index + 1],
            self.edges[index]..self.edges[index + 1],
            self.labels[index]..self.labels[index + 1],
        ))
    }

    fn push(&mut self, graph: &Graph) {
        let (n, e, l) = (
            self.nodes[self.nodes.len() - 1],
            self.edges[self.edges.len() - 1],
            self.labels[self.labels.len() - 1],
        );
        self.nodes.push(n + graph.node_count());
        self.edges.push(e + graph.edge_count());
        self.labels.push(l + graph.labels.len());
    }
}

/// Concatenates `graphs` into one storage graph.
///
/// Edge indices are stored as-is, relative to their own graph, so
/// [`separate`] recovers each graph exactly.
pub fn collate(graphs: &[Graph]) -> (Graph, Slices) {
    let mut data = Graph::default();
    let mut slices = Slices::default();
    for graph in graphs {
        data.nodes.extend_from_slice(&graph.nodes);
        data.edges.extend_from_slice(&graph.edges);
        data.labels.extend_from_slice(&graph.labels);
        slices.push(graph);
    }
    (data, slices)
}

/// Extracts graph `index` from a collated storage graph.
pub fn separate(data: &Graph, slices: &Slices, index: usize) -> Option<Graph> {
    let (nodes, edges, labels) = slices.get(index)?;
    Some(Graph::new(
        data.nodes.get(nodes)?.to_vec(),
        data.edges.get(edges)?.to_vec(),
        data.labels.get(labels)?.to_vec(),
    ))
}
