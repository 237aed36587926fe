//! Final graph assembly and structural validation.

use super::error::Error;
use crate::model::graph::{Edge, Graph, NodeFeature};

/// Bundles features, edges, and labels into a [`Graph`].
///
/// # Errors
///
/// Fails with the first violated invariant reported by [`validate`].
pub fn assemble(
    features: Vec<NodeFeature>,
    edges: Vec<Edge>,
    labels: Vec<f64>,
) -> Result<Graph, Error> {
    let graph = Graph::new(features, edges, labels);
    validate(&graph)?;
    Ok(graph)
}

/// Checks the structural invariants every assembled graph must satisfy.
///
/// - at least one node ([`Error::EmptyGraph`])
/// - one label per node ([`Error::LabelMismatch`])
/// - at least one edge ([`Error::EmptyEdgeSet`])
/// - every edge endpoint indexes an existing node ([`Error::DanglingEdge`])
pub fn validate(graph: &Graph) -> Result<(), Error> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Err(Error::EmptyGraph);
    }
    if graph.labels.len() != node_count {
        return Err(Error::LabelMismatch {
            nodes: node_count,
            labels: graph.labels.len(),
        });
    }
    if graph.edges.is_empty() {
        return Err(Error::EmptyEdgeSet);
    }
    if let Some(edge) = graph
        .edges
        .iter()
        .find(|e| e.source >= node_count || e.target >= node_count)
    {
        return Err(Error::dangling_edge(edge.source, edge.target, node_count));
    }
    Ok(())
}
