//! Processed graph artifact in PyTorch-Geometric `Data` layout.
//!
//! The JSON document stores the node feature matrix `x` with shape
//! `(N, K + 3)`, the edge index with shape `(2, E)`, and the target vector
//! `y` with shape `(N, 1)`, together with the threshold and vocabulary the
//! graph was built with so that cached artifacts can be checked against the
//! active configuration.

mod reader;
mod writer;

pub use reader::read_graph;
pub use writer::write_graph;

use serde::{Deserialize, Serialize};

use crate::graph::{self, GraphConfig};
use crate::io::error::Error;
use crate::model::graph::{Edge, Graph, NodeFeature};
use crate::model::types::ElementSymbol;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphArtifact {
    pub x: Vec<Vec<f64>>,
    pub edge_index: [Vec<usize>; 2],
    pub y: Vec<[f64; 1]>,
    pub threshold: f64,
    pub vocabulary: Vec<ElementSymbol>,
}

impl GraphArtifact {
    pub fn from_graph(graph: &Graph, config: &GraphConfig) -> Self {
        Self {
            x: graph.feature_matrix(),
            edge_index: graph.edge_index(),
            y: graph.labels.iter().map(|&label| [label]).collect(),
            threshold: config.threshold,
            vocabulary: config.vocabulary.symbols().to_vec(),
        }
    }

    /// Returns `true` if the artifact was built with `config`'s settings.
    pub fn matches(&self, config: &GraphConfig) -> bool {
        self.threshold == config.threshold && self.vocabulary == config.vocabulary.symbols()
    }

    /// Rebuilds the graph, checking every shape against the stored vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if a feature row has the wrong width,
    /// the two edge-index rows differ in length, or the rebuilt graph
    /// violates a structural invariant.
    pub fn into_graph(self) -> Result<Graph, Error> {
        let type_count = self.vocabulary.len();
        let width = type_count + 3;

        let nodes = self
            .x
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                if values.len() != width {
                    return Err(Error::Conversion(format!(
                        "feature row {row} has {} columns, expected {width}",
                        values.len()
                    )));
                }
                let position = [values[type_count], values[type_count + 1], values[type_count + 2]];
                let mut one_hot = values;
                one_hot.truncate(type_count);
                Ok(NodeFeature::new(one_hot, position))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let [sources, targets] = self.edge_index;
        if sources.len() != targets.len() {
            return Err(Error::Conversion(format!(
                "edge_index rows differ in length ({} vs {})",
                sources.len(),
                targets.len()
            )));
        }
        let edges = sources
            .into_iter()
            .zip(targets)
            .map(|(i, j)| Edge::new(i, j))
            .collect();

        let labels = self.y.into_iter().map(|[label]| label).collect();

        Ok(graph::assemble(nodes, edges, labels)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::model::record::AtomRecord;

    fn sample() -> (Graph, GraphConfig) {
        let records = vec![
            AtomRecord::new("C1", [0.0, 0.0, 0.0], 0.5),
            AtomRecord::new("O1", [1.2, 0.0, 0.0], -0.25),
        ];
        let config = GraphConfig::default();
        (build_graph(&records, &config).unwrap(), config)
    }

    #[test]
    fn artifact_shapes() {
        let (graph, config) = sample();
        let artifact = GraphArtifact::from_graph(&graph, &config);

        assert_eq!(artifact.x.len(), 2);
        assert!(artifact.x.iter().all(|row| row.len() == 6));
        assert_eq!(artifact.edge_index[0].len(), artifact.edge_index[1].len());
        assert_eq!(artifact.edge_index[0].len(), graph.edge_count());
        assert_eq!(artifact.y, vec![[0.5], [-0.25]]);
        assert!(artifact.matches(&config));
    }

    #[test]
    fn into_graph_restores_graph() {
        let (graph, config) = sample();
        let restored = GraphArtifact::from_graph(&graph, &config)
            .into_graph()
            .unwrap();
        assert_eq!(restored, graph);
    }

    #[test]
    fn mismatched_settings_are_detected() {
        let (graph, config) = sample();
        let artifact = GraphArtifact::from_graph(&graph, &config);
        assert!(!artifact.matches(&config.clone().with_threshold(1.0)));
    }

    #[test]
    fn wrong_row_width_is_rejected() {
        let (graph, config) = sample();
        let mut artifact = GraphArtifact::from_graph(&graph, &config);
        artifact.x[1].pop();
        assert!(matches!(artifact.into_graph(), Err(Error::Conversion(_))));
    }

    #[test]
    fn uneven_edge_rows_are_rejected() {
        let (graph, config) = sample();
        let mut artifact = GraphArtifact::from_graph(&graph, &config);
        artifact.edge_index[1].push(0);
        assert!(matches!(artifact.into_graph(), Err(Error::Conversion(_))));
    }

    #[test]
    fn dangling_edges_are_rejected() {
        let (graph, config) = sample();
        let mut artifact = GraphArtifact::from_graph(&graph, &config);
        artifact.edge_index[0][0] = 7;
        assert!(matches!(
            artifact.into_graph(),
            Err(Error::Conversion(msg)) if msg.contains("outside")
        ));
    }
}
