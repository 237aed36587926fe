use serde::{Deserialize, Serialize};

/// Directed edge between two node indices.
///
/// Unlike chemical bond lists, edges are kept as ordered pairs: a bond
/// between `i` and `j` appears twice, once per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    /// The `(0, 0)` self-loop emitted when no bond is found.
    pub const PLACEHOLDER: Self = Self::new(0, 0);

    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.target, self.source)
    }

    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Per-node feature vector: one-hot element encoding followed by `x, y, z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeFeature {
    pub one_hot: Vec<f64>,
    pub position: [f64; 3],
}

impl NodeFeature {
    pub fn new(one_hot: Vec<f64>, position: [f64; 3]) -> Self {
        Self { one_hot, position }
    }

    /// Feature width, `K + 3`.
    #[inline]
    pub fn width(&self) -> usize {
        self.one_hot.len() + 3
    }

    /// Index of the hot entry, if any.
    pub fn type_index(&self) -> Option<usize> {
        self.one_hot.iter().position(|&v| v == 1.0)
    }

    pub fn with_position(&self, position: [f64; 3]) -> Self {
        Self {
            one_hot: self.one_hot.clone(),
            position,
        }
    }

    /// Flattens the feature into its row of the node feature matrix.
    pub fn to_row(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.width());
        row.extend_from_slice(&self.one_hot);
        row.extend_from_slice(&self.position);
        row
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<NodeFeature>,
    pub edges: Vec<Edge>,
    pub labels: Vec<f64>,
}

impl Graph {
    pub fn new(nodes: Vec<NodeFeature>, edges: Vec<Edge>, labels: Vec<f64>) -> Self {
        Self {
            nodes,
            edges,
            labels,
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the only edge is the `(0, 0)` placeholder.
    pub fn has_placeholder_edge(&self) -> bool {
        self.edges.as_slice() == [Edge::PLACEHOLDER]
    }

    /// Node feature matrix, shape `(N, K + 3)`.
    pub fn feature_matrix(&self) -> Vec<Vec<f64>> {
        self.nodes.iter().map(NodeFeature::to_row).collect()
    }

    /// Edge index in `(2, E)` layout: sources in row 0, targets in row 1.
    pub fn edge_index(&self) -> [Vec<usize>; 2] {
        let sources = self.edges.iter().map(|e| e.source).collect();
        let targets = self.edges.iter().map(|e| e.target).collect();
        [sources, targets]
    }

    /// Number of edges leaving each node.
    pub fn out_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.nodes.len()];
        for edge in &self.edges {
            if let Some(d) = degrees.get_mut(edge.source) {
                *d += 1;
            }
        }
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::new(
            vec![
                NodeFeature::new(vec![0.0, 0.0, 1.0], [-0.5, 0.0, 0.0]),
                NodeFeature::new(vec![1.0, 0.0, 0.0], [0.5, 0.0, 0.0]),
            ],
            vec![Edge::new(0, 1), Edge::new(1, 0)],
            vec![0.1, -0.2],
        )
    }

    #[test]
    fn edge_reversed_swaps_endpoints() {
        let e = Edge::new(2, 5);
        assert_eq!(e.reversed(), Edge::new(5, 2));
        assert!(!e.is_self_loop());
        assert!(Edge::PLACEHOLDER.is_self_loop());
    }

    #[test]
    fn node_feature_row_concatenates_one_hot_and_position() {
        let f = NodeFeature::new(vec![0.0, 1.0, 0.0], [1.0, 2.0, 3.0]);
        assert_eq!(f.width(), 6);
        assert_eq!(f.to_row(), vec![0.0, 1.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(f.type_index(), Some(1));
    }

    #[test]
    fn with_position_keeps_encoding() {
        let f = NodeFeature::new(vec![1.0, 0.0], [1.0, 1.0, 1.0]);
        let moved = f.with_position([0.0, 0.0, 0.0]);
        assert_eq!(moved.one_hot, f.one_hot);
        assert_eq!(moved.position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn edge_index_is_two_rows() {
        let g = sample();
        assert_eq!(g.edge_index(), [vec![0, 1], vec![1, 0]]);
        assert_eq!(g.feature_matrix().len(), 2);
        assert_eq!(g.feature_matrix()[0].len(), 6);
    }

    #[test]
    fn placeholder_detection() {
        let mut g = sample();
        assert!(!g.has_placeholder_edge());
        g.edges = vec![Edge::PLACEHOLDER];
        assert!(g.has_placeholder_edge());
    }

    #[test]
    fn out_degrees_ignore_dangling_sources() {
        let g = Graph::new(Vec::new(), vec![Edge::PLACEHOLDER], Vec::new());
        assert!(g.out_degrees().is_empty());
        assert_eq!(sample().out_degrees(), vec![1, 1]);
    }
}
