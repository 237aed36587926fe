//! Error types for graph construction.
//!
//! The pipeline itself never fails on well-formed records: unknown element
//! symbols are a filtering policy, not a fault. Errors here cover invalid
//! configuration and assembled graphs that would break the structural
//! invariants downstream consumers rely on.

use thiserror::Error;

/// Errors that can occur while configuring or building a graph.
#[derive(Debug, Error)]
pub enum Error {
    /// The bonding threshold is negative, infinite, or NaN.
    #[error("bonding threshold must be a finite, non-negative distance (got {0})")]
    InvalidThreshold(f64),

    /// The type vocabulary is empty or lists a symbol twice.
    #[error("invalid type vocabulary: {0}")]
    Vocabulary(String),

    /// Failed to parse a TOML configuration document.
    #[error("failed to parse graph configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Position and symbol arrays handed to the bond builder differ in length.
    #[error("bonding input is misaligned: {positions} positions but {symbols} element symbols")]
    MisalignedInput {
        /// Number of positions supplied.
        positions: usize,
        /// Number of element symbols supplied.
        symbols: usize,
    },

    /// No atom survived element filtering.
    ///
    /// The bond builder would still emit its `(0, 0)` placeholder, which
    /// would then point at a node that does not exist.
    #[error("no atoms left after element filtering: at least one node is required")]
    EmptyGraph,

    /// The node and label sequences differ in length.
    #[error("label count {labels} does not match node count {nodes}")]
    LabelMismatch {
        /// Number of node feature rows.
        nodes: usize,
        /// Number of labels.
        labels: usize,
    },

    /// An edge endpoint lies outside the node index range.
    #[error("edge ({i}, {j}) references a node outside 0..{node_count}")]
    DanglingEdge {
        /// Edge source index.
        i: usize,
        /// Edge target index.
        j: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },

    /// The edge list is empty.
    #[error("edge list is empty: at least one edge is required")]
    EmptyEdgeSet,
}

impl Error {
    /// Creates a [`Vocabulary`](Error::Vocabulary) error.
    pub fn vocabulary(details: impl Into<String>) -> Self {
        Self::Vocabulary(details.into())
    }

    /// Creates a [`DanglingEdge`](Error::DanglingEdge) error.
    ///
    /// # Arguments
    ///
    /// * `i` — Edge source index
    /// * `j` — Edge target index
    /// * `node_count` — Number of nodes the edge was checked against
    pub fn dangling_edge(i: usize, j: usize, node_count: usize) -> Self {
        Self::DanglingEdge { i, j, node_count }
    }
}
