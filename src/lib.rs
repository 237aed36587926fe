//! Converts tables of atomic records into graph datasets for graph neural
//! networks: a node feature matrix, a directed edge index inferred from
//! interatomic distances, and a per-node target vector.
//!
//! # Features
//!
//! - **Element filtering** — Atoms are kept only if their element symbol
//!   (the first character of the label) is in the configured vocabulary
//! - **Feature encoding** — One-hot element type followed by centered
//!   Cartesian coordinates
//! - **Bond inference** — Per-element nearest-neighbour rules under a
//!   distance threshold, capped at three bonds initiated per atom
//! - **Dataset caching** — CSV input, JSON artifacts in `x` / `edge_index` /
//!   `y` layout, reused while the build settings are unchanged
//!
//! # Quick Start
//!
//! ```
//! use atom_graph::{AtomRecord, Edge, GraphConfig, build_graph};
//!
//! let records = vec![
//!     AtomRecord::new("C1", [0.0, 0.0, 0.0], 0.12),
//!     AtomRecord::new("N1", [1.0, 0.0, 0.0], -0.40),
//!     AtomRecord::new("O1", [5.0, 5.0, 5.0], 0.05),
//!     AtomRecord::new("H1", [0.0, 1.0, 0.0], 0.00), // not in the vocabulary
//! ];
//!
//! let graph = build_graph(&records, &GraphConfig::default())?;
//!
//! // Hydrogen is dropped; features are one-hot (N, O, C) plus x, y, z.
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.nodes[0].width(), 6);
//! assert_eq!(graph.labels, vec![0.12, -0.40, 0.05]);
//!
//! // Carbon bonds to nitrogen and nitrogen bonds back to carbon;
//! // the distant oxygen stays isolated.
//! assert!(graph.edges.contains(&Edge::new(0, 1)));
//! assert!(graph.edges.iter().all(|e| e.source != 2 && e.target != 2));
//! # Ok::<(), atom_graph::GraphError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`graph`] — The construction pipeline and its stages
//! - [`io`] — CSV atom tables and JSON graph artifacts
//! - [`dataset`] — Directory-backed dataset with artifact caching and collation
//!
//! # Data Types
//!
//! - [`AtomRecord`] — One input row: label, position, magnetic moment
//! - [`ElementSymbol`] — Element key derived from a label
//! - [`TypeDictionary`] — Known symbols in one-hot order
//! - [`NodeFeature`] — One-hot encoding plus position
//! - [`Edge`] — Directed node pair
//! - [`Graph`] — Nodes, edges, and labels
//! - [`GraphConfig`] — Bonding threshold and vocabulary

mod model;

pub mod dataset;
pub mod graph;
pub mod io;

pub use model::graph::{Edge, Graph, NodeFeature};
pub use model::record::AtomRecord;
pub use model::types::{ElementSymbol, ParseElementError};

pub use graph::{BondGraphBuilder, FeatureBuilder, GraphConfig, TypeDictionary, build_graph};

pub use dataset::GraphDataset;

pub use graph::Error as GraphError;
