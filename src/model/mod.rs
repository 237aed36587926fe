//! Core data structures flowing through the graph pipeline.
//!
//! - [`record`] – One row of the input atom table (label, position, moment).
//! - [`types`] – Element symbols derived from atom labels.
//! - [`graph`] – Node features, directed edges, and the assembled [`Graph`].
//!
//! The model keeps raw input ([`AtomRecord`]) apart from derived output
//! ([`Graph`]) so that [`crate::graph`] can turn one into the other as a
//! chain of pure functions.
//!
//! [`AtomRecord`]: record::AtomRecord
//! [`Graph`]: graph::Graph

pub mod graph;
pub mod record;
pub mod types;
