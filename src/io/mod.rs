//! Reading atom tables and reading/writing processed graph artifacts.
//!
//! - [`read_atoms`] parses the CSV atom table (`ATOM, X, Y, Z, MAGNETIC_MOMENT`).
//! - [`write_graph`] / [`read_graph`] persist a built graph as a JSON
//!   [`GraphArtifact`] in `x` / `edge_index` / `y` layout.

use std::fmt;

pub mod error;

mod artifact;
mod table;

pub use artifact::{GraphArtifact, read_graph, write_graph};
pub use error::Error;
pub use table::{COLUMNS, read_atoms};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Csv => write!(f, "CSV"),
            Format::Json => write!(f, "JSON"),
        }
    }
}
