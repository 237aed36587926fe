use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while processing, caching, or indexing a dataset.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the atom table or reading/writing the artifact failed.
    #[error("dataset I/O failed: {0}")]
    Io(#[from] crate::io::Error),

    /// Building the graph from the atom table failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] crate::graph::Error),

    /// The raw atom table does not exist.
    #[error("raw atom table not found at '{}'", .0.display())]
    MissingRawFile(PathBuf),

    /// The processed directory could not be created.
    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A graph index beyond the number of stored graphs was requested.
    #[error("graph index {index} is out of range for a dataset of {len} graph(s)")]
    IndexOutOfRange { index: usize, len: usize },
}
