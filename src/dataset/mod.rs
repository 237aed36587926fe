//! On-disk dataset of atom graphs.
//!
//! A dataset lives under a root directory:
//!
//! ```text
//! <root>/raw/atoms.csv          input atom table
//! <root>/processed/graph.json   cached graph artifact
//! ```
//!
//! [`GraphDataset::open`] reuses the cached artifact when it was built with
//! the same threshold and vocabulary, and rebuilds it from the raw table
//! otherwise. Graphs are held in collated form (see [`collate`]).

mod collate;
mod error;

pub use collate::{Slices, collate, separate};
pub use error::Error;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use log::{info, warn};
use tempfile::NamedTempFile;

use crate::graph::{GraphConfig, build_graph};
use crate::io::{self, GraphArtifact};
use crate::model::graph::Graph;

pub const RAW_DIR: &str = "raw";
pub const PROCESSED_DIR: &str = "processed";
pub const RAW_FILE_NAME: &str = "atoms.csv";
pub const PROCESSED_FILE_NAME: &str = "graph.json";

/// How a [`GraphDataset`] obtained its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Loaded from a matching processed artifact.
    Cache,
    /// Built from the raw atom table and written to the processed artifact.
    Processed,
}

#[derive(Debug, Clone)]
pub struct GraphDataset {
    root: PathBuf,
    config: GraphConfig,
    data: Graph,
    slices: Slices,
    origin: Origin,
}

impl GraphDataset {
    /// Opens the dataset at `root`, processing the raw table if needed.
    ///
    /// A cached artifact that cannot be read or fails its shape checks is
    /// treated as stale and rebuilt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRawFile`] when processing is required but
    /// `raw/atoms.csv` does not exist, or any error raised while reading,
    /// building, or writing.
    pub fn open(root: impl AsRef<Path>, config: GraphConfig) -> Result<Self, Error> {
        config.validate()?;
        let root = root.as_ref().to_path_buf();
        let processed = processed_path(&root);

        if processed.is_file() {
            match load_cached(&processed, &config) {
                Ok(Some(graph)) => {
                    info!("loading cached graph from {}", processed.display());
                    return Ok(Self::from_graphs(root, config, &[graph], Origin::Cache));
                }
                Ok(None) => info!(
                    "cached graph at {} was built with different settings; reprocessing",
                    processed.display()
                ),
                Err(e) => warn!(
                    "cached graph at {} is unreadable ({e}); reprocessing",
                    processed.display()
                ),
            }
        }

        Self::process(root, config)
    }

    /// Rebuilds the dataset from the raw table, replacing any cached artifact.
    ///
    /// The artifact is staged in `processed/` and renamed into place, so an
    /// interrupted write never leaves a partial `graph.json`.
    pub fn process(root: impl AsRef<Path>, config: GraphConfig) -> Result<Self, Error> {
        config.validate()?;
        let root = root.as_ref().to_path_buf();

        let raw = raw_path(&root);
        if !raw.is_file() {
            return Err(Error::MissingRawFile(raw));
        }
        let file = File::open(&raw).map_err(io::Error::from)?;
        let records = io::read_atoms(BufReader::new(file))?;
        info!("processing {} atoms from {}", records.len(), raw.display());

        let graph = build_graph(&records, &config)?;

        let dir = root.join(PROCESSED_DIR);
        fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;
        let processed = processed_path(&root);
        let staged = NamedTempFile::new_in(&dir).map_err(io::Error::from)?;
        io::write_graph(
            BufWriter::new(staged.as_file()),
            &GraphArtifact::from_graph(&graph, &config),
        )?;
        staged
            .persist(&processed)
            .map_err(|e| io::Error::from(e.error))?;
        info!(
            "wrote graph with {} nodes and {} edges to {}",
            graph.node_count(),
            graph.edge_count(),
            processed.display()
        );

        Ok(Self::from_graphs(root, config, &[graph], Origin::Processed))
    }

    fn from_graphs(root: PathBuf, config: GraphConfig, graphs: &[Graph], origin: Origin) -> Self {
        let (data, slices) = collate(graphs);
        Self {
            root,
            config,
            data,
            slices,
            origin,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn raw_path(&self) -> PathBuf {
        raw_path(&self.root)
    }

    pub fn processed_path(&self) -> PathBuf {
        processed_path(&self.root)
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The collated storage graph.
    pub fn data(&self) -> &Graph {
        &self.data
    }

    pub fn slices(&self) -> &Slices {
        &self.slices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Returns a copy of graph `index`.
    pub fn get(&self, index: usize) -> Result<Graph, Error> {
        separate(&self.data, &self.slices, index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }
}

/// Reads the artifact at `path`, returning `None` if it was built with
/// settings other than `config`'s.
fn load_cached(path: &Path, config: &GraphConfig) -> Result<Option<Graph>, io::Error> {
    let file = File::open(path)?;
    let artifact = io::read_graph(BufReader::new(file))?;
    if !artifact.matches(config) {
        return Ok(None);
    }
    artifact.into_graph().map(Some)
}

pub fn raw_path(root: &Path) -> PathBuf {
    root.join(RAW_DIR).join(RAW_FILE_NAME)
}

pub fn processed_path(root: &Path) -> PathBuf {
    root.join(PROCESSED_DIR).join(PROCESSED_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths() {
        let root = Path::new("/data/run1");
        assert_eq!(raw_path(root), Path::new("/data/run1/raw/atoms.csv"));
        assert_eq!(
            processed_path(root),
            Path::new("/data/run1/processed/graph.json")
        );
    }
}
