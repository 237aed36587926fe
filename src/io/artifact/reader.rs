use super::GraphArtifact;
use crate::io::error::Error;
use std::io::Read;

pub fn read_graph<R: Read>(reader: R) -> Result<GraphArtifact, Error> {
    Ok(serde_json::from_reader(reader)?)
}
