use super::GraphArtifact;
use crate::io::error::Error;
use std::io::Write;

pub fn write_graph<W: Write>(mut writer: W, artifact: &GraphArtifact) -> Result<(), Error> {
    serde_json::to_writer(&mut writer, artifact)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
