use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn stdout_is_tty() -> bool {
    io::stdout().is_terminal()
}

/// Atom table source: the named file, or stdin when `path` is `None`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    let Some(p) = path else {
        return Ok(Box::new(io::stdin().lock()));
    };
    let file =
        File::open(p).with_context(|| format!("Failed to open input file: {}", p.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Artifact sink: the named file, or stdout when `path` is `None`.
///
/// The JSON writer flushes on completion, so buffered output is never lost.
pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(p) = path else {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };
    let file = File::create(p)
        .with_context(|| format!("Failed to create output file: {}", p.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// File name of an optional path, `fallback` when absent.
pub fn display_name(path: Option<&Path>, fallback: &str) -> String {
    match path {
        Some(p) => p
            .file_name()
            .unwrap_or(p.as_os_str())
            .to_string_lossy()
            .into_owned(),
        None => fallback.to_string(),
    }
}
