use std::io::{self, Write};

use anyhow::Error;
use atom_graph::{GraphError, dataset, io as graph_io};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Derives user-facing hints from the first library error in the chain.
fn collect_hints(err: &Error) -> Vec<String> {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<dataset::Error>() {
            return dataset_hints(e);
        }
        if let Some(e) = cause.downcast_ref::<graph_io::Error>() {
            return io_hints(e);
        }
        if let Some(e) = cause.downcast_ref::<GraphError>() {
            return graph_hints(e);
        }
        if let Some(e) = cause.downcast_ref::<std::io::Error>() {
            return std_io_hints(e);
        }
    }
    Vec::new()
}

fn dataset_hints(err: &dataset::Error) -> Vec<String> {
    match err {
        dataset::Error::Io(e) => io_hints(e),
        dataset::Error::Graph(e) => graph_hints(e),
        dataset::Error::MissingRawFile(path) => vec![
            format!("Expected the atom table at {}", path.display()),
            "A dataset root must contain raw/atoms.csv".into(),
        ],
        dataset::Error::CreateDir { source, .. } => std_io_hints(source),
        dataset::Error::IndexOutOfRange { .. } => {
            vec!["Each atom table produces exactly one graph".into()]
        }
    }
}

fn io_hints(err: &graph_io::Error) -> Vec<String> {
    match err {
        graph_io::Error::Io { source } => std_io_hints(source),
        graph_io::Error::Parse { format, line, .. } => vec![
            format!("Inspect the {format} input around line {line}"),
            "Coordinates and moments must be finite decimal numbers".into(),
            "Every row needs the same number of fields as the header".into(),
        ],
        graph_io::Error::MissingColumn(name) => vec![
            format!("Add a '{name}' column to the header row"),
            format!("Required columns: {}", graph_io::COLUMNS.join(", ")),
            "Column names are case-sensitive".into(),
        ],
        graph_io::Error::Conversion(_) => vec![
            "The processed artifact is inconsistent".into(),
            "Rebuild it with `agraph dataset <ROOT> --force`".into(),
        ],
    }
}

fn graph_hints(err: &GraphError) -> Vec<String> {
    match err {
        GraphError::InvalidThreshold(_) => {
            vec!["Use a finite, non-negative value for --threshold".into()]
        }
        GraphError::Vocabulary(_) => vec![
            "List each element symbol once, e.g. --vocab N,O,C".into(),
            "Symbols are single characters taken from the ATOM label".into(),
        ],
        GraphError::ConfigParse(_) => vec![
            "Only 'threshold' and 'vocabulary' keys are recognized".into(),
            "Example: threshold = 2.0 / vocabulary = [\"N\", \"O\", \"C\"]".into(),
        ],
        GraphError::EmptyGraph => vec![
            "No ATOM label starts with a symbol from the vocabulary".into(),
            "Check the table contents or extend --vocab".into(),
        ],
        GraphError::MisalignedInput { .. }
        | GraphError::LabelMismatch { .. }
        | GraphError::DanglingEdge { .. }
        | GraphError::EmptyEdgeSet => {
            vec!["This indicates an internal inconsistency; please report it".into()]
        }
    }
}

fn std_io_hints(err: &std::io::Error) -> Vec<String> {
    use std::io::ErrorKind;

    let hint = match err.kind() {
        ErrorKind::NotFound => "Check the path spelling and that the file exists",
        ErrorKind::PermissionDenied => "Check read/write permissions on the path",
        ErrorKind::BrokenPipe => "The output consumer exited early",
        ErrorKind::InvalidData => "The file is not valid UTF-8 text",
        _ => "Check the file path, permissions, and disk space",
    };
    vec![hint.into()]
}
