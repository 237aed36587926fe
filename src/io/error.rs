use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("atom table is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("failed to convert graph artifact: {0}")]
    Conversion(String),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
        let details = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(source) => Error::Io { source },
            _ => Error::parse(Format::Csv, line, details),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Error::Io {
                source: std::io::Error::from(e),
            };
        }
        Error::parse(Format::Json, e.line(), e.to_string())
    }
}

impl From<crate::graph::Error> for Error {
    fn from(e: crate::graph::Error) -> Self {
        Error::Conversion(e.to_string())
    }
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}
