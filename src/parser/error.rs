use thiserror::Error;

/// Errors raised while reading the plain-text formats.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line} is malformed: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line} has a non-integer field: {source}")]
    InvalidField {
        line: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("unknown transport mode {0:?}")]
    UnknownMode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
