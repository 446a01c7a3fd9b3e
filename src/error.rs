use std::num::ParseFloatError;
use thiserror::Error;

/// Failure to turn one input line into a point.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not parse `{field}` as a number: {source}")]
    Float {
        field: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("no x value found")]
    MissingX,
}

/// Errors that abort a plotting run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: expected {expected} y values, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("the field separator must not be empty")]
    EmptySeparator,

    #[error("could not read the input: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown legend location `{0}`")]
    UnknownLegendLoc(String),

    #[error("unsupported output format `{0}`, use svg, png, bmp, jpg or jpeg")]
    UnsupportedFormat(String),

    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("no display backend available, use --savefig to write the figure to a file")]
    NoDisplay,

    #[error("display window: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, Error>;
