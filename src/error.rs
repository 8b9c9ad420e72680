//! Error types for level-table
//!
//! Every error is fatal for the batch: nothing is printed unless every line
//! parses and merges.

use thiserror::Error;

/// A numeral that cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not a valid decimal number
    #[error("not a decimal numeral: {0:?}")]
    Invalid(String),

    /// Integer too wide to print in full
    #[error("numeral out of range: {0:?}")]
    OutOfRange(String),
}

/// A line or field that does not fit the expected record shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Line does not hold exactly four comma-separated fields
    #[error("expected 4 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    /// Composite field with more than one annotation separator
    #[error("ambiguous annotation in {field:?}: splits into {parts} parts")]
    AmbiguousAnnotation { field: String, parts: usize },

    /// Numeral inside a field failed to parse
    #[error(transparent)]
    Number(#[from] ParseError),
}

/// Top-level error for a whole run.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading an input source failed
    #[error("failed to read {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// A line could not be parsed
    #[error("{source_name}:{line}: {error}")]
    Line {
        source_name: String,
        line: usize,
        #[source]
        error: FormatError,
    },

    /// A parsed record could not be decomposed during merging
    #[error("merge failed: {0}")]
    Merge(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, Error>;
