//! Normalizes and de-duplicates signal level measurements (dBV, dBu, Vrms,
//! Vpp) and renders them as a table, most recent first.

pub mod error;
pub mod executor;
pub mod input;
pub mod merger;
pub mod parser;
pub mod report;

pub use error::{Error, FormatError, ParseError};
