use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the lookup table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to read lookup table {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected 'port,name', found {fields} field(s)")]
    Format { line: u64, fields: usize },

    #[error("line {line}: '{value}' is not a valid port number")]
    InvalidPort { line: u64, value: String },

    #[error("malformed lookup table: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures while rewriting rows.
///
/// Individual tokens never fail; they pass through untouched.
#[derive(Error, Debug)]
pub enum RowError {
    #[error("failed to open {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input rows")]
    Read(#[source] io::Error),

    #[error("failed to write output")]
    Write(#[source] io::Error),
}

/// Failures while reading a scan report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read scan report {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scan report is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("failed to write output")]
    Write(#[source] io::Error),
}
