use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Lookup table read in `csv` mode when no other path is given.
pub const DEFAULT_TABLE: &str = "port-process.csv";

/// Everything a single run needs, parsed once at the entry point.
#[derive(Clone, Debug)]
pub struct Config {
    pub mode: Mode,
    /// Input file: comma-separated rows or an nmap XML report.
    pub source: PathBuf,
    /// Port to process-name table used by [`Mode::Csv`].
    ///
    /// Ignored in [`Mode::Nmap`].
    pub table: PathBuf,
    /// Positional placeholder kept for command-line compatibility.
    pub testbed: String,
}

/// Selects what is done with the source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Replace port numbers in comma-separated rows with process names.
    Csv,
    /// Flatten an nmap XML report into `address,port` lines.
    Nmap,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Mode::Csv),
            "nmap" => Ok(Mode::Nmap),
            _ => Err(format!("unknown mode '{s}' (expected 'csv' or 'nmap')")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Csv => f.write_str("csv"),
            Mode::Nmap => f.write_str("nmap"),
        }
    }
}
