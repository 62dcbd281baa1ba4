pub mod csv;
pub mod nmap;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use portname_common::config::{Config, DEFAULT_TABLE, Mode};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "portname")]
#[command(about = "Names the ports in scan results.")]
#[command(version)]
pub struct CommandLine {
    /// What to do with the source file: 'csv' or 'nmap'
    pub mode: Mode,
    /// Placeholder kept for compatibility, ignored
    pub testbed: String,
    /// Comma-separated rows (csv) or an nmap XML report (nmap)
    pub source: PathBuf,
    /// Port to process-name table used in csv mode
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_TABLE)]
    pub table: PathBuf,
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }

        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    pub fn into_config(self) -> Config {
        Config {
            mode: self.mode,
            source: self.source,
            table: self.table,
            testbed: self.testbed,
        }
    }
}
