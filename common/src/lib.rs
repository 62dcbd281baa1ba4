//! Shared models for `portname`.
//!
//! * [`config`]: the run configuration assembled by the CLI.
//! * [`error`]: error types returned by the core operations.
//! * [`table`]: the port to process-name lookup table and its translator.
//! * [`scan`]: address/port pairs extracted from scan reports.

pub mod config;
pub mod error;
pub mod scan;
pub mod table;
