//! The operations behind each `portname` mode.
//!
//! * [`table`]: loads the port to process-name lookup table.
//! * [`rows`]: rewrites port numbers inside comma-separated rows (`csv` mode).
//! * [`report`]: flattens nmap XML reports into `address,port` pairs (`nmap` mode).

pub mod report;
pub mod rows;
pub mod table;
