use std::fmt;

/// One open port on one address, as reported by a scan.
///
/// Both halves are kept as they appear in the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanPair {
    pub address: String,
    pub port: String,
}

impl ScanPair {
    pub fn new(address: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port: port.into(),
        }
    }
}

impl fmt::Display for ScanPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.address, self.port)
    }
}
