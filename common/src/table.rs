//! # Port Lookup Table
//!
//! Maps port numbers to the name of the process or service expected behind
//! them. Built once per run and only read afterwards.

use std::collections::HashMap;

/// Port numbers are not limited to 16 bits; tables may name any
/// non-negative integer.
pub type Port = u64;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortTable {
    names: HashMap<Port, String>,
}

impl PortTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the name for `port`, returning the name it replaced.
    pub fn insert(&mut self, port: Port, name: impl Into<String>) -> Option<String> {
        self.names.insert(port, name.into())
    }

    pub fn get(&self, port: Port) -> Option<&str> {
        self.names.get(&port).map(String::as_str)
    }

    /// Returns the name registered for `port`, or the port in decimal form
    /// when there is none.
    pub fn translate(&self, port: Port) -> String {
        match self.get(port) {
            Some(name) => name.to_string(),
            None => port.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(Port, S)> for PortTable {
    fn from_iter<I: IntoIterator<Item = (Port, S)>>(iter: I) -> Self {
        let mut table = PortTable::new();
        for (port, name) in iter {
            table.insert(port, name);
        }
        table
    }
}
