use std::fs::File;
use std::io::Read;
use std::path::Path;

use portname_common::error::TableError;
use portname_common::table::{Port, PortTable};
use tracing::debug;

/// Loads a `port,name` lookup table from disk.
pub fn load_table(path: &Path) -> Result<PortTable, TableError> {
    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_table(file)?;
    debug!("Loaded {} port names from {}", table.len(), path.display());

    Ok(table)
}

/// Reads a headerless `port,name` table.
///
/// Blank lines are skipped wherever they appear. Any other line must hold
/// exactly two fields and a non-negative integer port; the first line that
/// does not aborts the whole load.
pub fn read_table<R: Read>(reader: R) -> Result<PortTable, TableError> {
    let mut records = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = PortTable::new();

    for result in records.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map_or(0, |pos| pos.line());
        if record.len() != 2 {
            return Err(TableError::Format {
                line,
                fields: record.len(),
            });
        }

        let port = record[0]
            .parse::<Port>()
            .map_err(|_| TableError::InvalidPort {
                line,
                value: record[0].to_string(),
            })?;

        if let Some(previous) = table.insert(port, &record[1]) {
            debug!("line {line}: port {port} renamed from '{previous}' to '{}'", &record[1]);
        }
    }

    Ok(table)
}
