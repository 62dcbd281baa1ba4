//! Rewrites comma-separated rows, replacing every port number with the name
//! the lookup table gives it.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use portname_common::error::RowError;
use portname_common::table::{Port, PortTable};
use tracing::debug;

/// Totals for one pass over an input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowStats {
    /// Lines written, blank ones included.
    pub rows: usize,
    /// Tokens replaced by a name from the table.
    pub translated: usize,
}

/// Translates a single token.
///
/// Tokens that are not a port number come back untouched. Port numbers
/// come back as their table name, or in plain decimal form when the table
/// has none.
pub fn translate_token<'a>(table: &PortTable, token: &'a str) -> Cow<'a, str> {
    match parse_port(token) {
        Some(port) => Cow::Owned(table.translate(port)),
        None => Cow::Borrowed(token),
    }
}

/// Rewrites one input line: quotes are dropped, the line is trimmed and
/// each comma-separated token is translated.
pub fn transform_line(table: &PortTable, line: &str) -> String {
    String::from_utf8_lossy(&rewrite(table, line.as_bytes()).0).into_owned()
}

/// Rewrites every line of `reader` into `writer`, one output line per input
/// line, in input order.
///
/// Lines are handled as bytes, so text that is not valid UTF-8 passes
/// through unchanged instead of ending the run.
pub fn transform_rows<R, W>(table: &PortTable, mut reader: R, writer: &mut W) -> Result<RowStats, RowError>
where
    R: BufRead,
    W: Write,
{
    let mut stats = RowStats::default();
    let mut line: Vec<u8> = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).map_err(RowError::Read)? == 0 {
            break;
        }

        let (output, translated) = rewrite(table, &line);

        writer.write_all(&output).map_err(RowError::Write)?;
        writer.write_all(b"\n").map_err(RowError::Write)?;

        stats.rows += 1;
        stats.translated += translated;
    }

    writer.flush().map_err(RowError::Write)?;
    Ok(stats)
}

/// Opens `path` and runs [`transform_rows`] over it.
pub fn transform_file<W: Write>(table: &PortTable, path: &Path, writer: &mut W) -> Result<RowStats, RowError> {
    let file = File::open(path).map_err(|source| RowError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let stats = transform_rows(table, BufReader::new(file), writer)?;
    debug!(
        "Rewrote {} rows from {} ({} ports named)",
        stats.rows,
        path.display(),
        stats.translated
    );

    Ok(stats)
}

fn parse_port(token: &str) -> Option<Port> {
    token.trim().parse::<Port>().ok()
}

/// Drops quotes, trims the line (newline included) and translates each
/// comma-separated token. Tokens that are not UTF-8 are copied verbatim.
fn rewrite(table: &PortTable, line: &[u8]) -> (Vec<u8>, usize) {
    let unquoted: Vec<u8> = line.iter().copied().filter(|&byte| byte != b'"').collect();
    let unquoted: &[u8] = unquoted.trim_ascii();

    let mut output: Vec<u8> = Vec::with_capacity(unquoted.len());
    let mut translated: usize = 0;

    for (idx, token) in unquoted.split(|&byte| byte == b',').enumerate() {
        if idx > 0 {
            output.push(b',');
        }

        match std::str::from_utf8(token).ok().and_then(parse_port) {
            Some(port) => {
                if table.get(port).is_some() {
                    translated += 1;
                }
                output.extend_from_slice(table.translate(port).as_bytes());
            }
            None => output.extend_from_slice(token),
        }
    }

    (output, translated)
}
