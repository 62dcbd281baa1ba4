//! # Scan Report Extraction
//!
//! Flattens an nmap XML report into `address,port` pairs.
//!
//! Only hosts whose `<status state="up">` and only their IPv4 addresses are
//! considered. Every port listed under a host's `<ports>` element is paired
//! with each of that host's IPv4 addresses, keeping document order.

use std::fs;
use std::io::Write;
use std::path::Path;

use portname_common::error::ReportError;
use portname_common::scan::ScanPair;
use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, warn};

/// Extracts the pairs of every up IPv4 host from an nmap XML document.
///
/// A document with no matching hosts yields an empty list.
pub fn extract_pairs(xml: &str) -> Result<Vec<ScanPair>, ReportError> {
    let doc: Document = parse(xml)?;
    let mut pairs: Vec<ScanPair> = Vec::new();

    visit_pairs(&doc, |pair| {
        pairs.push(pair);
        Ok(())
    })?;

    Ok(pairs)
}

/// Reads `path` and runs [`extract_pairs`] over its contents.
pub fn extract_file(path: &Path) -> Result<Vec<ScanPair>, ReportError> {
    let xml: String = read_report(path)?;

    let pairs = extract_pairs(&xml)?;
    debug!("Extracted {} address/port pairs from {}", pairs.len(), path.display());

    Ok(pairs)
}

/// Writes an `address,port` line for each pair as soon as it is found and
/// returns how many were written.
pub fn write_report<W: Write>(xml: &str, writer: &mut W) -> Result<usize, ReportError> {
    let doc: Document = parse(xml)?;
    let mut written: usize = 0;

    visit_pairs(&doc, |pair| {
        writeln!(writer, "{pair}").map_err(ReportError::Write)?;
        written += 1;
        Ok(())
    })?;

    writer.flush().map_err(ReportError::Write)?;
    Ok(written)
}

/// Reads `path` and runs [`write_report`] over its contents.
pub fn write_report_file<W: Write>(path: &Path, writer: &mut W) -> Result<usize, ReportError> {
    let xml: String = read_report(path)?;

    let written = write_report(&xml, writer)?;
    debug!("Wrote {written} address/port pairs from {}", path.display());

    Ok(written)
}

/// Writes one `address,port` line per pair.
pub fn write_pairs<W: Write>(pairs: &[ScanPair], writer: &mut W) -> Result<(), ReportError> {
    for pair in pairs {
        writeln!(writer, "{pair}").map_err(ReportError::Write)?;
    }
    writer.flush().map_err(ReportError::Write)
}

fn read_report(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// nmap reports always open with `<!DOCTYPE nmaprun>`.
fn parse(xml: &str) -> Result<Document<'_>, ReportError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, options)?)
}

fn visit_pairs<F>(doc: &Document, mut emit: F) -> Result<(), ReportError>
where
    F: FnMut(ScanPair) -> Result<(), ReportError>,
{
    for host in children_named(doc.root_element(), "host") {
        if !is_up(host) {
            continue;
        }

        let ports: Vec<Node> = children_named(host, "ports")
            .flat_map(|ports| children_named(ports, "port"))
            .collect();

        for address in children_named(host, "address") {
            if address.attribute("addrtype") != Some("ipv4") {
                continue;
            }

            let Some(addr) = address.attribute("addr") else {
                warn!("Skipping IPv4 address without 'addr' at {}", position(doc, address));
                continue;
            };

            for port in &ports {
                match port.attribute("portid") {
                    Some(portid) => emit(ScanPair::new(addr, portid))?,
                    None => warn!("Skipping port of {addr} without 'portid' at {}", position(doc, *port)),
                }
            }
        }
    }

    Ok(())
}

fn children_named<'a, 'input>(node: Node<'a, 'input>, name: &'static str) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| child.has_tag_name(name))
}

fn is_up(host: Node) -> bool {
    children_named(host, "status").any(|status| status.attribute("state") == Some("up"))
}

fn position(doc: &Document, node: Node) -> String {
    let pos = doc.text_pos_at(node.range().start);
    format!("{}:{}", pos.row, pos.col)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
