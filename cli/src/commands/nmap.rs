use std::io;

use anyhow::Context;
use portname_common::config::Config;
use portname_core::report;
use tracing::info;

/// Prints an `address,port` line for every open port of every up IPv4 host.
pub fn nmap(cfg: &Config) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    let written = report::write_report_file(&cfg.source, &mut stdout)
        .with_context(|| format!("could not flatten scan report {}", cfg.source.display()))?;

    if written == 0 {
        info!("No up IPv4 hosts with ports in {}", cfg.source.display());
        return Ok(());
    }

    info!("{written} address/port pairs written");
    Ok(())
}
