use std::io;

use anyhow::Context;
use portname_common::config::Config;
use portname_core::{rows, table};
use tracing::info;

/// Rewrites the source rows with process names in place of port numbers.
pub fn csv(cfg: &Config) -> anyhow::Result<()> {
    let table = table::load_table(&cfg.table).context("could not load the port lookup table")?;
    info!("{} port names loaded from {}", table.len(), cfg.table.display());

    let mut stdout = io::stdout().lock();
    let stats = rows::transform_file(&table, &cfg.source, &mut stdout)
        .with_context(|| format!("could not rewrite {}", cfg.source.display()))?;

    info!("{} rows written, {} ports named", stats.rows, stats.translated);
    Ok(())
}
