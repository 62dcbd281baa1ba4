mod commands;
mod terminal;

use commands::{CommandLine, csv, nmap};
use portname_common::config::{Config, Mode};
use terminal::logging;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.log_level());

    let cfg: Config = commands.into_config();
    debug!("Ignoring testbed argument '{}'", cfg.testbed);

    match cfg.mode {
        Mode::Csv => csv::csv(&cfg),
        Mode::Nmap => nmap::nmap(&cfg),
    }
}
