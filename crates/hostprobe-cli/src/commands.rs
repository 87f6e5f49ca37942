use anyhow::Result;
use hostprobe_types::Severity;

use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;

pub fn run(cli: Cli) -> Result<Severity> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Mdstat { file, verbose } => {
            handlers::mdstat::handle(&config, file, &cli.format, verbose)
        }

        Commands::Envstats {
            values,
            descriptions,
            warn,
            crit,
            perfdata,
            verbose,
        } => handlers::envstats::handle(
            &config,
            values,
            descriptions,
            warn,
            crit,
            perfdata,
            &cli.format,
            verbose,
        ),
    }
}
