use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;
use crate::loader::DataSource;

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let source = DataSource::parse(&config.data_source(cli.data.as_deref()));

    match cli.command.unwrap_or(Commands::Browse {
        start: "/".to_string(),
    }) {
        Commands::Browse { start } => handlers::browse::handle(source, config, &start),
        Commands::Check => handlers::check::handle(&source, cli.format),
        Commands::Resolve { path } => handlers::resolve::handle(&source, &path, cli.format),
    }
}
