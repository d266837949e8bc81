mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;

fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();

    let level = match command_line.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let cfg = config::Config::load().context("Load configuration error")?;

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Search { term, dir } => {
                Box::new(command::SearchCommand::new(cfg, term, dir))
            }
        };
        cmd.execute()?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}
