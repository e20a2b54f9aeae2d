mod cli;
mod commands;
mod config;
mod error;
mod keychain;
mod output;
mod prompt;
mod runner;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // stdout carries only the finished document, so failures print nothing there
    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Command::List { names } => commands::list::run(&config, &names, cli.pretty)?,
        Command::Get { name } => commands::get::run(&config, &name, cli.pretty)?,
        Command::Prompt { username, message } => {
            commands::prompt::run(username, message, cli.pretty)?
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .init();
}
