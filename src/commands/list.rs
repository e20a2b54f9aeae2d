use anyhow::{Context, Result};

use crate::config::Config;
use crate::keychain::batch;
use crate::keychain::parser::TextDetailParser;
use crate::output;
use crate::runner::SystemRunner;

pub fn run(config: &Config, names: &str, pretty: bool) -> Result<()> {
    let store = batch::resolve_all(&SystemRunner, &TextDetailParser, config, names)
        .context("Failed to resolve Keychain items")?;

    println!("{}", output::render(&store, pretty)?);
    Ok(())
}
