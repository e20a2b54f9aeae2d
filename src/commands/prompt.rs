use anyhow::{bail, Context, Result};
use secrecy::ExposeSecret;

use crate::output::{self, UsernamePassword};
use crate::prompt::{Prompter, TerminalPrompter};

const DEFAULT_MESSAGE: &str = "Password: ";

pub fn run(username: Option<String>, message: Option<String>, pretty: bool) -> Result<()> {
    let pair = collect(&mut TerminalPrompter, username, message.as_deref())
        .context("Failed to read credentials")?;

    println!("{}", output::render(&pair, pretty)?);
    Ok(())
}

fn collect(
    prompter: &mut dyn Prompter,
    username: Option<String>,
    message: Option<&str>,
) -> Result<UsernamePassword> {
    let username = match username {
        Some(username) => username,
        None => prompter.ask("Username: ")?,
    };
    if username.is_empty() {
        bail!("Username must not be empty.");
    }

    let password = prompter.ask_secret(message.unwrap_or(DEFAULT_MESSAGE))?;
    if password.expose_secret().is_empty() {
        bail!("Password must not be empty.");
    }

    Ok(UsernamePassword { username, password })
}
