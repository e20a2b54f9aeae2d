use anyhow::{Context, Result};

use crate::config::Config;
use crate::error::KeychainError;
use crate::keychain::lookup::lookup;
use crate::keychain::normalize;
use crate::keychain::parser::{DetailParser, TextDetailParser};
use crate::keychain::LookupRequest;
use crate::output::{self, UsernamePassword};
use crate::runner::{CommandRunner, SystemRunner};

pub fn run(config: &Config, name: &str, pretty: bool) -> Result<()> {
    let pair = username_password(&SystemRunner, &TextDetailParser, config, name)
        .with_context(|| format!("Failed to read \"{name}\" from the Keychain"))?;

    println!("{}", output::render(&pair, pretty)?);
    Ok(())
}

fn username_password(
    runner: &dyn CommandRunner,
    parser: &dyn DetailParser,
    config: &Config,
    name: &str,
) -> Result<UsernamePassword, KeychainError> {
    let raw = lookup(runner, config, &LookupRequest::new(name, true))?;
    normalize::username_password(parser, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keychain::testing::ScriptedRunner;

    #[test]
    fn test_single_item_document() {
        let runner = ScriptedRunner::new().found(
            "find-generic-password",
            "Carol",
            "    \"acct\"<blob>=\"carol\"\n",
            "password: \"s3cret\"\n",
        );

        let pair =
            username_password(&runner, &TextDetailParser, &Config::default(), "Carol").unwrap();
        assert_eq!(
            output::render(&pair, false).unwrap(),
            r#"{"Username":"carol","Password":"s3cret"}"#
        );
        assert_eq!(runner.calls.borrow()[0].args.last().map(String::as_str), Some("-g"));
    }

    #[test]
    fn test_hex_password_via_internet_fallback() {
        let runner = ScriptedRunner::new().found(
            "find-internet-password",
            "Carol",
            "    \"acct\"<blob>=\"carol\"\n",
            "password: 0x68656C6C6F20  \"hello\\040\"\n",
        );

        let pair =
            username_password(&runner, &TextDetailParser, &Config::default(), "Carol").unwrap();
        assert_eq!(
            output::render(&pair, false).unwrap(),
            r#"{"Username":"carol","Password":"hello "}"#
        );
    }

    #[test]
    fn test_missing_item() {
        let err = username_password(
            &ScriptedRunner::new(),
            &TextDetailParser,
            &Config::default(),
            "Carol",
        )
        .unwrap_err();
        assert!(matches!(err, KeychainError::ItemNotFound { .. }));
    }
}
