use tracing::{debug, info};

use super::{LookupRequest, RawLookupResult};
use crate::config::Config;
use crate::error::KeychainError;
use crate::runner::{CommandRunner, ToolCommand};

const UNKNOWN_ERROR: &str = "unknown error";

/// Secret category to search. The store addresses each with its own subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Application secrets not bound to a host.
    Generic,
    /// Secrets bound to a protocol, host and optional path.
    Internet,
}

/// Strategies in the order they are attempted.
pub const STRATEGIES: [LookupStrategy; 2] = [LookupStrategy::Generic, LookupStrategy::Internet];

impl LookupStrategy {
    pub const fn subcommand(self) -> &'static str {
        match self {
            LookupStrategy::Generic => "find-generic-password",
            LookupStrategy::Internet => "find-internet-password",
        }
    }

    /// Build the query command for `request` against the configured tool.
    pub fn command(self, config: &Config, request: &LookupRequest) -> ToolCommand {
        let mut command = ToolCommand::new(&config.tool)
            .arg(self.subcommand())
            .arg("-l")
            .arg(&request.name);
        if request.include_secret {
            command = command.arg("-g");
        }
        if let Some(keychain) = &config.keychain {
            command = command.arg(keychain.to_string_lossy());
        }
        command
    }
}

/// Look `request` up with each strategy in turn and return the first success.
///
/// Fails with [`KeychainError::ItemNotFound`] carrying the last attempt's error
/// text when every strategy exits non-zero.
pub fn lookup(
    runner: &dyn CommandRunner,
    config: &Config,
    request: &LookupRequest,
) -> Result<RawLookupResult, KeychainError> {
    let mut last_error = String::new();

    for (attempt, strategy) in STRATEGIES.iter().enumerate() {
        if attempt > 0 {
            info!(name = %request.name, ?strategy, "previous lookup failed, falling back");
        }

        let output = runner.run(&strategy.command(config, request))?;
        if output.success() {
            debug!(name = %request.name, ?strategy, "item found");
            return Ok(RawLookupResult {
                standard_output: output.stdout,
                error_output: output.stderr,
            });
        }
        last_error = output.stderr;
    }

    let message = match last_error.trim() {
        "" => UNKNOWN_ERROR.to_string(),
        trimmed => trimmed.to_string(),
    };
    Err(KeychainError::ItemNotFound {
        name: request.name.clone(),
        message,
    })
}
