use tracing::debug;

use super::lookup::lookup;
use super::normalize::dynamic_credential;
use super::parser::DetailParser;
use super::LookupRequest;
use crate::config::Config;
use crate::error::KeychainError;
use crate::output::{DynamicCredential, ResultStore};
use crate::runner::CommandRunner;

/// Split a host-supplied name list, dropping empty or blank segments and keeping order.
/// Names themselves are not trimmed.
pub fn split_names(names: &str, delimiter: char) -> Vec<&str> {
    names
        .split(delimiter)
        .filter(|n| !n.trim().is_empty())
        .collect()
}

/// Look up, parse and normalize a single bulk-mode entry.
pub fn resolve_item(
    runner: &dyn CommandRunner,
    parser: &dyn DetailParser,
    config: &Config,
    name: &str,
) -> Result<DynamicCredential, KeychainError> {
    let raw = lookup(runner, config, &LookupRequest::new(name, false))?;
    dynamic_credential(parser, name, &raw)
}

/// Resolve every name in `names`, in order. The first failure aborts the whole
/// batch so no partial document is ever produced.
pub fn resolve_all(
    runner: &dyn CommandRunner,
    parser: &dyn DetailParser,
    config: &Config,
    names: &str,
) -> Result<ResultStore, KeychainError> {
    let names = split_names(names, config.delimiter_char()?);
    debug!(count = names.len(), "resolving keychain items");

    let objects = names
        .into_iter()
        .map(|name| resolve_item(runner, parser, config, name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResultStore { objects })
}
