use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::KeychainError;

const DEFAULT_TOOL: &str = "security";
const DEFAULT_DELIMITER: &str = ";";

/// Settings that shape every lookup. Passed explicitly into the pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Credential-store query program.
    pub tool: String,
    /// Separator for bulk item name lists. Must be exactly one character.
    pub delimiter: String,
    /// Keychain file to search instead of the user's default search list.
    pub keychain: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.into(),
            delimiter: DEFAULT_DELIMITER.into(),
            keychain: None,
        }
    }
}

impl Config {
    /// The bulk name separator as a single character.
    pub fn delimiter_char(&self) -> Result<char, KeychainError> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(KeychainError::Config(format!(
                "delimiter must be a single character, got {:?}",
                self.delimiter
            ))),
        }
    }

    fn validate(self) -> Result<Self, KeychainError> {
        if self.tool.trim().is_empty() {
            return Err(KeychainError::Config("tool must not be empty".into()));
        }
        self.delimiter_char()?;
        Ok(self)
    }
}

/// Load config from `path`, or return the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<Config, KeychainError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Err(KeychainError::Config(format!(
            "config file not found: {}",
            path.display()
        )));
    }
    let raw = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&raw).map_err(|e| KeychainError::Config(e.to_string()))?;
    config.validate()
}
