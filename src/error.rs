use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeychainError {
    #[error("Failed to run '{tool}': {source}")]
    ToolInvocationFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("An error occurred while retrieving an item named \"{name}\" from the keychain: {message}")]
    ItemNotFound { name: String, message: String },

    #[error("{0} was not found in Keychain output.")]
    AttributeNotFound(String),

    #[error("Invalid hex-encoded value: {0}")]
    DecodeError(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to read input: {0}")]
    Prompt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
