//! JSON documents handed back to the connection manager.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

use crate::error::KeychainError;

pub const DYNAMIC_CREDENTIAL_TYPE: &str = "DynamicCredential";

/// One bulk-mode entry. Unresolved optional fields are omitted, never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DynamicCredential {
    #[serde(rename = "Type")]
    pub kind: &'static str,
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl DynamicCredential {
    pub fn new(name: &str) -> Self {
        Self {
            kind: DYNAMIC_CREDENTIAL_TYPE,
            id: name.to_string(),
            name: name.to_string(),
            username: None,
            description: None,
            url: None,
        }
    }
}

/// Bulk-mode document: `{"Objects": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultStore {
    #[serde(rename = "Objects")]
    pub objects: Vec<DynamicCredential>,
}

/// Single-item document. The password stays wrapped until serialized.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsernamePassword {
    pub username: String,
    #[serde(serialize_with = "expose")]
    pub password: SecretString,
}

fn expose<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

/// Render `document` as compact or pretty JSON.
pub fn render<T: Serialize>(document: &T, pretty: bool) -> Result<String, KeychainError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    rendered.map_err(|e| KeychainError::Serialization(e.to_string()))
}
