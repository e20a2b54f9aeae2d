use secrecy::SecretString;

use super::parser::DetailParser;
use super::{Attribute, RawLookupResult};
use crate::error::KeychainError;
use crate::output::{DynamicCredential, UsernamePassword};

/// Comment the store assigns when the user left the field blank.
const PLACEHOLDER_COMMENT: &str = "default";

const PROTOCOL_HTTPS: &str = "htps";
const PROTOCOL_HTTP: &str = "http";

/// Bulk-mode entry for `name`. The account is mandatory; comment and URL are
/// attached only when present.
pub fn dynamic_credential(
    parser: &dyn DetailParser,
    name: &str,
    raw: &RawLookupResult,
) -> Result<DynamicCredential, KeychainError> {
    let detail = raw.standard_output.as_str();

    let username = account(parser, detail)?;
    let description = sanitize_comment(parser.attribute(detail, Attribute::Comment)?);
    let url = url(
        parser.attribute(detail, Attribute::Protocol)?.as_deref(),
        parser.attribute(detail, Attribute::Server)?.as_deref(),
        parser.attribute(detail, Attribute::Path)?.as_deref(),
    );

    Ok(DynamicCredential {
        username: Some(username),
        description,
        url,
        ..DynamicCredential::new(name)
    })
}

/// Single-item username and password. Both are mandatory.
pub fn username_password(
    parser: &dyn DetailParser,
    raw: &RawLookupResult,
) -> Result<UsernamePassword, KeychainError> {
    let username = account(parser, &raw.standard_output)?;
    let password = parser
        .password(&raw.error_output)?
        .ok_or_else(|| KeychainError::AttributeNotFound("Password".into()))?;

    Ok(UsernamePassword {
        username,
        password: SecretString::new(password),
    })
}

fn account(parser: &dyn DetailParser, detail: &str) -> Result<String, KeychainError> {
    parser
        .attribute(detail, Attribute::Account)?
        .ok_or_else(|| KeychainError::AttributeNotFound("Username".into()))
}

/// Drop the store's placeholder comment and fold line breaks into spaces.
pub fn sanitize_comment(comment: Option<String>) -> Option<String> {
    let comment = comment?;
    if comment == PLACEHOLDER_COMMENT {
        return None;
    }
    Some(
        comment
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\n', " "),
    )
}

/// `scheme + server + path`, synthesized only when a server is present.
pub fn url(protocol: Option<&str>, server: Option<&str>, path: Option<&str>) -> Option<String> {
    let server = server?;
    let scheme = match protocol {
        Some(PROTOCOL_HTTPS) => "https://",
        Some(PROTOCOL_HTTP) => "http://",
        _ => "",
    };
    Some(format!("{scheme}{server}{}", path.unwrap_or_default()))
}
