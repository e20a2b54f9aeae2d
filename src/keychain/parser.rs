//! Scrapes attribute values out of the `security` tool's human-readable output.
//!
//! Each pattern is a named [`Rule`]. Callers only see [`DetailParser`], so a
//! structured output mode could replace the text scraping without touching them.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::decode::decode_hex;
use super::Attribute;
use crate::error::KeychainError;

/// Extracts attribute and secret values from lookup output.
pub trait DetailParser {
    /// Value of `attribute` in the detail dump, or `None` when it is not present.
    fn attribute(&self, detail: &str, attribute: Attribute)
        -> Result<Option<String>, KeychainError>;

    /// Value of the `password:` line printed when the reveal flag is set.
    fn password(&self, output: &str) -> Result<Option<String>, KeychainError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Quoted,
    Hex,
}

/// One named pattern. Group 1 captures the raw value.
#[derive(Debug)]
struct Rule {
    name: String,
    pattern: Regex,
    encoding: Encoding,
}

impl Rule {
    fn new(name: impl Into<String>, pattern: &str, encoding: Encoding) -> Self {
        Self {
            name: name.into(),
            pattern: Regex::new(pattern).expect("rule patterns are valid regexes"),
            encoding,
        }
    }

    fn apply(&self, text: &str) -> Result<Option<String>, KeychainError> {
        let Some(raw) = self
            .pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return Ok(None);
        };
        trace!(rule = %self.name, "rule matched");
        match self.encoding {
            Encoding::Quoted => Ok(Some(raw.to_string())),
            Encoding::Hex => decode_hex(raw).map(Some),
        }
    }
}

/// Tries `rules` in order; the first match wins.
fn first_match(rules: &[Rule], text: &str) -> Result<Option<String>, KeychainError> {
    for rule in rules {
        if let Some(value) = rule.apply(text)? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Quoted rule first, hex rule second, for every known attribute.
static ATTRIBUTE_RULES: LazyLock<Vec<(Attribute, [Rule; 2])>> = LazyLock::new(|| {
    Attribute::ALL
        .iter()
        .map(|&attribute| {
            let key = regex::escape(attribute.key());
            (
                attribute,
                [
                    Rule::new(
                        format!("{}-quoted", attribute.key()),
                        &format!(r#""{key}".*?="(.*)""#),
                        Encoding::Quoted,
                    ),
                    Rule::new(
                        format!("{}-hex", attribute.key()),
                        &format!(r#""{key}".*?=0x(\S+)"#),
                        Encoding::Hex,
                    ),
                ],
            )
        })
        .collect()
});

static PASSWORD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^password:\s(.*)$").expect("password line pattern is a valid regex")
});

static PASSWORD_RULES: LazyLock<[Rule; 2]> = LazyLock::new(|| {
    [
        Rule::new("password-quoted", r#"^"(.*)"$"#, Encoding::Quoted),
        Rule::new("password-hex", r"^0x(\S+)", Encoding::Hex),
    ]
});

/// Regex scraper for the text printed by `security find-*-password`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDetailParser;

impl DetailParser for TextDetailParser {
    fn attribute(
        &self,
        detail: &str,
        attribute: Attribute,
    ) -> Result<Option<String>, KeychainError> {
        let rules = ATTRIBUTE_RULES
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or_default();
        first_match(rules, detail)
    }

    fn password(&self, output: &str) -> Result<Option<String>, KeychainError> {
        let Some(line) = PASSWORD_LINE
            .captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim_end_matches('\r'))
        else {
            return Ok(None);
        };
        first_match(PASSWORD_RULES.as_slice(), line)
    }
}
