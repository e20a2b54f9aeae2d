pub mod batch;
pub mod decode;
pub mod lookup;
pub mod normalize;
pub mod parser;

/// Attributes read from an item's detail dump, keyed by the store's four-character codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Account,
    Comment,
    Protocol,
    Server,
    Path,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Account,
        Attribute::Comment,
        Attribute::Protocol,
        Attribute::Server,
        Attribute::Path,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Attribute::Account => "acct",
            Attribute::Comment => "icmt",
            Attribute::Protocol => "ptcl",
            Attribute::Server => "srvr",
            Attribute::Path => "path",
        }
    }
}

/// One item to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub name: String,
    /// Also reveal the secret value, not just the metadata.
    pub include_secret: bool,
}

impl LookupRequest {
    pub fn new(name: impl Into<String>, include_secret: bool) -> Self {
        Self {
            name: name.into(),
            include_secret,
        }
    }
}

/// Streams captured from a successful lookup. With the reveal flag the
/// `security` tool prints the `password:` line to stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLookupResult {
    pub standard_output: String,
    pub error_output: String,
}
