//! Navigation Targets
//!
//! Builds the hand-off href for the analysis route. The `url` value is
//! escaped with the same character set browsers use for
//! `encodeURIComponent`, so every reserved character (`:/?&=#+`, spaces,
//! non-ASCII) is percent-encoded.

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Route that receives submitted URLs
pub const ANALYZE_PATH: &str = "/analyze";

/// Query parameter carrying the submitted URL
pub const URL_PARAM: &str = "url";

/// Characters left unescaped: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single query-string value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Decode a percent-encoded query-string value
///
/// Returns `None` if the decoded bytes are not valid UTF-8.
pub fn decode_component(value: &str) -> Option<String> {
    percent_decode_str(value)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Destination requested by a successful submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    path: &'static str,
    url: String,
}

impl NavigationTarget {
    /// Target the analysis route for an already-trimmed URL
    pub fn analyze(url: impl Into<String>) -> Self {
        Self {
            path: ANALYZE_PATH,
            url: url.into(),
        }
    }

    pub const fn path(&self) -> &str {
        self.path
    }

    /// The submitted URL, unencoded
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Path plus encoded query, e.g. `/analyze?url=example.com`
    pub fn to_href(&self) -> String {
        format!("{}?{}={}", self.path, URL_PARAM, encode_component(&self.url))
    }

    /// Parse an href produced by [`Self::to_href`]
    pub fn parse(href: &str) -> Option<Self> {
        let query = href.strip_prefix(ANALYZE_PATH)?.strip_prefix('?')?;
        let (key, value) = query.split_once('=')?;
        if key != URL_PARAM || value.contains('&') {
            return None;
        }
        decode_component(value).map(Self::analyze)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_href())
    }
}
