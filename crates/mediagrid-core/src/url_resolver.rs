//! Resolution of the URL a gallery card points at.
//!
//! Assets are normally streamed through the same-origin blob proxy so the
//! browser never talks to storage directly. The direct `blobUrl` and the
//! `BLOB_ACCOUNT` based construction are legacy fallbacks.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Path of the blob streaming proxy.
pub const BLOB_PROXY_PATH: &str = "/api/blob";

/// Characters left as-is by `encodeURIComponent`.
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

/// Fields relevant to URL resolution, already normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveInput<'a> {
    pub blob_path: &'a str,
    pub file_path: &'a str,
    pub blob_url: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct UrlResolver {
    blob_account: Option<String>,
}

impl UrlResolver {
    pub fn new(blob_account: Option<String>) -> Self {
        Self { blob_account }
    }

    pub fn blob_account(&self) -> Option<&str> {
        self.blob_account.as_deref()
    }

    /// Resolve the URL for an item. First match wins: blob path proxy, file
    /// path proxy, direct blob URL, then base-URL construction.
    pub fn resolve(&self, input: &ResolveInput<'_>) -> String {
        if !input.blob_path.is_empty() {
            proxy_url(input.blob_path)
        } else if !input.file_path.is_empty() {
            proxy_url(input.file_path)
        } else if !input.blob_url.is_empty() {
            input.blob_url.to_string()
        } else {
            build_blob_url(self.blob_account.as_deref(), input.file_path)
        }
    }
}

/// `/api/blob?path=<encoded path>`
pub fn proxy_url(path: &str) -> String {
    format!(
        "{}?path={}",
        BLOB_PROXY_PATH,
        utf8_percent_encode(path, COMPONENT)
    )
}

/// Join `base` and `file_path` with a single slash. Absolute `http(s)` paths are
/// returned unchanged and an empty path gives an empty URL.
pub fn build_blob_url(base: Option<&str>, file_path: &str) -> String {
    let trimmed = file_path.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_http_scheme(trimmed) {
        return trimmed.to_string();
    }

    let left = base.unwrap_or_default().trim_end_matches('/');
    let right = trimmed.trim_start_matches('/');
    format!("{}/{}", left, right)
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
