//! Link resolver request and response contract.

use serde::Deserialize;
use url::Url;

use crate::domain::entities::ClientContext;

/// Response body of `GET /api/link`.
///
/// A missing `url` is a normal outcome meaning "no such short link".
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResolutionResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub cloaking: Option<bool>,
}

impl ResolutionResult {
    /// Returns true if the resolver asked for the target to be cloaked.
    pub fn is_cloaked(&self) -> bool {
        self.cloaking.unwrap_or(false)
    }
}

/// One lookup against the resolution service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkLookup {
    /// Origin the resolver is reached at; `/api/link` is appended to it.
    pub base_url: Url,
    /// Hostname the short link was requested on.
    pub domain: String,
    /// Short-link alias, without the leading slash.
    pub alias: String,
    pub context: ClientContext,
    /// Caller's `User-Agent`, empty when absent.
    pub user_agent: String,
    /// Caller's `Referer`, empty when absent.
    pub referer: String,
}
