//! Contract for looking up a short link.

use crate::domain::entities::{LinkLookup, ResolutionResult};
use async_trait::async_trait;

/// Reasons a lookup produced no usable answer.
///
/// None of these reach the end user: the gateway logs them and serves the
/// original request.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Invalid resolver endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Resolver request failed: {0}")]
    Transport(String),

    #[error("Resolver returned status {0}")]
    Status(u16),

    #[error("Resolver returned an invalid body: {0}")]
    Decode(String),
}

/// Looks up the destination for a short-link alias.
///
/// # Implementations
///
/// - [`crate::infrastructure::resolver::HttpLinkResolver`] - `GET /api/link` over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkResolver: Send + Sync {
    /// Resolves one alias.
    ///
    /// # Returns
    ///
    /// - `Ok(result)` with `result.url == None` when the alias is unknown
    /// - `Ok(result)` with a target URL otherwise
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] on transport failure, non-2xx status or a
    /// body that is not the expected JSON.
    async fn resolve(&self, lookup: &LinkLookup) -> Result<ResolutionResult, ResolveError>;
}
