//! Outcome of the short-link pipeline.

use crate::utils::target_url::encode_uri_component;

/// Internal route that serves cloaked content.
pub const CLOAK_ROUTE_PREFIX: &str = "/cloaked/";

/// What the gateway does with a request. Exactly one is produced per request.
///
/// `Redirect` and `Rewrite` only ever carry a target that passed scheme
/// validation; every failure path produces `Continue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Serve the original request as if no short link existed.
    Continue,
    /// Send the browser to this absolute URL.
    Redirect(String),
    /// Serve this internal path while the address bar keeps the short URL.
    Rewrite(String),
}

impl RedirectDecision {
    /// Rewrite to the cloak route for a validated absolute `target`.
    pub fn cloak(target: &str) -> Self {
        Self::Rewrite(format!("{CLOAK_ROUTE_PREFIX}{}", encode_uri_component(target)))
    }

    /// Short name used in logs and metrics labels.
    pub fn label(&self) -> &'static str {
        match self {
            RedirectDecision::Continue => "continue",
            RedirectDecision::Redirect(_) => "redirect",
            RedirectDecision::Rewrite(_) => "rewrite",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloak_encodes_target() {
        assert_eq!(
            RedirectDecision::cloak("https://example.com"),
            RedirectDecision::Rewrite("/cloaked/https%3A%2F%2Fexample.com".to_string())
        );
    }

    #[test]
    fn test_cloak_encodes_query() {
        assert_eq!(
            RedirectDecision::cloak("https://example.com/p?a=1&b=2"),
            RedirectDecision::Rewrite(
                "/cloaked/https%3A%2F%2Fexample.com%2Fp%3Fa%3D1%26b%3D2".to_string()
            )
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(RedirectDecision::Continue.label(), "continue");
        assert_eq!(
            RedirectDecision::Redirect("https://a.b".into()).label(),
            "redirect"
        );
        assert_eq!(RedirectDecision::cloak("https://a.b").label(), "rewrite");
    }
}
