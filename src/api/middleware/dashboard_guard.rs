//! Access control for the authenticated dashboard.

use axum::http::{HeaderMap, header::COOKIE};

use crate::utils::target_url::encode_uri_component;

/// Query parameter carrying the page to return to after sign-in.
pub const CALLBACK_PARAM: &str = "callbackUrl";

/// Result of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Continue to the page.
    Allow,
    /// Send the client to this location instead.
    Redirect(String),
}

/// Decides whether a dashboard request may proceed.
///
/// Authentication itself lives elsewhere; a guard only inspects what the
/// request already carries.
#[cfg_attr(test, mockall::automock)]
pub trait RouteGuard: Send + Sync {
    fn check(&self, path: &str, headers: &HeaderMap) -> GuardOutcome;
}

/// Lets every request through. Used when `DASHBOARD_AUTH=none`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllGuard;

impl RouteGuard for AllowAllGuard {
    fn check(&self, _path: &str, _headers: &HeaderMap) -> GuardOutcome {
        GuardOutcome::Allow
    }
}

/// Requires one of the configured session cookies.
///
/// # Cookie Parsing
///
/// Handles multiple cookies in the `Cookie` header (and multiple `Cookie`
/// headers) by splitting on semicolons and matching names exactly. A
/// cookie with an empty value does not count.
///
/// # Redirect
///
/// Requests without a session go to
/// `<sign_in_url>?callbackUrl=<encoded path>`.
#[derive(Debug, Clone)]
pub struct SessionCookieGuard {
    cookie_names: Vec<String>,
    sign_in_url: String,
}

impl SessionCookieGuard {
    pub fn new(cookie_names: Vec<String>, sign_in_url: impl Into<String>) -> Self {
        Self {
            cookie_names,
            sign_in_url: sign_in_url.into(),
        }
    }

    fn has_session(&self, headers: &HeaderMap) -> bool {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookie_str| cookie_str.split(';'))
            .any(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(name), Some(value)) => {
                        !value.trim().is_empty() && self.cookie_names.iter().any(|n| n == name)
                    }
                    _ => false,
                }
            })
    }

    /// Sign-in location that returns to `path` afterwards.
    pub fn sign_in_location(&self, path: &str) -> String {
        let separator = if self.sign_in_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.sign_in_url,
            separator,
            CALLBACK_PARAM,
            encode_uri_component(path)
        )
    }
}

impl RouteGuard for SessionCookieGuard {
    fn check(&self, path: &str, headers: &HeaderMap) -> GuardOutcome {
        if self.has_session(headers) {
            GuardOutcome::Allow
        } else {
            GuardOutcome::Redirect(self.sign_in_location(path))
        }
    }
}
