//! Validation of resolver-supplied redirect targets.
//!
//! The resolver is an external service, so whatever it returns is treated
//! as untrusted input. Only `http` and `https` targets may leave the
//! gateway as a redirect or cloak rewrite; everything else is rejected.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::{ParseError, Url};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Errors that can occur while validating a redirect target.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Blocked URL scheme: {0}")]
    UnsupportedProtocol(String),
}

impl TargetUrlError {
    /// True when the target was rejected for its scheme (a security event),
    /// as opposed to simply being unparseable.
    pub fn is_security_violation(&self) -> bool {
        matches!(self, TargetUrlError::UnsupportedProtocol(_))
    }
}

/// Validates a resolver target and returns the absolute URL to send the
/// client to.
///
/// # Rules
///
/// 1. **Absolute**: parsed as-is; the scheme must be `http` or `https`
/// 2. **Root-relative** (`/path`): resolved against `base`, the original
///    request URL
/// 3. **Anything else**: retried with `https://` prepended; accepted only
///    if that yields an `https` URL with a host
///
/// The returned string is always the URL that passed validation. The
/// resolver's spelling is kept only when it serialises to that same URL
/// (allowing the implied `/` path of a bare origin); anything else, such as
/// `https:example.com` or a non-ASCII host, comes back in parsed form.
///
/// # Errors
///
/// Returns [`TargetUrlError::UnsupportedProtocol`] for `javascript:`,
/// `data:`, `ftp:` and every other non-HTTP scheme.
/// Returns [`TargetUrlError::InvalidFormat`] when no rule produces a URL.
///
/// # Examples
///
/// ```ignore
/// let base = Url::parse("https://sho.rt/abc").unwrap();
///
/// assert_eq!(
///     validate_target("example.com/page", &base).unwrap(),
///     "https://example.com/page"
/// );
/// assert!(validate_target("javascript:alert(1)", &base).is_err());
/// ```
pub fn validate_target(raw: &str, base: &Url) -> Result<String, TargetUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TargetUrlError::InvalidFormat("empty target".to_string()));
    }

    match Url::parse(trimmed) {
        Ok(url) => {
            ensure_http(&url)?;
            Ok(spelling(trimmed, &url))
        }
        Err(ParseError::RelativeUrlWithoutBase)
            if trimmed.starts_with('/') && !trimmed.starts_with("//") =>
        {
            let url = base
                .join(trimmed)
                .map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;
            ensure_http(&url)?;
            Ok(url.to_string())
        }
        Err(_) => {
            let prefixed = format!("https://{}", trimmed.trim_start_matches('/'));
            match Url::parse(&prefixed) {
                Ok(url) if url.scheme() == "https" && url.host().is_some() => {
                    Ok(spelling(&prefixed, &url))
                }
                Ok(_) => Err(TargetUrlError::InvalidFormat(trimmed.to_string())),
                Err(e) => Err(TargetUrlError::InvalidFormat(e.to_string())),
            }
        }
    }
}

/// Percent-encodes `value` exactly like JavaScript's `encodeURIComponent`.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn ensure_http(url: &Url) -> Result<(), TargetUrlError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(TargetUrlError::UnsupportedProtocol(other.to_string())),
    }
}

fn spelling(original: &str, parsed: &Url) -> String {
    let serialized = parsed.as_str();
    let same = serialized == original
        || (parsed.path() == "/" && serialized.strip_suffix('/') == Some(original));
    if same {
        original.to_string()
    } else {
        serialized.to_string()
    }
}
