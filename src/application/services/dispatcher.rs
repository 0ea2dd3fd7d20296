//! Turns a resolver answer into a [`RedirectDecision`].

use tracing::warn;
use url::Url;

use crate::domain::entities::{RedirectDecision, ResolutionResult};
use crate::utils::target_url::validate_target;

/// Chooses the decision for a resolver answer.
///
/// # Rules
///
/// 1. No `url` → `Continue`
/// 2. Target fails [`validate_target`] → `Continue` (logged)
/// 3. `cloaking == true` → `Rewrite` to the cloak route
/// 4. Otherwise → `Redirect`
///
/// `request_url` is the original request URL, used to resolve root-relative
/// targets.
pub fn dispatch(result: &ResolutionResult, request_url: &Url) -> RedirectDecision {
    let Some(raw) = result.url.as_deref() else {
        return RedirectDecision::Continue;
    };

    match validate_target(raw, request_url) {
        Ok(target) if result.is_cloaked() => RedirectDecision::cloak(&target),
        Ok(target) => RedirectDecision::Redirect(target),
        Err(e) if e.is_security_violation() => {
            warn!(
                target = raw,
                request = %request_url,
                error = %e,
                "security: blocked redirect target with disallowed scheme"
            );
            RedirectDecision::Continue
        }
        Err(e) => {
            warn!(target = raw, request = %request_url, error = %e, "Invalid redirect target");
            RedirectDecision::Continue
        }
    }
}
