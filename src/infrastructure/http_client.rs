//! Process-wide outbound HTTP client.

use reqwest::{Client, redirect};
use std::sync::OnceLock;

static CLIENT: OnceLock<Client> = OnceLock::new();

/// Returns the shared client, building it on first use.
///
/// The client never follows redirects: resolver answers are read as-is and
/// upstream `3xx` responses are passed back to the caller unchanged.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized. A failed
/// build is not cached, so the next call retries.
pub fn shared() -> Result<Client, reqwest::Error> {
    if let Some(client) = CLIENT.get() {
        return Ok(client.clone());
    }

    let client = Client::builder()
        .user_agent(concat!("shortlink-gateway/", env!("CARGO_PKG_VERSION")))
        .redirect(redirect::Policy::none())
        .build()?;

    Ok(CLIENT.get_or_init(|| client).clone())
}
