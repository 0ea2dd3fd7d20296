//! Crawler detection from the `User-Agent` header.
//!
//! Link-preview bots (social networks, chat apps) and search engines must
//! see the page's own metadata, so they are never redirected.

use regex::Regex;
use std::sync::LazyLock;

/// Known preview and search crawler signatures, matched case-insensitively.
static BOT_SIGNATURES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)facebookexternalhit|facebot|twitterbot|linkedinbot|slackbot|slack-imgproxy|discordbot|whatsapp|telegrambot|googlebot|google-inspectiontool|bingbot|applebot|pinterest|redditbot|embedly|skypeuripreview|vkshare|iframely|duckduckbot|yandexbot|baiduspider|mastodon",
    )
    .unwrap()
});

/// Returns true if `user_agent` belongs to a known crawler.
pub fn is_bot(user_agent: &str) -> bool {
    !user_agent.is_empty() && BOT_SIGNATURES.is_match(user_agent)
}
