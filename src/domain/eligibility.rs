//! Decides whether a request path can be a short link at all.
//!
//! Only single-segment paths such as `/abc123` are candidates. Everything
//! the site itself owns (API, dashboard, framework assets, cloak route,
//! static files) is passed through without contacting the resolver.

/// Prefixes owned by the site. Matches the prefix itself or anything below it.
pub const RESERVED_PREFIXES: &[&str] = &["/api", "/_next", "/cloaked", "/static"];

/// Prefix of the authenticated dashboard.
pub const PROTECTED_PREFIX: &str = "/dashboard";

/// Extensions served as static assets (compared case-insensitively).
pub const STATIC_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".avif", ".ico", ".bmp",
];

/// Why a path was not considered for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Root,
    ReservedPrefix,
    StaticAsset,
    Nested,
}

/// Classification of a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// Single-segment path; carries the alias without the leading slash.
    Candidate(String),
    /// Dashboard path: hand over to the route guard, never resolve.
    Protected,
    /// Pass through untouched.
    Skip(SkipReason),
}

/// Classifies `path`.
///
/// # Rules (first match wins)
///
/// 1. `/` → `Skip(Root)`
/// 2. Anything under `/dashboard` → `Protected`
/// 3. `/api`, `/_next`, `/cloaked`, `/static` and below → `Skip(ReservedPrefix)`
/// 4. Static image/icon extension → `Skip(StaticAsset)`
/// 5. More than one segment → `Skip(Nested)`
/// 6. Otherwise → `Candidate(alias)`
pub fn classify(path: &str) -> Eligibility {
    if path.is_empty() || path == "/" {
        return Eligibility::Skip(SkipReason::Root);
    }

    if path.starts_with(PROTECTED_PREFIX) {
        return Eligibility::Protected;
    }

    if RESERVED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
    {
        return Eligibility::Skip(SkipReason::ReservedPrefix);
    }

    let lowercase = path.to_ascii_lowercase();
    if STATIC_EXTENSIONS.iter().any(|ext| lowercase.ends_with(ext)) {
        return Eligibility::Skip(SkipReason::StaticAsset);
    }

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(alias), None) => Eligibility::Candidate(alias.to_string()),
        (None, _) => Eligibility::Skip(SkipReason::Root),
        (Some(_), Some(_)) => Eligibility::Skip(SkipReason::Nested),
    }
}

/// Returns true if `path` belongs to the authenticated dashboard.
pub fn is_protected(path: &str) -> bool {
    classify(path) == Eligibility::Protected
}
