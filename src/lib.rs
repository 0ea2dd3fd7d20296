//! # Short-link Gateway
//!
//! Edge gateway that sits in front of a web application and turns requests
//! for short links (`https://sho.rt/abc123`) into redirects, without the
//! application having to render anything.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Eligibility rules, per-request entities, resolver contract
//! - **Application Layer** ([`application`]) - The decision pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP resolver client and upstream proxy
//! - **API Layer** ([`api`]) - Gateway middleware, dashboard guard, diagnostics
//!
//! ## Request Pipeline
//!
//! 1. **Eligibility filter** - only single-segment paths outside reserved prefixes
//! 2. **Context extraction** - client IP and geolocation from proxy/CDN headers
//! 3. **Resolution** - one `GET /api/link` call to the resolution service
//! 4. **Dispatch** - `307` redirect, cloak rewrite, or pass-through
//!
//! Any failure along the way passes the request through unchanged.
//!
//! ## Quick Start
//!
//! ```bash
//! export UPSTREAM_URL="http://127.0.0.1:3001"   # page renderer
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RedirectService, ResolverSettings};
    pub use crate::domain::entities::{
        ClientContext, IncomingRequest, LinkLookup, RedirectDecision, ResolutionResult,
    };
    pub use crate::domain::resolvers::{LinkResolver, ResolveError};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
