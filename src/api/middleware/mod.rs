//! HTTP middleware around the router.
//!
//! - [`short_link`] - Short-link redirect/rewrite gateway
//! - [`dashboard_guard`] - Session check for `/dashboard`
//! - [`tracing`] - Request spans and latency logging

pub mod dashboard_guard;
pub mod short_link;
pub mod tracing;
