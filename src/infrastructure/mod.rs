//! Infrastructure layer for outbound integrations.
//!
//! Concrete implementations of the domain's resolver contract plus the
//! reverse proxy to the page renderer.
//!
//! # Modules
//!
//! - [`http_client`] - Shared `reqwest` client
//! - [`resolver`] - HTTP [`crate::domain::resolvers::LinkResolver`]
//! - [`upstream`] - Upstream forwarding for pass-through requests

pub mod http_client;
pub mod resolver;
pub mod upstream;

pub use resolver::HttpLinkResolver;
pub use upstream::UpstreamProxy;
