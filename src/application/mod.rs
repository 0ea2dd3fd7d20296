//! Application layer: the short-link decision pipeline.
//!
//! Services here combine the pure domain rules with a
//! [`crate::domain::resolvers::LinkResolver`] and expose one entry point
//! per concern for the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Full request → decision pipeline
//! - [`services::context_extractor`] - Client context derivation
//! - [`services::dispatcher`] - Resolver result → decision

pub mod services;
