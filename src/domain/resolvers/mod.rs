//! Resolver trait definitions for the domain layer.
//!
//! The link-resolution service is an external collaborator. The domain only
//! knows the contract in [`LinkResolver`]; the HTTP implementation lives in
//! [`crate::infrastructure::resolver`].

pub mod link_resolver;

pub use link_resolver::{LinkResolver, ResolveError};

#[cfg(test)]
pub use link_resolver::MockLinkResolver;
