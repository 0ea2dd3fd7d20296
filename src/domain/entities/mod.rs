//! Value types flowing through the short-link pipeline.
//!
//! Nothing here is persisted: every value is created for a single request
//! and dropped once the gateway has decided what to do with it.
//!
//! # Entity Types
//!
//! - [`IncomingRequest`] - Borrowed view of the inbound request
//! - [`GeoLocation`] - Raw geolocation read from proxy headers
//! - [`ClientContext`] - Fully populated client context for the resolver
//! - [`LinkLookup`] / [`ResolutionResult`] - Resolver request and response
//! - [`RedirectDecision`] - Pipeline output

pub mod client_context;
pub mod decision;
pub mod geo_location;
pub mod incoming_request;
pub mod resolution;

pub use client_context::ClientContext;
pub use decision::{CLOAK_ROUTE_PREFIX, RedirectDecision};
pub use geo_location::GeoLocation;
pub use incoming_request::IncomingRequest;
pub use resolution::{LinkLookup, ResolutionResult};
