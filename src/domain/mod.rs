//! Domain layer: the values and rules of short-link resolution.
//!
//! Nothing in here performs I/O. The resolver is described by a trait and
//! implemented in [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Per-request value types
//! - [`eligibility`] - Which paths may be short links
//! - [`continent`] - Country → continent lookup table
//! - [`resolvers`] - Link resolver contract
//!
//! # Pipeline
//!
//! 1. [`eligibility::classify`] filters the path
//! 2. [`entities::ClientContext`] is derived from proxy headers
//! 3. A [`resolvers::LinkResolver`] looks the alias up
//! 4. [`crate::application::services::dispatcher`] validates the target
//!    and yields an [`entities::RedirectDecision`]

pub mod continent;
pub mod eligibility;
pub mod entities;
pub mod resolvers;
