//! Services composing the short-link pipeline.

pub mod context_extractor;
pub mod dispatcher;
pub mod redirect_service;

pub use context_extractor::derive_client_context;
pub use dispatcher::dispatch;
pub use redirect_service::{RedirectService, ResolverSettings};
