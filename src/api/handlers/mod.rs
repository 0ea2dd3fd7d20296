//! HTTP request handlers for the gateway's own endpoints.

pub mod forward;
pub mod geo;
pub mod health;

pub use forward::forward_handler;
pub use geo::geo_handler;
pub use health::health_handler;
