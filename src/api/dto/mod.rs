//! Response bodies of the gateway's own endpoints.

pub mod geo;
pub mod health;
