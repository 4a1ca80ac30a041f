//! Ambient web-service plumbing shared by the campus portal service:
//! health endpoints, the caller-identity extractor, the request-id layer,
//! serde helpers, and tracing setup.

pub mod health;
pub mod identity;
pub mod middleware;
pub mod serde;
pub mod tracing;
