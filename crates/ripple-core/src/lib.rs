//! Shared service plumbing: health handlers, tracing bootstrap,
//! request-id middleware, and response serialization helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
