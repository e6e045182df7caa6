//! Shared service plumbing for Custodia services.
//!
//! Health handlers, tracing init, request-id middleware, and wire-format
//! serde helpers. No domain logic lives here.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
