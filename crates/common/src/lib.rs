//! Shared types for the users API.
//!
//! Holds the constant response bodies served by the HTTP layer so their
//! wire shape can be pinned down and tested independently of the server.

pub mod types;

pub use types::{HealthStatus, UserList};
