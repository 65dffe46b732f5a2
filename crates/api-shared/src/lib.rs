//! # API Shared
//!
//! Shared definitions for the fileid APIs.
//!
//! Contains:
//! - Wire types for request/response bodies (`types` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` for response bodies and by `fileid-client` to decode error bodies.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
