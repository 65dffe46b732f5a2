//! Deterministic file identifiers.
//!
//! Files are never addressed by their raw name or path over the wire. Instead each filename is
//! mapped to a version-5 UUID:
//!
//! `identifier = uuid5(NAMESPACE_DNS, filename.as_bytes())`
//!
//! The construction is bit-exact with any other RFC 4122 implementation, so clients that already
//! derive identifiers from filenames keep working.
//!
//! ## Canonical identifier form
//! - Length: 36
//! - Lowercase hex digits with hyphens at offsets 8, 13, 18 and 23
//! - Example: `0e00036b-1f97-550b-b8b9-d9d504e610cd`
//!
//! Identifiers supplied from outside (URL path segments) must already be canonical. Uppercase,
//! unhyphenated, braced and URN forms are rejected rather than normalised, so a lookup only ever
//! succeeds for the exact string the server would have produced itself.

mod file_id;

pub use file_id::FileId;

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
