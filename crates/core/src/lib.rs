//! # fileid Core
//!
//! Core logic for serving stored files by deterministic identifier.
//!
//! This crate contains:
//! - Startup configuration ([`CoreConfig`])
//! - The identifier registry built from a one-off directory scan ([`FileRegistry`])
//! - The stat/read operations resolved through that registry ([`FileService`])
//!
//! **No API concerns**: HTTP routing, response shaping and process startup belong in `api-rest`
//! and the `fileid-run` binary.

pub mod config;
pub mod constants;
mod error;
pub mod registry;
pub mod service;

pub use config::{files_dir_from_env_value, CoreConfig};
pub use constants::DEFAULT_FILES_DIR;
pub use error::{CoreError, CoreResult};
pub use fileid_files::FileDescriptor;
pub use fileid_uuid::FileId;
pub use registry::FileRegistry;
pub use service::{FileContent, FileService};
