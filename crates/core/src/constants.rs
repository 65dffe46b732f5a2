//! Constants used throughout the fileid core crate.

/// Default storage directory when no explicit directory is configured.
pub const DEFAULT_FILES_DIR: &str = "files";
