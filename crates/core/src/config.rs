//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services. Request
//! handling never reads process-wide environment variables.

use crate::constants::DEFAULT_FILES_DIR;
use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    files_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The storage directory must already exist. It is never created here or later on: a missing
    /// directory is a deployment error and fails startup.
    pub fn new(files_dir: PathBuf) -> CoreResult<Self> {
        if !files_dir.is_dir() {
            return Err(CoreError::InvalidFilesDir(files_dir));
        }

        Ok(Self { files_dir })
    }

    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }
}

/// Resolve the storage directory from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_FILES_DIR`].
pub fn files_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILES_DIR))
}
