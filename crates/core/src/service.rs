//! Stat and read operations addressed by identifier.
//!
//! Both operations resolve the identifier through the [`FileRegistry`] first. An unknown
//! identifier yields [`CoreError::NotFound`] without touching the filesystem; everything after a
//! successful lookup is computed fresh for the call.

use crate::{CoreConfig, CoreError, CoreResult, FileRegistry};
use fileid_files::{guess_mimetype, FileDescriptor, FilesService};
use std::sync::Arc;

/// Raw content of a file together with the hints needed to serve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub name: String,
    pub mimetype: String,
    pub bytes: Vec<u8>,
}

/// Read-only file operations over a shared registry.
#[derive(Clone, Debug)]
pub struct FileService {
    registry: Arc<FileRegistry>,
    files: FilesService,
}

impl FileService {
    /// Creates a new `FileService` reading from the configured storage directory.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Files`] if the storage directory cannot be canonicalised.
    pub fn new(cfg: &CoreConfig, registry: Arc<FileRegistry>) -> CoreResult<Self> {
        let files = FilesService::new(cfg.files_dir())?;
        Ok(Self { registry, files })
    }

    /// Returns the metadata of the file registered under `identifier`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the identifier is not registered
    /// - [`CoreError::Files`] if the file can no longer be inspected
    pub fn stat(&self, identifier: &str) -> CoreResult<FileDescriptor> {
        let name = self.lookup(identifier)?;
        Ok(self.files.describe(name)?)
    }

    /// Returns the full raw content of the file registered under `identifier`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the identifier is not registered
    /// - [`CoreError::Files`] if the file cannot be read
    pub fn read(&self, identifier: &str) -> CoreResult<FileContent> {
        let name = self.lookup(identifier)?;
        let bytes = self.files.read(name)?;

        Ok(FileContent {
            name: name.to_owned(),
            mimetype: guess_mimetype(name),
            bytes,
        })
    }

    fn lookup(&self, identifier: &str) -> CoreResult<&str> {
        match self.registry.resolve(identifier) {
            Some(name) => {
                tracing::debug!("resolved {} to {:?}", identifier, name);
                Ok(name)
            }
            None => Err(CoreError::NotFound(identifier.to_owned())),
        }
    }
}
