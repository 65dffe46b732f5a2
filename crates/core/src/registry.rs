//! Identifier registry.
//!
//! Maps each [`FileId`] to the filename it was derived from. The registry is built once from a
//! single, non-recursive scan of the storage directory and is immutable afterwards; files added or
//! removed later stay invisible until the process restarts.
//!
//! Entries are not filtered by type. A subdirectory gets an identifier like any file and then
//! fails the file operations that are attempted on it.

use crate::{CoreError, CoreResult};
use fileid_uuid::FileId;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Build-once mapping from identifier to filename.
#[derive(Debug, Default, Clone)]
pub struct FileRegistry {
    entries: HashMap<FileId, String>,
}

impl FileRegistry {
    /// Scans `directory` and registers every entry in it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DirectoryScan`] if the directory is missing or any entry cannot be
    /// read. The directory is never created.
    pub fn build(directory: &Path) -> CoreResult<Self> {
        let mut names = Vec::new();

        for entry in fs::read_dir(directory).map_err(CoreError::DirectoryScan)? {
            let entry = entry.map_err(CoreError::DirectoryScan)?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::warn!("skipping entry with non UTF-8 name: {:?}", raw);
                }
            }
        }

        let registry = Self::from_filenames(names);
        tracing::info!(
            "registered {} file(s) from {}",
            registry.len(),
            directory.display()
        );
        Ok(registry)
    }

    /// Registers `filenames` in order; on an identifier collision the later name wins.
    pub fn from_filenames<I, S>(filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = HashMap::new();
        for name in filenames {
            let name = name.into();
            let id = FileId::from_filename(&name);
            if let Some(previous) = entries.insert(id, name) {
                tracing::warn!("identifier {} collided, replacing {:?}", id, previous);
            }
        }
        Self { entries }
    }

    /// Looks up the filename registered under `identifier`.
    ///
    /// Pure lookup with no I/O. Strings that are not canonical identifiers resolve to `None`.
    pub fn resolve(&self, identifier: &str) -> Option<&str> {
        let id = FileId::parse(identifier).ok()?;
        self.get(&id)
    }

    /// Looks up the filename registered under an already parsed identifier.
    pub fn get(&self, id: &FileId) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries ordered by filename.
    pub fn entries(&self) -> Vec<(FileId, &str)> {
        let mut all: Vec<(FileId, &str)> = self
            .entries
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
            .collect();
        all.sort_by(|a, b| a.1.cmp(b.1));
        all
    }
}
