//! Directory-scoped file access
//!
//! [`FilesService`] answers two questions about a file in the storage directory: what does it
//! look like ([`FilesService::describe`]) and what does it contain ([`FilesService::read`]).
//!
//! # Descriptor fields
//!
//! - `name`: the filename as listed in the directory
//! - `create_datetime`: change time (`st_ctime`) in local time, `YYYY-MM-DD HH:MM:SS`
//! - `size`: exact byte length at the time of the call
//! - `mimetype`: guessed from the extension, or `"unknown"`
//!
//! On Unix the timestamp is the inode change time, which moves whenever the content or the
//! metadata (permissions, owner, links) changes. Other platforms report the creation time.
//!
//! # Security Model
//!
//! - The root directory is canonicalised once at construction
//! - Names must be a single normal path component, so `..` and separators never reach the
//!   filesystem
//! - Errors carry paths for server-side logging only; callers must not echo them to clients

use crate::{FilesError, CREATE_DATETIME_FORMAT, UNKNOWN_MIMETYPE};
use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::io::Read;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// Metadata for a single file, computed per request
///
/// Serialises to `{name, create_datetime, size, mimetype}`; the full path is kept for server-side
/// use and never serialised.
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Filename as listed in the storage directory
    pub name: String,

    /// Change timestamp, local time, `YYYY-MM-DD HH:MM:SS`
    pub create_datetime: String,

    /// Size of the file in bytes
    pub size: u64,

    /// Mimetype guessed from the filename extension
    pub mimetype: String,

    /// Absolute path of the file
    #[serde(skip)]
    pub full_path: PathBuf,
}

/// Service for reading files out of one storage directory
#[derive(Debug, Clone)]
pub struct FilesService {
    /// Canonicalised storage directory
    root_directory: PathBuf,
}

impl FilesService {
    /// Creates a new `FilesService` for `root_directory`
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if:
    /// - The root directory does not exist or is not a directory
    /// - Path canonicalisation fails
    pub fn new(root_directory: &Path) -> Result<Self, FilesError> {
        if !root_directory.exists() {
            return Err(FilesError::InvalidRootDirectory(format!(
                "Directory does not exist: {}",
                root_directory.display()
            )));
        }

        if !root_directory.is_dir() {
            return Err(FilesError::InvalidRootDirectory(format!(
                "Path is not a directory: {}",
                root_directory.display()
            )));
        }

        let root_directory = root_directory.canonicalize().map_err(|e| {
            FilesError::InvalidRootDirectory(format!(
                "Cannot canonicalize path {}: {}",
                root_directory.display(),
                e
            ))
        })?;

        Ok(Self { root_directory })
    }

    /// Computes the descriptor for `name`
    ///
    /// Size and timestamps are read from the filesystem on every call.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if:
    /// - `name` is not a single plain path component
    /// - The file metadata cannot be read (I/O)
    pub fn describe(&self, name: &str) -> Result<FileDescriptor, FilesError> {
        let full_path = self.full_path(name)?;

        let metadata = fs::metadata(&full_path).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to stat {}: {}", full_path.display(), e),
            ))
        })?;

        let changed = change_time(&metadata).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("No change time for {}: {}", full_path.display(), e),
            ))
        })?;

        Ok(FileDescriptor {
            name: name.to_owned(),
            create_datetime: format_timestamp(changed),
            size: metadata.len(),
            mimetype: guess_mimetype(name),
            full_path,
        })
    }

    /// Reads the whole content of `name` as raw bytes
    ///
    /// The handle is dropped before returning, on success and on error alike.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if:
    /// - `name` is not a single plain path component
    /// - The file cannot be opened or read (I/O), including when `name` is a directory
    pub fn read(&self, name: &str) -> Result<Vec<u8>, FilesError> {
        let full_path = self.full_path(name)?;

        let mut file = fs::File::open(&full_path).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open file {}: {}", full_path.display(), e),
            ))
        })?;

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read file {}: {}", full_path.display(), e),
            ))
        })?;

        Ok(buffer)
    }

    /// Returns the canonicalised storage directory
    #[must_use]
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Joins `name` onto the storage directory after checking it is one normal component
    fn full_path(&self, name: &str) -> Result<PathBuf, FilesError> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if part == name => {
                Ok(self.root_directory.join(part))
            }
            _ => Err(FilesError::InvalidPath(format!(
                "Not a plain filename: {:?}",
                name
            ))),
        }
    }
}

/// Guesses the mimetype of `name` from its extension
///
/// Returns [`UNKNOWN_MIMETYPE`] when the extension is missing or unmapped.
pub fn guess_mimetype(name: &str) -> String {
    mime_guess::from_path(name)
        .first_raw()
        .unwrap_or(UNKNOWN_MIMETYPE)
        .to_owned()
}

/// Returns the inode change time (`st_ctime`) recorded in `metadata`
///
/// Times before the epoch are clamped to the epoch.
#[cfg(unix)]
pub fn change_time(metadata: &Metadata) -> std::io::Result<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let secs = u64::try_from(metadata.ctime()).unwrap_or(0);
    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    Ok(SystemTime::UNIX_EPOCH + Duration::new(secs, nanos))
}

/// Returns the creation time recorded in `metadata`
#[cfg(not(unix))]
pub fn change_time(metadata: &Metadata) -> std::io::Result<SystemTime> {
    metadata.created()
}

/// Formats `time` in local time using [`CREATE_DATETIME_FORMAT`]
///
/// Sub-second precision and the UTC offset are dropped.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(CREATE_DATETIME_FORMAT)
        .to_string()
}
