//! fileid File Access
//!
//! This crate computes per-request views of the files held in the storage directory.
//!
//! ## Design Principles
//!
//! - A [`FileDescriptor`] is a plain value computed fresh for every request; nothing is memoised
//! - Content is read as raw bytes, so binary files are served byte-exact
//! - Every operation is scoped to a single directory; names must be one plain path component
//! - File handles are released on every exit path
//!
//! ## Example Usage
//!
//! ```no_run
//! use fileid_files::FilesService;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = FilesService::new(Path::new("files"))?;
//! let descriptor = service.describe("test_file.txt")?;
//! println!("{} is {} bytes", descriptor.name, descriptor.size);
//! # Ok(())
//! # }
//! ```

mod constants;
mod files;

pub use constants::{CREATE_DATETIME_FORMAT, UNKNOWN_MIMETYPE};
pub use files::{change_time, format_timestamp, guess_mimetype, FileDescriptor, FilesService};

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Root directory does not exist or is not a directory
    #[error("Invalid root directory: {0}")]
    InvalidRootDirectory(String),

    /// Name is not a single plain path component
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
