#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid files directory: {}", .0.display())]
    InvalidFilesDir(std::path::PathBuf),
    #[error("failed to scan files directory: {0}")]
    DirectoryScan(std::io::Error),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("file access error: {0}")]
    Files(#[from] fileid_files::FilesError),
}

impl CoreError {
    /// True when the identifier is unknown, as opposed to a server-side failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
