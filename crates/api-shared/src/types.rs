//! Request/response bodies shared by the server and its clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message carried by every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "File not found";

/// Message carried by every 500 response. Deliberately free of paths and OS error text.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error";

/// Metadata of a stored file as returned by `GET /file/{id}/stat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatRes {
    /// Filename as stored on disk
    pub name: String,
    /// Creation time, local time, `YYYY-MM-DD HH:MM:SS`
    pub create_datetime: String,
    /// Size in bytes
    pub size: u64,
    /// Mimetype guessed from the extension, or `unknown`
    pub mimetype: String,
}

/// Structured error body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn not_found() -> Self {
        Self {
            error: NOT_FOUND_MESSAGE.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            error: INTERNAL_ERROR_MESSAGE.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
