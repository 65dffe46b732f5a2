//! Request handlers for the fileid REST API.
//!
//! File operations run on tokio's blocking pool: they are plain synchronous whole-file reads.

use crate::AppState;
use api_shared::{ErrorRes, HealthRes, HealthService, StatRes};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Json,
};
use fileid_core::{CoreError, CoreResult};

type ApiError = (StatusCode, Json<ErrorRes>);

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/file/{id}/stat",
    params(
        ("id" = String, Path, description = "File identifier (lowercase hyphenated UUID)")
    ),
    responses(
        (status = 200, description = "File metadata", body = StatRes),
        (status = 404, description = "Unknown identifier", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Return the metadata of a stored file
///
/// Size, mimetype and creation time are recomputed on every call.
///
/// # Errors
/// - `404 Not Found` if the identifier is not registered.
/// - `500 Internal Server Error` if the file can no longer be inspected.
#[axum::debug_handler]
pub async fn stat_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatRes>, ApiError> {
    let service = state.file_service.clone();
    let descriptor = run_blocking(move || service.stat(&id)).await?;

    Ok(Json(StatRes {
        name: descriptor.name,
        create_datetime: descriptor.create_datetime,
        size: descriptor.size,
        mimetype: descriptor.mimetype,
    }))
}

#[utoipa::path(
    get,
    path = "/file/{id}/read",
    params(
        ("id" = String, Path, description = "File identifier (lowercase hyphenated UUID)")
    ),
    responses(
        (status = 200, description = "Raw file content; Content-Type is the guessed mimetype and Content-Disposition the filename"),
        (status = 404, description = "Unknown identifier", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Return the raw content of a stored file
///
/// The whole file is buffered in memory and returned byte-exact.
///
/// # Errors
/// - `404 Not Found` if the identifier is not registered.
/// - `500 Internal Server Error` if the file cannot be read.
#[axum::debug_handler]
pub async fn read_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, HeaderMap, Vec<u8>), ApiError> {
    let service = state.file_service.clone();
    let content = run_blocking(move || service.read(&id)).await?;

    let mut headers = HeaderMap::new();
    match HeaderValue::from_str(&content.mimetype) {
        Ok(value) => {
            headers.insert(header::CONTENT_TYPE, value);
        }
        Err(e) => tracing::warn!("unusable mimetype {:?}: {}", content.mimetype, e),
    }
    match HeaderValue::from_str(&content.name) {
        Ok(value) => {
            headers.insert(header::CONTENT_DISPOSITION, value);
        }
        Err(e) => tracing::warn!("filename not valid as a header value {:?}: {}", content.name, e),
    }

    Ok((StatusCode::OK, headers, content.bytes))
}

async fn run_blocking<T, F>(op: F) -> Result<T, ApiError>
where
    F: FnOnce() -> CoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(op).await {
        Ok(result) => result.map_err(error_response),
        Err(e) => {
            tracing::error!("file task failed: {:?}", e);
            Err(internal_error())
        }
    }
}

fn error_response(err: CoreError) -> ApiError {
    if err.is_not_found() {
        tracing::debug!("{}", err);
        return (StatusCode::NOT_FOUND, Json(ErrorRes::not_found()));
    }

    tracing::error!("File access error: {:?}", err);
    internal_error()
}

fn internal_error() -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorRes::internal()))
}
