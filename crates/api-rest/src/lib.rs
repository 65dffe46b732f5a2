//! # API REST
//!
//! REST API implementation for fileid.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation (served by the `fileid-run` binary through Swagger UI)
//! - Translating core errors into status codes and JSON error bodies
//!
//! Uses `api-shared` for the response body types.

#![warn(rust_2018_idioms)]

mod handlers;

use axum::{routing::get, Router};
use fileid_core::FileService;
use std::sync::Arc;
use utoipa::OpenApi;

pub use handlers::{health, read_file, stat_file};

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub file_service: Arc<FileService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::stat_file, handlers::read_file),
    components(schemas(api_shared::HealthRes, api_shared::StatRes, api_shared::ErrorRes))
)]
pub struct ApiDoc;

/// Builds the router for all fileid endpoints
///
/// Layers such as CORS and the Swagger UI are added by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/file/:id/stat", get(stat_file))
        .route("/file/:id/read", get(read_file))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use fileid_core::{CoreConfig, FileId, FileRegistry};
    use fileid_files::{change_time, format_timestamp};
    use http_body_util::BodyExt;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const LOREM: &str = "Lorem ipsum dolor sit amet.";

    fn app_with(files: &[(&str, &[u8])]) -> (TempDir, Router) {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        let app = app_for(&temp);
        (temp, app)
    }

    fn app_for(temp: &TempDir) -> Router {
        let cfg = CoreConfig::new(temp.path().to_path_buf()).unwrap();
        let registry = Arc::new(FileRegistry::build(cfg.files_dir()).unwrap());
        let file_service = Arc::new(FileService::new(&cfg, registry).unwrap());
        router(AppState { file_service })
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn id_of(name: &str) -> String {
        FileId::from_filename(name).to_string()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (_temp, app) = app_with(&[]);

        let response = get(app, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn stat_known_file() {
        let (temp, app) = app_with(&[("test_file.txt", LOREM.as_bytes())]);

        let response = get(app, &format!("/file/{}/stat", id_of("test_file.txt"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let metadata = fs::metadata(temp.path().join("test_file.txt")).unwrap();
        let changed = change_time(&metadata).unwrap();
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "name": "test_file.txt",
                "create_datetime": format_timestamp(changed),
                "size": 27,
                "mimetype": "text/plain"
            })
        );
    }

    #[tokio::test]
    async fn stat_reports_mimetypes_for_sample_files() {
        let (_temp, app) = app_with(&[
            ("test_image.jpg", b"consectetur adipiscing elit."),
            ("test_document.pdf", b"sed do eiusmod tempor incididunt"),
        ]);

        let cases = [
            ("test_image.jpg", "image/jpeg", 28),
            ("test_document.pdf", "application/pdf", 32),
        ];
        for (name, mimetype, size) in cases {
            let response = get(app.clone(), &format!("/file/{}/stat", id_of(name))).await;
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["mimetype"], mimetype);
            assert_eq!(json["size"], size);
            assert_eq!(json["name"], name);
        }
    }

    #[tokio::test]
    async fn read_known_file() {
        let (_temp, app) = app_with(&[("test_file.txt", LOREM.as_bytes())]);

        let response = get(app, &format!("/file/{}/read", id_of("test_file.txt"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "test_file.txt"
        );
        assert_eq!(body_bytes(response).await, LOREM.as_bytes());
    }

    #[tokio::test]
    async fn read_binary_file_is_byte_exact() {
        let binary: Vec<u8> = (0..=255).collect();
        let (_temp, app) = app_with(&[("payload.bin", binary.as_slice())]);

        let response = get(app, &format!("/file/{}/read", id_of("payload.bin"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, binary);
    }

    #[tokio::test]
    async fn read_unknown_extension_uses_unknown_content_type() {
        let (_temp, app) = app_with(&[("blob.zzqx", b"??")]);

        let response = get(app, &format!("/file/{}/read", id_of("blob.zzqx"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "unknown");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn read_filename_with_control_character_omits_disposition() {
        let name = "bell\u{7}.txt";
        let (_temp, app) = app_with(&[(name, LOREM.as_bytes())]);

        let response = get(app, &format!("/file/{}/read", id_of(name))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
        assert_eq!(body_bytes(response).await, LOREM.as_bytes());
    }

    #[tokio::test]
    async fn unknown_identifier_is_404_on_both_endpoints() {
        let (_temp, app) = app_with(&[("test_file.txt", LOREM.as_bytes())]);

        for uri in [
            "/file/invalid_uuid/stat".to_string(),
            "/file/invalid_uuid/read".to_string(),
            format!("/file/{}/stat", id_of("other.txt")),
            format!("/file/{}/read", id_of("other.txt")),
        ] {
            let response = get(app.clone(), &uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({"error": "File not found"})
            );
        }
    }

    #[tokio::test]
    async fn io_failure_is_500_without_paths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("folder")).unwrap();
        fs::write(temp.path().join("vanishing.txt"), "soon gone").unwrap();
        let app = app_for(&temp);
        fs::remove_file(temp.path().join("vanishing.txt")).unwrap();

        for uri in [
            format!("/file/{}/read", id_of("folder")),
            format!("/file/{}/stat", id_of("vanishing.txt")),
            format!("/file/{}/read", id_of("vanishing.txt")),
        ] {
            let response = get(app.clone(), &uri).await;
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{}",
                uri
            );
            let body = String::from_utf8(body_bytes(response).await).unwrap();
            assert_eq!(body, r#"{"error":"Internal error"}"#);
        }
    }

    #[test]
    fn openapi_lists_file_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/file/{id}/stat"));
        assert!(doc.paths.paths.contains_key("/file/{id}/read"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
