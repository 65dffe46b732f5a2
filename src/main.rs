use std::path::PathBuf;
use std::sync::Arc;

use api_rest::{ApiDoc, AppState};
use fileid_core::{files_dir_from_env_value, CoreConfig, FileRegistry, FileService};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Main entry point for the fileid server
///
/// Scans the storage directory once, builds the identifier registry and serves the REST API
/// on port 5000 (configurable via FILEID_REST_ADDR).
///
/// # Environment Variables
/// - `FILEID_REST_ADDR`: REST server address (default: "0.0.0.0:5000")
/// - `FILES_DIR`: Directory holding the served files (default: "files"). It must exist.
/// - `RUST_LOG`: Extra tracing directives
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, the directory scan or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fileid=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("FILEID_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());

    let files_dir: PathBuf = files_dir_from_env_value(std::env::var("FILES_DIR").ok());
    let cfg = CoreConfig::new(files_dir)?;

    let registry = Arc::new(FileRegistry::build(cfg.files_dir())?);
    tracing::info!("Identifiers:");
    for (id, name) in registry.entries() {
        tracing::info!("{} {}", id, name);
    }

    let file_service = Arc::new(FileService::new(&cfg, registry)?);

    let app = api_rest::router(AppState { file_service })
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    tracing::info!("++ Starting fileid REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
