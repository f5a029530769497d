//! FarmVision Inference Server
//!
//! HTTP API server for crop-leaf disease diagnosis. Loads the classifier
//! model and treatment catalog once at startup, then serves predictions
//! on uploaded images. If either artifact fails to load the server starts
//! anyway in degraded mode and reports itself unhealthy.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use farmvision_inference::catalog::TreatmentCatalog;
use farmvision_inference::inference::{OnnxClassifier, PredictionService, Scorer};
use farmvision_inference::utils::logging::{init_logging, LogConfig};

use crate::state::AppState;

/// FarmVision Inference Server
#[derive(Parser, Debug)]
#[command(name = "farmvision-inference")]
#[command(version)]
#[command(about = "HTTP API server for crop-leaf disease diagnosis")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Path to the serialized classifier model (ONNX)
    #[arg(long, env = "FARMVISION_MODEL", default_value = "model/plant_disease.onnx")]
    model: PathBuf,

    /// Path to the treatment catalog document (JSON)
    #[arg(long, env = "FARMVISION_TREATMENTS", default_value = "data/treatment_data.json")]
    treatments: PathBuf,

    /// Maximum upload size in bytes
    #[arg(long, default_value = "10485760")]
    max_upload_bytes: usize,

    /// Enable verbose logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    init_logging(&log_config).map_err(|e| anyhow::anyhow!(e))?;

    info!("FarmVision Inference Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Model path:   {:?}", cli.model);
    info!("  Catalog path: {:?}", cli.treatments);
    info!("  Upload limit: {} bytes", cli.max_upload_bytes);

    // Load the classifier. A missing or corrupt artifact degrades the
    // service instead of aborting startup.
    let classifier: Option<Box<dyn Scorer>> = match OnnxClassifier::load(&cli.model) {
        Ok(classifier) => Some(Box::new(classifier)),
        Err(e) => {
            warn!("{}. Starting degraded: predictions will return 503.", e);
            None
        }
    };

    // Same policy for the catalog: predictions still run against an
    // empty catalog, every lookup takes the fallback path.
    let catalog = match TreatmentCatalog::load(&cli.treatments) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!("{}. Starting with an empty catalog: all lookups fall back.", e);
            TreatmentCatalog::empty()
        }
    };

    let service = PredictionService::new(classifier, catalog);
    let state = Arc::new(AppState::new(service));

    let app = Router::new()
        .route("/predict", post(routes::predict::predict))
        .route("/health", get(routes::health::health_check))
        .with_state(state)
        .layer(DefaultBodyLimit::max(cli.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
