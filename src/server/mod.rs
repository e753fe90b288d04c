pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, ModelConfig},
    model::{HuggingFaceQaModel, ModelAvailability, QaModel},
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/chat", post(handlers::chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn acquire(config: &ModelConfig) -> Result<Arc<dyn QaModel>> {
    let model = HuggingFaceQaModel::load(config).await?;
    Ok(Arc::new(model))
}

pub async fn run(config: Config) -> Result<()> {
    let mode = config.server.mode;
    info!("Initializing QA model in {} mode", mode);

    // Acquire the model before anything is bound; strict mode bails out here.
    let availability = ModelAvailability::initialize(mode, acquire(&config.model)).await?;

    let app = router(AppState::new(mode, availability));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
