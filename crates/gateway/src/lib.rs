//! HTTP gateway for StudyPlan.
//!
//! Serves the embedded form page, a health check and the v1 JSON API that
//! generates study plans. One planner instance is shared by every request.
//!
//! Built on Axum.

pub mod api_v1;
mod page;

use axum::extract::DefaultBodyLimit;
use axum::{Router, response::Json, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use studyplan_config::{AppConfig, FormConfig};
use studyplan_planner::StudyPlanner;

/// Largest request body accepted by any route.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared application state for the gateway.
pub struct GatewayState {
    pub planner: Arc<StudyPlanner>,
    pub form: FormConfig,
}

pub type SharedState = Arc<GatewayState>;

/// Build the full router: form page, health and the v1 API.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(page::form_page))
        .route("/static/{file}", get(page::static_file))
        .route("/health", get(health_handler))
        .nest("/v1", api_v1::v1_router(state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
///
/// The planner is built before binding, so a missing API key stops startup
/// instead of surfacing on the first form submission.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let planner = StudyPlanner::from_config(&config)?;
    info!(provider = %planner.provider_name(), model = %planner.model(), "Planner ready");

    let state = Arc::new(GatewayState {
        planner: Arc::new(planner),
        form: config.form.clone(),
    });
    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
