use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::kernel::Device;
use crate::server::app::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: ModelHealth,
}

#[derive(Debug, Serialize)]
pub struct ModelHealth {
    pub name: String,
    pub loaded: bool,
    pub device: Device,
}

/// Health check endpoint
///
/// Checks:
/// - Whether the abstractive model loaded at startup
///
/// Always returns 200 OK: extractive summaries keep working without the model,
/// so a missing model is reported as "degraded" rather than unavailable.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let loaded = state.deps.abstractive_available();

    let overall_status = if loaded { "healthy" } else { "degraded" };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: overall_status.to_string(),
            model: ModelHealth {
                name: state.deps.model_name.clone(),
                loaded,
                device: state.deps.device,
            },
        }),
    )
}
