use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::health::{HealthResponse, ServiceInfo},
    services::health_service,
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service banner", body = ServiceInfo))
)]
/// Return the service banner with a pointer to the interactive docs.
pub async fn root() -> Json<ServiceInfo> {
    Json(health_service::service_info())
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Per-backend connectivity report", body = HealthResponse))
)]
/// Return the current health status, pinging both database backends.
pub async fn healthcheck(State(state): State<SharedState>) -> Json<HealthResponse> {
    let status = health_service::health_status(&state).await;
    Json(status)
}

/// Configure the health routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/", get(root))
        .route("/health", get(healthcheck))
}
