use serde::Serialize;
use utoipa::ToSchema;

/// Per-backend connectivity report.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseHealth {
    /// `connected` or `degraded`.
    pub mongodb: String,
    /// `connected` or `degraded`.
    pub neo4j: String,
}

/// Aggregate health report.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` when both backends are reachable, `degraded` otherwise.
    pub status: String,
    pub databases: DatabaseHealth,
}

/// Landing payload served at the API root.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    pub docs: String,
}
