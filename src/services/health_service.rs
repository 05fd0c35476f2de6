use tracing::warn;

use crate::{
    dto::health::{DatabaseHealth, HealthResponse, ServiceInfo},
    state::SharedState,
};

const CONNECTED: &str = "connected";
const DEGRADED: &str = "degraded";

/// Landing payload served at the API root.
pub fn service_info() -> ServiceInfo {
    ServiceInfo {
        message: "Multiplayer Gaming System API".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        status: "running".to_owned(),
        docs: "/docs".to_owned(),
    }
}

/// Probe both backends and report per-store connectivity.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let mongodb = match state.documents().await {
        Some(store) => match store.ping().await {
            Ok(()) => CONNECTED,
            Err(err) => {
                warn!(error = %err, "document store health check failed");
                DEGRADED
            }
        },
        None => {
            warn!("document store unavailable (degraded mode)");
            DEGRADED
        }
    };

    let neo4j = match state.graph().await {
        Some(store) => match store.ping().await {
            Ok(()) => CONNECTED,
            Err(err) => {
                warn!(error = %err, "graph store health check failed");
                DEGRADED
            }
        },
        None => {
            warn!("graph store unavailable (degraded mode)");
            DEGRADED
        }
    };

    let status = if mongodb == CONNECTED && neo4j == CONNECTED {
        "healthy"
    } else {
        "degraded"
    };

    HealthResponse {
        status: status.to_owned(),
        databases: DatabaseHealth {
            mongodb: mongodb.to_owned(),
            neo4j: neo4j.to_owned(),
        },
    }
}
