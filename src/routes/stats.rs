use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        stats::{CreateStatsRequest, IncrementStatsRequest, StatsResponse},
    },
    error::AppError,
    services::stats_service,
    state::SharedState,
};

/// Per-game player statistics endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/stats", post(create_stats))
        .route("/stats/{player_id}", get(list_player_stats))
        .route(
            "/stats/{player_id}/{game_id}",
            get(get_stats).patch(increment_stats).delete(delete_stats),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/stats",
    tag = "stats",
    request_body = CreateStatsRequest,
    responses(
        (status = 201, description = "Stats initialized", body = StatsResponse),
        (status = 409, description = "Stats already exist", body = MessageResponse)
    )
)]
/// Initialize zeroed stats for a player and game pair.
pub async fn create_stats(
    State(state): State<SharedState>,
    Json(payload): Json<CreateStatsRequest>,
) -> Result<(StatusCode, Json<StatsResponse>), AppError> {
    payload.validate()?;
    let stats = stats_service::create_stats(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stats/{player_id}",
    tag = "stats",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses((status = 200, description = "Stats across games", body = [StatsResponse]))
)]
/// List a player's stats across every tracked game.
pub async fn list_player_stats(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<StatsResponse>>, AppError> {
    Ok(Json(
        stats_service::list_player_stats(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/stats/{player_id}/{game_id}",
    tag = "stats",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("game_id" = String, Path, description = "Game identifier")
    ),
    responses(
        (status = 200, description = "Stats for the pair", body = StatsResponse),
        (status = 404, description = "Stats not found", body = MessageResponse)
    )
)]
/// Fetch one player's stats for a game.
pub async fn get_stats(
    State(state): State<SharedState>,
    Path((player_id, game_id)): Path<(String, String)>,
) -> Result<Json<StatsResponse>, AppError> {
    Ok(Json(
        stats_service::get_stats(&state, &player_id, &game_id).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/stats/{player_id}/{game_id}",
    tag = "stats",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("game_id" = String, Path, description = "Game identifier")
    ),
    request_body = IncrementStatsRequest,
    responses(
        (status = 200, description = "Stats with refreshed ratios", body = StatsResponse),
        (status = 404, description = "Stats not found", body = MessageResponse)
    )
)]
/// Apply counter deltas and recompute the derived ratios.
pub async fn increment_stats(
    State(state): State<SharedState>,
    Path((player_id, game_id)): Path<(String, String)>,
    Json(payload): Json<IncrementStatsRequest>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = stats_service::increment_stats(&state, &player_id, &game_id, payload).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    delete,
    path = "/api/v1/stats/{player_id}/{game_id}",
    tag = "stats",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("game_id" = String, Path, description = "Game identifier")
    ),
    responses(
        (status = 200, description = "Stats deleted", body = MessageResponse),
        (status = 404, description = "Stats not found", body = MessageResponse)
    )
)]
/// Delete one player's stats for a game.
pub async fn delete_stats(
    State(state): State<SharedState>,
    Path((player_id, game_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        stats_service::delete_stats(&state, &player_id, &game_id).await?,
    ))
}
