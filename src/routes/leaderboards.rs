use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        leaderboards::{
            CreateLeaderboardRequest, GameLeaderboardQuery, LeaderboardEntryDto,
            LeaderboardResponse, UpsertEntryQuery,
        },
    },
    error::AppError,
    services::leaderboard_service,
    state::SharedState,
};

/// Leaderboard endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/leaderboards", post(create_leaderboard))
        .route(
            "/leaderboards/{leaderboard_id}",
            get(get_leaderboard).delete(delete_leaderboard),
        )
        .route("/leaderboards/game/{game_id}", get(get_game_leaderboard))
        .route(
            "/leaderboards/{leaderboard_id}/entries",
            put(replace_entries),
        )
        .route("/leaderboards/{leaderboard_id}/entry", post(upsert_entry))
}

#[utoipa::path(
    post,
    path = "/api/v1/leaderboards",
    tag = "leaderboards",
    request_body = CreateLeaderboardRequest,
    responses((status = 201, description = "Leaderboard created", body = LeaderboardResponse))
)]
/// Create an empty leaderboard for a game.
pub async fn create_leaderboard(
    State(state): State<SharedState>,
    Json(payload): Json<CreateLeaderboardRequest>,
) -> Result<(StatusCode, Json<LeaderboardResponse>), AppError> {
    payload.validate()?;
    let leaderboard = leaderboard_service::create_leaderboard(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(leaderboard)))
}

#[utoipa::path(
    get,
    path = "/api/v1/leaderboards/{leaderboard_id}",
    tag = "leaderboards",
    params(("leaderboard_id" = String, Path, description = "Leaderboard document id")),
    responses(
        (status = 200, description = "Ranked leaderboard", body = LeaderboardResponse),
        (status = 404, description = "Leaderboard not found", body = MessageResponse)
    )
)]
/// Fetch a leaderboard by id.
pub async fn get_leaderboard(
    State(state): State<SharedState>,
    Path(leaderboard_id): Path<String>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    Ok(Json(
        leaderboard_service::get_leaderboard(&state, &leaderboard_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/leaderboards/game/{game_id}",
    tag = "leaderboards",
    params(
        ("game_id" = String, Path, description = "Game identifier"),
        GameLeaderboardQuery
    ),
    responses(
        (status = 200, description = "Ranked leaderboard", body = LeaderboardResponse),
        (status = 404, description = "Leaderboard not found", body = MessageResponse)
    )
)]
/// Fetch a game's leaderboard for one metric and timeframe.
pub async fn get_game_leaderboard(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
    Query(query): Query<GameLeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    Ok(Json(
        leaderboard_service::get_game_leaderboard(
            &state,
            &game_id,
            &query.leaderboard_type,
            &query.timeframe,
        )
        .await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/leaderboards/{leaderboard_id}/entries",
    tag = "leaderboards",
    params(("leaderboard_id" = String, Path, description = "Leaderboard document id")),
    request_body = [LeaderboardEntryDto],
    responses(
        (status = 200, description = "Re-ranked leaderboard", body = LeaderboardResponse),
        (status = 404, description = "Leaderboard not found", body = MessageResponse)
    )
)]
/// Replace the full entry list; entries are re-ranked by score.
pub async fn replace_entries(
    State(state): State<SharedState>,
    Path(leaderboard_id): Path<String>,
    Json(entries): Json<Vec<LeaderboardEntryDto>>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    Ok(Json(
        leaderboard_service::replace_entries(&state, &leaderboard_id, entries).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/leaderboards/{leaderboard_id}/entry",
    tag = "leaderboards",
    params(
        ("leaderboard_id" = String, Path, description = "Leaderboard document id"),
        UpsertEntryQuery
    ),
    responses(
        (status = 200, description = "Re-ranked leaderboard", body = LeaderboardResponse),
        (status = 404, description = "Leaderboard not found", body = MessageResponse)
    )
)]
/// Insert or refresh one player's entry, then re-rank the board.
pub async fn upsert_entry(
    State(state): State<SharedState>,
    Path(leaderboard_id): Path<String>,
    Query(query): Query<UpsertEntryQuery>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    Ok(Json(
        leaderboard_service::upsert_entry(
            &state,
            &leaderboard_id,
            &query.player_id,
            &query.username,
            query.score,
        )
        .await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/leaderboards/{leaderboard_id}",
    tag = "leaderboards",
    params(("leaderboard_id" = String, Path, description = "Leaderboard document id")),
    responses(
        (status = 200, description = "Leaderboard deleted", body = MessageResponse),
        (status = 404, description = "Leaderboard not found", body = MessageResponse)
    )
)]
/// Delete a leaderboard.
pub async fn delete_leaderboard(
    State(state): State<SharedState>,
    Path(leaderboard_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        leaderboard_service::delete_leaderboard(&state, &leaderboard_id).await?,
    ))
}
