use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        matches::{CreateMatchRequest, GameMatchListQuery, MatchListQuery, MatchResponse},
    },
    error::AppError,
    services::match_service,
    state::SharedState,
};

/// Match history endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/matches", post(record_match))
        .route(
            "/matches/{match_id}",
            get(get_match).delete(delete_match),
        )
        .route("/matches/player/{player_id}", get(list_player_matches))
        .route("/matches/game/{game_id}", get(list_game_matches))
}

#[utoipa::path(
    post,
    path = "/api/v1/matches",
    tag = "matches",
    request_body = CreateMatchRequest,
    responses((status = 201, description = "Match recorded", body = MatchResponse))
)]
/// Record a completed match.
pub async fn record_match(
    State(state): State<SharedState>,
    Json(payload): Json<CreateMatchRequest>,
) -> Result<(StatusCode, Json<MatchResponse>), AppError> {
    payload.validate()?;
    let record = match_service::record_match(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/v1/matches/{match_id}",
    tag = "matches",
    params(("match_id" = String, Path, description = "Match document id")),
    responses(
        (status = 200, description = "Match record", body = MatchResponse),
        (status = 404, description = "Match not found", body = MessageResponse)
    )
)]
/// Fetch a single match record.
pub async fn get_match(
    State(state): State<SharedState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchResponse>, AppError> {
    Ok(Json(match_service::get_match(&state, &match_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/matches/player/{player_id}",
    tag = "matches",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        MatchListQuery
    ),
    responses((status = 200, description = "Recent matches, newest first", body = [MatchResponse]))
)]
/// List a player's most recent matches.
pub async fn list_player_matches(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
    Query(query): Query<MatchListQuery>,
) -> Result<Json<Vec<MatchResponse>>, AppError> {
    Ok(Json(
        match_service::list_player_matches(&state, &player_id, query.limit).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/matches/game/{game_id}",
    tag = "matches",
    params(
        ("game_id" = String, Path, description = "Game identifier"),
        GameMatchListQuery
    ),
    responses((status = 200, description = "Recent matches, newest first", body = [MatchResponse]))
)]
/// List a game's most recent matches.
pub async fn list_game_matches(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
    Query(query): Query<GameMatchListQuery>,
) -> Result<Json<Vec<MatchResponse>>, AppError> {
    Ok(Json(
        match_service::list_game_matches(&state, &game_id, query.limit).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/matches/{match_id}",
    tag = "matches",
    params(("match_id" = String, Path, description = "Match document id")),
    responses(
        (status = 200, description = "Match deleted", body = MessageResponse),
        (status = 404, description = "Match not found", body = MessageResponse)
    )
)]
/// Delete a match record.
pub async fn delete_match(
    State(state): State<SharedState>,
    Path(match_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(match_service::delete_match(&state, &match_id).await?))
}
