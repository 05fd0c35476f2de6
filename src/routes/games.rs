use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        games::{CreateGameRequest, GameListQuery, GameResponse, UpdateGameRequest},
    },
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Game catalog endpoints backed by the document store.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/games", get(list_games).post(create_game))
        .route(
            "/games/{game_id}",
            get(get_game).put(update_game).delete(delete_game),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/games",
    tag = "games",
    request_body = CreateGameRequest,
    responses((status = 201, description = "Game added to the catalog", body = GameResponse))
)]
/// Add a game to the catalog.
pub async fn create_game(
    State(state): State<SharedState>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    payload.validate()?;
    let game = game_service::create_game(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

#[utoipa::path(
    get,
    path = "/api/v1/games",
    tag = "games",
    params(GameListQuery),
    responses((status = 200, description = "Catalog listing", body = [GameResponse]))
)]
/// List catalog entries, optionally filtered by platform.
pub async fn list_games(
    State(state): State<SharedState>,
    Query(query): Query<GameListQuery>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    Ok(Json(game_service::list_games(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/games/{game_id}",
    tag = "games",
    params(("game_id" = String, Path, description = "Game document id")),
    responses(
        (status = 200, description = "Catalog entry", body = GameResponse),
        (status = 404, description = "Game not found", body = MessageResponse)
    )
)]
/// Fetch a single catalog entry.
pub async fn get_game(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, AppError> {
    Ok(Json(game_service::get_game(&state, &game_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/v1/games/{game_id}",
    tag = "games",
    params(("game_id" = String, Path, description = "Game document id")),
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Updated catalog entry", body = GameResponse),
        (status = 404, description = "Game not found", body = MessageResponse)
    )
)]
/// Apply a partial update to a catalog entry.
pub async fn update_game(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
    Json(payload): Json<UpdateGameRequest>,
) -> Result<Json<GameResponse>, AppError> {
    payload.validate()?;
    let game = game_service::update_game(&state, &game_id, payload).await?;
    Ok(Json(game))
}

#[utoipa::path(
    delete,
    path = "/api/v1/games/{game_id}",
    tag = "games",
    params(("game_id" = String, Path, description = "Game document id")),
    responses(
        (status = 200, description = "Game deleted", body = MessageResponse),
        (status = 404, description = "Game not found", body = MessageResponse)
    )
)]
/// Remove a game from the catalog.
pub async fn delete_game(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(game_service::delete_game(&state, &game_id).await?))
}
