use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::{
        common::{MessageResponse, PageQuery},
        players::{CreatePlayerRequest, PlayerResponse, UpdatePlayerRequest},
    },
    error::AppError,
    services::player_service,
    state::SharedState,
};

/// Player profile endpoints backed by the document store.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/players", get(list_players).post(create_player))
        .route(
            "/players/{player_id}",
            get(get_player).put(update_player).delete(delete_player),
        )
        .route("/players/{player_id}/login", post(record_login))
}

#[utoipa::path(
    post,
    path = "/api/v1/players",
    tag = "players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Player registered", body = PlayerResponse),
        (status = 409, description = "Username already taken", body = MessageResponse)
    )
)]
/// Register a new player profile.
pub async fn create_player(
    State(state): State<SharedState>,
    Json(payload): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), AppError> {
    payload.validate()?;
    let player = player_service::create_player(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

#[utoipa::path(
    get,
    path = "/api/v1/players",
    tag = "players",
    params(PageQuery),
    responses((status = 200, description = "Player listing", body = [PlayerResponse]))
)]
/// List player profiles with offset pagination.
pub async fn list_players(
    State(state): State<SharedState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    let players = player_service::list_players(&state, page.skip, page.capped_limit()).await?;
    Ok(Json(players))
}

#[utoipa::path(
    get,
    path = "/api/v1/players/{player_id}",
    tag = "players",
    params(("player_id" = String, Path, description = "Player document id")),
    responses(
        (status = 200, description = "Player profile", body = PlayerResponse),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Fetch a single player profile.
pub async fn get_player(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerResponse>, AppError> {
    Ok(Json(player_service::get_player(&state, &player_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/v1/players/{player_id}",
    tag = "players",
    params(("player_id" = String, Path, description = "Player document id")),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Updated player profile", body = PlayerResponse),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Apply a partial update to a player profile.
pub async fn update_player(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
    Json(payload): Json<UpdatePlayerRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    payload.validate()?;
    let player = player_service::update_player(&state, &player_id, payload).await?;
    Ok(Json(player))
}

#[utoipa::path(
    post,
    path = "/api/v1/players/{player_id}/login",
    tag = "players",
    params(("player_id" = String, Path, description = "Player document id")),
    responses(
        (status = 200, description = "Profile with refreshed login stamp", body = PlayerResponse),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Stamp the player's last login time.
pub async fn record_login(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerResponse>, AppError> {
    Ok(Json(
        player_service::record_login(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/players/{player_id}",
    tag = "players",
    params(("player_id" = String, Path, description = "Player document id")),
    responses(
        (status = 200, description = "Player deleted", body = MessageResponse),
        (status = 404, description = "Player not found", body = MessageResponse)
    )
)]
/// Delete a player profile.
pub async fn delete_player(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        player_service::delete_player(&state, &player_id).await?,
    ))
}
