use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
};
use validator::Validate;

use crate::{
    dto::{
        achievements::{
            AchievementResponse, CompletedOnlyQuery, CreateAchievementRequest,
            PlayerAchievementResponse, StartPlayerAchievementRequest, UpdateAchievementRequest,
            UpdateProgressRequest,
        },
        common::MessageResponse,
    },
    error::AppError,
    services::achievement_service,
    state::SharedState,
};

/// Achievement catalog and per-player progress endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/achievements", post(create_achievement))
        .route(
            "/achievements/{achievement_id}",
            get(get_achievement)
                .put(update_achievement)
                .delete(delete_achievement),
        )
        .route("/achievements/game/{game_id}", get(list_game_achievements))
        .route("/player-achievements", post(start_tracking))
        .route(
            "/player-achievements/{player_id}",
            get(list_player_achievements),
        )
        .route(
            "/player-achievements/{player_id}/{achievement_id}",
            get(get_player_achievement).delete(delete_player_achievement),
        )
        .route(
            "/player-achievements/{player_id}/{achievement_id}/progress",
            patch(update_progress),
        )
        .route(
            "/player-achievements/{player_id}/{achievement_id}/complete",
            post(complete_achievement),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/achievements",
    tag = "achievements",
    request_body = CreateAchievementRequest,
    responses((status = 201, description = "Achievement defined", body = AchievementResponse))
)]
/// Define an achievement for a game.
pub async fn create_achievement(
    State(state): State<SharedState>,
    Json(payload): Json<CreateAchievementRequest>,
) -> Result<(StatusCode, Json<AchievementResponse>), AppError> {
    payload.validate()?;
    let achievement = achievement_service::create_achievement(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(achievement)))
}

#[utoipa::path(
    get,
    path = "/api/v1/achievements/{achievement_id}",
    tag = "achievements",
    params(("achievement_id" = String, Path, description = "Achievement document id")),
    responses(
        (status = 200, description = "Achievement definition", body = AchievementResponse),
        (status = 404, description = "Achievement not found", body = MessageResponse)
    )
)]
/// Fetch a single achievement definition.
pub async fn get_achievement(
    State(state): State<SharedState>,
    Path(achievement_id): Path<String>,
) -> Result<Json<AchievementResponse>, AppError> {
    Ok(Json(
        achievement_service::get_achievement(&state, &achievement_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/achievements/game/{game_id}",
    tag = "achievements",
    params(("game_id" = String, Path, description = "Game identifier")),
    responses((status = 200, description = "Achievements for the game", body = [AchievementResponse]))
)]
/// List every achievement defined for a game.
pub async fn list_game_achievements(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<AchievementResponse>>, AppError> {
    Ok(Json(
        achievement_service::list_game_achievements(&state, &game_id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/achievements/{achievement_id}",
    tag = "achievements",
    params(("achievement_id" = String, Path, description = "Achievement document id")),
    request_body = UpdateAchievementRequest,
    responses(
        (status = 200, description = "Updated achievement definition", body = AchievementResponse),
        (status = 404, description = "Achievement not found", body = MessageResponse)
    )
)]
/// Apply a partial update to an achievement definition.
pub async fn update_achievement(
    State(state): State<SharedState>,
    Path(achievement_id): Path<String>,
    Json(payload): Json<UpdateAchievementRequest>,
) -> Result<Json<AchievementResponse>, AppError> {
    payload.validate()?;
    let achievement =
        achievement_service::update_achievement(&state, &achievement_id, payload).await?;
    Ok(Json(achievement))
}

#[utoipa::path(
    delete,
    path = "/api/v1/achievements/{achievement_id}",
    tag = "achievements",
    params(("achievement_id" = String, Path, description = "Achievement document id")),
    responses(
        (status = 200, description = "Achievement deleted", body = MessageResponse),
        (status = 404, description = "Achievement not found", body = MessageResponse)
    )
)]
/// Remove an achievement definition.
pub async fn delete_achievement(
    State(state): State<SharedState>,
    Path(achievement_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        achievement_service::delete_achievement(&state, &achievement_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/player-achievements",
    tag = "achievements",
    request_body = StartPlayerAchievementRequest,
    responses(
        (status = 201, description = "Tracking started", body = PlayerAchievementResponse),
        (status = 409, description = "Already tracked", body = MessageResponse)
    )
)]
/// Start tracking an achievement for a player.
pub async fn start_tracking(
    State(state): State<SharedState>,
    Json(payload): Json<StartPlayerAchievementRequest>,
) -> Result<(StatusCode, Json<PlayerAchievementResponse>), AppError> {
    payload.validate()?;
    let record = achievement_service::start_tracking(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/v1/player-achievements/{player_id}",
    tag = "achievements",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        CompletedOnlyQuery
    ),
    responses((status = 200, description = "Tracked achievements", body = [PlayerAchievementResponse]))
)]
/// List a player's tracked achievements.
pub async fn list_player_achievements(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
    Query(query): Query<CompletedOnlyQuery>,
) -> Result<Json<Vec<PlayerAchievementResponse>>, AppError> {
    Ok(Json(
        achievement_service::list_player_achievements(&state, &player_id, query.completed_only)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/player-achievements/{player_id}/{achievement_id}",
    tag = "achievements",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("achievement_id" = String, Path, description = "Achievement identifier")
    ),
    responses(
        (status = 200, description = "Progress record", body = PlayerAchievementResponse),
        (status = 404, description = "No progress tracked", body = MessageResponse)
    )
)]
/// Fetch one player's progress on one achievement.
pub async fn get_player_achievement(
    State(state): State<SharedState>,
    Path((player_id, achievement_id)): Path<(String, String)>,
) -> Result<Json<PlayerAchievementResponse>, AppError> {
    Ok(Json(
        achievement_service::get_player_achievement(&state, &player_id, &achievement_id).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/player-achievements/{player_id}/{achievement_id}/progress",
    tag = "achievements",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("achievement_id" = String, Path, description = "Achievement identifier")
    ),
    request_body = UpdateProgressRequest,
    responses(
        (status = 200, description = "Refreshed progress record", body = PlayerAchievementResponse),
        (status = 404, description = "No progress tracked", body = MessageResponse)
    )
)]
/// Replace the free-form progress payload.
pub async fn update_progress(
    State(state): State<SharedState>,
    Path((player_id, achievement_id)): Path<(String, String)>,
    Json(payload): Json<UpdateProgressRequest>,
) -> Result<Json<PlayerAchievementResponse>, AppError> {
    Ok(Json(
        achievement_service::update_progress(&state, &player_id, &achievement_id, payload.progress)
            .await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/player-achievements/{player_id}/{achievement_id}/complete",
    tag = "achievements",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("achievement_id" = String, Path, description = "Achievement identifier")
    ),
    responses(
        (status = 200, description = "Achievement unlocked", body = PlayerAchievementResponse),
        (status = 404, description = "No progress tracked", body = MessageResponse)
    )
)]
/// Mark an achievement as unlocked for a player.
pub async fn complete_achievement(
    State(state): State<SharedState>,
    Path((player_id, achievement_id)): Path<(String, String)>,
) -> Result<Json<PlayerAchievementResponse>, AppError> {
    Ok(Json(
        achievement_service::complete_achievement(&state, &player_id, &achievement_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/player-achievements/{player_id}/{achievement_id}",
    tag = "achievements",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        ("achievement_id" = String, Path, description = "Achievement identifier")
    ),
    responses(
        (status = 200, description = "Progress deleted", body = MessageResponse),
        (status = 404, description = "No progress tracked", body = MessageResponse)
    )
)]
/// Drop a player's progress on one achievement.
pub async fn delete_player_achievement(
    State(state): State<SharedState>,
    Path((player_id, achievement_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        achievement_service::delete_player_achievement(&state, &player_id, &achievement_id)
            .await?,
    ))
}
