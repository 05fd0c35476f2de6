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
        sessions::{SessionResponse, StartSessionRequest},
    },
    error::AppError,
    services::session_service,
    state::SharedState,
};

/// Play session endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/sessions", post(start_session))
        .route(
            "/sessions/{session_id}",
            get(get_session).delete(delete_session),
        )
        .route("/sessions/active/{player_id}", get(list_active_sessions))
        .route("/sessions/{session_id}/end", post(end_session))
}

#[utoipa::path(
    post,
    path = "/api/v1/sessions",
    tag = "sessions",
    request_body = StartSessionRequest,
    responses((status = 201, description = "Session opened", body = SessionResponse))
)]
/// Open a play session for a player.
pub async fn start_session(
    State(state): State<SharedState>,
    Json(payload): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    payload.validate()?;
    let session = session_service::start_session(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    get,
    path = "/api/v1/sessions/{session_id}",
    tag = "sessions",
    params(("session_id" = String, Path, description = "Session document id")),
    responses(
        (status = 200, description = "Play session", body = SessionResponse),
        (status = 404, description = "Session not found", body = MessageResponse)
    )
)]
/// Fetch a single play session.
pub async fn get_session(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    Ok(Json(
        session_service::get_session(&state, &session_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/sessions/active/{player_id}",
    tag = "sessions",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses((status = 200, description = "Sessions still open", body = [SessionResponse]))
)]
/// List a player's sessions that have not ended yet.
pub async fn list_active_sessions(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<SessionResponse>>, AppError> {
    Ok(Json(
        session_service::list_active_sessions(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/sessions/{session_id}/end",
    tag = "sessions",
    params(("session_id" = String, Path, description = "Session document id")),
    responses(
        (status = 200, description = "Closed session with duration", body = SessionResponse),
        (status = 404, description = "Session not found", body = MessageResponse)
    )
)]
/// Close a session, stamping its end time and whole-minute duration.
pub async fn end_session(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    Ok(Json(
        session_service::end_session(&state, &session_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/sessions/{session_id}",
    tag = "sessions",
    params(("session_id" = String, Path, description = "Session document id")),
    responses(
        (status = 200, description = "Session deleted", body = MessageResponse),
        (status = 404, description = "Session not found", body = MessageResponse)
    )
)]
/// Delete a session record.
pub async fn delete_session(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        session_service::delete_session(&state, &session_id).await?,
    ))
}
