use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use validator::Validate;

use crate::{
    dto::{
        common::MessageResponse,
        notifications::{
            CreateNotificationRequest, NotificationListQuery, NotificationResponse, PurgeQuery,
        },
    },
    error::AppError,
    services::notification_service,
    state::SharedState,
};

/// Notification inbox endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/notifications", post(create_notification))
        .route(
            "/notifications/{notification_id}",
            get(get_notification).delete(delete_notification),
        )
        .route(
            "/notifications/player/{player_id}",
            get(list_notifications),
        )
        .route("/notifications/{notification_id}/read", post(mark_read))
        .route(
            "/notifications/player/{player_id}/read-all",
            post(mark_all_read),
        )
        .route(
            "/notifications/player/{player_id}/old",
            delete(purge_old_notifications),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications",
    tag = "notifications",
    request_body = CreateNotificationRequest,
    responses((status = 201, description = "Notification pushed", body = NotificationResponse))
)]
/// Push a notification to a player's inbox.
pub async fn create_notification(
    State(state): State<SharedState>,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationResponse>), AppError> {
    payload.validate()?;
    let notification = notification_service::create_notification(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/{notification_id}",
    tag = "notifications",
    params(("notification_id" = String, Path, description = "Notification document id")),
    responses(
        (status = 200, description = "Notification", body = NotificationResponse),
        (status = 404, description = "Notification not found", body = MessageResponse)
    )
)]
/// Fetch a single notification.
pub async fn get_notification(
    State(state): State<SharedState>,
    Path(notification_id): Path<String>,
) -> Result<Json<NotificationResponse>, AppError> {
    Ok(Json(
        notification_service::get_notification(&state, &notification_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/notifications/player/{player_id}",
    tag = "notifications",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        NotificationListQuery
    ),
    responses((status = 200, description = "Inbox, newest first", body = [NotificationResponse]))
)]
/// List a player's notifications.
pub async fn list_notifications(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    Ok(Json(
        notification_service::list_notifications(&state, &player_id, query.unread_only, query.limit)
            .await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications/{notification_id}/read",
    tag = "notifications",
    params(("notification_id" = String, Path, description = "Notification document id")),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationResponse),
        (status = 404, description = "Notification not found", body = MessageResponse)
    )
)]
/// Mark one notification as read.
pub async fn mark_read(
    State(state): State<SharedState>,
    Path(notification_id): Path<String>,
) -> Result<Json<NotificationResponse>, AppError> {
    Ok(Json(
        notification_service::mark_read(&state, &notification_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/notifications/player/{player_id}/read-all",
    tag = "notifications",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses((status = 200, description = "Inbox marked read", body = MessageResponse))
)]
/// Mark every notification in a player's inbox as read.
pub async fn mark_all_read(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        notification_service::mark_all_read(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/notifications/{notification_id}",
    tag = "notifications",
    params(("notification_id" = String, Path, description = "Notification document id")),
    responses(
        (status = 200, description = "Notification deleted", body = MessageResponse),
        (status = 404, description = "Notification not found", body = MessageResponse)
    )
)]
/// Delete one notification.
pub async fn delete_notification(
    State(state): State<SharedState>,
    Path(notification_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        notification_service::delete_notification(&state, &notification_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/notifications/player/{player_id}/old",
    tag = "notifications",
    params(
        ("player_id" = String, Path, description = "Player identifier"),
        PurgeQuery
    ),
    responses((status = 200, description = "Old read notifications purged", body = MessageResponse))
)]
/// Purge read notifications older than the given number of days.
pub async fn purge_old_notifications(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
    Query(query): Query<PurgeQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        notification_service::purge_old_notifications(&state, &player_id, query.days_old).await?,
    ))
}
