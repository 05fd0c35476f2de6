use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    dao::documents::models::NotificationEntity,
    dto::{format_datetime, hex_id},
};

/// Kind of event a notification describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    FriendRequest,
    Achievement,
    PartyInvite,
    System,
    GameInvite,
}

impl NotificationType {
    /// Stored string form of the notification type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FriendRequest => "friend_request",
            Self::Achievement => "achievement",
            Self::PartyInvite => "party_invite",
            Self::System => "system",
            Self::GameInvite => "game_invite",
        }
    }
}

/// Payload used to push a notification to a player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1))]
    pub player_id: String,
    pub notification_type: NotificationType,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub message: String,
    /// Free-form context, stored as-is.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: Document,
}

/// Inbox listing parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct NotificationListQuery {
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default = "default_notification_limit")]
    pub limit: i64,
}

fn default_notification_limit() -> i64 {
    50
}

/// Purge parameters; only read notifications older than the cutoff go away.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PurgeQuery {
    #[serde(default = "default_days_old")]
    pub days_old: i64,
}

fn default_days_old() -> i64 {
    30
}

/// Notification returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub notification_id: String,
    pub player_id: String,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    #[schema(value_type = Object)]
    pub data: Document,
    pub read: bool,
    pub created_at: String,
}

impl From<NotificationEntity> for NotificationResponse {
    fn from(notification: NotificationEntity) -> Self {
        Self {
            notification_id: hex_id(notification.id),
            player_id: notification.player_id,
            notification_type: notification.notification_type,
            title: notification.title,
            message: notification.message,
            data: notification.data,
            read: notification.read,
            created_at: format_datetime(notification.created_at),
        }
    }
}
