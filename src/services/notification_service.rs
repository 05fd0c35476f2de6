//! Business logic for the notification inbox, including old-notification purges.

use mongodb::bson::{DateTime, oid::ObjectId};

use crate::{
    dao::documents::{models::NotificationEntity, notifications::NotificationRepository},
    dto::{
        common::MessageResponse,
        notifications::{CreateNotificationRequest, NotificationResponse},
    },
    error::ServiceError,
    services::{now_bson, parse_object_id},
    state::SharedState,
};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Cutoff instant for a purge, saturating so an absurd `days_old` clamps to
/// the epoch floor instead of wrapping into the future.
fn purge_cutoff(now_millis: i64, days_old: i64) -> DateTime {
    DateTime::from_millis(now_millis.saturating_sub(days_old.saturating_mul(MILLIS_PER_DAY)))
}

async fn repository(state: &SharedState) -> Result<NotificationRepository, ServiceError> {
    Ok(NotificationRepository::new(state.require_documents().await?))
}

/// Push a notification to a player's inbox.
pub async fn create_notification(
    state: &SharedState,
    payload: CreateNotificationRequest,
) -> Result<NotificationResponse, ServiceError> {
    let repository = repository(state).await?;

    let notification = NotificationEntity {
        id: Some(ObjectId::new()),
        player_id: payload.player_id,
        notification_type: payload.notification_type.as_str().to_owned(),
        title: payload.title,
        message: payload.message,
        data: payload.data,
        read: false,
        created_at: now_bson(),
    };
    repository.insert(&notification).await?;

    Ok(notification.into())
}

/// Fetch a single notification.
pub async fn get_notification(
    state: &SharedState,
    id: &str,
) -> Result<NotificationResponse, ServiceError> {
    let repository = repository(state).await?;
    let notification = repository
        .find_by_id(parse_object_id(id)?)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("notification `{id}` not found")))?;
    Ok(notification.into())
}

/// List a player's notifications, newest first.
pub async fn list_notifications(
    state: &SharedState,
    player_id: &str,
    unread_only: bool,
    limit: i64,
) -> Result<Vec<NotificationResponse>, ServiceError> {
    let repository = repository(state).await?;
    let notifications = repository
        .list_for_player(player_id, unread_only, limit.clamp(1, 100))
        .await?;
    Ok(notifications.into_iter().map(Into::into).collect())
}

/// Mark one notification as read.
pub async fn mark_read(state: &SharedState, id: &str) -> Result<NotificationResponse, ServiceError> {
    let repository = repository(state).await?;
    let object_id = parse_object_id(id)?;

    if repository.find_by_id(object_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "notification `{id}` not found"
        )));
    }
    repository.mark_read(object_id).await?;

    let notification = repository
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("notification `{id}` not found")))?;
    Ok(notification.into())
}

/// Mark every notification in a player's inbox as read.
pub async fn mark_all_read(
    state: &SharedState,
    player_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    let count = repository.mark_all_read(player_id).await?;
    Ok(MessageResponse::new(format!(
        "{count} notifications marked as read"
    )))
}

/// Delete one notification.
pub async fn delete_notification(
    state: &SharedState,
    id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.delete(parse_object_id(id)?).await? {
        return Err(ServiceError::NotFound(format!(
            "notification `{id}` not found"
        )));
    }
    Ok(MessageResponse::new("Notification deleted successfully"))
}

/// Purge read notifications older than the given number of days.
pub async fn purge_old_notifications(
    state: &SharedState,
    player_id: &str,
    days_old: i64,
) -> Result<MessageResponse, ServiceError> {
    if days_old < 1 {
        return Err(ServiceError::InvalidInput(
            "days_old must be at least 1".to_owned(),
        ));
    }

    let repository = repository(state).await?;
    let cutoff = purge_cutoff(now_bson().timestamp_millis(), days_old);
    let count = repository.delete_read_before(player_id, cutoff).await?;
    Ok(MessageResponse::new(format!(
        "{count} old notifications deleted"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purge_cutoff_subtracts_whole_days() {
        let now = 40 * MILLIS_PER_DAY;
        assert_eq!(
            purge_cutoff(now, 30).timestamp_millis(),
            10 * MILLIS_PER_DAY
        );
    }

    #[test]
    fn purge_cutoff_saturates_on_huge_day_counts() {
        let now = now_bson().timestamp_millis();
        let cutoff = purge_cutoff(now, i64::MAX / MILLIS_PER_DAY + 1);
        // Must land in the distant past, never wrap into the future.
        assert!(cutoff.timestamp_millis() < 0);
        assert!(cutoff.timestamp_millis() < now);
    }
}
