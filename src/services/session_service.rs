//! Business logic for play session tracking.

use mongodb::bson::{DateTime, oid::ObjectId};

use crate::{
    dao::documents::{models::SessionEntity, sessions::SessionRepository},
    dto::{
        common::MessageResponse,
        sessions::{SessionResponse, StartSessionRequest},
    },
    error::ServiceError,
    services::{now_bson, parse_object_id},
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<SessionRepository, ServiceError> {
    Ok(SessionRepository::new(state.require_documents().await?))
}

/// Elapsed whole minutes between two instants, never negative.
fn elapsed_minutes(start: DateTime, end: DateTime) -> i64 {
    ((end.timestamp_millis() - start.timestamp_millis()) / 60_000).max(0)
}

/// Open a play session for a player.
pub async fn start_session(
    state: &SharedState,
    payload: StartSessionRequest,
) -> Result<SessionResponse, ServiceError> {
    let repository = repository(state).await?;

    let session = SessionEntity {
        id: Some(ObjectId::new()),
        player_id: payload.player_id,
        game_id: payload.game_id,
        platform: payload.platform.as_str().to_owned(),
        server_region: payload.server_region,
        start_time: now_bson(),
        end_time: None,
        duration: None,
    };
    repository.insert(&session).await?;

    Ok(session.into())
}

/// Fetch a single play session.
pub async fn get_session(state: &SharedState, id: &str) -> Result<SessionResponse, ServiceError> {
    let repository = repository(state).await?;
    let session = repository
        .find_by_id(parse_object_id(id)?)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("session `{id}` not found")))?;
    Ok(session.into())
}

/// List a player's sessions that have not ended yet.
pub async fn list_active_sessions(
    state: &SharedState,
    player_id: &str,
) -> Result<Vec<SessionResponse>, ServiceError> {
    let repository = repository(state).await?;
    let sessions = repository.list_active(player_id).await?;
    Ok(sessions.into_iter().map(Into::into).collect())
}

/// Close a session, stamping its end time and whole-minute duration.
pub async fn end_session(state: &SharedState, id: &str) -> Result<SessionResponse, ServiceError> {
    let repository = repository(state).await?;
    let object_id = parse_object_id(id)?;

    let session = repository
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("session `{id}` not found")))?;

    let end_time = now_bson();
    repository
        .close(
            object_id,
            end_time,
            elapsed_minutes(session.start_time, end_time),
        )
        .await?;

    let session = repository
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("session `{id}` not found")))?;
    Ok(session.into())
}

/// Delete a session record, e.g. one abandoned mid-game.
pub async fn delete_session(
    state: &SharedState,
    id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.delete(parse_object_id(id)?).await? {
        return Err(ServiceError::NotFound(format!("session `{id}` not found")));
    }
    Ok(MessageResponse::new("Session deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_minutes_truncates_partial_minutes() {
        let start = DateTime::from_millis(0);
        assert_eq!(elapsed_minutes(start, DateTime::from_millis(59_999)), 0);
        assert_eq!(elapsed_minutes(start, DateTime::from_millis(60_000)), 1);
        assert_eq!(elapsed_minutes(start, DateTime::from_millis(150_000)), 2);
    }

    #[test]
    fn elapsed_minutes_never_goes_negative() {
        let start = DateTime::from_millis(120_000);
        assert_eq!(elapsed_minutes(start, DateTime::from_millis(0)), 0);
    }
}
