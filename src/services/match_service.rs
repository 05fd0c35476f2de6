//! Business logic for the match history collection.

use mongodb::bson::oid::ObjectId;

use crate::{
    dao::documents::{matches::MatchRepository, models::MatchEntity},
    dto::{
        common::MessageResponse,
        matches::{CreateMatchRequest, MatchResponse},
    },
    error::ServiceError,
    services::{now_bson, parse_object_id},
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<MatchRepository, ServiceError> {
    Ok(MatchRepository::new(state.require_documents().await?))
}

/// Record a completed match.
pub async fn record_match(
    state: &SharedState,
    payload: CreateMatchRequest,
) -> Result<MatchResponse, ServiceError> {
    let repository = repository(state).await?;

    let record = MatchEntity {
        id: Some(ObjectId::new()),
        game_id: payload.game_id,
        players: payload.players.into_iter().map(Into::into).collect(),
        game_mode: payload.game_mode,
        map_name: payload.map_name,
        duration: payload.duration,
        winner_team: payload.winner_team,
        winner_player_id: payload.winner_player_id,
        timestamp: now_bson(),
    };
    repository.insert(&record).await?;

    Ok(record.into())
}

/// Fetch a single match record.
pub async fn get_match(state: &SharedState, id: &str) -> Result<MatchResponse, ServiceError> {
    let repository = repository(state).await?;
    let record = repository
        .find_by_id(parse_object_id(id)?)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("match `{id}` not found")))?;
    Ok(record.into())
}

/// List a player's most recent matches, newest first.
pub async fn list_player_matches(
    state: &SharedState,
    player_id: &str,
    limit: i64,
) -> Result<Vec<MatchResponse>, ServiceError> {
    let repository = repository(state).await?;
    let records = repository
        .list_for_player(player_id, limit.clamp(1, 100))
        .await?;
    Ok(records.into_iter().map(Into::into).collect())
}

/// List a game's most recent matches, newest first.
pub async fn list_game_matches(
    state: &SharedState,
    game_id: &str,
    limit: i64,
) -> Result<Vec<MatchResponse>, ServiceError> {
    let repository = repository(state).await?;
    let records = repository
        .list_for_game(game_id, limit.clamp(1, 200))
        .await?;
    Ok(records.into_iter().map(Into::into).collect())
}

/// Delete a match record.
pub async fn delete_match(state: &SharedState, id: &str) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.delete(parse_object_id(id)?).await? {
        return Err(ServiceError::NotFound(format!("match `{id}` not found")));
    }
    Ok(MessageResponse::new("Match deleted successfully"))
}
