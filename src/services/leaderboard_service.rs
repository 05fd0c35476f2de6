//! Business logic for leaderboards, including server-side ranking.

use mongodb::bson::oid::ObjectId;

use crate::{
    dao::documents::{
        leaderboards::LeaderboardRepository,
        models::{LeaderboardEntity, LeaderboardEntryEntity},
    },
    dto::{
        common::MessageResponse,
        leaderboards::{CreateLeaderboardRequest, LeaderboardEntryDto, LeaderboardResponse},
    },
    error::ServiceError,
    services::{now_bson, parse_object_id},
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<LeaderboardRepository, ServiceError> {
    Ok(LeaderboardRepository::new(state.require_documents().await?))
}

/// Sort entries by score, highest first, and assign dense ranks from 1.
fn rank_entries(entries: &mut [LeaderboardEntryEntity]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as i64 + 1;
    }
}

/// Create an empty leaderboard for a game.
pub async fn create_leaderboard(
    state: &SharedState,
    payload: CreateLeaderboardRequest,
) -> Result<LeaderboardResponse, ServiceError> {
    let repository = repository(state).await?;

    let leaderboard = LeaderboardEntity {
        id: Some(ObjectId::new()),
        game_id: payload.game_id,
        leaderboard_type: payload.leaderboard_type,
        timeframe: payload.timeframe,
        entries: Vec::new(),
        last_updated: now_bson(),
    };
    repository.insert(&leaderboard).await?;

    Ok(leaderboard.into())
}

/// Fetch a leaderboard by id.
pub async fn get_leaderboard(
    state: &SharedState,
    id: &str,
) -> Result<LeaderboardResponse, ServiceError> {
    let repository = repository(state).await?;
    let leaderboard = repository
        .find_by_id(parse_object_id(id)?)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("leaderboard `{id}` not found")))?;
    Ok(leaderboard.into())
}

/// Fetch a game's leaderboard for one metric and timeframe.
pub async fn get_game_leaderboard(
    state: &SharedState,
    game_id: &str,
    leaderboard_type: &str,
    timeframe: &str,
) -> Result<LeaderboardResponse, ServiceError> {
    let repository = repository(state).await?;
    let leaderboard = repository
        .find_for_game(game_id, leaderboard_type, timeframe)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "no `{leaderboard_type}` leaderboard found for game `{game_id}`"
            ))
        })?;
    Ok(leaderboard.into())
}

/// Replace the full entry list, re-ranking it by score.
pub async fn replace_entries(
    state: &SharedState,
    id: &str,
    entries: Vec<LeaderboardEntryDto>,
) -> Result<LeaderboardResponse, ServiceError> {
    let repository = repository(state).await?;
    let object_id = parse_object_id(id)?;

    let mut leaderboard = repository
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("leaderboard `{id}` not found")))?;

    leaderboard.entries = entries.into_iter().map(Into::into).collect();
    rank_entries(&mut leaderboard.entries);
    leaderboard.last_updated = now_bson();
    repository.replace(object_id, &leaderboard).await?;

    Ok(leaderboard.into())
}

/// Insert or refresh one player's entry, then re-rank the board.
pub async fn upsert_entry(
    state: &SharedState,
    id: &str,
    player_id: &str,
    username: &str,
    score: i64,
) -> Result<LeaderboardResponse, ServiceError> {
    let repository = repository(state).await?;
    let object_id = parse_object_id(id)?;

    let mut leaderboard = repository
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("leaderboard `{id}` not found")))?;

    match leaderboard
        .entries
        .iter_mut()
        .find(|entry| entry.player_id == player_id)
    {
        Some(entry) => {
            entry.username = username.to_owned();
            entry.score = score;
        }
        None => leaderboard.entries.push(LeaderboardEntryEntity {
            player_id: player_id.to_owned(),
            username: username.to_owned(),
            score,
            rank: 0,
        }),
    }
    rank_entries(&mut leaderboard.entries);
    leaderboard.last_updated = now_bson();
    repository.replace(object_id, &leaderboard).await?;

    Ok(leaderboard.into())
}

/// Delete a leaderboard.
pub async fn delete_leaderboard(
    state: &SharedState,
    id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.delete(parse_object_id(id)?).await? {
        return Err(ServiceError::NotFound(format!(
            "leaderboard `{id}` not found"
        )));
    }
    Ok(MessageResponse::new("Leaderboard deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player_id: &str, score: i64) -> LeaderboardEntryEntity {
        LeaderboardEntryEntity {
            player_id: player_id.to_owned(),
            username: player_id.to_owned(),
            score,
            rank: 0,
        }
    }

    #[test]
    fn rank_entries_sorts_by_score_descending() {
        let mut entries = vec![entry("a", 50), entry("b", 200), entry("c", 125)];
        rank_entries(&mut entries);

        let order: Vec<&str> = entries
            .iter()
            .map(|entry| entry.player_id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        let ranks: Vec<i64> = entries.iter().map(|entry| entry.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn rank_entries_handles_empty_board() {
        let mut entries: Vec<LeaderboardEntryEntity> = Vec::new();
        rank_entries(&mut entries);
        assert!(entries.is_empty());
    }
}
