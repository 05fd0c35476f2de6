//! Business logic for per-game player statistics, including derived ratios.

use mongodb::bson::{Document, oid::ObjectId};

use crate::{
    dao::documents::{models::PlayerStatsEntity, stats::StatsRepository},
    dto::{
        common::MessageResponse,
        stats::{CreateStatsRequest, IncrementStatsRequest, StatsResponse},
    },
    error::ServiceError,
    services::now_bson,
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<StatsRepository, ServiceError> {
    Ok(StatsRepository::new(state.require_documents().await?))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Kills per death, counting at least one death to avoid dividing by zero.
fn kd_ratio(kills: i64, deaths: i64) -> f64 {
    round2(kills as f64 / deaths.max(1) as f64)
}

/// Share of played matches won, as a percentage.
fn win_rate(wins: i64, losses: i64) -> f64 {
    round2(wins as f64 / (wins + losses).max(1) as f64 * 100.0)
}

/// Initialize zeroed stats for a player and game pair.
pub async fn create_stats(
    state: &SharedState,
    payload: CreateStatsRequest,
) -> Result<StatsResponse, ServiceError> {
    let repository = repository(state).await?;

    if repository
        .find(&payload.player_id, &payload.game_id)
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(format!(
            "stats already exist for player `{}` in game `{}`",
            payload.player_id, payload.game_id
        )));
    }

    let stats = PlayerStatsEntity {
        id: Some(ObjectId::new()),
        player_id: payload.player_id,
        game_id: payload.game_id,
        total_playtime: 0,
        wins: 0,
        losses: 0,
        kills: 0,
        deaths: 0,
        xp: 0,
        level: 1,
        kd_ratio: 0.0,
        win_rate: 0.0,
        last_updated: now_bson(),
    };
    repository.insert(&stats).await?;

    Ok(stats.into())
}

/// Fetch one player's stats for a game.
pub async fn get_stats(
    state: &SharedState,
    player_id: &str,
    game_id: &str,
) -> Result<StatsResponse, ServiceError> {
    let repository = repository(state).await?;
    let stats = repository.find(player_id, game_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!(
            "stats not found for player `{player_id}` in game `{game_id}`"
        ))
    })?;
    Ok(stats.into())
}

/// List a player's stats across every tracked game.
pub async fn list_player_stats(
    state: &SharedState,
    player_id: &str,
) -> Result<Vec<StatsResponse>, ServiceError> {
    let repository = repository(state).await?;
    let stats = repository.list_for_player(player_id).await?;
    Ok(stats.into_iter().map(Into::into).collect())
}

/// Apply counter deltas, then recompute the derived ratios from the new totals.
pub async fn increment_stats(
    state: &SharedState,
    player_id: &str,
    game_id: &str,
    payload: IncrementStatsRequest,
) -> Result<StatsResponse, ServiceError> {
    let repository = repository(state).await?;

    if repository.find(player_id, game_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "stats not found for player `{player_id}` in game `{game_id}`"
        )));
    }

    let mut increments = Document::new();
    if let Some(total_playtime) = payload.total_playtime {
        increments.insert("total_playtime", total_playtime);
    }
    if let Some(wins) = payload.wins {
        increments.insert("wins", wins);
    }
    if let Some(losses) = payload.losses {
        increments.insert("losses", losses);
    }
    if let Some(kills) = payload.kills {
        increments.insert("kills", kills);
    }
    if let Some(deaths) = payload.deaths {
        increments.insert("deaths", deaths);
    }
    if let Some(xp) = payload.xp {
        increments.insert("xp", xp);
    }
    if let Some(level) = payload.level {
        increments.insert("level", level);
    }
    if !increments.is_empty() {
        repository
            .increment(player_id, game_id, increments, now_bson())
            .await?;
    }

    let stats = repository.find(player_id, game_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!(
            "stats not found for player `{player_id}` in game `{game_id}`"
        ))
    })?;
    repository
        .set_ratios(
            player_id,
            game_id,
            kd_ratio(stats.kills, stats.deaths),
            win_rate(stats.wins, stats.losses),
        )
        .await?;

    let stats = repository.find(player_id, game_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!(
            "stats not found for player `{player_id}` in game `{game_id}`"
        ))
    })?;
    Ok(stats.into())
}

/// Delete one player's stats for a game.
pub async fn delete_stats(
    state: &SharedState,
    player_id: &str,
    game_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.delete(player_id, game_id).await? {
        return Err(ServiceError::NotFound(format!(
            "stats not found for player `{player_id}` in game `{game_id}`"
        )));
    }
    Ok(MessageResponse::new("Stats deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kd_ratio_counts_at_least_one_death() {
        assert_eq!(kd_ratio(10, 0), 10.0);
        assert_eq!(kd_ratio(10, 4), 2.5);
        assert_eq!(kd_ratio(0, 7), 0.0);
    }

    #[test]
    fn kd_ratio_rounds_to_two_decimals() {
        assert_eq!(kd_ratio(1, 3), 0.33);
        assert_eq!(kd_ratio(2, 3), 0.67);
    }

    #[test]
    fn win_rate_is_a_percentage_of_played_matches() {
        assert_eq!(win_rate(0, 0), 0.0);
        assert_eq!(win_rate(3, 1), 75.0);
        assert_eq!(win_rate(1, 2), 33.33);
        assert_eq!(win_rate(5, 0), 100.0);
    }
}
