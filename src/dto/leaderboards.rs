use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    dao::documents::models::{LeaderboardEntity, LeaderboardEntryEntity},
    dto::{format_datetime, hex_id},
};

/// Payload used to create an empty leaderboard.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateLeaderboardRequest {
    #[validate(length(min = 1))]
    pub game_id: String,
    /// Ranked metric, e.g. `kills`, `wins` or `xp`.
    #[validate(length(min = 1))]
    pub leaderboard_type: String,
    /// One of `daily`, `weekly`, `monthly` or `all_time`.
    #[serde(default = "default_timeframe")]
    pub timeframe: String,
}

fn default_timeframe() -> String {
    "all_time".to_owned()
}

/// One ranked row; ranks supplied by the client are recomputed server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntryDto {
    pub player_id: String,
    pub username: String,
    pub score: i64,
    #[serde(default)]
    pub rank: i64,
}

impl From<LeaderboardEntryDto> for LeaderboardEntryEntity {
    fn from(entry: LeaderboardEntryDto) -> Self {
        Self {
            player_id: entry.player_id,
            username: entry.username,
            score: entry.score,
            rank: entry.rank,
        }
    }
}

impl From<LeaderboardEntryEntity> for LeaderboardEntryDto {
    fn from(entry: LeaderboardEntryEntity) -> Self {
        Self {
            player_id: entry.player_id,
            username: entry.username,
            score: entry.score,
            rank: entry.rank,
        }
    }
}

/// Lookup parameters for the per-game leaderboard endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GameLeaderboardQuery {
    #[serde(default = "default_leaderboard_type")]
    pub leaderboard_type: String,
    #[serde(default = "default_query_timeframe")]
    pub timeframe: String,
}

fn default_leaderboard_type() -> String {
    "wins".to_owned()
}

fn default_query_timeframe() -> String {
    "all_time".to_owned()
}

/// Upsert parameters for a single player's entry.
#[derive(Debug, Deserialize, IntoParams)]
pub struct UpsertEntryQuery {
    pub player_id: String,
    pub username: String,
    pub score: i64,
}

/// Leaderboard returned to clients with ranked entries.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub leaderboard_id: String,
    pub game_id: String,
    pub leaderboard_type: String,
    pub timeframe: String,
    pub entries: Vec<LeaderboardEntryDto>,
    pub last_updated: String,
}

impl From<LeaderboardEntity> for LeaderboardResponse {
    fn from(leaderboard: LeaderboardEntity) -> Self {
        Self {
            leaderboard_id: hex_id(leaderboard.id),
            game_id: leaderboard.game_id,
            leaderboard_type: leaderboard.leaderboard_type,
            timeframe: leaderboard.timeframe,
            entries: leaderboard.entries.into_iter().map(Into::into).collect(),
            last_updated: format_datetime(leaderboard.last_updated),
        }
    }
}
