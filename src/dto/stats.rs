use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::documents::models::PlayerStatsEntity,
    dto::{format_datetime, hex_id},
};

/// Payload used to initialize a player's stats for a game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateStatsRequest {
    #[validate(length(min = 1))]
    pub player_id: String,
    #[validate(length(min = 1))]
    pub game_id: String,
}

/// Counter deltas applied after a match; omitted fields are unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct IncrementStatsRequest {
    /// Playtime delta in minutes.
    pub total_playtime: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub kills: Option<i64>,
    pub deaths: Option<i64>,
    pub xp: Option<i64>,
    pub level: Option<i64>,
}

/// Per-game stats returned to clients, with derived ratios.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub stats_id: String,
    pub player_id: String,
    pub game_id: String,
    pub total_playtime: i64,
    pub wins: i64,
    pub losses: i64,
    pub kills: i64,
    pub deaths: i64,
    pub xp: i64,
    pub level: i64,
    pub kd_ratio: f64,
    pub win_rate: f64,
    pub last_updated: String,
}

impl From<PlayerStatsEntity> for StatsResponse {
    fn from(stats: PlayerStatsEntity) -> Self {
        Self {
            stats_id: hex_id(stats.id),
            player_id: stats.player_id,
            game_id: stats.game_id,
            total_playtime: stats.total_playtime,
            wins: stats.wins,
            losses: stats.losses,
            kills: stats.kills,
            deaths: stats.deaths,
            xp: stats.xp,
            level: stats.level,
            kd_ratio: stats.kd_ratio,
            win_rate: stats.win_rate,
            last_updated: format_datetime(stats.last_updated),
        }
    }
}
