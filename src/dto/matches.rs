use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    dao::documents::models::{MatchEntity, MatchPlayerEntity},
    dto::{format_datetime, hex_id},
};

/// One player's scoreline inside a match payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchPlayerDto {
    pub player_id: String,
    pub team: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub kills: i64,
    #[serde(default)]
    pub deaths: i64,
    #[serde(default)]
    pub assists: i64,
}

impl From<MatchPlayerDto> for MatchPlayerEntity {
    fn from(player: MatchPlayerDto) -> Self {
        Self {
            player_id: player.player_id,
            team: player.team,
            score: player.score,
            kills: player.kills,
            deaths: player.deaths,
            assists: player.assists,
        }
    }
}

impl From<MatchPlayerEntity> for MatchPlayerDto {
    fn from(player: MatchPlayerEntity) -> Self {
        Self {
            player_id: player.player_id,
            team: player.team,
            score: player.score,
            kills: player.kills,
            deaths: player.deaths,
            assists: player.assists,
        }
    }
}

/// Payload used to record a completed match.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateMatchRequest {
    #[validate(length(min = 1))]
    pub game_id: String,
    #[validate(length(min = 1))]
    pub players: Vec<MatchPlayerDto>,
    #[validate(length(min = 1))]
    pub game_mode: String,
    pub map_name: Option<String>,
    /// Match length in seconds.
    pub duration: i64,
    pub winner_team: Option<String>,
    pub winner_player_id: Option<String>,
}

/// Per-player history listing parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct MatchListQuery {
    #[serde(default = "default_match_limit")]
    pub limit: i64,
}

fn default_match_limit() -> i64 {
    50
}

/// Per-game history listing parameters, with a roomier ceiling.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GameMatchListQuery {
    #[serde(default = "default_game_match_limit")]
    pub limit: i64,
}

fn default_game_match_limit() -> i64 {
    100
}

/// Match record returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchResponse {
    pub match_id: String,
    pub game_id: String,
    pub players: Vec<MatchPlayerDto>,
    pub game_mode: String,
    pub map_name: Option<String>,
    pub duration: i64,
    pub winner_team: Option<String>,
    pub winner_player_id: Option<String>,
    pub timestamp: String,
}

impl From<MatchEntity> for MatchResponse {
    fn from(record: MatchEntity) -> Self {
        Self {
            match_id: hex_id(record.id),
            game_id: record.game_id,
            players: record.players.into_iter().map(Into::into).collect(),
            game_mode: record.game_mode,
            map_name: record.map_name,
            duration: record.duration,
            winner_team: record.winner_team,
            winner_player_id: record.winner_player_id,
            timestamp: format_datetime(record.timestamp),
        }
    }
}
