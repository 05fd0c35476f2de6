use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    dao::documents::models::{AchievementEntity, PlayerAchievementEntity},
    dto::{format_datetime, format_optional, hex_id},
};

/// Payload used to define an achievement for a game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateAchievementRequest {
    #[validate(length(min = 1))]
    pub game_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub xp_reward: i64,
    /// One of `common`, `rare`, `epic` or `legendary`.
    #[serde(default = "default_rarity")]
    pub rarity: String,
    pub icon_url: Option<String>,
    /// Free-form unlock criteria, stored as-is.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub criteria: Document,
}

fn default_rarity() -> String {
    "common".to_owned()
}

/// Partial update for an achievement definition.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateAchievementRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub xp_reward: Option<i64>,
    pub rarity: Option<String>,
    pub icon_url: Option<String>,
    #[schema(value_type = Object)]
    pub criteria: Option<Document>,
}

/// Achievement definition returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct AchievementResponse {
    pub achievement_id: String,
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub xp_reward: i64,
    pub rarity: String,
    pub icon_url: Option<String>,
    #[schema(value_type = Object)]
    pub criteria: Document,
    pub created_at: String,
}

impl From<AchievementEntity> for AchievementResponse {
    fn from(achievement: AchievementEntity) -> Self {
        Self {
            achievement_id: hex_id(achievement.id),
            game_id: achievement.game_id,
            name: achievement.name,
            description: achievement.description,
            xp_reward: achievement.xp_reward,
            rarity: achievement.rarity,
            icon_url: achievement.icon_url,
            criteria: achievement.criteria,
            created_at: format_datetime(achievement.created_at),
        }
    }
}

/// Payload used to start tracking an achievement for a player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct StartPlayerAchievementRequest {
    #[validate(length(min = 1))]
    pub player_id: String,
    #[validate(length(min = 1))]
    pub achievement_id: String,
}

/// Replacement progress payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProgressRequest {
    #[schema(value_type = Object)]
    pub progress: Document,
}

/// Listing parameters for a player's achievement tracking records.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CompletedOnlyQuery {
    #[serde(default)]
    pub completed_only: bool,
}

/// A player's progress towards one achievement.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerAchievementResponse {
    pub player_id: String,
    pub achievement_id: String,
    #[schema(value_type = Object)]
    pub progress: Document,
    pub completed: bool,
    pub unlocked_at: Option<String>,
    pub started_at: String,
}

impl From<PlayerAchievementEntity> for PlayerAchievementResponse {
    fn from(record: PlayerAchievementEntity) -> Self {
        Self {
            player_id: record.player_id,
            achievement_id: record.achievement_id,
            progress: record.progress,
            completed: record.completed,
            unlocked_at: format_optional(record.unlocked_at),
            started_at: format_datetime(record.started_at),
        }
    }
}
