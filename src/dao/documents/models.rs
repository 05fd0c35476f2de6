//! Persistence models for the MongoDB collections.

use mongodb::bson::{DateTime, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// Player profile document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntity {
    /// Document identifier, absent until inserted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Unique display name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Platforms the player plays on.
    pub platforms: Vec<String>,
    /// Per-player preferences.
    pub settings: PlayerSettingsEntity,
    /// Account creation time.
    pub created_at: DateTime,
    /// Most recent login, if any.
    pub last_login: Option<DateTime>,
}

/// Embedded player preference block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSettingsEntity {
    pub notifications_enabled: bool,
    pub crossplay_enabled: bool,
    pub privacy_level: String,
    pub language: String,
    pub region: String,
}

impl Default for PlayerSettingsEntity {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            crossplay_enabled: true,
            privacy_level: "friends".to_owned(),
            language: "en".to_owned(),
            region: "NA".to_owned(),
        }
    }
}

/// Game catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub publisher: String,
    pub platforms: Vec<String>,
    pub crossplay_enabled: bool,
    pub max_players: i64,
    pub genres: Vec<String>,
    pub release_date: DateTime,
}

/// Per-player per-game statistics document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatsEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
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
    pub last_updated: DateTime,
}

/// Per-player scoreline embedded in a match record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPlayerEntity {
    pub player_id: String,
    pub team: Option<String>,
    pub score: i64,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
}

/// Completed match record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub game_id: String,
    pub players: Vec<MatchPlayerEntity>,
    pub game_mode: String,
    pub map_name: Option<String>,
    /// Match length in seconds.
    pub duration: i64,
    pub winner_team: Option<String>,
    pub winner_player_id: Option<String>,
    pub timestamp: DateTime,
}

/// Ranked entry embedded in a leaderboard document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntryEntity {
    pub player_id: String,
    pub username: String,
    pub score: i64,
    pub rank: i64,
}

/// Leaderboard document holding the ranked entry list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub game_id: String,
    pub leaderboard_type: String,
    pub timeframe: String,
    pub entries: Vec<LeaderboardEntryEntity>,
    pub last_updated: DateTime,
}

/// Achievement definition document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub xp_reward: i64,
    pub rarity: String,
    pub icon_url: Option<String>,
    /// Free-form unlock criteria, e.g. `{"kills": 100}`.
    pub criteria: Document,
    pub created_at: DateTime,
}

/// Per-player achievement progress document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAchievementEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub player_id: String,
    pub achievement_id: String,
    pub progress: Document,
    pub completed: bool,
    pub unlocked_at: Option<DateTime>,
    pub started_at: DateTime,
}

/// Play session document; `end_time` stays unset while the session is live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub player_id: String,
    pub game_id: String,
    pub platform: String,
    pub server_region: String,
    pub start_time: DateTime,
    pub end_time: Option<DateTime>,
    /// Whole minutes between start and end, set when the session closes.
    pub duration: Option<i64>,
}

/// Notification document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub player_id: String,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub data: Document,
    pub read: bool,
    pub created_at: DateTime,
}

/// Owned item embedded in an inventory document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemEntity {
    pub item_id: String,
    pub item_name: String,
    pub item_type: String,
    pub quantity: i64,
    pub acquired_at: DateTime,
}

/// Per-player per-game inventory document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub player_id: String,
    pub game_id: String,
    pub items: Vec<InventoryItemEntity>,
    pub currency: i64,
    pub last_updated: DateTime,
}
