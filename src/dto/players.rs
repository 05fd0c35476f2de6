use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::documents::models::{PlayerEntity, PlayerSettingsEntity},
    dto::{common::Platform, format_datetime, format_optional, hex_id},
};

/// Per-player preference block.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerSettingsDto {
    pub notifications_enabled: bool,
    pub crossplay_enabled: bool,
    /// One of `public`, `friends` or `private`.
    pub privacy_level: String,
    pub language: String,
    pub region: String,
}

impl Default for PlayerSettingsDto {
    fn default() -> Self {
        PlayerSettingsEntity::default().into()
    }
}

impl From<PlayerSettingsEntity> for PlayerSettingsDto {
    fn from(settings: PlayerSettingsEntity) -> Self {
        Self {
            notifications_enabled: settings.notifications_enabled,
            crossplay_enabled: settings.crossplay_enabled,
            privacy_level: settings.privacy_level,
            language: settings.language,
            region: settings.region,
        }
    }
}

impl From<PlayerSettingsDto> for PlayerSettingsEntity {
    fn from(settings: PlayerSettingsDto) -> Self {
        Self {
            notifications_enabled: settings.notifications_enabled,
            crossplay_enabled: settings.crossplay_enabled,
            privacy_level: settings.privacy_level,
            language: settings.language,
            region: settings.region,
        }
    }
}

/// Payload used to register a new player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePlayerRequest {
    #[validate(length(min = 3, max = 30))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub settings: PlayerSettingsDto,
}

/// Partial update for a player profile; omitted fields are left untouched.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 3, max = 30))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub platforms: Option<Vec<Platform>>,
    pub settings: Option<PlayerSettingsDto>,
}

/// Player profile returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerResponse {
    pub player_id: String,
    pub username: String,
    pub email: String,
    pub platforms: Vec<String>,
    pub settings: PlayerSettingsDto,
    pub created_at: String,
    pub last_login: Option<String>,
}

impl From<PlayerEntity> for PlayerResponse {
    fn from(player: PlayerEntity) -> Self {
        Self {
            player_id: hex_id(player.id),
            username: player.username,
            email: player.email,
            platforms: player.platforms,
            settings: player.settings.into(),
            created_at: format_datetime(player.created_at),
            last_login: format_optional(player.last_login),
        }
    }
}
