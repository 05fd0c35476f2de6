use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    dao::documents::models::GameEntity,
    dto::{common::Platform, format_datetime, hex_id},
};

/// Payload used to add a game to the catalog.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateGameRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub publisher: String,
    pub platforms: Vec<Platform>,
    #[serde(default = "default_crossplay")]
    pub crossplay_enabled: bool,
    #[serde(default = "default_max_players")]
    pub max_players: i64,
    #[serde(default)]
    pub genres: Vec<String>,
}

fn default_crossplay() -> bool {
    true
}

fn default_max_players() -> i64 {
    100
}

/// Partial update for a catalog entry; omitted fields are left untouched.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateGameRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub publisher: Option<String>,
    pub platforms: Option<Vec<Platform>>,
    pub crossplay_enabled: Option<bool>,
    pub max_players: Option<i64>,
    pub genres: Option<Vec<String>>,
}

/// Listing parameters; `platform` switches to a platform-filtered listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GameListQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_game_limit")]
    pub limit: i64,
    pub platform: Option<String>,
}

fn default_game_limit() -> i64 {
    100
}

/// Catalog entry returned to clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameResponse {
    pub game_id: String,
    pub title: String,
    pub publisher: String,
    pub platforms: Vec<String>,
    pub crossplay_enabled: bool,
    pub max_players: i64,
    pub genres: Vec<String>,
    pub release_date: String,
}

impl From<GameEntity> for GameResponse {
    fn from(game: GameEntity) -> Self {
        Self {
            game_id: hex_id(game.id),
            title: game.title,
            publisher: game.publisher,
            platforms: game.platforms,
            crossplay_enabled: game.crossplay_enabled,
            max_players: game.max_players,
            genres: game.genres,
            release_date: format_datetime(game.release_date),
        }
    }
}
