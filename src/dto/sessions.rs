use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::documents::models::SessionEntity,
    dto::{common::Platform, format_datetime, format_optional, hex_id},
};

/// Payload used to open a play session.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct StartSessionRequest {
    #[validate(length(min = 1))]
    pub player_id: String,
    #[validate(length(min = 1))]
    pub game_id: String,
    pub platform: Platform,
    #[serde(default = "default_region")]
    pub server_region: String,
}

fn default_region() -> String {
    "NA".to_owned()
}

/// Play session returned to clients; `duration` is in whole minutes.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: String,
    pub player_id: String,
    pub game_id: String,
    pub platform: String,
    pub server_region: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration: Option<i64>,
}

impl From<SessionEntity> for SessionResponse {
    fn from(session: SessionEntity) -> Self {
        Self {
            session_id: hex_id(session.id),
            player_id: session.player_id,
            game_id: session.game_id,
            platform: session.platform,
            server_region: session.server_region,
            start_time: format_datetime(session.start_time),
            end_time: format_optional(session.end_time),
            duration: session.duration,
        }
    }
}
