use mongodb::bson::{DateTime, oid::ObjectId};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::error::ServiceError;

/// Achievement catalog and per-player progress logic.
pub mod achievement_service;
/// Clan membership and roster logic.
pub mod clan_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Game catalog logic.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Per-game item and currency logic.
pub mod inventory_service;
/// Leaderboard ranking logic.
pub mod leaderboard_service;
/// Match history logic.
pub mod match_service;
/// Conversation and message logic.
pub mod messaging_service;
/// Player notification inbox logic.
pub mod notification_service;
/// Party lifecycle and invitation logic.
pub mod party_service;
/// Player profile logic.
pub mod player_service;
/// Play session tracking logic.
pub mod session_service;
/// Social graph logic for presence, friendships, blocks, and follows.
pub mod social_service;
/// Per-game statistics logic.
pub mod stats_service;

/// Parse a hex document id, rejecting malformed input before it reaches the store.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(id)
        .map_err(|_| ServiceError::InvalidInput(format!("invalid identifier `{id}`")))
}

/// Current instant in the store's native timestamp type.
pub(crate) fn now_bson() -> DateTime {
    DateTime::now()
}

/// Current instant as an RFC 3339 string, the form graph properties carry.
pub(crate) fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object_id_rejects_malformed_input() {
        assert!(parse_object_id("not-a-hex-id").is_err());
        assert!(parse_object_id("").is_err());
        assert!(parse_object_id("507f1f77bcf86cd799439011").is_ok());
    }

    #[test]
    fn now_rfc3339_produces_parseable_timestamps() {
        let stamp = now_rfc3339();
        assert!(OffsetDateTime::parse(&stamp, &Rfc3339).is_ok());
    }
}
