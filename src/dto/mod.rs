//! Request and response payloads for the HTTP API.

use mongodb::bson::DateTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod achievements;
pub mod clans;
pub mod common;
pub mod games;
pub mod health;
pub mod inventory;
pub mod leaderboards;
pub mod matches;
pub mod messaging;
pub mod notifications;
pub mod parties;
pub mod players;
pub mod sessions;
pub mod social;
pub mod stats;
pub mod validation;

fn format_datetime(datetime: DateTime) -> String {
    OffsetDateTime::from(datetime.to_system_time())
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

fn format_optional(datetime: Option<DateTime>) -> Option<String> {
    datetime.map(format_datetime)
}

fn hex_id(id: Option<mongodb::bson::oid::ObjectId>) -> String {
    id.map(|id| id.to_hex()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, oid::ObjectId};

    use super::*;
    use crate::dao::documents::models::NotificationEntity;

    #[test]
    fn format_datetime_renders_rfc3339() {
        assert_eq!(format_datetime(DateTime::from_millis(0)), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn format_optional_passes_none_through() {
        assert_eq!(format_optional(None), None);
        assert_eq!(
            format_optional(Some(DateTime::from_millis(0))),
            Some("1970-01-01T00:00:00Z".to_owned())
        );
    }

    #[test]
    fn hex_id_round_trips_and_defaults_to_empty() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(hex_id(Some(id)), "507f1f77bcf86cd799439011");
        assert_eq!(hex_id(None), "");
    }

    #[test]
    fn notification_projection_maps_every_field() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let entity = NotificationEntity {
            id: Some(id),
            player_id: "p1".to_owned(),
            notification_type: "friend_request".to_owned(),
            title: "New friend request".to_owned(),
            message: "alice wants to be friends".to_owned(),
            data: doc! {"from": "alice"},
            read: false,
            created_at: DateTime::from_millis(0),
        };

        let response: notifications::NotificationResponse = entity.into();
        assert_eq!(response.notification_id, "507f1f77bcf86cd799439011");
        assert_eq!(response.player_id, "p1");
        assert_eq!(response.notification_type, "friend_request");
        assert_eq!(response.data, doc! {"from": "alice"});
        assert!(!response.read);
        assert_eq!(response.created_at, "1970-01-01T00:00:00Z");
    }
}
