use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Presence state advertised on a player's social node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Online,
    Offline,
    Away,
    InGame,
    #[serde(rename = "dnd")]
    DoNotDisturb,
}

impl PlayerStatus {
    /// Stored string form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Away => "away",
            Self::InGame => "in_game",
            Self::DoNotDisturb => "dnd",
        }
    }
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self::Offline
    }
}

/// Payload used to register a player in the social graph.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePlayerNodeRequest {
    #[validate(length(min = 1))]
    pub player_id: String,
    #[validate(length(min = 3, max = 30))]
    pub username: String,
    #[serde(default)]
    pub status: PlayerStatus,
}

/// Presence update parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StatusQuery {
    pub status: PlayerStatus,
}

/// Username update parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct UsernameQuery {
    pub username: String,
}

/// Payload used to send a friend request.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct FriendRequestCreate {
    #[validate(length(min = 1))]
    pub from_player_id: String,
    #[validate(length(min = 1))]
    pub to_player_id: String,
    #[serde(default)]
    pub message: String,
}

/// Identifies a pending friend request by its endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct RequestPairQuery {
    pub from_player_id: String,
    pub to_player_id: String,
}

/// Identifies an existing friendship by its endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FriendPairQuery {
    pub player_id: String,
    pub friend_id: String,
}

/// Nickname assignment parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct NicknameQuery {
    pub player_id: String,
    pub friend_id: String,
    pub nickname: String,
}

/// Suggestion listing parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SuggestionsQuery {
    #[serde(default = "default_suggestion_limit")]
    pub limit: i64,
}

fn default_suggestion_limit() -> i64 {
    10
}

/// Payload used to block a player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct BlockRequest {
    #[validate(length(min = 1))]
    pub blocker_id: String,
    #[validate(length(min = 1))]
    pub blocked_id: String,
    pub reason: Option<String>,
}

/// Identifies a block by its endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct BlockPairQuery {
    pub blocker_id: String,
    pub blocked_id: String,
}

/// Payload used to follow a player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct FollowRequest {
    #[validate(length(min = 1))]
    pub follower_id: String,
    #[validate(length(min = 1))]
    pub following_id: String,
}

/// Identifies a follow edge by its endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FollowPairQuery {
    pub follower_id: String,
    pub following_id: String,
}
