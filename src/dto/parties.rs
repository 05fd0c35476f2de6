use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Payload used to form a party.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePartyRequest {
    #[validate(length(min = 1))]
    pub leader_id: String,
    #[validate(length(min = 1))]
    pub game_id: String,
    #[serde(default = "default_max_size")]
    #[validate(range(min = 2, max = 64))]
    pub max_size: i64,
    #[serde(default)]
    pub is_public: bool,
}

fn default_max_size() -> i64 {
    4
}

/// Partial update for party settings; omitted fields are left untouched.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdatePartyRequest {
    #[validate(range(min = 2, max = 64))]
    pub max_size: Option<i64>,
    pub is_public: Option<bool>,
    #[validate(length(min = 1))]
    pub game_id: Option<String>,
}

/// Payload used to invite a player into a party.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PartyInviteRequest {
    #[validate(length(min = 1))]
    pub inviter_id: String,
    #[validate(length(min = 1))]
    pub invitee_id: String,
}

/// Identifies the acting player for join and leave operations.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PartyMemberQuery {
    pub player_id: String,
}
