use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::dto::validation::validate_clan_tag;

/// Rank tier a clan member can hold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClanRole {
    Owner,
    Admin,
    Moderator,
    Member,
}

impl ClanRole {
    /// Stored string form of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Member => "member",
        }
    }
}

/// Payload used to found a clan.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateClanRequest {
    #[validate(length(min = 3, max = 50))]
    pub name: String,
    #[validate(length(min = 2, max = 6), custom(function = validate_clan_tag))]
    pub tag: String,
    #[validate(length(min = 1))]
    pub owner_id: String,
    pub description: Option<String>,
}

/// Partial update for clan metadata; omitted fields are left untouched.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateClanRequest {
    #[validate(length(min = 3, max = 50))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 6), custom(function = validate_clan_tag))]
    pub tag: Option<String>,
    pub description: Option<String>,
}

/// Role or rank change for one clan member.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ClanMemberUpdateRequest {
    pub role: Option<ClanRole>,
    pub rank: Option<i64>,
}

/// Identifies the acting player for join and leave operations.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ClanMemberQuery {
    pub player_id: String,
}

/// Clan search paging parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ClanSearchQuery {
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

fn default_search_limit() -> i64 {
    20
}
