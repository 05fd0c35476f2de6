//! Row shapes returned by the graph repositories.
//!
//! Fields mirror the aliases used in the Cypher `RETURN` clauses so rows can
//! be decoded directly. Timestamps are RFC 3339 strings stamped by the
//! service layer, which keeps them uniform across stores.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Presence node mirrored from a player profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerNodeRecord {
    /// Document id of the mirrored player profile.
    pub player_id: String,
    pub username: String,
    pub status: String,
}

/// Pending friend request edge.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendRequestRecord {
    pub from_player_id: String,
    pub from_username: String,
    pub to_player_id: String,
    pub to_username: String,
    pub message: String,
    pub sent_at: String,
}

/// Established friendship edge.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendshipRecord {
    pub player1_id: String,
    pub player2_id: String,
    pub since: String,
}

/// A friend as seen from one side of the relationship.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendRecord {
    pub player_id: String,
    pub username: String,
    pub status: String,
    pub friends_since: String,
    pub nickname: Option<String>,
}

/// A player friended by both sides of a pair.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MutualFriendRecord {
    pub player_id: String,
    pub username: String,
    pub status: String,
}

/// Friend-of-friend candidate with the number of shared friends.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendSuggestionRecord {
    pub player_id: String,
    pub username: String,
    pub status: String,
    pub mutual_friends: i64,
}

/// Friend edge after a nickname update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendNicknameRecord {
    pub player_id: String,
    pub username: String,
    pub nickname: Option<String>,
}

/// Block edge pointing at the blocked player.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlockRecord {
    pub blocked_player_id: String,
    pub blocked_username: String,
    pub blocked_since: String,
    pub reason: Option<String>,
}

/// Conversation member projection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantRecord {
    pub player_id: String,
    pub username: String,
    pub status: String,
}

/// Conversation with its full participant list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationRecord {
    pub conversation_id: String,
    pub conversation_type: String,
    pub name: Option<String>,
    pub created_at: String,
    pub last_message_at: Option<String>,
    pub participants: Vec<ParticipantRecord>,
}

/// Abbreviated participant used in conversation listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OtherParticipantRecord {
    pub player_id: String,
    pub username: String,
}

/// Conversation listing row seen from one member's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationSummaryRecord {
    pub conversation_id: String,
    pub conversation_type: String,
    pub name: Option<String>,
    pub created_at: String,
    pub last_message_at: Option<String>,
    pub other_participants: Vec<OtherParticipantRecord>,
}

/// Message node with its sender.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageRecord {
    pub message_id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub sender_username: String,
    pub content: String,
    pub timestamp: String,
    pub edited: bool,
    pub edited_at: Option<String>,
}

/// Party node as returned from creation and updates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartyCreatedRecord {
    pub party_id: String,
    pub game_id: String,
    pub max_size: i64,
    pub is_public: bool,
    pub created_at: String,
}

/// Party member projection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartyMemberRecord {
    pub player_id: String,
    pub username: String,
    pub role: String,
    pub joined_at: String,
}

/// Party with its member roster.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartyRecord {
    pub party_id: String,
    pub game_id: String,
    pub max_size: i64,
    pub is_public: bool,
    pub created_at: String,
    pub members: Vec<PartyMemberRecord>,
}

/// Abbreviated party row used when resolving a player's current party.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartySummaryRecord {
    pub party_id: String,
    pub game_id: String,
    pub max_size: i64,
    pub is_public: bool,
}

/// Outcome of a party invitation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartyInviteRecord {
    pub party_id: String,
    pub invitee_id: String,
    pub invitee_username: String,
}

/// Outcome of joining a party.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartyJoinRecord {
    pub party_id: String,
    pub player_id: String,
    pub username: String,
}

/// Clan node as returned from creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClanCreatedRecord {
    pub clan_id: String,
    pub name: String,
    pub tag: String,
    pub description: Option<String>,
    pub created_at: String,
}

/// Clan member projection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClanMemberRecord {
    pub player_id: String,
    pub username: String,
    pub role: String,
    pub rank: i64,
    pub joined_at: String,
}

/// Clan with its member roster.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClanRecord {
    pub clan_id: String,
    pub name: String,
    pub tag: String,
    pub description: Option<String>,
    pub created_at: String,
    pub member_count: i64,
    pub members: Vec<ClanMemberRecord>,
}

/// A player's membership in their clan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClanMembershipRecord {
    pub clan_id: String,
    pub name: String,
    pub tag: String,
    pub role: String,
    pub rank: i64,
}

/// Clan search result row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClanSummaryRecord {
    pub clan_id: String,
    pub name: String,
    pub tag: String,
    pub description: Option<String>,
    pub member_count: i64,
}

/// Outcome of joining a clan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClanJoinRecord {
    pub clan_id: String,
    pub player_id: String,
    pub username: String,
}

/// Clan membership edge after a role change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClanRoleRecord {
    pub player_id: String,
    pub username: String,
    pub role: String,
    pub rank: i64,
}

/// The player on the receiving end of a new follow edge.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FollowTargetRecord {
    pub player_id: String,
    pub username: String,
}

/// Follow edge row for follower and following listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FollowRecord {
    pub player_id: String,
    pub username: String,
    pub status: String,
    pub following_since: String,
}
