use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Shape of a conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConversationType {
    Direct,
    Group,
}

impl ConversationType {
    /// Stored string form of the conversation type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Group => "group",
        }
    }
}

/// Payload used to open a conversation.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateConversationRequest {
    pub conversation_type: ConversationType,
    #[validate(length(min = 1))]
    pub participant_ids: Vec<String>,
    /// Display name, only meaningful for group conversations.
    pub name: Option<String>,
}

/// Payload used to post a message into a conversation.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1))]
    pub conversation_id: String,
    #[validate(length(min = 1))]
    pub sender_id: String,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

/// Replacement content for an existing message.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct EditMessageRequest {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

/// Message history paging parameters, newest first.
#[derive(Debug, Deserialize, IntoParams)]
pub struct MessagesQuery {
    #[serde(default = "default_messages_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_messages_limit() -> i64 {
    50
}

/// Mute toggle parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct MuteQuery {
    pub player_id: String,
    #[serde(default = "default_muted")]
    pub muted: bool,
}

fn default_muted() -> bool {
    true
}

/// Identifies the acting player for membership operations.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PlayerQuery {
    pub player_id: String,
}
