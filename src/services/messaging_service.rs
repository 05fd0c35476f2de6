//! Business logic for conversations and messages in the social graph.

use uuid::Uuid;

use crate::{
    dao::graph::{
        messaging::ConversationRepository,
        models::{ConversationRecord, ConversationSummaryRecord, MessageRecord},
    },
    dto::{
        common::MessageResponse,
        messaging::{ConversationType, CreateConversationRequest, SendMessageRequest},
    },
    error::ServiceError,
    services::now_rfc3339,
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<ConversationRepository, ServiceError> {
    Ok(ConversationRepository::new(state.require_graph().await?))
}

fn conversation_not_found(conversation_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("conversation `{conversation_id}` not found"))
}

/// Open a conversation and enroll its participants.
pub async fn create_conversation(
    state: &SharedState,
    payload: CreateConversationRequest,
) -> Result<ConversationRecord, ServiceError> {
    if matches!(payload.conversation_type, ConversationType::Direct)
        && payload.participant_ids.len() != 2
    {
        return Err(ServiceError::InvalidInput(
            "direct conversations require exactly two participants".to_owned(),
        ));
    }

    let repository = repository(state).await?;
    let conversation_id = Uuid::new_v4().to_string();
    let now = now_rfc3339();

    repository
        .create(
            &conversation_id,
            payload.conversation_type.as_str(),
            payload.name.as_deref(),
            &now,
        )
        .await?;
    repository
        .add_participants(&conversation_id, &payload.participant_ids, &now)
        .await?;

    repository
        .get(&conversation_id)
        .await?
        .ok_or_else(|| conversation_not_found(&conversation_id))
}

/// Fetch a conversation with its participant list.
pub async fn get_conversation(
    state: &SharedState,
    conversation_id: &str,
) -> Result<ConversationRecord, ServiceError> {
    let repository = repository(state).await?;
    repository
        .get(conversation_id)
        .await?
        .ok_or_else(|| conversation_not_found(conversation_id))
}

/// List a player's conversations, most recently active first.
pub async fn list_conversations(
    state: &SharedState,
    player_id: &str,
) -> Result<Vec<ConversationSummaryRecord>, ServiceError> {
    let repository = repository(state).await?;
    Ok(repository.list_for_player(player_id).await?)
}

/// Post a message into a conversation.
pub async fn send_message(
    state: &SharedState,
    payload: SendMessageRequest,
) -> Result<MessageRecord, ServiceError> {
    let repository = repository(state).await?;
    let message_id = Uuid::new_v4().to_string();

    repository
        .send_message(
            &payload.conversation_id,
            &message_id,
            &payload.sender_id,
            &payload.content,
            &now_rfc3339(),
        )
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound("conversation or sender not found".to_owned())
        })
}

/// Page through a conversation's messages, newest first.
pub async fn list_messages(
    state: &SharedState,
    conversation_id: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<MessageRecord>, ServiceError> {
    let repository = repository(state).await?;
    Ok(repository
        .messages(conversation_id, limit.clamp(1, 100), offset.max(0))
        .await?)
}

/// Rewrite a message's content, flagging it as edited.
pub async fn edit_message(
    state: &SharedState,
    message_id: &str,
    content: &str,
) -> Result<MessageRecord, ServiceError> {
    let repository = repository(state).await?;
    repository
        .edit_message(message_id, content, &now_rfc3339())
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("message `{message_id}` not found")))
}

/// Mute or unmute a conversation for one member.
pub async fn set_muted(
    state: &SharedState,
    conversation_id: &str,
    player_id: &str,
    muted: bool,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.set_muted(player_id, conversation_id, muted).await? {
        return Err(ServiceError::NotFound(format!(
            "player `{player_id}` is not a member of conversation `{conversation_id}`"
        )));
    }
    let message = if muted {
        "Conversation muted successfully"
    } else {
        "Conversation unmuted successfully"
    };
    Ok(MessageResponse::new(message))
}

/// Delete a message.
pub async fn delete_message(
    state: &SharedState,
    message_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.delete_message(message_id).await? {
        return Err(ServiceError::NotFound(format!(
            "message `{message_id}` not found"
        )));
    }
    Ok(MessageResponse::new("Message deleted successfully"))
}

/// Remove a player from a conversation.
pub async fn leave_conversation(
    state: &SharedState,
    conversation_id: &str,
    player_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.leave(player_id, conversation_id).await? {
        return Err(ServiceError::NotFound(format!(
            "player `{player_id}` is not a member of conversation `{conversation_id}`"
        )));
    }
    Ok(MessageResponse::new("Left conversation successfully"))
}
