use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};
use validator::Validate;

use crate::{
    dao::graph::models::{ConversationRecord, ConversationSummaryRecord, MessageRecord},
    dto::{
        common::MessageResponse,
        messaging::{
            CreateConversationRequest, EditMessageRequest, MessagesQuery, MuteQuery, PlayerQuery,
            SendMessageRequest,
        },
    },
    error::AppError,
    services::messaging_service,
    state::SharedState,
};

/// Conversation and message endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/messages/conversation", post(create_conversation))
        .route("/messages", post(send_message))
        .route(
            "/messages/conversation/{conversation_id}",
            get(get_conversation),
        )
        .route(
            "/messages/player/{player_id}/conversations",
            get(list_conversations),
        )
        .route(
            "/messages/conversation/{conversation_id}/messages",
            get(list_messages),
        )
        .route(
            "/messages/conversation/{conversation_id}/mute",
            patch(set_muted),
        )
        .route(
            "/messages/conversation/{conversation_id}/leave",
            delete(leave_conversation),
        )
        .route(
            "/messages/{message_id}",
            put(edit_message).delete(delete_message),
        )
}

#[utoipa::path(
    post,
    path = "/api/v1/messages/conversation",
    tag = "messaging",
    request_body = CreateConversationRequest,
    responses(
        (status = 201, description = "Conversation opened", body = ConversationRecord),
        (status = 400, description = "Invalid participant list", body = MessageResponse)
    )
)]
/// Open a conversation and enroll its participants.
pub async fn create_conversation(
    State(state): State<SharedState>,
    Json(payload): Json<CreateConversationRequest>,
) -> Result<(StatusCode, Json<ConversationRecord>), AppError> {
    payload.validate()?;
    let record = messaging_service::create_conversation(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    post,
    path = "/api/v1/messages",
    tag = "messaging",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message posted", body = MessageRecord),
        (status = 404, description = "Conversation or sender not found", body = MessageResponse)
    )
)]
/// Post a message into a conversation.
pub async fn send_message(
    State(state): State<SharedState>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageRecord>), AppError> {
    payload.validate()?;
    let record = messaging_service::send_message(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/v1/messages/conversation/{conversation_id}",
    tag = "messaging",
    params(("conversation_id" = String, Path, description = "Conversation identifier")),
    responses(
        (status = 200, description = "Conversation with participants", body = ConversationRecord),
        (status = 404, description = "Conversation not found", body = MessageResponse)
    )
)]
/// Fetch a conversation with its participant list.
pub async fn get_conversation(
    State(state): State<SharedState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<ConversationRecord>, AppError> {
    Ok(Json(
        messaging_service::get_conversation(&state, &conversation_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/messages/player/{player_id}/conversations",
    tag = "messaging",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses((status = 200, description = "Conversations, most recently active first", body = [ConversationSummaryRecord]))
)]
/// List a player's conversations.
pub async fn list_conversations(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<ConversationSummaryRecord>>, AppError> {
    Ok(Json(
        messaging_service::list_conversations(&state, &player_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/messages/conversation/{conversation_id}/messages",
    tag = "messaging",
    params(
        ("conversation_id" = String, Path, description = "Conversation identifier"),
        MessagesQuery
    ),
    responses((status = 200, description = "Messages, newest first", body = [MessageRecord]))
)]
/// Page through a conversation's messages.
pub async fn list_messages(
    State(state): State<SharedState>,
    Path(conversation_id): Path<String>,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<MessageRecord>>, AppError> {
    Ok(Json(
        messaging_service::list_messages(&state, &conversation_id, query.limit, query.offset)
            .await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/messages/{message_id}",
    tag = "messaging",
    params(("message_id" = String, Path, description = "Message identifier")),
    request_body = EditMessageRequest,
    responses(
        (status = 200, description = "Edited message", body = MessageRecord),
        (status = 404, description = "Message not found", body = MessageResponse)
    )
)]
/// Rewrite a message's content, flagging it as edited.
pub async fn edit_message(
    State(state): State<SharedState>,
    Path(message_id): Path<String>,
    Json(payload): Json<EditMessageRequest>,
) -> Result<Json<MessageRecord>, AppError> {
    payload.validate()?;
    Ok(Json(
        messaging_service::edit_message(&state, &message_id, &payload.content).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/messages/conversation/{conversation_id}/mute",
    tag = "messaging",
    params(
        ("conversation_id" = String, Path, description = "Conversation identifier"),
        MuteQuery
    ),
    responses(
        (status = 200, description = "Mute flag updated", body = MessageResponse),
        (status = 404, description = "Membership not found", body = MessageResponse)
    )
)]
/// Mute or unmute a conversation for one member.
pub async fn set_muted(
    State(state): State<SharedState>,
    Path(conversation_id): Path<String>,
    Query(query): Query<MuteQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        messaging_service::set_muted(&state, &conversation_id, &query.player_id, query.muted)
            .await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/messages/{message_id}",
    tag = "messaging",
    params(("message_id" = String, Path, description = "Message identifier")),
    responses(
        (status = 200, description = "Message deleted", body = MessageResponse),
        (status = 404, description = "Message not found", body = MessageResponse)
    )
)]
/// Delete a message.
pub async fn delete_message(
    State(state): State<SharedState>,
    Path(message_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        messaging_service::delete_message(&state, &message_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/messages/conversation/{conversation_id}/leave",
    tag = "messaging",
    params(
        ("conversation_id" = String, Path, description = "Conversation identifier"),
        PlayerQuery
    ),
    responses(
        (status = 200, description = "Left the conversation", body = MessageResponse),
        (status = 404, description = "Membership not found", body = MessageResponse)
    )
)]
/// Remove a player from a conversation.
pub async fn leave_conversation(
    State(state): State<SharedState>,
    Path(conversation_id): Path<String>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        messaging_service::leave_conversation(&state, &conversation_id, &query.player_id).await?,
    ))
}
