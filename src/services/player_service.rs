//! Business logic for player profile management backed by the document store.

use mongodb::bson::{Document, doc, oid::ObjectId};
use tracing::debug;

use crate::{
    dao::documents::{
        models::{PlayerEntity, PlayerSettingsEntity},
        players::PlayerRepository,
    },
    dto::{
        common::MessageResponse,
        players::{CreatePlayerRequest, PlayerResponse, UpdatePlayerRequest},
    },
    error::ServiceError,
    services::{now_bson, parse_object_id},
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<PlayerRepository, ServiceError> {
    Ok(PlayerRepository::new(state.require_documents().await?))
}

fn settings_document(settings: &PlayerSettingsEntity) -> Document {
    doc! {
        "notifications_enabled": settings.notifications_enabled,
        "crossplay_enabled": settings.crossplay_enabled,
        "privacy_level": settings.privacy_level.clone(),
        "language": settings.language.clone(),
        "region": settings.region.clone(),
    }
}

/// Register a new player, rejecting duplicate usernames.
pub async fn create_player(
    state: &SharedState,
    payload: CreatePlayerRequest,
) -> Result<PlayerResponse, ServiceError> {
    let repository = repository(state).await?;

    if repository.find_by_username(&payload.username).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "username `{}` is already taken",
            payload.username
        )));
    }

    let player = PlayerEntity {
        id: Some(ObjectId::new()),
        username: payload.username,
        email: payload.email,
        platforms: payload
            .platforms
            .iter()
            .map(|platform| platform.as_str().to_owned())
            .collect(),
        settings: payload.settings.into(),
        created_at: now_bson(),
        last_login: None,
    };
    repository.insert(&player).await?;
    debug!(username = %player.username, "player registered");

    Ok(player.into())
}

/// Fetch a single player profile.
pub async fn get_player(state: &SharedState, id: &str) -> Result<PlayerResponse, ServiceError> {
    let repository = repository(state).await?;
    let player = repository
        .find_by_id(parse_object_id(id)?)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("player `{id}` not found")))?;
    Ok(player.into())
}

/// List player profiles with offset pagination.
pub async fn list_players(
    state: &SharedState,
    skip: u64,
    limit: i64,
) -> Result<Vec<PlayerResponse>, ServiceError> {
    let repository = repository(state).await?;
    let players = repository.list(skip, limit).await?;
    Ok(players.into_iter().map(Into::into).collect())
}

/// Apply a partial profile update and return the refreshed document.
pub async fn update_player(
    state: &SharedState,
    id: &str,
    payload: UpdatePlayerRequest,
) -> Result<PlayerResponse, ServiceError> {
    let repository = repository(state).await?;
    let object_id = parse_object_id(id)?;

    if repository.find_by_id(object_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!("player `{id}` not found")));
    }

    let mut fields = Document::new();
    if let Some(username) = payload.username {
        fields.insert("username", username);
    }
    if let Some(email) = payload.email {
        fields.insert("email", email);
    }
    if let Some(platforms) = payload.platforms {
        let platforms: Vec<String> = platforms
            .iter()
            .map(|platform| platform.as_str().to_owned())
            .collect();
        fields.insert("platforms", platforms);
    }
    if let Some(settings) = payload.settings {
        fields.insert("settings", settings_document(&settings.into()));
    }
    if !fields.is_empty() {
        repository.update_fields(object_id, fields).await?;
    }

    let player = repository
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("player `{id}` not found")))?;
    Ok(player.into())
}

/// Stamp the player's last login time.
pub async fn record_login(state: &SharedState, id: &str) -> Result<PlayerResponse, ServiceError> {
    let repository = repository(state).await?;
    let object_id = parse_object_id(id)?;

    if repository.find_by_id(object_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!("player `{id}` not found")));
    }
    repository.touch_last_login(object_id, now_bson()).await?;

    let player = repository
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("player `{id}` not found")))?;
    Ok(player.into())
}

/// Delete a player profile.
pub async fn delete_player(
    state: &SharedState,
    id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.delete(parse_object_id(id)?).await? {
        return Err(ServiceError::NotFound(format!("player `{id}` not found")));
    }
    Ok(MessageResponse::new("Player deleted successfully"))
}
