//! Business logic for the achievement catalog and per-player progress tracking.

use mongodb::bson::{Document, oid::ObjectId};

use crate::{
    dao::documents::{
        achievements::{AchievementRepository, PlayerAchievementRepository},
        models::{AchievementEntity, PlayerAchievementEntity},
    },
    dto::{
        achievements::{
            AchievementResponse, CreateAchievementRequest, PlayerAchievementResponse,
            StartPlayerAchievementRequest, UpdateAchievementRequest,
        },
        common::MessageResponse,
    },
    error::ServiceError,
    services::{now_bson, parse_object_id},
    state::SharedState,
};

async fn catalog(state: &SharedState) -> Result<AchievementRepository, ServiceError> {
    Ok(AchievementRepository::new(state.require_documents().await?))
}

async fn tracking(state: &SharedState) -> Result<PlayerAchievementRepository, ServiceError> {
    Ok(PlayerAchievementRepository::new(
        state.require_documents().await?,
    ))
}

fn pair_not_found(player_id: &str, achievement_id: &str) -> ServiceError {
    ServiceError::NotFound(format!(
        "no progress for player `{player_id}` on achievement `{achievement_id}`"
    ))
}

/// Define an achievement for a game.
pub async fn create_achievement(
    state: &SharedState,
    payload: CreateAchievementRequest,
) -> Result<AchievementResponse, ServiceError> {
    let repository = catalog(state).await?;

    let achievement = AchievementEntity {
        id: Some(ObjectId::new()),
        game_id: payload.game_id,
        name: payload.name,
        description: payload.description,
        xp_reward: payload.xp_reward,
        rarity: payload.rarity,
        icon_url: payload.icon_url,
        criteria: payload.criteria,
        created_at: now_bson(),
    };
    repository.insert(&achievement).await?;

    Ok(achievement.into())
}

/// Fetch a single achievement definition.
pub async fn get_achievement(
    state: &SharedState,
    id: &str,
) -> Result<AchievementResponse, ServiceError> {
    let repository = catalog(state).await?;
    let achievement = repository
        .find_by_id(parse_object_id(id)?)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("achievement `{id}` not found")))?;
    Ok(achievement.into())
}

/// List every achievement defined for a game.
pub async fn list_game_achievements(
    state: &SharedState,
    game_id: &str,
) -> Result<Vec<AchievementResponse>, ServiceError> {
    let repository = catalog(state).await?;
    let achievements = repository.list_for_game(game_id).await?;
    Ok(achievements.into_iter().map(Into::into).collect())
}

/// Apply a partial update to an achievement definition.
pub async fn update_achievement(
    state: &SharedState,
    id: &str,
    payload: UpdateAchievementRequest,
) -> Result<AchievementResponse, ServiceError> {
    let repository = catalog(state).await?;
    let object_id = parse_object_id(id)?;

    if repository.find_by_id(object_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "achievement `{id}` not found"
        )));
    }

    let mut fields = Document::new();
    if let Some(name) = payload.name {
        fields.insert("name", name);
    }
    if let Some(description) = payload.description {
        fields.insert("description", description);
    }
    if let Some(xp_reward) = payload.xp_reward {
        fields.insert("xp_reward", xp_reward);
    }
    if let Some(rarity) = payload.rarity {
        fields.insert("rarity", rarity);
    }
    if let Some(icon_url) = payload.icon_url {
        fields.insert("icon_url", icon_url);
    }
    if let Some(criteria) = payload.criteria {
        fields.insert("criteria", criteria);
    }
    if !fields.is_empty() {
        repository.update_fields(object_id, fields).await?;
    }

    let achievement = repository
        .find_by_id(object_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("achievement `{id}` not found")))?;
    Ok(achievement.into())
}

/// Remove an achievement definition.
pub async fn delete_achievement(
    state: &SharedState,
    id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = catalog(state).await?;
    if !repository.delete(parse_object_id(id)?).await? {
        return Err(ServiceError::NotFound(format!(
            "achievement `{id}` not found"
        )));
    }
    Ok(MessageResponse::new("Achievement deleted successfully"))
}

/// Start tracking an achievement for a player.
pub async fn start_tracking(
    state: &SharedState,
    payload: StartPlayerAchievementRequest,
) -> Result<PlayerAchievementResponse, ServiceError> {
    let repository = tracking(state).await?;

    if repository
        .find(&payload.player_id, &payload.achievement_id)
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(format!(
            "player `{}` already tracks achievement `{}`",
            payload.player_id, payload.achievement_id
        )));
    }

    let record = PlayerAchievementEntity {
        id: Some(ObjectId::new()),
        player_id: payload.player_id,
        achievement_id: payload.achievement_id,
        progress: Document::new(),
        completed: false,
        unlocked_at: None,
        started_at: now_bson(),
    };
    repository.insert(&record).await?;

    Ok(record.into())
}

/// List a player's tracked achievements, optionally only the completed ones.
pub async fn list_player_achievements(
    state: &SharedState,
    player_id: &str,
    completed_only: bool,
) -> Result<Vec<PlayerAchievementResponse>, ServiceError> {
    let repository = tracking(state).await?;
    let records = repository.list_for_player(player_id, completed_only).await?;
    Ok(records.into_iter().map(Into::into).collect())
}

/// Fetch one player's progress on one achievement.
pub async fn get_player_achievement(
    state: &SharedState,
    player_id: &str,
    achievement_id: &str,
) -> Result<PlayerAchievementResponse, ServiceError> {
    let repository = tracking(state).await?;
    let record = repository
        .find(player_id, achievement_id)
        .await?
        .ok_or_else(|| pair_not_found(player_id, achievement_id))?;
    Ok(record.into())
}

/// Replace the free-form progress payload.
pub async fn update_progress(
    state: &SharedState,
    player_id: &str,
    achievement_id: &str,
    progress: Document,
) -> Result<PlayerAchievementResponse, ServiceError> {
    let repository = tracking(state).await?;

    if repository.find(player_id, achievement_id).await?.is_none() {
        return Err(pair_not_found(player_id, achievement_id));
    }
    repository
        .set_progress(player_id, achievement_id, progress)
        .await?;

    let record = repository
        .find(player_id, achievement_id)
        .await?
        .ok_or_else(|| pair_not_found(player_id, achievement_id))?;
    Ok(record.into())
}

/// Mark an achievement as unlocked for a player.
pub async fn complete_achievement(
    state: &SharedState,
    player_id: &str,
    achievement_id: &str,
) -> Result<PlayerAchievementResponse, ServiceError> {
    let repository = tracking(state).await?;

    if repository.find(player_id, achievement_id).await?.is_none() {
        return Err(pair_not_found(player_id, achievement_id));
    }
    repository
        .complete(player_id, achievement_id, now_bson())
        .await?;

    let record = repository
        .find(player_id, achievement_id)
        .await?
        .ok_or_else(|| pair_not_found(player_id, achievement_id))?;
    Ok(record.into())
}

/// Drop a player's progress on one achievement.
pub async fn delete_player_achievement(
    state: &SharedState,
    player_id: &str,
    achievement_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = tracking(state).await?;
    if !repository.delete(player_id, achievement_id).await? {
        return Err(pair_not_found(player_id, achievement_id));
    }
    Ok(MessageResponse::new(
        "Achievement progress deleted successfully",
    ))
}
