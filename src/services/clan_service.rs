//! Business logic for clans: persistent player organizations in the graph.

use uuid::Uuid;

use crate::{
    dao::graph::{
        clans::ClanRepository,
        models::{ClanCreatedRecord, ClanJoinRecord, ClanMembershipRecord, ClanRecord,
            ClanRoleRecord, ClanSummaryRecord},
    },
    dto::{
        clans::{ClanMemberUpdateRequest, CreateClanRequest, UpdateClanRequest},
        common::MessageResponse,
    },
    error::ServiceError,
    services::now_rfc3339,
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<ClanRepository, ServiceError> {
    Ok(ClanRepository::new(state.require_graph().await?))
}

fn clan_not_found(clan_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("clan `{clan_id}` not found"))
}

/// Found a clan with its creator as owner.
pub async fn create_clan(
    state: &SharedState,
    payload: CreateClanRequest,
) -> Result<ClanCreatedRecord, ServiceError> {
    let repository = repository(state).await?;
    let clan_id = Uuid::new_v4().to_string();

    repository
        .create(
            &clan_id,
            &payload.name,
            &payload.tag,
            &payload.owner_id,
            payload.description.as_deref(),
            &now_rfc3339(),
        )
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("player `{}` not found", payload.owner_id))
        })
}

/// Join a clan; new members enter at the bottom of the rank ladder.
pub async fn join_clan(
    state: &SharedState,
    clan_id: &str,
    player_id: &str,
) -> Result<ClanJoinRecord, ServiceError> {
    let repository = repository(state).await?;

    if repository.get(clan_id).await?.is_none() {
        return Err(clan_not_found(clan_id));
    }

    let rank = repository.member_count(clan_id).await? + 1;
    repository
        .join(clan_id, player_id, rank, &now_rfc3339())
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("player `{player_id}` not found")))
}

/// Fetch a clan with its member roster.
pub async fn get_clan(state: &SharedState, clan_id: &str) -> Result<ClanRecord, ServiceError> {
    let repository = repository(state).await?;
    repository
        .get(clan_id)
        .await?
        .ok_or_else(|| clan_not_found(clan_id))
}

/// Look up the clan a player currently belongs to.
pub async fn player_clan(
    state: &SharedState,
    player_id: &str,
) -> Result<ClanMembershipRecord, ServiceError> {
    let repository = repository(state).await?;
    repository.clan_of(player_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!("player `{player_id}` is not in a clan"))
    })
}

/// Search clans by name or tag substring.
pub async fn search_clans(
    state: &SharedState,
    term: &str,
    limit: i64,
) -> Result<Vec<ClanSummaryRecord>, ServiceError> {
    let repository = repository(state).await?;
    Ok(repository.search(term, limit.clamp(1, 50)).await?)
}

/// Apply a partial metadata update and return the refreshed clan.
pub async fn update_clan(
    state: &SharedState,
    clan_id: &str,
    payload: UpdateClanRequest,
) -> Result<ClanRecord, ServiceError> {
    let repository = repository(state).await?;
    if !repository
        .update(
            clan_id,
            payload.name.as_deref(),
            payload.tag.as_deref(),
            payload.description.as_deref(),
        )
        .await?
    {
        return Err(clan_not_found(clan_id));
    }

    repository
        .get(clan_id)
        .await?
        .ok_or_else(|| clan_not_found(clan_id))
}

/// Change a member's role, and optionally their rank.
pub async fn update_member(
    state: &SharedState,
    clan_id: &str,
    player_id: &str,
    payload: ClanMemberUpdateRequest,
) -> Result<ClanRoleRecord, ServiceError> {
    let Some(role) = payload.role else {
        return Err(ServiceError::InvalidInput(
            "a role is required when updating a clan member".to_owned(),
        ));
    };

    let repository = repository(state).await?;
    repository
        .update_member_role(clan_id, player_id, role.as_str(), payload.rank)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "player `{player_id}` is not a member of clan `{clan_id}`"
            ))
        })
}

/// Remove a member from a clan.
pub async fn leave_clan(
    state: &SharedState,
    clan_id: &str,
    player_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.leave(clan_id, player_id).await? {
        return Err(ServiceError::NotFound(format!(
            "player `{player_id}` is not a member of clan `{clan_id}`"
        )));
    }
    Ok(MessageResponse::new("Left clan successfully"))
}

/// Dissolve a clan, detaching every member.
pub async fn disband_clan(
    state: &SharedState,
    clan_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.disband(clan_id).await? {
        return Err(clan_not_found(clan_id));
    }
    Ok(MessageResponse::new("Clan disbanded successfully"))
}
