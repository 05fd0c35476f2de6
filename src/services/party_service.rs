//! Business logic for parties: short-lived matchmaking groups in the graph.

use uuid::Uuid;

use crate::{
    dao::graph::{
        models::{PartyCreatedRecord, PartyInviteRecord, PartyJoinRecord, PartyRecord,
            PartySummaryRecord},
        parties::PartyRepository,
    },
    dto::{
        common::MessageResponse,
        parties::{CreatePartyRequest, PartyInviteRequest, UpdatePartyRequest},
    },
    error::ServiceError,
    services::now_rfc3339,
    state::SharedState,
};

async fn repository(state: &SharedState) -> Result<PartyRepository, ServiceError> {
    Ok(PartyRepository::new(state.require_graph().await?))
}

fn party_not_found(party_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("party `{party_id}` not found"))
}

/// Form a party with its creator as leader.
pub async fn create_party(
    state: &SharedState,
    payload: CreatePartyRequest,
) -> Result<PartyCreatedRecord, ServiceError> {
    let repository = repository(state).await?;
    let party_id = Uuid::new_v4().to_string();

    repository
        .create(
            &party_id,
            &payload.leader_id,
            &payload.game_id,
            payload.max_size,
            payload.is_public,
            &now_rfc3339(),
        )
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(format!("player `{}` not found", payload.leader_id))
        })
}

/// Record a party invitation towards a player.
pub async fn invite_to_party(
    state: &SharedState,
    party_id: &str,
    payload: PartyInviteRequest,
) -> Result<PartyInviteRecord, ServiceError> {
    let repository = repository(state).await?;
    repository
        .invite(
            party_id,
            &payload.inviter_id,
            &payload.invitee_id,
            &now_rfc3339(),
        )
        .await?
        .ok_or_else(|| ServiceError::NotFound("party or invitee not found".to_owned()))
}

/// Join a party, consuming any pending invitation on the way in.
pub async fn join_party(
    state: &SharedState,
    party_id: &str,
    player_id: &str,
) -> Result<PartyJoinRecord, ServiceError> {
    let repository = repository(state).await?;
    repository
        .join(party_id, player_id, &now_rfc3339())
        .await?
        .ok_or_else(|| ServiceError::NotFound("party or player not found".to_owned()))
}

/// Fetch a party with its member roster.
pub async fn get_party(state: &SharedState, party_id: &str) -> Result<PartyRecord, ServiceError> {
    let repository = repository(state).await?;
    repository
        .get(party_id)
        .await?
        .ok_or_else(|| party_not_found(party_id))
}

/// Look up the party a player currently belongs to.
pub async fn player_party(
    state: &SharedState,
    player_id: &str,
) -> Result<PartySummaryRecord, ServiceError> {
    let repository = repository(state).await?;
    repository.party_of(player_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!("player `{player_id}` is not in a party"))
    })
}

/// Apply a partial settings update and return the refreshed party.
pub async fn update_party(
    state: &SharedState,
    party_id: &str,
    payload: UpdatePartyRequest,
) -> Result<PartyRecord, ServiceError> {
    let repository = repository(state).await?;
    if !repository
        .update(
            party_id,
            payload.max_size,
            payload.is_public,
            payload.game_id.as_deref(),
        )
        .await?
    {
        return Err(party_not_found(party_id));
    }

    repository
        .get(party_id)
        .await?
        .ok_or_else(|| party_not_found(party_id))
}

/// Remove a member from a party.
pub async fn leave_party(
    state: &SharedState,
    party_id: &str,
    player_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.leave(party_id, player_id).await? {
        return Err(ServiceError::NotFound(format!(
            "player `{player_id}` is not in party `{party_id}`"
        )));
    }
    Ok(MessageResponse::new("Left party successfully"))
}

/// Dissolve a party, detaching every member.
pub async fn disband_party(
    state: &SharedState,
    party_id: &str,
) -> Result<MessageResponse, ServiceError> {
    let repository = repository(state).await?;
    if !repository.disband(party_id).await? {
        return Err(party_not_found(party_id));
    }
    Ok(MessageResponse::new("Party disbanded successfully"))
}
