use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::{
    dao::graph::models::{
        PartyCreatedRecord, PartyInviteRecord, PartyJoinRecord, PartyRecord, PartySummaryRecord,
    },
    dto::{
        common::MessageResponse,
        parties::{CreatePartyRequest, PartyInviteRequest, PartyMemberQuery, UpdatePartyRequest},
    },
    error::AppError,
    services::party_service,
    state::SharedState,
};

/// Party lifecycle endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/parties", post(create_party))
        .route(
            "/parties/{party_id}",
            get(get_party).patch(update_party).delete(disband_party),
        )
        .route("/parties/{party_id}/invite", post(invite_to_party))
        .route("/parties/{party_id}/join", post(join_party))
        .route("/parties/{party_id}/leave", delete(leave_party))
        .route("/parties/player/{player_id}", get(player_party))
}

#[utoipa::path(
    post,
    path = "/api/v1/parties",
    tag = "parties",
    request_body = CreatePartyRequest,
    responses(
        (status = 201, description = "Party formed", body = PartyCreatedRecord),
        (status = 404, description = "Leader not found", body = MessageResponse)
    )
)]
/// Form a party with its creator as leader.
pub async fn create_party(
    State(state): State<SharedState>,
    Json(payload): Json<CreatePartyRequest>,
) -> Result<(StatusCode, Json<PartyCreatedRecord>), AppError> {
    payload.validate()?;
    let record = party_service::create_party(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    post,
    path = "/api/v1/parties/{party_id}/invite",
    tag = "parties",
    params(("party_id" = String, Path, description = "Party identifier")),
    request_body = PartyInviteRequest,
    responses(
        (status = 201, description = "Invitation recorded", body = PartyInviteRecord),
        (status = 404, description = "Party or invitee not found", body = MessageResponse)
    )
)]
/// Record a party invitation towards a player.
pub async fn invite_to_party(
    State(state): State<SharedState>,
    Path(party_id): Path<String>,
    Json(payload): Json<PartyInviteRequest>,
) -> Result<(StatusCode, Json<PartyInviteRecord>), AppError> {
    payload.validate()?;
    let record = party_service::invite_to_party(&state, &party_id, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    post,
    path = "/api/v1/parties/{party_id}/join",
    tag = "parties",
    params(
        ("party_id" = String, Path, description = "Party identifier"),
        PartyMemberQuery
    ),
    responses(
        (status = 200, description = "Joined the party", body = PartyJoinRecord),
        (status = 404, description = "Party or player not found", body = MessageResponse)
    )
)]
/// Join a party, consuming any pending invitation.
pub async fn join_party(
    State(state): State<SharedState>,
    Path(party_id): Path<String>,
    Query(query): Query<PartyMemberQuery>,
) -> Result<Json<PartyJoinRecord>, AppError> {
    Ok(Json(
        party_service::join_party(&state, &party_id, &query.player_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/parties/{party_id}",
    tag = "parties",
    params(("party_id" = String, Path, description = "Party identifier")),
    responses(
        (status = 200, description = "Party with roster", body = PartyRecord),
        (status = 404, description = "Party not found", body = MessageResponse)
    )
)]
/// Fetch a party with its member roster.
pub async fn get_party(
    State(state): State<SharedState>,
    Path(party_id): Path<String>,
) -> Result<Json<PartyRecord>, AppError> {
    Ok(Json(party_service::get_party(&state, &party_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/parties/player/{player_id}",
    tag = "parties",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Party the player is in", body = PartySummaryRecord),
        (status = 404, description = "Player is not in a party", body = MessageResponse)
    )
)]
/// Look up the party a player currently belongs to.
pub async fn player_party(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<PartySummaryRecord>, AppError> {
    Ok(Json(party_service::player_party(&state, &player_id).await?))
}

#[utoipa::path(
    patch,
    path = "/api/v1/parties/{party_id}",
    tag = "parties",
    params(("party_id" = String, Path, description = "Party identifier")),
    request_body = UpdatePartyRequest,
    responses(
        (status = 200, description = "Refreshed party", body = PartyRecord),
        (status = 404, description = "Party not found", body = MessageResponse)
    )
)]
/// Apply a partial settings update to a party.
pub async fn update_party(
    State(state): State<SharedState>,
    Path(party_id): Path<String>,
    Json(payload): Json<UpdatePartyRequest>,
) -> Result<Json<PartyRecord>, AppError> {
    payload.validate()?;
    Ok(Json(
        party_service::update_party(&state, &party_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/parties/{party_id}/leave",
    tag = "parties",
    params(
        ("party_id" = String, Path, description = "Party identifier"),
        PartyMemberQuery
    ),
    responses(
        (status = 200, description = "Left the party", body = MessageResponse),
        (status = 404, description = "Membership not found", body = MessageResponse)
    )
)]
/// Remove a member from a party.
pub async fn leave_party(
    State(state): State<SharedState>,
    Path(party_id): Path<String>,
    Query(query): Query<PartyMemberQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        party_service::leave_party(&state, &party_id, &query.player_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/parties/{party_id}",
    tag = "parties",
    params(("party_id" = String, Path, description = "Party identifier")),
    responses(
        (status = 200, description = "Party disbanded", body = MessageResponse),
        (status = 404, description = "Party not found", body = MessageResponse)
    )
)]
/// Dissolve a party, detaching every member.
pub async fn disband_party(
    State(state): State<SharedState>,
    Path(party_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        party_service::disband_party(&state, &party_id).await?,
    ))
}
