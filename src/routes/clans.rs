use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::{
    dao::graph::models::{
        ClanCreatedRecord, ClanJoinRecord, ClanMembershipRecord, ClanRecord, ClanRoleRecord,
        ClanSummaryRecord,
    },
    dto::{
        clans::{
            ClanMemberQuery, ClanMemberUpdateRequest, ClanSearchQuery, CreateClanRequest,
            UpdateClanRequest,
        },
        common::MessageResponse,
    },
    error::AppError,
    services::clan_service,
    state::SharedState,
};

/// Clan endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/clans", post(create_clan))
        .route(
            "/clans/{clan_id}",
            get(get_clan).patch(update_clan).delete(disband_clan),
        )
        .route("/clans/{clan_id}/join", post(join_clan))
        .route("/clans/{clan_id}/leave", delete(leave_clan))
        .route("/clans/{clan_id}/member/{player_id}", patch(update_member))
        .route("/clans/player/{player_id}", get(player_clan))
        .route("/clans/search/{search_term}", get(search_clans))
}

#[utoipa::path(
    post,
    path = "/api/v1/clans",
    tag = "clans",
    request_body = CreateClanRequest,
    responses(
        (status = 201, description = "Clan founded", body = ClanCreatedRecord),
        (status = 404, description = "Owner not found", body = MessageResponse),
        (status = 409, description = "Name or tag already taken", body = MessageResponse)
    )
)]
/// Found a clan with its creator as owner.
pub async fn create_clan(
    State(state): State<SharedState>,
    Json(payload): Json<CreateClanRequest>,
) -> Result<(StatusCode, Json<ClanCreatedRecord>), AppError> {
    payload.validate()?;
    let record = clan_service::create_clan(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    post,
    path = "/api/v1/clans/{clan_id}/join",
    tag = "clans",
    params(
        ("clan_id" = String, Path, description = "Clan identifier"),
        ClanMemberQuery
    ),
    responses(
        (status = 200, description = "Joined the clan", body = ClanJoinRecord),
        (status = 404, description = "Clan or player not found", body = MessageResponse)
    )
)]
/// Join a clan at the bottom of the rank ladder.
pub async fn join_clan(
    State(state): State<SharedState>,
    Path(clan_id): Path<String>,
    Query(query): Query<ClanMemberQuery>,
) -> Result<Json<ClanJoinRecord>, AppError> {
    Ok(Json(
        clan_service::join_clan(&state, &clan_id, &query.player_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/clans/{clan_id}",
    tag = "clans",
    params(("clan_id" = String, Path, description = "Clan identifier")),
    responses(
        (status = 200, description = "Clan with roster", body = ClanRecord),
        (status = 404, description = "Clan not found", body = MessageResponse)
    )
)]
/// Fetch a clan with its member roster.
pub async fn get_clan(
    State(state): State<SharedState>,
    Path(clan_id): Path<String>,
) -> Result<Json<ClanRecord>, AppError> {
    Ok(Json(clan_service::get_clan(&state, &clan_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/clans/player/{player_id}",
    tag = "clans",
    params(("player_id" = String, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Clan the player belongs to", body = ClanMembershipRecord),
        (status = 404, description = "Player is not in a clan", body = MessageResponse)
    )
)]
/// Look up the clan a player currently belongs to.
pub async fn player_clan(
    State(state): State<SharedState>,
    Path(player_id): Path<String>,
) -> Result<Json<ClanMembershipRecord>, AppError> {
    Ok(Json(clan_service::player_clan(&state, &player_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/clans/search/{search_term}",
    tag = "clans",
    params(
        ("search_term" = String, Path, description = "Name or tag fragment"),
        ClanSearchQuery
    ),
    responses((status = 200, description = "Matching clans", body = [ClanSummaryRecord]))
)]
/// Search clans by name or tag fragment.
pub async fn search_clans(
    State(state): State<SharedState>,
    Path(search_term): Path<String>,
    Query(query): Query<ClanSearchQuery>,
) -> Result<Json<Vec<ClanSummaryRecord>>, AppError> {
    Ok(Json(
        clan_service::search_clans(&state, &search_term, query.limit).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/clans/{clan_id}",
    tag = "clans",
    params(("clan_id" = String, Path, description = "Clan identifier")),
    request_body = UpdateClanRequest,
    responses(
        (status = 200, description = "Refreshed clan", body = ClanRecord),
        (status = 404, description = "Clan not found", body = MessageResponse)
    )
)]
/// Apply a partial profile update to a clan.
pub async fn update_clan(
    State(state): State<SharedState>,
    Path(clan_id): Path<String>,
    Json(payload): Json<UpdateClanRequest>,
) -> Result<Json<ClanRecord>, AppError> {
    payload.validate()?;
    Ok(Json(
        clan_service::update_clan(&state, &clan_id, payload).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/clans/{clan_id}/member/{player_id}",
    tag = "clans",
    params(
        ("clan_id" = String, Path, description = "Clan identifier"),
        ("player_id" = String, Path, description = "Player identifier")
    ),
    request_body = ClanMemberUpdateRequest,
    responses(
        (status = 200, description = "Updated membership", body = ClanRoleRecord),
        (status = 400, description = "A role is required", body = MessageResponse),
        (status = 404, description = "Membership not found", body = MessageResponse)
    )
)]
/// Change a member's role, and optionally their rank.
pub async fn update_member(
    State(state): State<SharedState>,
    Path((clan_id, player_id)): Path<(String, String)>,
    Json(payload): Json<ClanMemberUpdateRequest>,
) -> Result<Json<ClanRoleRecord>, AppError> {
    Ok(Json(
        clan_service::update_member(&state, &clan_id, &player_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/clans/{clan_id}/leave",
    tag = "clans",
    params(
        ("clan_id" = String, Path, description = "Clan identifier"),
        ClanMemberQuery
    ),
    responses(
        (status = 200, description = "Left the clan", body = MessageResponse),
        (status = 404, description = "Membership not found", body = MessageResponse)
    )
)]
/// Remove a member from a clan.
pub async fn leave_clan(
    State(state): State<SharedState>,
    Path(clan_id): Path<String>,
    Query(query): Query<ClanMemberQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        clan_service::leave_clan(&state, &clan_id, &query.player_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/clans/{clan_id}",
    tag = "clans",
    params(("clan_id" = String, Path, description = "Clan identifier")),
    responses(
        (status = 200, description = "Clan disbanded", body = MessageResponse),
        (status = 404, description = "Clan not found", body = MessageResponse)
    )
)]
/// Dissolve a clan, detaching every member.
pub async fn disband_clan(
    State(state): State<SharedState>,
    Path(clan_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(clan_service::disband_clan(&state, &clan_id).await?))
}
